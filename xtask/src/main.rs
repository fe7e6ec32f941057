//! Workspace maintenance and developer workflow commands (`cargo xtask`).
//!
//! The `xtask` binary wraps the web build, verification, and environment setup commands so the
//! repository exposes stable entrypoints through Cargo aliases.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, Stdio};

const SITE_CARGO_FEATURE: &str = "csr";
const WASM_TARGET: &str = "wasm32-unknown-unknown";

fn main() -> ExitCode {
    let root = workspace_root();
    let mut args = env::args().skip(1);

    let Some(cmd) = args.next() else {
        print_usage();
        return ExitCode::from(2);
    };

    let rest: Vec<String> = args.collect();

    let result = match cmd.as_str() {
        "setup-web" => setup_web(&root),
        "dev" => dev(&root, rest),
        "build-web" => build_web(&root, rest),
        "check-web" => check_web(&root),
        "verify" => verify(&root, rest),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown xtask command: {other}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           setup-web           Install wasm target and trunk (if missing)\n\
           dev [...]           Serve the site with trunk (extra args go to `trunk serve`)\n\
           build-web [args]    Build static web bundle with trunk\n\
           check-web           Run site compile checks (CSR native + wasm)\n\
           verify [fast|full]  fmt + tests (fast) plus clippy and docs (full, default)\n"
    );
}

fn setup_web(root: &Path) -> Result<(), String> {
    run(root, "rustup", vec!["target", "add", WASM_TARGET])?;

    if command_available("trunk") {
        println!("trunk already installed");
        return Ok(());
    }

    run(root, "cargo", vec!["install", "trunk"])
}

fn dev(root: &Path, args: Vec<String>) -> Result<(), String> {
    ensure_command(
        "trunk",
        "Install it with `cargo xtask setup-web` (or `cargo install trunk`)",
    )?;

    let mut trunk_args = vec!["serve".to_string(), "index.html".to_string()];
    if !args.iter().any(|arg| arg == "--no-open") {
        trunk_args.push("--open".to_string());
    }
    trunk_args.extend(args.into_iter().filter(|arg| arg != "--no-open"));

    run_trunk(site_dir(root), trunk_args)
}

fn build_web(root: &Path, args: Vec<String>) -> Result<(), String> {
    ensure_command(
        "trunk",
        "Install it with `cargo xtask setup-web` (or `cargo install trunk`)",
    )?;

    run_trunk(site_dir(root), release_build_args(args))
}

/// `trunk build` arguments: always a release build, dist defaulting to `target/trunk-dist`.
fn release_build_args(args: Vec<String>) -> Vec<String> {
    let mut trunk_args = vec![
        "build".to_string(),
        "index.html".to_string(),
        "--release".to_string(),
    ];
    if !args_specify_dist(&args) {
        trunk_args.push("--dist".to_string());
        trunk_args.push("target/trunk-dist".to_string());
    }
    trunk_args.extend(args);
    trunk_args
}

fn check_web(root: &Path) -> Result<(), String> {
    run(
        root,
        "cargo",
        vec!["check", "-p", "site", "--features", SITE_CARGO_FEATURE],
    )?;

    if wasm_target_installed() {
        run(
            root,
            "cargo",
            vec![
                "check",
                "-p",
                "site",
                "--target",
                WASM_TARGET,
                "--features",
                SITE_CARGO_FEATURE,
            ],
        )?;
    } else {
        eprintln!(
            "warn: {WASM_TARGET} target not installed; skipping wasm check (run `cargo xtask setup-web`)"
        );
    }

    Ok(())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum VerifyMode {
    Fast,
    Full,
}

impl VerifyMode {
    fn parse(args: &[String]) -> Result<Self, String> {
        match args.first().map(String::as_str).unwrap_or("full") {
            "fast" => Ok(Self::Fast),
            "full" => Ok(Self::Full),
            other => Err(format!(
                "invalid verify mode `{other}` (expected `fast` or `full`)"
            )),
        }
    }

    /// Cargo invocations run in order; the first failure stops verification.
    fn steps(self) -> Vec<Vec<&'static str>> {
        let mut steps = vec![
            vec!["fmt", "--all", "--", "--check"],
            vec!["test", "--workspace"],
        ];
        if self == Self::Full {
            steps.push(vec![
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ]);
            steps.push(vec!["doc", "--workspace", "--no-deps"]);
        }
        steps
    }
}

fn verify(root: &Path, args: Vec<String>) -> Result<(), String> {
    let mode = VerifyMode::parse(&args)?;
    for step in mode.steps() {
        run(root, "cargo", step)?;
    }
    println!("verify {mode:?}: ok");
    Ok(())
}

fn args_specify_dist(args: &[String]) -> bool {
    args.iter()
        .any(|arg| arg == "--dist" || arg.starts_with("--dist="))
}

fn wasm_target_installed() -> bool {
    let Ok(output) = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
    else {
        return false;
    };

    if !output.status.success() {
        return false;
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .any(|line| line.trim() == WASM_TARGET)
}

fn command_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn ensure_command(program: &str, hint: &str) -> Result<(), String> {
    if command_available(program) {
        Ok(())
    } else {
        Err(format!("required command `{program}` not found. {hint}"))
    }
}

fn run(root: &Path, program: &str, args: Vec<&str>) -> Result<(), String> {
    let owned: Vec<String> = args.into_iter().map(ToString::to_string).collect();
    print_command(program, &owned);
    let status = Command::new(program)
        .current_dir(root)
        .args(&owned)
        .status()
        .map_err(|err| format!("failed to start `{program}`: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("`{program}` exited with status {status}"))
    }
}

fn run_trunk(cwd: PathBuf, args: Vec<String>) -> Result<(), String> {
    print_command("trunk", &args);
    let mut cmd = Command::new("trunk");
    cmd.current_dir(cwd).args(&args);

    // trunk expects "true"/"false" here.
    if env::var("NO_COLOR").as_deref() == Ok("1") {
        cmd.env("NO_COLOR", "true");
    }

    let status = cmd
        .status()
        .map_err(|err| format!("failed to start `trunk`: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("`trunk` exited with status {status}"))
    }
}

fn site_dir(root: &Path) -> PathBuf {
    root.join("crates/site")
}

fn print_command(program: &str, args: &[String]) {
    if args.is_empty() {
        println!("+ {program}");
        return;
    }

    println!("+ {program} {}", args.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_defaults_to_full_with_clippy_and_docs() {
        let mode = VerifyMode::parse(&[]).expect("parse");
        assert_eq!(mode, VerifyMode::Full);
        let steps = mode.steps();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[2][0], "clippy");
    }

    #[test]
    fn fast_verify_skips_clippy() {
        let steps = VerifyMode::parse(&["fast".into()]).expect("parse").steps();
        assert!(steps.iter().all(|step| step[0] != "clippy"));
        assert_eq!(steps[0], vec!["fmt", "--all", "--", "--check"]);
    }

    #[test]
    fn unknown_verify_mode_is_rejected() {
        assert!(VerifyMode::parse(&["slow".into()]).is_err());
    }

    #[test]
    fn dist_detection_handles_split_and_inline_forms() {
        assert!(args_specify_dist(&["--dist".into(), "x".into()]));
        assert!(args_specify_dist(&["--dist=target/custom".into()]));
        assert!(!args_specify_dist(&["--release".into()]));
    }

    #[test]
    fn release_build_defaults_dist_and_keeps_user_args() {
        assert_eq!(
            release_build_args(vec!["--public-url".into(), "/os/".into()]),
            vec![
                "build",
                "index.html",
                "--release",
                "--dist",
                "target/trunk-dist",
                "--public-url",
                "/os/"
            ]
        );
        let custom = release_build_args(vec!["--dist=out".into()]);
        assert_eq!(custom, vec!["build", "index.html", "--release", "--dist=out"]);
    }
}
