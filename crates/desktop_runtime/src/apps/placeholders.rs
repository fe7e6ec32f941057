//! Placeholder panels mounted inside each portfolio window.
//!
//! The desktop treats window content as opaque; these views only give every app a recognizable
//! body. The live panels (system monitor, settings) read the runtime context.

use leptos::*;

use super::PortfolioApp;
use crate::{components::use_desktop_runtime, theme::Theme};

/// Mounts the placeholder view for `app`.
pub(super) fn mount_placeholder(app: PortfolioApp) -> View {
    match app {
        PortfolioApp::SystemMonitor => view! { <SystemMonitorPanel /> }.into_view(),
        PortfolioApp::Settings => view! { <SettingsPanel /> }.into_view(),
        PortfolioApp::Terminal => view! { <TerminalPanel /> }.into_view(),
        other => view! { <StaticPanel app=other /> }.into_view(),
    }
}

fn static_sections(app: PortfolioApp) -> &'static [&'static str] {
    match app {
        PortfolioApp::About => &["Background", "Skills", "Interests"],
        PortfolioApp::Projects => &["Featured", "Open source", "Experiments"],
        PortfolioApp::Resume => &["Experience", "Education", "Certifications"],
        PortfolioApp::Contact => &["Email", "GitHub", "LinkedIn"],
        PortfolioApp::AiAssistant => &["Conversation", "Suggested prompts"],
        PortfolioApp::AiTools => &["Summarizer", "Code explainer", "Idea generator"],
        PortfolioApp::UiCustomizer => &["Accent color", "Wallpaper", "Icon size"],
        PortfolioApp::Achievements => &["Unlocked", "In progress"],
        PortfolioApp::MiniGames => &[
            "Code Snake",
            "Memory Match",
            "Typing Challenge",
            "Bug Squasher",
            "Algorithm Quiz",
            "Reaction Time",
        ],
        PortfolioApp::Terminal | PortfolioApp::SystemMonitor | PortfolioApp::Settings => &[],
    }
}

#[component]
fn StaticPanel(app: PortfolioApp) -> impl IntoView {
    view! {
        <div class=format!("app-shell app-{}", app.app_id_str())>
            <header class="app-header">
                <h2>{app.title()}</h2>
                <p>{app.description()}</p>
            </header>
            <ul class="app-sections">
                {static_sections(app)
                    .iter()
                    .map(|section| view! { <li class="app-section">{*section}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn TerminalPanel() -> impl IntoView {
    view! {
        <div class="app-shell app-terminal">
            <pre class="terminal-screen">
                "visitor@portfolio:~$ help\n"
                "Available commands: about, projects, resume, contact, clear\n"
                "visitor@portfolio:~$ "
            </pre>
        </div>
    }
}

#[component]
fn SystemMonitorPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open_windows = move || runtime.state.with(|desktop| desktop.len());
    let minimized = move || {
        runtime
            .state
            .with(|desktop| desktop.windows().iter().filter(|w| w.minimized).count())
    };
    let viewport = move || {
        let metrics = runtime.viewport.get();
        format!("{} × {}", metrics.width, metrics.height)
    };

    view! {
        <div class="app-shell app-system-monitor">
            <dl class="app-metrics">
                <dt>"Open windows"</dt>
                <dd>{open_windows}</dd>
                <dt>"Minimized"</dt>
                <dd>{minimized}</dd>
                <dt>"Viewport"</dt>
                <dd>{viewport}</dd>
                <dt>"Next stacking value"</dt>
                <dd>{move || runtime.state.with(|desktop| desktop.next_z_index())}</dd>
            </dl>
        </div>
    }
}

#[component]
fn SettingsPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let is_dark = move || runtime.theme.get().is_dark();

    view! {
        <div class="app-shell app-settings">
            <h2>"Appearance"</h2>
            <div class="settings-row" role="radiogroup" aria-label="Theme">
                <button
                    type="button"
                    role="radio"
                    aria-checked=move || is_dark().to_string()
                    on:click=move |_| runtime.set_theme(Theme::Dark)
                >
                    "Dark"
                </button>
                <button
                    type="button"
                    role="radio"
                    aria-checked=move || (!is_dark()).to_string()
                    on:click=move |_| runtime.set_theme(Theme::Light)
                >
                    "Light"
                </button>
            </div>
            <p class="settings-note">
                {move || {
                    if runtime.viewport.get().reduced_motion {
                        "Reduced motion is enabled by your system."
                    } else {
                        "Animations follow your system motion preference."
                    }
                }}
            </p>
        </div>
    }
}
