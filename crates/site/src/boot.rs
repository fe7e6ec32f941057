//! Start-up splash shown before the desktop mounts.

use std::time::Duration;

use leptos::*;

/// How long the splash stays up before the desktop replaces it.
pub const BOOT_DURATION: Duration = Duration::from_millis(3000);
const TICK: Duration = Duration::from_millis(45);
const PROGRESS_PER_TICK: f64 = 1.5;

const BOOT_MESSAGES: [&str; 6] = [
    "Initializing system",
    "Loading developer.exe",
    "Mounting portfolio filesystem",
    "Starting creative processes",
    "Enabling dark mode magic",
    "Ready to showcase awesome projects",
];

#[derive(Debug, Clone, Copy, PartialEq)]
/// Progress bar state of the splash.
pub struct BootProgress {
    percent: f64,
    message_index: Option<usize>,
}

impl Default for BootProgress {
    fn default() -> Self {
        Self {
            percent: 0.0,
            message_index: None,
        }
    }
}

impl BootProgress {
    /// Advances one timer tick. The message only moves while its index is in range.
    pub fn tick(&mut self) {
        let next = self.percent + PROGRESS_PER_TICK;
        let index = ((next / 100.0) * BOOT_MESSAGES.len() as f64).floor() as usize;
        if index < BOOT_MESSAGES.len() {
            self.message_index = Some(index);
        }
        self.percent = next.min(100.0);
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn message(&self) -> &'static str {
        self.message_index
            .map(|index| BOOT_MESSAGES[index])
            .unwrap_or("Initializing...")
    }
}

/// Dots cycle: "", ".", "..", "...", "".
fn next_dots(dots: &str) -> String {
    if dots.len() >= 3 {
        String::new()
    } else {
        format!("{dots}.")
    }
}

#[component]
pub fn BootScreen() -> impl IntoView {
    let progress = create_rw_signal(BootProgress::default());
    let dots = create_rw_signal(String::new());

    if let Ok(interval) = set_interval_with_handle(move || progress.update(BootProgress::tick), TICK)
    {
        on_cleanup(move || interval.clear());
    }
    if let Ok(interval) = set_interval_with_handle(
        move || dots.update(|dots| *dots = next_dots(dots)),
        Duration::from_millis(500),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="boot-screen" role="status" aria-live="polite">
            <h1 class="boot-title">"Portfolio OS"</h1>
            <p class="boot-message">{move || format!("{}{}", progress.get().message(), dots.get())}</p>
            <div class="boot-progress-track">
                <div
                    class="boot-progress-bar"
                    style=move || format!("width:{}%;", progress.get().percent())
                ></div>
            </div>
            <span class="boot-percent">{move || format!("{}%", progress.get().percent().round())}</span>
        </div>
    }
}
