use std::time::Duration;

use super::{menus::StartMenu, *};
use crate::{model::AppId, reducer::DesktopAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }

    fn label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TaskbarEntry {
    id: AppId,
    title: String,
    minimized: bool,
}

fn taskbar_entries(desktop: &crate::runtime_context::PortfolioDesktop) -> Vec<TaskbarEntry> {
    desktop
        .windows()
        .iter()
        .map(|win| TaskbarEntry {
            id: win.id.clone(),
            title: win.title.clone(),
            minimized: win.minimized,
        })
        .collect()
}

#[component]
fn TaskbarWindowButton(entry: TaskbarEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let TaskbarEntry {
        id,
        title,
        minimized,
    } = entry;
    let icon = apps::icon_for_app_id(&id);
    let activate_id = id.clone();
    let close_id = id.clone();
    let hover_close_id = id;
    let class_name = if minimized {
        "taskbar-window minimized"
    } else {
        "taskbar-window active"
    };
    let tooltip = if minimized {
        format!("{title} (Minimized)")
    } else {
        title.clone()
    };
    let close_label = format!("Close {title}");

    view! {
        <div class="taskbar-window-slot">
            <button
                type="button"
                class=class_name
                title=tooltip
                aria-label=title
                aria-pressed=(!minimized).to_string()
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::RestoreFromTaskbar {
                        id: activate_id.clone(),
                    });
                }
                on:contextmenu=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::CloseWindow { id: close_id.clone() });
                }
            >
                <span class=format!("taskbar-window-icon {}", icon.css_class()) aria-hidden="true">
                    {icon.glyph()}
                </span>
                <Show when=move || !minimized fallback=|| ()>
                    <span class="taskbar-window-indicator" aria-hidden="true"></span>
                </Show>
            </button>
            <button
                type="button"
                class="taskbar-window-close"
                aria-label=close_label
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::CloseWindow {
                        id: hover_close_id.clone(),
                    });
                }
            >
                "×"
            </button>
        </div>
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let start_menu_open = create_rw_signal(false);
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());
    let entries = create_memo(move |_| state.with(taskbar_entries));

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if start_menu_open.get_untracked() {
            ev.prevent_default();
            start_menu_open.set(false);
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <footer class="taskbar" style=format!("height:{TASKBAR_HEIGHT_PX}px;")>
            <button
                type="button"
                class=move || {
                    if start_menu_open.get() { "taskbar-start open" } else { "taskbar-start" }
                }
                aria-haspopup="menu"
                aria-expanded=move || start_menu_open.get().to_string()
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    start_menu_open.update(|open| *open = !*open);
                }
            >
                <span class="taskbar-start-dot" aria-hidden="true"></span>
                "Start"
            </button>
            <div class="taskbar-separator" aria-hidden="true"></div>

            <div class="taskbar-windows" role="toolbar" aria-label="Open windows">
                <For each=move || entries.get() key=|entry| entry.clone() let:entry>
                    <TaskbarWindowButton entry=entry />
                </For>
                <Show when=move || entries.with(Vec::is_empty) fallback=|| ()>
                    <span class="taskbar-empty">"No apps running - Click Start to open an app"</span>
                </Show>
            </div>

            <div class="taskbar-tray">
                <Show when=move || !entries.with(Vec::is_empty) fallback=|| ()>
                    <span class="taskbar-badge">
                        {move || apps::running_apps_label(entries.with(Vec::len))}
                    </span>
                </Show>
                <div class="taskbar-separator" aria-hidden="true"></div>
                <time class="taskbar-clock">{move || clock_now.get().label()}</time>
            </div>

            <StartMenu open=start_menu_open />
        </footer>
    }
}
