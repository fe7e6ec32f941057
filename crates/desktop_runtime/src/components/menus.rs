use super::*;
use crate::{apps::AppCategory, theme::Theme};

/// External profile links listed under the start menu's quick actions, as `(label, url)`.
const QUICK_LINKS: [(&str, &str); 2] = [
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
];

const SHUTDOWN_PROMPT: &str = "Are you sure you want to shut down the portfolio?";

/// Asks for confirmation, then closes the browser tab. Browsers ignore `close()` on tabs the
/// page did not open itself, so a refusal only gets logged.
fn shut_down() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if !window.confirm_with_message(SHUTDOWN_PROMPT).unwrap_or(false) {
        return;
    }
    if let Err(err) = window.close() {
        logging::warn!("shutdown refused by the browser: {err:?}");
    }
}

#[component]
pub(super) fn StartMenu(open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = create_rw_signal(String::new());
    let category = create_rw_signal(None::<AppCategory>);
    let entries = create_memo(move |_| {
        query.with(|query| apps::start_menu_apps(query, category.get()))
    });
    let close = move || {
        open.set(false);
        query.set(String::new());
        category.set(None);
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="start-menu-backdrop" on:mousedown=move |_| close()></div>
            <div id="start-menu" class="start-menu" role="menu" aria-label="Start menu">
                <input
                    type="search"
                    class="start-menu-search"
                    placeholder="Search apps..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <div class="start-menu-categories" role="tablist">
                    <button
                        type="button"
                        role="tab"
                        aria-selected=move || category.get().is_none().to_string()
                        on:click=move |_| category.set(None)
                    >
                        "All"
                    </button>
                    {AppCategory::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    aria-selected=move || (category.get() == Some(tab)).to_string()
                                    on:click=move |_| category.set(Some(tab))
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <ul class="start-menu-apps">
                    <For each=move || entries.get() key=|app| app.app_id_str() let:app>
                        <li>
                            <button
                                type="button"
                                role="menuitem"
                                class="start-menu-app"
                                on:click=move |_| {
                                    runtime.open_app(app);
                                    close();
                                }
                            >
                                <span class=format!("start-menu-app-icon {}", app.icon().css_class())>
                                    {app.icon().glyph()}
                                </span>
                                <span class="start-menu-app-title">{app.title()}</span>
                                <span class="start-menu-app-description">{app.description()}</span>
                                <Show when=move || app.is_new() fallback=|| ()>
                                    <span class="start-menu-badge">"New"</span>
                                </Show>
                            </button>
                        </li>
                    </For>
                    <Show when=move || entries.with(Vec::is_empty) fallback=|| ()>
                        <li class="start-menu-empty">"No apps match your search"</li>
                    </Show>
                </ul>
                <div class="start-menu-actions">
                    <button
                        type="button"
                        role="menuitem"
                        on:click=move |_| runtime.toggle_theme()
                    >
                        {move || match runtime.theme.get().theme() {
                            Theme::Dark => "Light theme",
                            Theme::Light => "Dark theme",
                        }}
                    </button>
                    {QUICK_LINKS
                        .into_iter()
                        .map(|(label, url)| {
                            view! {
                                <a
                                    role="menuitem"
                                    class="start-menu-link"
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    on:click=move |_| close()
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <footer class="start-menu-footer">
                    <button
                        type="button"
                        class="start-menu-shutdown"
                        role="menuitem"
                        on:click=move |_| {
                            close();
                            shut_down();
                        }
                    >
                        "Shutdown"
                    </button>
                </footer>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_links_are_labelled_absolute_https_urls() {
        let labels: Vec<_> = QUICK_LINKS.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["GitHub", "LinkedIn"]);
        assert!(QUICK_LINKS.iter().all(|(_, url)| url.starts_with("https://")));
    }
}
