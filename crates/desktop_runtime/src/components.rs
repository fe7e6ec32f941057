//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod taskbar;
mod window;

use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};
use crate::{
    apps::{self, PortfolioApp},
    model::{PointerPosition, ResizeEdge, TASKBAR_HEIGHT_PX},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
fn DesktopIcon(app: PortfolioApp) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icon = app.icon();

    view! {
        <button
            type="button"
            class="desktop-icon"
            data-app-id=app.app_id_str()
            on:click=move |_| runtime.open_app(app)
        >
            <span class=format!("desktop-icon-glyph {}", icon.css_class()) aria-hidden="true">
                {icon.glyph()}
            </span>
            <span class="desktop-icon-label">{app.title()}</span>
        </button>
    }
}

#[component]
/// Renders the full desktop: icon grid, window layer and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    runtime.refresh_viewport();
    let resize_listener = window_event_listener(ev::resize, move |_| runtime.refresh_viewport());
    on_cleanup(move || resize_listener.remove());

    let grid_style = move || {
        format!(
            "grid-template-columns:repeat({}, minmax(0, 1fr));",
            apps::desktop_grid_columns(runtime.viewport.get().width)
        )
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-theme=move || runtime.theme.get().theme().as_str()
            data-reduced-motion=move || runtime.viewport.get().reduced_motion.to_string()
            style=format!("--taskbar-height:{TASKBAR_HEIGHT_PX}px;")
        >
            <div class="desktop-backdrop" aria-hidden="true"></div>
            <nav class="desktop-icon-grid" style=grid_style aria-label="Applications">
                <For each=move || apps::DESKTOP_APPS key=|app| app.app_id_str() let:app>
                    <DesktopIcon app=app />
                </For>
            </nav>

            <div class="desktop-window-layer">
                <For
                    each=move || state.with(|desktop| {
                        desktop.windows().iter().map(|win| win.id.clone()).collect::<Vec<_>>()
                    })
                    key=|id| id.clone()
                    let:id
                >
                    <DesktopWindow window_id=id />
                </For>
            </div>

            <Taskbar />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Primary-button mouse press or primary touch/pen contact.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}
