use super::*;
use crate::{
    model::AppId,
    window_frame::{FrameIntent, FrameMode, ListenerLease, WindowFrame},
    window_manager::FrameView,
};

/// Stacking offset that keeps every window above the icon grid.
const WINDOW_Z_FLOOR: u32 = 1000;

/// CSS `z-index` for a window's stacking value. Strictly increasing in `z_index`.
fn rendered_z_index(z_index: u32) -> u32 {
    WINDOW_Z_FLOOR.saturating_add(z_index)
}

fn window_style(view: &FrameView<PortfolioApp>) -> String {
    view.geometry
        .map(|rect| {
            format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                rect.x,
                rect.y,
                rect.w,
                rect.h,
                rendered_z_index(view.z_index)
            )
        })
        .unwrap_or_default()
}

/// Subscribes the global pointer listeners that drive one drag or resize of `window_id`.
///
/// The returned lease removes them again. The frame holds it for exactly as long as the
/// interaction lasts.
fn acquire_pointer_lease(runtime: DesktopRuntimeContext, window_id: AppId) -> ListenerLease {
    let move_id = window_id.clone();
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        runtime.with_frame(&move_id, |frame| frame.pointer_moved(pointer));
    });
    let cancel_id = window_id.clone();
    let up_listener = window_event_listener(ev::pointerup, move |_| {
        runtime.with_frame(&window_id, WindowFrame::end_interaction);
    });
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        runtime.with_frame(&cancel_id, WindowFrame::end_interaction);
    });

    ListenerLease::new(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
    })
}

#[component]
pub(super) fn DesktopWindow(window_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(window_id);

    let frame_view = create_memo(move |_| {
        id.with_value(|id| {
            runtime.frames.with(|manager| {
                runtime
                    .state
                    .with(|desktop| desktop.window(id).map(|window| manager.view_of(window)))
            })
        })
    });
    let is_topmost = Signal::derive(move || {
        id.with_value(|id| {
            runtime
                .state
                .with(|desktop| desktop.topmost_visible().map(|w| &w.id == id))
                .unwrap_or(false)
        })
    });

    on_cleanup(move || {
        id.try_with_value(|id| runtime.with_frame(id, WindowFrame::end_interaction));
    });

    let focus = move |_: web_sys::PointerEvent| {
        if !is_topmost.get_untracked() {
            id.with_value(|id| runtime.forward_intent(id, FrameIntent::BringToFront));
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        let pointer = pointer_from_pointer_event(&ev);
        id.with_value(|id| {
            let lease = acquire_pointer_lease(runtime, id.clone());
            let intent = runtime
                .with_frame(id, |frame| frame.begin_drag(pointer, lease))
                .flatten();
            match intent {
                Some(intent) => runtime.forward_intent(id, intent),
                // Maximized and narrow frames do not drag but still come to front.
                None if !is_topmost.get_untracked() => {
                    runtime.forward_intent(id, FrameIntent::BringToFront);
                }
                None => {}
            }
        });
    };
    let toggle_maximize = move || {
        id.with_value(|id| runtime.with_frame(id, WindowFrame::toggle_maximize));
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        id.with_value(|id| runtime.with_frame(id, WindowFrame::title_double_clicked));
    };
    let minimize = move || {
        id.with_value(|id| {
            if let Some(intent) = runtime.with_frame(id, WindowFrame::request_minimize) {
                runtime.forward_intent(id, intent);
            }
        });
    };
    let close = move || {
        id.with_value(|id| {
            let intent = runtime
                .with_frame(id, WindowFrame::request_close)
                .unwrap_or(FrameIntent::Close);
            runtime.forward_intent(id, intent);
        });
    };

    let visible = move || {
        frame_view.with(|v| v.as_ref().is_some_and(|v| v.geometry.is_some()))
    };
    let mode = Signal::derive(move || frame_view.with(|v| v.as_ref().map(|v| v.mode)));
    let maximized = move || mode.get() == Some(FrameMode::Maximized);
    let narrow = move || mode.get() == Some(FrameMode::Narrow);
    let style = move || {
        frame_view.with(|v| v.as_ref().map(window_style).unwrap_or_default())
    };
    let class = move || {
        let mode_class = match mode.get() {
            Some(FrameMode::Maximized) => " maximized",
            Some(FrameMode::Narrow) => " narrow",
            _ => "",
        };
        let interacting = frame_view.with(|v| v.as_ref().is_some_and(|v| v.interacting));
        let focused = is_topmost.get();
        format!(
            "desktop-window{}{}{}",
            mode_class,
            if interacting { " interacting" } else { "" },
            if focused { " focused" } else { "" }
        )
    };
    let title = move || {
        frame_view.with(|v| v.as_ref().map(|v| v.title.clone()).unwrap_or_default())
    };
    let content = frame_view.with_untracked(|v| v.as_ref().map(|v| v.content));

    view! {
        <Show when=visible fallback=|| ()>
            <section
                class=class
                style=style
                on:pointerdown=focus
                role="dialog"
                aria-label=title
                data-window-id=move || id.get_value().to_string()
            >
                <header class="titlebar" on:pointerdown=begin_move on:dblclick=titlebar_double_click>
                    <span class="titlebar-title">{title}</span>
                    <div class="titlebar-controls">
                        <Show when=move || !narrow() fallback=|| ()>
                            <button
                                aria-label="Minimize window"
                                on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    minimize();
                                }
                            >
                                "−"
                            </button>
                            <button
                                aria-label=move || {
                                    if maximized() { "Restore window" } else { "Maximize window" }
                                }
                                title=move || if maximized() { "Restore" } else { "Maximize" }
                                on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    toggle_maximize();
                                }
                            >
                                {move || if maximized() { "❐" } else { "□" }}
                            </button>
                        </Show>
                        <button
                            class="titlebar-close"
                            aria-label="Close window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                close();
                            }
                        >
                            "×"
                        </button>
                    </div>
                </header>
                <div class="window-body">{move || content.map(PortfolioApp::view)}</div>
                <Show
                    when=move || frame_view.with(|v| v.as_ref().is_some_and(|v| v.resize_handles))
                    fallback=|| ()
                >
                    {ResizeEdge::ALL
                        .into_iter()
                        .map(|edge| {
                            view! { <WindowResizeHandle window_id=id.get_value() edge=edge /> }
                        })
                        .collect_view()}
                </Show>
            </section>
        </Show>
    }
}

#[component]
fn WindowResizeHandle(window_id: AppId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));
    let id = store_value(window_id);

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        let pointer = pointer_from_pointer_event(&ev);
        id.with_value(|id| {
            let lease = acquire_pointer_lease(runtime, id.clone());
            if let Some(intent) = runtime
                .with_frame(id, |frame| frame.begin_resize(edge, pointer, lease))
                .flatten()
            {
                runtime.forward_intent(id, intent);
            }
        });
    };

    view! {
        <div
            class=class_name
            data-direction=edge.direction()
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}
