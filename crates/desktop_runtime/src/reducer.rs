//! Reducer actions and transition logic for the desktop's window collection.
//!
//! Every operation on an unknown window id is a no-op. Instead of an error the reducer reports
//! [`Transition::Ignored`], which callers may observe but never have to handle.

use crate::model::{AppId, DesktopState, WindowRecord};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction<C> {
    /// Open the window for `id`, or raise and unminimize it if it is already open.
    OpenWindow {
        /// Application/window identity.
        id: AppId,
        /// Title used if a new window is created.
        title: String,
        /// Opaque content handle used if a new window is created.
        content: C,
    },
    /// Remove a window from the desktop.
    CloseWindow {
        /// Window to close.
        id: AppId,
    },
    /// Hide a window while keeping it in the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        id: AppId,
    },
    /// Raise a window above every other window.
    BringToFront {
        /// Window to raise.
        id: AppId,
    },
    /// Taskbar click: unminimize and raise, or just raise when already visible.
    RestoreFromTaskbar {
        /// Window associated with the taskbar button.
        id: AppId,
    },
}

impl<C> DesktopAction<C> {
    /// The window this action targets.
    pub fn target(&self) -> &AppId {
        match self {
            Self::OpenWindow { id, .. }
            | Self::CloseWindow { id }
            | Self::MinimizeWindow { id }
            | Self::BringToFront { id }
            | Self::RestoreFromTaskbar { id } => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Observable outcome of a reducer step.
pub enum Transition {
    /// A new window was appended with the given z-index.
    Created {
        /// Stacking value assigned to the new window.
        z_index: u32,
    },
    /// An existing window was raised (and unminimized where applicable).
    Raised {
        /// Stacking value assigned to the window.
        z_index: u32,
    },
    /// A window was flagged minimized (or already was).
    Minimized,
    /// A window was removed.
    Closed,
    /// No window matched the id; nothing changed.
    Ignored,
}

impl Transition {
    /// The z-index assigned by this step, if it touched stacking.
    pub fn z_index(self) -> Option<u32> {
        match self {
            Self::Created { z_index } | Self::Raised { z_index } => Some(z_index),
            _ => None,
        }
    }
}

/// Applies a [`DesktopAction`] to the desktop state.
///
/// This is the only place the window collection and the z-order counter change. Each call that
/// affects stacking draws exactly one value from the counter.
pub fn reduce_desktop<C>(state: &mut DesktopState<C>, action: DesktopAction<C>) -> Transition {
    match action {
        DesktopAction::OpenWindow { id, title, content } => {
            if state.contains(&id) {
                return raise(state, &id, true);
            }
            let z_index = state.z_order.advance();
            state.windows.push(WindowRecord {
                id,
                title,
                content,
                minimized: false,
                z_index,
            });
            Transition::Created { z_index }
        }
        DesktopAction::CloseWindow { id } => {
            let before = state.windows.len();
            state.windows.retain(|w| w.id != id);
            if state.windows.len() == before {
                Transition::Ignored
            } else {
                Transition::Closed
            }
        }
        DesktopAction::MinimizeWindow { id } => match state.window_mut(&id) {
            Some(window) => {
                window.minimized = true;
                Transition::Minimized
            }
            None => Transition::Ignored,
        },
        DesktopAction::BringToFront { id } => raise(state, &id, false),
        DesktopAction::RestoreFromTaskbar { id } => {
            let minimized = match state.window(&id) {
                Some(window) => window.minimized,
                None => return Transition::Ignored,
            };
            raise(state, &id, minimized)
        }
    }
}

fn raise<C>(state: &mut DesktopState<C>, id: &AppId, unminimize: bool) -> Transition {
    if !state.contains(id) {
        return Transition::Ignored;
    }
    let z_index = state.z_order.advance();
    if let Some(window) = state.window_mut(id) {
        window.z_index = z_index;
        if unminimize {
            window.minimized = false;
        }
    }
    Transition::Raised { z_index }
}

impl<C> DesktopState<C> {
    /// Opens `id`, or raises and unminimizes the existing window with that id.
    pub fn open_window(
        &mut self,
        id: impl Into<AppId>,
        title: impl Into<String>,
        content: C,
    ) -> Transition {
        reduce_desktop(
            self,
            DesktopAction::OpenWindow {
                id: id.into(),
                title: title.into(),
                content,
            },
        )
    }

    /// Removes `id` from the desktop.
    pub fn close_window(&mut self, id: &AppId) -> Transition {
        reduce_desktop(self, DesktopAction::CloseWindow { id: id.clone() })
    }

    /// Flags `id` minimized.
    pub fn minimize_window(&mut self, id: &AppId) -> Transition {
        reduce_desktop(self, DesktopAction::MinimizeWindow { id: id.clone() })
    }

    /// Raises `id` without touching its minimized flag.
    pub fn bring_to_front(&mut self, id: &AppId) -> Transition {
        reduce_desktop(self, DesktopAction::BringToFront { id: id.clone() })
    }

    /// Taskbar activation for `id`.
    pub fn restore_from_taskbar(&mut self, id: &AppId) -> Transition {
        reduce_desktop(self, DesktopAction::RestoreFromTaskbar { id: id.clone() })
    }
}
