//! Window-management core of the portfolio desktop plus its leptos shell.
//!
//! The headless half ([`model`], [`reducer`], [`window_frame`], [`window_manager`], [`theme`]) is
//! framework independent and fully testable natively. [`components`] and the runtime context bind
//! it to leptos signals and browser pointer events.

pub mod apps;
pub mod components;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod theme;
pub mod window_frame;
pub mod window_manager;

pub use apps::{AppCategory, AppIcon, PortfolioApp, DESKTOP_APPS};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, Transition};
pub use runtime_context::PortfolioDesktop;
pub use theme::{load_theme, load_theme_context, persist_theme, Theme, ThemeContext, ThemeError};
pub use window_frame::{
    FrameConfig, FrameIntent, FrameMode, InteractionKind, ListenerLease, WindowFrame,
};
pub use window_manager::{FrameView, WindowManager};
