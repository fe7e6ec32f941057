//! Browser entry crate: boot splash, document metadata and the desktop mount point.

mod boot;
mod web_app;

pub use boot::{BootProgress, BootScreen};
pub use web_app::{DesktopEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Installs the panic hook and mounts [`SiteApp`] into `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
