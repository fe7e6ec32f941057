use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host_web::browser_host_services;

use crate::boot::{BootScreen, BOOT_DURATION};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let booting = create_rw_signal(true);

    if let Ok(timer) = set_timeout_with_handle(move || booting.set(false), BOOT_DURATION) {
        on_cleanup(move || timer.clear());
    }

    view! {
        <Title text="Portfolio OS" />
        <Meta name="description" content="A desktop-style developer portfolio." />

        <main class="site-root">
            <Show when=move || !booting.get() fallback=|| view! { <BootScreen /> }>
                <DesktopEntry />
            </Show>
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=browser_host_services()>
            <DesktopShell />
        </DesktopProvider>
    }
}
