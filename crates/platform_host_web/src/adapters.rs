//! Composition of the browser host bundle.

use std::{cell::RefCell, rc::Rc};

use platform_host::HostServices;

use crate::{browser_viewport_metrics, MathRandom, WebPrefsStore};

/// Builds the [`HostServices`] bundle for browser builds.
///
/// `localStorage` prefs, `Math.random` jitter and `window.innerWidth/innerHeight` viewport
/// metrics. On native targets each adapter falls back to its inert behavior.
pub fn browser_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(WebPrefsStore),
        random: Rc::new(RefCell::new(MathRandom)),
        viewport: browser_viewport_metrics,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;
    use platform_host::{RandomSource, ViewportMetrics};

    use super::*;

    #[test]
    fn native_bundle_uses_inert_fallbacks() {
        let host = browser_host_services();
        assert_eq!(host.viewport_metrics(), ViewportMetrics::default());
        assert_eq!(host.with_random(|random| random.next_unit()), 0.5);
        assert_eq!(block_on(host.prefs.load_pref("portfolio-theme")), Ok(None));
    }
}
