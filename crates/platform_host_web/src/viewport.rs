//! Browser viewport queries.

use platform_host::ViewportMetrics;

#[cfg(target_arch = "wasm32")]
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Reads the current browser viewport size and reduced-motion preference.
///
/// Falls back to [`ViewportMetrics::default`] when no browser window is available (native builds,
/// workers).
pub fn browser_viewport_metrics() -> ViewportMetrics {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let fallback = ViewportMetrics::default();
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.width);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.height);
            let reduced_motion = window
                .match_media(REDUCED_MOTION_QUERY)
                .ok()
                .flatten()
                .map(|query| query.matches())
                .unwrap_or(false);

            return ViewportMetrics {
                width,
                height,
                reduced_motion,
            };
        }
    }

    ViewportMetrics::default()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_build_reports_fallback_viewport() {
        assert_eq!(browser_viewport_metrics(), ViewportMetrics::default());
    }
}
