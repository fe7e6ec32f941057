//! Viewport metrics reported by the host environment.

use serde::{Deserialize, Serialize};

/// Fallback viewport width used when the host cannot report one.
pub const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
/// Fallback viewport height used when the host cannot report one.
pub const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Size of the visible browser viewport plus the user's motion preference.
pub struct ViewportMetrics {
    /// Inner width in CSS pixels.
    pub width: i32,
    /// Inner height in CSS pixels, including the area the taskbar occupies.
    pub height: i32,
    /// Whether the user asked the platform to minimize non-essential motion.
    pub reduced_motion: bool,
}

impl ViewportMetrics {
    /// Builds metrics for a `width` by `height` viewport with motion enabled.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            reduced_motion: false,
        }
    }

    /// Height left for windows once a bottom strip of `reserved` pixels is excluded.
    pub fn usable_height(self, reserved: i32) -> i32 {
        (self.height - reserved).max(0)
    }
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self::new(FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT)
    }
}
