//! Host service bundle handed to the desktop runtime by the entry layer.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{NoopPrefsStore, PrefsStore, RandomSource, SequenceRandom, ViewportMetrics};

/// Injected service bundle consumed by the desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight preference store (theme flag).
    pub prefs: Rc<dyn PrefsStore>,
    /// Randomness for window spawn jitter.
    pub random: Rc<RefCell<dyn RandomSource>>,
    /// Reads the current viewport size.
    pub viewport: fn() -> ViewportMetrics,
}

impl HostServices {
    /// Bundle with no persistence, zero jitter and the fallback viewport.
    pub fn headless() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            random: Rc::new(RefCell::new(SequenceRandom::constant(0.0))),
            viewport: ViewportMetrics::default,
        }
    }

    /// Current viewport as reported by the host.
    pub fn viewport_metrics(&self) -> ViewportMetrics {
        (self.viewport)()
    }

    /// Runs `f` with exclusive access to the host randomness source.
    pub fn with_random<R>(&self, f: impl FnOnce(&mut dyn RandomSource) -> R) -> R {
        let mut random = self.random.borrow_mut();
        f(&mut *random)
    }
}

impl fmt::Debug for HostServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostServices")
            .field("viewport", &self.viewport_metrics())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_bundle_is_deterministic() {
        let host = HostServices::headless();
        assert_eq!(host.viewport_metrics(), ViewportMetrics::default());
        assert_eq!(host.with_random(|random| random.next_unit()), 0.0);
        assert_eq!(host.with_random(|random| random.next_unit()), 0.0);
    }
}
