//! `Math.random`-backed randomness.

use platform_host::RandomSource;

#[derive(Debug, Clone, Copy, Default)]
/// Randomness from the JavaScript engine's `Math.random`.
///
/// Native builds have no JS engine and always yield the midpoint `0.5`.
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Math::random()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            0.5
        }
    }
}
