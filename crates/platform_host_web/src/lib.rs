//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Every adapter compiles on native targets too, where it degrades to an inert fallback
//! (no storage, fallback viewport, deterministic randomness) so the runtime crate can be tested
//! without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod random;
pub mod storage;
pub mod viewport;

pub use adapters::browser_host_services;
pub use random::MathRandom;
pub use storage::local_prefs::WebPrefsStore;
pub use viewport::browser_viewport_metrics;
