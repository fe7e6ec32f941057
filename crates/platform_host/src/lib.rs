//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services the portfolio desktop consumes:
//! lightweight preference storage, viewport metrics, and a randomness source for window
//! placement. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod random;
pub mod storage;
pub mod viewport;

pub use host::HostServices;
pub use random::{RandomSource, SequenceRandom};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture};
pub use viewport::ViewportMetrics;
