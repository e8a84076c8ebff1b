//! podstat core: the request counter store and the read-side views rendered
//! from its snapshots.
//!
//! This crate carries no transport or runtime dependencies. The server crate
//! records hits into [`stats::CounterStore`] and hands snapshots to the
//! formatters in [`render`].
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `PodstatError`/`RenderError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod render;
pub mod stats;

/// Shared result type.
pub use error::{PodstatError, RenderError, Result};
pub use stats::{CounterStore, Snapshot};
