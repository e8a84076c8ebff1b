//! Request instrumentation.
//!
//! Every route is wrapped in [`TrackHitsLayer`] at registration time; the
//! layer feeds the shared counter store before the handler runs.

pub mod track;

pub use track::{TrackHits, TrackHitsLayer};
