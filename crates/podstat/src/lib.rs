//! Top-level facade crate for podstat.
//!
//! Re-exports the core counters/views and the HTTP server so users can depend on a single crate.

pub mod core {
    pub use podstat_core::*;
}

pub mod server {
    pub use podstat_server::*;
}
