//! podstat server library entry.
//!
//! Wires config, shared state, per-route instrumentation and the HTTP
//! handlers into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
pub mod ui;
