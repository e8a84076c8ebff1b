//! Process-wide request counters.
//!
//! Writers call [`CounterStore::record_hit`]; readers only ever see an owned
//! [`Snapshot`] copy.

pub mod snapshot;
pub mod store;

pub use snapshot::Snapshot;
pub use store::CounterStore;
