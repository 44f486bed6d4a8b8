//! Adapters: in-memory implementations of the outbound ports.
//!
//! Production deployments bind these ports to the host ledger's tables and
//! deferred-action queue; the in-memory implementations here back fixtures
//! and tests, which have no other window onto fire-and-forget effects.

pub mod dispatcher;
pub mod market;
pub mod registry;

pub use dispatcher::{NoOpDispatcher, RecordingDispatcher};
pub use market::FixedRateMarket;
pub use registry::InMemoryAssetRegistry;
