//! Ports (hexagonal architecture boundaries) for the blend subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::BlendApi;
pub use outbound::{Action, ActionDispatcher, AssetRegistry, ResourceMarket};
