//! Event layer: notification payloads and the handler that consumes them.

pub mod handler;
pub mod payloads;

pub use handler::BlendHandler;
pub use payloads::{
    AssetTransferNotification, AssetTransferOutcome, TokenTransferNotification,
    TokenTransferOutcome,
};
