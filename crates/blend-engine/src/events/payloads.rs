//! Notification payloads consumed by the blend subsystem, and the outcomes
//! its handlers report.
//!
//! The engine is a subscriber: both payloads mirror transfer events emitted
//! by external contracts, not commands addressed to the engine.

use blend_types::{AccountName, AssetId, CollectionName, TemplateId, TokenAmount};
use serde::{Deserialize, Serialize};

/// A native-currency transfer observed on the host ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenTransferNotification {
    pub from: AccountName,
    pub to: AccountName,
    pub amount: TokenAmount,
    /// Deposit instruction (a collection name) unless the sender identifies
    /// the transfer as sale proceeds or a backing transfer.
    pub memo: String,
}

/// An asset transfer observed from the external digital-asset registry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssetTransferNotification {
    pub from: AccountName,
    pub to: AccountName,
    pub assets: Vec<AssetId>,
    /// Numeric target-template identifier selecting the recipe to execute.
    pub memo: String,
}

/// What a currency-transfer notification resulted in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TokenTransferOutcome {
    /// Self-send, wrong recipient, or a benign backing transfer from the
    /// asset registry. No state changed.
    Ignored,
    /// A deposit was converted into resource units for a collection.
    Deposited {
        collection: CollectionName,
        credited_bytes: u64,
    },
    /// Sale proceeds drained the pending withdrawal and were forwarded.
    ProceedsForwarded {
        to: AccountName,
        amount: TokenAmount,
    },
}

/// What an asset-transfer notification resulted in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AssetTransferOutcome {
    /// Transfer originated from the engine's own account. No state changed.
    Ignored,
    /// A blend executed: one mint, all inputs burned, resource debited.
    Blended {
        collection: CollectionName,
        target: TemplateId,
        minted_to: AccountName,
        burned: usize,
        debited_bytes: u64,
    },
}
