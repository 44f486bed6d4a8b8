//! Outbound (driven) ports for the blend subsystem.
//!
//! These traits define the engine's dependencies on external collaborators:
//! the digital-asset registry, the resource exchange, and the host ledger's
//! deferred-action mechanism.

use crate::domain::BlendError;
use blend_types::{AccountName, AssetId, CollectionName, TemplateId, TemplateInfo, TokenAmount};
use serde::{Deserialize, Serialize};

/// Read-only view of the external digital-asset registry.
///
/// Authorization lists and supply counters can change between calls; the
/// engine re-reads them on every use and caches nothing.
pub trait AssetRegistry {
    /// Returns true if the collection exists.
    fn collection_exists(&self, collection: &CollectionName) -> bool;

    /// Returns the collection's authorized-account list.
    ///
    /// # Errors
    /// - `CollectionNotFound`: the collection does not exist
    fn authorized_accounts(
        &self,
        collection: &CollectionName,
    ) -> Result<Vec<AccountName>, BlendError>;

    /// Returns schema and supply information for a template.
    ///
    /// # Errors
    /// - `CollectionNotFound`: the collection does not exist
    /// - `TemplateNotFound`: the template does not exist in the collection
    fn template(
        &self,
        collection: &CollectionName,
        template: TemplateId,
    ) -> Result<TemplateInfo, BlendError>;

    /// Resolves the template an asset instance was minted from.
    ///
    /// # Errors
    /// - `AssetNotFound`: no such asset instance
    fn asset_template(&self, asset: AssetId) -> Result<TemplateId, BlendError>;
}

/// Price view of the external resource exchange.
pub trait ResourceMarket {
    /// Current currency-per-byte rate (quote balance / base balance of the
    /// resource market's connector pair). Read for pricing only.
    fn current_rate(&self) -> f64;
}

/// A deferred external action scheduled by the engine.
///
/// Actions execute after the current handler completes, in the order issued.
/// Their outcome is never reported back; reconciliation happens through later
/// inbound notifications (or not at all).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Buy resource bytes on the exchange for the literal deposited amount.
    BuyResource {
        payer: AccountName,
        amount: TokenAmount,
    },
    /// Sell resource bytes on the exchange; proceeds arrive as a later
    /// currency-transfer notification from the settlement account.
    SellResource { bytes: u64 },
    /// Forward currency to an account.
    TransferTokens {
        to: AccountName,
        amount: TokenAmount,
        memo: String,
    },
    /// Mint one instance of a template to an account.
    MintAsset {
        collection: CollectionName,
        schema: AccountName,
        template: TemplateId,
        to: AccountName,
    },
    /// Burn one asset instance.
    BurnAsset { asset: AssetId },
}

/// Fire-and-forget dispatcher for deferred external actions.
///
/// There is deliberately no return value: the host ledger offers no feedback
/// channel for deferred actions, and the engine must not depend on one.
pub trait ActionDispatcher {
    /// Schedules an action for execution after the current handler completes.
    fn dispatch(&mut self, action: Action);
}
