//! # Inbound Port - BlendApi
//!
//! Primary driving port exposing the blend subsystem's commands and
//! notification handlers.
//!
//! ## Entry points
//!
//! | Method | Triggered by |
//! |--------|--------------|
//! | `register_recipe` | signed command from a collection-authorized account |
//! | `delete_recipe` | signed command from a collection-authorized account |
//! | `withdraw_resource` | signed command from a collection-authorized account |
//! | `on_token_transfer` | currency-transfer notification (subscription) |
//! | `on_asset_transfer` | asset-transfer notification (subscription) |

use crate::domain::BlendError;
use crate::events::payloads::{
    AssetTransferNotification, AssetTransferOutcome, TokenTransferNotification,
    TokenTransferOutcome,
};
use blend_types::{AccountName, CollectionName, TemplateId};

/// Primary API for the blend subsystem.
///
/// Every method runs to completion as one indivisible unit; an `Err` means
/// the host ledger aborts the whole transaction and no mutation from the
/// call survives. Implementations guarantee this structurally by performing
/// all fallible checks before any store mutation or outbound dispatch.
pub trait BlendApi {
    /// Registers a blend recipe, or replaces an existing recipe's inputs.
    ///
    /// # Errors
    /// - `CollectionNotFound`: no such collection
    /// - `TemplateNotFound`: target template absent from the collection
    /// - `Unauthorized`: the engine's operating account, or the actor, lacks
    ///   collection delegation
    fn register_recipe(
        &mut self,
        actor: AccountName,
        collection: CollectionName,
        target: TemplateId,
        inputs: Vec<TemplateId>,
    ) -> Result<(), BlendError>;

    /// Deletes a recipe.
    ///
    /// # Errors
    /// - `RecipeNotFound`: no recipe for `target`
    /// - `Unauthorized`: actor lacks delegation for the recipe's collection
    fn delete_recipe(&mut self, actor: AccountName, target: TemplateId) -> Result<(), BlendError>;

    /// Stages a resource sale and debits the collection's balance.
    ///
    /// # Errors
    /// - `CollectionNotFound`: collection or its balance record absent
    /// - `Unauthorized`: actor lacks collection delegation
    /// - `InsufficientResource`: balance below the requested bytes
    /// - `WithdrawalAlreadyPending`: an earlier sale has not settled yet
    fn withdraw_resource(
        &mut self,
        actor: AccountName,
        collection: CollectionName,
        bytes: u64,
    ) -> Result<(), BlendError>;

    /// Handles an observed currency transfer: deposit, sale proceeds, or
    /// ignorable traffic.
    fn on_token_transfer(
        &mut self,
        notification: TokenTransferNotification,
    ) -> Result<TokenTransferOutcome, BlendError>;

    /// Handles an observed asset transfer: blend execution, or ignorable
    /// traffic.
    fn on_asset_transfer(
        &mut self,
        notification: AssetTransferNotification,
    ) -> Result<AssetTransferOutcome, BlendError>;
}
