//! Blend handler: orchestrates deposits, withdrawals, recipe management, and
//! blend execution over the domain stores and outbound ports.
//!
//! ## Check-before-effect discipline
//!
//! The host ledger applies each invocation all-or-nothing, but this handler
//! does not rely on rollback for correctness: every method completes all
//! fallible validation before the first store mutation or dispatch.

use crate::domain::entities::BlendConfig;
use crate::domain::errors::BlendError;
use crate::domain::ledger::ResourceLedger;
use crate::domain::recipes::RecipeBook;
use crate::domain::services::{estimate_resource_units, multiset_matches, net_of_fee};
use crate::domain::withdrawals::WithdrawalSlot;
use crate::events::payloads::{
    AssetTransferNotification, AssetTransferOutcome, TokenTransferNotification,
    TokenTransferOutcome,
};
use crate::ports::inbound::BlendApi;
use crate::ports::outbound::{Action, ActionDispatcher, AssetRegistry, ResourceMarket};
use blend_types::{AccountName, CollectionName, TemplateId};
use tracing::{debug, warn};
use uuid::Uuid;

/// Memo attached to forwarded sale proceeds.
const PROCEEDS_MEMO: &str = "Resource refund";

/// The blend subsystem's handler, owning the persisted stores and the
/// outbound ports.
pub struct BlendHandler<R, M, D> {
    config: BlendConfig,
    registry: R,
    market: M,
    dispatcher: D,
    ledger: ResourceLedger,
    recipes: RecipeBook,
    withdrawal: WithdrawalSlot,
}

impl<R, M, D> BlendHandler<R, M, D>
where
    R: AssetRegistry,
    M: ResourceMarket,
    D: ActionDispatcher,
{
    /// Creates a handler with empty stores.
    pub fn new(config: BlendConfig, registry: R, market: M, dispatcher: D) -> Self {
        Self {
            config,
            registry,
            market,
            dispatcher,
            ledger: ResourceLedger::new(),
            recipes: RecipeBook::new(),
            withdrawal: WithdrawalSlot::new(),
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &BlendConfig {
        &self.config
    }

    /// Returns the resource ledger.
    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    /// Returns the recipe book.
    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    /// Returns the pending-withdrawal slot.
    pub fn withdrawal(&self) -> &WithdrawalSlot {
        &self.withdrawal
    }

    /// Returns the dispatcher (tests inspect recorded actions through this).
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Returns a mutable reference to the resource ledger, for fixtures.
    pub fn ledger_mut(&mut self) -> &mut ResourceLedger {
        &mut self.ledger
    }

    /// Authorization gate: true iff `account` appears in the collection's
    /// authorized-account list right now.
    ///
    /// No caching — delegation can be revoked between calls, and every
    /// mutating operation re-derives this fresh.
    ///
    /// # Errors
    /// - `CollectionNotFound`: the collection does not exist
    pub fn is_authorized(
        &self,
        collection: &CollectionName,
        account: &AccountName,
    ) -> Result<bool, BlendError> {
        let accounts = self.registry.authorized_accounts(collection)?;
        Ok(accounts.iter().any(|a| a == account))
    }

    fn require_authorized(
        &self,
        collection: &CollectionName,
        account: &AccountName,
    ) -> Result<(), BlendError> {
        if self.is_authorized(collection, account)? {
            Ok(())
        } else {
            Err(BlendError::Unauthorized {
                account: account.clone(),
                collection: collection.clone(),
            })
        }
    }

    /// Deposit branch of the currency-transfer handler: memo names the
    /// collection to fund.
    fn handle_deposit(
        &mut self,
        notification: &TokenTransferNotification,
    ) -> Result<TokenTransferOutcome, BlendError> {
        if notification.memo.len() > self.config.max_deposit_memo_len {
            return Err(BlendError::InvalidMemo(format!(
                "deposit memo exceeds {} characters",
                self.config.max_deposit_memo_len
            )));
        }
        let collection: CollectionName = notification
            .memo
            .parse()
            .map_err(|e: blend_types::NameError| BlendError::InvalidMemo(e.to_string()))?;
        if !self.registry.collection_exists(&collection) {
            return Err(BlendError::CollectionNotFound(collection));
        }

        let rate = self.market.current_rate();
        let credited = estimate_resource_units(notification.amount, self.config.fee_retention, rate);

        // The literal amount goes to the exchange; the ledger records the
        // floor estimate at the current rate.
        self.dispatcher.dispatch(Action::BuyResource {
            payer: self.config.operating_account.clone(),
            amount: notification.amount,
        });
        self.ledger.credit(&collection, credited);

        debug!(
            correlation_id = %Uuid::new_v4(),
            collection = %collection,
            amount = %notification.amount,
            rate,
            credited,
            "Deposit converted to resource units"
        );
        Ok(TokenTransferOutcome::Deposited {
            collection,
            credited_bytes: credited,
        })
    }

    /// Sale-proceeds branch: drain the pending withdrawal and forward the
    /// net amount to the original requester.
    fn handle_sale_proceeds(
        &mut self,
        notification: &TokenTransferNotification,
    ) -> Result<TokenTransferOutcome, BlendError> {
        let payout = net_of_fee(notification.amount, self.config.fee_retention);
        let pending = self.withdrawal.resolve()?;

        self.dispatcher.dispatch(Action::TransferTokens {
            to: pending.requester.clone(),
            amount: payout,
            memo: PROCEEDS_MEMO.to_string(),
        });

        debug!(
            requester = %pending.requester,
            bytes = pending.bytes,
            payout = %payout,
            "Resource sale settled, proceeds forwarded"
        );
        Ok(TokenTransferOutcome::ProceedsForwarded {
            to: pending.requester,
            amount: payout,
        })
    }
}

impl<R, M, D> BlendApi for BlendHandler<R, M, D>
where
    R: AssetRegistry,
    M: ResourceMarket,
    D: ActionDispatcher,
{
    fn register_recipe(
        &mut self,
        actor: AccountName,
        collection: CollectionName,
        target: TemplateId,
        inputs: Vec<TemplateId>,
    ) -> Result<(), BlendError> {
        if !self.registry.collection_exists(&collection) {
            return Err(BlendError::CollectionNotFound(collection));
        }
        // Target must be mintable within the collection.
        self.registry.template(&collection, target)?;
        // The registry refuses to mint on the engine's behalf without this.
        self.require_authorized(&collection, &self.config.operating_account)?;
        self.require_authorized(&collection, &actor)?;

        self.recipes.upsert(actor, collection.clone(), target, inputs);
        debug!(collection = %collection, target = %target, "Recipe registered");
        Ok(())
    }

    fn delete_recipe(&mut self, actor: AccountName, target: TemplateId) -> Result<(), BlendError> {
        let collection = self.recipes.lookup(target)?.collection.clone();
        self.require_authorized(&collection, &actor)?;

        self.recipes.remove(target)?;
        debug!(collection = %collection, target = %target, "Recipe deleted");
        Ok(())
    }

    fn withdraw_resource(
        &mut self,
        actor: AccountName,
        collection: CollectionName,
        bytes: u64,
    ) -> Result<(), BlendError> {
        if !self.registry.collection_exists(&collection) {
            return Err(BlendError::CollectionNotFound(collection));
        }
        self.require_authorized(&collection, &actor)?;
        let available = self.ledger.balance(&collection)?;
        if available < bytes {
            return Err(BlendError::InsufficientResource {
                collection,
                required: bytes,
                available,
            });
        }

        self.withdrawal.stage(actor.clone(), bytes)?;
        self.dispatcher.dispatch(Action::SellResource { bytes });
        self.ledger.debit(&collection, bytes)?;

        debug!(
            collection = %collection,
            requester = %actor,
            bytes,
            "Resource sale requested, awaiting settlement"
        );
        Ok(())
    }

    fn on_token_transfer(
        &mut self,
        notification: TokenTransferNotification,
    ) -> Result<TokenTransferOutcome, BlendError> {
        // Only inbound transfers are interesting; self-sends would loop.
        if notification.to != self.config.operating_account
            || notification.from == self.config.operating_account
        {
            return Ok(TokenTransferOutcome::Ignored);
        }
        if notification.from == self.config.market_settlement_account {
            return self.handle_sale_proceeds(&notification);
        }
        if notification.from == self.config.asset_registry_account {
            // Backing transfer from the registry; nothing to do.
            return Ok(TokenTransferOutcome::Ignored);
        }
        self.handle_deposit(&notification)
    }

    fn on_asset_transfer(
        &mut self,
        notification: AssetTransferNotification,
    ) -> Result<AssetTransferOutcome, BlendError> {
        // Assets the engine sends out (mints) echo back as notifications.
        if notification.from == self.config.operating_account {
            return Ok(AssetTransferOutcome::Ignored);
        }
        if notification.memo.len() >= self.config.max_blend_memo_len {
            return Err(BlendError::InvalidMemo(format!(
                "blend memo must be shorter than {} characters",
                self.config.max_blend_memo_len
            )));
        }
        let target = notification
            .memo
            .trim()
            .parse::<u32>()
            .map(TemplateId)
            .map_err(|_| {
                BlendError::InvalidMemo(format!(
                    "blend memo is not a template id: {:?}",
                    notification.memo
                ))
            })?;

        let recipe = self.recipes.lookup(target)?.clone();

        // The owner's delegation may have been revoked since registration.
        if !self.is_authorized(&recipe.collection, &recipe.owner)? {
            warn!(
                collection = %recipe.collection,
                owner = %recipe.owner,
                target = %target,
                "Blend rejected: recipe owner disavowed"
            );
            return Err(BlendError::AuthorizationRevoked {
                owner: recipe.owner,
                collection: recipe.collection,
            });
        }

        let mut supplied = Vec::with_capacity(notification.assets.len());
        for asset in &notification.assets {
            supplied.push(self.registry.asset_template(*asset)?);
        }
        if !multiset_matches(&supplied, &recipe.inputs) {
            return Err(BlendError::RecipeMismatch { target });
        }

        // Strictly more than the per-mint cost must be on hand.
        let available = self.ledger.balance(&recipe.collection)?;
        if available <= self.config.mint_cost_bytes {
            return Err(BlendError::InsufficientResource {
                collection: recipe.collection,
                required: self.config.mint_cost_bytes,
                available,
            });
        }

        let template = self.registry.template(&recipe.collection, target)?;
        if !template.can_issue() {
            return Err(BlendError::SupplyExhausted { template: target });
        }

        // All checks passed; effects in order: mint, burn inputs, debit.
        self.dispatcher.dispatch(Action::MintAsset {
            collection: recipe.collection.clone(),
            schema: template.schema,
            template: target,
            to: notification.from.clone(),
        });
        for asset in &notification.assets {
            self.dispatcher.dispatch(Action::BurnAsset { asset: *asset });
        }
        self.ledger
            .debit(&recipe.collection, self.config.mint_cost_bytes)?;

        debug!(
            collection = %recipe.collection,
            target = %target,
            minted_to = %notification.from,
            burned = notification.assets.len(),
            "Blend executed"
        );
        Ok(AssetTransferOutcome::Blended {
            collection: recipe.collection,
            target,
            minted_to: notification.from,
            burned: notification.assets.len(),
            debited_bytes: self.config.mint_cost_bytes,
        })
    }
}
