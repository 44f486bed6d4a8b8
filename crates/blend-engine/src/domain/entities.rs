//! Core domain entities for the blend subsystem.
//!
//! Defines the persisted table rows (resource balances, pending withdrawals,
//! blend recipes) and the engine configuration.

use blend_types::{AccountName, CollectionName, TemplateId};
use serde::{Deserialize, Serialize};

/// One row of the resource-balance table: storage bytes a collection has
/// pre-paid for future mints.
///
/// INVARIANT-1: `bytes` is never negative (unsigned by construction).
/// INVARIANT-2: a row whose balance reaches exactly zero after a debit is
/// deleted, never kept at zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBalance {
    /// Collection that owns the balance.
    pub collection: CollectionName,
    /// Resource bytes available to fund mints.
    pub bytes: u64,
}

/// The staged record bridging a resource-sale request and its later,
/// asynchronously notified currency proceeds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingWithdrawal {
    /// Account that requested the sale and will receive the proceeds.
    pub requester: AccountName,
    /// Bytes put up for sale.
    pub bytes: u64,
}

/// A registered blend recipe: one output template minted from a multiset of
/// input templates.
///
/// Owned conceptually by the collection, not the registering account;
/// authorization is re-checked on every use, never cached here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlendRecipe {
    /// Account that registered the recipe.
    pub owner: AccountName,
    /// Collection the recipe mints into.
    pub collection: CollectionName,
    /// Output template minted on a successful blend.
    pub target: TemplateId,
    /// Required input templates. Order irrelevant, duplicates meaningful
    /// ("two of A, one of B").
    pub inputs: Vec<TemplateId>,
}

/// Blend engine configuration.
#[derive(Clone, Debug)]
pub struct BlendConfig {
    /// The engine's own operating account on the host ledger.
    pub operating_account: AccountName,
    /// Account of the external digital-asset registry.
    pub asset_registry_account: AccountName,
    /// Settlement account of the native resource marketplace. Currency
    /// arriving from it is resource-sale proceeds, not a deposit.
    pub market_settlement_account: AccountName,
    /// Resource bytes debited per minted asset.
    pub mint_cost_bytes: u64,
    /// Fraction of a currency amount kept after the marketplace's fee.
    pub fee_retention: f64,
    /// Maximum length of a deposit memo (a collection name).
    pub max_deposit_memo_len: usize,
    /// Exclusive upper bound on a blend memo's length.
    pub max_blend_memo_len: usize,
}

fn static_name(name: &str) -> AccountName {
    AccountName::new(name).expect("static account name is valid")
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            operating_account: static_name("blender"),
            asset_registry_account: static_name("atomicassets"),
            market_settlement_account: static_name("eosio.ram"),
            mint_cost_bytes: 151,
            fee_retention: 0.995,
            max_deposit_memo_len: 12,
            max_blend_memo_len: 100,
        }
    }
}

impl BlendConfig {
    /// Creates a config with short fixture names for testing.
    pub fn for_testing() -> Self {
        Self {
            operating_account: static_name("blender"),
            asset_registry_account: static_name("assets"),
            market_settlement_account: static_name("market.ram"),
            ..Default::default()
        }
    }
}
