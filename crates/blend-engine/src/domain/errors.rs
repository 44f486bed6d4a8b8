use blend_types::{AccountName, AssetId, CollectionName, TemplateId};
use thiserror::Error;

/// Blend engine error type.
///
/// Every variant aborts the triggering transaction on the host ledger; there
/// is no partial-success or retry channel. A caller resubmits a corrected
/// request in a new transaction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlendError {
    #[error("Collection not found: {0}")]
    CollectionNotFound(CollectionName),

    #[error("Template {template} not found in collection {collection}")]
    TemplateNotFound {
        collection: CollectionName,
        template: TemplateId,
    },

    #[error("Asset not found: {0}")]
    AssetNotFound(AssetId),

    #[error("No blend recipe registered for target template {0}")]
    RecipeNotFound(TemplateId),

    #[error("Account {account} is not authorized for collection {collection}")]
    Unauthorized {
        account: AccountName,
        collection: CollectionName,
    },

    #[error("Recipe owner {owner} has been disavowed by collection {collection}")]
    AuthorizationRevoked {
        owner: AccountName,
        collection: CollectionName,
    },

    #[error("Insufficient resource in collection {collection}: required {required}, available {available}")]
    InsufficientResource {
        collection: CollectionName,
        required: u64,
        available: u64,
    },

    #[error("Supplied assets do not match the recipe for target template {target}")]
    RecipeMismatch { target: TemplateId },

    #[error("Target template {template} is at max supply")]
    SupplyExhausted { template: TemplateId },

    #[error("Invalid memo: {0}")]
    InvalidMemo(String),

    #[error("No withdrawal is pending")]
    NoPendingWithdrawal,

    #[error("A withdrawal by {requester} is already pending")]
    WithdrawalAlreadyPending { requester: AccountName },
}
