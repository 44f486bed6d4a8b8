//! Domain layer: entities, keyed stores, and pure business rules.

pub mod entities;
pub mod errors;
pub mod ledger;
pub mod recipes;
pub mod services;
pub mod withdrawals;

pub use entities::{BlendConfig, BlendRecipe, PendingWithdrawal, ResourceBalance};
pub use errors::BlendError;
pub use ledger::ResourceLedger;
pub use recipes::RecipeBook;
pub use withdrawals::WithdrawalSlot;
