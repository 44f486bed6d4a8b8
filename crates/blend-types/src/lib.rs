//! # blend-types
//!
//! Primitive domain types shared across the blend subsystem.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: account names, template/asset identifiers,
//!   and token amounts used by every other crate in the workspace
//! - **Validation at the boundary**: `AccountName` rejects malformed ledger
//!   names at parse time, so the engine never holds an invalid identifier

pub mod amounts;
pub mod entities;
pub mod errors;
pub mod names;

pub use amounts::TokenAmount;
pub use entities::{AssetId, TemplateId, TemplateInfo};
pub use errors::NameError;
pub use names::{AccountName, CollectionName};
