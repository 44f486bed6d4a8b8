//! Identifier and template types for the external digital-asset registry.

use crate::names::AccountName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an asset template (the blueprint a mintable instance
/// belongs to).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TemplateId(pub u32);

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a single minted asset instance.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AssetId(pub u64);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supply and schema information for an asset template, as reported by the
/// external registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo {
    /// Schema the template belongs to within its collection.
    pub schema: AccountName,
    /// Maximum mintable instances. Zero is the "unlimited" sentinel.
    pub max_supply: u32,
    /// Instances minted so far.
    pub issued_supply: u32,
}

impl TemplateInfo {
    /// Returns true if another instance may be minted from this template.
    ///
    /// A `max_supply` of zero means unlimited supply.
    pub fn can_issue(&self) -> bool {
        self.max_supply == 0 || self.issued_supply < self.max_supply
    }
}
