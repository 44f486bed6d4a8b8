//! Validated ledger account names.
//!
//! Account names follow the host ledger's naming rules: lowercase `a-z`,
//! digits `1-5`, and `.`, at most 12 characters. Collections are identified
//! by the same name type.

use crate::errors::NameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a ledger account name.
pub const MAX_NAME_LEN: usize = 12;

/// A validated ledger account name.
///
/// INVARIANT: the inner string is non-empty, at most 12 characters, and
/// contains only `a-z`, `1-5`, and `.`. Construction goes through
/// [`AccountName::new`] / `FromStr`, so a held value is always valid.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountName(String);

/// Collections are addressed by account name on the host ledger.
pub type CollectionName = AccountName;

impl AccountName {
    /// Parses and validates an account name.
    ///
    /// # Errors
    /// - `Empty`: zero-length input
    /// - `TooLong`: more than 12 characters
    /// - `InvalidChar`: character outside `a-z`, `1-5`, `.`
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name.len() > MAX_NAME_LEN {
            return Err(NameError::TooLong { len: name.len() });
        }
        for ch in name.chars() {
            let valid = ch.is_ascii_lowercase() || ('1'..='5').contains(&ch) || ch == '.';
            if !valid {
                return Err(NameError::InvalidChar { ch });
            }
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for AccountName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountName> for String {
    fn from(name: AccountName) -> Self {
        name.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountName({})", self.0)
    }
}
