use thiserror::Error;

/// Errors produced when parsing a ledger account name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Account name is empty")]
    Empty,

    #[error("Account name is {len} characters, maximum is 12")]
    TooLong { len: usize },

    #[error("Invalid character {ch:?} in account name (allowed: a-z, 1-5, '.')")]
    InvalidChar { ch: char },
}
