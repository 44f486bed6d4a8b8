//! Token amounts in the host ledger's native currency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fractional digits of the native token.
pub const TOKEN_PRECISION: u32 = 8;

/// A quantity of the native currency, in smallest indivisible units.
///
/// INVARIANT: amounts flowing through the engine are never negative; the
/// signed representation matches the host ledger's wire format.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TokenAmount(pub i64);

impl TokenAmount {
    /// Zero tokens.
    pub const ZERO: TokenAmount = TokenAmount(0);

    /// Constructs an amount from whole tokens.
    pub fn from_whole(tokens: i64) -> Self {
        Self(tokens * 10i64.pow(TOKEN_PRECISION))
    }

    /// Returns the raw smallest-unit value.
    pub fn units(&self) -> i64 {
        self.0
    }

    /// Checked addition.
    pub fn checked_add(self, other: TokenAmount) -> Option<TokenAmount> {
        self.0.checked_add(other.0).map(TokenAmount)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, other: TokenAmount) -> Option<TokenAmount> {
        self.0.checked_sub(other.0).map(TokenAmount)
    }

    /// Returns true for strictly positive amounts.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = 10i64.pow(TOKEN_PRECISION);
        let whole = self.0 / scale;
        let frac = (self.0 % scale).unsigned_abs();
        write!(f, "{}.{:08}", whole, frac)
    }
}
