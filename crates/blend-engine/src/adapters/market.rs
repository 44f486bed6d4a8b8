//! In-memory resource market adapter.

use crate::ports::outbound::ResourceMarket;

/// A resource market with fixed connector balances.
///
/// The rate is `quote_balance / base_balance`: currency units per resource
/// byte.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateMarket {
    /// Resource bytes in the market's base connector.
    pub base_balance: f64,
    /// Currency units in the market's quote connector.
    pub quote_balance: f64,
}

impl FixedRateMarket {
    /// Creates a market from raw connector balances.
    pub fn new(base_balance: f64, quote_balance: f64) -> Self {
        Self {
            base_balance,
            quote_balance,
        }
    }

    /// Creates a market whose rate is exactly `rate` currency units per byte.
    pub fn with_rate(rate: f64) -> Self {
        Self {
            base_balance: 1.0,
            quote_balance: rate,
        }
    }
}

impl ResourceMarket for FixedRateMarket {
    fn current_rate(&self) -> f64 {
        self.quote_balance / self.base_balance
    }
}
