//! Domain services for the blend subsystem.
//!
//! Pure business-logic functions: exchange-rate conversion, fee retention,
//! and multiset matching of template sequences.

use blend_types::{TemplateId, TokenAmount};

/// Estimates the resource units bought by a currency amount at the given
/// exchange rate.
///
/// Formula: `floor(amount * fee_retention / rate)`.
///
/// The division is floating-point and the result truncates toward zero, so
/// the estimate under-credits rather than over-credits relative to the
/// venue's actual fill. This is an estimate, not ground truth: the literal
/// amount is dispatched to the exchange and its fill is never observed.
pub fn estimate_resource_units(amount: TokenAmount, fee_retention: f64, rate: f64) -> u64 {
    if !rate.is_finite() || rate <= 0.0 {
        return 0;
    }
    let net = amount.units() as f64 * fee_retention;
    let units = net / rate;
    if units <= 0.0 {
        return 0;
    }
    units as u64
}

/// Applies the marketplace fee retention to an amount, truncating toward
/// zero.
pub fn net_of_fee(amount: TokenAmount, fee_retention: f64) -> TokenAmount {
    TokenAmount((amount.units() as f64 * fee_retention) as i64)
}

/// Order-independent multiset equality over template-id sequences.
///
/// Both sequences are sorted and compared element-wise, so duplicate counts
/// are significant: `[A, A, B]` matches any permutation of itself but not
/// `[A, B, B]`.
pub fn multiset_matches(supplied: &[TemplateId], required: &[TemplateId]) -> bool {
    if supplied.len() != required.len() {
        return false;
    }
    let mut supplied = supplied.to_vec();
    let mut required = required.to_vec();
    supplied.sort_unstable();
    required.sort_unstable();
    supplied == required
}
