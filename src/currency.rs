//! Conversion from platform micro-units to decimal currency.

use crate::config::MICROS_PER_UNIT;

/// Convert an amount in micro-units (currency × 10⁶) to currency units.
///
/// ```rust
/// use ads_insights_sdk::currency::to_decimal_currency;
/// assert_eq!(to_decimal_currency(12_450_800_000), 12450.8);
/// ```
pub fn to_decimal_currency(micro_units: u64) -> f64 {
    micro_units as f64 / MICROS_PER_UNIT
}

/// Like [`to_decimal_currency`], treating a missing amount as zero.
pub fn to_decimal_currency_or_zero(micro_units: Option<u64>) -> f64 {
    micro_units.map(to_decimal_currency).unwrap_or(0.0)
}
