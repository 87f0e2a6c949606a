//! Money helpers
//!
//! Amounts cross the API boundary as `f64` rupiah; all arithmetic goes
//! through `rust_decimal` and results are rounded half-up. The rupiah has no
//! sub-unit in retail use, so discount amounts round to whole rupiah and
//! shelf prices round to the nearest 100 (prices are quoted in hundreds).

use rust_decimal::prelude::*;

/// Whole-rupiah rounding (no sub-unit).
const DECIMAL_PLACES: u32 = 0;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded half-up to whole rupiah
#[inline]
pub fn to_rupiah(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round half-up to the nearest 100 rupiah: `round(value / 100) * 100`.
///
/// Hot-deal shelf prices keep the store's pricing convention, e.g.
/// 33750 rounds to 33800.
#[inline]
pub fn round_to_hundred(value: Decimal) -> f64 {
    let scaled = (value / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    (scaled * Decimal::ONE_HUNDRED).to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rupiah_half_up() {
        assert_eq!(to_rupiah(to_decimal(12.4)), 12.0);
        assert_eq!(to_rupiah(to_decimal(12.5)), 13.0);
        assert_eq!(to_rupiah(to_decimal(12.6)), 13.0);
    }

    #[test]
    fn test_round_to_hundred_half_up() {
        // 33750 / 100 = 337.5 → 338 → 33800
        assert_eq!(round_to_hundred(to_decimal(33750.0)), 33800.0);
        assert_eq!(round_to_hundred(to_decimal(33749.0)), 33700.0);
        assert_eq!(round_to_hundred(to_decimal(33800.0)), 33800.0);
        assert_eq!(round_to_hundred(to_decimal(0.0)), 0.0);
    }

    #[test]
    fn test_non_finite_input_is_zero() {
        assert_eq!(to_rupiah(to_decimal(f64::NAN)), 0.0);
        assert_eq!(round_to_hundred(to_decimal(f64::INFINITY)), 0.0);
    }
}
