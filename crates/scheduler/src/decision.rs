//! Clear/congested decision.

use routewatch_core::AlertVariant;

/// Decide which alert variant applies.
///
/// Returns [`AlertVariant::Clear`] when `expected_minutes` is strictly
/// greater than `duration_seconds`, and [`AlertVariant::Congested`]
/// otherwise. The threshold is compared against the raw duration value
/// with no unit conversion. Total over all integer inputs.
pub fn decide(expected_minutes: i32, duration_seconds: i64) -> AlertVariant {
    if i64::from(expected_minutes) > duration_seconds {
        AlertVariant::Clear
    } else {
        AlertVariant::Congested
    }
}
