//! Balance arithmetic.

/// Apply a signed delta to a balance.
///
/// Returns `None` when the result would fall outside `0..=i64::MAX`, either
/// by overflowing the integer range or by going negative. Callers must treat
/// `None` as a client error and leave the stored balance untouched.
pub fn apply_delta(balance: i64, delta: i64) -> Option<i64> {
    balance.checked_add(delta).filter(|new| *new >= 0)
}
