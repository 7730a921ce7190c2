//! Floored modulo for folding negative column references into a pattern period

use num_traits::{PrimInt, Signed};

/// Modulo whose result takes the sign of the modulus
///
/// Computed as `((value % modulus) + modulus) % modulus`, so for a positive
/// modulus the result always lies in `[0, modulus)` regardless of the sign of
/// `value`: `floored_mod(-3, 10) == 7`, where the `%` remainder would give `-3`.
///
/// The modulus must be non-zero.
pub fn floored_mod<T: PrimInt + Signed>(value: T, modulus: T) -> T {
    ((value % modulus) + modulus) % modulus
}

/// Fold a column reference into `[0, period)`
///
/// Returns `None` when `period` is zero or does not fit the signed domain.
pub fn wrap_column(column: i64, period: usize) -> Option<usize> {
    let modulus = i64::try_from(period).ok().filter(|&m| m > 0)?;
    usize::try_from(floored_mod(column, modulus)).ok()
}
