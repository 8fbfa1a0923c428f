//! Exact integer square root.

use alloy_primitives::U256;

/// Returns `floor(sqrt(n))` for a 256-bit `n`, using Newton's method.
///
/// Starts from `min(n, u128::MAX)`, which is never below the root, and
/// iterates `x' = (x + n / x) / 2` until the sequence stops decreasing.
/// The root of any 256-bit value fits `u128`.
///
/// # Examples
///
/// ```
/// use cpamm::math::{isqrt, widening_mul, U256};
///
/// assert_eq!(isqrt(U256::ZERO), 0);
/// assert_eq!(isqrt(widening_mul(10_000, 20_000)), 14_142);
/// assert_eq!(isqrt(U256::MAX), u128::MAX);
/// ```
#[must_use]
pub fn isqrt(n: U256) -> u128 {
    if n < U256::from(2u8) {
        return u128::try_from(n).unwrap_or(0);
    }
    let mut x = n.min(U256::from(u128::MAX));
    let mut y = (x + n / x) >> 1usize;
    while y < x {
        x = y;
        y = (x + n / x) >> 1usize;
    }
    u128::try_from(x).unwrap_or(u128::MAX)
}
