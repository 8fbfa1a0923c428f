//! `floor(a * b / c)` over a 256-bit intermediate product.

use alloy_primitives::U256;

use crate::error::PoolError;

/// Full-width product of two `u128` values.
///
/// The result always fits: `(2^128 - 1)^2 < 2^256`.
///
/// # Examples
///
/// ```
/// use cpamm::math::{widening_mul, U256};
///
/// assert_eq!(widening_mul(u128::MAX, 2), U256::from(u128::MAX) * U256::from(2u8));
/// ```
#[must_use]
pub fn widening_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Computes `floor(a * b / c)`.
///
/// The product is taken in 256 bits, so only a quotient that does not fit
/// `u128` overflows.
///
/// # Errors
///
/// - [`PoolError::Overflow`] with `context` if the quotient exceeds `u128`.
/// - [`PoolError::DivisionByZero`] if `c` is zero.
///
/// # Examples
///
/// ```
/// use cpamm::math::mul_div_floor;
///
/// assert_eq!(mul_div_floor(100, 20_000, 10_000, "rate"), Ok(200));
/// assert_eq!(mul_div_floor(7, 3, 2, "odd"), Ok(10));
/// ```
pub fn mul_div_floor(a: u128, b: u128, c: u128, context: &'static str) -> Result<u128, PoolError> {
    if c == 0 {
        return Err(PoolError::DivisionByZero);
    }
    let quotient = widening_mul(a, b) / U256::from(c);
    u128::try_from(quotient).map_err(|_| PoolError::Overflow(context))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ETHER: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn floors_the_quotient() {
        assert_eq!(mul_div_floor(1, 1, 3, "x"), Ok(0));
        assert_eq!(mul_div_floor(5, 5, 3, "x"), Ok(8));
    }

    #[test]
    fn zero_divisor() {
        assert_eq!(mul_div_floor(1, 1, 0, "x"), Err(PoolError::DivisionByZero));
    }

    #[test]
    fn overflow_carries_context() {
        assert_eq!(
            mul_div_floor(u128::MAX, 2, 1, "shares numerator"),
            Err(PoolError::Overflow("shares numerator"))
        );
    }

    #[test]
    fn product_beyond_u128_divides_back() {
        // 1e21 * 2e22 = 2e43 does not fit u128, the quotient 2e21 does.
        assert_eq!(
            mul_div_floor(1_000 * ETHER, 20_000 * ETHER, 10_000 * ETHER, "rate"),
            Ok(2_000 * ETHER)
        );
        assert_eq!(mul_div_floor(u128::MAX, u128::MAX, u128::MAX, "x"), Ok(u128::MAX));
    }

    #[test]
    fn widening_mul_is_exact() {
        let p = widening_mul(10_000 * ETHER, 20_000 * ETHER);
        assert!(p > U256::from(u128::MAX));
        assert_eq!(p / U256::from(20_000 * ETHER), U256::from(10_000 * ETHER));
        assert_eq!(widening_mul(0, u128::MAX), U256::ZERO);
    }
}
