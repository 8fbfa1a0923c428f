//! Swap output computation.
//!
//! The pool prices a swap with a linear proportional rate minus a flat
//! fee taken from the input:
//!
//! ```text
//! amount_out = floor(amount_in × reserve_out / reserve_in)
//!            − floor(amount_in × fee_numerator / fee_denominator)
//! ```
//!
//! This is not the curved `x · y = k` output
//! (`reserve_out − reserve_in × reserve_out / (reserve_in + amount_in)`).
//! Both the public quote and swap execution call [`quote`], so the two
//! always agree.

use crate::domain::{Amount, AssetId, AssetPair, FeeRate, Reserves, Side};
use crate::error::PoolError;
use crate::math::{mul_div_floor, CheckedArithmetic};

/// A computed swap output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quote {
    /// Side of the input asset.
    pub side_in: Side,
    /// Amount of the opposite asset paid out.
    pub amount_out: Amount,
    /// Fee component deducted from the proportional output.
    pub fee: Amount,
}

/// Computes the output for selling `amount_in` of `asset_in`.
///
/// # Errors
///
/// - [`PoolError::InvalidToken`] if `asset_in` is not in `pair`.
/// - [`PoolError::InvalidAmount`] if `amount_in` is zero, or if the fee
///   consumes the whole proportional output.
/// - [`PoolError::EmptyPool`] if the input reserve is zero.
/// - [`PoolError::InsufficientLiquidity`] if the output would reach the
///   whole output reserve.
/// - [`PoolError::Overflow`] if the proportional output exceeds `u128`.
///
/// # Examples
///
/// ```
/// use cpamm::domain::{Amount, AssetId, AssetPair, FeeRate, Reserves};
/// use cpamm::quote::quote;
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(a, b).expect("distinct");
/// let reserves = Reserves::new(Amount::new(10_000), Amount::new(20_000));
///
/// let q = quote(&pair, &a, Amount::new(100), &reserves, &FeeRate::default()).expect("quote");
/// assert_eq!(q.amount_out, Amount::new(197));
/// assert_eq!(q.fee, Amount::new(3));
/// ```
pub fn quote(
    pair: &AssetPair,
    asset_in: &AssetId,
    amount_in: Amount,
    reserves: &Reserves,
    fee: &FeeRate,
) -> Result<Quote, PoolError> {
    let side_in = pair.side_of(asset_in)?;
    if amount_in.is_zero() {
        return Err(PoolError::InvalidAmount("amount in = 0"));
    }

    let reserve_in = reserves.get(side_in);
    let reserve_out = reserves.get(side_in.opposite());
    if reserve_in.is_zero() {
        return Err(PoolError::EmptyPool);
    }

    let proportional = Amount::new(mul_div_floor(
        amount_in.get(),
        reserve_out.get(),
        reserve_in.get(),
        "swap rate overflow",
    )?);
    let fee_amount = fee.apply(amount_in)?;

    let amount_out = proportional
        .safe_sub(&fee_amount)
        .map_err(|_| PoolError::InvalidAmount("amount out = 0"))?;
    if amount_out.is_zero() {
        return Err(PoolError::InvalidAmount("amount out = 0"));
    }
    if amount_out >= reserve_out {
        return Err(PoolError::InsufficientLiquidity);
    }

    Ok(Quote {
        side_in,
        amount_out,
        fee: fee_amount,
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn a() -> AssetId {
        AssetId::from_bytes([1u8; 32])
    }

    fn b() -> AssetId {
        AssetId::from_bytes([2u8; 32])
    }

    fn pair() -> AssetPair {
        let Ok(p) = AssetPair::new(a(), b()) else {
            panic!("valid pair");
        };
        p
    }

    fn reserves(r0: u128, r1: u128) -> Reserves {
        Reserves::new(Amount::new(r0), Amount::new(r1))
    }

    fn out(asset: AssetId, amount: u128, r0: u128, r1: u128) -> Result<Quote, PoolError> {
        quote(
            &pair(),
            &asset,
            Amount::new(amount),
            &reserves(r0, r1),
            &FeeRate::default(),
        )
    }

    #[test]
    fn one_to_two_pool() {
        let Ok(q) = out(a(), 100, 10_000, 20_000) else {
            panic!("expected Ok");
        };
        // 100 * 20000 / 10000 - 100 * 3 / 100 = 200 - 3
        assert_eq!(q.amount_out, Amount::new(197));
        assert_eq!(q.fee, Amount::new(3));
        assert_eq!(q.side_in, Side::Zero);
    }

    #[test]
    fn reverse_direction() {
        let Ok(q) = out(b(), 1_000, 10_000, 20_000) else {
            panic!("expected Ok");
        };
        // 1000 * 10000 / 20000 - 30 = 470
        assert_eq!(q.amount_out, Amount::new(470));
        assert_eq!(q.side_in, Side::One);
    }

    #[test]
    fn both_terms_floor_independently() {
        let Ok(q) = out(a(), 33, 300, 1_000) else {
            panic!("expected Ok");
        };
        // floor(33_000 / 300) = 110, floor(99 / 100) = 0
        assert_eq!(q.amount_out, Amount::new(110));
        assert_eq!(q.fee, Amount::ZERO);
    }

    #[test]
    fn unknown_asset() {
        assert_eq!(
            out(AssetId::zero(), 100, 10_000, 20_000),
            Err(PoolError::InvalidToken("invalid token"))
        );
    }

    #[test]
    fn zero_amount() {
        assert_eq!(
            out(a(), 0, 10_000, 20_000),
            Err(PoolError::InvalidAmount("amount in = 0"))
        );
    }

    #[test]
    fn empty_pool() {
        assert_eq!(out(a(), 100, 0, 0), Err(PoolError::EmptyPool));
    }

    #[test]
    fn fee_larger_than_output() {
        // 100 * 1 / 1000 = 0, fee = 3
        assert_eq!(
            out(a(), 100, 1_000, 1),
            Err(PoolError::InvalidAmount("amount out = 0"))
        );
    }

    #[test]
    fn output_equal_to_fee_is_zero() {
        // 100 * 3 / 100 = 3, fee = 3
        assert_eq!(
            out(a(), 100, 100, 3),
            Err(PoolError::InvalidAmount("amount out = 0"))
        );
    }

    #[test]
    fn draining_output_reserve() {
        // 1000 * 100 / 100 - 30 = 970 >= 100
        assert_eq!(
            out(a(), 1_000, 100, 100),
            Err(PoolError::InsufficientLiquidity)
        );
    }

    #[test]
    fn ether_scale_reserves() {
        let ether = 1_000_000_000_000_000_000u128;
        // 1000e18 * 2e22 / 1e22 - 30e18, with a 2e43 intermediate product
        let Ok(q) = out(a(), 1_000 * ether, 10_000 * ether, 20_000 * ether) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_out, Amount::new(1_970 * ether));
        assert_eq!(q.fee, Amount::new(30 * ether));
    }

    #[test]
    fn overflow() {
        assert!(matches!(
            out(a(), u128::MAX, 1, 2),
            Err(PoolError::Overflow(_))
        ));
    }

    #[test]
    fn zero_fee_is_pure_rate() {
        let Ok(q) = quote(
            &pair(),
            &a(),
            Amount::new(100),
            &reserves(10_000, 20_000),
            &FeeRate::ZERO,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_out, Amount::new(200));
        assert_eq!(q.fee, Amount::ZERO);
    }
}
