//! Liquidity management trait extending [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! Total shares reported by [`LiquidityPool::total_shares`] only change
//! through [`LiquidityPool::add_liquidity`] and
//! [`LiquidityPool::remove_liquidity`], and always equal the sum of every
//! participant's [`LiquidityPool::share_balance_of`].
//!
//! # Empty / Seeded Invariant
//!
//! ```text
//! reserve0 == 0  ⟺  reserve1 == 0  ⟺  total_shares == 0
//! ```

use super::SwapPool;
use crate::domain::{AccountId, Amount, DepositReceipt, Reserves, Shares, WithdrawalReceipt};
use crate::error::PoolError;

/// Trait for pools that issue shares against deposited reserves.
pub trait LiquidityPool: SwapPool {
    /// Deposits `amount0` of asset0 and `amount1` of asset1 from `caller`.
    ///
    /// An empty pool mints `isqrt(amount0 × amount1)` shares; a seeded pool
    /// requires `reserve0 × amount1 == reserve1 × amount0` and mints
    /// `min(amount0 × total / reserve0, amount1 × total / reserve1)`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ProportionMismatch`] if the deposit ratio differs
    ///   from the reserve ratio.
    /// - [`PoolError::InvalidAmount`] if no shares would be minted.
    /// - [`PoolError::Overflow`] if any intermediate arithmetic overflows.
    /// - [`PoolError::Ledger`] if pulling either asset fails.
    fn add_liquidity(
        &mut self,
        caller: &AccountId,
        amount0: Amount,
        amount1: Amount,
    ) -> Result<DepositReceipt, PoolError>;

    /// Redeems `shares` owned by `caller` for a proportional cut of both
    /// reserves, rounded down.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `shares` is zero or both payouts
    ///   round to zero.
    /// - [`PoolError::InsufficientShares`] if `caller` holds fewer shares.
    /// - [`PoolError::Ledger`] if pushing the first asset fails.
    /// - [`PoolError::InvariantViolation`] if custody cannot cover the
    ///   payout, or the second push fails after the first went through.
    fn remove_liquidity(
        &mut self,
        caller: &AccountId,
        shares: Shares,
    ) -> Result<WithdrawalReceipt, PoolError>;

    /// Current `(reserve0, reserve1)`.
    #[must_use]
    fn reserves(&self) -> Reserves;

    /// Total outstanding shares.
    #[must_use]
    fn total_shares(&self) -> Shares;

    /// Shares owned by `participant`.
    #[must_use]
    fn share_balance_of(&self, participant: &AccountId) -> Shares;
}
