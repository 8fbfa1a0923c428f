//! Swap surface of a pool.
//!
//! [`SwapPool`] covers executing a swap and the read-only quote that
//! prices it. Implementations must price both with the same function so
//! that [`SwapPool::swap_rate`] and the realised output of
//! [`SwapPool::swap`] agree bit for bit for identical reserves.

use crate::domain::{AccountId, Amount, AssetId, AssetPair, FeeRate, SwapReceipt};
use crate::error::PoolError;

/// Trait for pools that exchange one asset for the other.
///
/// # Errors
///
/// Common error variants:
///
/// - [`PoolError::InvalidToken`]: asset is not part of the pool pair
/// - [`PoolError::InvalidAmount`]: zero input or zero output
/// - [`PoolError::EmptyPool`]: the input reserve is zero
/// - [`PoolError::Ledger`]: an asset transfer failed
pub trait SwapPool {
    /// Sells `amount_in` of `asset_in` from `caller` to the pool.
    ///
    /// The input is pulled from `caller`, the output is pushed back to
    /// `caller`, and reserves move by the same amounts. Either all of this
    /// happens or none of it.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidToken`] if `asset_in` is not in the pair.
    /// - [`PoolError::InvalidAmount`] if `amount_in` is zero or the output
    ///   rounds to nothing.
    /// - [`PoolError::EmptyPool`] if the pool holds no input reserve.
    /// - [`PoolError::InsufficientLiquidity`] if the output would drain the
    ///   output reserve.
    /// - [`PoolError::Ledger`] if pulling or pushing funds fails.
    fn swap(
        &mut self,
        caller: &AccountId,
        asset_in: &AssetId,
        amount_in: Amount,
    ) -> Result<SwapReceipt, PoolError>;

    /// Output `swap` would pay for the same input against current reserves.
    ///
    /// # Errors
    ///
    /// Same validation errors as [`SwapPool::swap`], without ledger errors.
    fn swap_rate(&self, asset_in: &AssetId, amount_in: Amount) -> Result<Amount, PoolError>;

    /// The pool's two assets in creation order.
    #[must_use]
    fn asset_pair(&self) -> &AssetPair;

    /// The fee ratio deducted from swap input.
    #[must_use]
    fn fee_rate(&self) -> FeeRate;
}
