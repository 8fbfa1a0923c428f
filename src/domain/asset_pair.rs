//! The pool's two distinct assets.

use super::{AssetId, Side};
use crate::error::PoolError;

/// The two assets a pool trades, in creation order.
///
/// Unlike a canonically sorted pair, the order is the one given at pool
/// creation: `first()` is asset0 and backs `reserve0`, `second()` is
/// asset1 and backs `reserve1`.
///
/// # Examples
///
/// ```
/// use cpamm::domain::{AssetId, AssetPair, Side};
///
/// let gov = AssetId::from_bytes([2u8; 32]);
/// let util = AssetId::from_bytes([1u8; 32]);
///
/// let pair = AssetPair::new(gov, util).expect("distinct assets");
/// assert_eq!(pair.first(), gov);
/// assert_eq!(pair.side_of(&util), Ok(Side::One));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    asset0: AssetId,
    asset1: AssetId,
}

impl AssetPair {
    /// Creates a pair from two distinct assets.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidToken`] if both ids are equal.
    pub fn new(asset0: AssetId, asset1: AssetId) -> Result<Self, PoolError> {
        if asset0 == asset1 {
            return Err(PoolError::InvalidToken(
                "pool requires two distinct assets",
            ));
        }
        Ok(Self { asset0, asset1 })
    }

    /// Returns asset0.
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.asset0
    }

    /// Returns asset1.
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.asset1
    }

    /// Returns the asset on `side`.
    #[must_use]
    pub const fn get(&self, side: Side) -> AssetId {
        match side {
            Side::Zero => self.asset0,
            Side::One => self.asset1,
        }
    }

    /// Returns `true` if `asset` is one of the pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset0 == *asset || self.asset1 == *asset
    }

    /// Returns the side `asset` sits on.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidToken`] if `asset` is not in the pair.
    pub fn side_of(&self, asset: &AssetId) -> Result<Side, PoolError> {
        if *asset == self.asset0 {
            Ok(Side::Zero)
        } else if *asset == self.asset1 {
            Ok(Side::One)
        } else {
            Err(PoolError::InvalidToken("invalid token"))
        }
    }

    /// Returns the counterpart of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidToken`] if `asset` is not in the pair.
    pub fn other(&self, asset: &AssetId) -> Result<AssetId, PoolError> {
        self.side_of(asset).map(|side| self.get(side.opposite()))
    }
}
