//! Point-in-time view of a pool.

use super::{AssetPair, FeeRate, Reserves, Shares};

/// Everything needed to price against a pool, captured at one moment.
///
/// Serializable under the `serde` feature for export to front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolSnapshot {
    /// The pool's assets.
    pub pair: AssetPair,
    /// Reserves at capture time.
    pub reserves: Reserves,
    /// Outstanding shares at capture time.
    pub total_shares: Shares,
    /// Swap fee ratio.
    pub fee: FeeRate,
}
