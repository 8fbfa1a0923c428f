//! Outcomes of completed pool operations.

use core::fmt;

use super::{Amount, AssetId, Shares};

/// Result of a successful `add_liquidity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositReceipt {
    amount0: Amount,
    amount1: Amount,
    shares: Shares,
}

impl DepositReceipt {
    pub(crate) const fn new(amount0: Amount, amount1: Amount, shares: Shares) -> Self {
        Self {
            amount0,
            amount1,
            shares,
        }
    }

    /// Amount of asset0 pulled into the pool.
    pub const fn amount0(&self) -> Amount {
        self.amount0
    }

    /// Amount of asset1 pulled into the pool.
    pub const fn amount1(&self) -> Amount {
        self.amount1
    }

    /// Shares minted to the depositor.
    pub const fn shares(&self) -> Shares {
        self.shares
    }
}

/// Result of a successful `remove_liquidity`, or of a withdrawal preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawalReceipt {
    shares: Shares,
    amount0: Amount,
    amount1: Amount,
}

impl WithdrawalReceipt {
    pub(crate) const fn new(shares: Shares, amount0: Amount, amount1: Amount) -> Self {
        Self {
            shares,
            amount0,
            amount1,
        }
    }

    /// Shares burned.
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Amount of asset0 paid out.
    pub const fn amount0(&self) -> Amount {
        self.amount0
    }

    /// Amount of asset1 paid out.
    pub const fn amount1(&self) -> Amount {
        self.amount1
    }
}

/// Result of a successful `swap`.
///
/// `fee` is the part of `amount_in` deducted by the fee ratio; it stays in
/// the input reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapReceipt {
    asset_in: AssetId,
    amount_in: Amount,
    asset_out: AssetId,
    amount_out: Amount,
    fee: Amount,
}

impl SwapReceipt {
    pub(crate) const fn new(
        asset_in: AssetId,
        amount_in: Amount,
        asset_out: AssetId,
        amount_out: Amount,
        fee: Amount,
    ) -> Self {
        Self {
            asset_in,
            amount_in,
            asset_out,
            amount_out,
            fee,
        }
    }

    /// The asset sold to the pool.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// Amount sold.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// The asset bought from the pool.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// Amount bought.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Fee deducted from the input.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {} (fee {})",
            self.amount_in, self.asset_in, self.amount_out, self.asset_out, self.fee
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_receipt_display() {
        let r = SwapReceipt::new(
            AssetId::from_bytes([1u8; 32]),
            Amount::new(100),
            AssetId::from_bytes([2u8; 32]),
            Amount::new(197),
            Amount::new(3),
        );
        assert_eq!(
            r.to_string(),
            "100 asset:01010101 -> 197 asset:02020202 (fee 3)"
        );
    }

    #[test]
    fn deposit_receipt_accessors() {
        let r = DepositReceipt::new(Amount::new(4), Amount::new(9), Shares::new(6));
        assert_eq!(r.amount0(), Amount::new(4));
        assert_eq!(r.amount1(), Amount::new(9));
        assert_eq!(r.shares(), Shares::new(6));
    }
}
