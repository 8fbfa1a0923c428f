//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use cpamm::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, DepositReceipt, FeeRate, PoolSnapshot, Reserves,
    Shares, Side, SwapReceipt, WithdrawalReceipt,
};

pub use crate::traits::{AssetLedger, LiquidityPool, SwapPool};

pub use crate::math::CheckedArithmetic;

pub use crate::config::PoolConfig;

pub use crate::error::{LedgerError, PoolError, Result};

pub use crate::assets::MemoryLedger;

pub use crate::pools::ConstantProductPool;
