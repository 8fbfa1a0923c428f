//! Unified error types for the pool engine.
//!
//! Every fallible operation in the crate returns [`PoolError`]. Failures
//! raised by the external asset ledgers are carried unchanged inside
//! [`PoolError::Ledger`].

use thiserror::Error;

/// Errors raised by an [`AssetLedger`](crate::traits::AssetLedger)
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The debited account does not hold enough of the asset.
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance {
        /// Current balance of the debited account.
        have: u128,
        /// Amount the transfer required.
        need: u128,
    },

    /// The owner has not approved the spender for enough of the asset.
    #[error("insufficient allowance: have {have}, need {need}")]
    InsufficientAllowance {
        /// Remaining allowance.
        have: u128,
        /// Amount the transfer required.
        need: u128,
    },

    /// A credited balance or the total supply would exceed `u128`.
    #[error("ledger balance overflow")]
    Overflow,
}

/// Errors returned by pool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The asset is not one of the pool's two assets.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A zero or degenerate quantity was supplied or would result.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// Deposit ratio does not match the current reserve ratio.
    #[error("x / y != dx / dy")]
    ProportionMismatch,

    /// The participant holds fewer shares than requested.
    #[error("insufficient shares: have {have}, need {need}")]
    InsufficientShares {
        /// Shares currently held.
        have: u128,
        /// Shares requested.
        need: u128,
    },

    /// Quote or swap attempted against an empty pool.
    #[error("pool is empty")]
    EmptyPool,

    /// The swap output would drain the output reserve.
    #[error("insufficient liquidity for swap output")]
    InsufficientLiquidity,

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Checked arithmetic overflowed `u128`.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Checked arithmetic went below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Internal consistency check failed.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),

    /// Failure reported by an external asset ledger.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportion_mismatch_message() {
        assert_eq!(PoolError::ProportionMismatch.to_string(), "x / y != dx / dy");
    }

    #[test]
    fn invalid_amount_message_carries_reason() {
        let e = PoolError::InvalidAmount("shares = 0");
        assert_eq!(e.to_string(), "invalid amount: shares = 0");
    }

    #[test]
    fn ledger_error_is_transparent() {
        let e: PoolError = LedgerError::InsufficientAllowance { have: 1, need: 5 }.into();
        assert_eq!(e.to_string(), "insufficient allowance: have 1, need 5");
        assert!(matches!(
            e,
            PoolError::Ledger(LedgerError::InsufficientAllowance { have: 1, need: 5 })
        ));
    }
}
