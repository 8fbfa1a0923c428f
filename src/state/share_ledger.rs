//! Participant share balances.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Shares};
use crate::error::PoolError;
use crate::math::CheckedArithmetic;

/// Maps participants to the shares they own.
///
/// `total()` always equals the sum of all balances: both sides are only
/// ever changed together, and each operation validates before mutating.
/// Accounts whose balance returns to zero are dropped from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    balances: BTreeMap<AccountId, Shares>,
    total: Shares,
}

impl ShareLedger {
    /// An empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total outstanding shares.
    pub const fn total(&self) -> Shares {
        self.total
    }

    /// Shares owned by `account`; zero for unknown accounts.
    pub fn balance_of(&self, account: &AccountId) -> Shares {
        self.balances.get(account).copied().unwrap_or(Shares::ZERO)
    }

    /// Number of accounts holding a non-zero balance.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.balances.len()
    }

    /// Iterates over `(account, balance)` in account order.
    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &Shares)> {
        self.balances.iter()
    }

    /// Credits `amount` new shares to `account`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `amount` is zero.
    /// - [`PoolError::Overflow`] if the total would exceed `u128`.
    pub fn mint(&mut self, account: &AccountId, amount: Shares) -> Result<(), PoolError> {
        if amount.is_zero() {
            return Err(PoolError::InvalidAmount("shares = 0"));
        }
        let total = self.total.safe_add(&amount)?;
        // balance <= total, so this cannot overflow once the total fits
        let balance = self.balance_of(account).safe_add(&amount)?;
        self.total = total;
        self.balances.insert(*account, balance);
        Ok(())
    }

    /// Destroys `amount` shares owned by `account`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `amount` is zero.
    /// - [`PoolError::InsufficientShares`] if the balance is below `amount`.
    pub fn burn(&mut self, account: &AccountId, amount: Shares) -> Result<(), PoolError> {
        if amount.is_zero() {
            return Err(PoolError::InvalidAmount("shares = 0"));
        }
        let held = self.balance_of(account);
        let Some(balance) = held.checked_sub(&amount) else {
            return Err(PoolError::InsufficientShares {
                have: held.get(),
                need: amount.get(),
            });
        };
        let total = self
            .total
            .checked_sub(&amount)
            .ok_or(PoolError::InvariantViolation("total shares below a balance"))?;
        self.total = total;
        if balance.is_zero() {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, balance);
        }
        Ok(())
    }
}
