//! In-memory asset ledger with balances and allowances.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::LedgerError;
use crate::traits::AssetLedger;

/// A fungible-asset ledger kept in memory.
///
/// Behaves like a token contract: accounts hold balances, owners approve
/// spenders for allowances, and `transfer_from` consumes allowance. Useful
/// for simulations and as the collaborator in tests.
///
/// # Examples
///
/// ```
/// use cpamm::assets::MemoryLedger;
/// use cpamm::domain::{AccountId, Amount, AssetId};
/// use cpamm::traits::AssetLedger;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let pool = AccountId::from_bytes([9u8; 32]);
///
/// let mut ledger = MemoryLedger::new(AssetId::from_bytes([7u8; 32]));
/// ledger.mint(&alice, Amount::new(1_000)).expect("mint");
/// ledger.approve(&alice, &pool, Amount::new(400));
///
/// ledger.transfer_from(&alice, &pool, Amount::new(300)).expect("pull");
/// assert_eq!(ledger.balance_of(&pool), Amount::new(300));
/// assert_eq!(ledger.allowance(&alice, &pool), Amount::new(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLedger {
    asset: AssetId,
    balances: BTreeMap<AccountId, Amount>,
    allowances: BTreeMap<(AccountId, AccountId), Amount>,
    total_supply: Amount,
}

impl MemoryLedger {
    /// Creates an empty ledger for `asset`.
    #[must_use]
    pub fn new(asset: AssetId) -> Self {
        Self {
            asset,
            balances: BTreeMap::new(),
            allowances: BTreeMap::new(),
            total_supply: Amount::ZERO,
        }
    }

    /// Creates `amount` new units owned by `account`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the total supply would exceed
    /// `u128`.
    pub fn mint(&mut self, account: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        // balance <= supply
        let balance = self
            .balance_of(account)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.total_supply = supply;
        self.balances.insert(*account, balance);
        Ok(())
    }

    /// Sets the allowance `owner` grants `spender`, replacing any previous
    /// value.
    pub fn approve(&mut self, owner: &AccountId, spender: &AccountId, amount: Amount) {
        if amount.is_zero() {
            self.allowances.remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), amount);
        }
    }

    /// Remaining allowance `owner` granted `spender`.
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Sum of all balances.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn move_balance(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let have = self.balance_of(from);
        let Some(from_after) = have.checked_sub(&amount) else {
            return Err(LedgerError::InsufficientBalance {
                have: have.get(),
                need: amount.get(),
            });
        };
        if from == to {
            return Ok(());
        }
        let to_after = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.set_balance(from, from_after);
        self.set_balance(to, to_after);
        Ok(())
    }

    fn set_balance(&mut self, account: &AccountId, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, amount);
        }
    }
}

impl AssetLedger for MemoryLedger {
    fn asset_id(&self) -> AssetId {
        self.asset
    }

    fn transfer_from(
        &mut self,
        owner: &AccountId,
        custodian: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let allowed = self.allowance(owner, custodian);
        let Some(remaining) = allowed.checked_sub(&amount) else {
            return Err(LedgerError::InsufficientAllowance {
                have: allowed.get(),
                need: amount.get(),
            });
        };
        self.move_balance(owner, custodian, amount)?;
        self.approve(owner, custodian, remaining);
        trace!(asset = %self.asset, from = %owner, to = %custodian, %amount, "transfer_from");
        Ok(())
    }

    fn transfer(
        &mut self,
        custodian: &AccountId,
        recipient: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.move_balance(custodian, recipient, amount)?;
        trace!(asset = %self.asset, from = %custodian, to = %recipient, %amount, "transfer");
        Ok(())
    }

    fn balance_of(&self, owner: &AccountId) -> Amount {
        self.balances.get(owner).copied().unwrap_or(Amount::ZERO)
    }
}
