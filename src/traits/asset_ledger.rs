//! Interface to the external ledger of one pooled asset.
//!
//! The pool never stores asset balances itself: it only asks each asset's
//! ledger to move funds between a participant and the pool's custody
//! account, and to report balances.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::LedgerError;

/// Operations the pool needs from each of its two asset ledgers.
///
/// `custodian` is the account the pool holds assets under. It acts as the
/// spender in [`transfer_from`](AssetLedger::transfer_from) and as the
/// sender in [`transfer`](AssetLedger::transfer).
///
/// Implementations must be all-or-nothing per call: a failed transfer
/// changes no balance and no allowance.
pub trait AssetLedger {
    /// The asset this ledger tracks.
    fn asset_id(&self) -> AssetId;

    /// Pulls `amount` from `owner` into `custodian`, consuming allowance
    /// `owner` granted to `custodian`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientAllowance`] if the allowance is too low.
    /// - [`LedgerError::InsufficientBalance`] if `owner` holds too little.
    fn transfer_from(
        &mut self,
        owner: &AccountId,
        custodian: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Pushes `amount` from `custodian` to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `custodian` holds too little.
    fn transfer(
        &mut self,
        custodian: &AccountId,
        recipient: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Balance of `owner`.
    fn balance_of(&self, owner: &AccountId) -> Amount;
}

impl<L: AssetLedger + ?Sized> AssetLedger for &mut L {
    fn asset_id(&self) -> AssetId {
        (**self).asset_id()
    }

    fn transfer_from(
        &mut self,
        owner: &AccountId,
        custodian: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        (**self).transfer_from(owner, custodian, amount)
    }

    fn transfer(
        &mut self,
        custodian: &AccountId,
        recipient: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        (**self).transfer(custodian, recipient, amount)
    }

    fn balance_of(&self, owner: &AccountId) -> Amount {
        (**self).balance_of(owner)
    }
}
