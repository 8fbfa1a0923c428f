//! Two-asset constant-product pool.
//!
//! The pool tracks `reserve0` / `reserve1`, issues shares against them, and
//! moves funds through one [`AssetLedger`] per asset. Swaps are priced by
//! [`quote`](crate::quote::quote): a proportional rate minus a flat fee.
//!
//! # Liquidity
//!
//! 1. First deposit: `shares = isqrt(amount0 × amount1)`
//! 2. Later deposits must satisfy `reserve0 × amount1 == reserve1 × amount0`
//!    and mint `min(amount0 × total / reserve0, amount1 × total / reserve1)`
//! 3. Withdrawal pays `shares × reserve_i / total` of each asset
//!
//! Products of two amounts are taken in 256 bits, so 18-decimal reserves in
//! the `10^22` range and beyond work without overflow.
//!
//! # Atomicity
//!
//! Every operation validates and computes all amounts first, then applies
//! reserves and shares, then moves funds. If a transfer fails the state is
//! put back and completed transfers are refunded. A failure that cannot be
//! undone is reported as [`PoolError::InvariantViolation`].

use tracing::{debug, error, warn};

use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, DepositReceipt, FeeRate, PoolSnapshot, ReserveDelta,
    Reserves, Shares, Side, SwapReceipt, WithdrawalReceipt,
};
use crate::error::{LedgerError, PoolError};
use crate::math::{isqrt, mul_div_floor, widening_mul};
use crate::quote::quote;
use crate::state::{ReserveLedger, ShareLedger};
use crate::traits::{AssetLedger, LiquidityPool, SwapPool};

/// Share change to reverse when an operation is rolled back.
#[derive(Debug, Clone, Copy)]
enum ShareUndo {
    /// Shares were minted; burn them.
    Burn(Shares),
    /// Shares were burned; mint them back.
    Mint(Shares),
}

/// A two-asset pool backed by external asset ledgers.
///
/// `L0` is the ledger of asset0 and `L1` the ledger of asset1; both default
/// to the same type. The pool owns its ledger handles; pass `&mut` ledgers
/// to keep ownership elsewhere.
///
/// # Example
///
/// ```rust
/// use cpamm::assets::MemoryLedger;
/// use cpamm::domain::{AccountId, Amount, AssetId, FeeRate, Shares};
/// use cpamm::pools::ConstantProductPool;
/// use cpamm::traits::{LiquidityPool, SwapPool};
///
/// let owner = AccountId::from_bytes([1u8; 32]);
/// let custody = AccountId::from_bytes([0xcc; 32]);
/// let gov = AssetId::from_bytes([0x10; 32]);
/// let util = AssetId::from_bytes([0x20; 32]);
///
/// let mut l0 = MemoryLedger::new(gov);
/// let mut l1 = MemoryLedger::new(util);
/// l0.mint(&owner, Amount::new(10_000)).expect("mint");
/// l1.mint(&owner, Amount::new(20_000)).expect("mint");
/// l0.approve(&owner, &custody, Amount::new(10_000));
/// l1.approve(&owner, &custody, Amount::new(20_000));
///
/// let mut pool = ConstantProductPool::from_ledgers(l0, l1, custody, FeeRate::default())
///     .expect("pool created");
///
/// let receipt = pool
///     .add_liquidity(&owner, Amount::new(10_000), Amount::new(20_000))
///     .expect("seeded");
/// assert_eq!(receipt.shares(), Shares::new(14_142));
/// assert_eq!(pool.swap_rate(&gov, Amount::new(100)), Ok(Amount::new(197)));
/// ```
#[derive(Debug, Clone)]
pub struct ConstantProductPool<L0, L1 = L0> {
    config: PoolConfig,
    reserves: ReserveLedger,
    shares: ShareLedger,
    ledger0: L0,
    ledger1: L1,
}

impl<L0: AssetLedger, L1: AssetLedger> ConstantProductPool<L0, L1> {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// - Propagates any error from [`PoolConfig::validate`].
    /// - [`PoolError::InvalidConfiguration`] if a ledger's asset does not
    ///   match the configured asset on its side.
    pub fn new(config: PoolConfig, ledger0: L0, ledger1: L1) -> Result<Self, PoolError> {
        config.validate()?;
        if ledger0.asset_id() != config.pair().first() {
            return Err(PoolError::InvalidConfiguration(
                "ledger0 does not track asset0",
            ));
        }
        if ledger1.asset_id() != config.pair().second() {
            return Err(PoolError::InvalidConfiguration(
                "ledger1 does not track asset1",
            ));
        }
        debug!(%config, "pool created");
        Ok(Self {
            config,
            reserves: ReserveLedger::new(),
            shares: ShareLedger::new(),
            ledger0,
            ledger1,
        })
    }

    /// Creates an empty pool trading the assets of `ledger0` and `ledger1`.
    ///
    /// # Errors
    ///
    /// Same as [`PoolConfig::new`].
    pub fn from_ledgers(
        ledger0: L0,
        ledger1: L1,
        custodian: AccountId,
        fee: FeeRate,
    ) -> Result<Self, PoolError> {
        let config = PoolConfig::new(ledger0.asset_id(), ledger1.asset_id(), custodian, fee)?;
        Self::new(config, ledger0, ledger1)
    }

    /// Returns the pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Account the pool holds its assets under.
    #[must_use]
    pub const fn custodian(&self) -> AccountId {
        self.config.custodian()
    }

    /// Ledger of asset0.
    pub const fn ledger0(&self) -> &L0 {
        &self.ledger0
    }

    /// Ledger of asset1.
    pub const fn ledger1(&self) -> &L1 {
        &self.ledger1
    }

    /// Mutable ledger of asset0, for funding and approvals outside the pool.
    pub fn ledger0_mut(&mut self) -> &mut L0 {
        &mut self.ledger0
    }

    /// Mutable ledger of asset1, for funding and approvals outside the pool.
    pub fn ledger1_mut(&mut self) -> &mut L1 {
        &mut self.ledger1
    }

    /// Consumes the pool and hands back its ledgers.
    pub fn into_ledgers(self) -> (L0, L1) {
        (self.ledger0, self.ledger1)
    }

    /// Captures pair, reserves, total shares and fee.
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            pair: *self.config.pair(),
            reserves: self.reserves.current(),
            total_shares: self.shares.total(),
            fee: self.config.fee(),
        }
    }

    /// Shares `add_liquidity(amount0, amount1)` would mint right now.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ProportionMismatch`] for a seeded pool and a deposit
    ///   off the reserve ratio.
    /// - [`PoolError::InvalidAmount`] if no shares would be minted.
    /// - [`PoolError::Overflow`] if the minted share count exceeds `u128`.
    pub fn preview_deposit(&self, amount0: Amount, amount1: Amount) -> Result<Shares, PoolError> {
        let reserves = self.reserves.current();
        let total = self.shares.total();

        let minted = if reserves.is_empty() {
            isqrt(widening_mul(amount0.get(), amount1.get()))
        } else {
            if total.is_zero() {
                return Err(PoolError::InvariantViolation("seeded pool has no shares"));
            }
            let r0 = reserves.reserve0();
            let r1 = reserves.reserve1();
            // cross-multiplied so no rounding enters the ratio check
            if widening_mul(r0.get(), amount1.get()) != widening_mul(r1.get(), amount0.get()) {
                return Err(PoolError::ProportionMismatch);
            }
            let by0 = mul_div_floor(
                amount0.get(),
                total.get(),
                r0.get(),
                "share numerator overflow",
            )?;
            let by1 = mul_div_floor(
                amount1.get(),
                total.get(),
                r1.get(),
                "share numerator overflow",
            )?;
            by0.min(by1)
        };

        if minted == 0 {
            return Err(PoolError::InvalidAmount("shares = 0"));
        }
        Ok(Shares::new(minted))
    }

    /// Amounts `remove_liquidity(shares)` would pay out, regardless of who
    /// holds the shares.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `shares` is zero or both amounts
    ///   round to zero.
    /// - [`PoolError::EmptyPool`] if no shares are outstanding.
    /// - [`PoolError::InsufficientShares`] if `shares` exceeds the total.
    pub fn preview_withdrawal(&self, shares: Shares) -> Result<WithdrawalReceipt, PoolError> {
        if shares.is_zero() {
            return Err(PoolError::InvalidAmount("shares = 0"));
        }
        let total = self.shares.total();
        if total.is_zero() {
            return Err(PoolError::EmptyPool);
        }
        if shares > total {
            return Err(PoolError::InsufficientShares {
                have: total.get(),
                need: shares.get(),
            });
        }
        let reserves = self.reserves.current();
        let amount0 = mul_div_floor(
            shares.get(),
            reserves.reserve0().get(),
            total.get(),
            "withdrawal numerator overflow",
        )?;
        let amount1 = mul_div_floor(
            shares.get(),
            reserves.reserve1().get(),
            total.get(),
            "withdrawal numerator overflow",
        )?;
        if amount0 == 0 && amount1 == 0 {
            return Err(PoolError::InvalidAmount("amounts = 0"));
        }
        Ok(WithdrawalReceipt::new(
            shares,
            Amount::new(amount0),
            Amount::new(amount1),
        ))
    }

    /// Amount of the other asset that makes a deposit of `amount` of
    /// `asset` exactly proportional to current reserves.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidToken`] if `asset` is not in the pair.
    /// - [`PoolError::InvalidAmount`] if `amount` is zero.
    /// - [`PoolError::EmptyPool`] if the pool is empty (any ratio is fine).
    /// - [`PoolError::ProportionMismatch`] if no integer counterpart keeps
    ///   the ratio exact.
    pub fn deposit_amount_for(&self, asset: &AssetId, amount: Amount) -> Result<Amount, PoolError> {
        let side = self.config.pair().side_of(asset)?;
        if amount.is_zero() {
            return Err(PoolError::InvalidAmount("amount = 0"));
        }
        if self.reserves.is_empty() {
            return Err(PoolError::EmptyPool);
        }
        let r_side = self.reserves.get(side);
        let r_other = self.reserves.get(side.opposite());
        let other = Amount::new(mul_div_floor(
            amount.get(),
            r_other.get(),
            r_side.get(),
            "deposit ratio overflow",
        )?);
        if widening_mul(r_side.get(), other.get()) != widening_mul(r_other.get(), amount.get()) {
            return Err(PoolError::ProportionMismatch);
        }
        Ok(other)
    }

    /// Checks that custody holds at least the tracked reserve of each asset.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvariantViolation`] if a ledger reports less
    /// than the tracked reserve.
    pub fn check_custody(&self) -> Result<(), PoolError> {
        for side in [Side::Zero, Side::One] {
            if self.custody_balance(side) < self.reserves.get(side) {
                error!(?side, reserve = %self.reserves.get(side), "custody below reserve");
                return Err(PoolError::InvariantViolation(
                    "custody balance below tracked reserve",
                ));
            }
        }
        Ok(())
    }

    fn custody_balance(&self, side: Side) -> Amount {
        let custodian = self.config.custodian();
        match side {
            Side::Zero => self.ledger0.balance_of(&custodian),
            Side::One => self.ledger1.balance_of(&custodian),
        }
    }

    fn pull(&mut self, side: Side, owner: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }
        let custodian = self.config.custodian();
        match side {
            Side::Zero => self.ledger0.transfer_from(owner, &custodian, amount),
            Side::One => self.ledger1.transfer_from(owner, &custodian, amount),
        }
    }

    fn push(
        &mut self,
        side: Side,
        recipient: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }
        let custodian = self.config.custodian();
        match side {
            Side::Zero => self.ledger0.transfer(&custodian, recipient, amount),
            Side::One => self.ledger1.transfer(&custodian, recipient, amount),
        }
    }

    /// Restores reserves and shares, refunds a completed pull, and returns
    /// `cause` (or an invariant violation if the rollback itself fails).
    fn abort<T>(
        &mut self,
        cause: PoolError,
        caller: &AccountId,
        previous: Reserves,
        undo: ShareUndo,
        refund: Option<(Side, Amount)>,
    ) -> Result<T, PoolError> {
        warn!(%caller, %cause, "operation failed, rolling back");
        self.reserves.restore(previous);
        let shares_undone = match undo {
            ShareUndo::Burn(s) => self.shares.burn(caller, s),
            ShareUndo::Mint(s) => self.shares.mint(caller, s),
        };
        if let Err(e) = shares_undone {
            error!(%caller, %e, "share rollback failed");
            return Err(PoolError::InvariantViolation("share rollback failed"));
        }
        if let Some((side, amount)) = refund {
            if let Err(e) = self.push(side, caller, amount) {
                error!(%caller, ?side, %amount, %e, "refund failed");
                return Err(PoolError::InvariantViolation(
                    "refund after failed transfer did not complete",
                ));
            }
        }
        Err(cause)
    }
}

impl<L0: AssetLedger, L1: AssetLedger> SwapPool for ConstantProductPool<L0, L1> {
    /// Pulls `amount_in` of `asset_in`, pushes the quoted output of the
    /// other asset, and moves both reserves by the same amounts.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidToken`] if `asset_in` is not in the pool pair.
    /// - [`PoolError::InvalidAmount`] if `amount_in` is zero.
    /// - Any [`quote`] error.
    /// - [`PoolError::Ledger`] if the pull or the push fails.
    fn swap(
        &mut self,
        caller: &AccountId,
        asset_in: &AssetId,
        amount_in: Amount,
    ) -> Result<SwapReceipt, PoolError> {
        let side_in = self.config.pair().side_of(asset_in)?;
        if amount_in.is_zero() {
            return Err(PoolError::InvalidAmount("amount in = 0"));
        }
        let q = quote(
            self.config.pair(),
            asset_in,
            amount_in,
            &self.reserves.current(),
            &self.config.fee(),
        )?;
        let side_out = side_in.opposite();

        let previous = self
            .reserves
            .apply(&ReserveDelta::swap(side_in, amount_in, q.amount_out))?;

        if let Err(e) = self.pull(side_in, caller, amount_in) {
            warn!(%caller, %e, "swap input transfer failed");
            self.reserves.restore(previous);
            return Err(e.into());
        }
        if let Err(e) = self.push(side_out, caller, q.amount_out) {
            self.reserves.restore(previous);
            if let Err(refund) = self.push(side_in, caller, amount_in) {
                error!(%caller, %refund, "swap refund failed");
                return Err(PoolError::InvariantViolation(
                    "refund after failed transfer did not complete",
                ));
            }
            warn!(%caller, %e, "swap output transfer failed, input refunded");
            return Err(e.into());
        }

        let asset_out = self.config.pair().get(side_out);
        debug!(
            %caller,
            %asset_in,
            %amount_in,
            %asset_out,
            amount_out = %q.amount_out,
            fee = %q.fee,
            reserves = %self.reserves.current(),
            "swap"
        );
        Ok(SwapReceipt::new(
            *asset_in,
            amount_in,
            asset_out,
            q.amount_out,
            q.fee,
        ))
    }

    fn swap_rate(&self, asset_in: &AssetId, amount_in: Amount) -> Result<Amount, PoolError> {
        quote(
            self.config.pair(),
            asset_in,
            amount_in,
            &self.reserves.current(),
            &self.config.fee(),
        )
        .map(|q| q.amount_out)
    }

    fn asset_pair(&self) -> &AssetPair {
        self.config.pair()
    }

    fn fee_rate(&self) -> FeeRate {
        self.config.fee()
    }
}

impl<L0: AssetLedger, L1: AssetLedger> LiquidityPool for ConstantProductPool<L0, L1> {
    fn add_liquidity(
        &mut self,
        caller: &AccountId,
        amount0: Amount,
        amount1: Amount,
    ) -> Result<DepositReceipt, PoolError> {
        let minted = self.preview_deposit(amount0, amount1)?;

        let previous = self
            .reserves
            .apply(&ReserveDelta::deposit(amount0, amount1))?;
        if let Err(e) = self.shares.mint(caller, minted) {
            self.reserves.restore(previous);
            return Err(e);
        }

        if let Err(e) = self.pull(Side::Zero, caller, amount0) {
            return self.abort(e.into(), caller, previous, ShareUndo::Burn(minted), None);
        }
        if let Err(e) = self.pull(Side::One, caller, amount1) {
            return self.abort(
                e.into(),
                caller,
                previous,
                ShareUndo::Burn(minted),
                Some((Side::Zero, amount0)),
            );
        }

        debug!(
            %caller,
            %amount0,
            %amount1,
            shares = %minted,
            total_shares = %self.shares.total(),
            "liquidity added"
        );
        Ok(DepositReceipt::new(amount0, amount1, minted))
    }

    fn remove_liquidity(
        &mut self,
        caller: &AccountId,
        shares: Shares,
    ) -> Result<WithdrawalReceipt, PoolError> {
        if shares.is_zero() {
            return Err(PoolError::InvalidAmount("shares = 0"));
        }
        let held = self.shares.balance_of(caller);
        if held < shares {
            return Err(PoolError::InsufficientShares {
                have: held.get(),
                need: shares.get(),
            });
        }
        let receipt = self.preview_withdrawal(shares)?;
        let (amount0, amount1) = (receipt.amount0(), receipt.amount1());

        if self.custody_balance(Side::Zero) < amount0 || self.custody_balance(Side::One) < amount1 {
            error!(%caller, %amount0, %amount1, "custody cannot cover withdrawal");
            return Err(PoolError::InvariantViolation(
                "custody balance below payout",
            ));
        }

        let previous = self
            .reserves
            .apply(&ReserveDelta::withdrawal(amount0, amount1))?;
        if let Err(e) = self.shares.burn(caller, shares) {
            self.reserves.restore(previous);
            return Err(e);
        }

        if let Err(e) = self.push(Side::Zero, caller, amount0) {
            return self.abort(e.into(), caller, previous, ShareUndo::Mint(shares), None);
        }
        if let Err(e) = self.push(Side::One, caller, amount1) {
            // asset0 already left custody and cannot be pulled back
            error!(%caller, %amount0, %amount1, %e, "second withdrawal payout failed");
            return Err(PoolError::InvariantViolation(
                "withdrawal payout failed after first transfer",
            ));
        }

        debug!(
            %caller,
            %shares,
            %amount0,
            %amount1,
            total_shares = %self.shares.total(),
            "liquidity removed"
        );
        Ok(receipt)
    }

    fn reserves(&self) -> Reserves {
        self.reserves.current()
    }

    fn total_shares(&self) -> Shares {
        self.shares.total()
    }

    fn share_balance_of(&self, participant: &AccountId) -> Shares {
        self.shares.balance_of(participant)
    }
}
