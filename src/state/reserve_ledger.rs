//! Tracked reserves of a pool.

use crate::domain::{Amount, ReserveDelta, Reserves, Side};
use crate::error::PoolError;

/// Owner of the pool's [`Reserves`].
///
/// Every mutation goes through [`ReserveLedger::apply`], which rejects
/// negative reserves and half-empty states. The orchestrator stages an
/// update with [`ReserveLedger::preview`] before moving funds and can put
/// a snapshot back with [`ReserveLedger::restore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveLedger {
    reserves: Reserves,
}

impl ReserveLedger {
    /// An empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reserves: Reserves::EMPTY,
        }
    }

    /// Current reserves.
    pub const fn current(&self) -> Reserves {
        self.reserves
    }

    /// Reserve on `side`.
    pub const fn get(&self, side: Side) -> Amount {
        self.reserves.get(side)
    }

    /// Returns `true` while the pool has never been seeded or was fully
    /// withdrawn.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserves.is_empty()
    }

    /// Reserves that [`ReserveLedger::apply`] would produce.
    ///
    /// # Errors
    ///
    /// See [`Reserves::after`].
    pub fn preview(&self, delta: &ReserveDelta) -> Result<Reserves, PoolError> {
        self.reserves.after(delta)
    }

    /// Applies `delta` atomically and returns the previous reserves.
    ///
    /// # Errors
    ///
    /// See [`Reserves::after`]; on error nothing changes.
    pub fn apply(&mut self, delta: &ReserveDelta) -> Result<Reserves, PoolError> {
        let next = self.reserves.after(delta)?;
        Ok(core::mem::replace(&mut self.reserves, next))
    }

    /// Puts back a snapshot taken from [`ReserveLedger::apply`].
    pub(crate) fn restore(&mut self, previous: Reserves) {
        self.reserves = previous;
    }
}
