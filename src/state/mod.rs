//! Mutable pool state: reserves and share balances.
//!
//! Both ledgers are plain owned values held by the pool; they never move
//! assets themselves.

mod reserve_ledger;
mod share_ledger;

pub use reserve_ledger::ReserveLedger;
pub use share_ledger::ShareLedger;
