//! Domain value types used throughout the pool engine.
//!
//! Identities, quantities, the asset pair, the fee ratio, reserve values
//! and operation receipts. Quantities are `u128` newtypes with checked
//! arithmetic; identities are opaque 32-byte values.

mod account_id;
mod amount;
mod asset_id;
mod asset_pair;
mod fee_rate;
mod receipt;
mod reserves;
mod shares;
mod side;
mod snapshot;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use fee_rate::FeeRate;
pub use receipt::{DepositReceipt, SwapReceipt, WithdrawalReceipt};
pub use reserves::{Delta, ReserveDelta, Reserves};
pub use shares::Shares;
pub use side::Side;
pub use snapshot::PoolSnapshot;
