//! Core trait abstractions.
//!
//! [`SwapPool`] and [`LiquidityPool`] are the pool's public operation
//! surface; [`AssetLedger`] is what the pool requires from each external
//! asset ledger.

mod asset_ledger;
mod liquidity_pool;
mod swap_pool;

pub use asset_ledger::AssetLedger;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
