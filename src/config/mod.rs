//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint a pool is created from:
//! which two assets it trades, which account holds its custody, and the
//! swap fee.

mod pool_config;

pub use pool_config::PoolConfig;
