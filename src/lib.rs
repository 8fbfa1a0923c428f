//! # cpamm
//!
//! A two-asset liquidity pool engine: participants deposit both assets in
//! proportion to receive pool shares, burn shares to withdraw, and swap one
//! asset for the other at a rate derived from the reserves minus a flat
//! fee.
//!
//! Asset custody is external. The pool moves funds through one
//! [`AssetLedger`](traits::AssetLedger) per asset and keeps its own books:
//! the two reserves and a share balance per participant. Every operation is
//! atomic; a failed transfer leaves reserves, shares and balances as they
//! were.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize` / `Deserialize` for value types and [`PoolConfig`](config::PoolConfig) |
//!
//! # Quick Start
//!
//! ```rust
//! use cpamm::prelude::*;
//!
//! let owner = AccountId::from_bytes([1u8; 32]);
//! let trader = AccountId::from_bytes([2u8; 32]);
//! let custody = AccountId::from_bytes([0xcc; 32]);
//! let gov = AssetId::from_bytes([0x10; 32]);
//! let util = AssetId::from_bytes([0x20; 32]);
//!
//! // 1. Two ledgers, funded and approved for the pool's custody account
//! let mut l0 = MemoryLedger::new(gov);
//! let mut l1 = MemoryLedger::new(util);
//! for who in [owner, trader] {
//!     l0.mint(&who, Amount::new(50_000)).expect("mint");
//!     l1.mint(&who, Amount::new(50_000)).expect("mint");
//!     l0.approve(&who, &custody, Amount::new(50_000));
//!     l1.approve(&who, &custody, Amount::new(50_000));
//! }
//!
//! // 2. A pool with the default 3/100 fee
//! let mut pool = ConstantProductPool::from_ledgers(l0, l1, custody, FeeRate::default())
//!     .expect("pool created");
//!
//! // 3. Seed it at a 1:2 ratio
//! pool.add_liquidity(&owner, Amount::new(10_000), Amount::new(20_000))
//!     .expect("seeded");
//!
//! // 4. Quote, then swap
//! assert_eq!(pool.swap_rate(&gov, Amount::new(100)), Ok(Amount::new(197)));
//! let receipt = pool.swap(&trader, &gov, Amount::new(1_000)).expect("swap");
//! assert_eq!(receipt.amount_out(), Amount::new(1_970));
//! assert_eq!(pool.ledger0().balance_of(&custody), Amount::new(11_000));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │ ConstantProductPool  │  validate, compute, apply, transfer, roll back
//! └──────────┬───────────┘
//!            │ quote / ReserveLedger / ShareLedger
//!            ▼
//! ┌──────────────────────┐
//! │   State and pricing  │  reserves, share balances, swap output
//! └──────────┬───────────┘
//!            │ AssetLedger (one per asset)
//!            ▼
//! ┌──────────────────────┐
//! │   External custody   │  MemoryLedger or a caller-supplied ledger
//! └──────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), receipts |
//! | [`traits`] | [`AssetLedger`](traits::AssetLedger), [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): pair, custodian, fee |
//! | [`state`]  | [`ReserveLedger`](state::ReserveLedger) and [`ShareLedger`](state::ShareLedger) |
//! | [`quote`]  | Swap output computation shared by quoting and execution |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) |
//! | [`assets`] | [`MemoryLedger`](assets::MemoryLedger), an in-memory asset ledger |
//! | [`math`]   | Checked arithmetic, 256-bit `mul_div_floor`, integer square root |
//! | [`error`]  | [`PoolError`](error::PoolError) and [`LedgerError`](error::LedgerError) |
//! | [`prelude`] | Convenience re-exports |

pub mod assets;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod quote;
pub mod state;
pub mod traits;
