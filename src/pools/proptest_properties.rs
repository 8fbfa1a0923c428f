//! Property-based tests for pool accounting.
//!
//! 1. **Quote fidelity**: `swap_rate` equals the amount a swap pays out,
//!    for small reserves and for 18-decimal reserves.
//! 2. **Initial shares**: the first deposit mints `isqrt(amount0 × amount1)`.
//! 3. **Deposit round trip**: add then remove never returns more than
//!    deposited and leaves less than `reserve / total + 1` behind.
//! 4. **Rejected deposits**: a ratio mismatch leaves the pool untouched.
//! 5. **Share conservation**: over random operation sequences the sum of
//!    balances equals the total and custody covers the reserves.

use proptest::prelude::*;

use crate::assets::MemoryLedger;
use crate::domain::{AccountId, Amount, AssetId, FeeRate, Reserves, Shares, Side};
use crate::error::PoolError;
use crate::math::{isqrt, widening_mul, CheckedArithmetic};
use crate::pools::ConstantProductPool;
use crate::traits::{AssetLedger, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const SUPPLY: u128 = 1_000_000_000_000;

const ETHER: u128 = 1_000_000_000_000_000_000;

/// Per-account balance for 18-decimal runs: one trillion whole tokens.
const WIDE_SUPPLY: u128 = 1_000_000_000_000 * ETHER;

fn asset0() -> AssetId {
    AssetId::from_bytes([0x10; 32])
}

fn asset1() -> AssetId {
    AssetId::from_bytes([0x20; 32])
}

fn custody() -> AccountId {
    AccountId::from_bytes([0xcc; 32])
}

fn account(n: u8) -> AccountId {
    AccountId::from_bytes([n; 32])
}

const ACCOUNTS: [u8; 3] = [1, 2, 3];

fn funded(asset: AssetId, supply: u128) -> MemoryLedger {
    let mut ledger = MemoryLedger::new(asset);
    for n in ACCOUNTS {
        let Ok(()) = ledger.mint(&account(n), Amount::new(supply)) else {
            panic!("mint");
        };
        ledger.approve(&account(n), &custody(), Amount::new(supply));
    }
    ledger
}

fn pool_with_supply(supply: u128) -> ConstantProductPool<MemoryLedger> {
    let Ok(pool) = ConstantProductPool::from_ledgers(
        funded(asset0(), supply),
        funded(asset1(), supply),
        custody(),
        FeeRate::default(),
    ) else {
        panic!("valid pool");
    };
    pool
}

fn empty_pool() -> ConstantProductPool<MemoryLedger> {
    pool_with_supply(SUPPLY)
}

fn seed(
    mut pool: ConstantProductPool<MemoryLedger>,
    r0: u128,
    r1: u128,
) -> ConstantProductPool<MemoryLedger> {
    let Ok(_) = pool.add_liquidity(&account(1), Amount::new(r0), Amount::new(r1)) else {
        panic!("seed");
    };
    pool
}

fn seeded(r0: u128, r1: u128) -> ConstantProductPool<MemoryLedger> {
    seed(empty_pool(), r0, r1)
}

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn share_sum(pool: &ConstantProductPool<MemoryLedger>) -> u128 {
    ACCOUNTS
        .iter()
        .map(|n| pool.share_balance_of(&account(*n)).get())
        .sum()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [1_000, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=10_000_000u128
}

/// 18-decimal reserves from one token to one billion tokens.
fn ether_reserve_strategy() -> impl Strategy<Value = u128> {
    ETHER..=1_000_000_000 * ETHER
}

#[derive(Debug, Clone)]
enum Op {
    Add { who: u8, units: u128 },
    Remove { who: u8, percent: u128 },
    Swap { who: u8, side: Side, amount: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let who = prop::sample::select(ACCOUNTS.to_vec());
    let side = prop_oneof![Just(Side::Zero), Just(Side::One)];
    prop_oneof![
        (who.clone(), 1u128..=50).prop_map(|(who, units)| Op::Add { who, units }),
        (who.clone(), 1u128..=100).prop_map(|(who, percent)| Op::Remove { who, percent }),
        (who, side, 1u128..=50_000).prop_map(|(who, side, amount)| Op::Swap { who, side, amount }),
    ]
}

fn run(pool: &mut ConstantProductPool<MemoryLedger>, op: &Op) -> Result<(), PoolError> {
    match *op {
        Op::Add { who, units } => {
            let reserves = pool.reserves();
            let (amount0, amount1) = if reserves.is_empty() {
                (units * 1_000, units * 3_000)
            } else {
                let (r0, r1) = (reserves.reserve0().get(), reserves.reserve1().get());
                let g = gcd(r0, r1);
                (units * (r0 / g), units * (r1 / g))
            };
            pool.add_liquidity(&account(who), Amount::new(amount0), Amount::new(amount1))
                .map(|_| ())
        }
        Op::Remove { who, percent } => {
            let held = pool.share_balance_of(&account(who)).get();
            let shares = held * percent / 100;
            pool.remove_liquidity(&account(who), Shares::new(shares))
                .map(|_| ())
        }
        Op::Swap { who, side, amount } => {
            let asset = pool.asset_pair().get(side);
            pool.swap(&account(who), &asset, Amount::new(amount)).map(|_| ())
        }
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_rate_matches_swap(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount in 1u128..=100_000,
        sell_second in any::<bool>(),
    ) {
        let mut pool = seeded(r0, r1);
        let asset = if sell_second { asset1() } else { asset0() };
        let quoted = pool.swap_rate(&asset, Amount::new(amount));
        let executed = pool
            .swap(&account(2), &asset, Amount::new(amount))
            .map(|r| r.amount_out());
        prop_assert_eq!(quoted, executed);
    }

    #[test]
    fn prop_ether_scale_swap_rate_matches_swap(
        r0 in ether_reserve_strategy(),
        r1 in ether_reserve_strategy(),
        amount in 1u128..=1_000_000 * ETHER,
        sell_second in any::<bool>(),
    ) {
        let mut pool = seed(pool_with_supply(WIDE_SUPPLY), r0, r1);
        let (asset, r_in) = if sell_second { (asset1(), r1) } else { (asset0(), r0) };
        let quoted = pool.swap_rate(&asset, Amount::new(amount));
        let executed = pool
            .swap(&account(2), &asset, Amount::new(amount))
            .map(|r| r.amount_out());
        prop_assert_eq!(&quoted, &executed);
        if executed.is_ok() {
            let custody_in = if sell_second {
                pool.ledger1().balance_of(&custody())
            } else {
                pool.ledger0().balance_of(&custody())
            };
            prop_assert_eq!(custody_in, Amount::new(r_in + amount));
        }
        prop_assert!(pool.check_custody().is_ok());
    }

    #[test]
    fn prop_first_deposit_shares_are_isqrt(
        a0 in 1u128..=WIDE_SUPPLY,
        a1 in 1u128..=WIDE_SUPPLY,
    ) {
        let mut pool = pool_with_supply(WIDE_SUPPLY);
        let Ok(receipt) = pool.add_liquidity(&account(3), Amount::new(a0), Amount::new(a1)) else {
            return Ok(());
        };
        let s = receipt.shares().get();
        prop_assert_eq!(s, isqrt(widening_mul(a0, a1)));
        prop_assert!(widening_mul(s, s) <= widening_mul(a0, a1));
        prop_assert_eq!(pool.total_shares(), receipt.shares());
    }

    #[test]
    fn prop_deposit_round_trip_never_gains(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        units in 1u128..=100,
    ) {
        let mut pool = seeded(r0, r1);
        let before = pool.reserves();
        let g = gcd(r0, r1);
        let (d0, d1) = (units * (r0 / g), units * (r1 / g));

        let Ok(deposit) = pool.add_liquidity(&account(2), Amount::new(d0), Amount::new(d1)) else {
            return Ok(());
        };
        let total = pool.total_shares().get();
        let Ok(withdrawal) = pool.remove_liquidity(&account(2), deposit.shares()) else {
            return Ok(());
        };
        prop_assert!(withdrawal.amount0().get() <= d0);
        prop_assert!(withdrawal.amount1().get() <= d1);
        prop_assert!(pool.share_balance_of(&account(2)).is_zero());

        // residual < reserve / total + 1, so at most one unit once
        // shares outnumber reserve units
        let after = pool.reserves();
        let Ok(left0) = after.reserve0().safe_sub(&before.reserve0()) else {
            panic!("reserve0 decreased");
        };
        let Ok(left1) = after.reserve1().safe_sub(&before.reserve1()) else {
            panic!("reserve1 decreased");
        };
        prop_assert!(left0.get() * total < r0 + total);
        prop_assert!(left1.get() * total < r1 + total);
    }

    #[test]
    fn prop_mismatched_deposit_is_noop(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        a0 in 1u128..=1_000_000,
        a1 in 1u128..=1_000_000,
    ) {
        prop_assume!(r0 * a1 != r1 * a0);
        let mut pool = seeded(r0, r1);
        let before = pool.snapshot();
        let balance = pool.ledger0().balance_of(&account(2));

        prop_assert_eq!(
            pool.add_liquidity(&account(2), Amount::new(a0), Amount::new(a1)),
            Err(PoolError::ProportionMismatch)
        );
        prop_assert_eq!(pool.snapshot(), before);
        prop_assert_eq!(pool.ledger0().balance_of(&account(2)), balance);
    }

    #[test]
    fn prop_shares_conserved_across_operations(
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut pool = empty_pool();
        for op in &ops {
            let before = pool.snapshot();
            if run(&mut pool, op).is_err() {
                prop_assert_eq!(pool.snapshot(), before, "failed {:?} changed state", op);
            }
            prop_assert_eq!(share_sum(&pool), pool.total_shares().get());
            prop_assert!(pool.reserves().is_consistent());
            prop_assert_eq!(
                pool.reserves() == Reserves::EMPTY,
                pool.total_shares().is_zero()
            );
            prop_assert!(pool.check_custody().is_ok());
        }
    }
}
