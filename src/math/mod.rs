//! Integer arithmetic utilities for pool calculations.
//!
//! Everything here is exact integer math with floor division; no floating
//! point is used anywhere in the crate. Amounts stay `u128`; products of
//! two amounts are taken in 256 bits and narrowed back.

mod checked;
mod mul_div;
mod sqrt;

pub use alloy_primitives::U256;
pub use checked::CheckedArithmetic;
pub use mul_div::{mul_div_floor, widening_mul};
pub use sqrt::isqrt;
