//! Pool implementations.
//!
//! | Pool | Pricing |
//! |------|---------|
//! | [`ConstantProductPool`] | proportional rate minus a flat input fee |

pub mod constant_product;

pub use constant_product::ConstantProductPool;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;
