//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning methods on
//! [`Amount`] and [`Shares`] into [`Result`]s carrying a specific
//! [`PoolError`] so callers can use `?`.
//!
//! # Examples
//!
//! ```
//! use cpamm::domain::Amount;
//! use cpamm::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum, Ok(Amount::new(300)));
//! ```

use crate::domain::{Amount, Shares};
use crate::error::PoolError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
///
/// Products of two amounts go through
/// [`widening_mul`](crate::math::widening_mul) instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the result exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError>;
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_add(other)
            .ok_or(PoolError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_sub(other)
            .ok_or(PoolError::Underflow("amount subtraction underflow"))
    }
}

// ---------------------------------------------------------------------------
// Shares
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_add(other)
            .ok_or(PoolError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, PoolError> {
        self.checked_sub(other)
            .ok_or(PoolError::Underflow("share subtraction underflow"))
    }
}
