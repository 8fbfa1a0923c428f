//! Swap fee expressed as an exact ratio.

use core::fmt;

use super::Amount;
use crate::error::PoolError;
use crate::math::mul_div_floor;

/// A pool-wide fee ratio `numerator / denominator`, taken from swap input.
///
/// The fee is applied with floor division:
/// `fee = floor(amount_in * numerator / denominator)`.
///
/// # Examples
///
/// ```
/// use cpamm::domain::{Amount, FeeRate};
///
/// let fee = FeeRate::default(); // 3 / 100
/// assert_eq!(fee.apply(Amount::new(100)), Ok(Amount::new(3)));
/// assert_eq!(fee.apply(Amount::new(33)), Ok(Amount::new(0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeRate {
    numerator: u128,
    denominator: u128,
}

impl FeeRate {
    /// 3%, the rate pools are created with unless configured otherwise.
    pub const THREE_PERCENT: Self = Self {
        numerator: 3,
        denominator: 100,
    };

    /// No fee.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// Creates a fee ratio.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if the denominator is zero
    /// or the ratio is not below 100%.
    pub const fn new(numerator: u128, denominator: u128) -> Result<Self, PoolError> {
        if denominator == 0 {
            return Err(PoolError::InvalidConfiguration(
                "fee denominator must be non-zero",
            ));
        }
        if numerator >= denominator {
            return Err(PoolError::InvalidConfiguration(
                "fee must be below 100%",
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(&self) -> u128 {
        self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> u128 {
        self.denominator
    }

    /// Computes `floor(amount * numerator / denominator)`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Overflow`] if the fee itself exceeds `u128`, which a
    ///   validated ratio below 100% never does.
    /// - [`PoolError::DivisionByZero`] for an unvalidated zero denominator.
    pub fn apply(&self, amount: Amount) -> Result<Amount, PoolError> {
        mul_div_floor(
            amount.get(),
            self.numerator,
            self.denominator,
            "fee multiplication overflow",
        )
        .map(Amount::new)
    }

    /// Re-checks the ratio, for values that bypassed [`FeeRate::new`]
    /// (e.g. deserialized ones).
    ///
    /// # Errors
    ///
    /// Same as [`FeeRate::new`].
    pub const fn validate(&self) -> Result<(), PoolError> {
        match Self::new(self.numerator, self.denominator) {
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::THREE_PERCENT
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
