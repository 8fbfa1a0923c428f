//! The pool's two reserve balances and signed changes to them.

use core::fmt;

use super::{Amount, Side};
use crate::error::PoolError;

/// Tracked balances `(reserve0, reserve1)`.
///
/// A consistent value is either fully empty (both zero) or fully seeded
/// (both non-zero); see [`Reserves::is_consistent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reserves {
    reserve0: Amount,
    reserve1: Amount,
}

impl Reserves {
    /// Both reserves zero.
    pub const EMPTY: Self = Self {
        reserve0: Amount::ZERO,
        reserve1: Amount::ZERO,
    };

    /// Creates a reserve pair. No consistency check is applied.
    pub const fn new(reserve0: Amount, reserve1: Amount) -> Self {
        Self { reserve0, reserve1 }
    }

    /// Returns `reserve0`.
    pub const fn reserve0(&self) -> Amount {
        self.reserve0
    }

    /// Returns `reserve1`.
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// Returns the reserve on `side`.
    pub const fn get(&self, side: Side) -> Amount {
        match side {
            Side::Zero => self.reserve0,
            Side::One => self.reserve1,
        }
    }

    /// Returns `true` if the pool holds nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve0.is_zero() && self.reserve1.is_zero()
    }

    /// `reserve0 == 0 ⟺ reserve1 == 0`.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.reserve0.is_zero() == self.reserve1.is_zero()
    }

    /// Returns the reserves after `delta`, without touching `self`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvariantViolation`] if a reserve would go negative or
    ///   the result has exactly one zero reserve.
    /// - [`PoolError::Overflow`] if a reserve would exceed `u128`.
    pub fn after(&self, delta: &ReserveDelta) -> Result<Self, PoolError> {
        let next = Self {
            reserve0: delta.delta0.apply_to(self.reserve0)?,
            reserve1: delta.delta1.apply_to(self.reserve1)?,
        };
        if !next.is_consistent() {
            return Err(PoolError::InvariantViolation(
                "exactly one reserve would be zero",
            ));
        }
        Ok(next)
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.reserve0, self.reserve1)
    }
}

/// Signed change to one reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delta {
    /// Leave the reserve unchanged.
    #[default]
    Unchanged,
    /// Add to the reserve.
    Increase(Amount),
    /// Subtract from the reserve.
    Decrease(Amount),
}

impl Delta {
    fn apply_to(self, reserve: Amount) -> Result<Amount, PoolError> {
        match self {
            Self::Unchanged => Ok(reserve),
            Self::Increase(a) => reserve
                .checked_add(&a)
                .ok_or(PoolError::Overflow("reserve overflow")),
            Self::Decrease(a) => reserve
                .checked_sub(&a)
                .ok_or(PoolError::InvariantViolation("reserve would go negative")),
        }
    }
}

/// A pair of [`Delta`]s, one per reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReserveDelta {
    /// Change to `reserve0`.
    pub delta0: Delta,
    /// Change to `reserve1`.
    pub delta1: Delta,
}

impl ReserveDelta {
    /// Both reserves grow (deposit).
    pub const fn deposit(amount0: Amount, amount1: Amount) -> Self {
        Self {
            delta0: Delta::Increase(amount0),
            delta1: Delta::Increase(amount1),
        }
    }

    /// Both reserves shrink (withdrawal).
    pub const fn withdrawal(amount0: Amount, amount1: Amount) -> Self {
        Self {
            delta0: Delta::Decrease(amount0),
            delta1: Delta::Decrease(amount1),
        }
    }

    /// The `input` side grows by `amount_in`, the other side shrinks by
    /// `amount_out`.
    pub const fn swap(input: Side, amount_in: Amount, amount_out: Amount) -> Self {
        match input {
            Side::Zero => Self {
                delta0: Delta::Increase(amount_in),
                delta1: Delta::Decrease(amount_out),
            },
            Side::One => Self {
                delta0: Delta::Decrease(amount_out),
                delta1: Delta::Increase(amount_in),
            },
        }
    }
}
