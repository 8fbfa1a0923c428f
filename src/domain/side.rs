//! Position of an asset within the pool pair.

/// Which of the pool's two assets a value refers to.
///
/// `Zero` is the first asset given at pool creation, `One` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// First asset (`reserve0`).
    Zero,
    /// Second asset (`reserve1`).
    One,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}
