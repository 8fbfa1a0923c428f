//! Opaque identity of a pooled asset.

use core::fmt;

/// Identifies one fungible asset, e.g. the address of its ledger.
///
/// Wraps a fixed `[u8; 32]`. Every byte sequence is a valid id; the pool
/// only cares that ids are comparable and that its two assets differ.
///
/// # Examples
///
/// ```
/// use cpamm::domain::AssetId;
///
/// let id = AssetId::from_bytes([7u8; 32]);
/// assert_eq!(id.as_bytes(), [7u8; 32]);
/// assert_ne!(id, AssetId::zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The all-zero id.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }
}

impl fmt::Display for AssetId {
    /// Hex prefix of the id, enough to tell assets apart in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset:")?;
        for b in self.0.iter().take(4) {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
