//! Opaque identity of a participant or custody account.

use core::fmt;

/// Identifies an account in the asset ledgers and in share accounting.
///
/// The pool itself holds assets under an `AccountId` (its custodian), but
/// never holds shares.
///
/// # Examples
///
/// ```
/// use cpamm::domain::AccountId;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// assert_eq!(alice.as_bytes()[0], 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "account:")?;
        for b in self.0.iter().take(4) {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
