//! Configuration for a constant-product pool.

use core::fmt;

use crate::domain::{AccountId, AssetId, AssetPair, FeeRate};
use crate::error::PoolError;

/// Immutable parameters of a pool.
///
/// - `pair`: asset0 and asset1, distinct, in creation order.
/// - `custodian`: the account the pool holds assets under in both ledgers.
/// - `fee`: swap fee ratio, below 100%.
///
/// Under the `serde` feature the config can be loaded from any serde
/// format; call [`PoolConfig::validate`] on deserialized values (pool
/// construction does this too).
///
/// # Examples
///
/// ```
/// use cpamm::config::PoolConfig;
/// use cpamm::domain::{AccountId, AssetId, FeeRate};
///
/// let cfg = PoolConfig::new(
///     AssetId::from_bytes([1u8; 32]),
///     AssetId::from_bytes([2u8; 32]),
///     AccountId::from_bytes([9u8; 32]),
///     FeeRate::default(),
/// )
/// .expect("valid config");
/// assert_eq!(cfg.fee().numerator(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    pair: AssetPair,
    custodian: AccountId,
    #[cfg_attr(feature = "serde", serde(default))]
    fee: FeeRate,
}

impl PoolConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidToken`] if `asset0 == asset1`.
    /// - [`PoolError::InvalidConfiguration`] if the fee ratio is invalid.
    pub fn new(
        asset0: AssetId,
        asset1: AssetId,
        custodian: AccountId,
        fee: FeeRate,
    ) -> Result<Self, PoolError> {
        let config = Self {
            pair: AssetPair::new(asset0, asset1)?,
            custodian,
            fee,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidToken`] if the pair holds the same asset twice.
    /// - [`PoolError::InvalidConfiguration`] if the fee ratio is invalid.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.pair.first() == self.pair.second() {
            return Err(PoolError::InvalidToken(
                "pool requires two distinct assets",
            ));
        }
        self.fee.validate()
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the custody account.
    #[must_use]
    pub const fn custodian(&self) -> AccountId {
        self.custodian
    }

    /// Returns the fee ratio.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }
}

impl fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolConfig({} / {}, fee {}, custodian {})",
            self.pair.first(),
            self.pair.second(),
            self.fee,
            self.custodian
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(b: u8) -> AssetId {
        AssetId::from_bytes([b; 32])
    }

    fn custodian() -> AccountId {
        AccountId::from_bytes([0xcc; 32])
    }

    #[test]
    fn valid_config() {
        let Ok(cfg) = PoolConfig::new(asset(1), asset(2), custodian(), FeeRate::default()) else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.pair().first(), asset(1));
        assert_eq!(cfg.custodian(), custodian());
        assert_eq!(cfg.fee(), FeeRate::THREE_PERCENT);
    }

    #[test]
    fn rejects_duplicate_assets() {
        assert!(matches!(
            PoolConfig::new(asset(1), asset(1), custodian(), FeeRate::default()),
            Err(PoolError::InvalidToken(_))
        ));
    }

    #[test]
    fn display() {
        let Ok(cfg) = PoolConfig::new(asset(1), asset(2), custodian(), FeeRate::default()) else {
            panic!("expected Ok");
        };
        assert_eq!(
            cfg.to_string(),
            "PoolConfig(asset:01010101 / asset:02020202, fee 3/100, custodian account:cccccccc)"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip_defaults_fee() {
        let Ok(cfg) = PoolConfig::new(asset(1), asset(2), custodian(), FeeRate::default()) else {
            panic!("expected Ok");
        };
        let Ok(mut value) = serde_json::to_value(&cfg) else {
            panic!("serialize");
        };
        if let Some(obj) = value.as_object_mut() {
            obj.remove("fee");
        }
        let Ok(back) = serde_json::from_value::<PoolConfig>(value) else {
            panic!("deserialize");
        };
        assert_eq!(back, cfg);
        assert!(back.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_bad_fee_fails_validation() {
        let Ok(cfg) = PoolConfig::new(asset(1), asset(2), custodian(), FeeRate::default()) else {
            panic!("expected Ok");
        };
        let Ok(mut value) = serde_json::to_value(&cfg) else {
            panic!("serialize");
        };
        value["fee"] = serde_json::json!({ "numerator": 5, "denominator": 0 });
        let Ok(back) = serde_json::from_value::<PoolConfig>(value) else {
            panic!("deserialize");
        };
        assert!(matches!(
            back.validate(),
            Err(PoolError::InvalidConfiguration(_))
        ));
    }
}
