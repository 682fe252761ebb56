//! Configuration for a single auctioned instrument.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AuctionError, Result, constants};

/// Per-instrument auction configuration, consumed by [`crate::OrderValidator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuctionConfig {
    /// Instrument symbol (e.g., "ACME").
    pub instrument: String,
    /// Maximum number of orders accepted into one auction round.
    pub max_orders: usize,
    /// Maximum number of decimal places allowed in a limit price.
    pub price_precision: u32,
    /// Maximum number of decimal places allowed in a quantity.
    pub quantity_precision: u32,
    /// Largest quantity a single order may carry.
    pub max_quantity: Decimal,
    /// Largest limit price a single order may carry.
    pub max_price: Decimal,
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            instrument: constants::DEFAULT_INSTRUMENT.to_string(),
            max_orders: constants::MAX_ORDERS_PER_AUCTION,
            price_precision: constants::PRICE_PRECISION,
            quantity_precision: constants::QTY_PRECISION,
            max_quantity: Decimal::from(constants::MAX_ORDER_QUANTITY),
            max_price: Decimal::from(constants::MAX_ORDER_PRICE),
        }
    }
}

impl AuctionConfig {
    /// Default configuration for the named instrument.
    #[must_use]
    pub fn for_instrument(instrument: impl Into<String>) -> Self {
        Self {
            instrument: instrument.into(),
            ..Self::default()
        }
    }

    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reject configurations that could never accept an order.
    pub fn check(&self) -> Result<()> {
        if self.instrument.is_empty() {
            return Err(AuctionError::Configuration(
                "instrument must not be empty".into(),
            ));
        }
        if self.max_orders == 0 {
            return Err(AuctionError::Configuration(
                "max_orders must be at least 1".into(),
            ));
        }
        if self.max_quantity <= Decimal::ZERO {
            return Err(AuctionError::Configuration(
                "max_quantity must be positive".into(),
            ));
        }
        if self.max_price.is_sign_negative() {
            return Err(AuctionError::Configuration(
                "max_price must not be negative".into(),
            ));
        }
        // rust_decimal supports at most 28 fractional digits
        if self.price_precision > 28 || self.quantity_precision > 28 {
            return Err(AuctionError::Configuration(
                "precision must not exceed 28 decimal places".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_constants() {
        let cfg = AuctionConfig::default();
        assert_eq!(cfg.max_orders, constants::MAX_ORDERS_PER_AUCTION);
        assert_eq!(cfg.price_precision, constants::PRICE_PRECISION);
        assert_eq!(cfg.quantity_precision, constants::QTY_PRECISION);
        assert_eq!(cfg.max_quantity, Decimal::from(constants::MAX_ORDER_QUANTITY));
        assert_eq!(cfg.max_price, Decimal::from(constants::MAX_ORDER_PRICE));
        assert!(cfg.check().is_ok());
    }

    #[test]
    fn for_instrument_keeps_other_defaults() {
        let cfg = AuctionConfig::for_instrument("ACME");
        assert_eq!(cfg.instrument, "ACME");
        assert_eq!(cfg.max_orders, constants::MAX_ORDERS_PER_AUCTION);
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let cfg = AuctionConfig::from_json_str(r#"{"instrument":"ACME","max_orders":10}"#).unwrap();
        assert_eq!(cfg.instrument, "ACME");
        assert_eq!(cfg.max_orders, 10);
        assert_eq!(cfg.price_precision, constants::PRICE_PRECISION);
    }

    #[test]
    fn from_json_rejects_malformed_document() {
        let err = AuctionConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, AuctionError::Configuration(_)));
    }

    #[test]
    fn from_json_rejects_zero_max_orders() {
        let err = AuctionConfig::from_json_str(r#"{"max_orders":0}"#).unwrap_err();
        assert!(format!("{err}").contains("max_orders"));
    }

    #[test]
    fn from_json_reads_bounds_as_strings() {
        let cfg =
            AuctionConfig::from_json_str(r#"{"max_quantity":"5000","max_price":"99.5"}"#).unwrap();
        assert_eq!(cfg.max_quantity, Decimal::new(5000, 0));
        assert_eq!(cfg.max_price, Decimal::new(995, 1));
    }

    #[test]
    fn check_rejects_non_positive_max_quantity() {
        let cfg = AuctionConfig {
            max_quantity: Decimal::ZERO,
            ..AuctionConfig::default()
        };
        assert!(format!("{}", cfg.check().unwrap_err()).contains("max_quantity"));
    }

    #[test]
    fn check_rejects_excess_precision() {
        let cfg = AuctionConfig {
            price_precision: 29,
            ..AuctionConfig::default()
        };
        assert!(cfg.check().is_err());
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = AuctionConfig::for_instrument("ACME");
        let json = serde_json::to_string(&cfg).unwrap();
        let back: AuctionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
