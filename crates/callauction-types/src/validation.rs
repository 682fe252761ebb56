//! Order validation gate.
//!
//! The clearing engine assumes well-formed input and never checks it. The
//! [`OrderValidator`] is the upstream gate that rejects malformed orders
//! before a snapshot is handed to the engine:
//!
//! - quantity must be strictly positive
//! - price must be non-negative
//! - quantity and price must not exceed the configured bounds
//! - price / quantity scale must fit the configured precision
//! - the user identifier must be non-empty
//! - a snapshot may not exceed the configured order count

use rust_decimal::Decimal;

use crate::{AuctionConfig, AuctionError, Order, Result};

/// Stateless validation gate configured per instrument.
#[derive(Debug, Clone)]
pub struct OrderValidator {
    max_orders: usize,
    price_precision: u32,
    quantity_precision: u32,
    max_quantity: Decimal,
    max_price: Decimal,
}

impl OrderValidator {
    #[must_use]
    pub fn new(config: &AuctionConfig) -> Self {
        Self {
            max_orders: config.max_orders,
            price_precision: config.price_precision,
            quantity_precision: config.quantity_precision,
            max_quantity: config.max_quantity,
            max_price: config.max_price,
        }
    }

    /// Validate a single order.
    pub fn validate(&self, order: &Order) -> Result<()> {
        if order.user_id.is_empty() {
            return Err(AuctionError::InvalidOrder {
                reason: "user_id must not be empty".to_string(),
            });
        }

        if order.quantity <= Decimal::ZERO {
            return Err(AuctionError::InvalidOrder {
                reason: format!("quantity must be positive, got {}", order.quantity),
            });
        }

        if order.price.is_sign_negative() && !order.price.is_zero() {
            return Err(AuctionError::InvalidOrder {
                reason: format!("price must not be negative, got {}", order.price),
            });
        }

        if order.quantity > self.max_quantity {
            return Err(AuctionError::InvalidOrder {
                reason: format!(
                    "quantity {} exceeds max {}",
                    order.quantity, self.max_quantity,
                ),
            });
        }

        if order.price > self.max_price {
            return Err(AuctionError::InvalidOrder {
                reason: format!("price {} exceeds max {}", order.price, self.max_price),
            });
        }

        if order.price.normalize().scale() > self.price_precision {
            return Err(AuctionError::InvalidOrder {
                reason: format!(
                    "price {} exceeds {} decimal places",
                    order.price, self.price_precision,
                ),
            });
        }

        if order.quantity.normalize().scale() > self.quantity_precision {
            return Err(AuctionError::InvalidOrder {
                reason: format!(
                    "quantity {} exceeds {} decimal places",
                    order.quantity, self.quantity_precision,
                ),
            });
        }

        Ok(())
    }

    /// Validate a whole auction snapshot. Fails on the first bad order.
    pub fn validate_batch(&self, orders: &[Order]) -> Result<()> {
        if orders.len() > self.max_orders {
            return Err(AuctionError::BatchTooLarge {
                count: orders.len(),
                limit: self.max_orders,
            });
        }
        for (idx, order) in orders.iter().enumerate() {
            self.validate(order).map_err(|err| match err {
                AuctionError::InvalidOrder { reason } => AuctionError::InvalidOrder {
                    reason: format!("order #{idx} ({}): {reason}", order.user_id),
                },
                other => other,
            })?;
        }
        Ok(())
    }
}

impl Default for OrderValidator {
    fn default() -> Self {
        Self::new(&AuctionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    #[test]
    fn accepts_well_formed_orders() {
        let validator = OrderValidator::default();
        assert!(validator.validate(&Order::buy("U1", dec(100), dec(500))).is_ok());
        assert!(validator.validate(&Order::sell("U2", dec(1), dec(0))).is_ok());
    }

    #[test]
    fn rejects_zero_quantity() {
        let validator = OrderValidator::default();
        let err = validator
            .validate(&Order::buy("U1", Decimal::ZERO, dec(500)))
            .unwrap_err();
        assert!(matches!(err, AuctionError::InvalidOrder { .. }));
    }

    #[test]
    fn rejects_negative_quantity() {
        let validator = OrderValidator::default();
        assert!(validator.validate(&Order::sell("U1", dec(-5), dec(500))).is_err());
    }

    #[test]
    fn rejects_negative_price() {
        let validator = OrderValidator::default();
        let err = validator
            .validate(&Order::sell("U1", dec(5), dec(-1)))
            .unwrap_err();
        assert!(format!("{err}").contains("price must not be negative"));
    }

    #[test]
    fn rejects_empty_user() {
        let validator = OrderValidator::default();
        assert!(validator.validate(&Order::buy("", dec(5), dec(1))).is_err());
    }

    #[test]
    fn rejects_quantity_above_bound() {
        let validator = OrderValidator::default();
        let huge = Decimal::MAX / Decimal::TWO + Decimal::ONE;
        let err = validator
            .validate(&Order::buy("U1", huge, dec(1)))
            .unwrap_err();
        assert!(format!("{err}").contains("exceeds max"), "Got: {err}");

        let at_bound = Decimal::from(crate::constants::MAX_ORDER_QUANTITY);
        assert!(validator.validate(&Order::buy("U1", at_bound, dec(1))).is_ok());
    }

    #[test]
    fn rejects_price_above_configured_bound() {
        let config = AuctionConfig {
            max_price: dec(1_000),
            ..AuctionConfig::default()
        };
        let validator = OrderValidator::new(&config);
        assert!(validator.validate(&Order::sell("U1", dec(1), dec(1_000))).is_ok());
        let err = validator
            .validate(&Order::sell("U1", dec(1), dec(1_001)))
            .unwrap_err();
        assert!(format!("{err}").contains("price 1001 exceeds max 1000"), "Got: {err}");
    }

    #[test]
    fn rejects_excess_price_precision() {
        let config = AuctionConfig {
            price_precision: 2,
            ..AuctionConfig::default()
        };
        let validator = OrderValidator::new(&config);
        // 1.005 has three decimal places
        let order = Order::buy("U1", dec(1), Decimal::new(1005, 3));
        assert!(validator.validate(&order).is_err());
        // 1.50 normalizes to 1.5
        let order = Order::buy("U1", dec(1), Decimal::new(150, 2));
        assert!(validator.validate(&order).is_ok());
    }

    #[test]
    fn rejects_excess_quantity_precision() {
        let config = AuctionConfig {
            quantity_precision: 0,
            ..AuctionConfig::default()
        };
        let validator = OrderValidator::new(&config);
        let order = Order::sell("U1", Decimal::new(15, 1), dec(10));
        assert!(validator.validate(&order).is_err());
    }

    #[test]
    fn batch_reports_offending_index() {
        let validator = OrderValidator::default();
        let orders = vec![
            Order::buy("U1", dec(10), dec(100)),
            Order::sell("U2", Decimal::ZERO, dec(100)),
        ];
        let err = validator.validate_batch(&orders).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("order #1"), "Got: {msg}");
        assert!(msg.contains("U2"), "Got: {msg}");
    }

    #[test]
    fn batch_rejects_oversized_snapshot() {
        let config = AuctionConfig {
            max_orders: 1,
            ..AuctionConfig::default()
        };
        let validator = OrderValidator::new(&config);
        let orders = vec![
            Order::buy("U1", dec(10), dec(100)),
            Order::sell("U2", dec(10), dec(100)),
        ];
        assert!(matches!(
            validator.validate_batch(&orders),
            Err(AuctionError::BatchTooLarge { count: 2, limit: 1 })
        ));
    }

    #[test]
    fn empty_batch_is_valid() {
        assert!(OrderValidator::default().validate_batch(&[]).is_ok());
    }
}
