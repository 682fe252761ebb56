//! The outcome of one auction round.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closed clearing price interval `[low, high]`.
///
/// `high` is the best buy price that traded, `low` the last sell price that
/// traded. Picking the execution price inside it is the caller's policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceBand {
    pub low: Decimal,
    pub high: Decimal,
}

impl PriceBand {
    #[must_use]
    pub fn new(low: Decimal, high: Decimal) -> Self {
        Self { low, high }
    }
}

impl std::fmt::Display for PriceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Result of clearing one static snapshot of orders.
///
/// `band` is `None` exactly when no trade occurred, in which case
/// `matched_quantity` is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionResult {
    /// Total volume exchanged between buyers and sellers.
    pub matched_quantity: Decimal,
    /// Clearing price band, or `None` for "no trade".
    pub band: Option<PriceBand>,
}

impl AuctionResult {
    /// The "no trade" outcome.
    #[must_use]
    pub fn no_trade() -> Self {
        Self {
            matched_quantity: Decimal::ZERO,
            band: None,
        }
    }

    #[must_use]
    pub fn traded(matched_quantity: Decimal, band: PriceBand) -> Self {
        Self {
            matched_quantity,
            band: Some(band),
        }
    }

    #[must_use]
    pub fn is_no_trade(&self) -> bool {
        self.band.is_none()
    }

    #[must_use]
    pub fn price_low(&self) -> Option<Decimal> {
        self.band.map(|b| b.low)
    }

    #[must_use]
    pub fn price_high(&self) -> Option<Decimal> {
        self.band.map(|b| b.high)
    }
}
