//! Order types for the CallAuction clearing kernel.
//!
//! An [`Order`] is immutable once created. The kernel assumes every order it
//! receives is well formed; see [`crate::OrderValidator`] for the gate that
//! enforces this upstream.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AuctionError, UserId};

/// Which side of the auction this order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = AuctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            other => Err(AuctionError::InvalidOrder {
                reason: format!("unrecognized side tag {other:?}"),
            }),
        }
    }
}

/// A single user's intent to buy or sell.
///
/// `price` is the maximum acceptable price for a buy and the minimum
/// acceptable price for a sell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub user_id: UserId,
    pub side: Side,
    pub quantity: Decimal,
    pub price: Decimal,
}

impl Order {
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            user_id: user_id.into(),
            side,
            quantity,
            price,
        }
    }

    /// Shorthand for a buy order.
    #[must_use]
    pub fn buy(user_id: impl Into<UserId>, quantity: Decimal, price: Decimal) -> Self {
        Self::new(user_id, Side::Buy, quantity, price)
    }

    /// Shorthand for a sell order.
    #[must_use]
    pub fn sell(user_id: impl Into<UserId>, quantity: Decimal, price: Decimal) -> Self {
        Self::new(user_id, Side::Sell, quantity, price)
    }
}
