//! Greedy clearing of one auction snapshot.
//!
//! The engine repeatedly pairs the best unfulfilled buy bucket with the best
//! unfulfilled sell bucket and allocates the smaller remaining quantity to
//! both, stopping as soon as the pair no longer crosses. Both books are
//! sorted best-first, so once the current best pair fails to cross no later
//! pair can.
//!
//! ## Price band
//!
//! - `price_high` is fixed at the first buy price that trades and never
//!   changes afterwards.
//! - `price_low` is overwritten on every trade with the sell price, ending at
//!   the least aggressive sell that traded.
//!
//! Every matched sell accepts any price in the band. Every matched buy
//! accepts `price_low`; only the first (best) buy is guaranteed to accept
//! `price_high`.

use callauction_types::{AuctionResult, Order, PriceBand, Side};
use rust_decimal::Decimal;

use crate::PriorityBook;

/// Owns both books and the running totals of one auction round.
#[derive(Debug, Clone)]
pub struct ClearingEngine {
    buys: PriorityBook,
    sells: PriorityBook,
    total_allocated: Decimal,
    price_low: Option<Decimal>,
    price_high: Option<Decimal>,
    /// Number of buy/sell pairings performed.
    steps: usize,
}

impl ClearingEngine {
    /// Build both books from a flat order list.
    #[must_use]
    pub fn new(orders: impl IntoIterator<Item = Order>) -> Self {
        let mut engine = Self {
            buys: PriorityBook::new(Side::Buy),
            sells: PriorityBook::new(Side::Sell),
            total_allocated: Decimal::ZERO,
            price_low: None,
            price_high: None,
            steps: 0,
        };
        for order in orders {
            engine.insert(order);
        }
        engine
    }

    /// Route an order into its side's book.
    pub fn insert(&mut self, order: Order) {
        match order.side {
            Side::Buy => self.buys.insert(order),
            Side::Sell => self.sells.insert(order),
        }
    }

    /// Run the matching loop to exhaustion.
    ///
    /// Each iteration fulfills at least one of the two buckets it pairs, so
    /// the loop runs at most once per bucket across both books.
    pub fn run(&mut self) {
        loop {
            let Some(buy) = self.buys.next_unfulfilled() else {
                break;
            };
            let Some(sell) = self.sells.next_unfulfilled() else {
                break;
            };

            if buy.unit_price() < sell.unit_price() {
                tracing::debug!(
                    buy_price = %buy.unit_price(),
                    sell_price = %sell.unit_price(),
                    "Books no longer cross"
                );
                break;
            }

            let matched = buy.remaining().min(sell.remaining());
            buy.allocate(matched);
            sell.allocate(matched);
            self.total_allocated = self
                .total_allocated
                .checked_add(matched)
                .unwrap_or(Decimal::MAX);

            if self.price_high.is_none() {
                self.price_high = Some(buy.unit_price());
            }
            self.price_low = Some(sell.unit_price());
            self.steps += 1;

            tracing::debug!(
                buy_price = %buy.unit_price(),
                sell_price = %sell.unit_price(),
                qty = %matched,
                total = %self.total_allocated,
                "Buckets matched"
            );
        }
    }

    /// The outcome so far; after [`Self::run`] this is the auction result.
    ///
    /// Values are normalized, so equal inputs serialize identically whatever
    /// scale or order they arrived in.
    #[must_use]
    pub fn result(&self) -> AuctionResult {
        match (self.price_low, self.price_high) {
            (Some(low), Some(high)) => AuctionResult::traded(
                self.total_allocated.normalize(),
                PriceBand::new(low.normalize(), high.normalize()),
            ),
            _ => AuctionResult::no_trade(),
        }
    }

    // =================================================================
    // Queries
    // =================================================================

    #[must_use]
    pub fn buy_book(&self) -> &PriorityBook {
        &self.buys
    }

    #[must_use]
    pub fn sell_book(&self) -> &PriorityBook {
        &self.sells
    }

    #[must_use]
    pub fn total_allocated(&self) -> Decimal {
        self.total_allocated
    }

    #[must_use]
    pub fn price_low(&self) -> Option<Decimal> {
        self.price_low
    }

    #[must_use]
    pub fn price_high(&self) -> Option<Decimal> {
        self.price_high
    }

    /// Number of buy/sell pairings the loop performed.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}
