//! A bucket of economically identical orders.
//!
//! Orders sharing side, unit price and unit quantity are interchangeable
//! for matching, so they are grouped into one [`AggregatedOrder`] and
//! allocated as a single priority unit. Members are kept in arrival order.

use std::cmp::Ordering;

use callauction_types::{Order, Side};
use rust_decimal::Decimal;

/// All orders sharing one (side, price, quantity) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedOrder {
    side: Side,
    unit_price: Decimal,
    unit_quantity: Decimal,
    /// Members in arrival order.
    orders: Vec<Order>,
    allocated: Decimal,
}

impl AggregatedOrder {
    /// Open a new bucket holding only `order`.
    ///
    /// Unit terms are normalized, so the bucket reports the same scale
    /// whichever of `100` or `100.00` arrived first.
    #[must_use]
    pub fn new(order: Order) -> Self {
        Self {
            side: order.side,
            unit_price: order.price.normalize(),
            unit_quantity: order.quantity.normalize(),
            orders: vec![order],
            allocated: Decimal::ZERO,
        }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    #[must_use]
    pub fn unit_quantity(&self) -> Decimal {
        self.unit_quantity
    }

    /// Members in arrival order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn member_count(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn allocated(&self) -> Decimal {
        self.allocated
    }

    /// `unit_quantity * member_count`, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn total_quantity(&self) -> Decimal {
        self.unit_quantity
            .checked_mul(Decimal::from(self.orders.len()))
            .unwrap_or(Decimal::MAX)
    }

    /// Quantity still available for allocation.
    #[must_use]
    pub fn remaining(&self) -> Decimal {
        self.total_quantity() - self.allocated
    }

    #[must_use]
    pub fn fulfilled(&self) -> bool {
        self.allocated == self.total_quantity()
    }

    /// Rank this bucket against a candidate order of the same side.
    ///
    /// `Greater` means this bucket has higher priority than the candidate,
    /// `Less` means the candidate must go in front of it, and `Equal` means
    /// the candidate belongs in this bucket.
    ///
    /// Buys rank by higher price, sells by lower price; on equal prices the
    /// larger quantity ranks higher on both sides.
    #[must_use]
    pub fn priority_rank(&self, candidate: &Order) -> Ordering {
        debug_assert_eq!(self.side, candidate.side, "cross-side comparison");
        let by_price = match self.side {
            Side::Buy => self.unit_price.cmp(&candidate.price),
            Side::Sell => candidate.price.cmp(&self.unit_price),
        };
        by_price.then_with(|| self.unit_quantity.cmp(&candidate.quantity))
    }

    /// Add an order with identical side, price and quantity to this bucket.
    pub fn absorb(&mut self, order: Order) {
        debug_assert_eq!(
            self.priority_rank(&order),
            Ordering::Equal,
            "absorbed order must match the bucket"
        );
        self.orders.push(order);
    }

    /// Record `quantity` more shares as allocated. Caller never exceeds
    /// [`Self::remaining`].
    pub(crate) fn allocate(&mut self, quantity: Decimal) {
        debug_assert!(quantity <= self.remaining(), "over-allocation");
        self.allocated += quantity;
    }
}
