//! One side of the auction, kept in strict priority order.
//!
//! Entries are [`AggregatedOrder`] buckets sorted best-first:
//! - **Buy** book: price descending, then quantity descending
//! - **Sell** book: price ascending, then quantity descending
//!
//! At most one bucket exists per distinct (price, quantity). Insertion is a
//! linear scan; the book is built once from a static snapshot, so the
//! quadratic worst case over distinct buckets is acceptable.
//!
//! A forward-only cursor marks the first bucket that may still have
//! quantity left. Allocation never decreases, so a bucket the cursor has
//! passed is fulfilled for good.

use std::cmp::Ordering;

use callauction_types::{Order, Side};
use rust_decimal::Decimal;

use crate::aggregated_order::AggregatedOrder;

/// Priority-ordered buckets for a single side.
#[derive(Debug, Clone)]
pub struct PriorityBook {
    side: Side,
    entries: Vec<AggregatedOrder>,
    /// Index of the first bucket not yet known to be fulfilled.
    cursor: usize,
}

impl PriorityBook {
    /// Create an empty book for `side`.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            entries: Vec::new(),
            cursor: 0,
        }
    }

    // =================================================================
    // Insertion
    // =================================================================

    /// Place `order` at its priority position, merging it into an existing
    /// bucket with identical terms when there is one.
    pub fn insert(&mut self, order: Order) {
        debug_assert_eq!(order.side, self.side, "order routed to wrong book");

        // First bucket that does not outrank the candidate.
        let slot = self
            .entries
            .iter()
            .enumerate()
            .find_map(|(idx, entry)| match entry.priority_rank(&order) {
                Ordering::Greater => None,
                rank => Some((idx, rank)),
            });

        match slot {
            Some((idx, Ordering::Equal)) => self.entries[idx].absorb(order),
            Some((idx, _)) => self.entries.insert(idx, AggregatedOrder::new(order)),
            None => self.entries.push(AggregatedOrder::new(order)),
        }
    }

    // =================================================================
    // Matching access
    // =================================================================

    /// Advance past fulfilled buckets and return the best one with
    /// quantity left, or `None` once the book is exhausted.
    ///
    /// The cursor only moves forward; skipped buckets are never revisited.
    pub fn next_unfulfilled(&mut self) -> Option<&mut AggregatedOrder> {
        let start = self.cursor;
        while self
            .entries
            .get(self.cursor)
            .is_some_and(AggregatedOrder::fulfilled)
        {
            self.cursor += 1;
        }
        if self.cursor > start {
            tracing::trace!(
                side = %self.side,
                skipped = self.cursor - start,
                cursor = self.cursor,
                "Cursor advanced past fulfilled buckets"
            );
        }
        self.entries.get_mut(self.cursor)
    }

    // =================================================================
    // Queries
    // =================================================================

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of distinct buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor position.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of individual orders across all buckets.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.entries.iter().map(AggregatedOrder::member_count).sum()
    }

    /// Sum of every bucket's total quantity, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn total_quantity(&self) -> Decimal {
        self.entries
            .iter()
            .map(AggregatedOrder::total_quantity)
            .fold(Decimal::ZERO, |acc, q| acc.checked_add(q).unwrap_or(Decimal::MAX))
    }

    /// Best bucket, regardless of fulfilment.
    #[must_use]
    pub fn best(&self) -> Option<&AggregatedOrder> {
        self.entries.first()
    }

    /// Iterate buckets from best to worst.
    pub fn iter(&self) -> impl Iterator<Item = &AggregatedOrder> {
        self.entries.iter()
    }
}
