//! Auction entry points.
//!
//! ```text
//! run_auction(orders) -> AuctionResult
//! ```
//!
//! `run_auction` is a pure function of its input: no I/O, no shared state,
//! and the same multiset of orders always clears to the same result
//! regardless of submission order. `run_validated_auction` puts the
//! [`OrderValidator`] gate in front of it.

use callauction_types::{AuctionConfig, AuctionResult, Order, OrderValidator, Result};

use crate::{ClearingEngine, determinism::compute_result_digest};

/// Clear one snapshot of orders for a single instrument.
///
/// Input is assumed well formed (positive quantities, non-negative prices).
/// Empty or one-sided input yields the "no trade" result.
///
/// Bucket and running totals saturate at `Decimal::MAX` rather than
/// overflow, so the result is exact only while every total stays below it.
/// The default [`AuctionConfig`] bounds on quantity and order count keep
/// validated snapshots well inside that range.
#[must_use]
pub fn run_auction(orders: impl IntoIterator<Item = Order>) -> AuctionResult {
    let mut engine = ClearingEngine::new(orders);
    engine.run();
    let result = engine.result();

    tracing::info!(
        buy_orders = engine.buy_book().order_count(),
        sell_orders = engine.sell_book().order_count(),
        buy_buckets = engine.buy_book().len(),
        sell_buckets = engine.sell_book().len(),
        steps = engine.steps(),
        matched = %result.matched_quantity,
        band = ?result.band,
        digest = hex::encode(compute_result_digest(&result)),
        "Auction cleared"
    );

    result
}

/// Validate the snapshot against `config`, then clear it.
///
/// Fails with [`callauction_types::AuctionError::InvalidOrder`] or
/// [`callauction_types::AuctionError::BatchTooLarge`] before any matching
/// happens.
pub fn run_validated_auction(orders: Vec<Order>, config: &AuctionConfig) -> Result<AuctionResult> {
    let validator = OrderValidator::new(config);
    if let Err(err) = validator.validate_batch(&orders) {
        tracing::warn!(
            instrument = %config.instrument,
            orders = orders.len(),
            error = %err,
            "Auction snapshot rejected"
        );
        return Err(err);
    }
    Ok(run_auction(orders))
}
