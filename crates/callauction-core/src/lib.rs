//! # callauction-core
//!
//! **Pure clearing engine for a uniform-price call auction.**
//!
//! Given one static snapshot of buy and sell orders for a single instrument,
//! the engine computes the maximum tradable volume and the price band within
//! which a single clearing price can be set. It has:
//!
//! - **Zero side effects**: no I/O, no persistence, no validation
//! - **Order-independent output**: the same multiset of orders always
//!   clears to the same result
//! - **Aggregation**: identical (side, price, quantity) orders share one
//!   priority bucket
//!
//! Picking the execution price inside the band is left to the caller.

pub mod aggregated_order;
pub mod auction;
pub mod determinism;
pub mod engine;
pub mod priority_book;

pub use aggregated_order::AggregatedOrder;
pub use auction::{run_auction, run_validated_auction};
pub use determinism::{compute_result_digest, verify_result_digest};
pub use engine::ClearingEngine;
pub use priority_book::PriorityBook;
