//! # callauction-types
//!
//! Shared types, errors, and configuration for the **CallAuction** clearing
//! kernel.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`UserId`]
//! - **Order model**: [`Order`], [`Side`]
//! - **Result model**: [`AuctionResult`], [`PriceBand`]
//! - **Configuration**: [`AuctionConfig`]
//! - **Validation**: [`OrderValidator`]
//! - **Errors**: [`AuctionError`] with `CA_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod order;
pub mod result;
pub mod validation;

// Re-export all primary types at crate root for ergonomic imports:
//   use callauction_types::{Order, Side, AuctionResult, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use order::*;
pub use result::*;
pub use validation::*;

// Constants are accessed via `callauction_types::constants::FOO`
// (not re-exported to avoid name collisions).
