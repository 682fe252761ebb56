//! Result fingerprints for cross-replica consistency.
//!
//! Every replica clearing the same snapshot must reach the same
//! [`AuctionResult`]. The digest is a SHA-256 hash over the result that
//! lets replicas compare outcomes without shipping full payloads.

use callauction_types::{AuctionResult, constants};
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

/// Compute the digest of an auction result.
///
/// The hash covers the matched quantity and the band. Decimals are
/// normalized first so `100` and `100.00` hash identically, and each one is
/// length-prefixed so digits cannot shift between fields.
#[must_use]
pub fn compute_result_digest(result: &AuctionResult) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::RESULT_DIGEST_TAG);
    hash_decimal(&mut hasher, result.matched_quantity);

    match result.band {
        Some(band) => {
            hasher.update([1u8]);
            hash_decimal(&mut hasher, band.low);
            hash_decimal(&mut hasher, band.high);
        }
        None => hasher.update([0u8]),
    }

    hasher.finalize().into()
}

fn hash_decimal(hasher: &mut Sha256, value: Decimal) {
    let text = value.normalize().to_string();
    hasher.update((text.len() as u64).to_le_bytes());
    hasher.update(text.as_bytes());
}

/// Verify that a result matches the expected digest.
#[must_use]
pub fn verify_result_digest(result: &AuctionResult, expected: &[u8; 32]) -> bool {
    compute_result_digest(result) == *expected
}
