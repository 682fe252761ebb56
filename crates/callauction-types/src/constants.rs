//! System-wide constants for the CallAuction clearing kernel.

/// Default maximum decimal precision for prices (8 decimal places).
pub const PRICE_PRECISION: u32 = 8;

/// Default maximum decimal precision for quantities (8 decimal places).
pub const QTY_PRECISION: u32 = 8;

/// Maximum orders accepted into a single auction round.
pub const MAX_ORDERS_PER_AUCTION: usize = 100_000;

/// Default upper bound on a single order's quantity (whole units).
///
/// Together with [`MAX_ORDERS_PER_AUCTION`] this keeps every book total
/// far below `Decimal::MAX`.
pub const MAX_ORDER_QUANTITY: i64 = 1_000_000_000_000_000;

/// Default upper bound on a limit price (whole units).
pub const MAX_ORDER_PRICE: i64 = 1_000_000_000_000_000;

/// Instrument symbol used when none is configured.
pub const DEFAULT_INSTRUMENT: &str = "UNSPECIFIED";

/// Domain-separation tag for result digests.
pub const RESULT_DIGEST_TAG: &[u8] = b"callauction:result:v2:";

