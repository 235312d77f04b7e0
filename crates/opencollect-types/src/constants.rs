//! System-wide constants for the OpenCollect settlement module.

use crate::Amount;

/// Basis-point denominator: 10,000 bps = 100%.
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Minimum collect price, in smallest currency units.
///
/// Equal to [`BPS_DENOMINATOR`], so `price * bps / 10_000` never truncates
/// to zero for a nonzero rate.
pub const MIN_COLLECT_PRICE: Amount = 10_000;

/// Default platform treasury fee rate (5%).
pub const DEFAULT_TREASURY_FEE_BPS: u16 = 500;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Module name.
pub const MODULE_NAME: &str = "OpenCollect";
