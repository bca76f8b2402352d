//! Per-currency order volume configuration.
//!
//! The exchange publishes a minimum order volume and a volume decimal
//! precision for each primary currency (see
//! `/Public/GetOrderMinimumVolumes`). These are plain configuration data:
//! one canonical table, seeded with the published values and updatable when
//! the exchange lists new currencies or changes a limit.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::IndependentReserveError;

/// Seed table: currency code, minimum order volume, volume decimals.
///
/// Minimum volumes are expressed as (mantissa, scale) pairs to keep the
/// table free of runtime parsing.
const DEFAULT_LIMITS: &[(&str, (i64, u32), u32)] = &[
    ("Xbt", (1, 4), 8),
    ("Bch", (1, 3), 8),
    ("Eth", (1, 3), 8),
    ("Ltc", (1, 2), 8),
    ("Xrp", (1, 0), 5),
    ("Zrx", (1, 0), 4),
    ("Eos", (1, 1), 4),
    ("Xlm", (10, 0), 5),
    ("Bat", (1, 0), 5),
    ("Usdt", (1, 0), 5),
    ("Etc", (1, 2), 8),
    ("Link", (1, 1), 4),
    ("Usdc", (1, 0), 5),
    ("Mkr", (1, 3), 8),
    ("Dai", (1, 0), 5),
    ("Comp", (1, 3), 8),
    ("Snx", (0, 0), 5),
    ("Yfi", (1, 4), 8),
    ("Aave", (1, 2), 5),
    ("Grt", (1, 0), 5),
    ("Dot", (1, 1), 5),
    ("Uni", (1, 1), 5),
    ("Ada", (1, 0), 5),
    ("Matic", (1, 1), 5),
    ("Doge", (1, 0), 5),
    ("Sol", (1, 2), 5),
    ("Mana", (1, 1), 5),
    ("Sand", (1, 1), 5),
];

/// Per-currency minimum order volume and volume decimal precision.
///
/// # Example
///
/// ```rust
/// use independent_reserve_api_client::volume::VolumeLimits;
/// use rust_decimal::Decimal;
///
/// let mut limits = VolumeLimits::new();
/// assert_eq!(limits.min_volume_for("Xbt").unwrap(), Decimal::new(1, 4));
///
/// // Newly listed currency.
/// limits.set("Pepe", Decimal::new(1000, 0), 2);
/// assert_eq!(limits.volume_decimals_for("Pepe").unwrap(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct VolumeLimits {
    min_volume: HashMap<String, Decimal>,
    decimals: HashMap<String, u32>,
}

impl VolumeLimits {
    /// Create a table seeded with the exchange's published limits.
    pub fn new() -> Self {
        let mut limits = Self {
            min_volume: HashMap::with_capacity(DEFAULT_LIMITS.len()),
            decimals: HashMap::with_capacity(DEFAULT_LIMITS.len()),
        };
        for &(code, (mantissa, scale), decimals) in DEFAULT_LIMITS {
            limits.set(code, Decimal::new(mantissa, scale), decimals);
        }
        limits
    }

    /// Create an empty table, for fully externally supplied configuration.
    pub fn empty() -> Self {
        Self {
            min_volume: HashMap::new(),
            decimals: HashMap::new(),
        }
    }

    /// Add or replace the limits for a currency.
    pub fn set(&mut self, code: impl Into<String>, min_volume: Decimal, decimals: u32) {
        let code = code.into();
        self.min_volume.insert(code.clone(), min_volume);
        self.decimals.insert(code, decimals);
    }

    /// Minimum order volume for the given currency.
    pub fn min_volume_for(&self, code: &str) -> Result<Decimal, IndependentReserveError> {
        self.min_volume
            .get(code)
            .copied()
            .ok_or_else(|| IndependentReserveError::UnknownCurrency(code.to_string()))
    }

    /// Number of decimals accepted on order volume for the given currency.
    pub fn volume_decimals_for(&self, code: &str) -> Result<u32, IndependentReserveError> {
        self.decimals
            .get(code)
            .copied()
            .ok_or_else(|| IndependentReserveError::UnknownCurrency(code.to_string()))
    }
}

impl Default for VolumeLimits {
    fn default() -> Self {
        Self::new()
    }
}
