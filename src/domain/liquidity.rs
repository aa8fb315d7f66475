//! Liquidity statistics and guard thresholds.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::Symbol;

/// Snapshot of how tradeable a symbol is.
///
/// Either measure may be missing upstream; a missing measure never
/// counts against the symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityStats {
    pub symbol: Symbol,
    /// Average daily dollar volume.
    #[serde(default)]
    pub adv_usd: Option<Decimal>,
    /// Average quoted spread in basis points.
    #[serde(default)]
    pub avg_spread_bps: Option<Decimal>,
    /// When the snapshot was taken; newer rows replace older ones.
    #[serde(default)]
    pub as_of: Option<DateTime<Utc>>,
}

impl LiquidityStats {
    pub fn new(
        symbol: impl Into<Symbol>,
        adv_usd: Option<Decimal>,
        avg_spread_bps: Option<Decimal>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            adv_usd,
            avg_spread_bps,
            as_of: None,
        }
    }

    /// True when `self` should replace `other` for the same symbol.
    ///
    /// Rows without a timestamp never replace a timestamped one; between
    /// two untimestamped rows the later one wins.
    #[must_use]
    pub fn supersedes(&self, other: &Self) -> bool {
        match (self.as_of, other.as_of) {
            (Some(mine), Some(theirs)) => mine >= theirs,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => true,
        }
    }
}

/// Liquidity gating thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityGuardConfig {
    /// Minimum average daily dollar volume.
    pub min_adv_usd: Decimal,
    /// Maximum average spread in basis points.
    pub max_spread_bps: Decimal,
    /// Maximum age of a quote before it is considered stale.
    pub max_quote_age_ms: i64,
}

impl Default for LiquidityGuardConfig {
    fn default() -> Self {
        Self {
            min_adv_usd: Decimal::from(5_000_000),
            max_spread_bps: Decimal::from(40),
            max_quote_age_ms: 1_500,
        }
    }
}
