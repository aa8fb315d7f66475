//! Liquidity guard for equity candidates.
//!
//! The guard fails open: without a statistics catalog, or without a row for
//! the symbol, every candidate passes. Only a present row with an
//! unfavourable value rejects, and a null field never does.

use tracing::debug;

use crate::domain::{LiquidityGuardConfig, Symbol};
use crate::port::LiquidityCatalog;

/// Threshold check against the liquidity-statistics catalog.
pub struct LiquidityGuard<'a> {
    config: &'a LiquidityGuardConfig,
    stats: Option<&'a dyn LiquidityCatalog>,
}

impl<'a> LiquidityGuard<'a> {
    #[must_use]
    pub fn new(config: &'a LiquidityGuardConfig, stats: Option<&'a dyn LiquidityCatalog>) -> Self {
        Self { config, stats }
    }

    /// Whether `symbol` is liquid enough to trade directly.
    #[must_use]
    pub fn passes(&self, symbol: &Symbol) -> bool {
        let Some(row) = self.stats.and_then(|catalog| catalog.stats(symbol)) else {
            return true;
        };
        if let Some(adv) = row.adv_usd {
            if adv < self.config.min_adv_usd {
                debug!(symbol = %symbol, adv = %adv, min = %self.config.min_adv_usd, "Rejected on ADV");
                return false;
            }
        }
        if let Some(spread) = row.avg_spread_bps {
            if spread > self.config.max_spread_bps {
                debug!(symbol = %symbol, spread_bps = %spread, max = %self.config.max_spread_bps, "Rejected on spread");
                return false;
            }
        }
        true
    }

    /// Whether a quote stamped at `quote_ts_ms` is still usable at `now_ms`.
    #[must_use]
    pub fn quote_is_fresh(&self, quote_ts_ms: i64, now_ms: i64) -> bool {
        now_ms.saturating_sub(quote_ts_ms) <= self.config.max_quote_age_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::catalog::MemoryLiquidityCatalog;
    use crate::domain::LiquidityStats;
    use rust_decimal_macros::dec;

    fn catalog() -> MemoryLiquidityCatalog {
        MemoryLiquidityCatalog::new(vec![
            LiquidityStats::new("AAPL", Some(dec!(9000000000)), Some(dec!(1.2))),
            LiquidityStats::new("THIN", Some(dec!(250000)), Some(dec!(12))),
            LiquidityStats::new("WIDE", Some(dec!(50000000)), Some(dec!(85))),
            LiquidityStats::new("HALF", None, Some(dec!(10))),
            LiquidityStats::new("NULL", None, None),
        ])
    }

    #[test]
    fn absent_catalog_passes_everything() {
        let config = LiquidityGuardConfig::default();
        let guard = LiquidityGuard::new(&config, None);
        for symbol in ["AAPL", "THIN", "ANYTHING"] {
            assert!(guard.passes(&Symbol::from(symbol)));
        }
    }

    #[test]
    fn missing_row_passes() {
        let config = LiquidityGuardConfig::default();
        let stats = catalog();
        let guard = LiquidityGuard::new(&config, Some(&stats));
        assert!(guard.passes(&Symbol::from("UNLISTED")));
    }

    #[test]
    fn unfavourable_rows_reject() {
        let config = LiquidityGuardConfig::default();
        let stats = catalog();
        let guard = LiquidityGuard::new(&config, Some(&stats));
        assert!(guard.passes(&Symbol::from("AAPL")));
        assert!(!guard.passes(&Symbol::from("THIN")));
        assert!(!guard.passes(&Symbol::from("WIDE")));
    }

    #[test]
    fn null_fields_do_not_reject() {
        let config = LiquidityGuardConfig::default();
        let stats = catalog();
        let guard = LiquidityGuard::new(&config, Some(&stats));
        assert!(guard.passes(&Symbol::from("HALF")));
        assert!(guard.passes(&Symbol::from("NULL")));
    }

    #[test]
    fn thresholds_are_inclusive() {
        let config = LiquidityGuardConfig::default();
        let stats = MemoryLiquidityCatalog::new(vec![LiquidityStats::new(
            "EDGE",
            Some(dec!(5000000)),
            Some(dec!(40)),
        )]);
        let guard = LiquidityGuard::new(&config, Some(&stats));
        assert!(guard.passes(&Symbol::from("EDGE")));
    }

    #[test]
    fn quote_freshness_uses_max_age() {
        let config = LiquidityGuardConfig::default();
        let guard = LiquidityGuard::new(&config, None);
        assert!(guard.quote_is_fresh(10_000, 11_500));
        assert!(!guard.quote_is_fresh(10_000, 11_501));
    }
}
