//! Liquidity guard and proxy-selection configuration.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::pipeline::DEFAULT_MAX_PROXIES_PER_RECORD;
use crate::domain::LiquidityGuardConfig;

/// `[guard]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuardConfig {
    /// Minimum average daily dollar volume for a single name.
    #[serde(default = "default_min_adv_usd")]
    pub min_adv_usd: Decimal,
    /// Maximum average quoted spread in basis points.
    #[serde(default = "default_max_spread_bps")]
    pub max_spread_bps: Decimal,
    /// Quotes older than this are stale.
    #[serde(default = "default_max_quote_age_ms")]
    pub max_quote_age_ms: i64,
    /// Offer the home-market line of a foreign listing.
    #[serde(default)]
    pub allow_foreign_local: bool,
    /// Proxies kept per resolved listing after the liquidity guard.
    #[serde(default = "default_max_proxies_per_record")]
    pub max_proxies_per_record: usize,
}

fn default_min_adv_usd() -> Decimal {
    Decimal::from(5_000_000)
}

fn default_max_spread_bps() -> Decimal {
    Decimal::from(40)
}

const fn default_max_quote_age_ms() -> i64 {
    1_500
}

const fn default_max_proxies_per_record() -> usize {
    DEFAULT_MAX_PROXIES_PER_RECORD
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            min_adv_usd: default_min_adv_usd(),
            max_spread_bps: default_max_spread_bps(),
            max_quote_age_ms: default_max_quote_age_ms(),
            allow_foreign_local: false,
            max_proxies_per_record: default_max_proxies_per_record(),
        }
    }
}

impl From<&GuardConfig> for LiquidityGuardConfig {
    fn from(config: &GuardConfig) -> Self {
        Self {
            min_adv_usd: config.min_adv_usd,
            max_spread_bps: config.max_spread_bps,
            max_quote_age_ms: config.max_quote_age_ms,
        }
    }
}
