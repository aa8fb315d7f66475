//! Order-line formatting for directional candidates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{AssetClass, Candidate, EventLabel, ProxyCandidate, Side};

/// Per-asset-class notional budgets in USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budgets {
    #[serde(default = "default_equity_usd")]
    pub equity_usd: Decimal,
    #[serde(default = "default_equity_usd")]
    pub etf_usd: Decimal,
    #[serde(default = "default_futures_usd")]
    pub futures_usd: Decimal,
    #[serde(default = "default_futures_usd")]
    pub fx_usd: Decimal,
    #[serde(default = "default_crypto_usd")]
    pub crypto_usd: Decimal,
}

fn default_equity_usd() -> Decimal {
    Decimal::from(1_500)
}

fn default_futures_usd() -> Decimal {
    Decimal::from(2_000)
}

fn default_crypto_usd() -> Decimal {
    Decimal::from(1_500)
}

impl Default for Budgets {
    fn default() -> Self {
        Self {
            equity_usd: default_equity_usd(),
            etf_usd: default_equity_usd(),
            futures_usd: default_futures_usd(),
            fx_usd: default_futures_usd(),
            crypto_usd: default_crypto_usd(),
        }
    }
}

impl Budgets {
    /// Notional for a directional line in `class`.
    #[must_use]
    pub fn notional(&self, class: AssetClass) -> Decimal {
        match class {
            AssetClass::Equity | AssetClass::Option => self.equity_usd,
            AssetClass::Etf => self.etf_usd,
            AssetClass::Fut => self.futures_usd,
            AssetClass::Fx => self.fx_usd,
            AssetClass::Crypto => self.crypto_usd,
        }
    }
}

/// Order defaults applied to every directional line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersConfig {
    #[serde(default = "default_ttl_sec")]
    pub ttl_sec: u64,
    #[serde(default)]
    pub budgets: Budgets,
}

fn default_ttl_sec() -> u64 {
    600
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            ttl_sec: default_ttl_sec(),
            budgets: Budgets::default(),
        }
    }
}

impl OrdersConfig {
    /// TTL in whole minutes as printed on the line.
    #[must_use]
    pub const fn ttl_minutes(&self) -> u64 {
        self.ttl_sec / 60
    }

    /// `<INSTRUMENT> <SIDE> $<NOTIONAL> IOC TTL=<N>m (NEWS: <LABEL>)`
    #[must_use]
    pub fn directional(&self, proxy: ProxyCandidate, side: Side, label: &EventLabel) -> Candidate {
        let line = format!(
            "{} {side} ${} IOC TTL={}m (NEWS: {label})",
            proxy.instrument,
            self.budgets.notional(proxy.asset_class),
            self.ttl_minutes(),
        );
        Candidate::new(line, proxy.asset_class, proxy.confidence, proxy.rationale)
    }
}
