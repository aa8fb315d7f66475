//! Macro keyword routing to futures, FX and crypto proxies.
//!
//! Runs on the raw text, independent of entity resolution. Each keyword
//! family yields at most one candidate; a root with no configured front
//! contract is skipped without error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::keywords::{matching_families, Family};
use crate::domain::{AssetClass, Confidence, ProxyCandidate};

const DEFAULT_BTC_PROXY: &str = "BITO";
const DEFAULT_ETH_PROXY: &str = "ETHE";

/// Front-contract and crypto-proxy lookup tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTables {
    /// Futures root (`CL`, `GC`, `6E`, `6J`, `DX`) to current front code.
    #[serde(default)]
    pub futures_fronts: BTreeMap<String, String>,
    /// Crypto spot pair (`BTCUSD`, `ETHUSD`) to tradeable proxy ticker.
    #[serde(default)]
    pub crypto_proxies: BTreeMap<String, String>,
}

impl MacroTables {
    #[must_use]
    pub fn with_front(mut self, root: &str, code: &str) -> Self {
        self.futures_fronts.insert(root.to_string(), code.to_string());
        self
    }

    #[must_use]
    pub fn with_crypto_proxy(mut self, pair: &str, proxy: &str) -> Self {
        self.crypto_proxies.insert(pair.to_string(), proxy.to_string());
        self
    }

    /// Front code for `root`; blank entries count as unconfigured.
    #[must_use]
    pub fn front(&self, root: &str) -> Option<&str> {
        self.futures_fronts
            .get(root)
            .map(String::as_str)
            .filter(|code| !code.trim().is_empty())
    }

    /// Proxy ticker for a crypto pair, falling back to the stock defaults.
    #[must_use]
    pub fn crypto_proxy(&self, pair: &str) -> Option<&str> {
        let configured = self
            .crypto_proxies
            .get(pair)
            .map(String::as_str)
            .filter(|proxy| !proxy.trim().is_empty());
        configured.or(match pair {
            "BTCUSD" => Some(DEFAULT_BTC_PROXY),
            "ETHUSD" => Some(DEFAULT_ETH_PROXY),
            _ => None,
        })
    }
}

/// Where a keyword family routes.
enum Route {
    Future { root: &'static str, class: AssetClass },
    Crypto { pair: &'static str },
}

fn route_for(family: Family) -> (Route, Confidence, &'static str) {
    match family {
        Family::Oil => (
            Route::Future { root: "CL", class: AssetClass::Fut },
            Confidence::COMMODITY_FUTURE,
            "oil proxy",
        ),
        Family::Gold => (
            Route::Future { root: "GC", class: AssetClass::Fut },
            Confidence::COMMODITY_FUTURE,
            "gold proxy",
        ),
        Family::Euro => (
            Route::Future { root: "6E", class: AssetClass::Fx },
            Confidence::CURRENCY_FUTURE,
            "EUR/USD proxy",
        ),
        Family::Yen => (
            Route::Future { root: "6J", class: AssetClass::Fx },
            Confidence::CURRENCY_FUTURE,
            "JPY/USD proxy",
        ),
        Family::Dollar => (
            Route::Future { root: "DX", class: AssetClass::Fx },
            Confidence::MINOR_MACRO,
            "dollar index proxy",
        ),
        Family::Bitcoin => (
            Route::Crypto { pair: "BTCUSD" },
            Confidence::CURRENCY_FUTURE,
            "BTC proxy",
        ),
        Family::Ether => (
            Route::Crypto { pair: "ETHUSD" },
            Confidence::MINOR_MACRO,
            "ETH proxy",
        ),
    }
}

/// Macro candidates for `text`, one per matched keyword family.
#[must_use]
pub fn route_macro(text: &str, tables: &MacroTables) -> Vec<ProxyCandidate> {
    let text = text.to_uppercase();
    matching_families(&text)
        .into_iter()
        .filter_map(|(family, _)| {
            let (route, confidence, why) = route_for(family);
            let candidate = match route {
                Route::Future { root, class } => tables
                    .front(root)
                    .map(|code| ProxyCandidate::new(code, class, why, confidence)),
                Route::Crypto { pair } => tables
                    .crypto_proxy(pair)
                    .map(|proxy| ProxyCandidate::new(proxy, AssetClass::Crypto, why, confidence)),
            };
            if candidate.is_none() {
                debug!(family = ?family, "No front configured, skipping macro route");
            }
            candidate
        })
        .collect()
}
