//! Tradeable universe configuration.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::Whitelist;

/// `[universe]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UniverseConfig {
    /// Permitted equity and ETF symbols; empty permits everything.
    #[serde(default)]
    pub whitelist: Vec<String>,
    /// Exchange suffix to ISO country code.
    #[serde(default = "default_exchange_country")]
    pub exchange_country: BTreeMap<String, String>,
    /// Company display name to ticker, e.g. `"ELECTRONIC ARTS" = "EA"`.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

fn default_exchange_country() -> BTreeMap<String, String> {
    [
        ("KS", "KR"),
        ("KQ", "KR"),
        ("T", "JP"),
        ("JP", "JP"),
        ("HK", "HK"),
        ("LN", "GB"),
        ("L", "GB"),
        ("GY", "DE"),
        ("DE", "DE"),
        ("FP", "FR"),
        ("PA", "FR"),
        ("SM", "ES"),
        ("IM", "IT"),
        ("MI", "IT"),
        ("SW", "CH"),
        ("VX", "CH"),
        ("AU", "AU"),
        ("TT", "TW"),
        ("TW", "TW"),
        ("SS", "CN"),
        ("SZ", "CN"),
        ("CN", "CA"),
        ("TO", "CA"),
    ]
    .into_iter()
    .map(|(suffix, country)| (suffix.to_string(), country.to_string()))
    .collect()
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            whitelist: Vec::new(),
            exchange_country: default_exchange_country(),
            aliases: BTreeMap::new(),
        }
    }
}

impl UniverseConfig {
    /// The configured whitelist.
    #[must_use]
    pub fn whitelist(&self) -> Whitelist {
        if self.whitelist.iter().all(|s| s.trim().is_empty()) {
            return Whitelist::All;
        }
        Whitelist::from_symbols(&self.whitelist)
    }
}
