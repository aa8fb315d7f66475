//! ETF catalog rows.

use serde::{Deserialize, Serialize};

use super::id::Symbol;

/// Grouping an ETF row is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EtfKind {
    Sector,
    Country,
}

/// One ETF catalog row: `symbol` tracks the `key` sector or country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtfRow {
    pub symbol: Symbol,
    #[serde(rename = "type")]
    pub kind: EtfKind,
    pub key: String,
}

impl EtfRow {
    pub fn sector(key: impl Into<String>, symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            kind: EtfKind::Sector,
            key: key.into(),
        }
    }

    pub fn country(key: impl Into<String>, symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            kind: EtfKind::Country,
            key: key.into(),
        }
    }
}
