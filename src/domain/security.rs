//! Reference-catalog listing rows.

use serde::{Deserialize, Serialize};

use super::id::{CompositeId, Symbol};

/// Exchange codes treated as a primary US venue.
///
/// Covers the Bloomberg composite (`US`), exchange shorthands, and MICs.
pub const US_PRIMARY_VENUES: &[&str] = &[
    "US", "NYSE", "NASDAQ", "N", "O", "UN", "UQ", "UW", "XNYS", "XNAS", "XNMS",
];

/// True when `exchange` names a primary US venue.
#[must_use]
pub fn is_us_venue(exchange: &str) -> bool {
    let exchange = exchange.trim().to_ascii_uppercase();
    US_PRIMARY_VENUES.contains(&exchange.as_str())
}

/// Listing-level flags carried by the reference catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityFlags {
    #[serde(default)]
    pub is_common: bool,
    #[serde(default)]
    pub is_etf: bool,
    #[serde(default)]
    pub is_adr: bool,
    /// Built by the resolver without a catalog row; never read from snapshots.
    #[serde(skip)]
    pub is_synthetic: bool,
}

/// One listing row in the reference catalog.
///
/// A symbol may appear on several rows when it is listed on several venues;
/// `composite_id` is unique per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityRecord {
    pub composite_id: CompositeId,
    pub symbol: Symbol,
    pub exchange: String,
    #[serde(default)]
    pub mic: String,
    pub country: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub alt_id: Option<String>,
    #[serde(default)]
    pub adr_link: Option<Symbol>,
    #[serde(default)]
    pub flags: SecurityFlags,
}

impl SecurityRecord {
    /// Best-effort row for a bare or `US`-suffixed token when no catalog row exists.
    #[must_use]
    pub fn synthetic_us(symbol: &Symbol) -> Self {
        Self {
            composite_id: CompositeId::synthetic(symbol, "US"),
            symbol: symbol.clone(),
            exchange: "US".into(),
            mic: "XNAS".into(),
            country: "US".into(),
            sector: None,
            name: symbol.to_string(),
            isin: None,
            alt_id: None,
            adr_link: None,
            flags: SecurityFlags {
                is_common: true,
                is_synthetic: true,
                ..SecurityFlags::default()
            },
        }
    }

    /// Best-effort row for a foreign-suffixed token whose country is known
    /// from the exchange suffix alone.
    #[must_use]
    pub fn synthetic_foreign(symbol: &Symbol, exchange: &str, country: &str) -> Self {
        Self {
            composite_id: CompositeId::synthetic(symbol, exchange),
            symbol: symbol.clone(),
            exchange: exchange.to_string(),
            mic: String::new(),
            country: country.to_string(),
            sector: None,
            name: symbol.to_string(),
            isin: None,
            alt_id: None,
            adr_link: None,
            flags: SecurityFlags {
                is_synthetic: true,
                ..SecurityFlags::default()
            },
        }
    }

    /// True when this row trades on a primary US venue.
    #[must_use]
    pub fn is_us_listing(&self) -> bool {
        is_us_venue(&self.exchange)
    }

    /// The ADR symbol, ignoring blank links left by upstream pipelines.
    #[must_use]
    pub fn adr(&self) -> Option<&Symbol> {
        self.adr_link.as_ref().filter(|s| !s.as_str().is_empty())
    }

    /// The sector, ignoring blanks.
    #[must_use]
    pub fn sector(&self) -> Option<&str> {
        self.sector.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// The country, or `None` when blank.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        Some(self.country.as_str()).filter(|s| !s.trim().is_empty())
    }
}
