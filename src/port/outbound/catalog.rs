//! Reference-data catalog ports.
//!
//! Catalogs are built and refreshed by external batch pipelines. The core
//! only ever reads them, through these traits, from an immutable snapshot.

use crate::domain::{LiquidityStats, SecurityRecord, Symbol};
use crate::error::CatalogError;

/// Port for the reference-data (security master) catalog.
///
/// Each lookup is one resolution strategy. Implementations return every
/// matching listing; an empty vector means "no match", not an error.
pub trait SecurityMaster: Send + Sync {
    /// Rows whose ISIN equals `isin` exactly.
    fn by_isin(&self, isin: &str) -> Result<Vec<SecurityRecord>, CatalogError>;

    /// Rows whose alternate id equals `alt_id`, ignoring case.
    fn by_alt_id(&self, alt_id: &str) -> Result<Vec<SecurityRecord>, CatalogError>;

    /// Rows listed under `symbol` on `exchange`.
    ///
    /// The `US` composite code matches any primary US venue.
    fn by_symbol_exchange(
        &self,
        symbol: &Symbol,
        exchange: &str,
    ) -> Result<Vec<SecurityRecord>, CatalogError>;

    /// Rows listed under `symbol` on any venue.
    fn by_symbol(&self, symbol: &Symbol) -> Result<Vec<SecurityRecord>, CatalogError>;
}

/// Port for the ETF catalog's sector and country rows.
pub trait EtfCatalog: Send + Sync {
    /// ETF tracking `sector`, matched case-insensitively.
    fn sector_etf(&self, sector: &str) -> Option<Symbol>;

    /// ETF tracking `country`, matched case-insensitively.
    fn country_etf(&self, country: &str) -> Option<Symbol>;
}

/// Port for the liquidity-statistics catalog.
pub trait LiquidityCatalog: Send + Sync {
    /// Most recent snapshot for `symbol`, if any.
    fn stats(&self, symbol: &Symbol) -> Option<LiquidityStats>;
}
