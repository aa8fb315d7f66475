//! Catalog snapshot locations.

use std::path::PathBuf;

use serde::Deserialize;

/// `[catalogs]` section. An unset path leaves that catalog absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogPaths {
    /// Reference-data rows (JSON array).
    #[serde(default)]
    pub securities: Option<PathBuf>,
    /// Sector and country ETF rows (JSON array).
    #[serde(default)]
    pub etfs: Option<PathBuf>,
    /// Liquidity statistics rows (JSON array).
    #[serde(default)]
    pub liquidity: Option<PathBuf>,
    /// Last prices (JSON object, symbol to price).
    #[serde(default)]
    pub prices: Option<PathBuf>,
}
