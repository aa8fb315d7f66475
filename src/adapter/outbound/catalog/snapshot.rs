//! JSON snapshot loading for catalogs.
//!
//! Each catalog is a JSON array of rows exported by the upstream batch
//! pipeline (the price snapshot is a `{"SYMBOL": price}` object). Loading
//! errors carry the catalog name and path so the caller can log them and
//! fall back to the catalog-unavailable behaviour.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::memory::{MemoryEtfCatalog, MemoryLiquidityCatalog, MemorySecurityMaster, StaticPrices};
use crate::domain::{EtfRow, LiquidityStats, SecurityRecord, Symbol};
use crate::error::CatalogError;

fn read_json<T: DeserializeOwned>(catalog: &'static str, path: &Path) -> Result<T, CatalogError> {
    let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
        catalog,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
        catalog,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load the reference-data catalog.
pub fn load_security_master(path: &Path) -> Result<MemorySecurityMaster, CatalogError> {
    let rows: Vec<SecurityRecord> = read_json("security master", path)?;
    debug!(path = %path.display(), rows = rows.len(), "Security master loaded");
    Ok(MemorySecurityMaster::new(rows))
}

/// Load the ETF catalog.
pub fn load_etf_catalog(path: &Path) -> Result<MemoryEtfCatalog, CatalogError> {
    let rows: Vec<EtfRow> = read_json("etf", path)?;
    debug!(path = %path.display(), rows = rows.len(), "ETF catalog loaded");
    Ok(MemoryEtfCatalog::new(rows))
}

/// Load the liquidity-statistics catalog.
pub fn load_liquidity_catalog(path: &Path) -> Result<MemoryLiquidityCatalog, CatalogError> {
    let rows: Vec<LiquidityStats> = read_json("liquidity", path)?;
    debug!(path = %path.display(), rows = rows.len(), "Liquidity catalog loaded");
    Ok(MemoryLiquidityCatalog::new(rows))
}

/// Load the last-price snapshot.
pub fn load_prices(path: &Path) -> Result<StaticPrices, CatalogError> {
    let prices: BTreeMap<String, Decimal> = read_json("prices", path)?;
    debug!(path = %path.display(), symbols = prices.len(), "Price snapshot loaded");
    Ok(prices
        .into_iter()
        .map(|(symbol, price)| (Symbol::new(symbol), price))
        .collect())
}
