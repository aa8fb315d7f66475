//! Catalog adapters: in-memory snapshots and their JSON loaders.

pub mod memory;
pub mod snapshot;

pub use memory::{MemoryEtfCatalog, MemoryLiquidityCatalog, MemorySecurityMaster, StaticPrices};
pub use snapshot::{load_etf_catalog, load_liquidity_catalog, load_prices, load_security_master};
