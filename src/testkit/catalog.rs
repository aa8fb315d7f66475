//! A small, fixed catalog snapshot for end-to-end tests.
//!
//! | Listing | Exchange | Notes |
//! |---|---|---|
//! | NVDA | NASDAQ | semiconductors, last price 173.20 |
//! | 000660 | KS | ADR-less Korean semi |
//! | 005930 | KS | ADR link `SSNLF`, ISIN `KR7005930003` |
//! | EWP | NYSE | Spain country ETF |
//! | THIN | NASDAQ | fails the liquidity guard |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::domain::{adr_record, etf_record, in_sector, record, with_isin};
use crate::adapter::outbound::catalog::{
    MemoryEtfCatalog, MemoryLiquidityCatalog, MemorySecurityMaster, StaticPrices,
};
use crate::application::catalog::CatalogSet;
use crate::application::macro_router::MacroTables;
use crate::domain::{LiquidityStats, Symbol};
use crate::error::CatalogError;
use crate::port::PriceSource;

pub fn security_master() -> MemorySecurityMaster {
    MemorySecurityMaster::new(vec![
        in_sector(record("NVDA", "NASDAQ", "US"), "Semiconductors"),
        in_sector(record("000660", "KS", "KR"), "Semiconductors"),
        with_isin(
            in_sector(adr_record("005930", "KS", "KR", "SSNLF"), "Semiconductors"),
            "KR7005930003",
        ),
        etf_record("EWP", "NYSE"),
        record("THIN", "NASDAQ", "US"),
    ])
}

pub fn etf_catalog() -> MemoryEtfCatalog {
    MemoryEtfCatalog::default()
        .with_sector("Semiconductors", "SOXX")
        .with_country("KR", "EWY")
        .with_country("ES", "EWP")
        .with_country("JP", "EWJ")
}

pub fn liquidity() -> MemoryLiquidityCatalog {
    MemoryLiquidityCatalog::new(vec![
        LiquidityStats::new("NVDA", Some(dec!(30000000000)), Some(dec!(1))),
        LiquidityStats::new("THIN", Some(dec!(200000)), Some(dec!(90))),
    ])
}

pub fn prices() -> StaticPrices {
    StaticPrices::new()
        .with_price("NVDA", dec!(173.20))
        .with_price("SSNLF", dec!(1450))
}

/// Price source whose every lookup errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingPrices;

impl PriceSource for FailingPrices {
    fn last_price(&self, _: &Symbol) -> Result<Option<Decimal>, CatalogError> {
        Err(CatalogError::Unavailable { catalog: "prices" })
    }
}

pub fn macro_tables() -> MacroTables {
    MacroTables::default()
        .with_front("CL", "CLZ5")
        .with_front("GC", "GCZ5")
        .with_front("6E", "6EZ5")
        .with_front("6J", "6JZ5")
}

/// Every catalog populated.
pub fn full() -> CatalogSet {
    CatalogSet::empty()
        .with_securities(security_master())
        .with_etfs(etf_catalog())
        .with_liquidity(liquidity())
        .with_prices(prices())
        .with_macro_tables(macro_tables())
}
