//! In-memory catalog snapshots.
//!
//! These are the immutable tables the resolution core reads. They are
//! built once (from JSON snapshot files or test fixtures) and never
//! mutated afterwards; a refresh builds a new set and swaps it in.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::{is_us_venue, EtfKind, EtfRow, LiquidityStats, SecurityRecord, Symbol};
use crate::error::CatalogError;
use crate::port::{EtfCatalog, LiquidityCatalog, PriceSource, SecurityMaster};

/// Security master backed by a vector of listing rows.
///
/// Row order is preserved in every lookup result.
#[derive(Debug, Clone, Default)]
pub struct MemorySecurityMaster {
    rows: Vec<SecurityRecord>,
}

impl MemorySecurityMaster {
    #[must_use]
    pub fn new(rows: Vec<SecurityRecord>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn select(&self, keep: impl Fn(&SecurityRecord) -> bool) -> Vec<SecurityRecord> {
        self.rows.iter().filter(|r| keep(r)).cloned().collect()
    }
}

fn venue_matches(row_exchange: &str, requested: &str) -> bool {
    if requested.eq_ignore_ascii_case("US") {
        is_us_venue(row_exchange)
    } else {
        row_exchange.eq_ignore_ascii_case(requested)
    }
}

impl SecurityMaster for MemorySecurityMaster {
    fn by_isin(&self, isin: &str) -> Result<Vec<SecurityRecord>, CatalogError> {
        Ok(self.select(|r| r.isin.as_deref() == Some(isin)))
    }

    fn by_alt_id(&self, alt_id: &str) -> Result<Vec<SecurityRecord>, CatalogError> {
        Ok(self.select(|r| {
            r.alt_id
                .as_deref()
                .is_some_and(|id| id.eq_ignore_ascii_case(alt_id))
        }))
    }

    fn by_symbol_exchange(
        &self,
        symbol: &Symbol,
        exchange: &str,
    ) -> Result<Vec<SecurityRecord>, CatalogError> {
        Ok(self.select(|r| r.symbol == *symbol && venue_matches(&r.exchange, exchange)))
    }

    fn by_symbol(&self, symbol: &Symbol) -> Result<Vec<SecurityRecord>, CatalogError> {
        Ok(self.select(|r| r.symbol == *symbol))
    }
}

/// ETF catalog keyed by upper-cased sector and country.
///
/// When a key appears twice the first row wins.
#[derive(Debug, Clone, Default)]
pub struct MemoryEtfCatalog {
    sector: HashMap<String, Symbol>,
    country: HashMap<String, Symbol>,
}

impl MemoryEtfCatalog {
    #[must_use]
    pub fn new(rows: Vec<EtfRow>) -> Self {
        rows.into_iter()
            .fold(Self::default(), |catalog, row| catalog.with_row(row))
    }

    #[must_use]
    pub fn with_row(mut self, row: EtfRow) -> Self {
        let table = match row.kind {
            EtfKind::Sector => &mut self.sector,
            EtfKind::Country => &mut self.country,
        };
        table
            .entry(row.key.trim().to_uppercase())
            .or_insert(row.symbol);
        self
    }

    #[must_use]
    pub fn with_sector(self, sector: &str, symbol: &str) -> Self {
        self.with_row(EtfRow::sector(sector, symbol))
    }

    #[must_use]
    pub fn with_country(self, country: &str, symbol: &str) -> Self {
        self.with_row(EtfRow::country(country, symbol))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sector.len() + self.country.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EtfCatalog for MemoryEtfCatalog {
    fn sector_etf(&self, sector: &str) -> Option<Symbol> {
        self.sector.get(&sector.trim().to_uppercase()).cloned()
    }

    fn country_etf(&self, country: &str) -> Option<Symbol> {
        self.country.get(&country.trim().to_uppercase()).cloned()
    }
}

/// Liquidity statistics, one row per symbol.
///
/// Duplicate upstream rows collapse to the most recent snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryLiquidityCatalog {
    rows: HashMap<Symbol, LiquidityStats>,
}

impl MemoryLiquidityCatalog {
    #[must_use]
    pub fn new(rows: Vec<LiquidityStats>) -> Self {
        let mut catalog = Self::default();
        for row in rows {
            catalog.insert(row);
        }
        catalog
    }

    fn insert(&mut self, row: LiquidityStats) {
        let stale = matches!(
            self.rows.get(&row.symbol),
            Some(existing) if !row.supersedes(existing)
        );
        if !stale {
            self.rows.insert(row.symbol.clone(), row);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl LiquidityCatalog for MemoryLiquidityCatalog {
    fn stats(&self, symbol: &Symbol) -> Option<LiquidityStats> {
        self.rows.get(symbol).cloned()
    }
}

/// Last-price snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticPrices {
    prices: HashMap<Symbol, Decimal>,
}

impl StaticPrices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_price(mut self, symbol: &str, price: Decimal) -> Self {
        self.prices.insert(Symbol::new(symbol), price);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(Symbol, Decimal)> for StaticPrices {
    fn from_iter<I: IntoIterator<Item = (Symbol, Decimal)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

impl PriceSource for StaticPrices {
    fn last_price(&self, symbol: &Symbol) -> Result<Option<Decimal>, CatalogError> {
        Ok(self.prices.get(symbol).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompositeId, SecurityFlags};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn row(symbol: &str, exchange: &str) -> SecurityRecord {
        SecurityRecord {
            composite_id: CompositeId::new(format!("{symbol}-{exchange}")),
            symbol: Symbol::new(symbol),
            exchange: exchange.into(),
            mic: String::new(),
            country: "US".into(),
            sector: None,
            name: symbol.into(),
            isin: None,
            alt_id: None,
            adr_link: None,
            flags: SecurityFlags::default(),
        }
    }

    #[test]
    fn us_composite_matches_any_us_venue() {
        let master = MemorySecurityMaster::new(vec![row("NVDA", "NASDAQ"), row("NVDA", "GY")]);
        let rows = master
            .by_symbol_exchange(&Symbol::from("NVDA"), "US")
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].exchange, "NASDAQ");
    }

    #[test]
    fn symbol_lookup_returns_every_listing() {
        let master = MemorySecurityMaster::new(vec![row("SHEL", "LN"), row("SHEL", "NYSE")]);
        assert_eq!(master.by_symbol(&Symbol::from("SHEL")).unwrap().len(), 2);
    }

    #[test]
    fn alt_id_lookup_ignores_case() {
        let mut vod = row("VOD", "LN");
        vod.alt_id = Some("VOD.L".into());
        let master = MemorySecurityMaster::new(vec![vod]);
        assert_eq!(master.by_alt_id("vod.l").unwrap().len(), 1);
    }

    #[test]
    fn etf_lookup_is_case_insensitive_and_first_wins() {
        let etfs = MemoryEtfCatalog::default()
            .with_sector("Semiconductors", "SOXX")
            .with_sector("SEMICONDUCTORS", "SMH")
            .with_country("kr", "EWY");
        assert_eq!(etfs.sector_etf("semiconductors"), Some(Symbol::from("SOXX")));
        assert_eq!(etfs.country_etf("KR"), Some(Symbol::from("EWY")));
        assert_eq!(etfs.country_etf("JP"), None);
    }

    #[test]
    fn liquidity_keeps_most_recent_row() {
        let mut older = LiquidityStats::new("AAPL", Some(dec!(1)), None);
        older.as_of = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut newer = LiquidityStats::new("AAPL", Some(dec!(2)), None);
        newer.as_of = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        let catalog = MemoryLiquidityCatalog::new(vec![newer, older]);
        let stats = catalog.stats(&Symbol::from("AAPL")).unwrap();
        assert_eq!(stats.adv_usd, Some(dec!(2)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn static_prices_lookup() {
        let prices = StaticPrices::new().with_price("nvda", dec!(172.5));
        assert_eq!(
            prices.last_price(&Symbol::from("NVDA")).unwrap(),
            Some(dec!(172.5))
        );
        assert_eq!(prices.last_price(&Symbol::from("AMD")).unwrap(), None);
    }
}
