//! Proxy-instrument waterfall for one resolved listing.
//!
//! Each tier is an independent evaluator producing zero or one candidate.
//! The engine runs tiers in registration order, which is also descending
//! confidence order for the standard set:
//!
//! | Tier | Instrument | Score |
//! |---|---|---|
//! | direct listing | the record itself, when on a US primary venue | 0.95 |
//! | ADR link | the record's ADR symbol | 0.85 |
//! | local line | the home-market listing (opt-in) | 0.75 |
//! | sector ETF | ETF catalog "sector" row for the record's sector | 0.65 |
//! | country ETF | ETF catalog "country" row for the record's country | 0.60 |

use crate::domain::{AssetClass, Confidence, ProxyCandidate, SecurityRecord};
use crate::port::EtfCatalog;

/// Read-only inputs shared by every tier.
#[derive(Clone, Copy)]
pub struct ProxyContext<'a> {
    pub etfs: Option<&'a dyn EtfCatalog>,
    pub allow_local_line: bool,
}

/// One step of the proxy waterfall.
pub trait ProxyTier: Send + Sync {
    /// Identifier used in logs and tests.
    fn name(&self) -> &'static str;

    /// The candidate this tier offers for `record`, if any.
    ///
    /// A lookup miss is `None`, never an error.
    fn evaluate(&self, record: &SecurityRecord, ctx: &ProxyContext<'_>) -> Option<ProxyCandidate>;
}

/// The record itself when it trades on a US primary venue.
pub struct DirectListing;

impl ProxyTier for DirectListing {
    fn name(&self) -> &'static str {
        "direct_listing"
    }

    fn evaluate(&self, record: &SecurityRecord, _: &ProxyContext<'_>) -> Option<ProxyCandidate> {
        if !record.is_us_listing() {
            return None;
        }
        let class = if record.flags.is_etf {
            AssetClass::Etf
        } else {
            AssetClass::Equity
        };
        Some(ProxyCandidate::new(
            record.symbol.clone(),
            class,
            "direct US listing",
            Confidence::DIRECT_LISTING,
        ))
    }
}

/// The US depositary receipt linked to the record.
pub struct AdrLink;

impl ProxyTier for AdrLink {
    fn name(&self) -> &'static str {
        "adr_link"
    }

    fn evaluate(&self, record: &SecurityRecord, _: &ProxyContext<'_>) -> Option<ProxyCandidate> {
        let adr = record.adr()?;
        Some(ProxyCandidate::new(
            adr.clone(),
            AssetClass::Equity,
            format!("ADR for {} {}", record.symbol, record.exchange),
            Confidence::ADR,
        ))
    }
}

/// The home-market line, only when local trading is enabled.
pub struct LocalLine;

impl ProxyTier for LocalLine {
    fn name(&self) -> &'static str {
        "local_line"
    }

    fn evaluate(&self, record: &SecurityRecord, ctx: &ProxyContext<'_>) -> Option<ProxyCandidate> {
        if !ctx.allow_local_line || record.is_us_listing() {
            return None;
        }
        Some(ProxyCandidate::new(
            record.symbol.clone(),
            AssetClass::Equity,
            format!("local line on {}", record.exchange),
            Confidence::LOCAL_LINE,
        ))
    }
}

/// Sympathy ETF for the record's sector.
pub struct SectorEtf;

impl ProxyTier for SectorEtf {
    fn name(&self) -> &'static str {
        "sector_etf"
    }

    fn evaluate(&self, record: &SecurityRecord, ctx: &ProxyContext<'_>) -> Option<ProxyCandidate> {
        let sector = record.sector()?;
        let etf = ctx.etfs?.sector_etf(sector)?;
        Some(ProxyCandidate::new(
            etf,
            AssetClass::Etf,
            format!("sector sympathy ETF for {sector}"),
            Confidence::SECTOR_ETF,
        ))
    }
}

/// Country ETF for the record's country.
pub struct CountryEtf;

impl ProxyTier for CountryEtf {
    fn name(&self) -> &'static str {
        "country_etf"
    }

    fn evaluate(&self, record: &SecurityRecord, ctx: &ProxyContext<'_>) -> Option<ProxyCandidate> {
        let country = record.country()?;
        let etf = ctx.etfs?.country_etf(country)?;
        Some(ProxyCandidate::new(
            etf,
            AssetClass::Etf,
            format!("country ETF proxy for {country}"),
            Confidence::COUNTRY_ETF,
        ))
    }
}

/// Ordered collection of proxy tiers.
#[derive(Default)]
pub struct ProxyEngine {
    tiers: Vec<Box<dyn ProxyTier>>,
}

impl ProxyEngine {
    /// An engine with no tiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The five standard tiers in waterfall order.
    #[must_use]
    pub fn standard() -> Self {
        let mut engine = Self::new();
        engine.register(Box::new(DirectListing));
        engine.register(Box::new(AdrLink));
        engine.register(Box::new(LocalLine));
        engine.register(Box::new(SectorEtf));
        engine.register(Box::new(CountryEtf));
        engine
    }

    /// Append a tier. Tiers run in registration order.
    pub fn register(&mut self, tier: Box<dyn ProxyTier>) {
        self.tiers.push(tier);
    }

    #[must_use]
    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|t| t.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Every candidate the tiers offer for `record`, in tier order.
    #[must_use]
    pub fn build(&self, record: &SecurityRecord, ctx: &ProxyContext<'_>) -> Vec<ProxyCandidate> {
        self.tiers
            .iter()
            .filter_map(|tier| tier.evaluate(record, ctx))
            .collect()
    }
}
