//! The pure, synchronous resolution pipeline.
//!
//! ```text
//! text ─┬─ EntityExtractor ─ SecurityResolver ─ ProxyEngine ─ LiquidityGuard ─┐
//!       │                                                   OptionsOverlay ──┤
//!       ├─ Classifier (label, side)                                          ├─ Ranker
//!       └─ MacroRouter ──────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline never fails. Every missing catalog or failing lookup
//! narrows the output instead.

use std::collections::BTreeMap;

use tracing::debug;

use super::catalog::CatalogSet;
use super::classify::Classifier;
use super::extract::EntityExtractor;
use super::liquidity::LiquidityGuard;
use super::macro_router::route_macro;
use super::options::{OptionsConfig, OptionsOverlay};
use super::proxy::{ProxyContext, ProxyEngine};
use super::ranker::{rank, MAX_PLANS};
use super::render::OrdersConfig;
use super::resolve::SecurityResolver;
use crate::domain::{
    AssetClass, Candidate, EntityKind, EventLabel, LiquidityGuardConfig, OperatingMode,
    ProxyCandidate, Side, Symbol, TradePlan, Whitelist,
};

/// Default cap on proxies kept per resolved listing.
pub const DEFAULT_MAX_PROXIES_PER_RECORD: usize = 3;

/// One headline to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub text: String,
    /// Pre-computed label; classified from `text` when absent.
    pub label: Option<EventLabel>,
    pub whitelist: Whitelist,
    pub mode: OperatingMode,
}

impl ResolutionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: None,
            whitelist: Whitelist::All,
            mode: OperatingMode::Full,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<EventLabel>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_whitelist(mut self, whitelist: Whitelist) -> Self {
        self.whitelist = whitelist;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: OperatingMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Pipeline settings that do not live in a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub orders: OrdersConfig,
    pub guard: LiquidityGuardConfig,
    pub options: OptionsConfig,
    /// Offer the home-market listing of foreign names.
    pub allow_local_line: bool,
    pub max_proxies_per_record: usize,
    /// Plan cap; values above [`MAX_PLANS`] are clamped.
    pub max_plans: usize,
    /// Exchange suffix to country code, for degraded foreign resolution.
    pub exchange_country: BTreeMap<String, String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            orders: OrdersConfig::default(),
            guard: LiquidityGuardConfig::default(),
            options: OptionsConfig::default(),
            allow_local_line: false,
            max_proxies_per_record: DEFAULT_MAX_PROXIES_PER_RECORD,
            max_plans: MAX_PLANS,
            exchange_country: BTreeMap::new(),
        }
    }
}

/// Label and ranked plans for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub label: EventLabel,
    pub side: Side,
    pub plans: Vec<TradePlan>,
    /// External lookups that failed and were skipped during the run.
    pub dependency_failures: usize,
}

/// Headline-to-plans pipeline.
pub struct Pipeline {
    extractor: EntityExtractor,
    classifier: Classifier,
    engine: ProxyEngine,
    config: PipelineConfig,
}

impl Pipeline {
    /// Pipeline with the standard extractor, rules and proxy tiers.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            extractor: EntityExtractor::new(),
            classifier: Classifier::default(),
            engine: ProxyEngine::standard(),
            config,
        }
    }

    #[must_use]
    pub fn with_extractor(mut self, extractor: EntityExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    #[must_use]
    pub fn with_engine(mut self, engine: ProxyEngine) -> Self {
        self.engine = engine;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Label for `request`, falling back to the ambiguous label.
    #[must_use]
    pub fn label_for(&self, request: &ResolutionRequest) -> EventLabel {
        request
            .label
            .clone()
            .or_else(|| self.classifier.classify(&request.text))
            .unwrap_or_else(EventLabel::ambiguous)
    }

    /// Resolve `request` against one catalog snapshot.
    ///
    /// Deterministic for a given request, snapshot and configuration.
    #[must_use]
    pub fn run(&self, request: &ResolutionRequest, catalogs: &CatalogSet) -> Resolution {
        let label = self.label_for(request);
        let side = label.side();

        let (mut candidates, dependency_failures) =
            self.instrument_candidates(request, catalogs, &label, side);
        candidates.extend(
            route_macro(&request.text, catalogs.macro_tables())
                .into_iter()
                .map(|proxy| self.config.orders.directional(proxy, Side::Buy, &label)),
        );

        let before = candidates.len();
        candidates.retain(|c| request.mode.admits(c.asset_class));
        if candidates.len() < before {
            debug!(mode = %request.mode, dropped = before - candidates.len(), "Mode filter applied");
        }

        let plans = rank(candidates, &label, self.config.max_plans.min(MAX_PLANS));
        Resolution {
            label,
            side,
            plans,
            dependency_failures,
        }
    }

    /// Directional and option candidates for every equity entity, with the
    /// number of failed price lookups.
    fn instrument_candidates(
        &self,
        request: &ResolutionRequest,
        catalogs: &CatalogSet,
        label: &EventLabel,
        side: Side,
    ) -> (Vec<Candidate>, usize) {
        let resolver = SecurityResolver::new(catalogs.securities(), &self.config.exchange_country);
        let guard = LiquidityGuard::new(&self.config.guard, catalogs.liquidity());
        let overlay = OptionsOverlay::new(&self.config.options, catalogs.prices());
        let ctx = ProxyContext {
            etfs: catalogs.etfs(),
            allow_local_line: self.config.allow_local_line,
        };

        let mut out = Vec::new();
        let entities = self.extractor.extract(&request.text);
        debug!(entities = entities.len(), "Entities extracted");

        for entity in entities.iter().filter(|e| e.kind() == EntityKind::Equity) {
            for record in resolver.resolve(entity) {
                let kept: Vec<ProxyCandidate> = self
                    .engine
                    .build(&record, &ctx)
                    .into_iter()
                    .filter(|p| !guarded(p.asset_class) || guard.passes(&p.instrument))
                    .filter(|p| admitted(&request.whitelist, p))
                    .filter(|p| {
                        !record.flags.is_synthetic
                            || p.asset_class != AssetClass::Equity
                            || uncatalogued_listed(&request.whitelist, &p.instrument)
                    })
                    .take(self.config.max_proxies_per_record)
                    .collect();

                for proxy in kept {
                    let option = (proxy.asset_class == AssetClass::Equity)
                        .then(|| overlay.suggest(&proxy.instrument, label, side))
                        .flatten();
                    out.push(self.config.orders.directional(proxy, side, label));
                    out.extend(option);
                }
            }
        }
        (out, overlay.failures())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

/// Asset classes checked by the liquidity guard; everything else bypasses it.
const fn guarded(class: AssetClass) -> bool {
    matches!(class, AssetClass::Equity)
}

/// Whitelist gate; only single names and ETFs are restricted.
fn admitted(whitelist: &Whitelist, proxy: &ProxyCandidate) -> bool {
    match proxy.asset_class {
        AssetClass::Equity | AssetClass::Etf => {
            let ok = whitelist.allows(&proxy.instrument);
            if !ok {
                debug!(instrument = %proxy.instrument, "Not whitelisted");
            }
            ok
        }
        _ => true,
    }
}

/// An equity line for a row the resolver made up needs the symbol named
/// in the whitelist; `Whitelist::All` does not vouch for it.
fn uncatalogued_listed(whitelist: &Whitelist, symbol: &Symbol) -> bool {
    let ok = whitelist.lists(symbol);
    if !ok {
        debug!(instrument = %symbol, "Uncatalogued name not explicitly whitelisted");
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::catalog::{
        MemoryEtfCatalog, MemoryLiquidityCatalog, MemorySecurityMaster, StaticPrices,
    };
    use crate::application::macro_router::MacroTables;
    use crate::domain::LiquidityStats;
    use crate::testkit::catalog::FailingPrices;
    use crate::testkit::domain::{adr_record, in_sector, record};
    use rust_decimal_macros::dec;

    fn lines(resolution: &Resolution) -> Vec<&str> {
        resolution.plans.iter().map(|p| p.line.as_str()).collect()
    }

    #[test]
    fn supplied_label_skips_classification() {
        let pipeline = Pipeline::default();
        let request = ResolutionRequest::new("ACME UP 5%")
            .with_label("downgrade")
            .with_whitelist(Whitelist::parse("ACME"));
        let out = pipeline.run(&request, &CatalogSet::empty());
        assert_eq!(out.label, "downgrade");
        assert_eq!(out.side, Side::Sell);
        assert_eq!(lines(&out), vec!["ACME SELL $1500 IOC TTL=10m (NEWS: downgrade)"]);
    }

    #[test]
    fn adr_and_country_etf_for_foreign_listing() {
        let master = MemorySecurityMaster::new(vec![in_sector(
            adr_record("000660", "KS", "KR", "HXSCL"),
            "Semiconductors",
        )]);
        let etfs = MemoryEtfCatalog::default()
            .with_sector("SEMICONDUCTORS", "SOXX")
            .with_country("KR", "EWY");
        let catalogs = CatalogSet::empty().with_securities(master).with_etfs(etfs);

        let out = Pipeline::default().run(
            &ResolutionRequest::new("000660 KS SUPPLY DEAL").with_label("pop_positive"),
            &catalogs,
        );
        assert_eq!(
            lines(&out),
            vec![
                "HXSCL BUY $1500 IOC TTL=10m (NEWS: pop_positive)",
                "SOXX BUY $1500 IOC TTL=10m (NEWS: pop_positive)",
                "EWY BUY $1500 IOC TTL=10m (NEWS: pop_positive)",
            ]
        );
    }

    #[test]
    fn illiquid_equity_is_dropped_but_etf_survives() {
        let master = MemorySecurityMaster::new(vec![in_sector(record("THIN", "XNAS", "US"), "Tech")]);
        let etfs = MemoryEtfCatalog::default().with_sector("TECH", "XLK");
        let stats = MemoryLiquidityCatalog::new(vec![LiquidityStats::new(
            "THIN",
            Some(dec!(1000)),
            Some(dec!(5)),
        )]);
        let catalogs = CatalogSet::empty()
            .with_securities(master)
            .with_etfs(etfs)
            .with_liquidity(stats);

        let out = Pipeline::default().run(
            &ResolutionRequest::new("THIN JUMPS").with_label("pop_positive"),
            &catalogs,
        );
        assert_eq!(lines(&out), vec!["XLK BUY $1500 IOC TTL=10m (NEWS: pop_positive)"]);
    }

    #[test]
    fn illiquid_etf_bypasses_guard() {
        let master = MemorySecurityMaster::new(vec![in_sector(record("ACME", "XNAS", "US"), "Tech")]);
        let etfs = MemoryEtfCatalog::default().with_sector("TECH", "XLK");
        let stats = MemoryLiquidityCatalog::new(vec![LiquidityStats::new(
            "XLK",
            Some(dec!(1000)),
            Some(dec!(99)),
        )]);
        let catalogs = CatalogSet::empty()
            .with_securities(master)
            .with_etfs(etfs)
            .with_liquidity(stats);

        let out = Pipeline::default().run(
            &ResolutionRequest::new("ACME JUMPS").with_label("pop_positive"),
            &catalogs,
        );
        assert_eq!(
            lines(&out),
            vec![
                "ACME BUY $1500 IOC TTL=10m (NEWS: pop_positive)",
                "XLK BUY $1500 IOC TTL=10m (NEWS: pop_positive)",
            ]
        );
    }

    #[test]
    fn uncatalogued_equity_needs_explicit_listing() {
        let request = ResolutionRequest::new("ACME JUMPS").with_label("pop_positive");

        let open = Pipeline::default().run(&request, &CatalogSet::empty());
        assert_eq!(lines(&open), vec!["NO ACTION (pop_positive)"]);

        let listed = Pipeline::default().run(
            &request.with_whitelist(Whitelist::parse("ACME")),
            &CatalogSet::empty(),
        );
        assert_eq!(lines(&listed), vec!["ACME BUY $1500 IOC TTL=10m (NEWS: pop_positive)"]);
    }

    #[test]
    fn uncatalogued_foreign_name_keeps_country_etf() {
        let etfs = MemoryEtfCatalog::default().with_country("ES", "EWP");
        let catalogs = CatalogSet::empty().with_etfs(etfs);
        let config = PipelineConfig {
            allow_local_line: true,
            exchange_country: BTreeMap::from([("SM".to_string(), "ES".to_string())]),
            ..PipelineConfig::default()
        };

        let out = Pipeline::new(config).run(
            &ResolutionRequest::new("ITX SM").with_label("pop_positive"),
            &catalogs,
        );
        assert_eq!(lines(&out), vec!["EWP BUY $1500 IOC TTL=10m (NEWS: pop_positive)"]);
    }

    #[test]
    fn whitelist_gates_equities_and_etfs_not_macro() {
        let master = MemorySecurityMaster::new(vec![in_sector(record("ACME", "XNYS", "US"), "Energy")]);
        let etfs = MemoryEtfCatalog::default().with_sector("ENERGY", "XLE");
        let catalogs = CatalogSet::empty()
            .with_securities(master)
            .with_etfs(etfs)
            .with_macro_tables(MacroTables::default().with_front("CL", "CLZ5"));

        let request = ResolutionRequest::new("ACME HIT BY OIL SPILL")
            .with_label("supply_shock_neg")
            .with_whitelist(Whitelist::parse("XLE"));
        let out = Pipeline::default().run(&request, &catalogs);
        assert_eq!(
            lines(&out),
            vec![
                "XLE SELL $1500 IOC TTL=10m (NEWS: supply_shock_neg)",
                "CLZ5 BUY $2000 IOC TTL=10m (NEWS: supply_shock_neg)",
            ]
        );
    }

    #[test]
    fn option_follows_its_equity() {
        let prices = StaticPrices::new().with_price("ACME", dec!(41.2));
        let catalogs = CatalogSet::empty().with_prices(prices);
        let out = Pipeline::default().run(
            &ResolutionRequest::new("ACME AGREES TO BE ACQUIRED")
                .with_whitelist(Whitelist::parse("ACME")),
            &catalogs,
        );
        assert_eq!(out.label, "ma_confirmed");
        assert_eq!(
            lines(&out),
            vec![
                "ACME BUY $1500 IOC TTL=10m (NEWS: ma_confirmed)",
                "ACME +C41 NEXT_FRI x1 LMT=mid IOC TTL=10m (NEWS: ma_confirmed)",
            ]
        );
    }

    #[test]
    fn etf_only_mode_keeps_only_etfs() {
        let master = MemorySecurityMaster::new(vec![in_sector(record("ACME", "XNAS", "US"), "Tech")]);
        let etfs = MemoryEtfCatalog::default().with_sector("TECH", "XLK");
        let catalogs = CatalogSet::empty()
            .with_securities(master)
            .with_etfs(etfs)
            .with_macro_tables(MacroTables::default().with_front("GC", "GCZ5"));

        let request = ResolutionRequest::new("ACME BUYS GOLD MINER").with_mode(OperatingMode::EtfOnly);
        let out = Pipeline::default().run(&request, &catalogs);
        assert!(out.plans.iter().all(|p| p.asset_class == Some(AssetClass::Etf)));
        assert_eq!(out.plans[0].line.split(' ').next(), Some("XLK"));
    }

    #[test]
    fn plan_cap_never_exceeds_three() {
        let catalogs = CatalogSet::empty().with_macro_tables(
            MacroTables::default()
                .with_front("CL", "CLZ5")
                .with_front("GC", "GCZ5")
                .with_front("6E", "6EZ5")
                .with_front("6J", "6JZ5"),
        );
        let config = PipelineConfig {
            max_plans: 10,
            ..PipelineConfig::default()
        };

        let out = Pipeline::new(config).run(&ResolutionRequest::new("OIL GOLD EURO YEN"), &catalogs);
        assert_eq!(out.plans.len(), MAX_PLANS);
    }

    #[test]
    fn failed_price_lookups_are_counted() {
        let catalogs = CatalogSet::empty().with_prices(FailingPrices);
        let out = Pipeline::default().run(
            &ResolutionRequest::new("ACME IN TALKS").with_whitelist(Whitelist::parse("ACME")),
            &catalogs,
        );
        assert_eq!(out.dependency_failures, 1);
        assert_eq!(lines(&out), vec!["ACME BUY $1500 IOC TTL=10m (NEWS: ma_rumor)"]);
    }

    #[test]
    fn per_record_cap_limits_proxies() {
        let master = MemorySecurityMaster::new(vec![in_sector(
            adr_record("7203", "T", "JP", "TM"),
            "Autos",
        )]);
        let etfs = MemoryEtfCatalog::default()
            .with_sector("AUTOS", "CARZ")
            .with_country("JP", "EWJ");
        let catalogs = CatalogSet::empty().with_securities(master).with_etfs(etfs);
        let config = PipelineConfig {
            max_proxies_per_record: 2,
            ..PipelineConfig::default()
        };

        let out = Pipeline::new(config).run(
            &ResolutionRequest::new("7203 T").with_label("pop_positive"),
            &catalogs,
        );
        let symbols: Vec<_> = out
            .plans
            .iter()
            .filter_map(|p| p.line.split(' ').next())
            .map(Symbol::from)
            .collect();
        assert_eq!(symbols, vec![Symbol::from("TM"), Symbol::from("CARZ")]);
    }
}
