//! End-to-end pipeline scenarios and properties against the testkit catalog.

use std::collections::BTreeMap;

use headline_reactor::adapter::outbound::catalog::{MemoryLiquidityCatalog, MemorySecurityMaster};
use headline_reactor::application::catalog::CatalogSet;
use headline_reactor::application::liquidity::LiquidityGuard;
use headline_reactor::application::pipeline::{Pipeline, Resolution, ResolutionRequest};
use headline_reactor::application::ranker::rank;
use headline_reactor::application::resolve::SecurityResolver;
use headline_reactor::domain::{
    AssetClass, Candidate, Confidence, EventLabel, LiquidityGuardConfig, LiquidityStats,
    OperatingMode, RawEntity, Side, Symbol, Whitelist,
};
use headline_reactor::testkit;
use headline_reactor::testkit::domain::{in_sector, record};
use rust_decimal_macros::dec;

const HEADLINES: &[&str] = &[
    "NVDA US NVIDIA IN TALKS FOR MAJOR ACQUISITION",
    "GOLD SURGES TO RECORD HIGH",
    "*** 12:30 ***",
    "ITX SM SHARES JUMP",
    "SK HYNIX 000660 KS HBM CHIP SUPPLY DEAL",
    "OIL AND GOLD RALLY AS YEN SLIDES",
    "BITCOIN AND ETHER RALLY",
    "SPAIN UPGRADED BY FITCH",
];

fn pipeline() -> Pipeline {
    Pipeline::new(testkit::config::pipeline())
}

fn run(request: ResolutionRequest) -> Resolution {
    pipeline().run(&request, &testkit::catalog::full())
}

fn lines(resolution: &Resolution) -> Vec<&str> {
    resolution.plans.iter().map(|p| p.line.as_str()).collect()
}

#[test]
fn nvda_in_talks_leads_with_equity_then_call() {
    let request = ResolutionRequest::new("NVDA US NVIDIA IN TALKS FOR MAJOR ACQUISITION")
        .with_whitelist(Whitelist::parse("NVDA,SOXX"));
    let resolution = run(request);

    assert_eq!(resolution.label.as_str(), "ma_rumor");
    assert_eq!(resolution.side, Side::Buy);
    assert_eq!(
        lines(&resolution),
        vec![
            "NVDA BUY $1500 IOC TTL=10m (NEWS: ma_rumor)",
            "SOXX BUY $1500 IOC TTL=10m (NEWS: ma_rumor)",
            "NVDA +C175 NEXT_FRI x1 LMT=mid IOC TTL=10m (NEWS: ma_rumor)",
        ]
    );
    assert_eq!(resolution.plans[0].asset_class, Some(AssetClass::Equity));
    assert_eq!(resolution.plans[2].asset_class, Some(AssetClass::Option));
    assert!(resolution.plans[0].confidence > resolution.plans[2].confidence);
}

#[test]
fn nvda_without_price_has_no_call() {
    let catalogs = CatalogSet::empty()
        .with_securities(testkit::catalog::security_master())
        .with_etfs(testkit::catalog::etf_catalog());
    let request = ResolutionRequest::new("NVDA US IN TALKS")
        .with_whitelist(Whitelist::parse("NVDA,SOXX"));
    let resolution = pipeline().run(&request, &catalogs);

    assert!(resolution
        .plans
        .iter()
        .all(|p| p.asset_class != Some(AssetClass::Option)));
    assert_eq!(resolution.plans[0].line, "NVDA BUY $1500 IOC TTL=10m (NEWS: ma_rumor)");
}

#[test]
fn gold_only_yields_one_future() {
    let resolution = run(ResolutionRequest::new("GOLD SURGES TO RECORD HIGH"));

    assert_eq!(resolution.plans.len(), 1);
    let plan = &resolution.plans[0];
    assert_eq!(plan.asset_class, Some(AssetClass::Fut));
    assert_eq!(plan.line, "GCZ5 BUY $2000 IOC TTL=10m (NEWS: macro_ambiguous)");
    assert_eq!(plan.confidence, Confidence::COMMODITY_FUTURE);
}

#[test]
fn headline_words_outside_the_catalog_stay_out_of_plans() {
    let resolution = run(ResolutionRequest::new("GOLD PRICES CLIMB ON SAFE HAVEN DEMAND"));

    assert_eq!(
        lines(&resolution),
        vec!["GCZ5 BUY $2000 IOC TTL=10m (NEWS: macro_ambiguous)"]
    );
}

#[test]
fn uncatalogued_name_without_whitelist_yields_sentinel() {
    let resolution = Pipeline::default().run(
        &ResolutionRequest::new("AAPL IN TALKS"),
        &CatalogSet::empty(),
    );

    assert_eq!(lines(&resolution), vec!["NO ACTION (ma_rumor)"]);
}

#[test]
fn no_match_yields_sentinel() {
    let resolution = run(ResolutionRequest::new("*** 12:30 ***"));

    assert!(resolution.label.is_ambiguous());
    assert_eq!(resolution.plans.len(), 1);
    assert!(resolution.plans[0].is_no_action());
    assert_eq!(resolution.plans[0].line, "NO ACTION (macro_ambiguous)");
    assert_eq!(resolution.plans[0].confidence, Confidence::ZERO);
}

#[test]
fn foreign_suffix_maps_to_whitelisted_country_etf() {
    let request =
        ResolutionRequest::new("ITX SM SHARES JUMP").with_whitelist(Whitelist::parse("EWP"));
    let resolution = run(request);

    assert_eq!(resolution.plans.len(), 1);
    let plan = &resolution.plans[0];
    assert_eq!(plan.asset_class, Some(AssetClass::Etf));
    assert!(plan.line.starts_with("EWP BUY $1500"));
    assert!(plan.rationale.contains("country ETF"));
    assert_eq!(plan.confidence, Confidence::COUNTRY_ETF);
}

#[test]
fn country_etf_outside_whitelist_is_withheld() {
    let request =
        ResolutionRequest::new("ITX SM SHARES JUMP").with_whitelist(Whitelist::parse("SPY"));
    let resolution = run(request);

    assert!(resolution.plans[0].is_no_action());
}

#[test]
fn supplied_label_overrides_classification() {
    let request = ResolutionRequest::new("GOLD SURGES TO RECORD HIGH").with_label("guide_cut");
    let resolution = run(request);

    assert_eq!(resolution.label.as_str(), "guide_cut");
    assert_eq!(resolution.side, Side::Sell);
    // Macro lines stay BUY whatever the label's side.
    assert_eq!(
        resolution.plans[0].line,
        "GCZ5 BUY $2000 IOC TTL=10m (NEWS: guide_cut)"
    );
}

#[test]
fn etf_only_mode_drops_everything_else() {
    let request = ResolutionRequest::new("NVDA US IN TALKS AS GOLD SURGES")
        .with_whitelist(Whitelist::parse("NVDA,SOXX"))
        .with_mode(OperatingMode::EtfOnly);
    let resolution = run(request);

    assert_eq!(lines(&resolution), vec!["SOXX BUY $1500 IOC TTL=10m (NEWS: ma_rumor)"]);
}

#[test]
fn output_is_deterministic() {
    for text in HEADLINES {
        let first = run(ResolutionRequest::new(*text));
        let second = run(ResolutionRequest::new(*text));
        assert_eq!(first, second, "non-deterministic output for {text:?}");
    }
}

#[test]
fn output_is_bounded_and_score_ordered() {
    for text in HEADLINES {
        let resolution = run(ResolutionRequest::new(*text));
        assert!(
            (1..=3).contains(&resolution.plans.len()),
            "{text:?} produced {} plans",
            resolution.plans.len()
        );
        for pair in resolution.plans.windows(2) {
            assert!(
                pair[0].confidence >= pair[1].confidence,
                "{text:?} is not score-ordered"
            );
        }
        let mut seen: Vec<&str> = resolution.plans.iter().map(|p| p.line.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), resolution.plans.len(), "{text:?} has duplicate lines");
    }
}

#[test]
fn duplicate_lines_keep_the_higher_score() {
    let line = "EWY BUY $1500 IOC TTL=10m (NEWS: pop_positive)";
    let candidates = vec![
        Candidate::new(line, AssetClass::Etf, Confidence::COUNTRY_ETF, "country"),
        Candidate::new(
            line,
            AssetClass::Etf,
            Confidence::try_new(0.8).unwrap(),
            "sector",
        ),
    ];
    let plans = rank(candidates, &EventLabel::from("pop_positive"), 3);

    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].confidence.value(), 0.8);
    assert_eq!(plans[0].rationale, "sector");
}

#[test]
fn guard_passes_everything_without_statistics() {
    let config = LiquidityGuardConfig::default();
    let guard = LiquidityGuard::new(&config, None);
    assert!(guard.passes(&Symbol::from("THIN")));

    let stats = MemoryLiquidityCatalog::new(vec![LiquidityStats::new(
        "OTHER",
        Some(dec!(1)),
        Some(dec!(999)),
    )]);
    let guard = LiquidityGuard::new(&config, Some(&stats));
    assert!(guard.passes(&Symbol::from("THIN")));
}

#[test]
fn illiquid_name_falls_back_to_sector_etf() {
    let master = MemorySecurityMaster::new(vec![in_sector(
        record("THIN", "NASDAQ", "US"),
        "Software",
    )]);
    let catalogs = testkit::catalog::full()
        .with_securities(master)
        .with_etfs(testkit::catalog::etf_catalog().with_sector("Software", "IGV"));
    let resolution = pipeline().run(&ResolutionRequest::new("THIN US IN TALKS"), &catalogs);

    assert_eq!(lines(&resolution), vec!["IGV BUY $1500 IOC TTL=10m (NEWS: ma_rumor)"]);
}

#[test]
fn resolver_degrades_to_one_synthetic_us_row() {
    let countries = BTreeMap::new();
    let resolver = SecurityResolver::new(None, &countries);
    let rows = resolver.resolve(&RawEntity::bare("AAPL", 0));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].symbol.as_str(), "AAPL");
    assert_eq!(rows[0].country, "US");
    assert!(rows[0].is_us_listing());
}

#[test]
fn empty_catalogs_still_answer() {
    let resolution = Pipeline::default().run(
        &ResolutionRequest::new("AAPL IN TALKS").with_whitelist(Whitelist::parse("AAPL")),
        &CatalogSet::empty(),
    );

    assert_eq!(resolution.label.as_str(), "ma_rumor");
    assert_eq!(lines(&resolution), vec!["AAPL BUY $1500 IOC TTL=10m (NEWS: ma_rumor)"]);
}
