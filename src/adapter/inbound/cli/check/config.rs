//! Handler for `check config`.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{config, output};
use crate::adapter::outbound::catalog::{
    load_etf_catalog, load_liquidity_catalog, load_prices, load_security_master,
    MemoryEtfCatalog, MemoryLiquidityCatalog, MemorySecurityMaster, StaticPrices,
};
use crate::error::{CatalogError, Result};
use crate::infrastructure::config::settings::Config;

/// Load status of one catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    NotConfigured,
    Loaded { rows: usize },
    Failed { reason: String },
}

impl CatalogStatus {
    fn probe<T>(
        path: Option<&Path>,
        load: impl FnOnce(&Path) -> std::result::Result<T, CatalogError>,
        rows: impl FnOnce(&T) -> usize,
    ) -> Self {
        match path.map(load) {
            None => Self::NotConfigured,
            Some(Ok(catalog)) => Self::Loaded {
                rows: rows(&catalog),
            },
            Some(Err(e)) => Self::Failed {
                reason: e.to_string(),
            },
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::NotConfigured => "not configured".to_string(),
            Self::Loaded { rows } => format!("{rows} rows"),
            Self::Failed { reason } => reason.clone(),
        }
    }
}

/// Probe every configured catalog snapshot.
#[must_use]
pub fn probe_catalogs(config: &Config) -> Vec<(&'static str, CatalogStatus)> {
    let paths = &config.catalogs;
    vec![
        (
            "securities",
            CatalogStatus::probe(
                paths.securities.as_deref(),
                load_security_master,
                MemorySecurityMaster::len,
            ),
        ),
        (
            "etfs",
            CatalogStatus::probe(
                paths.etfs.as_deref(),
                load_etf_catalog,
                MemoryEtfCatalog::len,
            ),
        ),
        (
            "liquidity",
            CatalogStatus::probe(
                paths.liquidity.as_deref(),
                load_liquidity_catalog,
                MemoryLiquidityCatalog::len,
            ),
        ),
        (
            "prices",
            CatalogStatus::probe(
                paths.prices.as_deref(),
                load_prices,
                StaticPrices::len,
            ),
        ),
    ]
}

/// Validate the configuration file and report catalog availability.
///
/// Only configuration errors fail the command; an unavailable catalog is a
/// warning because the pipeline degrades without it.
pub fn execute_config(explicit: Option<&Path>) -> Result<()> {
    let source = config::resolve_path(explicit);
    let config = config::load(explicit)?;
    let catalogs = probe_catalogs(&config);
    let whitelist = config.universe.whitelist();
    let source_label = source
        .as_ref()
        .map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string());

    if output::is_json() {
        let catalog_json: Vec<_> = catalogs
            .iter()
            .map(|(name, status)| {
                json!({
                    "name": name,
                    "ok": !matches!(status, CatalogStatus::Failed { .. }),
                    "status": status.describe(),
                })
            })
            .collect();
        output::json_output(json!({
            "command": "check.config",
            "config": source_label,
            "valid": true,
            "ttl_minutes": config.orders.ttl_minutes(),
            "whitelist": whitelist.restricted_count(),
            "catalogs": catalog_json,
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", &source_label);
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Order TTL", format!("{}m", config.orders.ttl_minutes()));
    output::field(
        "Budgets",
        format!(
            "EQUITY ${} ETF ${} FUT ${} FX ${} CRYPTO ${}",
            config.orders.budgets.equity_usd,
            config.orders.budgets.etf_usd,
            config.orders.budgets.futures_usd,
            config.orders.budgets.fx_usd,
            config.orders.budgets.crypto_usd,
        ),
    );
    output::field("Min ADV", format!("${}", config.guard.min_adv_usd));
    output::field("Max spread", format!("{}bps", config.guard.max_spread_bps));
    output::field(
        "Circuit",
        format!(
            "{} errors / {} timeouts / {} wide spreads per {}ms",
            config.circuit.max_errors,
            config.circuit.max_timeouts,
            config.circuit.max_wide_spreads,
            config.circuit.window_ms,
        ),
    );
    output::field(
        "Whitelist",
        whitelist
            .restricted_count()
            .map_or_else(|| "all".to_string(), |n| format!("{n} symbols")),
    );
    output::field("Options", if config.options.enabled { "enabled" } else { "disabled" });

    output::section("Catalogs");
    for (name, status) in &catalogs {
        match status {
            CatalogStatus::Loaded { .. } => {
                output::success(&format!("{name}: {}", status.describe()));
            }
            CatalogStatus::NotConfigured => output::field(name, status.describe()),
            CatalogStatus::Failed { .. } => {
                output::warning(&format!("{name}: {}", status.describe()));
            }
        }
    }
    if config.macro_router.futures_fronts.is_empty() {
        output::hint("no futures fronts configured; oil, gold and FX headlines yield no macro line");
    }

    output::success("Configuration check complete");
    Ok(())
}
