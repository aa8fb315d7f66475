//! Infrastructure bootstrap helpers for runtime wiring.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::calendar::UsEquityCalendar;
use crate::adapter::outbound::catalog::{
    load_etf_catalog, load_liquidity_catalog, load_prices, load_security_master,
};
use crate::application::catalog::{CatalogHandle, CatalogSet};
use crate::application::circuit::SharedCircuitBreaker;
use crate::application::extract::EntityExtractor;
use crate::application::pipeline::Pipeline;
use crate::application::reactor::Reactor;
use crate::error::{CatalogError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::TradingCalendar;

/// Load one optional snapshot, degrading to absent on failure.
fn load_optional<T>(
    name: &'static str,
    path: Option<&Path>,
    load: impl FnOnce(&Path) -> std::result::Result<T, CatalogError>,
) -> Option<T> {
    let path = path?;
    match load(path) {
        Ok(catalog) => {
            info!(catalog = name, path = %path.display(), "Catalog loaded");
            Some(catalog)
        }
        Err(e) => {
            warn!(catalog = name, path = %path.display(), error = %e, "Catalog unavailable, continuing without it");
            None
        }
    }
}

/// Build the catalog set from the configured snapshot files.
///
/// A catalog whose file is unset, missing or malformed is left absent; the
/// pipeline narrows its output instead of failing.
pub fn build_catalogs(config: &Config) -> CatalogSet {
    let paths = &config.catalogs;
    let mut set = CatalogSet::empty().with_macro_tables(config.macro_router.clone());

    if let Some(master) =
        load_optional("securities", paths.securities.as_deref(), load_security_master)
    {
        set = set.with_securities(master);
    }
    if let Some(etfs) = load_optional("etfs", paths.etfs.as_deref(), load_etf_catalog) {
        set = set.with_etfs(etfs);
    }
    if let Some(stats) =
        load_optional("liquidity", paths.liquidity.as_deref(), load_liquidity_catalog)
    {
        set = set.with_liquidity(stats);
    }
    if let Some(prices) = load_optional("prices", paths.prices.as_deref(), load_prices) {
        set = set.with_prices(prices);
    }
    set
}

/// Build the exchange calendar with configured holidays and half days.
///
/// # Errors
///
/// Returns an error if a configured date or time does not parse.
#[allow(clippy::result_large_err)]
pub fn build_calendar(config: &Config) -> Result<Arc<dyn TradingCalendar>> {
    let mut calendar = UsEquityCalendar::new().with_holidays(config.session.holiday_dates()?);
    for (date, close) in config.session.early_close_times()? {
        calendar = calendar.with_early_close(date, close);
    }
    Ok(Arc::new(calendar))
}

/// Build the resolution pipeline from configuration.
#[must_use]
pub fn build_pipeline(config: &Config) -> Pipeline {
    let extractor = EntityExtractor::new().with_aliases(
        config
            .universe
            .aliases
            .iter()
            .map(|(name, symbol)| (name.as_str(), symbol.as_str())),
    );
    Pipeline::new(config.pipeline()).with_extractor(extractor)
}

/// Wire a reactor from configuration.
///
/// # Errors
///
/// Returns an error if the calendar overrides are invalid.
#[allow(clippy::result_large_err)]
pub fn build_reactor(config: &Config) -> Result<Reactor> {
    let catalogs = Arc::new(CatalogHandle::new(build_catalogs(config)));
    let breaker = SharedCircuitBreaker::new(config.circuit.clone());
    let calendar = build_calendar(config)?;
    let whitelist = config.universe.whitelist();

    info!(
        whitelist = ?whitelist.restricted_count(),
        policy = ?config.session.policy,
        "Reactor initialized"
    );

    Ok(Reactor::new(build_pipeline(config), catalogs, breaker, calendar)
        .with_policy(config.session.policy)
        .with_whitelist(whitelist))
}
