//! Security resolution against the reference-data catalog.
//!
//! Strategies run in priority order (ISIN, alternate id, symbol+exchange,
//! symbol) and the first one that returns rows wins. The resolver never
//! fails: an absent or failing catalog, or an empty result, falls back to a
//! synthetic row when the entity carries enough information to build one.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::domain::{EntityKind, RawEntity, SecurityRecord};
use crate::error::CatalogError;
use crate::port::SecurityMaster;

/// Resolves equity entities to catalog listing rows.
pub struct SecurityResolver<'a> {
    master: Option<&'a dyn SecurityMaster>,
    exchange_country: &'a BTreeMap<String, String>,
}

impl<'a> SecurityResolver<'a> {
    /// `exchange_country` maps short exchange suffixes (`KS`, `GY`) to
    /// country codes for the degraded foreign path.
    #[must_use]
    pub fn new(
        master: Option<&'a dyn SecurityMaster>,
        exchange_country: &'a BTreeMap<String, String>,
    ) -> Self {
        Self {
            master,
            exchange_country,
        }
    }

    /// All listing rows for `entity`.
    ///
    /// Non-equity entities resolve to nothing.
    #[must_use]
    pub fn resolve(&self, entity: &RawEntity) -> Vec<SecurityRecord> {
        if entity.kind() != EntityKind::Equity {
            return Vec::new();
        }

        match self.master {
            Some(master) => match lookup(master, entity) {
                Ok(rows) if !rows.is_empty() => {
                    debug!(entity = %entity.raw(), rows = rows.len(), "Entity resolved");
                    return rows;
                }
                Ok(_) => debug!(entity = %entity.raw(), "No catalog rows for entity"),
                Err(e) => {
                    warn!(entity = %entity.raw(), error = %e, "Security master lookup failed, degrading");
                }
            },
            None => debug!(entity = %entity.raw(), "Security master unavailable, degrading"),
        }

        self.degraded(entity).into_iter().collect()
    }

    /// Best-effort synthetic row for `entity`.
    fn degraded(&self, entity: &RawEntity) -> Option<SecurityRecord> {
        let symbol = entity.symbol()?;
        if entity.is_us_style() {
            return Some(SecurityRecord::synthetic_us(symbol));
        }
        let exchange = entity.exchange()?;
        let country = self.exchange_country.get(exchange)?;
        Some(SecurityRecord::synthetic_foreign(symbol, exchange, country))
    }
}

/// Run the strategies in priority order; the first non-empty result wins.
fn lookup(
    master: &dyn SecurityMaster,
    entity: &RawEntity,
) -> Result<Vec<SecurityRecord>, CatalogError> {
    if let Some(isin) = entity.isin_code() {
        let rows = master.by_isin(isin)?;
        if !rows.is_empty() {
            return Ok(rows);
        }
    }
    if let Some(alt_id) = entity.alt_id() {
        let rows = master.by_alt_id(alt_id)?;
        if !rows.is_empty() {
            return Ok(rows);
        }
    }
    if let (Some(symbol), Some(exchange)) = (entity.symbol(), entity.exchange()) {
        let rows = master.by_symbol_exchange(symbol, exchange)?;
        if !rows.is_empty() {
            return Ok(rows);
        }
    }
    match entity.symbol() {
        Some(symbol) => master.by_symbol(symbol),
        None => Ok(Vec::new()),
    }
}
