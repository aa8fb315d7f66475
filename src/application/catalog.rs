//! Immutable catalog snapshots and the handle that publishes them.
//!
//! A [`CatalogSet`] is never mutated once built. A refresh builds a new set
//! and [`CatalogHandle::swap`]s it in; runs already holding the previous
//! `Arc` finish against the snapshot they started with.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use super::macro_router::MacroTables;
use crate::port::{EtfCatalog, LiquidityCatalog, PriceSource, SecurityMaster};

/// Every read-only table one pipeline run consults.
///
/// Each catalog is optional; an absent catalog selects that stage's
/// degraded behaviour.
#[derive(Clone, Default)]
pub struct CatalogSet {
    securities: Option<Arc<dyn SecurityMaster>>,
    etfs: Option<Arc<dyn EtfCatalog>>,
    liquidity: Option<Arc<dyn LiquidityCatalog>>,
    prices: Option<Arc<dyn PriceSource>>,
    macro_tables: MacroTables,
}

impl CatalogSet {
    /// A set with every catalog absent.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_securities(mut self, master: impl SecurityMaster + 'static) -> Self {
        self.securities = Some(Arc::new(master));
        self
    }

    #[must_use]
    pub fn with_etfs(mut self, etfs: impl EtfCatalog + 'static) -> Self {
        self.etfs = Some(Arc::new(etfs));
        self
    }

    #[must_use]
    pub fn with_liquidity(mut self, stats: impl LiquidityCatalog + 'static) -> Self {
        self.liquidity = Some(Arc::new(stats));
        self
    }

    #[must_use]
    pub fn with_prices(mut self, prices: impl PriceSource + 'static) -> Self {
        self.prices = Some(Arc::new(prices));
        self
    }

    #[must_use]
    pub fn with_macro_tables(mut self, tables: MacroTables) -> Self {
        self.macro_tables = tables;
        self
    }

    #[must_use]
    pub fn securities(&self) -> Option<&dyn SecurityMaster> {
        self.securities.as_deref()
    }

    #[must_use]
    pub fn etfs(&self) -> Option<&dyn EtfCatalog> {
        self.etfs.as_deref()
    }

    #[must_use]
    pub fn liquidity(&self) -> Option<&dyn LiquidityCatalog> {
        self.liquidity.as_deref()
    }

    #[must_use]
    pub fn prices(&self) -> Option<&dyn PriceSource> {
        self.prices.as_deref()
    }

    #[must_use]
    pub const fn macro_tables(&self) -> &MacroTables {
        &self.macro_tables
    }
}

impl fmt::Debug for CatalogSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogSet")
            .field("securities", &self.securities.is_some())
            .field("etfs", &self.etfs.is_some())
            .field("liquidity", &self.liquidity.is_some())
            .field("prices", &self.prices.is_some())
            .field("macro_tables", &self.macro_tables)
            .finish()
    }
}

/// Atomically swappable pointer to the current [`CatalogSet`].
pub struct CatalogHandle {
    current: RwLock<Arc<CatalogSet>>,
}

impl CatalogHandle {
    #[must_use]
    pub fn new(set: CatalogSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(set)),
        }
    }

    /// The snapshot to use for one run.
    #[must_use]
    pub fn snapshot(&self) -> Arc<CatalogSet> {
        Arc::clone(&self.current.read())
    }

    /// Publish `set` and return the snapshot it replaced.
    pub fn swap(&self, set: CatalogSet) -> Arc<CatalogSet> {
        let next = Arc::new(set);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        info!("Catalog snapshot swapped");
        previous
    }
}

impl Default for CatalogHandle {
    fn default() -> Self {
        Self::new(CatalogSet::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::catalog::MemoryEtfCatalog;
    use crate::domain::Symbol;

    #[test]
    fn empty_set_has_no_catalogs() {
        let set = CatalogSet::empty();
        assert!(set.securities().is_none());
        assert!(set.etfs().is_none());
        assert!(set.liquidity().is_none());
        assert!(set.prices().is_none());
    }

    #[test]
    fn swap_publishes_new_snapshot_without_touching_old() {
        let handle = CatalogHandle::default();
        let before = handle.snapshot();

        let etfs = MemoryEtfCatalog::default().with_country("KR", "EWY");
        let previous = handle.swap(CatalogSet::empty().with_etfs(etfs));

        assert!(Arc::ptr_eq(&before, &previous));
        assert!(before.etfs().is_none());
        let after = handle.snapshot();
        assert_eq!(
            after.etfs().and_then(|e| e.country_etf("KR")),
            Some(Symbol::from("EWY"))
        );
    }
}
