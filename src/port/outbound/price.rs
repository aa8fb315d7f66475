//! Last-traded-price lookup port.

use rust_decimal::Decimal;

use crate::domain::Symbol;
use crate::error::CatalogError;

/// Port for last-traded prices.
///
/// Prices must already be resolved to a snapshot; implementations must not
/// block on the network.
pub trait PriceSource: Send + Sync {
    /// Last traded price for `symbol`, `Ok(None)` when unknown.
    fn last_price(&self, symbol: &Symbol) -> Result<Option<Decimal>, CatalogError>;
}
