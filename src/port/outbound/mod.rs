//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the read-only collaborators the resolution
//! core consumes: reference data, ETF and liquidity catalogs, last prices,
//! and the trading calendar.

pub mod calendar;
pub mod catalog;
pub mod price;
