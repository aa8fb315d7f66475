//! Builders for domain primitives used across tests.
//!
//! Factory functions for [`SecurityRecord`] rows so tests focus on
//! assertions rather than construction boilerplate.

use crate::domain::{CompositeId, SecurityFlags, SecurityRecord, Symbol};

/// A common-stock listing row with no sector, ISIN or ADR link.
pub fn record(symbol: &str, exchange: &str, country: &str) -> SecurityRecord {
    SecurityRecord {
        composite_id: CompositeId::new(format!("{symbol} {exchange}")),
        symbol: Symbol::from(symbol),
        exchange: exchange.to_string(),
        mic: String::new(),
        country: country.to_string(),
        sector: None,
        name: symbol.to_string(),
        isin: None,
        alt_id: None,
        adr_link: None,
        flags: SecurityFlags {
            is_common: true,
            ..SecurityFlags::default()
        },
    }
}

/// A foreign listing linked to a US ADR.
pub fn adr_record(symbol: &str, exchange: &str, country: &str, adr: &str) -> SecurityRecord {
    SecurityRecord {
        adr_link: Some(Symbol::from(adr)),
        ..record(symbol, exchange, country)
    }
}

/// An exchange-traded fund listing.
pub fn etf_record(symbol: &str, exchange: &str) -> SecurityRecord {
    SecurityRecord {
        flags: SecurityFlags {
            is_etf: true,
            ..SecurityFlags::default()
        },
        ..record(symbol, exchange, "US")
    }
}

/// `record` with its sector set.
pub fn in_sector(record: SecurityRecord, sector: &str) -> SecurityRecord {
    SecurityRecord {
        sector: Some(sector.to_string()),
        ..record
    }
}

/// `record` with its ISIN set.
pub fn with_isin(record: SecurityRecord, isin: &str) -> SecurityRecord {
    SecurityRecord {
        isin: Some(isin.to_string()),
        ..record
    }
}
