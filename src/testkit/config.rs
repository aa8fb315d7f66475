//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use std::collections::BTreeMap;

use crate::application::pipeline::PipelineConfig;

/// Exchange suffix to country table covering the test catalog's venues.
pub fn exchange_country() -> BTreeMap<String, String> {
    [("KS", "KR"), ("KQ", "KR"), ("T", "JP"), ("SM", "ES"), ("LN", "GB")]
        .into_iter()
        .map(|(suffix, country)| (suffix.to_string(), country.to_string()))
        .collect()
}

/// Default pipeline settings plus the exchange-country table.
pub fn pipeline() -> PipelineConfig {
    PipelineConfig {
        exchange_country: exchange_country(),
        ..PipelineConfig::default()
    }
}
