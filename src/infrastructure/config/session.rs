//! Market session configuration.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::domain::SessionPolicy;
use crate::error::ConfigError;

/// `[session]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// What to do with plans outside regular hours.
    #[serde(default)]
    pub policy: SessionPolicy,
    /// Full-day closures, `YYYY-MM-DD`.
    #[serde(default)]
    pub holidays: Vec<String>,
    /// Half days: `YYYY-MM-DD` to local close time `HH:MM`.
    #[serde(default)]
    pub early_closes: BTreeMap<String, String>,
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| ConfigError::InvalidValue {
        field,
        reason: format!("'{raw}' is not a YYYY-MM-DD date: {e}"),
    })
}

impl SessionConfig {
    /// Parsed holiday dates.
    pub fn holiday_dates(&self) -> Result<Vec<NaiveDate>, ConfigError> {
        self.holidays
            .iter()
            .map(|raw| parse_date("holidays", raw))
            .collect()
    }

    /// Parsed early-close dates and local close times.
    pub fn early_close_times(&self) -> Result<BTreeMap<NaiveDate, NaiveTime>, ConfigError> {
        self.early_closes
            .iter()
            .map(|(date, time)| {
                let date = parse_date("early_closes", date)?;
                let time = NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|e| {
                    ConfigError::InvalidValue {
                        field: "early_closes",
                        reason: format!("'{time}' is not an HH:MM time: {e}"),
                    }
                })?;
                Ok((date, time))
            })
            .collect()
    }
}
