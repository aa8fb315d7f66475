//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section and field has a default, so an empty file is a valid
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use headline_reactor::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::catalogs::CatalogPaths;
use super::guard::GuardConfig;
use super::logging::LoggingConfig;
use super::session::SessionConfig;
use super::universe::UniverseConfig;
use crate::application::circuit::CircuitConfig;
use crate::application::macro_router::MacroTables;
use crate::application::options::OptionsConfig;
use crate::application::pipeline::PipelineConfig;
use crate::application::ranker::MAX_PLANS;
use crate::application::render::OrdersConfig;
use crate::domain::{AssetClass, LiquidityGuardConfig};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Order TTL and per-asset-class notional budgets.
    #[serde(default)]
    pub orders: OrdersConfig,

    /// Liquidity thresholds and proxy selection limits.
    #[serde(default)]
    pub guard: GuardConfig,

    /// Circuit breaker window and thresholds.
    #[serde(default)]
    pub circuit: CircuitConfig,

    /// Options overlay.
    #[serde(default)]
    pub options: OptionsConfig,

    /// Futures front contracts and crypto proxies.
    #[serde(default)]
    pub macro_router: MacroTables,

    /// Catalog snapshot files.
    #[serde(default)]
    pub catalogs: CatalogPaths,

    /// Whitelist, exchange-country table and name aliases.
    #[serde(default)]
    pub universe: UniverseConfig,

    /// Session policy and exchange calendar overrides.
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.orders.ttl_sec < 60 {
            return Err(ConfigError::InvalidValue {
                field: "ttl_sec",
                reason: "must be at least 60 seconds".to_string(),
            }
            .into());
        }
        for class in [
            AssetClass::Equity,
            AssetClass::Etf,
            AssetClass::Fut,
            AssetClass::Fx,
            AssetClass::Crypto,
        ] {
            if self.orders.budgets.notional(class) <= Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    field: "budgets",
                    reason: format!("{class} budget must be greater than 0"),
                }
                .into());
            }
        }

        if self.guard.min_adv_usd < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "min_adv_usd",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }
        if self.guard.max_spread_bps <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "max_spread_bps",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.guard.max_quote_age_ms <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_quote_age_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.guard.max_proxies_per_record == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_proxies_per_record",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.circuit.window_ms <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "window_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.circuit.max_errors == 0
            || self.circuit.max_timeouts == 0
            || self.circuit.max_wide_spreads == 0
        {
            return Err(ConfigError::InvalidValue {
                field: "circuit_thresholds",
                reason: "thresholds must be greater than 0".to_string(),
            }
            .into());
        }

        if self.options.enabled {
            if self.options.expiry_code.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: "expiry_code",
                }
                .into());
            }
            if self.options.quantity == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "quantity",
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
            if self.options.ttl_sec < 60 {
                return Err(ConfigError::InvalidValue {
                    field: "options.ttl_sec",
                    reason: "must be at least 60 seconds".to_string(),
                }
                .into());
            }
        }

        self.session.holiday_dates()?;
        self.session.early_close_times()?;

        Ok(())
    }

    /// Pipeline settings derived from this configuration.
    #[must_use]
    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig {
            orders: self.orders.clone(),
            guard: LiquidityGuardConfig::from(&self.guard),
            options: self.options.clone(),
            allow_local_line: self.guard.allow_foreign_local,
            max_proxies_per_record: self.guard.max_proxies_per_record,
            max_plans: MAX_PLANS,
            exchange_country: self.universe.exchange_country.clone(),
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
