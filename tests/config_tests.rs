use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use headline_reactor::domain::{AssetClass, SessionPolicy};
use headline_reactor::error::{ConfigError, Error};
use headline_reactor::infrastructure::config::settings::Config;
use rust_decimal_macros::dec;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("headline-reactor-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

fn load(contents: &str) -> Result<Config, Error> {
    let path = write_temp_config(contents);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);
    result
}

#[test]
fn config_rejects_short_ttl() {
    let toml = r#"
[orders]
ttl_sec = 30
"#;

    match load(toml) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "ttl_sec", ..
        })) => {}
        Err(err) => panic!("Expected invalid ttl error, got {err}"),
        Ok(config) => panic!(
            "Expected short ttl to be rejected, got {}",
            config.orders.ttl_sec
        ),
    }
}

#[test]
fn config_rejects_zero_budget() {
    let toml = r#"
[orders.budgets]
futures_usd = 0
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "budgets",
            ..
        }))
    ));
}

#[test]
fn config_rejects_zero_proxy_limit() {
    let toml = r#"
[guard]
max_proxies_per_record = 0
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "max_proxies_per_record",
            ..
        }))
    ));
}

#[test]
fn config_rejects_blank_expiry_when_options_enabled() {
    let toml = r#"
[options]
expiry_code = "  "
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::MissingField {
            field: "expiry_code"
        }))
    ));
}

#[test]
fn disabled_options_skip_their_validation() {
    let toml = r#"
[options]
enabled = false
expiry_code = ""
quantity = 0
"#;

    let config = load(toml).expect("disabled options are not validated");
    assert!(!config.options.enabled);
}

#[test]
fn config_rejects_bad_holiday_date() {
    let toml = r#"
[session]
holidays = ["07/04/2024"]
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "holidays",
            ..
        }))
    ));
}

#[test]
fn config_rejects_bad_early_close_time() {
    let toml = r#"
[session.early_closes]
"2024-11-29" = "1pm"
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "early_closes",
            ..
        }))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let result = Config::load("/nonexistent/headline-reactor.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn unknown_policy_is_a_parse_error() {
    let toml = r#"
[session]
policy = "ignore"
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn full_config_round_trips_into_pipeline_settings() {
    let toml = r#"
[logging]
level = "debug"
format = "json"

[orders]
ttl_sec = 300

[orders.budgets]
equity_usd = 2500
etf_usd = 3000

[guard]
min_adv_usd = 10000000
max_spread_bps = 25
allow_foreign_local = true
max_proxies_per_record = 2

[circuit]
window_ms = 30000
max_errors = 5

[options]
expiry_code = "20241115"
quantity = 2

[macro_router.futures_fronts]
CL = "CLZ4"
GC = "GCZ4"

[macro_router.crypto_proxies]
BTCUSD = "IBIT"

[universe]
whitelist = ["NVDA", "soxx"]

[universe.aliases]
"ELECTRONIC ARTS" = "EA"

[session]
policy = "suppress"
holidays = ["2024-12-25"]

[session.early_closes]
"2024-11-29" = "13:00"
"#;

    let config = load(toml).expect("valid config");

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.orders.ttl_sec, 300);
    assert_eq!(config.orders.budgets.notional(AssetClass::Equity), dec!(2500));
    assert_eq!(config.orders.budgets.notional(AssetClass::Etf), dec!(3000));
    assert_eq!(config.orders.budgets.notional(AssetClass::Fut), dec!(2000));
    assert_eq!(config.circuit.window_ms, 30_000);
    assert_eq!(config.circuit.max_errors, 5);
    assert_eq!(config.circuit.max_timeouts, 2);
    assert_eq!(config.options.quantity, 2);
    assert_eq!(config.macro_router.futures_fronts["CL"], "CLZ4");
    assert_eq!(config.macro_router.crypto_proxies["BTCUSD"], "IBIT");
    assert_eq!(config.universe.whitelist().restricted_count(), Some(2));
    assert_eq!(config.universe.aliases["ELECTRONIC ARTS"], "EA");
    assert_eq!(config.session.policy, SessionPolicy::Suppress);
    assert_eq!(config.session.holiday_dates().unwrap().len(), 1);
    assert_eq!(config.session.early_close_times().unwrap().len(), 1);

    let pipeline = config.pipeline();
    assert!(pipeline.allow_local_line);
    assert_eq!(pipeline.orders.ttl_sec, 300);
    assert_eq!(pipeline.max_proxies_per_record, 2);
    assert_eq!(pipeline.guard.min_adv_usd, dec!(10000000));
    assert_eq!(pipeline.exchange_country["KS"], "KR");
}

#[test]
fn shipped_example_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).expect("example config loads");
    assert_eq!(config.macro_router.futures_fronts["GC"], "GCZ5");
    assert!(config.universe.whitelist().restricted_count().is_none());
}
