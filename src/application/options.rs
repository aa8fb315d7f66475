//! Single-name options overlay.
//!
//! Upside M&A labels get an at-the-money call; downside labels on a SELL
//! headline get a roughly 30-delta put, approximated as a fixed 7.5%
//! out-of-the-money strike. No price means no option; a price is never
//! fabricated.

use std::cell::Cell;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{AssetClass, Candidate, Confidence, EventLabel, Side, Symbol};
use crate::port::PriceSource;

const PUT_OTM_DISCOUNT: Decimal = dec!(0.075);

/// Options overlay settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_expiry_code")]
    pub expiry_code: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default = "default_ttl_sec")]
    pub ttl_sec: u64,
    #[serde(default = "default_call_labels")]
    pub call_labels: Vec<String>,
    #[serde(default = "default_put_labels")]
    pub put_labels: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_expiry_code() -> String {
    "NEXT_FRI".into()
}

fn default_quantity() -> u32 {
    1
}

fn default_ttl_sec() -> u64 {
    600
}

fn default_call_labels() -> Vec<String> {
    vec![EventLabel::MA_CONFIRMED.into(), EventLabel::MA_RUMOR.into()]
}

fn default_put_labels() -> Vec<String> {
    vec![EventLabel::GUIDE_CUT.into(), EventLabel::DOWNGRADE.into()]
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            expiry_code: default_expiry_code(),
            quantity: default_quantity(),
            ttl_sec: default_ttl_sec(),
            call_labels: default_call_labels(),
            put_labels: default_put_labels(),
        }
    }
}

/// Option right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionRight {
    Call,
    Put,
}

impl OptionRight {
    const fn code(self) -> char {
        match self {
            Self::Call => 'C',
            Self::Put => 'P',
        }
    }
}

/// Round a price to the listed strike grid.
///
/// Increments are 0.5 below $25, 1 below $100 and 5 otherwise. Ties go to
/// the even multiple.
#[must_use]
pub fn round_strike(price: Decimal) -> Decimal {
    let step = if price < dec!(25) {
        dec!(0.5)
    } else if price < dec!(100) {
        dec!(1)
    } else {
        dec!(5)
    };
    let multiple = (price / step).round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    (multiple * step).normalize()
}

/// Builds option candidates from last-traded prices.
pub struct OptionsOverlay<'a> {
    config: &'a OptionsConfig,
    prices: Option<&'a dyn PriceSource>,
    failures: Cell<usize>,
}

impl<'a> OptionsOverlay<'a> {
    #[must_use]
    pub fn new(config: &'a OptionsConfig, prices: Option<&'a dyn PriceSource>) -> Self {
        Self {
            config,
            prices,
            failures: Cell::new(0),
        }
    }

    /// Price lookups that returned an error so far.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures.get()
    }

    /// Which right, if any, `label` calls for on a `side` headline.
    #[must_use]
    pub fn right_for(&self, label: &EventLabel, side: Side) -> Option<OptionRight> {
        if !self.config.enabled {
            return None;
        }
        let listed = |labels: &[String]| labels.iter().any(|l| l == label.as_str());
        if listed(&self.config.call_labels) {
            Some(OptionRight::Call)
        } else if side == Side::Sell && listed(&self.config.put_labels) {
            Some(OptionRight::Put)
        } else {
            None
        }
    }

    /// Option candidate on `underlying`, if the label warrants one and a
    /// positive price is available.
    #[must_use]
    pub fn suggest(&self, underlying: &Symbol, label: &EventLabel, side: Side) -> Option<Candidate> {
        let right = self.right_for(label, side)?;
        let price = self.last_price(underlying)?;
        let (strike, confidence, why) = match right {
            OptionRight::Call => (round_strike(price), Confidence::ATM_CALL, "ATM call quick scalp"),
            OptionRight::Put => (
                round_strike(price * (Decimal::ONE - PUT_OTM_DISCOUNT)),
                Confidence::DOWNSIDE_PUT,
                "~0.30 delta put for down headline",
            ),
        };
        let line = format!(
            "{underlying} +{}{strike} {} x{} LMT=mid IOC TTL={}m (NEWS: {label})",
            right.code(),
            self.config.expiry_code,
            self.config.quantity,
            self.config.ttl_sec / 60,
        );
        Some(Candidate::new(line, AssetClass::Option, confidence, why))
    }

    fn last_price(&self, symbol: &Symbol) -> Option<Decimal> {
        let prices = self.prices?;
        match prices.last_price(symbol) {
            Ok(Some(price)) if price > Decimal::ZERO => Some(price),
            Ok(Some(price)) => {
                debug!(symbol = %symbol, price = %price, "Ignoring non-positive price");
                None
            }
            Ok(None) => None,
            Err(e) => {
                self.failures.set(self.failures.get() + 1);
                warn!(symbol = %symbol, error = %e, "Price lookup failed, no option");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::catalog::StaticPrices;
    use crate::error::CatalogError;

    struct DownPrices;

    impl PriceSource for DownPrices {
        fn last_price(&self, _: &Symbol) -> Result<Option<Decimal>, CatalogError> {
            Err(CatalogError::Unavailable { catalog: "prices" })
        }
    }

    #[test]
    fn strike_grid_by_price_band() {
        assert_eq!(round_strike(dec!(12.30)), dec!(12.5));
        assert_eq!(round_strike(dec!(87.40)), dec!(87));
        assert_eq!(round_strike(dec!(173.20)), dec!(175));
        assert_eq!(round_strike(dec!(1012.00)), dec!(1010));
    }

    #[test]
    fn strike_ties_round_to_even_multiple() {
        assert_eq!(round_strike(dec!(172.5)), dec!(170));
        assert_eq!(round_strike(dec!(177.5)), dec!(180));
        assert_eq!(round_strike(dec!(24.75)), dec!(25));
    }

    #[test]
    fn call_line_for_ma_rumor() {
        let config = OptionsConfig::default();
        let prices = StaticPrices::new().with_price("NVDA", dec!(173.20));
        let overlay = OptionsOverlay::new(&config, Some(&prices));
        let candidate = overlay
            .suggest(&Symbol::from("NVDA"), &EventLabel::from("ma_rumor"), Side::Buy)
            .unwrap();
        assert_eq!(
            candidate.line,
            "NVDA +C175 NEXT_FRI x1 LMT=mid IOC TTL=10m (NEWS: ma_rumor)"
        );
        assert_eq!(candidate.asset_class, AssetClass::Option);
        assert_eq!(candidate.confidence, Confidence::ATM_CALL);
    }

    #[test]
    fn put_line_for_guide_cut() {
        let config = OptionsConfig::default();
        let prices = StaticPrices::new().with_price("ACME", dec!(80));
        let overlay = OptionsOverlay::new(&config, Some(&prices));
        let candidate = overlay
            .suggest(&Symbol::from("ACME"), &EventLabel::from("guide_cut"), Side::Sell)
            .unwrap();
        assert_eq!(
            candidate.line,
            "ACME +P74 NEXT_FRI x1 LMT=mid IOC TTL=10m (NEWS: guide_cut)"
        );
        assert_eq!(candidate.confidence, Confidence::DOWNSIDE_PUT);
    }

    #[test]
    fn put_requires_sell_side() {
        let config = OptionsConfig::default();
        let overlay = OptionsOverlay::new(&config, None);
        assert_eq!(
            overlay.right_for(&EventLabel::from("guide_cut"), Side::Buy),
            None
        );
    }

    #[test]
    fn no_price_no_option() {
        let config = OptionsConfig::default();
        let empty = StaticPrices::new();
        let label = EventLabel::from("ma_confirmed");
        let symbol = Symbol::from("NVDA");

        assert!(OptionsOverlay::new(&config, None)
            .suggest(&symbol, &label, Side::Buy)
            .is_none());
        assert!(OptionsOverlay::new(&config, Some(&empty))
            .suggest(&symbol, &label, Side::Buy)
            .is_none());
        assert!(OptionsOverlay::new(&config, Some(&DownPrices))
            .suggest(&symbol, &label, Side::Buy)
            .is_none());
    }

    #[test]
    fn lookup_errors_are_counted_but_misses_are_not() {
        let config = OptionsConfig::default();
        let label = EventLabel::from("ma_rumor");

        let down = OptionsOverlay::new(&config, Some(&DownPrices));
        down.suggest(&Symbol::from("NVDA"), &label, Side::Buy);
        down.suggest(&Symbol::from("AMD"), &label, Side::Buy);
        assert_eq!(down.failures(), 2);

        let empty = StaticPrices::new();
        let missing = OptionsOverlay::new(&config, Some(&empty));
        missing.suggest(&Symbol::from("NVDA"), &label, Side::Buy);
        assert_eq!(missing.failures(), 0);
    }

    #[test]
    fn unrelated_label_no_option() {
        let config = OptionsConfig::default();
        let prices = StaticPrices::new().with_price("NVDA", dec!(100));
        let overlay = OptionsOverlay::new(&config, Some(&prices));
        assert!(overlay
            .suggest(&Symbol::from("NVDA"), &EventLabel::ambiguous(), Side::Buy)
            .is_none());
    }
}
