//! Event labels produced by headline classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::candidate::Side;

/// Label naming the event archetype a headline matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLabel(String);

impl EventLabel {
    pub const COUNTRY_RATINGS_UP: &'static str = "country_ratings_up";
    pub const COUNTRY_RATINGS_DOWN: &'static str = "country_ratings_down";
    pub const MA_CONFIRMED: &'static str = "ma_confirmed";
    pub const MA_RUMOR: &'static str = "ma_rumor";
    pub const GUIDE_CUT: &'static str = "guide_cut";
    pub const DOWNGRADE: &'static str = "downgrade";
    pub const REGULATORY_PROBE: &'static str = "regulatory_probe";
    pub const HALT_NEGATIVE: &'static str = "halt_negative";
    pub const SUPPLY_SHOCK_NEG: &'static str = "supply_shock_neg";
    pub const SUPPLIER_POP_KOREA_SEMI: &'static str = "supplier_pop_korea_semi";
    pub const BIGTECH_PIVOT: &'static str = "bigtech_pivot";
    pub const POP_POSITIVE: &'static str = "pop_positive";
    pub const MACRO_AMBIGUOUS: &'static str = "macro_ambiguous";

    /// Labels whose lines are emitted on the SELL side.
    pub const DOWNSIDE: &'static [&'static str] = &[
        Self::GUIDE_CUT,
        Self::REGULATORY_PROBE,
        Self::DOWNGRADE,
        Self::HALT_NEGATIVE,
        Self::SUPPLY_SHOCK_NEG,
        Self::BIGTECH_PIVOT,
        Self::COUNTRY_RATINGS_DOWN,
    ];

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The catch-all label, also used when no rule matches.
    #[must_use]
    pub fn ambiguous() -> Self {
        Self(Self::MACRO_AMBIGUOUS.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.0 == Self::MACRO_AMBIGUOUS
    }

    /// Direction implied by the event.
    #[must_use]
    pub fn side(&self) -> Side {
        if Self::DOWNSIDE.contains(&self.0.as_str()) {
            Side::Sell
        } else {
            Side::Buy
        }
    }
}

impl fmt::Display for EventLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EventLabel {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for EventLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EventLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
