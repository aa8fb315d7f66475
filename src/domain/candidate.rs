//! Proxy candidates, confidence scores, and rendered candidate lines.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::Symbol;

/// Asset class of a proposed instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetClass {
    Equity,
    Etf,
    Option,
    Fut,
    Fx,
    Crypto,
}

impl AssetClass {
    /// Upper-case label used in logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equity => "EQUITY",
            Self::Etf => "ETF",
            Self::Option => "OPTION",
            Self::Fut => "FUT",
            Self::Fx => "FX",
            Self::Crypto => "CRYPTO",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a suggested line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" | "B" => Ok(Self::Buy),
            "SELL" | "S" => Ok(Self::Sell),
            other => Err(DomainError::UnknownSide(other.to_string())),
        }
    }
}

/// A confidence score in the closed interval `[0, 1]`.
///
/// The only ways to build one are the validating [`Confidence::try_new`],
/// the clamping [`Confidence::saturating`], and the fixed tier constants.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Sentinel score for the no-action plan.
    pub const ZERO: Self = Self(0.0);
    /// Direct primary-US listing.
    pub const DIRECT_LISTING: Self = Self(0.95);
    /// US depositary receipt for a foreign line.
    pub const ADR: Self = Self(0.85);
    /// Home-market line of a foreign listing.
    pub const LOCAL_LINE: Self = Self(0.75);
    /// Sector sympathy ETF.
    pub const SECTOR_ETF: Self = Self(0.65);
    /// Country ETF.
    pub const COUNTRY_ETF: Self = Self(0.60);
    /// Oil and gold front-month futures.
    pub const COMMODITY_FUTURE: Self = Self(0.58);
    /// Currency futures and bitcoin proxies.
    pub const CURRENCY_FUTURE: Self = Self(0.56);
    /// Ether and dollar-index proxies.
    pub const MINOR_MACRO: Self = Self(0.55);
    /// Downside put idea.
    pub const DOWNSIDE_PUT: Self = Self(0.48);
    /// Upside ATM call idea.
    pub const ATM_CALL: Self = Self(0.45);

    /// Validate a raw score.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ConfidenceOutOfRange`] for NaN or values
    /// outside `[0, 1]`.
    pub fn try_new(value: f64) -> Result<Self, DomainError> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(DomainError::ConfidenceOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Clamp a raw score into `[0, 1]`; NaN becomes zero.
    #[must_use]
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Total order used by the ranker; scores are never NaN.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::try_new(value).map_err(serde::de::Error::custom)
    }
}

/// A tradeable instrument proposed as exposure to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyCandidate {
    pub instrument: Symbol,
    pub asset_class: AssetClass,
    pub rationale: String,
    pub confidence: Confidence,
}

impl ProxyCandidate {
    pub fn new(
        instrument: impl Into<Symbol>,
        asset_class: AssetClass,
        rationale: impl Into<String>,
        confidence: Confidence,
    ) -> Self {
        Self {
            instrument: instrument.into(),
            asset_class,
            rationale: rationale.into(),
            confidence,
        }
    }
}

/// A candidate after rendering to its final order line.
///
/// The line is the deduplication identity used by the ranker.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub line: String,
    pub asset_class: AssetClass,
    pub confidence: Confidence,
    pub rationale: String,
}

impl Candidate {
    pub fn new(
        line: impl Into<String>,
        asset_class: AssetClass,
        confidence: Confidence,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            line: line.into(),
            asset_class,
            confidence,
            rationale: rationale.into(),
        }
    }
}
