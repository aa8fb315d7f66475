//! Operating modes selected by the circuit breaker.

use std::fmt;

use serde::Serialize;

use super::candidate::AssetClass;

/// Which proxy tiers the orchestrator lets through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatingMode {
    /// Every asset class is allowed.
    #[default]
    Full,
    /// Only ETF-class candidates are allowed.
    EtfOnly,
}

impl OperatingMode {
    /// True when candidates of `class` may be emitted in this mode.
    #[must_use]
    pub const fn admits(self, class: AssetClass) -> bool {
        match self {
            Self::Full => true,
            Self::EtfOnly => matches!(class, AssetClass::Etf),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::EtfOnly => "ETF_ONLY",
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etf_only_admits_only_etfs() {
        assert!(OperatingMode::EtfOnly.admits(AssetClass::Etf));
        assert!(!OperatingMode::EtfOnly.admits(AssetClass::Equity));
        assert!(!OperatingMode::EtfOnly.admits(AssetClass::Option));
        assert!(!OperatingMode::EtfOnly.admits(AssetClass::Fut));
    }

    #[test]
    fn full_admits_everything() {
        for class in [
            AssetClass::Equity,
            AssetClass::Etf,
            AssetClass::Option,
            AssetClass::Fut,
            AssetClass::Fx,
            AssetClass::Crypto,
        ] {
            assert!(OperatingMode::Full.admits(class));
        }
    }
}
