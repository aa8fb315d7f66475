//! Final emitted trade plans.

use std::fmt;

use serde::Serialize;

use super::candidate::{AssetClass, Candidate, Confidence};
use super::label::EventLabel;

/// One line of advisory output.
///
/// `asset_class` is `None` only for the no-action sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradePlan {
    pub line: String,
    pub asset_class: Option<AssetClass>,
    pub confidence: Confidence,
    pub rationale: String,
    pub label: EventLabel,
}

impl TradePlan {
    /// Wrap a ranked candidate.
    #[must_use]
    pub fn from_candidate(candidate: Candidate, label: &EventLabel) -> Self {
        Self {
            line: candidate.line,
            asset_class: Some(candidate.asset_class),
            confidence: candidate.confidence,
            rationale: candidate.rationale,
            label: label.clone(),
        }
    }

    /// The `NO ACTION (<label>)` sentinel.
    #[must_use]
    pub fn no_action(label: &EventLabel, rationale: impl Into<String>) -> Self {
        Self {
            line: format!("NO ACTION ({label})"),
            asset_class: None,
            confidence: Confidence::ZERO,
            rationale: rationale.into(),
            label: label.clone(),
        }
    }

    #[must_use]
    pub fn is_no_action(&self) -> bool {
        self.asset_class.is_none()
    }
}

impl fmt::Display for TradePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}
