//! Market session classification types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Regular-session bounds for one trading day, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionWindow {
    pub open: DateTime<Utc>,
    pub close: DateTime<Utc>,
}

/// Where the primary venue is relative to its regular session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    Open { minutes_to_close: i64 },
    PreOpen { minutes_to_open: i64 },
    PostClose,
    /// Weekend or exchange holiday.
    Closed,
}

impl SessionState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Short reason string used in logs and the sentinel rationale.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::PreOpen { .. } => "pre-open",
            Self::PostClose => "post-close",
            Self::Closed => "holiday/closed",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { minutes_to_close } => write!(f, "open ({minutes_to_close}m to close)"),
            Self::PreOpen { minutes_to_open } => write!(f, "pre-open ({minutes_to_open}m to open)"),
            other => f.write_str(other.reason()),
        }
    }
}

/// What the orchestrator does with candidates outside regular hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPolicy {
    /// Emit candidates and record the session state alongside them.
    #[default]
    Annotate,
    /// Replace candidates with the no-action sentinel.
    Suppress,
}
