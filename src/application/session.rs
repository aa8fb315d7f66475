//! Market session gate.

use chrono::{DateTime, Duration, Utc};

use crate::domain::SessionState;
use crate::port::TradingCalendar;

/// Classifies an instant against the primary venue's calendar.
pub struct SessionGate<'a> {
    calendar: &'a dyn TradingCalendar,
}

impl<'a> SessionGate<'a> {
    #[must_use]
    pub fn new(calendar: &'a dyn TradingCalendar) -> Self {
        Self { calendar }
    }

    /// Session state at `now`.
    ///
    /// Minutes are whole minutes, rounded down. Both bounds count as open.
    #[must_use]
    pub fn classify(&self, now: DateTime<Utc>) -> SessionState {
        let date = self.calendar.trading_date(now);
        let Some(window) = self.calendar.session(date) else {
            return SessionState::Closed;
        };
        if now < window.open {
            return SessionState::PreOpen {
                minutes_to_open: whole_minutes(window.open - now),
            };
        }
        if now > window.close {
            return SessionState::PostClose;
        }
        SessionState::Open {
            minutes_to_close: whole_minutes(window.close - now),
        }
    }
}

fn whole_minutes(span: Duration) -> i64 {
    span.num_minutes().max(0)
}
