//! Trading-calendar oracle port.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::SessionWindow;

/// Port answering "when does the primary venue trade?".
pub trait TradingCalendar: Send + Sync {
    /// Exchange-local calendar date containing `now`.
    fn trading_date(&self, now: DateTime<Utc>) -> NaiveDate;

    /// Regular session for `date` (exchange-local date), `None` on
    /// weekends and holidays.
    fn session(&self, date: NaiveDate) -> Option<SessionWindow>;
}
