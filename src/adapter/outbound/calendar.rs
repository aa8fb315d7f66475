//! US equity trading calendar (NYSE / Nasdaq regular hours).
//!
//! Regular session is 09:30-16:00 America/New_York. The UTC offset follows
//! the US daylight-saving rule (second Sunday of March to first Sunday of
//! November); both session bounds fall well clear of the 02:00 switch, so
//! the offset is decided per date. Holidays and early closes are supplied
//! by configuration.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc, Weekday};

use crate::domain::SessionWindow;
use crate::port::TradingCalendar;

const OPEN_MINUTE: i64 = 9 * 60 + 30;
const CLOSE_MINUTE: i64 = 16 * 60;
const STANDARD_OFFSET_HOURS: i64 = -5;
const DAYLIGHT_OFFSET_HOURS: i64 = -4;

/// Calendar for the primary US equity venues.
#[derive(Debug, Clone, Default)]
pub struct UsEquityCalendar {
    holidays: BTreeSet<NaiveDate>,
    early_closes: BTreeMap<NaiveDate, NaiveTime>,
}

impl UsEquityCalendar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_holidays(mut self, holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.holidays.extend(holidays);
        self
    }

    /// Close the session early on `date` at `close` (exchange-local time).
    #[must_use]
    pub fn with_early_close(mut self, date: NaiveDate, close: NaiveTime) -> Self {
        self.early_closes.insert(date, close);
        self
    }

    /// Whether US daylight-saving time is in force on `date`.
    #[must_use]
    pub fn is_daylight_saving(date: NaiveDate) -> bool {
        let year = date.year();
        match (
            NaiveDate::from_weekday_of_month_opt(year, 3, Weekday::Sun, 2),
            NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Sun, 1),
        ) {
            (Some(start), Some(end)) => date >= start && date < end,
            _ => false,
        }
    }

    fn utc_offset_hours(date: NaiveDate) -> i64 {
        if Self::is_daylight_saving(date) {
            DAYLIGHT_OFFSET_HOURS
        } else {
            STANDARD_OFFSET_HOURS
        }
    }

    fn local_minute_to_utc(date: NaiveDate, minute: i64) -> Option<DateTime<Utc>> {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        let local = midnight + Duration::minutes(minute);
        let utc = local - Duration::hours(Self::utc_offset_hours(date));
        Some(Utc.from_utc_datetime(&utc))
    }
}

impl TradingCalendar for UsEquityCalendar {
    fn trading_date(&self, now: DateTime<Utc>) -> NaiveDate {
        // The offset on the UTC date is correct except within a few hours of
        // the DST switch, which always falls on a Sunday.
        let offset = Self::utc_offset_hours(now.date_naive());
        (now + Duration::hours(offset)).date_naive()
    }

    fn session(&self, date: NaiveDate) -> Option<SessionWindow> {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) || self.holidays.contains(&date) {
            return None;
        }
        let close_minute = self
            .early_closes
            .get(&date)
            .map_or(CLOSE_MINUTE, |t| i64::from(t.num_seconds_from_midnight() / 60));
        Some(SessionWindow {
            open: Self::local_minute_to_utc(date, OPEN_MINUTE)?,
            close: Self::local_minute_to_utc(date, close_minute)?,
        })
    }
}
