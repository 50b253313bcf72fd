//! Date capabilities: the `Clock` trait and per-day derived context.
//!
//! Everything date-dependent takes a clock or an explicit date, so the
//! generator has no hidden wall-clock reads and tests can pin a day.

use chrono::{Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

use crate::catalog::{BiweeklyPhase, FocusArea};

/// Source of "today."
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Resolves today in a fixed IANA timezone, so the day rolls over at the
/// user's midnight rather than UTC's.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Pinned date for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Everything the generator derives from the calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayContext {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub iso_week: u32,
    pub focus: FocusArea,
    pub phase: BiweeklyPhase,
    pub quarter: u32,
}

impl DayContext {
    pub fn for_date(date: NaiveDate) -> Self {
        let iso_week = date.iso_week().week();
        Self {
            date,
            weekday: date.weekday(),
            iso_week,
            focus: FocusArea::for_week(iso_week),
            phase: BiweeklyPhase::for_week(iso_week),
            quarter: (date.month() - 1) / 3 + 1,
        }
    }

    /// Weekday display name.
    pub fn day_name(&self) -> &'static str {
        match self.weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Long date label used in headers, e.g. "April 06, 2026".
    pub fn date_label(&self) -> String {
        self.date.format("%B %d, %Y").to_string()
    }
}
