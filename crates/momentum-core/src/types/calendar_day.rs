//! Date-only calendar day, stored as an integer day count since 1970-01-01 (UTC).
//!
//! All age and window arithmetic in the engine is exact integer math on this
//! type; time-of-day never enters the picture.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// `NaiveDate::num_days_from_ce()` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// A calendar day with no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDay(i32);

impl CalendarDay {
    /// 1970-01-01.
    pub const EPOCH: CalendarDay = CalendarDay(0);

    pub const fn from_days_since_epoch(days: i32) -> Self {
        Self(days)
    }

    pub const fn days_since_epoch(self) -> i32 {
        self.0
    }

    /// Build from year/month/day, rejecting impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or_else(|| ValidationError::InvalidDate {
                value: format!("{year:04}-{month:02}-{day:02}"),
                reason: "no such calendar day".to_string(),
            })
    }

    /// Today's date in UTC.
    pub fn today() -> Self {
        Self::from(Utc::now().date_naive())
    }

    /// Saturates at the ends of the representable range.
    pub const fn add_days(self, days: i32) -> Self {
        Self(self.0.saturating_add(days))
    }

    /// Whole days from `earlier` to `self`. Negative when `earlier` is in the future.
    pub fn days_since(self, earlier: CalendarDay) -> i64 {
        i64::from(self.0) - i64::from(earlier.0)
    }

    /// `None` only for day counts outside chrono's representable range.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        self.0
            .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
    }
}

impl From<DateTime<Utc>> for CalendarDay {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::from(ts.date_naive())
    }
}

impl FromStr for CalendarDay {
    type Err = ValidationError;

    /// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp normalized to its UTC day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self::from(date));
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|ts| Self::from(ts.with_timezone(&Utc)))
            .map_err(|e| ValidationError::InvalidDate {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl TryFrom<String> for CalendarDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDay> for String {
    fn from(day: CalendarDay) -> Self {
        day.to_string()
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_naive_date() {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => write!(f, "epoch{:+}d", self.0),
        }
    }
}
