//! Fixed-width date keys used as the membership key for marked days.
//!
//! A key is `MM` + `W` + `DD` + `-` + `YY`: two-digit month, weekday index
//! (0 = Sunday), two-digit day of month and two-digit year. Years are read
//! back as `20YY`, so only 2000 through 2099 round-trip.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

const KEY_LEN: usize = 8;
const SEPARATOR_AT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateKeyError {
    #[error("date key {key:?} does not match the MMWDD-YY layout")]
    Layout { key: String },
    #[error("date key names no calendar date (month {month}, day {day}, year {year})")]
    InvalidDate { month: u32, day: u32, year: i32 },
    #[error("date key carries weekday {stored} but {date} falls on weekday {actual}")]
    WeekdayMismatch {
        stored: u32,
        actual: u32,
        date: NaiveDate,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Fields recovered from a key. Nothing here is range-checked; see [`DateParts::to_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub month: u32,
    pub day_of_week: u32,
    pub day: u32,
    pub year2: u32,
}

impl DateParts {
    pub fn year(&self) -> i32 {
        2000 + self.year2 as i32
    }

    /// Resolves the parts to a calendar date, rejecting impossible dates and
    /// a weekday field that disagrees with the date.
    pub fn to_date(&self) -> Result<NaiveDate, DateKeyError> {
        let year = self.year();
        let date = NaiveDate::from_ymd_opt(year, self.month, self.day).ok_or(
            DateKeyError::InvalidDate {
                month: self.month,
                day: self.day,
                year,
            },
        )?;
        let actual = date.weekday().num_days_from_sunday();
        if actual != self.day_of_week {
            return Err(DateKeyError::WeekdayMismatch {
                stored: self.day_of_week,
                actual,
                date,
            });
        }
        Ok(date)
    }
}

pub fn encode(date: NaiveDate) -> DateKey {
    DateKey(format!(
        "{:02}{}{:02}-{:02}",
        date.month(),
        date.weekday().num_days_from_sunday(),
        date.day(),
        date.year().rem_euclid(100)
    ))
}

pub fn decode(key: &str) -> Result<DateParts, DateKeyError> {
    let bytes = key.as_bytes();
    let layout_ok = bytes.len() == KEY_LEN
        && bytes[SEPARATOR_AT] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(index, byte)| index == SEPARATOR_AT || byte.is_ascii_digit());
    if !layout_ok {
        return Err(DateKeyError::Layout {
            key: key.to_string(),
        });
    }

    let field = |range: std::ops::Range<usize>| {
        bytes[range]
            .iter()
            .fold(0u32, |acc, byte| acc * 10 + u32::from(byte - b'0'))
    };

    Ok(DateParts {
        month: field(0..2),
        day_of_week: field(2..3),
        day: field(3..5),
        year2: field(6..8),
    })
}

/// Decodes a key all the way to a validated calendar date.
pub fn parse_date(key: &str) -> Result<NaiveDate, DateKeyError> {
    decode(key)?.to_date()
}
