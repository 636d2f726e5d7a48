//! Calendar dates that may omit the year, and the day-of-year matcher.
//!
//! Birthdays are frequently stored without a year, so a [`CalendarDate`]
//! only guarantees a month and a day. Matching against "today" compares the
//! day of the year and nothing else.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── CalendarDate ────────────────────────────────────────────────────────────

/// A month/day pair with an optional year.
///
/// Always a valid calendar date: Feb 29 is accepted without a year, and with
/// a year only when that year is a leap year.
///
/// The textual form is `YYYY-MM-DD` when the year is known and `--MM-DD`
/// (the vCard year-omitted form) otherwise.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
  Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
  // Field order gives `Ord` a (year, month, day) ordering with year-less
  // dates first.
  year:  Option<i32>,
  month: u8,
  day:   u8,
}

impl CalendarDate {
  /// A date without a year.
  pub fn new(month: u32, day: u32) -> Result<Self> {
    if !(1..=12).contains(&month) {
      return Err(Error::InvalidMonth(month));
    }
    if day == 0 || day > max_day(month) {
      return Err(Error::InvalidDay { month, day });
    }
    Ok(Self {
      year:  None,
      month: month as u8,
      day:   day as u8,
    })
  }

  /// A full date. Rejects Feb 29 outside leap years.
  pub fn with_year(year: i32, month: u32, day: u32) -> Result<Self> {
    let date = Self::new(month, day)?;
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
      return Err(Error::InvalidDay { month, day });
    }
    Ok(Self {
      year: Some(year),
      ..date
    })
  }

  pub fn month(&self) -> u32 { u32::from(self.month) }

  pub fn day(&self) -> u32 { u32::from(self.day) }

  pub fn year(&self) -> Option<i32> { self.year }

  /// The same month and day with the year dropped.
  pub fn without_year(self) -> Self {
    Self {
      year: None,
      ..self
    }
  }

  pub fn is_leap_day(&self) -> bool { self.month == 2 && self.day == 29 }

  /// The equivalent [`NaiveDate`], if the year is known.
  pub fn to_naive_date(&self) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(self.year?, self.month(), self.day())
  }
}

/// Largest day accepted for `month` when the year is unknown.
fn max_day(month: u32) -> u32 {
  match month {
    2 => 29,
    4 | 6 | 9 | 11 => 30,
    _ => 31,
  }
}

pub fn is_leap_year(year: i32) -> bool {
  NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

// ─── Conversions ─────────────────────────────────────────────────────────────

impl From<NaiveDate> for CalendarDate {
  fn from(date: NaiveDate) -> Self {
    Self {
      year:  Some(date.year()),
      month: date.month() as u8,
      day:   date.day() as u8,
    }
  }
}

/// Reduces a timestamp (e.g. account creation) to its UTC calendar date.
impl From<DateTime<Utc>> for CalendarDate {
  fn from(at: DateTime<Utc>) -> Self { at.date_naive().into() }
}

impl fmt::Display for CalendarDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.year {
      Some(year) => write!(f, "{year:04}-{:02}-{:02}", self.month, self.day),
      None => write!(f, "--{:02}-{:02}", self.month, self.day),
    }
  }
}

impl FromStr for CalendarDate {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let s = s.trim();
    let malformed = || Error::MalformedDate(s.to_string());

    if let Some(rest) = s.strip_prefix("--") {
      let (month, day) = rest.split_once('-').ok_or_else(malformed)?;
      let month = month.parse().map_err(|_| malformed())?;
      let day = day.parse().map_err(|_| malformed())?;
      return Self::new(month, day);
    }

    let mut parts = s.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) =
      (parts.next(), parts.next(), parts.next())
    else {
      return Err(malformed());
    };
    let year = year.parse().map_err(|_| malformed())?;
    let month = month.parse().map_err(|_| malformed())?;
    let day = day.parse().map_err(|_| malformed())?;
    Self::with_year(year, month, day)
  }
}

impl TryFrom<String> for CalendarDate {
  type Error = Error;

  fn try_from(s: String) -> Result<Self> { s.parse() }
}

impl From<CalendarDate> for String {
  fn from(date: CalendarDate) -> Self { date.to_string() }
}

// ─── Matching ────────────────────────────────────────────────────────────────

/// Whether `target` falls on `today`'s day of the year.
///
/// Only month and day are compared; the target's year is ignored. A Feb 29
/// target fires on Feb 28 when `today` is in a known non-leap year, so it
/// fires exactly once per year. If `today` has no year only the exact
/// month/day matches.
pub fn matches(target: &CalendarDate, today: &CalendarDate) -> bool {
  if (target.month, target.day) == (today.month, today.day) {
    return true;
  }

  target.is_leap_day()
    && today.month == 2
    && today.day == 28
    && today.year.is_some_and(|year| !is_leap_year(year))
}
