//! Decoding of dates and user rows as they come out of storage.

use cakeday_core::{calendar::CalendarDate, person::UserRecord};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{Error, Result};

/// Year written by profile forms that only collect month and day. Dates
/// carrying it are treated as year-less.
pub const PLACEHOLDER_YEAR: i32 = 1904;

/// Parse a stored birth date.
///
/// Accepts `YYYY-MM-DD`, `YYYYMMDD`, and the year-omitted `--MM-DD` and
/// `--MMDD` forms.
pub(crate) fn parse_stored_date(value: &str) -> Result<CalendarDate> {
  let trimmed = value.trim();
  let invalid = || Error::InvalidDate {
    value: value.to_string(),
  };

  if let Some(rest) = trimmed.strip_prefix("--") {
    if !rest.is_ascii() {
      return Err(invalid());
    }
    let (month, day) = match rest.len() {
      4 => rest.split_at(2),
      5 if rest.as_bytes()[2] == b'-' => (&rest[..2], &rest[3..]),
      _ => return Err(invalid()),
    };
    let two_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(month) || !two_digits(day) {
      return Err(invalid());
    }
    let month = month.parse().map_err(|_| invalid())?;
    let day = day.parse().map_err(|_| invalid())?;
    return CalendarDate::new(month, day).map_err(|_| invalid());
  }

  let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
    .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y%m%d"))
    .map_err(|_| invalid())?;

  if date.year() == PLACEHOLDER_YEAR {
    return Ok(CalendarDate::from(date).without_year());
  }
  Ok(date.into())
}

/// A user row with the birth date still in its stored text form.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredUser {
  pub id:                          Uuid,
  pub created_at:                  DateTime<Utc>,
  #[serde(default)]
  pub date_of_birth:               Option<String>,
  #[serde(default)]
  pub celebrate_birthday_publicly: bool,
  #[serde(default)]
  pub is_staff:                    bool,
}

impl StoredUser {
  /// Decode into the engine's record. A blank birth date means none is set.
  pub fn into_record(self) -> Result<UserRecord> {
    let date_of_birth = match self.date_of_birth.as_deref().map(str::trim) {
      None | Some("") => None,
      Some(raw) => Some(parse_stored_date(raw)?),
    };

    Ok(UserRecord {
      id: self.id,
      created_at: self.created_at,
      date_of_birth,
      celebrate_birthday_publicly: self.celebrate_birthday_publicly,
      is_staff: self.is_staff,
    })
  }
}
