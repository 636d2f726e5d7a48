//! Error types for `cakeday-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("invalid month: {0}")]
  InvalidMonth(u32),

  #[error("invalid day {day} for month {month}")]
  InvalidDay { month: u32, day: u32 },

  #[error("malformed date: {0:?}")]
  MalformedDate(String),

  /// A profile save omitted the date of birth while the site requires one.
  #[error("a date of birth is required")]
  BirthdateRequired,
}

impl Error {
  /// Locale key for the message shown to the user, if the error is
  /// user-facing.
  pub fn i18n_key(&self) -> Option<&'static str> {
    match self {
      Self::BirthdateRequired => Some("user.date_of_birth.is_required_error"),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
