//! Field-level visibility of a user's raw dates.
//!
//! | Field | Visible when |
//! |-------|--------------|
//! | `cakedate` | anniversaries enabled, viewer signed in |
//! | `birthdate` | birthdays enabled, viewer signed in (month and day only) |
//! | `date_of_birth` | birthdays enabled, viewer is staff |
//!
//! The subject's own (non-staff) account never sees `date_of_birth` through
//! this path, and anonymous visitors see none of the fields.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

use crate::{
  calendar::CalendarDate,
  person::{UserRecord, Viewer},
  settings::Settings,
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
  IntoStaticStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Field {
  Cakedate,
  Birthdate,
  DateOfBirth,
}

impl Field {
  /// The key this field is serialized under.
  pub fn name(self) -> &'static str { self.into() }

  pub fn is_visible(self, viewer: &Viewer, settings: &Settings) -> bool {
    match self {
      Self::Cakedate => settings.anniversary_enabled && viewer.is_authenticated(),
      Self::Birthdate => settings.birthday_enabled && viewer.is_authenticated(),
      Self::DateOfBirth => {
        settings.birthday_enabled && viewer.has_staff_privilege()
      }
    }
  }
}

/// The subset of a user's dates a particular viewer may receive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposedDates {
  /// Account creation date, with year.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cakedate:      Option<CalendarDate>,
  /// Birth month and day, year stripped.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub birthdate:     Option<CalendarDate>,
  /// Birth date exactly as stored.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date_of_birth: Option<CalendarDate>,
}

impl ExposedDates {
  pub fn is_empty(&self) -> bool {
    self.cakedate.is_none()
      && self.birthdate.is_none()
      && self.date_of_birth.is_none()
  }
}

/// Redact `record`'s dates for `viewer`.
pub fn expose(
  record: &UserRecord,
  viewer: &Viewer,
  settings: &Settings,
) -> ExposedDates {
  let visible = |field: Field| field.is_visible(viewer, settings);

  ExposedDates {
    cakedate:      visible(Field::Cakedate)
      .then(|| CalendarDate::from(record.created_at)),
    birthdate:     record
      .date_of_birth
      .filter(|_| visible(Field::Birthdate))
      .map(CalendarDate::without_year),
    date_of_birth: record
      .date_of_birth
      .filter(|_| visible(Field::DateOfBirth)),
  }
}
