//! Profile saves and the "birth date required" gate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
  Error, Result,
  calendar::CalendarDate,
  person::{UserRecord, Viewer},
  settings::Settings,
};

/// The date-related part of a profile form submission. `None` leaves the
/// stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
  #[serde(default)]
  pub date_of_birth:               Option<CalendarDate>,
  #[serde(default)]
  pub celebrate_birthday_publicly: Option<bool>,
}

/// Reject a save that would leave a non-staff actor's profile without a
/// birth date while the site requires one. Staff are always exempt.
pub fn check_profile_save(
  actor: &Viewer,
  on_file: Option<&CalendarDate>,
  update: &ProfileUpdate,
  settings: &Settings,
) -> Result<()> {
  if settings.birthday_required_on_profile
    && !actor.has_staff_privilege()
    && on_file.is_none()
    && update.date_of_birth.is_none()
  {
    debug!(actor = ?actor.id, "profile save rejected: date of birth required");
    return Err(Error::BirthdateRequired);
  }
  Ok(())
}

/// Gate `update` and return the record as it should be persisted.
pub fn save_profile(
  actor: &Viewer,
  record: &UserRecord,
  update: ProfileUpdate,
  settings: &Settings,
) -> Result<UserRecord> {
  check_profile_save(actor, record.date_of_birth.as_ref(), &update, settings)?;

  let mut saved = record.clone();
  if let Some(date_of_birth) = update.date_of_birth {
    saved.date_of_birth = Some(date_of_birth);
  }
  if let Some(celebrate) = update.celebrate_birthday_publicly {
    saved.celebrate_birthday_publicly = celebrate;
  }
  Ok(saved)
}
