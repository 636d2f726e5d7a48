//! Viewer-specific JSON payloads.

use cakeday_core::{
  calendar::CalendarDate,
  exposure::{ExposedDates, expose},
  person::{UserRecord, Viewer},
  resolver::{VisibilityDecision, resolve},
  settings::Settings,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;
use uuid::Uuid;

use crate::Result;

/// Merge the dates `viewer` may see into a user payload object.
///
/// Fields the viewer may not see are left out entirely, never set to
/// `null`. A `date_of_birth` key already present in `payload` is removed
/// when the viewer may not see it.
pub(crate) fn merge_user_dates(
  payload: &mut Map<String, Value>,
  record: &UserRecord,
  viewer: &Viewer,
  settings: &Settings,
) -> Result<()> {
  for key in ["cakedate", "birthdate", "date_of_birth"] {
    payload.remove(key);
  }

  let exposed = expose(record, viewer, settings);
  if let Value::Object(fields) = serde_json::to_value(&exposed)? {
    payload.extend(fields);
  }

  trace!(
    user = %record.id,
    fields = payload.len(),
    "serialized user dates"
  );
  Ok(())
}

pub(crate) fn user_dates(
  record: &UserRecord,
  viewer: &Viewer,
  settings: &Settings,
) -> Result<Value> {
  let exposed: ExposedDates = expose(record, viewer, settings);
  Ok(serde_json::to_value(exposed)?)
}

/// Per-post author attributes consumed by the poster decoration.
///
/// Raw dates and the opt-in flag are only sent to signed-in viewers, and the
/// dates follow the same field rules as the user payload. The icons
/// themselves are resolved here, so a viewer who may not see a date still
/// receives a public indicator for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAttributes {
  pub user_id:            Uuid,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user_cakedate:      Option<CalendarDate>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user_birthdate:     Option<CalendarDate>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user_celebrate:     Option<bool>,
  /// Indicators to draw next to the author's name, anniversary first.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub cakeday_indicators: Vec<VisibilityDecision>,
}

pub(crate) fn post_attributes(
  record: &UserRecord,
  viewer: &Viewer,
  settings: &Settings,
  today: &CalendarDate,
) -> PostAttributes {
  let exposed = expose(record, viewer, settings);
  let resolution = resolve(&record.subject(), viewer, settings, today);

  PostAttributes {
    user_id:            record.id,
    user_cakedate:      exposed.cakedate,
    user_birthdate:     exposed.birthdate,
    user_celebrate:     (settings.birthday_enabled
      && viewer.is_authenticated())
    .then_some(record.celebrate_birthday_publicly),
    cakeday_indicators: resolution.shown().cloned().collect(),
  }
}
