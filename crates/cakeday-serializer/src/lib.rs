//! JSON serialization layer for cakeday.
//!
//! Decodes stored user rows and renders viewer-specific payloads. Every
//! visibility decision is delegated to [`cakeday_core`]; nothing here decides
//! on its own who may see what. Pure synchronous; no HTTP or database
//! dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use cakeday_core::{person::Viewer, settings::Settings};
//! use cakeday_serializer::{StoredUser, user_dates_json};
//!
//! let row: StoredUser = serde_json::from_str(r#"{
//!   "id": "0b6f7b1c-8c55-4e8e-a3a6-33d1f52c1d10",
//!   "created_at": "2014-08-01T09:00:00Z",
//!   "date_of_birth": "1990-04-05"
//! }"#).unwrap();
//! let record = row.into_record().unwrap();
//! let json = user_dates_json(&record, &Viewer::anonymous(), &Settings::all_enabled()).unwrap();
//! assert!(json.as_object().unwrap().is_empty());
//! ```

pub mod error;
mod parse;
mod serialize;

use cakeday_core::{
  calendar::CalendarDate,
  person::{UserRecord, Viewer},
  settings::Settings,
};
pub use error::{Error, Result};
pub use parse::{PLACEHOLDER_YEAR, StoredUser};
pub use serialize::PostAttributes;
use serde_json::{Map, Value};

// ─── Public API
// ───────────────────────────────────────────────────────────────

/// Parse a birth date in any of the stored text forms (`YYYY-MM-DD`,
/// `YYYYMMDD`, `--MM-DD`, `--MMDD`). Dates in [`PLACEHOLDER_YEAR`] come back
/// without a year.
pub fn parse_stored_date(value: &str) -> Result<CalendarDate> {
  parse::parse_stored_date(value)
}

/// The `cakedate` / `birthdate` / `date_of_birth` object for `viewer`.
pub fn user_dates_json(
  record: &UserRecord,
  viewer: &Viewer,
  settings: &Settings,
) -> Result<Value> {
  serialize::user_dates(record, viewer, settings)
}

/// Add the date fields `viewer` may see to an existing user payload, and
/// strip any they may not.
pub fn merge_user_dates(
  payload: &mut Map<String, Value>,
  record: &UserRecord,
  viewer: &Viewer,
  settings: &Settings,
) -> Result<()> {
  serialize::merge_user_dates(payload, record, viewer, settings)
}

/// The author attributes attached to each rendered post.
pub fn post_attributes(
  record: &UserRecord,
  viewer: &Viewer,
  settings: &Settings,
  today: &CalendarDate,
) -> PostAttributes {
  serialize::post_attributes(record, viewer, settings, today)
}

#[cfg(test)]
mod tests {
  use cakeday_core::resolver::Tier;
  use chrono::{TimeZone, Utc};
  use serde_json::json;
  use uuid::Uuid;

  use super::*;

  fn user() -> UserRecord {
    StoredUser {
      id:                          Uuid::new_v4(),
      created_at:                  Utc
        .with_ymd_and_hms(2012, 6, 30, 18, 45, 0)
        .unwrap(),
      date_of_birth:               Some("2017-04-05".into()),
      celebrate_birthday_publicly: false,
      is_staff:                    false,
    }
    .into_record()
    .unwrap()
  }

  fn today(month: u32, day: u32) -> CalendarDate {
    CalendarDate::with_year(2026, month, day).unwrap()
  }

  // ── User payload ────────────────────────────────────────────────────────

  #[test]
  fn logged_in_user_sees_birthdate_and_cakedate() {
    let user = user();
    let json =
      user_dates_json(&user, &user.as_viewer(), &Settings::all_enabled())
        .unwrap();
    assert_eq!(json, json!({ "cakedate": "2012-06-30", "birthdate": "--04-05" }));
  }

  #[test]
  fn cakedate_dropped_when_anniversaries_disabled() {
    let user = user();
    let settings = Settings {
      anniversary_enabled: false,
      ..Settings::all_enabled()
    };
    let json = user_dates_json(&user, &user.as_viewer(), &settings).unwrap();
    assert!(json.get("cakedate").is_none());
    assert!(json.get("birthdate").is_some());
  }

  #[test]
  fn birthdate_dropped_when_birthdays_disabled() {
    let user = user();
    let settings = Settings {
      birthday_enabled: false,
      ..Settings::all_enabled()
    };
    let json = user_dates_json(&user, &user.as_viewer(), &settings).unwrap();
    assert!(json.get("birthdate").is_none());
  }

  #[test]
  fn admin_sees_full_date_of_birth() {
    let user = user();
    let admin = Viewer::staff(Uuid::new_v4());
    let json = user_dates_json(&user, &admin, &Settings::all_enabled()).unwrap();
    assert_eq!(json["date_of_birth"], "2017-04-05");

    let settings = Settings {
      birthday_enabled: false,
      ..Settings::all_enabled()
    };
    let json = user_dates_json(&user, &admin, &settings).unwrap();
    assert!(json.get("date_of_birth").is_none());
  }

  #[test]
  fn anonymous_sees_no_dates() {
    let user = user();
    let json =
      user_dates_json(&user, &Viewer::anonymous(), &Settings::all_enabled())
        .unwrap();
    assert_eq!(json, json!({}));
  }

  #[test]
  fn merge_strips_fields_the_viewer_may_not_see() {
    let user = user();
    let mut payload = Map::new();
    payload.insert("username".into(), json!("alice"));
    payload.insert("date_of_birth".into(), json!("2017-04-05"));

    merge_user_dates(
      &mut payload,
      &user,
      &user.as_viewer(),
      &Settings::all_enabled(),
    )
    .unwrap();

    assert_eq!(payload["username"], "alice");
    assert_eq!(payload["birthdate"], "--04-05");
    assert!(!payload.contains_key("date_of_birth"));
  }

  // ── Post attributes ─────────────────────────────────────────────────────

  #[test]
  fn post_attributes_follow_feature_switches() {
    let user = user();
    let viewer = Viewer::user(Uuid::new_v4());

    let attrs =
      post_attributes(&user, &viewer, &Settings::default(), &today(1, 1));
    assert_eq!(attrs.user_cakedate, None);
    assert_eq!(attrs.user_birthdate, None);
    assert_eq!(attrs.user_celebrate, None);
    assert!(attrs.cakeday_indicators.is_empty());

    let attrs =
      post_attributes(&user, &viewer, &Settings::all_enabled(), &today(1, 1));
    assert_eq!(attrs.user_celebrate, Some(false));
    assert!(attrs.user_birthdate.is_some());
  }

  #[test]
  fn anonymous_gets_public_indicator_without_the_date() {
    let mut user = user();
    user.celebrate_birthday_publicly = true;

    let attrs = post_attributes(
      &user,
      &Viewer::anonymous(),
      &Settings::all_enabled(),
      &today(4, 5),
    );
    assert_eq!(attrs.user_birthdate, None);
    assert_eq!(attrs.user_celebrate, None);
    assert_eq!(attrs.cakeday_indicators.len(), 1);
    assert_eq!(attrs.cakeday_indicators[0].tier, Tier::BirthdayPublic);
  }

  #[test]
  fn secret_birthday_indicator_only_for_owner() {
    let user = user();
    let settings = Settings::all_enabled();

    let other = post_attributes(
      &user,
      &Viewer::user(Uuid::new_v4()),
      &settings,
      &today(4, 5),
    );
    assert!(other.cakeday_indicators.is_empty());

    let own = post_attributes(&user, &user.as_viewer(), &settings, &today(4, 5));
    assert_eq!(own.cakeday_indicators[0].tier, Tier::BirthdaySecret);
  }

  #[test]
  fn post_attributes_json_omits_empty_fields() {
    let user = user();
    let attrs = post_attributes(
      &user,
      &Viewer::anonymous(),
      &Settings::all_enabled(),
      &today(6, 30),
    );
    let json = serde_json::to_value(&attrs).unwrap();
    assert!(json.get("user_cakedate").is_none());
    assert!(json.get("user_celebrate").is_none());
    assert_eq!(json["cakeday_indicators"][0]["tier"], "anniversary");
  }
}
