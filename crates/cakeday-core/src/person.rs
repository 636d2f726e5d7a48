//! The people a decision is about: the subject whose dates are celebrated,
//! the viewer looking at them, and the stored account record both are
//! derived from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::CalendarDate;

// ─── Subject ─────────────────────────────────────────────────────────────────

/// A post author or profile owner, reduced to what the engine needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
  pub id:                          Uuid,
  pub birth_date:                  Option<CalendarDate>,
  /// Account creation date. `None` only for subjects built from partial
  /// data, in which case the anniversary track cannot fire.
  pub anniversary_date:            Option<CalendarDate>,
  #[serde(default)]
  pub celebrate_birthday_publicly: bool,
  #[serde(default)]
  pub is_staff:                    bool,
}

impl Subject {
  /// A subject with no birth date and no opt-in, whose anniversary is the
  /// date of `created_at`.
  pub fn new(id: Uuid, created_at: DateTime<Utc>) -> Self {
    Self {
      id,
      birth_date: None,
      anniversary_date: Some(created_at.into()),
      celebrate_birthday_publicly: false,
      is_staff: false,
    }
  }

  pub fn with_birth_date(mut self, birth_date: CalendarDate) -> Self {
    self.birth_date = Some(birth_date);
    self
  }

  pub fn celebrating_publicly(mut self) -> Self {
    self.celebrate_birthday_publicly = true;
    self
  }
}

// ─── Viewer ──────────────────────────────────────────────────────────────────

/// The current actor. Carries identity and the staff flag, nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
  /// `None` for anonymous visitors.
  pub id:       Option<Uuid>,
  #[serde(default)]
  pub is_staff: bool,
}

impl Viewer {
  pub fn anonymous() -> Self { Self::default() }

  pub fn user(id: Uuid) -> Self {
    Self {
      id:       Some(id),
      is_staff: false,
    }
  }

  pub fn staff(id: Uuid) -> Self {
    Self {
      id:       Some(id),
      is_staff: true,
    }
  }

  pub fn is_authenticated(&self) -> bool { self.id.is_some() }

  /// Whether this viewer is the given user. Anonymous viewers are nobody.
  pub fn is(&self, user_id: Uuid) -> bool { self.id == Some(user_id) }

  /// Staff privilege. Requires a signed-in viewer, so a staff flag on an
  /// anonymous viewer grants nothing.
  pub fn has_staff_privilege(&self) -> bool {
    self.is_authenticated() && self.is_staff
  }

  pub fn is_owner_or_staff(&self, user_id: Uuid) -> bool {
    self.is(user_id) || self.has_staff_privilege()
  }
}

// ─── Stored record ───────────────────────────────────────────────────────────

/// The date-related columns of a stored user, as handed over by the
/// persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
  pub id:                          Uuid,
  pub created_at:                  DateTime<Utc>,
  pub date_of_birth:               Option<CalendarDate>,
  #[serde(default)]
  pub celebrate_birthday_publicly: bool,
  #[serde(default)]
  pub is_staff:                    bool,
}

impl UserRecord {
  pub fn subject(&self) -> Subject {
    Subject {
      id:                          self.id,
      birth_date:                  self.date_of_birth,
      anniversary_date:            Some(self.created_at.into()),
      celebrate_birthday_publicly: self.celebrate_birthday_publicly,
      is_staff:                    self.is_staff,
    }
  }

  /// This user acting as a viewer.
  pub fn as_viewer(&self) -> Viewer {
    Viewer {
      id:       Some(self.id),
      is_staff: self.is_staff,
    }
  }
}
