//! Decides which celebration indicator, if any, a viewer sees next to a
//! subject's posts today.
//!
//! Two independent tracks are evaluated per call:
//!
//! | Track | Fires when | Tiers |
//! |-------|------------|-------|
//! | anniversary | anniversaries enabled and account created on this day | `anniversary` |
//! | birthday | birthdays enabled and birth date on this day | `birthday-public`, `birthday-secret` |
//!
//! Within the birthday track the first matching rule wins:
//!
//! 1. the subject opted in to public celebration → `birthday-public`, for
//!    every viewer including anonymous ones;
//! 2. the viewer is the subject or staff → `birthday-secret`;
//! 3. otherwise nothing is shown.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, IntoStaticStr};
use tracing::trace;

use crate::{
  calendar::{CalendarDate, matches},
  person::{Subject, Viewer},
  settings::Settings,
};

/// Fallback icon-font glyph for cakes, used when emoji are disabled.
pub const CAKE_GLYPH: &str = "birthday-cake";
/// Fallback icon-font glyph for secret birthdays.
pub const SECRET_GLYPH: &str = "shushing_face";

// ─── Output types ────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
  AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Tier {
  None,
  Anniversary,
  BirthdaySecret,
  BirthdayPublic,
}

/// What the rendering layer should draw. Resolving the name to an asset is
/// the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
  /// A site emoji, by name.
  Emoji(String),
  /// An icon-font glyph, by name.
  Glyph(String),
}

impl Icon {
  pub fn name(&self) -> &str {
    match self {
      Self::Emoji(name) | Self::Glyph(name) => name,
    }
  }

  fn pick(settings: &Settings, emoji: &str, glyph: &str) -> Self {
    if settings.emoji_enabled {
      Self::Emoji(emoji.to_owned())
    } else {
      Self::Glyph(glyph.to_owned())
    }
  }
}

/// Lookup key for the hover title; `Self*` variants are phrased for a
/// subject looking at their own post.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
  IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TitleKey {
  Title,
  SelfTitle,
  SecretOther,
  SecretSelf,
  PublicOther,
  PublicSelf,
}

impl TitleKey {
  /// The locale key the rendering layer translates.
  pub fn i18n_key(self) -> &'static str {
    match self {
      Self::Title => "user.anniversary.title",
      Self::SelfTitle => "user.anniversary.user_title",
      Self::SecretOther => "user.date_of_birth.secret_title",
      Self::SecretSelf => "user.date_of_birth.user_secret_title",
      Self::PublicOther => "user.date_of_birth.title",
      Self::PublicSelf => "user.date_of_birth.user_title",
    }
  }

  fn for_viewer(own: bool, self_key: Self, other_key: Self) -> Self {
    if own { self_key } else { other_key }
  }
}

/// The outcome of one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityDecision {
  /// Whether the date fell on today, regardless of what the viewer may see.
  pub matched:   bool,
  pub tier:      Tier,
  pub icon:      Option<Icon>,
  pub title_key: Option<TitleKey>,
}

impl VisibilityDecision {
  fn none(matched: bool) -> Self {
    Self {
      matched,
      tier: Tier::None,
      icon: None,
      title_key: None,
    }
  }

  fn fire(tier: Tier, icon: Icon, title_key: TitleKey) -> Self {
    Self {
      matched: true,
      tier,
      icon: Some(icon),
      title_key: Some(title_key),
    }
  }

  /// Whether an indicator should be drawn.
  pub fn is_shown(&self) -> bool { self.tier != Tier::None }
}

/// Both tracks for one subject/viewer pair. Callers draw every shown
/// decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
  pub anniversary: VisibilityDecision,
  pub birthday:    VisibilityDecision,
}

impl Resolution {
  /// The decisions to draw, anniversary first.
  pub fn shown(&self) -> impl Iterator<Item = &VisibilityDecision> {
    [&self.anniversary, &self.birthday]
      .into_iter()
      .filter(|d| d.is_shown())
  }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// Evaluate both tracks.
pub fn resolve(
  subject: &Subject,
  viewer: &Viewer,
  settings: &Settings,
  today: &CalendarDate,
) -> Resolution {
  Resolution {
    anniversary: resolve_anniversary(subject, viewer, settings, today),
    birthday:    resolve_birthday(subject, viewer, settings, today),
  }
}

pub fn resolve_anniversary(
  subject: &Subject,
  viewer: &Viewer,
  settings: &Settings,
  today: &CalendarDate,
) -> VisibilityDecision {
  if !settings.anniversary_enabled {
    return VisibilityDecision::none(false);
  }
  let Some(anniversary) = &subject.anniversary_date else {
    return VisibilityDecision::none(false);
  };
  if !matches(anniversary, today) {
    return VisibilityDecision::none(false);
  }

  let decision = VisibilityDecision::fire(
    Tier::Anniversary,
    Icon::pick(settings, &settings.anniversary_emoji, CAKE_GLYPH),
    TitleKey::for_viewer(
      viewer.is(subject.id),
      TitleKey::SelfTitle,
      TitleKey::Title,
    ),
  );
  trace!(subject = %subject.id, tier = %decision.tier, "anniversary track fired");
  decision
}

pub fn resolve_birthday(
  subject: &Subject,
  viewer: &Viewer,
  settings: &Settings,
  today: &CalendarDate,
) -> VisibilityDecision {
  if !settings.birthday_enabled {
    return VisibilityDecision::none(false);
  }
  let Some(birth_date) = &subject.birth_date else {
    return VisibilityDecision::none(false);
  };
  if !matches(birth_date, today) {
    return VisibilityDecision::none(false);
  }

  let own = viewer.is(subject.id);
  let decision = if subject.celebrate_birthday_publicly {
    VisibilityDecision::fire(
      Tier::BirthdayPublic,
      Icon::pick(settings, &settings.birthday_public_emoji, CAKE_GLYPH),
      TitleKey::for_viewer(own, TitleKey::PublicSelf, TitleKey::PublicOther),
    )
  } else if viewer.is_owner_or_staff(subject.id) {
    VisibilityDecision::fire(
      Tier::BirthdaySecret,
      Icon::pick(settings, &settings.birthday_secret_emoji, SECRET_GLYPH),
      TitleKey::for_viewer(own, TitleKey::SecretSelf, TitleKey::SecretOther),
    )
  } else {
    VisibilityDecision::none(true)
  };

  trace!(subject = %subject.id, tier = %decision.tier, "birthday track matched");
  decision
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};
  use uuid::Uuid;

  use super::*;

  fn today() -> CalendarDate { CalendarDate::with_year(2026, 10, 17).unwrap() }

  fn birthday_subject() -> Subject {
    Subject::new(Uuid::new_v4(), Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
      .with_birth_date(CalendarDate::new(10, 17).unwrap())
  }

  fn birthdays_only() -> Settings {
    Settings {
      birthday_enabled: true,
      ..Settings::default()
    }
  }

  #[test]
  fn tier_and_title_names() {
    assert_eq!(Tier::BirthdaySecret.to_string(), "birthday-secret");
    assert_eq!(Tier::None.as_ref(), "none");
    assert_eq!(TitleKey::SecretSelf.to_string(), "secret-self");
    let s: &'static str = TitleKey::SelfTitle.into();
    assert_eq!(s, "self-title");
  }

  #[test]
  fn emoji_setting_chooses_icon_kind() {
    let subject = birthday_subject().celebrating_publicly();
    let viewer = Viewer::anonymous();

    let glyph = resolve_birthday(&subject, &viewer, &birthdays_only(), &today());
    assert_eq!(glyph.icon, Some(Icon::Glyph(CAKE_GLYPH.into())));

    let settings = Settings {
      emoji_enabled: true,
      birthday_public_emoji: "partying_face".into(),
      ..birthdays_only()
    };
    let emoji = resolve_birthday(&subject, &viewer, &settings, &today());
    assert_eq!(emoji.icon, Some(Icon::Emoji("partying_face".into())));
    assert_eq!(emoji.icon.unwrap().name(), "partying_face");
  }

  #[test]
  fn hidden_match_still_reports_matched() {
    let subject = birthday_subject();
    let decision = resolve_birthday(
      &subject,
      &Viewer::user(Uuid::new_v4()),
      &birthdays_only(),
      &today(),
    );
    assert!(decision.matched);
    assert!(!decision.is_shown());
    assert_eq!(decision.icon, None);
  }

  #[test]
  fn disabled_track_never_matches() {
    let subject = birthday_subject().celebrating_publicly();
    let decision = resolve_birthday(
      &subject,
      &Viewer::staff(Uuid::new_v4()),
      &Settings::default(),
      &today(),
    );
    assert_eq!(decision, VisibilityDecision::none(false));
  }

  #[test]
  fn missing_anniversary_date_cannot_fire() {
    let mut subject = birthday_subject();
    subject.anniversary_date = None;
    let decision = resolve_anniversary(
      &subject,
      &Viewer::anonymous(),
      &Settings::all_enabled(),
      &today(),
    );
    assert_eq!(decision.tier, Tier::None);
  }

  #[test]
  fn i18n_keys_follow_self_and_other_phrasing() {
    assert_eq!(TitleKey::SelfTitle.i18n_key(), "user.anniversary.user_title");
    assert_eq!(
      TitleKey::SecretOther.i18n_key(),
      "user.date_of_birth.secret_title"
    );
  }

  #[test]
  fn decision_serializes_with_kebab_tier() {
    let subject = birthday_subject();
    let decision = resolve_birthday(
      &subject,
      &Viewer::user(subject.id),
      &birthdays_only(),
      &today(),
    );
    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["tier"], "birthday-secret");
    assert_eq!(json["title_key"], "secret-self");
    assert_eq!(json["icon"]["glyph"], SECRET_GLYPH);
  }
}
