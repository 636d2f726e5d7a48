//! Site-wide settings consumed by every decision.

use serde::{Deserialize, Serialize};

/// Feature switches and emoji names, read once per request and passed into
/// every call.
///
/// Every key is optional: a missing switch means the feature is off. The
/// legacy site-setting names are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  #[serde(alias = "cakeday_enabled")]
  pub anniversary_enabled:          bool,
  #[serde(alias = "cakeday_birthday_enabled")]
  pub birthday_enabled:             bool,
  #[serde(alias = "enable_emoji")]
  pub emoji_enabled:                bool,
  #[serde(alias = "cakeday_birthday_required")]
  pub birthday_required_on_profile: bool,
  #[serde(alias = "cakeday_emoji")]
  pub anniversary_emoji:            String,
  #[serde(alias = "cakeday_secret_emoji")]
  pub birthday_secret_emoji:        String,
  #[serde(alias = "cakeday_birthday_emoji")]
  pub birthday_public_emoji:        String,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      anniversary_enabled:          false,
      birthday_enabled:             false,
      emoji_enabled:                false,
      birthday_required_on_profile: false,
      anniversary_emoji:            "cake".to_string(),
      birthday_secret_emoji:        "shushing_face".to_string(),
      birthday_public_emoji:        "birthday".to_string(),
    }
  }
}

impl Settings {
  /// Both celebration tracks switched on, emoji off.
  pub fn all_enabled() -> Self {
    Self {
      anniversary_enabled: true,
      birthday_enabled: true,
      ..Self::default()
    }
  }
}
