//! Navigation entries for the anniversary and birthday listing pages.
//!
//! A direct pass-through of the two feature switches: the engine only says
//! which entries exist and where they point.

use serde::{Deserialize, Serialize};

use crate::{resolver::CAKE_GLYPH, settings::Settings};

pub const ANNIVERSARIES_ROUTE: &str = "cakeday.anniversaries.today";
pub const BIRTHDAYS_ROUTE: &str = "cakeday.birthdays.today";

/// Which menu the site renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationStyle {
  /// Sidebar with a community section; one link per enabled feature.
  #[default]
  Sidebar,
  /// Old hamburger menu; a single combined link.
  Legacy,
}

/// A link in the sidebar's community section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLink {
  pub name:      String,
  pub route:     String,
  /// Locale key used for both the link text and its title.
  pub title_key: String,
  pub icon:      String,
}

/// The single entry added to the legacy hamburger menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
  pub route:      String,
  pub label_key:  String,
  pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", content = "links", rename_all = "lowercase")]
pub enum Navigation {
  Sidebar(Vec<SectionLink>),
  Legacy(Option<MenuLink>),
}

impl Navigation {
  pub fn is_empty(&self) -> bool {
    match self {
      Self::Sidebar(links) => links.is_empty(),
      Self::Legacy(link) => link.is_none(),
    }
  }
}

pub fn navigation(settings: &Settings, style: NavigationStyle) -> Navigation {
  match style {
    NavigationStyle::Sidebar => Navigation::Sidebar(section_links(settings)),
    NavigationStyle::Legacy => Navigation::Legacy(menu_link(settings)),
  }
}

fn section_links(settings: &Settings) -> Vec<SectionLink> {
  let link = |name: &str, route: &str| SectionLink {
    name:      name.to_string(),
    route:     route.to_string(),
    title_key: format!("{name}.title"),
    icon:      CAKE_GLYPH.to_string(),
  };

  let mut links = Vec::new();
  if settings.anniversary_enabled {
    links.push(link("anniversaries", ANNIVERSARIES_ROUTE));
  }
  if settings.birthday_enabled {
    links.push(link("birthdays", BIRTHDAYS_ROUTE));
  }
  links
}

fn menu_link(settings: &Settings) -> Option<MenuLink> {
  let route = if settings.anniversary_enabled {
    ANNIVERSARIES_ROUTE
  } else if settings.birthday_enabled {
    BIRTHDAYS_ROUTE
  } else {
    return None;
  };

  Some(MenuLink {
    route:      route.to_string(),
    label_key:  "cakeday.title".to_string(),
    class_name: "cakeday-link".to_string(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn settings(anniversary: bool, birthday: bool) -> Settings {
    Settings {
      anniversary_enabled: anniversary,
      birthday_enabled: birthday,
      ..Settings::default()
    }
  }

  #[test]
  fn nothing_enabled_means_no_entries() {
    let s = settings(false, false);
    assert!(navigation(&s, NavigationStyle::Sidebar).is_empty());
    assert!(navigation(&s, NavigationStyle::Legacy).is_empty());
  }

  #[test]
  fn sidebar_links_per_feature() {
    let Navigation::Sidebar(links) =
      navigation(&settings(true, true), NavigationStyle::Sidebar)
    else {
      panic!("expected sidebar");
    };
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].name, "anniversaries");
    assert_eq!(links[0].route, ANNIVERSARIES_ROUTE);
    assert_eq!(links[0].title_key, "anniversaries.title");
    assert_eq!(links[1].name, "birthdays");
    assert_eq!(links[1].icon, "birthday-cake");

    let Navigation::Sidebar(links) =
      navigation(&settings(false, true), NavigationStyle::Sidebar)
    else {
      panic!("expected sidebar");
    };
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].route, BIRTHDAYS_ROUTE);
  }

  #[test]
  fn legacy_prefers_anniversaries() {
    let Navigation::Legacy(Some(link)) =
      navigation(&settings(true, true), NavigationStyle::Legacy)
    else {
      panic!("expected legacy link");
    };
    assert_eq!(link.route, ANNIVERSARIES_ROUTE);
    assert_eq!(link.class_name, "cakeday-link");

    let Navigation::Legacy(Some(link)) =
      navigation(&settings(false, true), NavigationStyle::Legacy)
    else {
      panic!("expected legacy link");
    };
    assert_eq!(link.route, BIRTHDAYS_ROUTE);
  }

  #[test]
  fn serializes_with_style_tag() {
    let nav = navigation(&settings(false, true), NavigationStyle::Legacy);
    let json = serde_json::to_value(&nav).unwrap();
    assert_eq!(json["style"], "legacy");
    assert_eq!(json["links"]["label_key"], "cakeday.title");
  }
}
