//! Subcommand execution. Every command prints a JSON document.

use anyhow::Context as _;
use cakeday_core::{
  calendar::CalendarDate,
  navigation::{NavigationStyle, navigation},
  person::{UserRecord, Viewer},
  profile::{ProfileUpdate, save_profile},
  resolver::resolve,
  settings::Settings,
};
use cakeday_serializer::{StoredUser, post_attributes, user_dates_json};
use clap::Subcommand;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Resolve the anniversary and birthday indicators for the input user.
  Resolve,
  /// Print the date fields the viewer may receive.
  Expose,
  /// Print the post author attributes for the viewer.
  Post,
  /// Print the navigation entries for the enabled features.
  Navigation {
    /// Use the legacy hamburger menu instead of the sidebar.
    #[arg(long)]
    legacy: bool,
  },
  /// Gate a profile save and print the record that would be persisted.
  CheckProfile,
}

impl Command {
  pub fn needs_input(&self) -> bool { !matches!(self, Self::Navigation { .. }) }
}

/// The JSON document read by commands that act on a user.
#[derive(Debug, Deserialize)]
pub struct Evaluation {
  pub user:   StoredUser,
  /// Omitted for anonymous viewers.
  #[serde(default)]
  pub viewer: Viewer,
  #[serde(default)]
  pub update: ProfileUpdate,
}

pub fn execute(
  command: &Command,
  settings: &Settings,
  today: &CalendarDate,
  input: Option<Evaluation>,
) -> anyhow::Result<Value> {
  let output = match command {
    Command::Navigation { legacy } => {
      let style = if *legacy {
        NavigationStyle::Legacy
      } else {
        NavigationStyle::Sidebar
      };
      serde_json::to_value(navigation(settings, style))?
    }
    Command::Resolve => {
      let (record, viewer, _) = unpack(input)?;
      let resolution = resolve(&record.subject(), &viewer, settings, today);
      info!(
        user = %record.id,
        shown = resolution.shown().count(),
        "resolved indicators"
      );
      serde_json::to_value(resolution)?
    }
    Command::Expose => {
      let (record, viewer, _) = unpack(input)?;
      user_dates_json(&record, &viewer, settings)?
    }
    Command::Post => {
      let (record, viewer, _) = unpack(input)?;
      serde_json::to_value(post_attributes(&record, &viewer, settings, today))?
    }
    Command::CheckProfile => {
      let (record, viewer, update) = unpack(input)?;
      let saved = save_profile(&viewer, &record, update, settings)
        .inspect_err(|e| {
          warn!(user = %record.id, key = ?e.i18n_key(), "profile save rejected")
        })
        .context("profile save rejected")?;
      serde_json::to_value(saved)?
    }
  };

  Ok(output)
}

fn unpack(
  input: Option<Evaluation>,
) -> anyhow::Result<(UserRecord, Viewer, ProfileUpdate)> {
  let input = input.context("this command needs an input document")?;
  let record = input.user.into_record().context("invalid user record")?;
  Ok((record, input.viewer, input.update))
}
