//! Loading [`Settings`] from a TOML file and `CAKEDAY_*` environment
//! variables.

use std::path::Path;

use anyhow::Context as _;
use cakeday_core::settings::Settings;
use config::{Config, Environment, File};

/// Read settings from `path` (or `./cakeday.toml` if present), then let
/// `CAKEDAY_*` environment variables override individual keys.
///
/// Keys that appear nowhere keep their defaults, which switch every feature
/// off.
pub fn load(path: Option<&Path>) -> anyhow::Result<Settings> {
  let file = match path {
    Some(path) => File::from(path).required(true),
    None => File::with_name("cakeday").required(false),
  };

  let settings = Config::builder()
    .add_source(file)
    .add_source(Environment::with_prefix("CAKEDAY"))
    .build()
    .context("failed to read settings")?;

  settings
    .try_deserialize()
    .context("failed to deserialise Settings")
}
