//! `cakeday`: evaluate celebration indicators and date visibility from the
//! command line.
//!
//! # Usage
//!
//! ```text
//! cakeday --config cakeday.toml --input post.json resolve
//! cakeday --today 2026-02-28 expose < profile.json
//! cakeday navigation --legacy
//! ```
//!
//! The input document has the shape
//! `{"user": {...}, "viewer": {"id": ..., "is_staff": ...}, "update": {...}}`.

mod commands;
mod settings;

use std::{
  fs,
  io::{self, Read},
  path::PathBuf,
};

use anyhow::Context as _;
use cakeday_core::calendar::CalendarDate;
use chrono::Utc;
use clap::Parser;
use commands::{Command, Evaluation};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cakeday visibility rules")]
struct Cli {
  /// Path to the TOML settings file.
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// The date to evaluate against (`YYYY-MM-DD`); defaults to today in UTC.
  #[arg(long)]
  today: Option<CalendarDate>,

  /// JSON input document; `-` or absent reads stdin.
  #[arg(short, long, value_name = "FILE")]
  input: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

fn main() -> anyhow::Result<()> {
  // Logs go to stderr; stdout carries the JSON result.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();

  let settings = settings::load(cli.config.as_deref())?;
  let today = cli
    .today
    .unwrap_or_else(|| CalendarDate::from(Utc::now().date_naive()));
  tracing::debug!(%today, ?settings, "loaded settings");

  let input = if cli.command.needs_input() {
    Some(read_input(cli.input.as_ref())?)
  } else {
    None
  };

  let output = commands::execute(&cli.command, &settings, &today, input)?;
  println!("{}", serde_json::to_string_pretty(&output)?);

  Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<Evaluation> {
  let raw = match path {
    Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
      .with_context(|| format!("reading input file {}", path.display()))?,
    _ => {
      let mut raw = String::new();
      io::stdin()
        .read_to_string(&mut raw)
        .context("reading input from stdin")?;
      raw
    }
  };
  serde_json::from_str(&raw).context("parsing input document")
}
