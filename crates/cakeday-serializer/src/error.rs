//! Error types for the cakeday serializer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid stored date: {value:?}")]
  InvalidDate { value: String },

  #[error("core error: {0}")]
  Core(#[from] cakeday_core::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
