//! Error type for `tenure-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("sqlite error: {0}")]
  Sqlite(#[from] rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("interval not found: {0}")]
  IntervalNotFound(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
