//! Error type for `tenure-report`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] tenure_core::Error),

  #[error("xml write error: {0}")]
  Xml(String),

  #[error("generated document is not UTF-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
