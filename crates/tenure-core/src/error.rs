//! Error types for `tenure-core`.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The effective end of a range precedes its start.
  #[error("invalid range: end {end} precedes start {start}")]
  InvalidRange { start: NaiveDate, end: NaiveDate },

  #[error("Please provide an end date or mark as current job.")]
  MissingEndDate,

  #[error("An ongoing entry cannot also have an end date.")]
  ConflictingEnd,

  #[error("Start date cannot be in the future.")]
  StartInFuture(NaiveDate),

  #[error("End date cannot be in the future.")]
  EndInFuture(NaiveDate),

  #[error("End date cannot be before start date.")]
  EndBeforeStart { start: NaiveDate, end: NaiveDate },

  #[error("Please fill in company name and position for detailed mode.")]
  MissingDetails,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
