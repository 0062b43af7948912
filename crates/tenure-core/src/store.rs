//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `tenure-store-sqlite`).
//! The engine never sees a store; callers load the list and pass a slice.

use std::future::Future;

use uuid::Uuid;

use crate::interval::{Interval, NewInterval};

/// Abstraction over a persisted list of intervals.
///
/// Stores do not validate dates against a clock; run
/// [`validate`](crate::validate::validate) before [`add_interval`].
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
///
/// [`add_interval`]: RecordStore::add_interval
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new interval and return it with its id and `recorded_at` set.
  fn add_interval(
    &self,
    input: NewInterval,
  ) -> impl Future<Output = Result<Interval, Self::Error>> + Send + '_;

  /// Retrieve an interval by id. Returns `None` if not found.
  fn get_interval(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Interval>, Self::Error>> + Send + '_;

  /// All intervals, in insertion order.
  fn list_intervals(
    &self,
  ) -> impl Future<Output = Result<Vec<Interval>, Self::Error>> + Send + '_;

  /// Remove an interval and return it. Fails if the id is unknown.
  fn remove_interval(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Interval, Self::Error>> + Send + '_;

  /// Remove every interval and return how many were removed.
  fn clear(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
