//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::{OptionalExtension as _, TransactionBehavior};
use uuid::Uuid;

use tenure_core::{
  interval::{Interval, NewInterval},
  store::RecordStore,
};

use crate::{
  Error, Result,
  encode::{decode_intervals, encode_dt, encode_intervals},
  schema::SCHEMA,
};

/// Key under which the interval list is stored.
pub const INTERVALS_KEY: &str = "intervals";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A tenure record store backed by a single SQLite file.
///
/// Every mutation reads the whole list, changes it and writes it back
/// inside one transaction.
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Load the full interval list. A store that was never written is empty.
  pub async fn load(&self) -> Result<Vec<Interval>> {
    let raw = self.conn.call(|conn| Ok(read_raw(conn)?)).await?;
    let intervals = decode_intervals(raw.as_deref())?;
    tracing::debug!(count = intervals.len(), "loaded intervals");
    Ok(intervals)
  }

  /// Apply `f` to the stored list and write the result back.
  ///
  /// Read, change and write run in one immediate transaction on the
  /// connection thread, so concurrent callers never overwrite each other.
  /// Nothing is written when `f` fails.
  async fn update<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&mut Vec<Interval>) -> Result<T> + Send + 'static,
    T: Send + 'static,
  {
    let at_str = encode_dt(Utc::now());
    let (out, count) = self
      .conn
      .call(move |conn| Ok(update_in_transaction(conn, &at_str, f)))
      .await??;

    tracing::debug!(count, "saved intervals");
    Ok(out)
  }
}

fn read_raw(conn: &rusqlite::Connection) -> rusqlite::Result<Option<String>> {
  conn
    .query_row(
      "SELECT value FROM kv WHERE key = ?1",
      rusqlite::params![INTERVALS_KEY],
      |row| row.get(0),
    )
    .optional()
}

fn update_in_transaction<T>(
  conn: &mut rusqlite::Connection,
  at_str: &str,
  f: impl FnOnce(&mut Vec<Interval>) -> Result<T>,
) -> Result<(T, usize)> {
  let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

  let raw = read_raw(&tx)?;
  let mut intervals = decode_intervals(raw.as_deref())?;
  let out = f(&mut intervals)?;

  tx.execute(
    "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET
       value = excluded.value,
       updated_at = excluded.updated_at",
    rusqlite::params![INTERVALS_KEY, encode_intervals(&intervals)?, at_str],
  )?;
  tx.commit()?;

  Ok((out, intervals.len()))
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  async fn add_interval(&self, input: NewInterval) -> Result<Interval> {
    let interval = input.into_interval(Uuid::new_v4(), Utc::now());
    let stored = interval.clone();
    self
      .update(move |intervals| {
        intervals.push(stored);
        Ok(())
      })
      .await?;
    Ok(interval)
  }

  async fn get_interval(&self, id: Uuid) -> Result<Option<Interval>> {
    let intervals = self.load().await?;
    Ok(intervals.into_iter().find(|i| i.interval_id == id))
  }

  async fn list_intervals(&self) -> Result<Vec<Interval>> { self.load().await }

  async fn remove_interval(&self, id: Uuid) -> Result<Interval> {
    self
      .update(move |intervals| {
        let pos = intervals
          .iter()
          .position(|i| i.interval_id == id)
          .ok_or(Error::IntervalNotFound(id))?;
        Ok(intervals.remove(pos))
      })
      .await
  }

  async fn clear(&self) -> Result<usize> {
    self
      .update(|intervals| {
        let count = intervals.len();
        intervals.clear();
        Ok(count)
      })
      .await
  }
}
