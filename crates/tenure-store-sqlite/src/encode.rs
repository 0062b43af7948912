//! Encoding and decoding helpers between domain types and the plain-text
//! values stored in the `kv` table.
//!
//! Timestamps are stored as RFC 3339 strings. The interval list is stored as
//! one compact JSON array.

use chrono::{DateTime, Utc};
use tenure_core::interval::Interval;

use crate::Result;

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

// ─── Interval list ───────────────────────────────────────────────────────────

pub fn encode_intervals(intervals: &[Interval]) -> Result<String> {
  Ok(serde_json::to_string(intervals)?)
}

/// Decode a stored list. An absent value decodes to an empty list.
pub fn decode_intervals(s: Option<&str>) -> Result<Vec<Interval>> {
  match s {
    Some(json) => Ok(serde_json::from_str(json)?),
    None => Ok(Vec::new()),
  }
}
