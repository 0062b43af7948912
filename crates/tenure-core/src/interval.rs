//! Interval records — one stored period of experience.
//!
//! An interval is a start date plus either an end date or the "ongoing" flag.
//! The engine only ever reads intervals; the record store owns them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::{Result, duration::Duration};

/// Title used for quick entries that were given no job title.
pub const DEFAULT_JOB_TITLE: &str = "Work Experience";

// ─── Role ────────────────────────────────────────────────────────────────────

/// How an entry was captured.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntryMode {
  /// Only a job title is recorded.
  #[default]
  Quick,
  /// Company name and position are both recorded.
  Detailed,
}

/// The descriptive part of an interval. Serialised flattened into the
/// interval with a `mode` discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Role {
  Quick {
    job_title: String,
  },
  Detailed {
    company_name: String,
    position:     String,
  },
}

impl Role {
  pub fn quick(job_title: Option<String>) -> Self {
    let job_title = job_title
      .map(|t| t.trim().to_owned())
      .filter(|t| !t.is_empty())
      .unwrap_or_else(|| DEFAULT_JOB_TITLE.to_owned());
    Self::Quick { job_title }
  }

  pub fn detailed(company_name: impl Into<String>, position: impl Into<String>) -> Self {
    Self::Detailed {
      company_name: company_name.into().trim().to_owned(),
      position:     position.into().trim().to_owned(),
    }
  }

  pub fn mode(&self) -> EntryMode {
    match self {
      Self::Quick { .. } => EntryMode::Quick,
      Self::Detailed { .. } => EntryMode::Detailed,
    }
  }

  /// Display title: the job title, else the position, else `"Position"`.
  pub fn title(&self) -> &str {
    match self {
      Self::Quick { job_title } if !job_title.is_empty() => job_title,
      Self::Detailed { position, .. } if !position.is_empty() => position,
      _ => "Position",
    }
  }

  /// Company name, for detailed entries.
  pub fn company(&self) -> Option<&str> {
    match self {
      Self::Detailed { company_name, .. } => Some(company_name),
      Self::Quick { .. } => None,
    }
  }
}

impl Default for Role {
  fn default() -> Self { Self::quick(None) }
}

// ─── Interval ────────────────────────────────────────────────────────────────

/// A persisted interval. Keys are camelCase so that the stored JSON list
/// keeps the shape of the browser-era records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
  #[serde(rename = "id")]
  pub interval_id: Uuid,
  pub recorded_at: DateTime<Utc>,
  pub start_date:  NaiveDate,
  pub end_date:    Option<NaiveDate>,
  #[serde(rename = "isCurrentJob")]
  pub is_ongoing:  bool,
  #[serde(flatten)]
  pub role:        Role,
}

impl Interval {
  /// The end date used for calculation: `as_of` for ongoing intervals.
  pub fn effective_end(&self, as_of: NaiveDate) -> NaiveDate {
    match self.end_date {
      Some(end) if !self.is_ongoing => end,
      _ => as_of,
    }
  }

  /// Calendar-accurate duration of this interval as of `as_of`.
  pub fn duration(&self, as_of: NaiveDate) -> Result<Duration> {
    crate::duration::calculate_duration(
      self.start_date,
      Some(self.effective_end(as_of)),
      as_of,
    )
  }
}

/// Input for [`RecordStore::add_interval`](crate::store::RecordStore::add_interval).
/// The id and `recorded_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInterval {
  pub start_date: NaiveDate,
  pub end_date:   Option<NaiveDate>,
  pub is_ongoing: bool,
  pub role:       Role,
}

impl NewInterval {
  /// A closed interval with a default quick-mode role.
  pub fn closed(start_date: NaiveDate, end_date: NaiveDate) -> Self {
    Self {
      start_date,
      end_date: Some(end_date),
      is_ongoing: false,
      role: Role::default(),
    }
  }

  /// An ongoing interval with a default quick-mode role.
  pub fn ongoing(start_date: NaiveDate) -> Self {
    Self {
      start_date,
      end_date: None,
      is_ongoing: true,
      role: Role::default(),
    }
  }

  pub fn with_role(mut self, role: Role) -> Self {
    self.role = role;
    self
  }

  pub fn into_interval(self, interval_id: Uuid, recorded_at: DateTime<Utc>) -> Interval {
    Interval {
      interval_id,
      recorded_at,
      start_date: self.start_date,
      end_date: if self.is_ongoing { None } else { self.end_date },
      is_ongoing: self.is_ongoing,
      role: self.role,
    }
  }
}

// ─── Collection helpers ──────────────────────────────────────────────────────

/// Sort by start date, newest first. Stable, so equal starts keep their
/// insertion order.
pub fn sort_newest_first(intervals: &mut [Interval]) {
  intervals.sort_by(|a, b| b.start_date.cmp(&a.start_date));
}

/// The earliest start date across all intervals.
pub fn career_start(intervals: &[Interval]) -> Option<NaiveDate> {
  intervals.iter().map(|i| i.start_date).min()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn interval(start: NaiveDate, end: Option<NaiveDate>) -> Interval {
    let input = match end {
      Some(end) => NewInterval::closed(start, end),
      None => NewInterval::ongoing(start),
    };
    input.into_interval(Uuid::new_v4(), Utc::now())
  }

  #[test]
  fn ongoing_interval_ends_at_evaluation_date() {
    let i = interval(date(2021, 6, 1), None);
    assert_eq!(i.effective_end(date(2023, 6, 1)), date(2023, 6, 1));
  }

  #[test]
  fn closed_interval_ignores_evaluation_date() {
    let i = interval(date(2018, 1, 1), Some(date(2020, 1, 1)));
    assert_eq!(i.effective_end(date(2023, 6, 1)), date(2020, 1, 1));
  }

  #[test]
  fn ongoing_input_drops_stray_end_date() {
    let mut input = NewInterval::ongoing(date(2021, 6, 1));
    input.end_date = Some(date(2022, 1, 1));
    let i = input.into_interval(Uuid::nil(), Utc::now());
    assert_eq!(i.end_date, None);
  }

  #[test]
  fn quick_role_defaults_title() {
    assert_eq!(Role::quick(None).title(), DEFAULT_JOB_TITLE);
    assert_eq!(Role::quick(Some("   ".into())).title(), DEFAULT_JOB_TITLE);
    assert_eq!(Role::quick(Some(" Engineer ".into())).title(), "Engineer");
  }

  #[test]
  fn detailed_role_title_and_company() {
    let role = Role::detailed("Acme", "Welder");
    assert_eq!(role.title(), "Welder");
    assert_eq!(role.company(), Some("Acme"));
    assert_eq!(role.mode(), EntryMode::Detailed);
  }

  #[test]
  fn entry_mode_parses_lowercase() {
    assert_eq!("detailed".parse::<EntryMode>().unwrap(), EntryMode::Detailed);
    assert_eq!(EntryMode::Quick.to_string(), "quick");
  }

  #[test]
  fn json_shape_is_camel_case_and_flattened() {
    let i = NewInterval::closed(date(2020, 1, 1), date(2022, 12, 31))
      .with_role(Role::detailed("Acme", "Welder"))
      .into_interval(Uuid::nil(), Utc::now());

    let json = serde_json::to_value(&i).unwrap();
    assert_eq!(json["id"], Uuid::nil().to_string());
    assert_eq!(json["startDate"], "2020-01-01");
    assert_eq!(json["endDate"], "2022-12-31");
    assert_eq!(json["isCurrentJob"], false);
    assert_eq!(json["mode"], "detailed");
    assert_eq!(json["companyName"], "Acme");
    assert_eq!(json["position"], "Welder");

    let back: Interval = serde_json::from_value(json).unwrap();
    assert_eq!(back, i);
  }

  #[test]
  fn sorts_newest_first_and_finds_career_start() {
    let mut list = vec![
      interval(date(2015, 3, 1), Some(date(2016, 1, 1))),
      interval(date(2021, 6, 1), None),
      interval(date(2018, 1, 1), Some(date(2020, 1, 1))),
    ];
    sort_newest_first(&mut list);
    let starts: Vec<_> = list.iter().map(|i| i.start_date).collect();
    assert_eq!(starts, vec![date(2021, 6, 1), date(2018, 1, 1), date(2015, 3, 1)]);
    assert_eq!(career_start(&list), Some(date(2015, 3, 1)));
    assert_eq!(career_start(&[]), None);
  }
}
