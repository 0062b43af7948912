//! The duration engine.
//!
//! Two different decompositions live here on purpose:
//!
//! - [`calculate_duration`] breaks a single interval into calendar-accurate
//!   years, months and days by borrowing from the month preceding the end
//!   date.
//! - [`aggregate_durations`] sums whole days across intervals and splits the
//!   total using average year (365.25 days) and month (30.44 days) lengths.
//!
//! The two do not agree with each other; totals are reported with the
//! average-based split unless a caller picks
//! [`AggregationStrategy::CalendarSum`].

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{Error, Result, interval::Interval};

/// Average year length used by the aggregate decomposition.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Average month length used by the aggregate decomposition.
pub const DAYS_PER_MONTH: f64 = 30.44;

// ─── Duration ────────────────────────────────────────────────────────────────

/// Calendar-accurate breakdown of the span between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Duration {
  pub years:              u32,
  pub months:             u32,
  pub days:               u32,
  /// Whole days between the two endpoints.
  pub total_days:         i64,
  /// `years * 12 + months`.
  pub total_months:       u32,
  /// `floor(total_days / 365.25)`; not the same as `years`.
  pub total_years_approx: i64,
}

impl Duration {
  /// Add this duration to `start`: first `total_months` calendar months
  /// (clamped to the end of a short month), then `days` days.
  ///
  /// For any `start <= end`, `calculate_duration(start, end).add_to(start)`
  /// is `end`.
  pub fn add_to(&self, start: NaiveDate) -> Option<NaiveDate> {
    start
      .checked_add_months(Months::new(self.total_months))?
      .checked_add_days(Days::new(u64::from(self.days)))
  }
}

/// Compute the calendar-accurate duration from `start` to `end`.
///
/// A missing `end` means the interval is still running and ends at `as_of`.
/// Fails with [`Error::InvalidRange`] when the effective end precedes
/// `start`.
pub fn calculate_duration(
  start: NaiveDate,
  end: Option<NaiveDate>,
  as_of: NaiveDate,
) -> Result<Duration> {
  let end = end.unwrap_or(as_of);
  if end < start {
    return Err(Error::InvalidRange { start, end });
  }

  let mut years = end.year() - start.year();
  let mut months = end.month() as i32 - start.month() as i32;
  let mut days = end.day() as i32 - start.day() as i32;

  if days < 0 {
    months -= 1;
    // Borrow the month before `end`. A start day past that month's last day
    // is anchored on the last day.
    let borrowed = days_in_preceding_month(end) as i32;
    days = end.day() as i32 + borrowed - (start.day() as i32).min(borrowed);
  }

  if months < 0 {
    years -= 1;
    months += 12;
  }

  let total_days = (end - start).num_days();
  let total_months = years * 12 + months;

  Ok(Duration {
    years: years as u32,
    months: months as u32,
    days: days as u32,
    total_days,
    total_months: total_months as u32,
    total_years_approx: (total_days as f64 / DAYS_PER_YEAR).floor() as i64,
  })
}

/// Number of days in the month immediately before `date`'s month.
fn days_in_preceding_month(date: NaiveDate) -> u32 {
  // The day before the first of `date`'s month is the last day of the
  // preceding month, across year boundaries too.
  date
    .with_day(1)
    .and_then(|first| first.pred_opt())
    .map_or(31, |last| last.day())
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

/// How [`aggregate_with`] re-expresses summed intervals.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize,
  Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AggregationStrategy {
  /// Sum whole days, then split with 365.25-day years and 30.44-day months.
  #[default]
  AverageBased,
  /// Sum the per-interval calendar components and carry months into years.
  /// Days are left as summed.
  CalendarSum,
}

/// The combined duration of several intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateDuration {
  /// Sum of each interval's `total_days`; overlaps are counted twice.
  pub total_days: i64,
  pub years:      u32,
  pub months:     u32,
  pub days:       u32,
}

impl AggregateDuration {
  /// Split a day count with average year and month lengths.
  pub fn from_total_days(total_days: i64) -> Self {
    let total = total_days as f64;
    let years = (total / DAYS_PER_YEAR).floor();
    let remaining = total - years * DAYS_PER_YEAR;
    let months = (remaining / DAYS_PER_MONTH).floor();
    let days = (remaining - months * DAYS_PER_MONTH).round();

    Self {
      total_days,
      years: years as u32,
      months: months as u32,
      days: days as u32,
    }
  }
}

/// Aggregate `intervals` as of `as_of` with the default
/// [`AggregationStrategy::AverageBased`] decomposition.
pub fn aggregate_durations(
  intervals: &[Interval],
  as_of: NaiveDate,
) -> Result<AggregateDuration> {
  aggregate_with(intervals, as_of, AggregationStrategy::default())
}

/// Aggregate `intervals` as of `as_of` using `strategy`.
///
/// An empty slice yields the zero aggregate.
pub fn aggregate_with(
  intervals: &[Interval],
  as_of: NaiveDate,
  strategy: AggregationStrategy,
) -> Result<AggregateDuration> {
  if intervals.is_empty() {
    return Ok(AggregateDuration::default());
  }

  let durations = intervals
    .iter()
    .map(|i| i.duration(as_of))
    .collect::<Result<Vec<_>>>()?;

  let total_days: i64 = durations.iter().map(|d| d.total_days).sum();
  tracing::debug!(
    intervals = intervals.len(),
    total_days,
    %strategy,
    "aggregating durations"
  );

  let aggregate = match strategy {
    AggregationStrategy::AverageBased => AggregateDuration::from_total_days(total_days),
    AggregationStrategy::CalendarSum => {
      let months: u32 = durations.iter().map(|d| d.total_months).sum();
      AggregateDuration {
        total_days,
        years: months / 12,
        months: months % 12,
        days: durations.iter().map(|d| d.days).sum(),
      }
    }
  };

  Ok(aggregate)
}
