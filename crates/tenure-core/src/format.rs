//! Plain-text rendering of durations and date ranges.

use chrono::NaiveDate;

use crate::duration::{AggregateDuration, Duration};

fn plural(n: u32, unit: &str) -> String {
  if n == 1 {
    format!("{n} {unit}")
  } else {
    format!("{n} {unit}s")
  }
}

/// Human-readable duration with progressive elision: days only under a
/// month, months and days under a year, otherwise years and months.
pub fn format_duration(duration: &Duration) -> String {
  let Duration { years, months, days, .. } = *duration;

  if years == 0 && months == 0 {
    plural(days, "day")
  } else if years == 0 {
    format!("{}, {}", plural(months, "month"), plural(days, "day"))
  } else {
    format!("{}, {}", plural(years, "year"), plural(months, "month"))
  }
}

/// Full `"Y years, M months, D days"` text of an aggregate; never elided.
pub fn format_aggregate(aggregate: &AggregateDuration) -> String {
  format!(
    "{}, {}, {}",
    plural(aggregate.years, "year"),
    plural(aggregate.months, "month"),
    plural(aggregate.days, "day"),
  )
}

/// Compact `"2y 3m 14d"` form used in printed reports.
pub fn format_compact(duration: &Duration) -> String {
  format!("{}y {}m {}d", duration.years, duration.months, duration.days)
}

/// `"Jan 2020 - Mar 2022"`, or `"Jan 2020 - Present"` for a missing end.
pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
  let end = end.map_or_else(|| "Present".to_owned(), |e| e.format("%b %Y").to_string());
  format!("{} - {end}", start.format("%b %Y"))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ymd(years: u32, months: u32, days: u32) -> Duration {
    Duration { years, months, days, ..Duration::default() }
  }

  #[test]
  fn days_only_below_a_month() {
    assert_eq!(format_duration(&ymd(0, 0, 5)), "5 days");
    assert_eq!(format_duration(&ymd(0, 0, 1)), "1 day");
    assert_eq!(format_duration(&ymd(0, 0, 0)), "0 days");
  }

  #[test]
  fn months_and_days_below_a_year() {
    assert_eq!(format_duration(&ymd(0, 3, 1)), "3 months, 1 day");
    assert_eq!(format_duration(&ymd(0, 1, 0)), "1 month, 0 days");
  }

  #[test]
  fn days_dropped_once_years_present() {
    assert_eq!(format_duration(&ymd(2, 0, 15)), "2 years, 0 months");
    assert_eq!(format_duration(&ymd(1, 1, 3)), "1 year, 1 month");
  }

  #[test]
  fn aggregate_text_is_never_elided() {
    assert_eq!(
      format_aggregate(&AggregateDuration::default()),
      "0 years, 0 months, 0 days"
    );
    let agg = AggregateDuration { total_days: 1460, years: 3, months: 11, days: 29 };
    assert_eq!(format_aggregate(&agg), "3 years, 11 months, 29 days");
    let agg = AggregateDuration { total_days: 397, years: 1, months: 1, days: 1 };
    assert_eq!(format_aggregate(&agg), "1 year, 1 month, 1 day");
  }

  #[test]
  fn compact_form() {
    assert_eq!(format_compact(&ymd(2, 3, 14)), "2y 3m 14d");
  }

  #[test]
  fn date_ranges() {
    let start = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
    let end = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
    assert_eq!(format_date_range(start, Some(end)), "Jan 2020 - Mar 2022");
    assert_eq!(format_date_range(start, None), "Jan 2020 - Present");
  }
}
