//! Input checks applied before an interval reaches the store or the engine.
//!
//! Once an interval has passed [`validate`], `start <= effective end <= today`
//! holds and the engine cannot return [`Error::InvalidRange`] for it while
//! evaluated on or after `today`.

use chrono::NaiveDate;

use crate::{
  Error, Result,
  interval::{NewInterval, Role},
};

/// Check `input` against the calendar date `today`.
///
/// Checks run in a fixed order and the first failure is returned.
pub fn validate(input: &NewInterval, today: NaiveDate) -> Result<()> {
  if let Role::Detailed { company_name, position } = &input.role
    && (company_name.trim().is_empty() || position.trim().is_empty())
  {
    return Err(Error::MissingDetails);
  }

  match (input.is_ongoing, input.end_date) {
    (false, None) => return Err(Error::MissingEndDate),
    (true, Some(_)) => return Err(Error::ConflictingEnd),
    _ => {}
  }

  if input.start_date > today {
    return Err(Error::StartInFuture(input.start_date));
  }

  if let Some(end) = input.end_date {
    if end < input.start_date {
      return Err(Error::EndBeforeStart { start: input.start_date, end });
    }
    if end > today {
      return Err(Error::EndInFuture(end));
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
  }

  #[test]
  fn accepts_closed_and_ongoing() {
    assert!(validate(&NewInterval::closed(date(2020, 1, 1), date(2021, 1, 1)), today()).is_ok());
    assert!(validate(&NewInterval::ongoing(date(2020, 1, 1)), today()).is_ok());
    assert!(validate(&NewInterval::closed(today(), today()), today()).is_ok());
  }

  #[test]
  fn detailed_mode_needs_company_and_position() {
    let input = NewInterval::ongoing(date(2020, 1, 1)).with_role(Role::detailed("Acme", " "));
    assert!(matches!(validate(&input, today()), Err(Error::MissingDetails)));
  }

  #[test]
  fn closed_interval_needs_end_date() {
    let mut input = NewInterval::ongoing(date(2020, 1, 1));
    input.is_ongoing = false;
    assert!(matches!(validate(&input, today()), Err(Error::MissingEndDate)));
  }

  #[test]
  fn ongoing_interval_rejects_end_date() {
    let mut input = NewInterval::ongoing(date(2020, 1, 1));
    input.end_date = Some(date(2021, 1, 1));
    assert!(matches!(validate(&input, today()), Err(Error::ConflictingEnd)));
  }

  #[test]
  fn start_in_future() {
    let input = NewInterval::ongoing(date(2024, 5, 11));
    assert!(matches!(validate(&input, today()), Err(Error::StartInFuture(_))));
  }

  #[test]
  fn end_before_start() {
    let input = NewInterval::closed(date(2022, 1, 2), date(2022, 1, 1));
    assert!(matches!(validate(&input, today()), Err(Error::EndBeforeStart { .. })));
  }

  #[test]
  fn end_in_future() {
    let input = NewInterval::closed(date(2022, 1, 1), date(2024, 5, 11));
    assert!(matches!(validate(&input, today()), Err(Error::EndInFuture(_))));
  }

  #[test]
  fn messages_match_user_facing_wording() {
    let input = NewInterval::closed(date(2022, 1, 2), date(2022, 1, 1));
    let err = validate(&input, today()).unwrap_err();
    assert_eq!(err.to_string(), "End date cannot be before start date.");
  }
}
