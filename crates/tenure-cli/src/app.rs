//! Command implementations, generic over the record store.
//!
//! The interval list is loaded fresh for every command and handed to the
//! engine as a slice; nothing is cached between commands.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tenure_core::{
  AggregateDuration, AggregationStrategy, Duration, aggregate_with,
  format::{format_aggregate, format_date_range, format_duration},
  interval::{Interval, NewInterval, sort_newest_first},
  store::RecordStore,
  validate::validate,
};
use tenure_report::{ReportContext, ReportStyle};
use uuid::Uuid;

/// One row of `list --json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListedInterval<'a> {
  #[serde(flatten)]
  interval:      &'a Interval,
  duration:      Duration,
  duration_text: String,
}

/// Output of `total --json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TotalSummary {
  as_of:     NaiveDate,
  strategy:  AggregationStrategy,
  positions: usize,
  aggregate: AggregateDuration,
  text:      String,
}

pub struct App<S: RecordStore> {
  store:    S,
  /// Evaluation date; also "today" for validation.
  as_of:    NaiveDate,
  strategy: AggregationStrategy,
}

impl<S: RecordStore> App<S> {
  pub fn new(store: S, as_of: NaiveDate, strategy: AggregationStrategy) -> Self {
    Self { store, as_of, strategy }
  }

  pub async fn add(&self, input: NewInterval, out: &mut impl Write) -> Result<Interval> {
    validate(&input, self.as_of)?;
    let interval = self.store.add_interval(input).await?;
    tracing::info!(id = %interval.interval_id, "interval added");

    writeln!(
      out,
      "Experience added: {} ({}) [{}]",
      interval.role.title(),
      format_duration(&interval.duration(self.as_of)?),
      interval.interval_id,
    )?;
    Ok(interval)
  }

  pub async fn list(&self, json: bool, out: &mut impl Write) -> Result<()> {
    let mut intervals = self.store.list_intervals().await?;
    sort_newest_first(&mut intervals);

    if json {
      let rows = intervals
        .iter()
        .map(|interval| {
          let duration = interval.duration(self.as_of)?;
          Ok(ListedInterval {
            interval,
            duration,
            duration_text: format_duration(&duration),
          })
        })
        .collect::<Result<Vec<_>>>()?;
      serde_json::to_writer_pretty(&mut *out, &rows).context("writing JSON")?;
      writeln!(out)?;
      return Ok(());
    }

    if intervals.is_empty() {
      writeln!(out, "No experience added yet. Add your first job with `tenure add`.")?;
      return Ok(());
    }

    for interval in &intervals {
      let label = match interval.role.company() {
        Some(company) => format!("{} @ {company}", interval.role.title()),
        None => interval.role.title().to_owned(),
      };
      let end = if interval.is_ongoing { None } else { interval.end_date };
      writeln!(
        out,
        "{}  {label}  {}  {}",
        interval.interval_id,
        format_date_range(interval.start_date, end),
        format_duration(&interval.duration(self.as_of)?),
      )?;
    }
    Ok(())
  }

  pub async fn remove(&self, id: Uuid, out: &mut impl Write) -> Result<()> {
    let removed = self.store.remove_interval(id).await?;
    tracing::info!(id = %removed.interval_id, "interval removed");
    writeln!(out, "Experience deleted: {}", removed.role.title())?;
    Ok(())
  }

  pub async fn clear(&self, out: &mut impl Write) -> Result<()> {
    let count = self.store.clear().await?;
    tracing::info!(count, "store cleared");
    writeln!(out, "All experience data cleared ({count} removed).")?;
    Ok(())
  }

  pub async fn total(&self, json: bool, out: &mut impl Write) -> Result<()> {
    let intervals = self.store.list_intervals().await?;
    let aggregate = aggregate_with(&intervals, self.as_of, self.strategy)?;
    let text = format_aggregate(&aggregate);

    if json {
      let summary = TotalSummary {
        as_of: self.as_of,
        strategy: self.strategy,
        positions: intervals.len(),
        aggregate,
        text,
      };
      serde_json::to_writer_pretty(&mut *out, &summary).context("writing JSON")?;
      writeln!(out)?;
    } else {
      writeln!(out, "Total experience: {text}")?;
      writeln!(out, "Number of positions: {}", intervals.len())?;
    }
    Ok(())
  }

  /// Render a report document into `out`.
  pub async fn report(&self, style: ReportStyle, out: &mut impl Write) -> Result<()> {
    let intervals = self.store.list_intervals().await?;
    let ctx = ReportContext {
      as_of:        self.as_of,
      strategy:     self.strategy,
      generated_at: Utc::now(),
    };
    let html = tenure_report::render(&intervals, &ctx, style)?;
    out.write_all(html.as_bytes())?;
    Ok(())
  }
}
