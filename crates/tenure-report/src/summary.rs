//! The experience summary documents.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tenure_core::{
  AggregationStrategy, aggregate_with,
  format::{format_aggregate, format_compact},
  interval::{Interval, Role, career_start, sort_newest_first},
};

use crate::{Result, html::HtmlWriter};

const PRINT_CSS: &str = "
body { font-family: Arial, sans-serif; margin: 20px; color: #333; }
.header { text-align: center; margin-bottom: 30px; border-bottom: 2px solid #007bff; padding-bottom: 20px; }
.summary { background: #f8f9fa; padding: 20px; border-radius: 8px; margin-bottom: 30px; }
.experience { border-bottom: 1px solid #ddd; padding: 15px 0; }
.experience:last-child { border-bottom: none; }
.title { font-weight: bold; font-size: 1.1em; color: #007bff; }
.company { color: #666; }
.dates { color: #888; font-size: 0.9em; margin-top: 5px; }
.duration { float: right; background: #e9ecef; padding: 5px 10px; border-radius: 15px; font-size: 0.9em; }
.no-experiences { text-align: center; color: #666; font-style: italic; padding: 20px; }
.footer { margin-top: 40px; text-align: center; color: #666; font-size: 0.9em; }
@media print {
  body { margin: 0; }
  .header { page-break-after: avoid; }
}
";

const PDF_CSS: &str = "
@page { size: A4; margin: 0.75in; }
body { font-family: Segoe UI, Tahoma, Geneva, Verdana, sans-serif; line-height: 1.4; color: #333; margin: 0; padding: 0; background: white; }
.header { text-align: center; margin-bottom: 40px; border-bottom: 3px solid #007bff; padding-bottom: 20px; page-break-after: avoid; }
.header h1 { color: #007bff; font-size: 28px; margin-bottom: 10px; font-weight: bold; }
.header .subtitle { color: #666; font-size: 14px; margin-bottom: 5px; }
.summary { background: #f8f9fa; padding: 20px; border-radius: 8px; margin-bottom: 30px; border-left: 4px solid #28a745; page-break-inside: avoid; }
.summary h2 { color: #28a745; font-size: 20px; margin-bottom: 15px; }
.summary-item { margin-bottom: 10px; font-size: 14px; }
.experiences h2 { color: #007bff; font-size: 22px; margin-bottom: 25px; border-bottom: 2px solid #007bff; padding-bottom: 8px; }
.experience { border: 1px solid #e9ecef; border-radius: 8px; padding: 20px; margin-bottom: 20px; background: white; page-break-inside: avoid; position: relative; }
.experience:nth-child(even) { background: #f8f9fa; }
.experience.current-job { border-left: 4px solid #28a745; }
.duration-badge { position: absolute; top: 15px; right: 15px; background: #007bff; color: white; padding: 6px 12px; border-radius: 20px; font-size: 12px; font-weight: bold; }
.experience-title { font-weight: bold; font-size: 18px; color: #007bff; margin-bottom: 8px; margin-right: 120px; }
.company-info { color: #666; font-size: 14px; margin-bottom: 10px; }
.date-range { color: #888; font-size: 13px; }
.no-experiences { text-align: center; color: #666; font-style: italic; padding: 40px; }
.footer { margin-top: 50px; text-align: center; color: #999; font-size: 12px; border-top: 1px solid #eee; padding-top: 20px; }
";

const FOOTER: &str = "Generated by Employee Experience Calculator";
const NO_RECORDS: &str = "No experience records found.";

/// Which document to produce.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportStyle {
  /// Compact page meant for the browser's print dialog.
  #[default]
  Print,
  /// A4 layout meant for "save as PDF", with career start and export stamp.
  Pdf,
}

/// Evaluation inputs shared by every line of a report.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext {
  /// Evaluation date for ongoing intervals; also the "generated on" date.
  pub as_of:        NaiveDate,
  pub strategy:     AggregationStrategy,
  pub generated_at: DateTime<Utc>,
}

/// Render `intervals` as a complete HTML document.
///
/// Entries are listed newest first; the input order is not changed.
pub fn render(intervals: &[Interval], ctx: &ReportContext, style: ReportStyle) -> Result<String> {
  let total = format_aggregate(&aggregate_with(intervals, ctx.as_of, ctx.strategy)?);

  let mut sorted = intervals.to_vec();
  sort_newest_first(&mut sorted);

  let mut w = HtmlWriter::new()?;
  w.start("html")?;
  write_head(&mut w, style)?;
  w.start("body")?;

  match style {
    ReportStyle::Print => {
      w.start_class("div", "header")?;
      w.text_elem("h1", "Work Experience Summary")?;
      w.text_elem("p", &format!("Generated on {}", ctx.as_of.format("%-m/%-d/%Y")))?;
      w.end("div")?;

      w.start_class("div", "summary")?;
      w.text_elem("h2", "Total Experience Overview")?;
      w.labelled("p", None, "Total Experience:", &total)?;
      w.labelled("p", None, "Number of Positions:", &intervals.len().to_string())?;
      w.end("div")?;

      w.start_class("div", "experiences")?;
      w.text_elem("h2", "Experience Details")?;
      if sorted.is_empty() {
        w.class_elem("div", "no-experiences", NO_RECORDS)?;
      }
      for interval in &sorted {
        write_print_entry(&mut w, interval, ctx.as_of)?;
      }
      w.end("div")?;

      w.start_class("div", "footer")?;
      w.text_elem("p", FOOTER)?;
      w.end("div")?;
    }
    ReportStyle::Pdf => {
      w.start_class("div", "header")?;
      w.text_elem("h1", "Work Experience Summary")?;
      w.class_elem("div", "subtitle", "Professional Experience Report")?;
      w.class_elem(
        "div",
        "subtitle",
        &format!("Generated on {}", ctx.as_of.format("%A, %B %-d, %Y")),
      )?;
      w.end("div")?;

      let start = career_start(intervals)
        .map_or_else(|| "N/A".to_owned(), |d| d.format("%B %Y").to_string());

      w.start_class("div", "summary")?;
      w.text_elem("h2", "Summary Overview")?;
      w.labelled("div", Some("summary-item"), "Total Experience:", &total)?;
      w.labelled("div", Some("summary-item"), "Number of Positions:", &intervals.len().to_string())?;
      w.labelled("div", Some("summary-item"), "Career Start:", &start)?;
      w.end("div")?;

      w.start_class("div", "experiences")?;
      w.text_elem("h2", "Detailed Experience History")?;
      if sorted.is_empty() {
        w.class_elem("div", "no-experiences", NO_RECORDS)?;
      }
      for interval in &sorted {
        write_pdf_entry(&mut w, interval, ctx.as_of)?;
      }
      w.end("div")?;

      w.start_class("div", "footer")?;
      w.text_elem("p", FOOTER)?;
      w.text_elem(
        "p",
        &format!(
          "Export Date: {}",
          ctx.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
      )?;
      w.end("div")?;
    }
  }

  w.end("body")?;
  w.end("html")?;
  w.finish()
}

fn write_head(w: &mut HtmlWriter, style: ReportStyle) -> Result<()> {
  let (title, css) = match style {
    ReportStyle::Print => ("Experience Summary", PRINT_CSS),
    ReportStyle::Pdf => ("Work Experience Summary - PDF Export", PDF_CSS),
  };
  w.start("head")?;
  w.empty("meta", &[("charset", "utf-8")])?;
  w.text_elem("title", title)?;
  w.start("style")?;
  w.raw(css)?;
  w.end("style")?;
  w.end("head")
}

fn write_print_entry(w: &mut HtmlWriter, interval: &Interval, as_of: NaiveDate) -> Result<()> {
  let duration = interval.duration(as_of)?;

  w.start_class("div", "experience")?;
  w.class_elem("div", "duration", &format_compact(&duration))?;
  match &interval.role {
    Role::Quick { job_title } => w.class_elem("div", "title", job_title)?,
    Role::Detailed { company_name, position } => {
      w.class_elem("div", "title", company_name)?;
      w.class_elem("div", "company", &format!("{company_name} - {position}"))?;
    }
  }

  let start = interval.start_date.format("%-m/%-d/%Y");
  let dates = match interval.end_date {
    Some(end) if !interval.is_ongoing => format!("{start} - {}", end.format("%-m/%-d/%Y")),
    _ => format!("{start} - Present (Current Position)"),
  };
  w.class_elem("div", "dates", &dates)?;
  w.end("div")
}

fn write_pdf_entry(w: &mut HtmlWriter, interval: &Interval, as_of: NaiveDate) -> Result<()> {
  let duration = interval.duration(as_of)?;
  let class = if interval.is_ongoing { "experience current-job" } else { "experience" };

  w.start_class("div", class)?;
  w.class_elem("div", "duration-badge", &format_compact(&duration))?;
  w.class_elem("div", "experience-title", interval.role.title())?;
  match interval.role.company() {
    Some(company) => w.class_elem("div", "company-info", company)?,
    None => w.class_elem("div", "company-info", "Quick Mode Entry")?,
  }

  let start = interval.start_date.format("%b %Y");
  let dates = match interval.end_date {
    Some(end) if !interval.is_ongoing => format!("{start} - {}", end.format("%b %Y")),
    _ => format!("{start} - Present (Current Position)"),
  };
  w.class_elem("div", "date-range", &dates)?;
  w.end("div")
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;
  use tenure_core::interval::NewInterval;
  use uuid::Uuid;

  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn ctx() -> ReportContext {
    ReportContext {
      as_of:        date(2023, 6, 1),
      strategy:     AggregationStrategy::AverageBased,
      generated_at: Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap(),
    }
  }

  fn sample() -> Vec<Interval> {
    vec![
      NewInterval::closed(date(2018, 1, 1), date(2020, 1, 1))
        .with_role(Role::detailed("Acme & Sons", "Engineer"))
        .into_interval(Uuid::new_v4(), Utc::now()),
      NewInterval::ongoing(date(2021, 6, 1))
        .with_role(Role::quick(Some("Consultant".into())))
        .into_interval(Uuid::new_v4(), Utc::now()),
    ]
  }

  #[test]
  fn print_report_lists_newest_first() {
    let html = render(&sample(), &ctx(), ReportStyle::Print).unwrap();

    assert!(html.contains("<title>Experience Summary</title>"));
    assert!(html.contains("Generated on 6/1/2023"));
    assert!(html.contains("<strong>Total Experience:</strong> 3 years, 11 months, 29 days"));
    assert!(html.contains("<strong>Number of Positions:</strong> 2"));
    assert!(html.contains("6/1/2021 - Present (Current Position)"));
    assert!(html.contains("Acme &amp; Sons - Engineer"));

    let consultant = html.find("Consultant").unwrap();
    let acme = html.find("Acme &amp; Sons").unwrap();
    assert!(consultant < acme);
  }

  #[test]
  fn pdf_report_has_career_start_and_export_stamp() {
    let html = render(&sample(), &ctx(), ReportStyle::Pdf).unwrap();

    assert!(html.contains("@page { size: A4; margin: 0.75in; }"));
    assert!(html.contains("Generated on Thursday, June 1, 2023"));
    assert!(html.contains("<strong>Career Start:</strong> January 2018"));
    assert!(html.contains(r#"<div class="experience current-job">"#));
    assert!(html.contains(r#"<div class="duration-badge">2y 0m 0d</div>"#));
    assert!(html.contains("Jun 2021 - Present (Current Position)"));
    assert!(html.contains("Export Date: 2023-06-01T12:00:00.000Z"));
  }

  #[test]
  fn empty_reports_say_so() {
    for style in [ReportStyle::Print, ReportStyle::Pdf] {
      let html = render(&[], &ctx(), style).unwrap();
      assert!(html.contains(NO_RECORDS));
      assert!(html.contains("0 years, 0 months, 0 days"));
    }
    let html = render(&[], &ctx(), ReportStyle::Pdf).unwrap();
    assert!(html.contains("<strong>Career Start:</strong> N/A"));
  }

  #[test]
  fn style_parses_lowercase() {
    assert_eq!("pdf".parse::<ReportStyle>().unwrap(), ReportStyle::Pdf);
  }
}
