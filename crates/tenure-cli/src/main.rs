//! `tenure` — record work periods and total the experience they add up to.
//!
//! # Usage
//!
//! ```text
//! tenure add --start 2018-01-01 --end 2020-01-01 --title "Developer"
//! tenure add --start 2021-06-01 --current --company Acme --position Engineer
//! tenure total
//! tenure report --style pdf --output summary.html
//! ```

mod app;
mod settings;

use std::{
  io::{self, BufRead, Write},
  path::PathBuf,
};

use anyhow::{Context, Result};
use app::App;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use settings::{CliConfig, expand_tilde};
use tenure_core::{
  AggregationStrategy,
  interval::{NewInterval, Role},
};
use tenure_report::ReportStyle;
use tenure_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tenure", version, about = "Track and total work experience")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "tenure.toml")]
  config: PathBuf,

  /// Path to the SQLite store (overrides `store_path` from the config).
  #[arg(long, value_name = "FILE")]
  store: Option<PathBuf>,

  /// Evaluate ongoing entries and validate dates as of this day
  /// (default: today's local date).
  #[arg(long, value_name = "YYYY-MM-DD")]
  as_of: Option<NaiveDate>,

  /// How totals are decomposed: `average-based` or `calendar-sum`.
  #[arg(long)]
  strategy: Option<AggregationStrategy>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Record a new period of experience.
  Add(AddArgs),
  /// List recorded periods, newest first.
  List {
    #[arg(long)]
    json: bool,
  },
  /// Delete one period by id.
  Remove { id: Uuid },
  /// Delete every recorded period.
  Clear {
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    yes: bool,
  },
  /// Show the total experience across all periods.
  Total {
    #[arg(long)]
    json: bool,
  },
  /// Write a printable HTML summary.
  Report {
    #[arg(long, default_value_t = ReportStyle::Print)]
    style:  ReportStyle,
    /// Write to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
  },
}

#[derive(Args, Debug)]
struct AddArgs {
  #[arg(long, value_name = "YYYY-MM-DD")]
  start:    NaiveDate,
  #[arg(long, value_name = "YYYY-MM-DD")]
  end:      Option<NaiveDate>,
  /// The position is still held; the period runs to the evaluation date.
  #[arg(long)]
  current:  bool,
  /// Job title for a quick entry.
  #[arg(long, conflicts_with_all = ["company", "position"])]
  title:    Option<String>,
  /// Company name; makes this a detailed entry.
  #[arg(long)]
  company:  Option<String>,
  /// Position held; makes this a detailed entry.
  #[arg(long)]
  position: Option<String>,
}

impl AddArgs {
  fn into_new_interval(self) -> NewInterval {
    let role = if self.company.is_some() || self.position.is_some() {
      Role::detailed(self.company.unwrap_or_default(), self.position.unwrap_or_default())
    } else {
      Role::quick(self.title)
    };
    NewInterval {
      start_date: self.start,
      end_date: self.end,
      is_ongoing: self.current,
      role,
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let cfg = CliConfig::load(&cli.config)?;

  let store_path = expand_tilde(cli.store.as_deref().unwrap_or(&cfg.store_path));
  if let Some(parent) = store_path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
  let strategy = cli.strategy.unwrap_or(cfg.strategy);
  tracing::debug!(?store_path, %as_of, %strategy, "starting");

  let app = App::new(store, as_of, strategy);
  let mut out = io::stdout().lock();

  match cli.command {
    Command::Add(args) => {
      app.add(args.into_new_interval(), &mut out).await?;
    }
    Command::List { json } => app.list(json, &mut out).await?,
    Command::Remove { id } => app.remove(id, &mut out).await?,
    Command::Clear { yes } => {
      if yes || confirm("Are you sure you want to clear all experience data? This cannot be undone.")? {
        app.clear(&mut out).await?;
      } else {
        writeln!(out, "Cancelled.")?;
      }
    }
    Command::Total { json } => app.total(json, &mut out).await?,
    Command::Report { style, output } => match output {
      Some(path) => {
        let mut file = std::fs::File::create(&path)
          .with_context(|| format!("failed to create {}", path.display()))?;
        app.report(style, &mut file).await?;
        writeln!(out, "Report written to {}", path.display())?;
      }
      None => app.report(style, &mut out).await?,
    },
  }

  Ok(())
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
fn confirm(question: &str) -> Result<bool> {
  eprint!("{question} [y/N] ");
  io::stderr().flush().ok();
  let mut line = String::new();
  io::stdin().lock().read_line(&mut line)?;
  Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
