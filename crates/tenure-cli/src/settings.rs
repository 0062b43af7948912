//! Layered configuration: defaults, then the TOML file, then `TENURE_*`
//! environment variables. Command-line flags are applied on top by `main`.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use tenure_core::AggregationStrategy;

/// Where the store lives when nothing else says otherwise.
pub const DEFAULT_STORE_PATH: &str = "~/.local/share/tenure/tenure.db";

/// Settings read from `tenure.toml` and the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
  pub store_path: PathBuf,
  #[serde(default)]
  pub strategy:   AggregationStrategy,
}

impl CliConfig {
  /// Load configuration. A missing file is not an error.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("store_path", DEFAULT_STORE_PATH)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("TENURE"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise CliConfig")
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reads_toml_file() {
    let path = std::env::temp_dir().join(format!("tenure-config-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(&path, "store_path = \"/tmp/elsewhere.db\"\nstrategy = \"calendar-sum\"\n")
      .unwrap();

    let cfg = CliConfig::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(cfg.store_path, PathBuf::from("/tmp/elsewhere.db"));
    assert_eq!(cfg.strategy, AggregationStrategy::CalendarSum);
  }

  #[test]
  fn expands_home_prefix_only() {
    let abs = Path::new("/var/lib/tenure.db");
    assert_eq!(expand_tilde(abs), abs.to_path_buf());

    let rel = Path::new("data/~/tenure.db");
    assert_eq!(expand_tilde(rel), rel.to_path_buf());

    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        expand_tilde(Path::new("~/tenure.db")),
        PathBuf::from(home).join("tenure.db")
      );
    }
  }
}
