//! Configuration for the atlas server
//!
//! An optional YAML file provides the base; command-line flags override it.
//!
//! ```yaml
//! bind: 0.0.0.0:8000
//! stats_cache:
//!   ttl_secs: 60
//!   max_entries: 256
//! seed:
//!   dataset: data/heroes.json
//!   generate_heroes: 100
//!   rng_seed: 42
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

#[derive(Parser, Debug, Default)]
#[command(name = "atlas")]
#[command(about = "Hero Atlas - Read API over heroes, regions and skills")]
#[command(version)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,

    /// JSON dataset to load at startup
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Generate this many random heroes at startup
    #[arg(long, value_name = "COUNT")]
    pub generate: Option<usize>,

    /// Seed for the random generator
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub stats_cache: StatsCacheConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsCacheConfig {
    pub ttl_secs: u64,
    pub max_entries: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    pub dataset: Option<PathBuf>,
    pub generate_heroes: Option<usize>,
    pub rng_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            stats_cache: StatsCacheConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

impl Default for StatsCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 60,
            max_entries: 256,
        }
    }
}

impl StatsCacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// File named by `--config` (or defaults), then flag overrides
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(bind) = cli.bind {
            self.bind = bind;
        }
        if let Some(dataset) = &cli.dataset {
            self.seed.dataset = Some(dataset.clone());
        }
        if let Some(count) = cli.generate {
            self.seed.generate_heroes = Some(count);
        }
        if let Some(seed) = cli.seed {
            self.seed.rng_seed = Some(seed);
        }
        self
    }
}
