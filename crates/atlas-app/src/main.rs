//! # Hero Atlas - Read API over heroes, regions and skills
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Creates: InMemoryAtlasStore (adapter)                   │
//! │    ├── Seeds:   dataset file and/or random generator (adapter) │
//! │    ├── Creates: AtlasCatalogs + StatsCache (use cases)         │
//! │    └── Runs:    axum HTTP server (adapter)                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod config;

use std::sync::Arc;

use anyhow::Context;
use atlas_adapter::controller::http::router;
use atlas_adapter::repository::in_memory::InMemoryAtlasStore;
use atlas_adapter::seed::dataset::load_dataset;
use atlas_adapter::seed::generator::DatasetGenerator;
use atlas_adapter::seed::Repositories;
use atlas_usecase::{AtlasCatalogs, StatsCache};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, Cli, SeedConfig};

const DEFAULT_LOG_FILTER: &str = "atlas=info,atlas_adapter=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli)?;

    info!("Hero Atlas starting");

    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    let store = InMemoryAtlasStore::new();
    seed(&Repositories::from(&store), &config.seed)?;

    let stats_cache = StatsCache::new(config.stats_cache.max_entries, config.stats_cache.ttl());
    let catalogs = AtlasCatalogs::new(store.heroes(), store.regions(), store.skills(), stats_cache);
    let app = router(Arc::new(catalogs));

    // ========================================
    // Serve
    // ========================================

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %config.bind, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Fill the store: dataset file first, then random heroes on top
fn seed(repos: &Repositories, seed: &SeedConfig) -> anyhow::Result<()> {
    if let Some(path) = &seed.dataset {
        load_dataset(path, repos)
            .with_context(|| format!("failed to load dataset {}", path.display()))?;
    }

    if let Some(count) = seed.generate_heroes {
        let mut generator = match seed.rng_seed {
            Some(rng_seed) => DatasetGenerator::with_seed(rng_seed),
            None => DatasetGenerator::new(),
        };
        generator
            .generate(repos, count)
            .context("failed to generate dataset")?;
    }

    let heroes = repos.heroes.count()?;
    info!(heroes, "store ready");
    Ok(())
}
