//! Shared start-up for the demo binaries.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use memory_stats::memory_stats;
use tracing_subscriber::EnvFilter;

use sr_bench::BenchConfig;

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Load a `BenchConfig` from a JSON file, or the defaults when `path` is
/// `None`.  Missing fields take their default values.
pub fn load_config(path: Option<&Path>) -> Result<BenchConfig> {
    let Some(path) = path else {
        return Ok(BenchConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

pub fn mem_mb() -> f64 {
    memory_stats()
        .map(|s| s.physical_mem as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}
