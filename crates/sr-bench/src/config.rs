//! Benchmark configuration.
//!
//! Every field has a default, so a JSON config file only needs to name the
//! values it changes:
//!
//! ```json
//! { "workload_sizes": [10, 20, 40], "seed": 7, "grid": { "node_count": 64,
//!   "lat_range": [30.0, 55.0], "lon_range": [-140.0, 160.0] } }
//! ```

use serde::{Deserialize, Serialize};

use sr_core::LatencyModel;
use sr_solver::RelaxationConfig;
use sr_solver::relaxation::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use sr_topology::GridSpec;

use crate::{BenchError, BenchResult};

pub const DEFAULT_WORKLOAD_SIZES: [usize; 7] = [10, 30, 50, 70, 90, 150, 200];
pub const DEFAULT_SEED: u64 = 42;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub grid:           GridSpec,
    pub latency:        LatencyModel,
    /// Endpoint counts to sweep, strictly ascending.
    pub workload_sizes: Vec<usize>,
    /// Master seed; each workload size derives its own stream from it.
    pub seed:           u64,
    pub tolerance:      f64,
    pub max_iterations: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            grid:           GridSpec::default(),
            latency:        LatencyModel::default(),
            workload_sizes: DEFAULT_WORKLOAD_SIZES.to_vec(),
            seed:           DEFAULT_SEED,
            tolerance:      DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl BenchConfig {
    pub fn relaxation(&self) -> RelaxationConfig {
        RelaxationConfig::new(self.tolerance, self.max_iterations)
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.grid.node_count == 0 {
            return Err(BenchError::Config("grid.node_count must be at least 1".into()));
        }
        if self.workload_sizes.is_empty() {
            return Err(BenchError::Config("workload_sizes is empty".into()));
        }
        if self.workload_sizes[0] == 0 {
            return Err(BenchError::Config("workload sizes must be at least 1".into()));
        }
        if self.workload_sizes.windows(2).any(|w| w[0] >= w[1]) {
            return Err(BenchError::Config(format!(
                "workload_sizes must be strictly ascending, got {:?}",
                self.workload_sizes
            )));
        }
        self.latency.validate().map_err(|e| BenchError::Config(e.to_string()))?;
        self.relaxation()
            .validate()
            .map_err(|e| BenchError::Config(e.to_string()))
    }
}
