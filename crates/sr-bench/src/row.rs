//! Plain data rows produced by the harness.

use std::time::Duration;

use serde::{Serialize, Serializer};

use sr_solver::EngineKind;

fn as_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Timing and mean score of one engine over one workload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineStats {
    /// Wall-clock time for the whole engine pass, including preparation.
    #[serde(rename = "time_s", serialize_with = "as_secs")]
    pub wall_time:   Duration,
    /// Mean metric over reachable pairs; `+inf` when none were reachable.
    pub mean_metric: f64,
}

impl Default for EngineStats {
    fn default() -> Self {
        Self { wall_time: Duration::ZERO, mean_metric: f64::INFINITY }
    }
}

/// One line of the benchmark report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkRow {
    pub workload_size:   usize,
    /// `n * (n - 1) / 2` for `n` endpoints.
    pub total_pairs:     usize,
    pub reachable_pairs: usize,
    pub jacobi:          EngineStats,
    pub gauss_seidel:    EngineStats,
    pub shortest_path:   EngineStats,
}

impl BenchmarkRow {
    pub fn new(workload_size: usize, total_pairs: usize, reachable_pairs: usize) -> Self {
        Self {
            workload_size,
            total_pairs,
            reachable_pairs,
            jacobi:        EngineStats::default(),
            gauss_seidel:  EngineStats::default(),
            shortest_path: EngineStats::default(),
        }
    }

    pub fn stats(&self, kind: EngineKind) -> &EngineStats {
        match kind {
            EngineKind::Jacobi => &self.jacobi,
            EngineKind::GaussSeidel => &self.gauss_seidel,
            EngineKind::ShortestPath => &self.shortest_path,
        }
    }

    pub fn stats_mut(&mut self, kind: EngineKind) -> &mut EngineStats {
        match kind {
            EngineKind::Jacobi => &mut self.jacobi,
            EngineKind::GaussSeidel => &mut self.gauss_seidel,
            EngineKind::ShortestPath => &mut self.shortest_path,
        }
    }
}
