//! Error types for sr-bench.

use thiserror::Error;

use sr_core::EndpointId;
use sr_graph::GraphError;
use sr_solver::SolverError;
use sr_topology::TopologyError;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("workload has no endpoints")]
    DegenerateWorkload,

    #[error("endpoint {0} has no anchor node")]
    MissingAnchor(EndpointId),

    #[error("invalid benchmark configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, BenchError>`.
pub type BenchResult<T> = Result<T, BenchError>;
