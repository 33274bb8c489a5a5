//! Solver error type.
//!
//! Unreachable pairs and exhausted iteration budgets are not errors: they are
//! reported through [`RouteOutcome::Unreachable`](crate::RouteOutcome) and
//! [`FlowResult::converged`](crate::FlowResult) respectively.

use thiserror::Error;

use sr_core::NodeId;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("node {0} has no row in the linear system")]
    NodeNotInSystem(NodeId),

    #[error("node {0} not found in graph")]
    NodeNotInGraph(NodeId),

    #[error("invalid solver configuration: {0}")]
    Config(String),
}

pub type SolverResult<T> = Result<T, SolverError>;
