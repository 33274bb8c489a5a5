//! Shared pieces of the Jacobi and Gauss-Seidel solvers.
//!
//! Both solve `L x = b` where `L` is the connectivity Laplacian and
//! `b = e_source - e_target`.  Starting from `x = 0`, each row update is
//!
//! ```text
//! x[i] <- x[i] + (b[i] - sum_j L[i, j] * x[j]) / L[i, i]
//! ```
//!
//! and iteration stops once the largest per-row change in a sweep drops below
//! `tolerance`, or after `max_iterations` sweeps.  `L` is singular (constant
//! vectors span its null space), so the result is one particular solution up
//! to an additive constant.  A capped run is returned as-is with
//! `converged = false`.
//!
//! The injection is written by assignment, target last.  When source and
//! target share a node only the `-1` survives, `b` is no longer orthogonal to
//! the null space, and the iteration drifts until it hits the cap.  A node
//! with no links has no row at all; pairing it with itself behaves like a
//! zero-diagonal row: one sweep, nothing moves, converged.

use sr_core::NodeId;
use sr_graph::LaplacianSystem;

use crate::{FlowResult, SolverError, SolverResult};

pub const DEFAULT_TOLERANCE: f64 = 1e-4;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RelaxationConfig {
    /// Stop when `max_i |x_new[i] - x[i]| < tolerance`.
    pub tolerance:      f64,
    /// Hard cap on sweeps.
    pub max_iterations: usize,
}

impl RelaxationConfig {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self { tolerance, max_iterations }
    }

    pub fn validate(&self) -> SolverResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SolverError::Config(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::Config("max_iterations must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for RelaxationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
    }
}

/// Field for `source == target` on a node outside the system.
pub(crate) fn isolated_self_pair(
    system: &LaplacianSystem,
    source: NodeId,
    target: NodeId,
) -> Option<FlowResult> {
    (source == target && system.row_of(source).is_none())
        .then(|| FlowResult::new(system.nodes(), vec![0.0; system.dim()], 1, true))
}

/// Right-hand side in row space: `b[source] = 1`, then `b[target] = -1`.
pub(crate) fn injection(
    system: &LaplacianSystem,
    source: NodeId,
    target: NodeId,
) -> SolverResult<Vec<f64>> {
    let s = system.row_of(source).ok_or(SolverError::NodeNotInSystem(source))?;
    let t = system.row_of(target).ok_or(SolverError::NodeNotInSystem(target))?;
    let mut b = vec![0.0; system.dim()];
    b[s] = 1.0;
    b[t] = -1.0;
    Ok(b)
}
