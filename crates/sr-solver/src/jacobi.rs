//! Jacobi relaxation: every row of a sweep reads only the previous iterate.
//!
//! On bipartite connectivity (e.g. a path, or an even-orbit constellation)
//! the Jacobi iteration matrix has an eigenvalue of −1, so a period-2
//! component of the error never decays and the solve runs to the cap.
//!
//! On convergence the iterate from the final sweep is returned.  It differs
//! from the one before it by less than `tolerance` in every row.

use tracing::debug;

use sr_core::NodeId;
use sr_graph::LaplacianSystem;

use crate::relaxation::{injection, isolated_self_pair};
use crate::{FlowResult, RelaxationConfig, SolverResult};

pub fn solve_jacobi(
    system: &LaplacianSystem,
    source: NodeId,
    target: NodeId,
    config: &RelaxationConfig,
) -> SolverResult<FlowResult> {
    if let Some(flow) = isolated_self_pair(system, source, target) {
        return Ok(flow);
    }
    let b = injection(system, source, target)?;

    let n = system.dim();
    let diag = system.diagonal();
    let mut x = vec![0.0; n];
    let mut next = vec![0.0; n];
    let mut lx = vec![0.0; n];
    let mut max_delta = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        system.matrix.spmv(&x, &mut lx);
        max_delta = 0.0;
        for i in 0..n {
            // Zero-degree rows cannot be updated; leave them at their value.
            next[i] = if diag[i] == 0.0 { x[i] } else { x[i] + (b[i] - lx[i]) / diag[i] };
            max_delta = max_delta.max((next[i] - x[i]).abs());
        }
        std::mem::swap(&mut x, &mut next);

        if max_delta < config.tolerance {
            return Ok(FlowResult::new(system.nodes(), x, iteration, true));
        }
    }

    debug!(%source, %target, max_delta, cap = config.max_iterations, "jacobi hit iteration cap");
    Ok(FlowResult::new(system.nodes(), x, config.max_iterations, false))
}
