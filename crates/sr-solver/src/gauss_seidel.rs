//! Gauss-Seidel relaxation: rows are updated in place in ascending row order,
//! so each update already sees the values written earlier in the same sweep.

use tracing::debug;

use sr_core::NodeId;
use sr_graph::LaplacianSystem;

use crate::relaxation::{injection, isolated_self_pair};
use crate::{FlowResult, RelaxationConfig, SolverResult};

pub fn solve_gauss_seidel(
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
    let mut max_delta = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        max_delta = 0.0;
        for i in 0..n {
            if diag[i] == 0.0 {
                continue;
            }
            let updated = x[i] + (b[i] - system.matrix.row_dot(i, &x)) / diag[i];
            max_delta = max_delta.max((updated - x[i]).abs());
            x[i] = updated;
        }

        if max_delta < config.tolerance {
            return Ok(FlowResult::new(system.nodes(), x, iteration, true));
        }
    }

    debug!(%source, %target, max_delta, cap = config.max_iterations, "gauss-seidel hit iteration cap");
    Ok(FlowResult::new(system.nodes(), x, config.max_iterations, false))
}
