//! Engine selection and per-graph preparation.
//!
//! The harness never calls a solver directly.  It prepares one
//! [`PreparedEngine`] per [`EngineKind`] against the graph (building the
//! Laplacian once for the relaxation engines) and then routes every pair
//! through [`PreparedEngine::route`].

use std::fmt;

use sr_core::NodeId;
use sr_graph::{LaplacianSystem, WeightedGraph};

use crate::{
    shortest_path, solve_gauss_seidel, solve_jacobi, RelaxationConfig, RouteOutcome,
    SolverResult,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EngineKind {
    Jacobi,
    GaussSeidel,
    ShortestPath,
}

impl EngineKind {
    /// Every engine, in report column order.
    pub const ALL: [EngineKind; 3] = [EngineKind::Jacobi, EngineKind::GaussSeidel, EngineKind::ShortestPath];

    /// Stable snake_case name used in report headers and logs.
    pub fn name(self) -> &'static str {
        match self {
            EngineKind::Jacobi => "jacobi",
            EngineKind::GaussSeidel => "gauss_seidel",
            EngineKind::ShortestPath => "shortest_path",
        }
    }

    /// Position in [`EngineKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for the engines that score by potential-field flow.
    pub fn is_relaxation(self) -> bool {
        !matches!(self, EngineKind::ShortestPath)
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An engine bound to one graph, ready to route pairs.
#[derive(Debug)]
pub enum PreparedEngine<'g> {
    Jacobi { system: LaplacianSystem, config: RelaxationConfig },
    GaussSeidel { system: LaplacianSystem, config: RelaxationConfig },
    ShortestPath { graph: &'g WeightedGraph },
}

impl<'g> PreparedEngine<'g> {
    /// Validate `config` and do any per-graph setup `kind` needs.
    pub fn prepare(
        kind: EngineKind,
        graph: &'g WeightedGraph,
        config: RelaxationConfig,
    ) -> SolverResult<Self> {
        config.validate()?;
        Ok(match kind {
            EngineKind::Jacobi => {
                PreparedEngine::Jacobi { system: LaplacianSystem::from_graph(graph), config }
            }
            EngineKind::GaussSeidel => {
                PreparedEngine::GaussSeidel { system: LaplacianSystem::from_graph(graph), config }
            }
            EngineKind::ShortestPath => PreparedEngine::ShortestPath { graph },
        })
    }

    pub fn kind(&self) -> EngineKind {
        match self {
            PreparedEngine::Jacobi { .. } => EngineKind::Jacobi,
            PreparedEngine::GaussSeidel { .. } => EngineKind::GaussSeidel,
            PreparedEngine::ShortestPath { .. } => EngineKind::ShortestPath,
        }
    }

    /// Route one pair.  The caller is expected to have checked reachability;
    /// an unreachable pair passed to a relaxation engine solves on the
    /// source's component and produces a meaningless field.
    pub fn route(&self, source: NodeId, target: NodeId) -> SolverResult<RouteOutcome> {
        match self {
            PreparedEngine::Jacobi { system, config } => {
                solve_jacobi(system, source, target, config).map(RouteOutcome::Flow)
            }
            PreparedEngine::GaussSeidel { system, config } => {
                solve_gauss_seidel(system, source, target, config).map(RouteOutcome::Flow)
            }
            PreparedEngine::ShortestPath { graph } => {
                let path = shortest_path(graph, source, target)?;
                Ok(if path.is_reachable() { RouteOutcome::Path(path) } else { RouteOutcome::Unreachable })
            }
        }
    }
}
