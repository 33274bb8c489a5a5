//! Per-pair engine outputs.

use sr_core::NodeId;

// ── FlowResult ────────────────────────────────────────────────────────────────

/// Potential field produced by a relaxation solve.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowResult {
    /// `(node, potential)` for every node in the linear system, ascending by
    /// node id.
    pub potentials: Vec<(NodeId, f64)>,
    /// Sum of absolute potentials over all nodes.
    pub total_flow: f64,
    /// Sweeps performed.
    pub iterations: usize,
    /// `false` if the iteration cap was hit before the tolerance was met.
    pub converged:  bool,
}

impl FlowResult {
    pub(crate) fn new(nodes: &[NodeId], x: Vec<f64>, iterations: usize, converged: bool) -> Self {
        let total_flow = x.iter().map(|v| v.abs()).sum();
        let potentials = nodes.iter().copied().zip(x).collect();
        Self { potentials, total_flow, iterations, converged }
    }

    /// Potential of `node`, or `None` if it is not part of the system.
    pub fn potential(&self, node: NodeId) -> Option<f64> {
        self.potentials
            .binary_search_by_key(&node, |&(n, _)| n)
            .ok()
            .map(|i| self.potentials[i].1)
    }

    /// Entries whose magnitude exceeds `threshold`.
    pub fn significant(&self, threshold: f64) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.potentials.iter().copied().filter(move |(_, f)| f.abs() > threshold)
    }
}

// ── PathResult ────────────────────────────────────────────────────────────────

/// Minimum-latency path between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Nodes from source to target inclusive.  Empty when unreachable.
    pub nodes:            Vec<NodeId>,
    /// Sum of link latencies along `nodes`, ms.  `+inf` when unreachable.
    pub total_latency_ms: f64,
}

impl PathResult {
    /// The no-path sentinel.
    pub fn unreachable() -> Self {
        Self { nodes: Vec::new(), total_latency_ms: f64::INFINITY }
    }

    pub fn is_reachable(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Links traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

// ── RouteOutcome ──────────────────────────────────────────────────────────────

/// What one engine produced for one pair.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Flow(FlowResult),
    Path(PathResult),
    /// Source and target lie in different components; no engine was run.
    Unreachable,
}

impl RouteOutcome {
    /// The engine's scalar score: `total_flow`, total latency, or `+inf`.
    pub fn metric(&self) -> f64 {
        match self {
            RouteOutcome::Flow(f) => f.total_flow,
            RouteOutcome::Path(p) => p.total_latency_ms,
            RouteOutcome::Unreachable => f64::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        match self {
            RouteOutcome::Flow(_) => true,
            RouteOutcome::Path(p) => p.is_reachable(),
            RouteOutcome::Unreachable => false,
        }
    }

    pub fn flow(&self) -> Option<&FlowResult> {
        match self {
            RouteOutcome::Flow(f) => Some(f),
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&PathResult> {
        match self {
            RouteOutcome::Path(p) if p.is_reachable() => Some(p),
            _ => None,
        }
    }
}

// ── NodeUsage ─────────────────────────────────────────────────────────────────

/// How many chosen shortest paths pass through each node, endpoints included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeUsage {
    counts: Vec<u32>,
}

impl NodeUsage {
    pub fn new(node_count: usize) -> Self {
        Self { counts: vec![0; node_count] }
    }

    /// Count every node of `path`.  Unreachable sentinels add nothing.
    pub fn record(&mut self, path: &PathResult) {
        for node in &path.nodes {
            if let Some(c) = self.counts.get_mut(node.index()) {
                *c += 1;
            }
        }
    }

    pub fn get(&self, node: NodeId) -> u32 {
        self.counts.get(node.index()).copied().unwrap_or(0)
    }

    /// Total node visits recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// The `k` busiest nodes, most used first; ties by ascending id.  Unused
    /// nodes are never listed.
    pub fn busiest(&self, k: usize) -> Vec<(NodeId, u32)> {
        let mut used: Vec<(NodeId, u32)> = self
            .counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (NodeId(i as u32), c))
            .collect();
        used.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        used.truncate(k);
        used
    }
}
