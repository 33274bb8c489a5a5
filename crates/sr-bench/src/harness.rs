//! Runs every engine over every endpoint pair of one workload.
//!
//! # Fairness
//!
//! Reachability is decided once per pair from the graph's connected
//! components, outside any timer, and unreachable pairs are never handed to
//! an engine.  Each engine's timer covers its own preparation (the Laplacian
//! build for the relaxation engines) plus routing every pair, so the three
//! timings cover the same work.

use std::borrow::Cow;
use std::time::Instant;

use tracing::{debug, instrument};

use sr_core::{EndpointId, NodeId};
use sr_graph::{Components, WeightedGraph};
use sr_solver::{EngineKind, NodeUsage, PreparedEngine, RelaxationConfig, RouteOutcome};
use sr_topology::{AnchorMap, Endpoint};

use crate::{BenchError, BenchResult, BenchmarkRow, EngineStats};

// ── Output ────────────────────────────────────────────────────────────────────

/// One endpoint pair with the outcome of every engine.
#[derive(Debug, Clone)]
pub struct PairRecord {
    pub source:      EndpointId,
    pub target:      EndpointId,
    pub source_node: NodeId,
    pub target_node: NodeId,
    pub reachable:   bool,
    /// Indexed by [`EngineKind::index`].
    pub outcomes:    Vec<RouteOutcome>,
}

impl PairRecord {
    pub fn outcome(&self, kind: EngineKind) -> Option<&RouteOutcome> {
        self.outcomes.get(kind.index())
    }
}

/// Everything one harness run produces.
#[derive(Debug, Clone)]
pub struct WorkloadReport {
    pub row:        BenchmarkRow,
    /// Pairs in enumeration order: `(0,1), (0,2), .., (1,2), ..`.
    pub pairs:      Vec<PairRecord>,
    /// Node visits along every shortest path of the workload.
    pub node_usage: NodeUsage,
}

// ── ComparisonHarness ─────────────────────────────────────────────────────────

pub struct ComparisonHarness<'g> {
    graph:      &'g WeightedGraph,
    components: Cow<'g, Components>,
    config:     RelaxationConfig,
}

/// A pair with its anchors resolved.
struct Job {
    source:    NodeId,
    target:    NodeId,
    reachable: bool,
}

impl<'g> ComparisonHarness<'g> {
    /// Label the components of `graph` once; every workload reuses them.
    pub fn new(graph: &'g WeightedGraph, config: RelaxationConfig) -> Self {
        Self { graph, components: Cow::Owned(Components::new(graph)), config }
    }

    /// Reuse components already labelled for `graph`.
    pub fn with_components(
        graph: &'g WeightedGraph,
        components: &'g Components,
        config: RelaxationConfig,
    ) -> Self {
        Self { graph, components: Cow::Borrowed(components), config }
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    /// Compare all engines over every unordered pair of distinct endpoints.
    #[instrument(skip_all, fields(endpoints = endpoints.len()))]
    pub fn run(&self, endpoints: &[Endpoint], anchors: &AnchorMap) -> BenchResult<WorkloadReport> {
        if endpoints.is_empty() {
            return Err(BenchError::DegenerateWorkload);
        }
        let nodes = endpoints
            .iter()
            .map(|e| anchors.get(&e.id).copied().ok_or(BenchError::MissingAnchor(e.id)))
            .collect::<BenchResult<Vec<NodeId>>>()?;

        let n = endpoints.len();
        let mut jobs = Vec::with_capacity(n * (n - 1) / 2);
        let mut pairs = Vec::with_capacity(jobs.capacity());
        for i in 0..n {
            for j in (i + 1)..n {
                let reachable = self.components.connected(nodes[i], nodes[j]);
                jobs.push(Job { source: nodes[i], target: nodes[j], reachable });
                pairs.push(PairRecord {
                    source:      endpoints[i].id,
                    target:      endpoints[j].id,
                    source_node: nodes[i],
                    target_node: nodes[j],
                    reachable,
                    outcomes:    Vec::with_capacity(EngineKind::ALL.len()),
                });
            }
        }
        let reachable_pairs = jobs.iter().filter(|j| j.reachable).count();
        let mut row = BenchmarkRow::new(n, jobs.len(), reachable_pairs);
        let mut node_usage = NodeUsage::new(self.graph.node_count());

        for kind in EngineKind::ALL {
            let started = Instant::now();
            let engine = PreparedEngine::prepare(kind, self.graph, self.config)?;
            let outcomes = self.route_all(&engine, &jobs)?;
            let wall_time = started.elapsed();

            let mean_metric = mean_reachable(&jobs, &outcomes);
            debug!(engine = kind.name(), secs = wall_time.as_secs_f64(), mean_metric, "engine pass done");
            *row.stats_mut(kind) = EngineStats { wall_time, mean_metric };

            for (record, outcome) in pairs.iter_mut().zip(outcomes) {
                if let Some(path) = outcome.path() {
                    node_usage.record(path);
                }
                record.outcomes.push(outcome);
            }
        }

        Ok(WorkloadReport { row, pairs, node_usage })
    }

    fn route_all(&self, engine: &PreparedEngine<'_>, jobs: &[Job]) -> BenchResult<Vec<RouteOutcome>> {
        let route = |job: &Job| -> BenchResult<RouteOutcome> {
            if !job.reachable {
                return Ok(RouteOutcome::Unreachable);
            }
            Ok(engine.route(job.source, job.target)?)
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            jobs.par_iter().map(route).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            jobs.iter().map(route).collect()
        }
    }
}

/// Mean metric over reachable pairs, `+inf` if there are none.
fn mean_reachable(jobs: &[Job], outcomes: &[RouteOutcome]) -> f64 {
    let (sum, count) = jobs
        .iter()
        .zip(outcomes)
        .filter(|(job, _)| job.reachable)
        .fold((0.0, 0usize), |(sum, count), (_, o)| (sum + o.metric(), count + 1));
    if count == 0 { f64::INFINITY } else { sum / count as f64 }
}
