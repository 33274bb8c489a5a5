//! Workload sweep.
//!
//! The constellation, its weighted graph, its components and the anchor index
//! are built once from the config and shared by every workload.  Workload `size` draws its
//! endpoints from `SimRng::derived(seed, size)`, so a given size produces the
//! same endpoints whatever else is in the sweep.

use tracing::info;

use sr_core::{SessionId, SimRng, Topology};
use sr_graph::{Components, GraphBuilder, WeightedGraph};
use sr_topology::{generate_constellation, generate_endpoints, AnchorIndex, AnchorMap, Endpoint};

use crate::report::ReportWriter;
use crate::{BenchConfig, BenchResult, BenchmarkRow, ComparisonHarness, WorkloadReport};

pub struct BenchmarkRunner {
    config:     BenchConfig,
    topology:   Topology,
    graph:      WeightedGraph,
    components: Components,
    anchors:    AnchorIndex,
}

impl BenchmarkRunner {
    pub fn new(config: BenchConfig) -> BenchResult<Self> {
        config.validate()?;
        let topology = generate_constellation(&config.grid)?;
        let graph = GraphBuilder::from_topology(&topology, config.latency)?;
        let components = Components::new(&graph);
        let anchors = AnchorIndex::new(&topology.positions);
        info!(
            nodes = graph.node_count(),
            links = graph.link_count(),
            components = components.count(),
            sizes = config.workload_sizes.len(),
            "benchmark topology ready"
        );
        Ok(Self { config, topology, graph, components, anchors })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn anchors(&self) -> &AnchorIndex {
        &self.anchors
    }

    fn harness(&self) -> ComparisonHarness<'_> {
        ComparisonHarness::with_components(&self.graph, &self.components, self.config.relaxation())
    }

    /// Endpoints and anchors for a workload of `size` endpoints.
    pub fn workload(&self, size: usize) -> BenchResult<(Vec<Endpoint>, AnchorMap)> {
        let mut rng = SimRng::derived(self.config.seed, size as u64);
        let endpoints = generate_endpoints(size, SessionId(0), 0, &mut rng);
        let anchors = self.anchors.assign(&endpoints)?;
        Ok((endpoints, anchors))
    }

    /// Run the harness on one workload size.
    pub fn run_workload(&self, size: usize) -> BenchResult<WorkloadReport> {
        let (endpoints, anchors) = self.workload(size)?;
        self.harness().run(&endpoints, &anchors)
    }

    /// Run every configured size in order, handing each row to `writer` as
    /// soon as it is produced.  The writer is finished before returning.
    pub fn run(&self, mut writer: Option<&mut dyn ReportWriter>) -> BenchResult<Vec<BenchmarkRow>> {
        let harness = self.harness();
        let mut rows = Vec::with_capacity(self.config.workload_sizes.len());

        for &size in &self.config.workload_sizes {
            let (endpoints, anchors) = self.workload(size)?;
            let report = harness.run(&endpoints, &anchors)?;
            let row = report.row;
            info!(
                size,
                pairs = row.total_pairs,
                reachable = row.reachable_pairs,
                jacobi_s = row.jacobi.wall_time.as_secs_f64(),
                gauss_seidel_s = row.gauss_seidel.wall_time.as_secs_f64(),
                shortest_path_s = row.shortest_path.wall_time.as_secs_f64(),
                "workload done"
            );
            if let Some(w) = writer.as_deref_mut() {
                w.write_row(&row)?;
            }
            rows.push(row);
        }

        if let Some(w) = writer {
            w.finish()?;
        }
        Ok(rows)
    }
}
