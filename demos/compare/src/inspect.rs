//! inspect — per-pair printout of one workload.
//!
//! Usage: `inspect [size] [config.json]`
//!
//! Shows each endpoint with its nearest-node anchor and its anchor among the
//! k-center candidates, the component structure of the constellation, and
//! for every endpoint pair what each engine produced.

mod setup;

use std::path::PathBuf;

use anyhow::{Context, Result};

use sr_bench::BenchmarkRunner;
use sr_solver::{EngineKind, RouteOutcome};

use setup::{init_tracing, load_config, mem_mb};

const DEFAULT_SIZE:      usize = 10;
/// Candidate anchors for the k-center assignment.
const K_CENTER:          usize = 5;
/// Potentials below this magnitude are not listed.
const FLOW_THRESHOLD:    f64   = 0.01;
const BUSIEST_NODES:     usize = 5;

fn describe(outcome: Option<&RouteOutcome>) -> String {
    match outcome {
        Some(RouteOutcome::Flow(f)) => format!(
            "flow {:>9.4}  iters {:>3}{}  significant {}",
            f.total_flow,
            f.iterations,
            if f.converged { " " } else { "*" },
            f.significant(FLOW_THRESHOLD).count()
        ),
        Some(RouteOutcome::Path(p)) => format!(
            "{:>9.2} ms  hops {:>2}  {}",
            p.total_latency_ms,
            p.hop_count(),
            p.nodes.iter().map(|n| n.0.to_string()).collect::<Vec<_>>().join("→")
        ),
        Some(RouteOutcome::Unreachable) | None => "unreachable".to_owned(),
    }
}

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let size = match args.next() {
        Some(s) => s.parse::<usize>().with_context(|| format!("invalid workload size {s:?}"))?,
        None => DEFAULT_SIZE,
    };
    let config_path = args.next().map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    let runner = BenchmarkRunner::new(config)?;
    let graph = runner.graph();
    let components = runner.components();
    println!("=== inspect — workload of {size} endpoints ===");
    println!(
        "Constellation: {} nodes, {} links, {} component(s) {:?}",
        graph.node_count(),
        graph.link_count(),
        components.count(),
        components.sizes()
    );
    println!();

    // 1. Endpoints and anchors.
    let (endpoints, anchors) = runner.workload(size)?;
    let index = runner.anchors();
    let candidates = index.k_center(&endpoints, K_CENTER)?;
    let k_anchors = index.assign_k_center(&endpoints, K_CENTER)?;
    println!(
        "k-center candidates (k = {K_CENTER}): {}",
        candidates.iter().map(|n| n.0.to_string()).collect::<Vec<_>>().join(", ")
    );
    println!();
    println!("{:<6} {:<12} {:>9} {:>9} {:>8} {:>8}", "Id", "City", "Lat", "Lon", "Nearest", "K-center");
    println!("{}", "-".repeat(58));
    for e in &endpoints {
        println!(
            "{:<6} {:<12} {:>9.3} {:>9.3} {:>8} {:>8}",
            e.id.0,
            e.city,
            e.location.lat,
            e.location.lon,
            anchors.get(&e.id).map_or_else(|| "-".to_owned(), |n| n.0.to_string()),
            k_anchors.get(&e.id).map_or_else(|| "-".to_owned(), |n| n.0.to_string()),
        );
    }
    println!();

    // 2. Every pair through every engine.
    let report = runner.run_workload(size)?;
    for pair in &report.pairs {
        println!(
            "endpoints {} → {}  (nodes {} → {}){}",
            pair.source.0,
            pair.target.0,
            pair.source_node.0,
            pair.target_node.0,
            if pair.reachable { "" } else { "  [different components]" }
        );
        for kind in EngineKind::ALL {
            println!("    {:<14} {}", kind.name(), describe(pair.outcome(kind)));
        }
    }
    println!("(* = iteration cap reached)");
    println!();

    // 3. Totals.
    let row = &report.row;
    println!(
        "{} pairs, {} reachable  |  mean: jacobi {:.4}, gauss_seidel {:.4}, shortest_path {:.2} ms",
        row.total_pairs,
        row.reachable_pairs,
        row.jacobi.mean_metric,
        row.gauss_seidel.mean_metric,
        row.shortest_path.mean_metric
    );
    println!("Busiest nodes on shortest paths:");
    for (node, count) in report.node_usage.busiest(BUSIEST_NODES) {
        println!("    node {:>4}  {count} path(s)", node.0);
    }
    println!("Memory: {:.1} MB", mem_mb());

    Ok(())
}
