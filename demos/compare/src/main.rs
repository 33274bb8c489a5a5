//! compare — full workload sweep of the three route-cost engines.
//!
//! Usage: `compare [config.json]`
//!
//! Builds the constellation once, runs Jacobi, Gauss-Seidel and Dijkstra
//! over every configured workload size, prints a table and writes
//! `output/compare/benchmark.csv` and `output/compare/summary.json`.
//! Set `RUST_LOG=debug` to see per-engine timings and iteration-cap events.

mod setup;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use serde_json::json;

use sr_bench::{BenchmarkRunner, CsvReportWriter};
use sr_solver::EngineKind;

use setup::{init_tracing, load_config, mem_mb};

const OUTPUT_DIR: &str = "output/compare";

fn main() -> Result<()> {
    init_tracing();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    println!("=== compare — satellite route-cost engines ===");
    println!(
        "Nodes: {}  |  Sizes: {:?}  |  Seed: {}",
        config.grid.node_count, config.workload_sizes, config.seed
    );
    println!(
        "Relaxation: tol {:e}, cap {}  |  Latency: {} ms base, {} km/deg",
        config.tolerance, config.max_iterations, config.latency.base_latency_ms, config.latency.km_per_degree
    );
    println!();

    // 1. Topology + graph.
    let t0 = Instant::now();
    let runner = BenchmarkRunner::new(config)?;
    println!(
        "Constellation: {} nodes, {} links  ({:.1} ms, {:.1} MB)",
        runner.graph().node_count(),
        runner.graph().link_count(),
        t0.elapsed().as_secs_f64() * 1000.0,
        mem_mb()
    );

    // 2. Sweep.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = CsvReportWriter::new(Path::new(OUTPUT_DIR))?;
    let t1 = Instant::now();
    let rows = runner.run(Some(&mut writer))?;
    let elapsed = t1.elapsed();
    println!("Sweep complete in {:.3} s", elapsed.as_secs_f64());
    println!();

    // 3. Table.
    println!(
        "{:>6} {:>7} {:>9} | {:>10} {:>10} {:>10} | {:>10} {:>10} {:>12}",
        "Size", "Pairs", "Reachable", "Jacobi s", "GS s", "SP s", "Jacobi", "GS", "SP ms"
    );
    println!("{}", "-".repeat(98));
    for row in &rows {
        println!(
            "{:>6} {:>7} {:>9} | {:>10.4} {:>10.4} {:>10.4} | {:>10.4} {:>10.4} {:>12.2}",
            row.workload_size,
            row.total_pairs,
            row.reachable_pairs,
            row.jacobi.wall_time.as_secs_f64(),
            row.gauss_seidel.wall_time.as_secs_f64(),
            row.shortest_path.wall_time.as_secs_f64(),
            row.jacobi.mean_metric,
            row.gauss_seidel.mean_metric,
            row.shortest_path.mean_metric,
        );
    }
    println!();

    // 4. Summary JSON.
    let totals: serde_json::Map<String, serde_json::Value> = EngineKind::ALL
        .iter()
        .map(|&kind| {
            let secs: f64 = rows.iter().map(|r| r.stats(kind).wall_time.as_secs_f64()).sum();
            (kind.name().to_owned(), json!(secs))
        })
        .collect();
    let summary = json!({
        "config":        runner.config(),
        "nodes":         runner.graph().node_count(),
        "links":         runner.graph().link_count(),
        "rows":          rows,
        "total_time_s":  totals,
        "sweep_time_s":  elapsed.as_secs_f64(),
        "mem_mb":        mem_mb(),
    });
    let summary_path = Path::new(OUTPUT_DIR).join("summary.json");
    serde_json::to_writer_pretty(BufWriter::new(File::create(&summary_path)?), &summary)?;

    println!("  {OUTPUT_DIR}/benchmark.csv : {} rows", rows.len());
    println!("  {}", summary_path.display());
    Ok(())
}
