//! Report writers.
//!
//! [`CsvReportWriter`] creates `benchmark.csv` in the configured directory.
//! Times are in seconds; a mean metric with no reachable pairs is written as
//! `inf`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use sr_solver::EngineKind;

use crate::{BenchResult, BenchmarkRow};

pub const CSV_FILE: &str = "benchmark.csv";

pub const CSV_HEADER: [&str; 9] = [
    "workload_size",
    "total_pairs",
    "reachable_pairs",
    "time_jacobi_s",
    "time_gauss_seidel_s",
    "time_shortest_path_s",
    "avg_metric_jacobi",
    "avg_metric_gauss_seidel",
    "avg_metric_shortest_path",
];

/// Sink for benchmark rows.
pub trait ReportWriter {
    fn write_row(&mut self, row: &BenchmarkRow) -> BenchResult<()>;

    /// Flush and close the underlying output.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> BenchResult<()>;
}

pub struct CsvReportWriter {
    writer:   Writer<File>,
    finished: bool,
}

impl CsvReportWriter {
    /// Create `benchmark.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> BenchResult<Self> {
        let mut writer = Writer::from_path(dir.join(CSV_FILE))?;
        writer.write_record(CSV_HEADER)?;
        Ok(Self { writer, finished: false })
    }
}

fn format_metric(v: f64) -> String {
    if v == f64::INFINITY { "inf".to_owned() } else { v.to_string() }
}

impl ReportWriter for CsvReportWriter {
    fn write_row(&mut self, row: &BenchmarkRow) -> BenchResult<()> {
        let mut record = Vec::with_capacity(CSV_HEADER.len());
        record.push(row.workload_size.to_string());
        record.push(row.total_pairs.to_string());
        record.push(row.reachable_pairs.to_string());
        for kind in EngineKind::ALL {
            record.push(row.stats(kind).wall_time.as_secs_f64().to_string());
        }
        for kind in EngineKind::ALL {
            record.push(format_metric(row.stats(kind).mean_metric));
        }
        self.writer.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> BenchResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
