//! `sr-bench` — runs the three route-cost engines head to head.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`config`]   | `BenchConfig` — grid, latency model, sweep sizes, seed     |
//! | [`harness`]  | `ComparisonHarness` — one workload, all engines, timed     |
//! | [`runner`]   | `BenchmarkRunner` — topology once, harness per size        |
//! | [`row`]      | `BenchmarkRow`, `EngineStats` — one line of the report     |
//! | [`report`]   | `ReportWriter` trait, `CsvReportWriter`                    |
//! | [`error`]    | `BenchError`, `BenchResult<T>`                             |
//!
//! # Usage
//!
//! ```rust,ignore
//! use sr_bench::{BenchConfig, BenchmarkRunner, CsvReportWriter};
//!
//! let runner = BenchmarkRunner::new(BenchConfig::default())?;
//! let mut csv = CsvReportWriter::new(Path::new("output"))?;
//! let rows = runner.run(Some(&mut csv))?;
//! ```

pub mod config;
pub mod error;
pub mod harness;
pub mod report;
pub mod row;
pub mod runner;


pub use config::BenchConfig;
pub use error::{BenchError, BenchResult};
pub use harness::{ComparisonHarness, PairRecord, WorkloadReport};
pub use report::{CsvReportWriter, ReportWriter, CSV_HEADER};
pub use row::{BenchmarkRow, EngineStats};
pub use runner::BenchmarkRunner;
