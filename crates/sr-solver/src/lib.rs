//! `sr-solver` — the three route-cost engines.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                |
//! |------------------|---------------------------------------------------------|
//! | [`relaxation`]   | `RelaxationConfig`, injection vector, shared helpers    |
//! | [`jacobi`]       | `solve_jacobi` — simultaneous-update relaxation         |
//! | [`gauss_seidel`] | `solve_gauss_seidel` — in-place sweep relaxation        |
//! | [`dijkstra`]     | `shortest_path` over link latencies                     |
//! | [`engine`]       | `EngineKind`, `PreparedEngine` — one dispatch point     |
//! | [`result`]       | `FlowResult`, `PathResult`, `RouteOutcome`, `NodeUsage` |
//! | [`error`]        | `SolverError`, `SolverResult<T>`                        |
//!
//! # Cost notions
//!
//! The relaxation engines score a pair by `total_flow`, the L1 norm of the
//! potential field produced by a unit injection at the source and a unit
//! extraction at the target on the unweighted Laplacian.  It has no physical
//! unit and is only comparable between the two relaxation engines.  The
//! shortest-path engine scores a pair by total link latency in milliseconds.

pub mod dijkstra;
pub mod engine;
pub mod error;
pub mod gauss_seidel;
pub mod jacobi;
pub mod relaxation;
pub mod result;

#[cfg(test)]
mod tests;

pub use dijkstra::shortest_path;
pub use engine::{EngineKind, PreparedEngine};
pub use error::{SolverError, SolverResult};
pub use gauss_seidel::solve_gauss_seidel;
pub use jacobi::solve_jacobi;
pub use relaxation::RelaxationConfig;
pub use result::{FlowResult, NodeUsage, PathResult, RouteOutcome};
