//! `sr-graph` — graph structures shared by every route-cost engine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`network`]    | `WeightedGraph` (CSR), `GraphBuilder`                    |
//! | [`components`] | `Components` — connected-component labels                |
//! | [`csr`]        | `CsrMatrix` — compressed sparse row matrix               |
//! | [`laplacian`]  | `LaplacianSystem` — `L = D - A` with node ↔ row mapping  |
//! | [`error`]      | `GraphError`, `GraphResult<T>`                           |
//!
//! The weighted graph feeds the shortest-path engine directly.  The Laplacian
//! is built from the same graph's *unweighted* connectivity, so the two engine
//! families deliberately score routes with different cost notions.

pub mod components;
pub mod csr;
pub mod error;
pub mod laplacian;
pub mod network;


pub use components::Components;
pub use csr::CsrMatrix;
pub use error::{GraphError, GraphResult};
pub use laplacian::LaplacianSystem;
pub use network::{GraphBuilder, WeightedGraph};
