//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! `#[from]` variant where topology or latency-model validation can fail
//! underneath them.

use thiserror::Error;

use crate::NodeId;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("node {node} lists neighbor {neighbor}, outside 0..{node_count}")]
    NeighborOutOfRange {
        node:       NodeId,
        neighbor:   NodeId,
        node_count: usize,
    },

    #[error("adjacency entry {node} outside 0..{node_count}")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("adjacency is not symmetric: {from} lists {to} but not the reverse")]
    AsymmetricAdjacency { from: NodeId, to: NodeId },

    #[error("latency model {field} must be {requirement}, got {value}")]
    InvalidLatencyModel {
        field:       &'static str,
        requirement: &'static str,
        value:       f64,
    },
}

/// Shorthand result type for `sr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
