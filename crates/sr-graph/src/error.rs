//! Graph-construction error type.

use thiserror::Error;

use sr_core::{CoreError, NodeId};

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("topology has no nodes")]
    EmptyTopology,

    #[error("invalid topology: {node} links to {neighbor}, outside 0..{node_count}")]
    InvalidTopology {
        node:       NodeId,
        neighbor:   NodeId,
        node_count: usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GraphResult<T> = Result<T, GraphError>;
