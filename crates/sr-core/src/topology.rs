//! Constellation topology: node positions plus neighbour lists.

use std::collections::BTreeMap;

use crate::{CoreError, CoreResult, GeoPoint, NodeId};

/// Node → ordered neighbour list.  `BTreeMap` so iteration order is by id.
pub type Adjacency = BTreeMap<NodeId, Vec<NodeId>>;

/// Raw topology as produced by a generator, before any graph is built.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Topology {
    /// Position of each node, indexed by `NodeId`.
    pub positions: Vec<GeoPoint>,
    pub adjacency: Adjacency,
}

impl Topology {
    pub fn new(positions: Vec<GeoPoint>, adjacency: Adjacency) -> Self {
        Self { positions, adjacency }
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Neighbours of `node`; empty if the node has no adjacency entry.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check that every id lies in `0..node_count` and that the neighbour
    /// relation is symmetric.
    pub fn validate(&self) -> CoreResult<()> {
        let node_count = self.node_count();
        for (&node, neighbors) in &self.adjacency {
            if node.index() >= node_count {
                return Err(CoreError::NodeOutOfRange { node, node_count });
            }
            if let Some(&neighbor) = neighbors.iter().find(|n| n.index() >= node_count) {
                return Err(CoreError::NeighborOutOfRange { node, neighbor, node_count });
            }
        }
        for (&node, neighbors) in &self.adjacency {
            for &neighbor in neighbors {
                if !self.neighbors(neighbor).contains(&node) {
                    return Err(CoreError::AsymmetricAdjacency { from: node, to: neighbor });
                }
            }
        }
        Ok(())
    }
}
