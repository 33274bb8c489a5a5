//! Connected components of a [`WeightedGraph`].
//!
//! Labels are assigned by BFS from the lowest unlabelled node id, so the
//! labelling is deterministic.  Reachability between two nodes is then a
//! label comparison.

use std::collections::VecDeque;

use sr_core::NodeId;

use crate::WeightedGraph;

#[derive(Debug, Clone)]
pub struct Components {
    /// Component label of each node, indexed by `NodeId`.
    label: Vec<u32>,
    count: usize,
}

impl Components {
    pub fn new(graph: &WeightedGraph) -> Self {
        const UNSEEN: u32 = u32::MAX;
        let n = graph.node_count();
        let mut label = vec![UNSEEN; n];
        let mut queue = VecDeque::new();
        let mut count = 0u32;

        for start in 0..n {
            if label[start] != UNSEEN {
                continue;
            }
            label[start] = count;
            queue.push_back(NodeId(start as u32));
            while let Some(node) = queue.pop_front() {
                for &nbr in graph.neighbors(node) {
                    if label[nbr.index()] == UNSEEN {
                        label[nbr.index()] = count;
                        queue.push_back(nbr);
                    }
                }
            }
            count += 1;
        }

        Self { label, count: count as usize }
    }

    /// Number of components (isolated nodes count as their own component).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Component label of `node`, or `None` if it is not in the graph.
    pub fn component_of(&self, node: NodeId) -> Option<u32> {
        self.label.get(node.index()).copied()
    }

    /// `true` if a path exists between `a` and `b`.  Unknown nodes are never
    /// connected.
    pub fn connected(&self, a: NodeId, b: NodeId) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Size of every component, indexed by label.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count];
        for &l in &self.label {
            sizes[l as usize] += 1;
        }
        sizes
    }
}
