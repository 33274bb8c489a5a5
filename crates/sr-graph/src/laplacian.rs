//! Graph Laplacian `L = D - A` of the unweighted connectivity structure.
//!
//! Only nodes with at least one link get a row; isolated nodes cannot take
//! part in any solvable source/target pair.  Rows follow ascending `NodeId`,
//! so the node ↔ row mapping is stable for a given graph.
//!
//! Every row sums to zero, which makes `L` singular with the constant vector
//! in its null space.  The system is only ever solved for an injection that
//! sums to zero within one connected component.

use rustc_hash::FxHashMap;

use sr_core::NodeId;

use crate::{CsrMatrix, WeightedGraph};

#[derive(Debug, Clone)]
pub struct LaplacianSystem {
    pub matrix: CsrMatrix,
    /// Row → node.
    nodes:    Vec<NodeId>,
    /// Node → row.
    rows:     FxHashMap<NodeId, usize>,
    /// Cached `L[i, i]` (node degree).
    diagonal: Vec<f64>,
}

impl LaplacianSystem {
    /// Build the system from the connectivity of `graph`; link latencies are
    /// ignored.
    pub fn from_graph(graph: &WeightedGraph) -> Self {
        let nodes: Vec<NodeId> = (0..graph.node_count() as u32)
            .map(NodeId)
            .filter(|&n| graph.degree(n) > 0)
            .collect();
        let rows: FxHashMap<NodeId, usize> =
            nodes.iter().enumerate().map(|(row, &n)| (n, row)).collect();

        let mut entries = Vec::with_capacity(nodes.len() + graph.edge_count());
        for (i, &node) in nodes.iter().enumerate() {
            entries.push((i, i, graph.degree(node) as f64));
            for nbr in graph.neighbors(node) {
                entries.push((i, rows[nbr], -1.0));
            }
        }
        let dim = nodes.len();
        let matrix = CsrMatrix::from_triplets(dim, dim, entries);
        let diagonal = (0..dim).map(|i| matrix.get(i, i)).collect();

        Self { matrix, nodes, rows, diagonal }
    }

    /// Number of rows (= columns).
    pub fn dim(&self) -> usize {
        self.nodes.len()
    }

    pub fn row_of(&self, node: NodeId) -> Option<usize> {
        self.rows.get(&node).copied()
    }

    pub fn node_of(&self, row: usize) -> NodeId {
        self.nodes[row]
    }

    /// Nodes in row order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn diagonal(&self) -> &[f64] {
        &self.diagonal
    }

    /// Sum of row `row`; zero for every row of a well-formed Laplacian.
    pub fn row_sum(&self, row: usize) -> f64 {
        self.matrix.row_sum(row)
    }
}
