//! Latency-weighted constellation graph and its builder.
//!
//! # Data layout
//!
//! Undirected links are stored as two directed edges in **Compressed Sparse
//! Row (CSR)** form.  The outgoing edges of node `n` occupy
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! sorted by destination id, so neighbour iteration is a contiguous scan in a
//! fixed order.  Both directions of a link carry the same latency, computed
//! once when the link is added.

use rustc_hash::FxHashSet;

use sr_core::{EdgeId, GeoPoint, LatencyModel, NodeId, Topology};

use crate::{GraphError, GraphResult};

// ── WeightedGraph ─────────────────────────────────────────────────────────────

/// Undirected, latency-weighted graph in CSR format.
///
/// Fields are `pub` for indexed access in engine inner loops.  Build with
/// [`GraphBuilder`].
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    /// Position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    /// CSR row pointer, length `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each directed edge.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each directed edge.
    pub edge_to: Vec<NodeId>,

    /// Link latency in milliseconds, the shortest-path edge cost.
    pub edge_latency_ms: Vec<f64>,
}

impl WeightedGraph {
    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of directed edges (twice the number of links).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.edge_to.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// `true` if `node` is a valid index into this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Outgoing edge ids of `node`; a contiguous range.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Neighbours of `node`, ascending by id.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        &self.edge_to[start..end]
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        (self.node_out_start[node.index() + 1] - self.node_out_start[node.index()]) as usize
    }

    /// Latency of the link `a — b`, if one exists.
    pub fn link_latency(&self, a: NodeId, b: NodeId) -> Option<f64> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        self.out_edges(a)
            .find(|e| self.edge_to[e.index()] == b)
            .map(|e| self.edge_latency_ms[e.index()])
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Accumulate nodes and links, then [`build`](Self::build) the CSR graph.
///
/// Links are undirected: adding `a — b` after `b — a` is a no-op, and
/// self-links are ignored.
///
/// # Example
///
/// ```
/// use sr_core::{GeoPoint, LatencyModel};
/// use sr_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new(LatencyModel::default());
/// let x = b.add_node(GeoPoint::new(30.0, 0.0));
/// let y = b.add_node(GeoPoint::new(31.0, 0.0));
/// b.add_link(x, y).unwrap();
/// b.add_link(y, x).unwrap(); // duplicate
/// let g = b.build();
/// assert_eq!(g.link_count(), 1);
/// ```
pub struct GraphBuilder {
    model: LatencyModel,
    nodes: Vec<GeoPoint>,
    links: Vec<(NodeId, NodeId, f64)>,
    seen:  FxHashSet<(NodeId, NodeId)>,
}

impl GraphBuilder {
    pub fn new(model: LatencyModel) -> Self {
        Self {
            model,
            nodes: Vec::new(),
            links: Vec::new(),
            seen:  FxHashSet::default(),
        }
    }

    /// Build a graph from a generated topology.
    ///
    /// The latency model and every id in the adjacency are checked before any
    /// link is added, so bad input never yields a partially built graph.
    pub fn from_topology(topology: &Topology, model: LatencyModel) -> GraphResult<WeightedGraph> {
        let node_count = topology.node_count();
        if node_count == 0 {
            return Err(GraphError::EmptyTopology);
        }
        model.validate()?;
        for (&node, neighbors) in &topology.adjacency {
            let bad = std::iter::once(&node)
                .chain(neighbors)
                .find(|n| n.index() >= node_count);
            if let Some(&neighbor) = bad {
                return Err(GraphError::InvalidTopology { node, neighbor, node_count });
            }
        }

        let mut b = Self::new(model);
        for &pos in &topology.positions {
            b.add_node(pos);
        }
        for (&node, neighbors) in &topology.adjacency {
            for &neighbor in neighbors {
                b.add_link(node, neighbor)?;
            }
        }
        Ok(b.build())
    }

    /// Add a node and return its id (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add the undirected link `a — b`, weighted by the latency model.
    ///
    /// Returns `Ok(false)` when the link already exists or `a == b`.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) -> GraphResult<bool> {
        let node_count = self.nodes.len();
        for (node, neighbor) in [(a, b), (b, a)] {
            if neighbor.index() >= node_count {
                return Err(GraphError::InvalidTopology { node, neighbor, node_count });
            }
        }
        if a == b || !self.seen.insert((a.min(b), a.max(b))) {
            return Ok(false);
        }
        let latency = self.model.latency_ms(self.nodes[a.index()], self.nodes[b.index()]);
        self.links.push((a, b, latency));
        Ok(true)
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn link_count(&self) -> usize { self.links.len() }

    /// Consume the builder and produce the CSR graph.
    ///
    /// O(E log E) for the edge sort.
    pub fn build(self) -> WeightedGraph {
        let node_count = self.nodes.len();

        let mut raw: Vec<(NodeId, NodeId, f64)> = Vec::with_capacity(self.links.len() * 2);
        for &(a, b, latency) in &self.links {
            raw.push((a, b, latency));
            raw.push((b, a, latency));
        }
        raw.sort_unstable_by_key(|&(from, to, _)| (from, to));

        let edge_from:       Vec<NodeId> = raw.iter().map(|e| e.0).collect();
        let edge_to:         Vec<NodeId> = raw.iter().map(|e| e.1).collect();
        let edge_latency_ms: Vec<f64>    = raw.iter().map(|e| e.2).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for &(from, _, _) in &raw {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, raw.len());

        WeightedGraph {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_latency_ms,
        }
    }
}
