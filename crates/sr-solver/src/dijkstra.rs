//! Minimum-latency routing over the CSR graph.
//!
//! # Determinism
//!
//! The heap is keyed on `(cost, node)`, so equal-cost nodes settle in
//! ascending id order.  When two predecessors reach a node at exactly the same
//! cost, the one with the lower id is kept.  Repeated queries on the same
//! graph therefore always return the same path.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use sr_core::{EdgeId, NodeId};
use sr_graph::WeightedGraph;

use crate::{PathResult, SolverError, SolverResult};

/// Heap key; latencies are finite and non-negative so `total_cmp` is a
/// plain numeric order here.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Shortest path from `from` to `to` by summed link latency.
///
/// `from == to` yields the single-node path at cost 0.  A target in another
/// component yields [`PathResult::unreachable`].
pub fn shortest_path(graph: &WeightedGraph, from: NodeId, to: NodeId) -> SolverResult<PathResult> {
    for node in [from, to] {
        if !graph.contains(node) {
            return Err(SolverError::NodeNotInGraph(node));
        }
    }
    if from == to {
        return Ok(PathResult { nodes: vec![from], total_latency_ms: 0.0 });
    }

    let n = graph.node_count();
    let mut dist      = vec![f64::INFINITY; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];
    let mut settled   = vec![false; n];

    dist[from.index()] = 0.0;

    let mut heap: BinaryHeap<Reverse<(Cost, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), from)));

    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        if node == to {
            return Ok(reconstruct(graph, &prev_edge, to, cost));
        }

        for edge in graph.out_edges(node) {
            let neighbor = graph.edge_to[edge.index()];
            if settled[neighbor.index()] {
                continue;
            }
            let new_cost = cost + graph.edge_latency_ms[edge.index()];
            let best = dist[neighbor.index()];

            if new_cost < best {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((Cost(new_cost), neighbor)));
            } else if new_cost == best {
                let current = prev_edge[neighbor.index()];
                if current == EdgeId::INVALID || node < graph.edge_from[current.index()] {
                    prev_edge[neighbor.index()] = edge;
                }
            }
        }
    }

    Ok(PathResult::unreachable())
}

fn reconstruct(graph: &WeightedGraph, prev_edge: &[EdgeId], to: NodeId, total_ms: f64) -> PathResult {
    let mut nodes = vec![to];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = graph.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    PathResult { nodes, total_latency_ms: total_ms }
}
