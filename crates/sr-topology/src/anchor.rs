//! Nearest-node anchoring of endpoints.
//!
//! An R-tree (via `rstar`) over node positions answers nearest-neighbour
//! queries in lat/lon degree space.  Ties between equidistant nodes resolve to
//! the lower `NodeId` so assignments are reproducible.

use std::collections::BTreeMap;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use sr_core::{EndpointId, GeoPoint, NodeId};

use crate::{Endpoint, TopologyError, TopologyResult};

/// Endpoint → anchor node.
pub type AnchorMap = BTreeMap<EndpointId, NodeId>;

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── AnchorIndex ───────────────────────────────────────────────────────────────

pub struct AnchorIndex {
    tree:      RTree<NodeEntry>,
    positions: Vec<GeoPoint>,
}

impl AnchorIndex {
    /// Bulk-load the index from node positions (indexed by `NodeId`).
    pub fn new(positions: &[GeoPoint]) -> Self {
        let entries = positions
            .iter()
            .enumerate()
            .map(|(i, p)| NodeEntry { point: [p.lat, p.lon], id: NodeId(i as u32) })
            .collect();
        Self { tree: RTree::bulk_load(entries), positions: positions.to_vec() }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Nearest node to `pos`.  `None` only for an empty index.
    pub fn nearest(&self, pos: GeoPoint) -> Option<NodeId> {
        self.k_nearest(pos, 1).first().copied()
    }

    /// Up to `k` nearest nodes, ascending by distance then by id.
    pub fn k_nearest(&self, pos: GeoPoint, k: usize) -> Vec<NodeId> {
        if k == 0 {
            return Vec::new();
        }
        let mut found: Vec<(f64, NodeId)> = Vec::with_capacity(k);
        for (entry, d2) in self.tree.nearest_neighbor_iter_with_distance_2(&[pos.lat, pos.lon]) {
            // Keep pulling past k while distances tie with the k-th.
            if found.len() >= k && d2 > found[k - 1].0 {
                break;
            }
            found.push((d2, entry.id));
        }
        found.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        found.truncate(k);
        found.into_iter().map(|(_, id)| id).collect()
    }

    /// Anchor every endpoint to its nearest node.
    pub fn assign(&self, endpoints: &[Endpoint]) -> TopologyResult<AnchorMap> {
        endpoints
            .iter()
            .map(|e| self.nearest(e.location).map(|n| (e.id, n)).ok_or(TopologyError::NoNodes))
            .collect()
    }

    /// The `k` nodes nearest the centroid of `endpoints`.
    pub fn k_center(&self, endpoints: &[Endpoint], k: usize) -> TopologyResult<Vec<NodeId>> {
        let center = GeoPoint::centroid(endpoints.iter().map(|e| e.location))
            .ok_or(TopologyError::NoEndpoints)?;
        if self.is_empty() {
            return Err(TopologyError::NoNodes);
        }
        Ok(self.k_nearest(center, k))
    }

    /// Anchor each endpoint to its nearest node among the `k` candidates
    /// returned by [`k_center`](Self::k_center).
    pub fn assign_k_center(&self, endpoints: &[Endpoint], k: usize) -> TopologyResult<AnchorMap> {
        let candidates = self.k_center(endpoints, k)?;
        let mut map = AnchorMap::new();
        for e in endpoints {
            let best = candidates
                .iter()
                .copied()
                .min_by(|&a, &b| {
                    let da = self.positions[a.index()].degree_distance_sq(e.location);
                    let db = self.positions[b.index()].degree_distance_sq(e.location);
                    da.total_cmp(&db).then(a.cmp(&b))
                })
                .ok_or(TopologyError::NoNodes)?;
            map.insert(e.id, best);
        }
        Ok(map)
    }
}
