//! Synthetic satellite grid.
//!
//! Nodes are laid out on `num_orbits` longitude planes with `per_orbit`
//! latitude slots each:
//!
//! ```text
//! num_orbits = floor(sqrt(n))
//! per_orbit  = ceil(n / num_orbits)
//! id(orbit, slot) = orbit * per_orbit + slot      (truncated at n)
//! ```
//!
//! Each node links to up to four neighbours: the same slot in the previous
//! and next orbit (orbit index wraps) and the previous and next slot in the
//! same orbit (slot index does not wrap).

use std::collections::BTreeMap;

use sr_core::{Adjacency, GeoPoint, NodeId, Topology};

use crate::{TopologyError, TopologyResult};

/// Neighbour offsets `(d_orbit, d_slot)`, in emission order.
const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Shape of a generated constellation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSpec {
    pub node_count: usize,
    /// Inclusive latitude span of the slots.
    pub lat_range:  (f64, f64),
    /// Longitude span of the orbits; the upper bound itself is not used.
    pub lon_range:  (f64, f64),
}

impl GridSpec {
    pub fn new(node_count: usize, lat_range: (f64, f64), lon_range: (f64, f64)) -> Self {
        Self { node_count, lat_range, lon_range }
    }

    /// `(num_orbits, per_orbit)` for this node count.
    pub fn dimensions(&self) -> (usize, usize) {
        let num_orbits = self.node_count.isqrt().max(1);
        (num_orbits, self.node_count.div_ceil(num_orbits))
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::new(100, (30.0, 55.0), (-140.0, 160.0))
    }
}

/// Generate the constellation described by `spec`.
///
/// Self-links and duplicate links (possible when there are fewer than three
/// orbits) are dropped, so the result always passes
/// [`Topology::validate`].
pub fn generate_constellation(spec: &GridSpec) -> TopologyResult<Topology> {
    let n = spec.node_count;
    if n == 0 {
        return Err(TopologyError::Empty);
    }
    check_range("latitude", spec.lat_range)?;
    check_range("longitude", spec.lon_range)?;

    let (num_orbits, per_orbit) = spec.dimensions();
    let lats = linspace(spec.lat_range.0, spec.lat_range.1, per_orbit, true);
    let lons = linspace(spec.lon_range.0, spec.lon_range.1, num_orbits, false);

    let mut positions = Vec::with_capacity(n);
    'orbits: for &lon in &lons {
        for &lat in &lats {
            if positions.len() == n {
                break 'orbits;
            }
            positions.push(GeoPoint::new(lat, lon));
        }
    }

    let id_at = |orbit: usize, slot: usize| -> Option<NodeId> {
        let id = orbit * per_orbit + slot;
        (slot < per_orbit && id < n).then(|| NodeId(id as u32))
    };

    let mut adjacency: Adjacency = BTreeMap::new();
    for id in 0..n {
        let (orbit, slot) = (id / per_orbit, id % per_orbit);
        let mut neighbors = Vec::with_capacity(4);
        for (d_orbit, d_slot) in NEIGHBOR_OFFSETS {
            let o = (orbit as i64 + d_orbit).rem_euclid(num_orbits as i64) as usize;
            let s = slot as i64 + d_slot;
            if s < 0 {
                continue;
            }
            let Some(nbr) = id_at(o, s as usize) else { continue };
            if nbr.index() != id && !neighbors.contains(&nbr) {
                neighbors.push(nbr);
            }
        }
        adjacency.insert(NodeId(id as u32), neighbors);
    }

    let topology = Topology::new(positions, adjacency);
    topology.validate()?;
    Ok(topology)
}

fn check_range(what: &'static str, (min, max): (f64, f64)) -> TopologyResult<()> {
    if !(min.is_finite() && max.is_finite()) || min > max {
        return Err(TopologyError::InvalidRange { what, min, max });
    }
    Ok(())
}

/// `count` evenly spaced values from `start`; includes `stop` only when
/// `inclusive`.
fn linspace(start: f64, stop: f64, count: usize, inclusive: bool) -> Vec<f64> {
    let steps = match (count, inclusive) {
        (0, _) => return Vec::new(),
        (1, true) => return vec![start],
        (c, true) => c - 1,
        (c, false) => c,
    };
    let step = (stop - start) / steps as f64;
    let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    if inclusive {
        values[count - 1] = stop;
    }
    values
}
