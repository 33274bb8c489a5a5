//! Coordinate type.
//!
//! Positions are treated as points in a flat lat/lon plane.  Distances are
//! Euclidean in degrees; conversion to kilometres happens in
//! [`LatencyModel`](crate::LatencyModel) with a fixed km-per-degree factor.

/// A (latitude, longitude) pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Euclidean distance in degrees.
    #[inline]
    pub fn degree_distance(self, other: GeoPoint) -> f64 {
        self.degree_distance_sq(other).sqrt()
    }

    /// Squared Euclidean distance in degrees.  Enough for nearest-node
    /// comparisons.
    #[inline]
    pub fn degree_distance_sq(self, other: GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }

    /// Arithmetic mean of `points`, or `None` for an empty slice.
    pub fn centroid(points: impl IntoIterator<Item = GeoPoint>) -> Option<GeoPoint> {
        let (mut lat, mut lon, mut n) = (0.0, 0.0, 0usize);
        for p in points {
            lat += p.lat;
            lon += p.lon;
            n += 1;
        }
        (n > 0).then(|| GeoPoint::new(lat / n as f64, lon / n as f64))
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}
