//! Link latency model.
//!
//! A link between two nodes costs a fixed base latency plus the propagation
//! delay over the straight-line degree distance:
//!
//! ```text
//! latency_ms = base_latency_ms + (deg_dist * km_per_degree / speed_of_light_km_s) * 1000
//! ```

use crate::{CoreError, CoreResult, GeoPoint};

/// Mean kilometres per degree used by the default model.
pub const DEFAULT_KM_PER_DEGREE: f64 = 111.0;

/// Speed of light in vacuum, km/s.
pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;

/// Fixed per-hop latency of the default model, ms.
pub const DEFAULT_BASE_LATENCY_MS: f64 = 50.0;

/// Parameters of the latency function.  Threaded explicitly through graph
/// construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LatencyModel {
    pub base_latency_ms:     f64,
    pub km_per_degree:       f64,
    pub speed_of_light_km_s: f64,
}

impl LatencyModel {
    /// Every parameter finite; base latency and km/degree non-negative, speed
    /// of light positive.
    pub fn validate(&self) -> CoreResult<()> {
        let checks = [
            ("base_latency_ms", "finite and >= 0", self.base_latency_ms, self.base_latency_ms >= 0.0),
            ("km_per_degree", "finite and >= 0", self.km_per_degree, self.km_per_degree >= 0.0),
            ("speed_of_light_km_s", "finite and > 0", self.speed_of_light_km_s, self.speed_of_light_km_s > 0.0),
        ];
        for (field, requirement, value, ok) in checks {
            if !(ok && value.is_finite()) {
                return Err(CoreError::InvalidLatencyModel { field, requirement, value });
            }
        }
        Ok(())
    }

    /// Latency in milliseconds between two positions.
    #[inline]
    pub fn latency_ms(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        let distance_km = a.degree_distance(b) * self.km_per_degree;
        self.base_latency_ms + (distance_km / self.speed_of_light_km_s) * 1000.0
    }
}

impl Default for LatencyModel {
    fn default() -> Self {
        Self {
            base_latency_ms:     DEFAULT_BASE_LATENCY_MS,
            km_per_degree:       DEFAULT_KM_PER_DEGREE,
            speed_of_light_km_s: SPEED_OF_LIGHT_KM_S,
        }
    }
}
