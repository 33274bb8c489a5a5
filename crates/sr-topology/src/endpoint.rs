//! Synthetic ground endpoints (users) grouped into sessions.
//!
//! Each endpoint is placed near one of a fixed set of cities with a uniform
//! ±2° jitter on both axes.

use sr_core::{EndpointId, GeoPoint, SessionId, SimRng};

/// Reference cities endpoints are scattered around.
pub const CITIES: [(&str, GeoPoint); 6] = [
    ("New York",    GeoPoint::new(40.7128, -74.0060)),
    ("Los Angeles", GeoPoint::new(34.0522, -118.2437)),
    ("London",      GeoPoint::new(51.5074, -0.1278)),
    ("Tokyo",       GeoPoint::new(35.6762, 139.6503)),
    ("Paris",       GeoPoint::new(48.8566, 2.3522)),
    ("Sydney",      GeoPoint::new(33.8688, 151.2093)),
];

/// Maximum jitter applied to the city coordinates, degrees.
const JITTER_DEG: f64 = 2.0;

/// Creation timestamps are drawn from 2021-01-01 .. 2022-12-30 (Unix secs).
const CREATED_RANGE: std::ops::RangeInclusive<i64> = 1_609_459_200..=1_672_444_800;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    pub id:                EndpointId,
    pub city:              String,
    pub location:          GeoPoint,
    pub created_unix_secs: i64,
    pub session:           SessionId,
}

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    pub id:        SessionId,
    pub endpoints: Vec<Endpoint>,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        Self { id, endpoints: Vec::new() }
    }

    pub fn add(&mut self, endpoint: Endpoint) {
        self.endpoints.push(endpoint);
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

/// Generate `count` endpoints with ids `first_id..first_id + count`.
pub fn generate_endpoints(
    count:    usize,
    session:  SessionId,
    first_id: u32,
    rng:      &mut SimRng,
) -> Vec<Endpoint> {
    (0..count)
        .map(|i| {
            let (city, base) = CITIES[rng.gen_range(0..CITIES.len())];
            let lat = base.lat + rng.gen_range(-JITTER_DEG..=JITTER_DEG);
            let lon = base.lon + rng.gen_range(-JITTER_DEG..=JITTER_DEG);
            Endpoint {
                id:                EndpointId(first_id + i as u32),
                city:              city.to_owned(),
                location:          GeoPoint::new(lat, lon),
                created_unix_secs: rng.gen_range(CREATED_RANGE),
                session,
            }
        })
        .collect()
}

/// Generate `num_sessions` sessions of `per_session` endpoints each.
/// Endpoint ids keep counting across sessions.
pub fn generate_sessions(num_sessions: usize, per_session: usize, rng: &mut SimRng) -> Vec<Session> {
    let mut next_id = 0u32;
    (0..num_sessions)
        .map(|s| {
            let id = SessionId(s as u32);
            let endpoints = generate_endpoints(per_session, id, next_id, rng);
            next_id += per_session as u32;
            Session { id, endpoints }
        })
        .collect()
}
