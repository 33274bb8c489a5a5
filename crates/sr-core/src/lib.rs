//! `sr-core` — foundational types for the `rust_sr` route-cost workspace.
//!
//! Every other `sr-*` crate depends on this one.  It has no `sr-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `NodeId`, `EdgeId`, `EndpointId`, `SessionId`           |
//! | [`geo`]      | `GeoPoint`, planar degree distance                      |
//! | [`latency`]  | `LatencyModel` — link latency as a function of position |
//! | [`topology`] | `Topology`, `Adjacency`, structural validation          |
//! | [`rng`]      | `SimRng` (seeded, derivable child streams)              |
//! | [`error`]    | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod latency;
pub mod rng;
pub mod topology;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, EndpointId, NodeId, SessionId};
pub use latency::LatencyModel;
pub use rng::SimRng;
pub use topology::{Adjacency, Topology};
