//! `sr-topology` — inputs to the route-cost engines.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`grid`]     | `GridSpec`, `generate_constellation`                       |
//! | [`endpoint`] | `Endpoint`, `Session`, `generate_endpoints`, `generate_sessions` |
//! | [`anchor`]   | `AnchorIndex` (R-tree), `AnchorMap`                        |
//! | [`error`]    | `TopologyError`, `TopologyResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod anchor;
pub mod endpoint;
pub mod error;
pub mod grid;


pub use anchor::{AnchorIndex, AnchorMap};
pub use endpoint::{generate_endpoints, generate_sessions, Endpoint, Session, CITIES};
pub use error::{TopologyError, TopologyResult};
pub use grid::{generate_constellation, GridSpec};
