//! Topology-subsystem error type.

use thiserror::Error;

use sr_core::CoreError;

#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("cannot generate a constellation with zero nodes")]
    Empty,

    #[error("invalid {what} range: {min} .. {max}")]
    InvalidRange { what: &'static str, min: f64, max: f64 },

    #[error("anchor index has no nodes")]
    NoNodes,

    #[error("no endpoints to anchor")]
    NoEndpoints,

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type TopologyResult<T> = Result<T, TopologyError>;
