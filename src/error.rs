// Error type shared by the network, search and elicitation layers

use crate::models::LocationId;
use thiserror::Error;

/// Errors raised by route advisor operations.
///
/// Absence of a path is not represented here: searches report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A route references a location that does not exist
    #[error("route {source_id} -> {destination_id} references an unknown location")]
    InvalidEndpoint {
        source_id: LocationId,
        destination_id: LocationId,
    },

    /// A route was declared with the wildcard mode
    #[error("the wildcard mode `any` cannot be used as a route's own mode")]
    InvalidMode,

    /// A route attribute is negative or not finite
    #[error("route {attribute} must be a finite non-negative number, got {value}")]
    InvalidAttribute { attribute: &'static str, value: f64 },

    /// A search endpoint is not a known location
    #[error("unknown location id {0}")]
    UnknownLocation(LocationId),

    /// A transport mode string could not be parsed
    #[error("unknown transport mode `{0}`")]
    UnknownMode(String),

    /// The search was stopped through its cancel flag
    #[error("search cancelled")]
    Cancelled,

    /// The walk reached a node id the decision tree does not hold
    #[error("decision tree node {0} missing")]
    MissingNode(usize),

    /// The answer source could not supply an answer
    #[error("answer source failed: {0}")]
    AnswerSource(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;
