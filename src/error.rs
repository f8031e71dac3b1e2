use thiserror::Error;

use crate::node::NodeId;

/// Errors raised by the store and by the stepwise algorithms.
///
/// Every rejected store operation leaves slots, open slots and membership untouched.
/// Reaching the end of a search without finding the target is *not* an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The operation referenced a node id that is not live
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// Self-joins and similar malformed requests
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A method was called out of sequence, or an internal invariant does not hold
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
}

impl GraphError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GraphError::InvalidArgument(msg.into())
    }

    pub(crate) fn precondition(msg: impl Into<String>) -> Self {
        GraphError::PreconditionViolated(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
