//! Layout error types.

use thiserror::Error;

use crate::tree::NodeId;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("scale {requested} is outside [{min}, {max}]")]
    OutOfBounds { requested: f64, min: f64, max: f64 },

    #[error("adding {child} under {parent} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("node {0} is not a group")]
    NotAGroup(NodeId),

    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Shorthand for an `InvalidConfiguration` error.
pub(crate) fn invalid(message: impl Into<String>) -> LayoutError {
    LayoutError::InvalidConfiguration(message.into())
}
