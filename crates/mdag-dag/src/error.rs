//! Error types for DAG construction.

use mdag_store::StoreError;

use crate::node::NodeKind;

/// Errors that can occur while encoding a tree.
#[derive(Debug, thiserror::Error)]
pub enum DagError {
    /// A node declared a kind it cannot act as.
    #[error("node {name:?} declares kind {declared} but does not expose it")]
    InvalidNodeKind {
        /// Name reported by the offending node.
        name: String,
        /// The kind the node claimed to be.
        declared: NodeKind,
    },

    /// The store failed an existence check or a write.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Canonical encoding or decoding of an object failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Builder configuration is unusable.
    #[error("invalid builder config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for DAG results.
pub type DagResult<T> = Result<T, DagError>;
