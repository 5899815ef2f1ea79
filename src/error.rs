//! Error handling for the canvas core.
//!
//! This module defines the crate error type and a Result alias used
//! throughout the library. Nothing here is fatal: gesture failures are
//! surfaced to the host as notifications and document failures leave the
//! in-memory graph untouched.

use thiserror::Error;

/// Main error type for canvas operations.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// A drawn connection violated the output-to-input direction rule.
    #[error("Output port cannot be the target of a connection")]
    InvalidDirection,

    /// A layout document failed to parse.
    #[error("Malformed layout document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A connector record names a vertex id that is not in the document.
    #[error("Connector references unknown vertex id {id}")]
    UnknownVertex { id: u32 },

    /// A connector record names a port that does not exist on its vertex.
    #[error("Vertex {vertex} has no port named `{port}`")]
    UnknownPort { vertex: u32, port: String },
}

/// Result type alias for canvas operations.
pub type Result<T> = std::result::Result<T, CanvasError>;
