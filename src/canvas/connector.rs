//! Connectors: directed edges from an output port to an input port.

use crate::canvas::id::{PortId, VertexId};

/// Pointer hits a connector within this distance of its segment.
pub const CONNECTOR_HIT_TOLERANCE: f64 = 5.0;

/// A directed edge between two ports.
///
/// The model itself does not forbid self-loops or parallel duplicates; the
/// direction rule is enforced upstream when a gesture is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connector {
    /// The output port the edge leaves from.
    pub source: PortId,
    /// The input port the edge arrives at.
    pub target: PortId,
}

impl Connector {
    pub fn new(source: PortId, target: PortId) -> Self {
        Self { source, target }
    }

    /// Whether either endpoint belongs to the given vertex.
    pub fn connects(&self, vertex: VertexId) -> bool {
        self.source.vertex() == vertex || self.target.vertex() == vertex
    }
}
