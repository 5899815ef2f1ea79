//! Port descriptors for canvas vertices.
//!
//! Each vertex declares its ports (inputs/outputs) when it is created. A
//! connector may only run from an output port to an input port; the gesture
//! handler enforces that rule at commit time.

use serde::{Deserialize, Serialize};

/// Whether a port is an input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    Input,
    Output,
}

impl PortDirection {
    #[inline]
    pub fn is_input(self) -> bool {
        matches!(self, PortDirection::Input)
    }

    #[inline]
    pub fn is_output(self) -> bool {
        matches!(self, PortDirection::Output)
    }
}

/// A directional attachment point on a vertex.
///
/// Ports exist for the lifetime of their vertex and are addressed by name in
/// persisted documents. Their canvas position is derived from the owning
/// vertex's bounds, not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    pub direction: PortDirection,
}

impl Port {
    pub fn input(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: PortDirection::Input,
        }
    }

    pub fn output(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: PortDirection::Output,
        }
    }
}
