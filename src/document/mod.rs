//! Layout document: the persistable representation of the canvas.
//!
//! A [`LayoutDocument`] carries two ordered lists — vertex records and
//! connector records. Vertices are named by an id assigned at save time;
//! connectors reference vertices by that id and ports by name, never by
//! in-memory identity, so a reload can rebuild the object graph.
//!
//! Loading validates the whole document against itself before touching the
//! live canvas: a malformed document fails with a structured error and the
//! prior in-memory graph is preserved untouched.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::canvas::connector::Connector;
use crate::canvas::host::CanvasHost;
use crate::canvas::id::{PortId, VertexId};
use crate::canvas::interaction::Gesture;
use crate::canvas::port::Port;
use crate::canvas::vertex::Vertex;
use crate::canvas::workflow::Canvas;
use crate::error::{CanvasError, Result};
use crate::geometry::Point;

/// Serialized snapshot of a canvas layout.
///
/// List order is stable for a single save and survives a round trip; the
/// transient selection is deliberately not part of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutDocument<P> {
    pub vertices: Vec<VertexRecord<P>>,
    pub connectors: Vec<ConnectorRecord>,
}

/// One persisted vertex: save-time id, position, payload and port set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexRecord<P> {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub payload: P,
    pub ports: Vec<Port>,
}

/// One persisted connector, endpoints named by vertex id and port name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorRecord {
    pub source: u32,
    pub source_port: String,
    pub target: u32,
    pub target_port: String,
}

impl<P> LayoutDocument<P> {
    pub fn to_json(&self) -> Result<String>
    where
        P: Serialize,
    {
        serde_json::to_string_pretty(self).map_err(CanvasError::Malformed)
    }

    pub fn from_json(json: &str) -> Result<Self>
    where
        P: DeserializeOwned,
    {
        serde_json::from_str(json).map_err(CanvasError::Malformed)
    }

    /// Check that every connector endpoint resolves within this document.
    fn validate(&self) -> Result<()> {
        for record in &self.connectors {
            self.resolve_endpoint(record.source, &record.source_port)?;
            self.resolve_endpoint(record.target, &record.target_port)?;
        }
        Ok(())
    }

    fn resolve_endpoint(&self, vertex: u32, port: &str) -> Result<()> {
        let record = self
            .vertices
            .iter()
            .find(|v| v.id == vertex)
            .ok_or(CanvasError::UnknownVertex { id: vertex })?;
        if record.ports.iter().any(|p| p.name == port) {
            Ok(())
        } else {
            Err(CanvasError::UnknownPort {
                vertex,
                port: port.to_string(),
            })
        }
    }
}

impl<P, H: CanvasHost<P>> Canvas<P, H> {
    /// Snapshot the canvas as a document, in insertion order.
    pub fn to_document(&self) -> LayoutDocument<P>
    where
        P: Clone,
    {
        let vertices = self
            .vertices
            .iter()
            .map(|(id, v)| VertexRecord {
                id: id.0,
                x: v.position.x,
                y: v.position.y,
                payload: v.payload.clone(),
                ports: v.ports.clone(),
            })
            .collect();
        let connectors = self
            .connectors
            .values()
            .filter_map(|c| {
                let source_port = self.port(c.source)?.name.clone();
                let target_port = self.port(c.target)?.name.clone();
                Some(ConnectorRecord {
                    source: c.source.vertex().0,
                    source_port,
                    target: c.target.vertex().0,
                    target_port,
                })
            })
            .collect();
        LayoutDocument {
            vertices,
            connectors,
        }
    }

    /// Replace the canvas contents with the document's.
    ///
    /// The document is validated in full first; on failure the live graph is
    /// untouched. While applying, rendering is suspended and one redraw runs
    /// at the end. The `connect` hook fires per restored connector so the
    /// execution graph is rebuilt alongside the displayed one.
    pub fn load_document(&mut self, doc: LayoutDocument<P>) -> Result<()> {
        doc.validate()?;

        let (vertex_total, connector_total) = (doc.vertices.len(), doc.connectors.len());
        self.set_loading(true);
        self.vertices.clear();
        self.connectors.clear();
        self.selection = None;
        self.gesture = Gesture::Idle;

        let mut id_map: HashMap<u32, VertexId> = HashMap::new();
        for record in doc.vertices {
            let vid = self.add_vertex(Vertex::new(
                Point::new(record.x, record.y),
                record.payload,
                record.ports,
            ));
            id_map.insert(record.id, vid);
        }
        for record in doc.connectors {
            // Validated above; resolve defensively all the same.
            let source = id_map.get(&record.source).copied().and_then(|vid| {
                let index = self.vertex(vid)?.port_index(&record.source_port)?;
                Some(PortId::new(vid, index))
            });
            let target = id_map.get(&record.target).copied().and_then(|vid| {
                let index = self.vertex(vid)?.port_index(&record.target_port)?;
                Some(PortId::new(vid, index))
            });
            if let (Some(source), Some(target)) = (source, target) {
                self.add_connector(Connector::new(source, target));
            }
        }
        self.set_loading(false);
        tracing::debug!(
            vertices = vertex_total,
            connectors = connector_total,
            "document loaded"
        );
        Ok(())
    }

    /// Serialize the canvas to a JSON document string.
    pub fn to_json(&self) -> Result<String>
    where
        P: Clone + Serialize,
    {
        self.to_document().to_json()
    }

    /// Parse a JSON document string and load it, leaving the canvas as it
    /// was if the string does not parse or validate.
    pub fn load_json(&mut self, json: &str) -> Result<()>
    where
        P: DeserializeOwned,
    {
        self.load_document(LayoutDocument::from_json(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_malformed() {
        let json = r#"{ "vertices": [ { "id": 0, "x": 1.0 } ], "connectors": [] }"#;
        let err = LayoutDocument::<String>::from_json(json).unwrap_err();
        match err {
            CanvasError::Malformed(e) => assert!(e.to_string().contains('y')),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_unknown_vertex() {
        let doc = LayoutDocument::<String> {
            vertices: vec![],
            connectors: vec![ConnectorRecord {
                source: 9,
                source_port: "out".into(),
                target: 9,
                target_port: "in".into(),
            }],
        };
        assert!(matches!(
            doc.validate(),
            Err(CanvasError::UnknownVertex { id: 9 })
        ));
    }

    #[test]
    fn test_validate_unknown_port() {
        let doc = LayoutDocument::<String> {
            vertices: vec![VertexRecord {
                id: 0,
                x: 0.0,
                y: 0.0,
                payload: "step".into(),
                ports: vec![Port::output("out")],
            }],
            connectors: vec![ConnectorRecord {
                source: 0,
                source_port: "out".into(),
                target: 0,
                target_port: "in".into(),
            }],
        };
        assert!(matches!(
            doc.validate(),
            Err(CanvasError::UnknownPort { vertex: 0, .. })
        ));
    }
}
