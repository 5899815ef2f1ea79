//! Integration tests for the serialization adapter: round-trip law, bulk
//! load behavior and structured failure handling.

mod common;

use common::builders::VertexBuilder;
use flowcanvas::{
    CanvasError, Connector, ConnectorRecord, LayoutDocument, Point, Port, PortId, VertexRecord,
};

/// Order-independent, id-independent view of a document: vertices in list
/// order, connectors as a sorted multiset keyed by vertex list positions.
fn normalized(
    doc: &LayoutDocument<String>,
) -> (
    Vec<(f64, f64, String, Vec<Port>)>,
    Vec<(usize, String, usize, String)>,
) {
    let vertices: Vec<_> = doc
        .vertices
        .iter()
        .map(|v| (v.x, v.y, v.payload.clone(), v.ports.clone()))
        .collect();
    let index_of = |id: u32| {
        doc.vertices
            .iter()
            .position(|v| v.id == id)
            .expect("connector endpoint present")
    };
    let mut connectors: Vec<_> = doc
        .connectors
        .iter()
        .map(|c| {
            (
                index_of(c.source),
                c.source_port.clone(),
                index_of(c.target),
                c.target_port.clone(),
            )
        })
        .collect();
    connectors.sort();
    (vertices, connectors)
}

fn populated_canvas() -> common::TestCanvas {
    let mut canvas = common::canvas();
    let a = canvas.add_vertex(VertexBuilder::new("reader").at(50.0, 50.0).source_only().build());
    let b = canvas.add_vertex(VertexBuilder::new("cleaner").at(250.125, 75.0625).build());
    let c = canvas.add_vertex(VertexBuilder::new("writer").at(450.0, 50.0).sink_only().build());
    canvas.add_connector(Connector::new(PortId::new(a, 0), PortId::new(b, 0)));
    canvas.add_connector(Connector::new(PortId::new(b, 1), PortId::new(c, 0)));
    // A parallel duplicate of the first edge; the model permits it and the
    // document must carry it.
    canvas.add_connector(Connector::new(PortId::new(a, 0), PortId::new(b, 0)));
    canvas
}

#[test]
fn test_empty_round_trip() {
    let canvas = common::canvas();
    let json = canvas.to_json().unwrap();
    let mut restored = common::canvas();
    restored.load_json(&json).unwrap();
    assert!(!restored.has_content());
    assert_eq!(restored.connector_count(), 0);
}

#[test]
fn test_round_trip_preserves_layout() {
    let canvas = populated_canvas();
    let saved = canvas.to_document();

    let mut restored = common::canvas();
    restored
        .load_json(&saved.to_json().unwrap())
        .unwrap();

    assert_eq!(normalized(&saved), normalized(&restored.to_document()));
}

#[test]
fn test_round_trip_after_removal_keeps_remaining_layout() {
    let mut canvas = populated_canvas();
    // Drop the middle step; its three incident connectors cascade away.
    let cleaner = canvas
        .vertices()
        .find(|(_, v)| v.payload == "cleaner")
        .map(|(id, _)| id)
        .unwrap();
    canvas.remove_vertex(cleaner);
    let saved = canvas.to_document();
    assert_eq!(saved.vertices.len(), 2);
    assert_eq!(saved.connectors.len(), 0);

    let mut restored = common::canvas();
    restored.load_document(saved.clone()).unwrap();
    assert_eq!(normalized(&saved), normalized(&restored.to_document()));
}

#[test]
fn test_load_fires_connect_per_connector_and_one_redraw() {
    let canvas = populated_canvas();
    let doc = canvas.to_document();

    let mut restored = common::canvas();
    restored.host_mut().reset();
    restored.load_document(doc).unwrap();

    assert_eq!(restored.host().connects.len(), 3);
    // Rendering is suspended during the bulk load: exactly one redraw.
    assert_eq!(restored.host().redraws, 1);
}

#[test]
fn test_load_replaces_previous_contents_without_hooks() {
    let mut canvas = populated_canvas();
    canvas.host_mut().reset();
    canvas
        .load_document(LayoutDocument {
            vertices: vec![VertexRecord {
                id: 0,
                x: 10.0,
                y: 20.0,
                payload: "solo".to_string(),
                ports: vec![Port::output("out")],
            }],
            connectors: vec![],
        })
        .unwrap();

    assert_eq!(canvas.vertex_count(), 1);
    assert_eq!(canvas.connector_count(), 0);
    // Bulk reset: the replaced connectors fire no disconnect hooks.
    assert!(canvas.host().disconnects.is_empty());
}

#[test]
fn test_load_with_unknown_vertex_leaves_canvas_untouched() {
    let mut canvas = populated_canvas();
    canvas.host_mut().reset();
    let bad = LayoutDocument {
        vertices: vec![],
        connectors: vec![ConnectorRecord {
            source: 7,
            source_port: "out".to_string(),
            target: 8,
            target_port: "in".to_string(),
        }],
    };

    let err = canvas.load_document(bad).unwrap_err();
    assert!(matches!(err, CanvasError::UnknownVertex { id: 7 }));
    assert_eq!(canvas.vertex_count(), 3);
    assert_eq!(canvas.connector_count(), 3);
    assert_eq!(canvas.host().redraws, 0);
}

#[test]
fn test_load_with_unknown_port_names_the_port() {
    let mut canvas = common::canvas();
    let bad = LayoutDocument {
        vertices: vec![VertexRecord {
            id: 0,
            x: 0.0,
            y: 0.0,
            payload: "step".to_string(),
            ports: vec![Port::output("out")],
        }],
        connectors: vec![ConnectorRecord {
            source: 0,
            source_port: "out".to_string(),
            target: 0,
            target_port: "in".to_string(),
        }],
    };
    let err = canvas.load_document(bad).unwrap_err();
    match err {
        CanvasError::UnknownPort { vertex, port } => {
            assert_eq!(vertex, 0);
            assert_eq!(port, "in");
        }
        other => panic!("expected UnknownPort, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_is_reported_and_recoverable() {
    let mut canvas = populated_canvas();
    let err = canvas.load_json("{ this is not json").unwrap_err();
    assert!(matches!(err, CanvasError::Malformed(_)));
    // The session continues on the prior graph.
    assert_eq!(canvas.vertex_count(), 3);
    assert_eq!(canvas.connector_count(), 3);
}

#[test]
fn test_positions_survive_exactly() {
    let canvas = populated_canvas();
    let mut restored = common::canvas();
    restored.load_json(&canvas.to_json().unwrap()).unwrap();
    let cleaner = restored
        .vertices()
        .find(|(_, v)| v.payload == "cleaner")
        .map(|(_, v)| v.position)
        .unwrap();
    assert_eq!(cleaner, Point::new(250.125, 75.0625));
}
