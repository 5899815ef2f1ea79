//! # flowcanvas: Interactive Node-Graph Canvas Core
//!
//! The editing surface of a visual pipeline editor: users place nodes on a
//! canvas, drag them around and draw connections between their ports; the
//! resulting layout can be saved to and restored from a JSON document.
//!
//! This crate is the core only. It owns the in-memory graph (vertices,
//! ports, connectors), the pointer-gesture state machine and the structural
//! connection rules, and stays toolkit-agnostic: drawing, execution-graph
//! wiring and UI chrome all happen behind the [`CanvasHost`] callback seam.
//!
//! ## Architecture
//!
//! - **Geometry** ([`geometry`]) — points, rectangles, hit-test helpers; pure functions
//! - **Canvas** ([`canvas`]) — the graph model and the gesture state machine
//! - **Document** ([`document`]) — serde-based save/load of the layout
//! - **Host seam** ([`canvas::host`]) — synchronous callbacks for rendering,
//!   connect/disconnect mirroring, selection notification and diagnostics
//!
//! Everything runs on one logical thread: each pointer-event handler runs to
//! completion, including its redraw, before the next event is processed.
//!
//! ## Example
//!
//! ```
//! use flowcanvas::{Canvas, NullHost, Port, Point};
//!
//! let mut canvas: Canvas<String, NullHost> = Canvas::new(NullHost);
//!
//! // Place two pipeline steps; the second lands to the right of the first.
//! let reader = canvas.place("reader".to_string(), vec![Port::output("out")]);
//! let writer = canvas.place(
//!     "writer".to_string(),
//!     vec![Port::input("in"), Port::output("out")],
//! );
//!
//! // Drag a connection from reader's output port to writer's input port.
//! let from = canvas.port_center(flowcanvas::PortId::new(reader, 0)).unwrap();
//! let to = canvas.port_center(flowcanvas::PortId::new(writer, 0)).unwrap();
//! canvas.pointer_down(from);
//! canvas.pointer_move(to);
//! canvas.pointer_up(to);
//! assert_eq!(canvas.connector_count(), 1);
//!
//! // Round-trip the layout.
//! let json = canvas.to_json().unwrap();
//! canvas.load_json(&json).unwrap();
//! assert_eq!(canvas.vertex_count(), 2);
//! ```

pub mod canvas;
pub mod document;
pub mod error;
pub mod geometry;

// Re-export commonly used types
pub use canvas::{
    Canvas, CanvasHost, CanvasItem, Connector, ConnectorId, Gesture, NullHost, Port,
    PortDirection, PortId, Scene, Vertex, VertexId, VERTEX_HEIGHT, VERTEX_WIDTH,
};
pub use document::{ConnectorRecord, LayoutDocument, VertexRecord};
pub use error::{CanvasError, Result};
pub use geometry::{Point, Rect};
