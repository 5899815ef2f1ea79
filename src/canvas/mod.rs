//! The interactive graph-editing surface.
//!
//! A [`Canvas`] owns the vertex and connector collections, runs the
//! pointer-gesture state machine and calls back into its [`CanvasHost`] for
//! rendering, execution-graph wiring and UI chrome.
//!
//! # Architecture
//!
//! - **Model** ([`workflow`]) — vertices, ports, connectors; mutations with
//!   cascade semantics; deterministic insertion-order queries.
//! - **Interaction** ([`interaction`]) — pointer events drive graph
//!   mutations through a three-state gesture machine.
//! - **Host seam** ([`host`]) — all side effects (drawing, wiring,
//!   notifications) cross one synchronous trait boundary.

pub mod connector;
pub mod host;
pub mod id;
pub mod interaction;
pub mod port;
pub mod vertex;
pub mod workflow;

pub use connector::{Connector, CONNECTOR_HIT_TOLERANCE};
pub use host::{CanvasHost, NullHost, Scene};
pub use id::{ConnectorId, PortId, VertexId};
pub use interaction::Gesture;
pub use port::{Port, PortDirection};
pub use vertex::{Vertex, PORT_HIT_RADIUS, PORT_RADIUS, VERTEX_HEIGHT, VERTEX_WIDTH};
pub use workflow::{Canvas, CanvasItem, INSERT_GAP, INSERT_ORIGIN};
