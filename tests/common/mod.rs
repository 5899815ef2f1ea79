//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;
pub mod hosts;

use std::sync::Once;

use flowcanvas::{Canvas, Point, Port, PortId, VertexId};
use hosts::RecordingHost;

static TRACING: Once = Once::new();

/// Install the fmt subscriber once per test binary. Log output is opt-in
/// via `RUST_LOG`, e.g. `RUST_LOG=flowcanvas=debug cargo test`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A canvas over string payloads with a recording host.
pub type TestCanvas = Canvas<String, RecordingHost>;

pub fn canvas() -> TestCanvas {
    init_tracing();
    Canvas::new(RecordingHost::default())
}

/// The usual one-input-one-output port set of a pipeline step.
pub fn io_ports() -> Vec<Port> {
    vec![Port::input("in"), Port::output("out")]
}

/// Center of a vertex's port, by port index.
pub fn port_point(canvas: &TestCanvas, vertex: VertexId, index: u16) -> Point {
    canvas
        .port_center(PortId::new(vertex, index))
        .expect("port exists")
}

/// Run the full arc gesture from one point to another.
pub fn draw_connection(canvas: &mut TestCanvas, from: Point, to: Point) {
    canvas.pointer_down(from);
    canvas.pointer_move(to);
    canvas.pointer_up(to);
}
