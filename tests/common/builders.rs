//! Test data builders for creating test objects

use flowcanvas::{Point, Port, Vertex};

/// Builder for creating test vertices
pub struct VertexBuilder {
    payload: String,
    position: Point,
    ports: Vec<Port>,
}

impl VertexBuilder {
    pub fn new(payload: &str) -> Self {
        Self {
            payload: payload.to_string(),
            position: Point::new(50.0, 50.0),
            ports: vec![Port::input("in"), Port::output("out")],
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn ports(mut self, ports: Vec<Port>) -> Self {
        self.ports = ports;
        self
    }

    /// A step with only an output port (a pipeline reader).
    pub fn source_only(mut self) -> Self {
        self.ports = vec![Port::output("out")];
        self
    }

    /// A step with only an input port (a pipeline writer).
    pub fn sink_only(mut self) -> Self {
        self.ports = vec![Port::input("in")];
        self
    }

    pub fn build(self) -> Vertex<String> {
        Vertex::new(self.position, self.payload, self.ports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowcanvas::PortDirection;

    #[test]
    fn test_vertex_builder() {
        let v = VertexBuilder::new("step").at(10.0, 20.0).source_only().build();
        assert_eq!(v.payload, "step");
        assert_eq!(v.position, Point::new(10.0, 20.0));
        assert_eq!(v.ports.len(), 1);
        assert_eq!(v.ports[0].direction, PortDirection::Output);
    }
}
