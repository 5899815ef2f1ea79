//! Vertices: positioned canvas nodes wrapping an opaque payload.
//!
//! A vertex has a fixed visual size. Input ports sit on its left edge and
//! output ports on its right edge, spaced evenly; port positions are derived
//! from the vertex bounds on demand rather than stored.

use crate::canvas::port::{Port, PortDirection};
use crate::geometry::{Point, Rect};

/// Fixed visual width of a vertex.
pub const VERTEX_WIDTH: f64 = 100.0;
/// Fixed visual height of a vertex.
pub const VERTEX_HEIGHT: f64 = 60.0;
/// Visual radius of a port circle.
pub const PORT_RADIUS: f64 = 6.0;
/// Pointer hits a port anywhere within twice its visual radius.
pub const PORT_HIT_RADIUS: f64 = PORT_RADIUS * 2.0;

/// A node placed on the canvas, wrapping an external payload reference.
#[derive(Debug, Clone)]
pub struct Vertex<P> {
    /// Top-left corner in canvas coordinates.
    pub position: Point,
    /// The opaque external object this vertex represents.
    pub payload: P,
    /// Attachment points, fixed for the vertex's lifetime.
    pub ports: Vec<Port>,
}

impl<P> Vertex<P> {
    pub fn new(position: Point, payload: P, ports: Vec<Port>) -> Self {
        Self {
            position,
            payload,
            ports,
        }
    }

    /// Bounding rectangle of the vertex body.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, VERTEX_WIDTH, VERTEX_HEIGHT)
    }

    /// Whether the point lies inside the vertex body.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Index of the named port, if present.
    pub fn port_index(&self, name: &str) -> Option<u16> {
        self.ports
            .iter()
            .position(|port| port.name == name)
            .map(|i| i as u16)
    }

    /// Canvas position of a port's center.
    ///
    /// Ports are spaced evenly along the edge matching their direction:
    /// inputs down the left edge, outputs down the right edge.
    pub fn port_center(&self, index: usize) -> Option<Point> {
        let port = self.ports.get(index)?;
        let group: Vec<usize> = self
            .ports
            .iter()
            .enumerate()
            .filter(|(_, p)| p.direction == port.direction)
            .map(|(i, _)| i)
            .collect();
        // index is a member of its own direction group
        let ordinal = group.iter().position(|&i| i == index)?;

        let x = match port.direction {
            PortDirection::Input => self.position.x,
            PortDirection::Output => self.position.x + VERTEX_WIDTH,
        };
        let y = self.position.y + VERTEX_HEIGHT * (ordinal + 1) as f64 / (group.len() + 1) as f64;
        Some(Point::new(x, y))
    }

    /// First port whose hit zone contains the point.
    pub fn port_at(&self, p: Point) -> Option<u16> {
        (0..self.ports.len()).find_map(|i| {
            let center = self.port_center(i)?;
            (center.distance(p) <= PORT_HIT_RADIUS).then_some(i as u16)
        })
    }
}
