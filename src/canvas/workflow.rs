//! The canvas aggregate: owns the vertex and connector collections and is
//! the single source of truth both the renderer and the execution planner
//! observe.
//!
//! Ordering discipline: mutate, then redraw — never render mid-mutation.
//! Removing a vertex cascades over its incident connectors (firing one
//! `disconnect` per connector) before the vertex leaves the collection, and
//! issues a single redraw at the end so the renderer never observes an
//! intermediate state.
//!
//! Collections are keyed by monotonically increasing ids, so iteration order
//! equals insertion order and "first hit wins" queries are deterministic.

use std::collections::BTreeMap;

use crate::canvas::connector::{Connector, CONNECTOR_HIT_TOLERANCE};
use crate::canvas::host::{CanvasHost, Scene};
use crate::canvas::id::{ConnectorId, PortId, VertexId};
use crate::canvas::interaction::Gesture;
use crate::canvas::port::Port;
use crate::canvas::vertex::{Vertex, VERTEX_WIDTH};
use crate::geometry::{segment_distance, Point};

/// Where auto-placement starts scanning.
pub const INSERT_ORIGIN: Point = Point::new(50.0, 50.0);
/// Horizontal gap between auto-placed vertices.
pub const INSERT_GAP: f64 = 100.0;
/// Offset into a candidate cell probed for occupancy during auto-placement.
const INSERT_PROBE: f64 = 10.0;

/// The one primitive that can be selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasItem {
    Vertex(VertexId),
    Connector(ConnectorId),
}

/// The interactive graph-editing surface.
///
/// Generic over the opaque payload type `P` a vertex represents and the host
/// `H` that renders the scene and mirrors committed edges.
pub struct Canvas<P, H> {
    pub(crate) host: H,
    pub(crate) vertices: BTreeMap<VertexId, Vertex<P>>,
    pub(crate) connectors: BTreeMap<ConnectorId, Connector>,
    pub(crate) selection: Option<CanvasItem>,
    pub(crate) gesture: Gesture,
    pub(crate) loading: bool,
    next_vertex: u32,
    next_connector: u32,
}

impl<P, H: CanvasHost<P>> Canvas<P, H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            vertices: BTreeMap::new(),
            connectors: BTreeMap::new(),
            selection: None,
            gesture: Gesture::Idle,
            loading: false,
            next_vertex: 0,
            next_connector: 0,
        }
    }

    /// Borrow the host component.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the host component.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // === Mutations ===

    /// Insert a vertex, mark it selected and redraw. Always succeeds.
    pub fn add_vertex(&mut self, vertex: Vertex<P>) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.vertices.insert(id, vertex);
        self.selection = Some(CanvasItem::Vertex(id));
        tracing::debug!(%id, "vertex added");
        self.redraw();
        id
    }

    /// Place a payload at an auto-computed non-overlapping insertion point.
    pub fn place(&mut self, payload: P, ports: Vec<Port>) -> VertexId {
        let p = self.insertion_point();
        self.add_vertex(Vertex::new(p, payload, ports))
    }

    /// Remove a vertex and every connector touching it. Absent ids are
    /// silently accepted as idempotent no-ops.
    ///
    /// The cascade fires one `disconnect` per incident connector while the
    /// vertex is still present, then the vertex goes, then one redraw.
    pub fn remove_vertex(&mut self, id: VertexId) {
        if !self.vertices.contains_key(&id) {
            return;
        }
        let incident: Vec<ConnectorId> = self
            .connectors
            .iter()
            .filter(|(_, c)| c.connects(id))
            .map(|(cid, _)| *cid)
            .collect();
        for cid in &incident {
            if let Some(c) = self.connectors.remove(cid) {
                self.fire_disconnect(&c);
            }
            if self.selection == Some(CanvasItem::Connector(*cid)) {
                self.selection = None;
            }
        }
        self.vertices.remove(&id);
        if self.selection == Some(CanvasItem::Vertex(id)) {
            self.selection = None;
        }
        tracing::debug!(%id, cascaded = incident.len(), "vertex removed");
        self.redraw();
    }

    /// Insert a connector, fire the `connect` hook once and redraw.
    ///
    /// No structural validation happens here; the direction rule is checked
    /// at gesture-commit time, where the candidate endpoints are known.
    pub fn add_connector(&mut self, connector: Connector) -> ConnectorId {
        let id = ConnectorId(self.next_connector);
        self.next_connector += 1;
        let (src, dst) = (connector.source.vertex(), connector.target.vertex());
        self.connectors.insert(id, connector);
        if let (Some(s), Some(t)) = (self.vertices.get(&src), self.vertices.get(&dst)) {
            self.host.connect(&s.payload, &t.payload);
        }
        tracing::debug!(%id, source = %src, target = %dst, "connector added");
        self.redraw();
        id
    }

    /// Remove a connector if present, firing the `disconnect` hook once.
    /// Returns whether anything was removed; absence has no side effects.
    pub fn remove_connector(&mut self, id: ConnectorId) -> bool {
        let Some(connector) = self.connectors.remove(&id) else {
            return false;
        };
        self.fire_disconnect(&connector);
        if self.selection == Some(CanvasItem::Connector(id)) {
            self.selection = None;
        }
        tracing::debug!(%id, "connector removed");
        self.redraw();
        true
    }

    /// Empty the canvas. No per-item hooks fire (bulk reset), any in-progress
    /// gesture ends and the selection is dropped.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.connectors.clear();
        self.selection = None;
        self.gesture = Gesture::Idle;
        tracing::debug!("canvas cleared");
        self.redraw();
    }

    /// Replace the transient selection and redraw.
    pub fn set_selected(&mut self, item: Option<CanvasItem>) {
        self.selection = item;
        self.redraw();
    }

    /// Remove whatever is selected, then clear the selection.
    pub fn remove_selected(&mut self) {
        match self.selection.take() {
            Some(CanvasItem::Vertex(id)) => self.remove_vertex(id),
            Some(CanvasItem::Connector(id)) => {
                self.remove_connector(id);
            }
            None => {}
        }
    }

    /// Select the vertex wrapping the given payload, notifying the host if
    /// the selection actually changed.
    pub fn select_by_payload(&mut self, payload: &P)
    where
        P: PartialEq,
    {
        let found = self
            .vertices
            .iter()
            .find(|(_, v)| v.payload == *payload)
            .map(|(id, _)| *id);
        if let Some(id) = found {
            let previous = self.selection;
            self.set_selected(Some(CanvasItem::Vertex(id)));
            if previous != self.selection {
                if let Some(v) = self.vertices.get(&id) {
                    self.host.selection_changed(Some(&v.payload));
                }
            }
        }
    }

    /// Suppress rendering while bulk-populating; turning the flag off
    /// performs one redraw.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if !loading {
            self.redraw();
        }
    }

    // === Queries ===

    pub fn selected(&self) -> Option<CanvasItem> {
        self.selection
    }

    /// The selected vertex, or `None` if the selection is empty or a
    /// connector.
    pub fn selected_vertex(&self) -> Option<(VertexId, &Vertex<P>)> {
        match self.selection {
            Some(CanvasItem::Vertex(id)) => self.vertices.get(&id).map(|v| (id, v)),
            _ => None,
        }
    }

    /// The payload behind the selected vertex, if any.
    pub fn selected_payload(&self) -> Option<&P> {
        self.selected_vertex().map(|(_, v)| &v.payload)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<P>> {
        self.vertices.get(&id)
    }

    pub fn connector(&self, id: ConnectorId) -> Option<&Connector> {
        self.connectors.get(&id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    /// Whether any vertex exists.
    pub fn has_content(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<P>)> {
        self.vertices.iter().map(|(id, v)| (*id, v))
    }

    /// All connectors, in insertion order.
    pub fn connectors(&self) -> impl Iterator<Item = (ConnectorId, &Connector)> {
        self.connectors.iter().map(|(id, c)| (*id, c))
    }

    /// First vertex (in insertion order) whose body contains the point.
    pub fn vertex_at(&self, p: Point) -> Option<VertexId> {
        self.vertices
            .iter()
            .find(|(_, v)| v.contains(p))
            .map(|(id, _)| *id)
    }

    /// First port (in insertion order) whose hit zone contains the point.
    pub fn port_at(&self, p: Point) -> Option<PortId> {
        self.vertices
            .iter()
            .find_map(|(id, v)| v.port_at(p).map(|index| PortId::new(*id, index)))
    }

    /// First connector (in insertion order) whose segment passes near the
    /// point.
    pub fn connector_at(&self, p: Point) -> Option<ConnectorId> {
        self.connectors
            .iter()
            .find(|(_, c)| {
                match (self.port_center(c.source), self.port_center(c.target)) {
                    (Some(a), Some(b)) => segment_distance(p, a, b) <= CONNECTOR_HIT_TOLERANCE,
                    _ => false,
                }
            })
            .map(|(id, _)| *id)
    }

    /// Resolve a port id to its descriptor.
    pub fn port(&self, id: PortId) -> Option<&Port> {
        self.vertices
            .get(&id.vertex())
            .and_then(|v| v.ports.get(id.port_index() as usize))
    }

    /// Canvas position of a port's center.
    pub fn port_center(&self, id: PortId) -> Option<Point> {
        self.vertices
            .get(&id.vertex())
            .and_then(|v| v.port_center(id.port_index() as usize))
    }

    // === Internals ===

    /// Scan left-to-right from the fixed origin, stepping one cell width
    /// whenever the probe point lands inside an existing vertex, until a free
    /// spot is found.
    fn insertion_point(&self) -> Point {
        let mut x = INSERT_ORIGIN.x;
        let y = INSERT_ORIGIN.y;
        loop {
            let mut overlap = false;
            for v in self.vertices.values() {
                if v.contains(Point::new(x + INSERT_PROBE, y + INSERT_PROBE)) {
                    overlap = true;
                    x += VERTEX_WIDTH + INSERT_GAP;
                }
            }
            if !overlap {
                return Point::new(x, y);
            }
        }
    }

    fn fire_disconnect(&mut self, connector: &Connector) {
        let src = self.vertices.get(&connector.source.vertex());
        let dst = self.vertices.get(&connector.target.vertex());
        if let (Some(s), Some(t)) = (src, dst) {
            self.host.disconnect(&s.payload, &t.payload);
        }
    }

    pub(crate) fn redraw(&mut self) {
        if self.loading {
            return; // don't render while bulk-loading
        }
        self.host.redraw(Scene {
            vertices: &self.vertices,
            connectors: &self.connectors,
            selection: self.selection,
        });
    }
}
