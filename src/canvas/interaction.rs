//! Pointer-gesture state machine.
//!
//! Raw pointer events arrive here and are turned into graph mutations. One
//! gesture (pointer-down to pointer-up) is in progress at a time; every
//! gesture ends back in [`Gesture::Idle`] on pointer-up regardless of
//! outcome. Handlers run to completion, never panic past this boundary and
//! report failures only through [`CanvasHost::notify`].

use crate::canvas::connector::Connector;
use crate::canvas::host::CanvasHost;
use crate::canvas::id::VertexId;
use crate::canvas::workflow::{Canvas, CanvasItem};
use crate::error::CanvasError;
use crate::geometry::Point;

/// The current gesture mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Idle,
    /// A vertex body is being dragged. `grab_offset` is the vector from the
    /// pointer to the vertex origin at pointer-down, so the vertex tracks
    /// the pointer smoothly instead of snapping its origin to it.
    DraggingVertex {
        vertex: VertexId,
        grab_offset: Point,
    },
    /// A rubber-band connection is being drawn from `anchor`.
    DrawingArc { anchor: Point },
}

impl<P, H: CanvasHost<P>> Canvas<P, H> {
    /// Current gesture mode.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Pointer pressed. On an output port: start drawing an arc. On a vertex
    /// body: select it (silently — the host is only notified on click) and
    /// start dragging. Anywhere else: stay idle, selection untouched.
    pub fn pointer_down(&mut self, p: Point) {
        let on_output_port = self
            .port_at(p)
            .and_then(|id| self.port(id))
            .is_some_and(|port| port.direction.is_output());
        if on_output_port {
            self.gesture = Gesture::DrawingArc { anchor: p };
            return;
        }
        if let Some(id) = self.vertex_at(p) {
            if let Some(v) = self.vertices.get(&id) {
                self.selection = Some(CanvasItem::Vertex(id));
                self.gesture = Gesture::DraggingVertex {
                    vertex: id,
                    grab_offset: v.position - p,
                };
            }
        }
    }

    /// Pointer moved. Tracks the active gesture; a no-op while idle.
    pub fn pointer_move(&mut self, p: Point) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::DrawingArc { anchor } => {
                self.redraw();
                self.host.preview_connection(anchor, p);
            }
            Gesture::DraggingVertex {
                vertex,
                grab_offset,
            } => {
                if let Some(v) = self.vertices.get_mut(&vertex) {
                    v.position = p + grab_offset;
                }
                self.redraw();
            }
        }
    }

    /// Pointer released. Commits an arc gesture if both endpoints resolve to
    /// ports and the direction rule holds; a direction violation is surfaced
    /// through `notify`, while an endpoint that hits no port aborts silently.
    /// Ends every gesture back in `Idle`.
    pub fn pointer_up(&mut self, p: Point) {
        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);
        match gesture {
            // Nothing was in progress; no redraw either.
            Gesture::Idle => return,
            Gesture::DrawingArc { anchor } => {
                let source = self.port_at(anchor);
                let target = self.port_at(p);
                if let (Some(source), Some(target)) = (source, target) {
                    let source_is_output = self
                        .port(source)
                        .is_some_and(|port| port.direction.is_output());
                    let target_is_input = self
                        .port(target)
                        .is_some_and(|port| port.direction.is_input());
                    if source_is_output && target_is_input {
                        self.add_connector(Connector::new(source, target));
                    } else {
                        tracing::warn!(?source, ?target, "rejected connection: wrong direction");
                        self.host.notify(&CanvasError::InvalidDirection);
                    }
                }
            }
            Gesture::DraggingVertex { .. } => {}
        }
        self.redraw();
    }

    /// Click: resolve the primitive under the pointer (vertex before
    /// connector, first hit in insertion order), update the selection —
    /// possibly to none — notify the host of the logical selection, redraw.
    pub fn click(&mut self, p: Point) {
        self.selection = self
            .vertex_at(p)
            .map(CanvasItem::Vertex)
            .or_else(|| self.connector_at(p).map(CanvasItem::Connector));
        let payload = match self.selection {
            Some(CanvasItem::Vertex(id)) => self.vertices.get(&id).map(|v| &v.payload),
            _ => None,
        };
        self.host.selection_changed(payload);
        self.redraw();
    }

    /// Double-click: click resolution, then open the label-editing
    /// affordance if a vertex ended up selected.
    pub fn double_click(&mut self, p: Point) {
        self.click(p);
        if let Some(CanvasItem::Vertex(id)) = self.selection {
            if let Some(v) = self.vertices.get(&id) {
                self.host.open_label_editor(id, &v.payload);
            }
        }
    }
}
