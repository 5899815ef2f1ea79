//! Host-side collaborator interface.
//!
//! The canvas core owns the graph; everything user-visible happens through
//! the [`CanvasHost`] callbacks. They are invoked synchronously from within
//! mutation handlers and must not retain access to the canvas beyond the
//! call:
//!
//! - **Rendering** — `redraw` after every committed mutation, plus the
//!   transient `preview_connection` rubber band while an arc gesture is live.
//! - **Execution wiring** — `connect`/`disconnect` fire exactly once per
//!   committed connector add/remove so a downstream execution planner can
//!   mirror the displayed graph.
//! - **UI chrome** — selection-change notification, the label-editing
//!   affordance, and user-visible diagnostics (`notify`), rendered by the
//!   host however it likes (toast, dialog, status bar).

use std::collections::BTreeMap;

use crate::canvas::connector::Connector;
use crate::canvas::id::{ConnectorId, VertexId};
use crate::canvas::vertex::Vertex;
use crate::canvas::workflow::CanvasItem;
use crate::error::CanvasError;
use crate::geometry::Point;

/// Read-only view of the canvas passed to [`CanvasHost::redraw`].
///
/// Both maps iterate in insertion order (ids are monotonic).
pub struct Scene<'a, P> {
    pub vertices: &'a BTreeMap<VertexId, Vertex<P>>,
    pub connectors: &'a BTreeMap<ConnectorId, Connector>,
    pub selection: Option<CanvasItem>,
}

/// Callbacks a hosting component provides to the canvas.
///
/// `redraw`, `connect` and `disconnect` are required; the remaining chrome
/// callbacks default to no-ops so headless hosts stay small.
pub trait CanvasHost<P> {
    /// Redraw the whole scene. Invoked after every committed mutation.
    fn redraw(&mut self, scene: Scene<'_, P>);

    /// An edge was committed; mirror it in the execution graph.
    fn connect(&mut self, source: &P, target: &P);

    /// An edge was removed; drop it from the execution graph.
    fn disconnect(&mut self, source: &P, target: &P);

    /// Draw the rubber-band line of an in-progress arc gesture. Called after
    /// `redraw`, never part of the committed graph.
    fn preview_connection(&mut self, _from: Point, _to: Point) {}

    /// The logical selection changed via a click.
    fn selection_changed(&mut self, _selected: Option<&P>) {}

    /// A vertex was double-clicked; open a label editor for it.
    fn open_label_editor(&mut self, _vertex: VertexId, _payload: &P) {}

    /// Surface a recoverable failure to the user.
    fn notify(&mut self, _notice: &CanvasError) {}
}

/// Host that ignores every callback. Useful for headless tools and benches.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl<P> CanvasHost<P> for NullHost {
    fn redraw(&mut self, _scene: Scene<'_, P>) {}
    fn connect(&mut self, _source: &P, _target: &P) {}
    fn disconnect(&mut self, _source: &P, _target: &P) {}
}
