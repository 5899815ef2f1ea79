//! Recording host for asserting on canvas side effects.

use flowcanvas::{CanvasError, CanvasHost, Point, Scene, VertexId};

/// Host that records every callback it receives.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub redraws: usize,
    pub previews: Vec<(Point, Point)>,
    pub connects: Vec<(String, String)>,
    pub disconnects: Vec<(String, String)>,
    pub selections: Vec<Option<String>>,
    pub label_edits: Vec<(VertexId, String)>,
    pub notices: Vec<String>,
}

impl RecordingHost {
    /// Forget everything recorded so far (counts included).
    pub fn reset(&mut self) {
        *self = RecordingHost::default();
    }
}

impl CanvasHost<String> for RecordingHost {
    fn redraw(&mut self, _scene: Scene<'_, String>) {
        self.redraws += 1;
    }

    fn connect(&mut self, source: &String, target: &String) {
        self.connects.push((source.clone(), target.clone()));
    }

    fn disconnect(&mut self, source: &String, target: &String) {
        self.disconnects.push((source.clone(), target.clone()));
    }

    fn preview_connection(&mut self, from: Point, to: Point) {
        self.previews.push((from, to));
    }

    fn selection_changed(&mut self, selected: Option<&String>) {
        self.selections.push(selected.cloned());
    }

    fn open_label_editor(&mut self, vertex: VertexId, payload: &String) {
        self.label_edits.push((vertex, payload.clone()));
    }

    fn notify(&mut self, notice: &CanvasError) {
        self.notices.push(notice.to_string());
    }
}
