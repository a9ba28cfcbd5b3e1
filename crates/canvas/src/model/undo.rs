//! Undo, redo, and clear for the canvas model
//!
//! Undo detaches the most recently sealed stroke from the scene and
//! parks it on the redo stack; redo moves it back. Neither touches the
//! stroke's mesh data. Requests that arrive while a sample step is in
//! flight are deferred, never dropped.

use tracing::debug;

use super::Canvas;

impl Canvas {
    /// Detach the most recently sealed stroke.
    ///
    /// Returns whether a stroke was undone now. A request during an
    /// in-flight sample step is deferred and applied when the step
    /// completes; an undo on an empty canvas is a no-op.
    pub fn undo(&mut self) -> bool {
        if self.in_flight {
            debug!("undo: step in flight, deferred");
            self.pending_undo = true;
            return false;
        }
        let Some(stroke) = self.strokes.pop() else {
            debug!("undo: nothing to undo");
            return false;
        };
        debug!("undo: stroke {} detached", stroke.id);
        self.redo_stack.push(stroke);
        true
    }

    /// Re-attach the most recently undone stroke.
    pub fn redo(&mut self) -> bool {
        let Some(stroke) = self.redo_stack.pop() else {
            debug!("redo: nothing to redo");
            return false;
        };
        debug!("redo: stroke {} re-attached", stroke.id);
        self.strokes.push(stroke);
        true
    }

    /// Detach every stroke and reset to Idle.
    ///
    /// Deferred like [`Canvas::undo`] when a sample step is in flight.
    pub fn clear(&mut self) {
        if self.in_flight {
            debug!("clear: step in flight, deferred");
            self.pending_clear = true;
            return;
        }
        debug!("clear: {} strokes removed", self.strokes.len());
        self.strokes.clear();
        self.redo_stack.clear();
        self.active = None;
        self.window.clear();
    }

    /// Apply requests deferred during the last sample step.
    pub(crate) fn apply_pending(&mut self) {
        if self.pending_clear {
            self.pending_clear = false;
            self.pending_undo = false;
            self.clear();
        } else if self.pending_undo {
            self.pending_undo = false;
            self.undo();
        }
    }
}
