//! Drawing operations for the canvas model

use glam::Vec3;
use tracing::debug;

use crate::stroke::Stroke;

use super::Canvas;

impl Canvas {
    /// Begin a new stroke.
    ///
    /// Creates the active stroke with a fresh root node and clears the
    /// vertex window. Resuming drawing clears the redo stack. No-op if a
    /// stroke is already active.
    pub fn begin_stroke(&mut self) {
        if self.active.is_some() {
            debug!("begin_stroke: stroke already active, ignoring");
            return;
        }
        let id = self.next_stroke_id;
        self.next_stroke_id += 1;

        self.window.clear();
        self.redo_stack.clear();
        self.active = Some(Stroke::new(id));
        debug!("begin_stroke: stroke {} started", id);
    }

    /// Feed one external sample point to the active stroke.
    ///
    /// The whole per-sample step (spacing check, append, context update,
    /// mesh emission, attach) runs as one atomic unit: a re-entrant call
    /// while a step is in flight is dropped, not queued. Returns whether
    /// the sample was accepted.
    pub fn feed_sample(&mut self, point: Vec3) -> bool {
        if self.in_flight {
            debug!("feed_sample: step in flight, sample dropped");
            return false;
        }
        self.in_flight = true;
        let accepted = self.sample_step(point);
        self.in_flight = false;
        self.apply_pending();
        accepted
    }

    fn sample_step(&mut self, point: Vec3) -> bool {
        let min_spacing = self.config.min_spacing;
        let Some(active) = self.active.as_mut() else {
            debug!("feed_sample: no active stroke, ignoring");
            return false;
        };

        if let Some(&last) = active.vertices.last() {
            let spacing = last.distance(point);
            if spacing < min_spacing {
                debug!("feed_sample: {:.5} below min spacing, rejected", spacing);
                return false;
            }
        }

        active.vertices.push(point);
        self.window.push(point);

        // Updater runs once per accepted vertex, before generation.
        self.context = self.updater.update(self.context);

        if self.window.len() >= self.brush.min_points() {
            if let Some(node) = self.brush.generate(&self.window, &self.context) {
                active.root.attach(node);
            }
            let retained = self.brush.retained_points();
            let excess = self.window.len() - retained;
            self.window.drain(..excess);
        }
        true
    }

    /// Seal the active stroke and return to Idle.
    ///
    /// Leftover window points are flushed through the brush (straight
    /// segments for Bezier) and end caps are added when the brush asks
    /// for them. A stroke that never accepted a vertex is discarded;
    /// that case is reported by returning `false`.
    pub fn end_stroke(&mut self) -> bool {
        let Some(mut stroke) = self.active.take() else {
            debug!("end_stroke: no active stroke");
            return false;
        };

        if stroke.vertices.is_empty() {
            debug!("end_stroke: stroke {} had no vertices, discarded", stroke.id);
            self.window.clear();
            return false;
        }

        if let Some(node) = self.brush.flush(&self.window, &self.context) {
            stroke.root.attach(node);
        }
        for cap in self.brush.end_caps(&stroke.vertices, &self.context) {
            stroke.root.attach(cap);
        }

        debug!(
            "end_stroke: stroke {} sealed with {} vertices, {} segments",
            stroke.id,
            stroke.vertex_count(),
            stroke.segment_count()
        );
        stroke.sealed = true;
        self.strokes.push(stroke);
        self.window.clear();
        self.redo_stack.clear();
        true
    }
}
