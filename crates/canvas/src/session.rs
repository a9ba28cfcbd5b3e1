//! Per-frame bridge between a host loop and the canvas
//!
//! The host calls [`DrawingSession::tick`] once per rendered frame with
//! the current device pose and whether drawing input is active. The
//! session turns input edges into stroke lifecycle calls and poses into
//! samples, so at most one mesh-emission step runs per frame.

use glam::{Mat4, Vec3};
use tracing::debug;

use limn_geometry::math::pose_point;
use limn_geometry::Node;

use crate::config::CanvasConfig;
use crate::model::Canvas;
use crate::snapshot::{SnapshotId, SnapshotStore};

/// Frame-driven wrapper around a [`Canvas`].
pub struct DrawingSession {
    canvas: Canvas,
    /// Input state observed on the previous tick.
    touched: bool,
    /// Saved snapshots of the drawing.
    store: SnapshotStore,
}

impl DrawingSession {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            canvas: Canvas::new(config),
            touched: false,
            store: SnapshotStore::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Snapshot the visible drawing relative to `reference`.
    pub fn save(&mut self, reference: Vec3) -> SnapshotId {
        self.store.save(self.canvas.save(reference))
    }

    /// Instantiate a saved snapshot at `reference`.
    ///
    /// Returns a detached node for the host to attach to its scene, or
    /// `None` for an unknown id.
    pub fn load(&self, id: SnapshotId, reference: Vec3) -> Option<Node> {
        self.store.load(id, reference)
    }

    /// Advance one frame.
    ///
    /// Input going active starts a stroke; input going inactive seals
    /// it. While input is held, the point a fixed offset in front of the
    /// pose is fed as a sample. A frame without a pose means tracking
    /// dropped out: the sample is skipped and drawing resumes with the
    /// next tracked frame. Returns whether a sample was accepted.
    pub fn tick(&mut self, pose: Option<Mat4>, input_active: bool) -> bool {
        if input_active && !self.touched {
            self.canvas.begin_stroke();
        } else if !input_active && self.touched {
            self.canvas.end_stroke();
        }
        self.touched = input_active;

        if !input_active {
            return false;
        }
        let Some(pose) = pose else {
            debug!("tick: no pose this frame, sample skipped");
            return false;
        };

        let point = pose_point(pose, self.canvas.config().forward_offset);
        self.canvas.feed_sample(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use limn_geometry::Brush;

    fn session() -> DrawingSession {
        let mut session = DrawingSession::new(CanvasConfig {
            min_spacing: 0.005,
            forward_offset: 0.2,
        });
        session.canvas_mut().set_brush(Brush::round(8).unwrap());
        session
    }

    fn pose_at(z: f32) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, z))
    }

    #[test]
    fn test_input_edges_drive_stroke_lifecycle() {
        let mut session = session();

        session.tick(Some(pose_at(0.0)), true);
        assert!(session.canvas().is_drawing());

        session.tick(Some(pose_at(0.01)), true);
        session.tick(Some(pose_at(0.02)), true);

        session.tick(Some(pose_at(0.02)), false);
        assert!(!session.canvas().is_drawing());
        assert_eq!(session.canvas().stroke_count(), 1);
        assert_eq!(session.canvas().strokes()[0].segment_count(), 2);
    }

    #[test]
    fn test_missing_pose_skips_sample_but_keeps_drawing() {
        let mut session = session();

        assert!(session.tick(Some(pose_at(0.0)), true));
        assert!(!session.tick(None, true));
        assert!(session.canvas().is_drawing());
        assert!(session.tick(Some(pose_at(0.02)), true));

        session.tick(None, false);
        assert_eq!(session.canvas().strokes()[0].vertex_count(), 2);
    }

    #[test]
    fn test_idle_frames_do_nothing() {
        let mut session = session();
        assert!(!session.tick(Some(pose_at(0.0)), false));
        assert!(!session.canvas().is_drawing());
        assert_eq!(session.canvas().stroke_count(), 0);
    }

    #[test]
    fn test_save_load_outlives_clear() {
        let mut session = session();
        session.tick(Some(pose_at(0.0)), true);
        session.tick(Some(pose_at(0.01)), true);
        session.tick(None, false);

        let id = session.save(Vec3::ZERO);
        session.canvas_mut().clear();

        let loaded = session.load(id, Vec3::ZERO).unwrap();
        assert!(loaded.total_vertex_count() > 0);
    }

    #[test]
    fn test_sample_sits_in_front_of_pose() {
        let mut session = session();
        session.tick(Some(Mat4::IDENTITY), true);
        session.tick(Some(Mat4::IDENTITY), false);

        let stroke = &session.canvas().strokes()[0];
        let p = stroke.vertices[0];
        assert!(p.distance(Vec3::new(0.0, 0.0, -0.2)) < 1e-5);
    }
}
