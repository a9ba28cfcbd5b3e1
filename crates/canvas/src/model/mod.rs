//! Stroke/canvas model
//!
//! The canvas is the append-only, then-undoable collection of strokes.
//! It owns the scene subtree it creates: the host never reaches into a
//! shared mutable tree, it only enumerates the nodes the canvas exposes.
//!
//! State machine: **Idle** (no active stroke) and **Drawing** (one
//! active stroke accumulating vertices). `begin_stroke` moves Idle to
//! Drawing; `end_stroke` seals the active stroke and returns to Idle.

mod drawing;
mod undo;

use glam::Vec3;
use limn_geometry::{Brush, Context, ContextUpdater, Node};

use crate::config::CanvasConfig;
use crate::stroke::Stroke;

/// The drawing model: live strokes, the active stroke, and undo state.
pub struct Canvas {
    pub(crate) config: CanvasConfig,
    /// Sealed strokes in draw order; the scene subtree this canvas owns.
    pub(crate) strokes: Vec<Stroke>,
    /// Stroke currently being drawn, if any.
    pub(crate) active: Option<Stroke>,
    pub(crate) brush: Brush,
    pub(crate) updater: ContextUpdater,
    pub(crate) context: Context,
    /// Window of recent points awaiting the next emission.
    pub(crate) window: Vec<Vec3>,
    /// Guards the per-sample step; re-entrant samples are dropped.
    pub(crate) in_flight: bool,
    /// Requests issued while a step was in flight, applied afterwards.
    pub(crate) pending_clear: bool,
    pub(crate) pending_undo: bool,
    /// Undone strokes awaiting re-insertion.
    pub(crate) redo_stack: Vec<Stroke>,
    pub(crate) next_stroke_id: u64,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            strokes: Vec::new(),
            active: None,
            brush: Brush::default(),
            updater: ContextUpdater::Identity,
            context: Context::default(),
            window: Vec::new(),
            in_flight: false,
            pending_clear: false,
            pending_undo: false,
            redo_stack: Vec::new(),
            next_stroke_id: 0,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Whether a stroke is currently being drawn.
    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Sealed strokes currently in the scene.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Root nodes of every visible stroke, sealed and active.
    pub fn scene_nodes(&self) -> impl Iterator<Item = &Node> {
        self.strokes
            .iter()
            .map(|s| &s.root)
            .chain(self.active.iter().map(|s| &s.root))
    }

    /// Total mesh vertices across the visible scene.
    pub fn total_vertex_count(&self) -> usize {
        self.scene_nodes().map(Node::total_vertex_count).sum()
    }

    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn set_context_updater(&mut self, updater: ContextUpdater) {
        self.updater = updater;
    }

    pub fn set_color(&mut self, color: [f32; 4]) {
        self.context.color = color;
    }

    pub fn set_line_radius(&mut self, radius: f32) {
        self.context.line_radius = radius;
    }

    pub fn context(&self) -> &Context {
        &self.context
    }
}
