//! A single drawn stroke

use glam::Vec3;
use limn_geometry::Node;
use serde::{Deserialize, Serialize};

/// One continuous drawn line, from input-down to input-up.
///
/// A stroke owns its accepted sample points and the root node of the
/// mesh segments generated from them. Sealed strokes only leave the
/// canvas via undo or clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    /// Unique stroke identifier.
    pub id: u64,
    /// Accepted sample points, in draw order.
    pub vertices: Vec<Vec3>,
    /// Root of the stroke's mesh nodes; children are emitted segments.
    pub root: Node,
    /// Flipped when drawing ends.
    pub sealed: bool,
}

impl Stroke {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            vertices: Vec::new(),
            root: Node::new(),
            sealed: false,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Mesh segments emitted so far.
    pub fn segment_count(&self) -> usize {
        self.root.child_count()
    }
}
