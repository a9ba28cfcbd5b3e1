//! Triangle-strip mesh assembly for stroke segments
//!
//! The builders here take a pair of stroke points plus oriented
//! cross-section rings and produce one renderable segment node. They are
//! incremental by construction: the canvas calls them once per accepted
//! sample, so a growing stroke is never re-meshed from scratch.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DIRECTION_EPSILON;
use crate::node::Node;

/// Vertex positions plus triangle-strip indices for one stroke segment.
///
/// Positions are raw `[f32; 3]` so the buffer can be handed to a GPU
/// upload path without conversion; they are local to the owning node's
/// position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineMesh {
    pub positions: Vec<[f32; 3]>,
    /// Triangle-strip index list over `positions`.
    pub indices: Vec<u32>,
    /// RGBA color of the segment.
    pub color: [f32; 4],
}

impl LineMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.len() < 3
    }

    /// Position buffer as raw bytes for GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Index buffer as raw bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Skin a tube between `u` and `v`.
///
/// `ring_u` is the cross-section oriented for the incoming segment and
/// `ring_v` the one for the outgoing segment; passing the same ring for
/// both yields a straight cylinder slice. The second ring is translated
/// by `v - u`, the rings are interleaved into a single triangle strip,
/// and the node is positioned at `u` with vertices local to it.
///
/// Returns `None` for zero-length segments: two coincident samples must
/// not produce degenerate or NaN geometry.
pub fn tube_between(
    u: Vec3,
    v: Vec3,
    ring_u: &[Vec3],
    ring_v: &[Vec3],
    color: [f32; 4],
) -> Option<Node> {
    debug_assert_eq!(ring_u.len(), ring_v.len());
    let span = v - u;
    if span.length() < DIRECTION_EPSILON {
        debug!("tube_between: zero-length segment at {:?}, skipping", u);
        return None;
    }

    let mut positions = Vec::with_capacity(ring_u.len() * 2);
    for (a, b) in ring_u.iter().zip(ring_v) {
        positions.push(a.to_array());
        positions.push((*b + span).to_array());
    }
    let indices = (0..positions.len() as u32).collect();

    Some(Node::with_mesh(
        u,
        LineMesh {
            positions,
            indices,
            color,
        },
    ))
}

/// Close a terminal ring with a fan to its center.
///
/// Encoded as a triangle strip alternating ring points with the center,
/// so it shares the [`LineMesh`] layout; every other triangle collapses
/// onto the center and is harmless to rasterize.
pub fn ring_cap(position: Vec3, ring: &[Vec3], color: [f32; 4]) -> Option<Node> {
    if ring.len() < 3 {
        return None;
    }

    let mut positions = Vec::with_capacity(ring.len() * 2);
    for p in ring {
        positions.push(p.to_array());
        positions.push([0.0, 0.0, 0.0]);
    }
    let indices = (0..positions.len() as u32).collect();

    Some(Node::with_mesh(
        position,
        LineMesh {
            positions,
            indices,
            color,
        },
    ))
}
