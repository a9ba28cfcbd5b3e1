//! Renderable node tree emitted by the mesh builders
//!
//! A [`Node`] is a positioned piece of geometry with child nodes, the
//! unit the canvas hands to the host's scene graph. The canvas keeps
//! exclusive ownership of every node it creates; the host only receives
//! nodes through explicit attach/detach operations.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::mesh::LineMesh;

/// A positioned mesh node with children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Position relative to the parent node.
    pub position: Vec3,
    /// Geometry carried by this node, if any.
    pub mesh: Option<LineMesh>,
    /// Child nodes, in attach order.
    pub children: Vec<Node>,
}

impl Node {
    /// Empty node at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaf node carrying a mesh at the given position.
    pub fn with_mesh(position: Vec3, mesh: LineMesh) -> Self {
        Self {
            position,
            mesh: Some(mesh),
            children: Vec::new(),
        }
    }

    /// Group node at the origin holding the given children.
    pub fn group(children: Vec<Node>) -> Self {
        Self {
            position: Vec3::ZERO,
            mesh: None,
            children,
        }
    }

    /// Attach a child node.
    pub fn attach(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Detach and return the most recently attached child.
    pub fn detach_last(&mut self) -> Option<Node> {
        self.children.pop()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Total mesh vertices across this node's subtree.
    pub fn total_vertex_count(&self) -> usize {
        let own = self.mesh.as_ref().map_or(0, LineMesh::vertex_count);
        own + self
            .children
            .iter()
            .map(Node::total_vertex_count)
            .sum::<usize>()
    }

    /// Depth-first visit of every node in the subtree, self first.
    pub fn visit(&self, f: &mut impl FnMut(&Node)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// Deep copy with this node's own position shifted by `offset`.
    ///
    /// Children keep their parent-relative positions.
    pub fn translated(&self, offset: Vec3) -> Node {
        let mut copy = self.clone();
        copy.position += offset;
        copy
    }
}
