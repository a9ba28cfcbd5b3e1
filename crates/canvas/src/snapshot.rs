//! Reference-point-relative copies of drawn geometry
//!
//! A snapshot deep-copies visible mesh nodes, shifted so they are stored
//! relative to a reference point. Loading copies them again, shifted to
//! a new reference point, so one snapshot can be re-instantiated any
//! number of times; loads are independent of each other and of the
//! canvas the snapshot came from.

use glam::Vec3;
use tracing::debug;

use limn_geometry::math::midpoint;
use limn_geometry::Node;

use crate::model::Canvas;

/// An immutable, detached copy of scene geometry.
#[derive(Debug, Clone)]
pub struct Snapshot {
    root: Node,
}

impl Snapshot {
    /// Deep-copy the given nodes, re-anchored relative to `reference`.
    pub fn capture<'a>(nodes: impl IntoIterator<Item = &'a Node>, reference: Vec3) -> Self {
        let mut root = Node::new();
        for node in nodes {
            root.attach(node.translated(-reference));
        }
        debug!("snapshot: captured {} nodes", root.child_count());
        Self { root }
    }

    /// Deep-copy only nodes whose position lies inside the axis-aligned
    /// box `[bound_min, bound_max]`, stored relative to its midpoint.
    pub fn capture_bounded<'a>(
        nodes: impl IntoIterator<Item = &'a Node>,
        bound_min: Vec3,
        bound_max: Vec3,
    ) -> Self {
        let center = midpoint(bound_min, bound_max);
        let mut root = Node::new();
        for node in nodes {
            if in_bound(node.position, bound_min, bound_max) {
                root.attach(node.translated(-center));
            }
        }
        debug!("snapshot: captured {} nodes in bound", root.child_count());
        Self { root }
    }

    /// Instantiate the snapshot at a new reference point.
    ///
    /// Returns a detached node for the caller to attach to its scene.
    pub fn load(&self, reference: Vec3) -> Node {
        let mut parent = Node::new();
        for node in &self.root.children {
            parent.attach(node.translated(reference));
        }
        parent
    }

    pub fn node_count(&self) -> usize {
        self.root.child_count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

fn in_bound(p: Vec3, min: Vec3, max: Vec3) -> bool {
    min.x <= p.x && p.x <= max.x && min.y <= p.y && p.y <= max.y && min.z <= p.z && p.z <= max.z
}

/// Identifier returned by [`SnapshotStore::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotId(usize);

/// A stack of saved snapshots addressed by id.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    snapshots: Vec<Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot and return its id.
    pub fn save(&mut self, snapshot: Snapshot) -> SnapshotId {
        self.snapshots.push(snapshot);
        SnapshotId(self.snapshots.len() - 1)
    }

    /// Instantiate a stored snapshot at `reference`.
    pub fn load(&self, id: SnapshotId, reference: Vec3) -> Option<Node> {
        self.snapshots.get(id.0).map(|s| s.load(reference))
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Canvas {
    /// Snapshot every visible stroke relative to `reference`.
    pub fn save(&self, reference: Vec3) -> Snapshot {
        Snapshot::capture(self.scene_nodes(), reference)
    }

    /// Snapshot only the mesh segments inside the given box.
    ///
    /// Filtering happens at segment level: stroke roots sit at the
    /// origin, segment nodes carry world positions.
    pub fn save_bounded(&self, bound_min: Vec3, bound_max: Vec3) -> Snapshot {
        Snapshot::capture_bounded(
            self.scene_nodes().flat_map(|n| n.children.iter()),
            bound_min,
            bound_max,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanvasConfig;
    use limn_geometry::Brush;

    fn drawn_canvas() -> Canvas {
        let mut canvas = Canvas::new(CanvasConfig::default());
        canvas.set_brush(Brush::round(8).unwrap());
        for x in [0.0f32, 1.0] {
            canvas.begin_stroke();
            canvas.feed_sample(Vec3::new(x, 0.0, 0.0));
            canvas.feed_sample(Vec3::new(x, 0.0, 0.01));
            canvas.end_stroke();
        }
        canvas
    }

    #[test]
    fn test_save_load_at_same_reference_is_identity() {
        let canvas = drawn_canvas();
        let reference = Vec3::new(0.3, -0.1, 0.2);

        let originals: Vec<Vec3> = canvas.scene_nodes().map(|n| n.position).collect();
        let snapshot = canvas.save(reference);
        let loaded = snapshot.load(reference);

        let positions: Vec<Vec3> = loaded.children.iter().map(|n| n.position).collect();
        assert_eq!(positions.len(), originals.len());
        for (a, b) in positions.iter().zip(originals.iter()) {
            assert!(a.distance(*b) < 1e-5);
        }
    }

    #[test]
    fn test_load_at_new_reference_shifts_geometry() {
        let canvas = drawn_canvas();
        let snapshot = canvas.save(Vec3::ZERO);

        let offset = Vec3::new(0.0, 2.0, 0.0);
        let loaded = snapshot.load(offset);
        for (node, original) in loaded.children.iter().zip(canvas.scene_nodes()) {
            assert!(node.position.distance(original.position + offset) < 1e-5);
        }
    }

    #[test]
    fn test_loads_are_independent_copies() {
        let canvas = drawn_canvas();
        let snapshot = canvas.save(Vec3::ZERO);

        let mut first = snapshot.load(Vec3::ZERO);
        first.children.clear();
        let second = snapshot.load(Vec3::ZERO);
        assert_eq!(second.child_count(), snapshot.node_count());
    }

    #[test]
    fn test_bounded_capture_filters_by_position() {
        let canvas = drawn_canvas();
        // One stroke's segments sit near x=0, the other's near x=1.
        let hit = canvas.save_bounded(Vec3::splat(-0.5), Vec3::splat(0.5));
        assert_eq!(hit.node_count(), 1);

        let all = canvas.save_bounded(Vec3::splat(-0.5), Vec3::new(1.5, 0.5, 0.5));
        assert_eq!(all.node_count(), 2);

        let miss = canvas.save_bounded(Vec3::splat(5.0), Vec3::splat(6.0));
        assert!(miss.is_empty());
    }

    #[test]
    fn test_snapshot_survives_canvas_clear() {
        let mut canvas = drawn_canvas();
        let vertices = canvas.total_vertex_count();
        let snapshot = canvas.save(Vec3::ZERO);
        canvas.clear();

        let loaded = snapshot.load(Vec3::ZERO);
        assert_eq!(loaded.total_vertex_count(), vertices);
    }

    #[test]
    fn test_store_save_load_by_id() {
        let canvas = drawn_canvas();
        let mut store = SnapshotStore::new();

        let id = store.save(canvas.save(Vec3::ZERO));
        assert_eq!(store.len(), 1);

        let loaded = store.load(id, Vec3::ZERO).unwrap();
        assert_eq!(loaded.child_count(), 2);
        assert!(store.load(SnapshotId(7), Vec3::ZERO).is_none());
    }
}
