//! Conversion of emitted line meshes into Bevy render meshes
//!
//! Gated behind the `bevy` feature so the core stays renderer-agnostic.

use bevy::asset::RenderAssetUsages;
use bevy::render::mesh::{Indices, Mesh};
use bevy::render::render_resource::PrimitiveTopology;

use crate::mesh::LineMesh;

impl From<&LineMesh> for Mesh {
    fn from(line: &LineMesh) -> Mesh {
        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleStrip,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, line.positions.clone());
        mesh.insert_indices(Indices::U32(line.indices.clone()));
        mesh
    }
}
