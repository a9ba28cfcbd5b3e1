//! Limn geometry - stroke-to-mesh synthesis for freehand 3D drawing
//!
//! This crate turns a live, growing sequence of 3D sample points into
//! renderable tube and ribbon meshes:
//! - [`math`] - rotation between a stroke segment and the canonical axis
//! - [`profile`] - cross-section rings perpendicular to a direction
//! - [`mesh`] - triangle-strip assembly for one segment at a time
//! - [`brush`] - round, flat, pulsing, and Bezier-smoothed policies
//! - [`context`] - per-segment visual parameters and their updaters
//! - [`node`] - the renderable node tree handed to a host scene graph

pub mod bezier;
#[cfg(feature = "bevy")]
pub mod bevy_mesh;
pub mod brush;
pub mod color;
pub mod constants;
pub mod context;
pub mod error;
pub mod math;
pub mod mesh;
pub mod node;
pub mod profile;

pub use bezier::*;
pub use brush::*;
pub use color::*;
pub use constants::*;
pub use context::*;
pub use error::*;
pub use math::*;
pub use mesh::*;
pub use node::*;
pub use profile::*;
