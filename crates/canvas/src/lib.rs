//! Limn canvas - the stroke/canvas model for freehand 3D drawing
//!
//! This crate owns the drawing itself:
//! - [`model::Canvas`] - stroke accumulation, min-spacing filtering,
//!   incremental mesh emission, undo/redo
//! - [`session::DrawingSession`] - frame-driven bridge for a host loop
//! - [`snapshot`] - reference-point-relative save/load of drawn geometry
//! - [`config`] - canvas tunables
//!
//! Mesh synthesis itself lives in `limn-geometry`; this crate feeds it
//! windows of accepted points and owns everything it emits.

pub mod config;
pub mod model;
pub mod session;
pub mod snapshot;
pub mod stroke;

pub use config::*;
pub use model::*;
pub use session::*;
pub use snapshot::*;
pub use stroke::*;
