use thiserror::Error;

/// Errors raised when a brush or profile is configured with unusable
/// parameters.
///
/// Per-segment degeneracy (zero-length segments, undefined rotation axes)
/// is never an error; the builders skip those segments and return `None`.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("profile radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("profile needs at least {min} segments, got {actual}")]
    TooFewSegments { min: usize, actual: usize },
    #[error("flat profile extents must be positive and finite, got {width}x{height}")]
    InvalidExtents { width: f32, height: f32 },
}
