//! Canvas configuration

use serde::{Deserialize, Serialize};

/// Minimum world-space distance between accepted samples, meters.
pub const DEFAULT_MIN_SPACING: f32 = 0.001;

/// Draw-point distance in front of the camera pose, meters.
pub const DEFAULT_FORWARD_OFFSET: f32 = 0.2;

/// Tunables for the stroke/canvas model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Samples closer than this to the last buffered vertex are rejected.
    pub min_spacing: f32,
    /// How far in front of the camera pose samples are taken.
    pub forward_offset: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_spacing: DEFAULT_MIN_SPACING,
            forward_offset: DEFAULT_FORWARD_OFFSET,
        }
    }
}
