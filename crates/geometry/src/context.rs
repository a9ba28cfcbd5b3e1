//! Per-segment drawing parameters and the policies that evolve them
//!
//! A [`Context`] is an explicit value threaded into every mesh-generation
//! call; nothing else reads or mutates it behind the caller's back. A
//! [`ContextUpdater`] transforms the context once per accepted stroke
//! sample, before mesh generation, producing per-segment variation within
//! a single stroke.

use serde::{Deserialize, Serialize};

use crate::color::hsv_to_rgba;
use crate::constants::{
    DEFAULT_DETAIL, DEFAULT_LINE_RADIUS, PULSE_MIN_SCALE, PULSE_PHASE_STEP, RAINBOW_HUE_STEP,
};

/// Visual parameters for one mesh-generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// RGBA stroke color.
    pub color: [f32; 4],
    /// Stroke radius in world units (meters).
    pub line_radius: f32,
    /// Discretization level: sub-points per Bezier segment.
    pub detail: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0, 1.0],
            line_radius: DEFAULT_LINE_RADIUS,
            detail: DEFAULT_DETAIL,
        }
    }
}

/// Policy applied to the context between successive stroke samples.
///
/// Exactly one updater is active per canvas. Updaters that modulate the
/// line radius set it from their stored base value, so the brush-level
/// pulse modulation (which multiplies the context radius) composes with
/// them instead of compounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContextUpdater {
    /// Leaves the context untouched.
    Identity,
    /// Advances the hue a fixed step per update and recolors.
    Rainbow { hue: f32 },
    /// Oscillates the line radius around a stored base value.
    PulseRadius { phase: f32, base_radius: f32 },
}

impl ContextUpdater {
    pub fn rainbow() -> Self {
        Self::Rainbow { hue: 0.0 }
    }

    pub fn pulse_radius(base_radius: f32) -> Self {
        Self::PulseRadius {
            phase: 0.0,
            base_radius,
        }
    }

    /// Produce the context for the next segment, advancing internal state.
    pub fn update(&mut self, context: Context) -> Context {
        match self {
            Self::Identity => context,
            Self::Rainbow { hue } => {
                *hue = (*hue + RAINBOW_HUE_STEP).rem_euclid(1.0);
                Context {
                    color: hsv_to_rgba(*hue, 0.5, 1.0, 1.0),
                    ..context
                }
            }
            Self::PulseRadius { phase, base_radius } => {
                *phase += PULSE_PHASE_STEP;
                let scale =
                    PULSE_MIN_SCALE + (1.0 - PULSE_MIN_SCALE) * (1.0 + phase.sin()) / 2.0;
                Context {
                    line_radius: *base_radius * scale,
                    ..context
                }
            }
        }
    }
}

impl Default for ContextUpdater {
    fn default() -> Self {
        Self::Identity
    }
}
