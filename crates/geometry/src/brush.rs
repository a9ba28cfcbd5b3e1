//! Brush policies: how a window of stroke points becomes renderable mesh
//!
//! Each brush pairs a minimum point count with a mesh-generation
//! strategy. Brushes are a closed enum so dispatch is exhaustive and a
//! brush carries its own configuration instead of being looked up by
//! name.

use glam::Vec3;
use tracing::debug;

use crate::bezier::discretize;
use crate::constants::{DEFAULT_SEGMENT_COUNT, PULSE_MIN_SCALE, PULSE_PHASE_STEP};
use crate::context::Context;
use crate::error::GeometryError;
use crate::mesh::{ring_cap, tube_between};
use crate::node::Node;
use crate::profile::Profile;

/// A mesh-generation strategy for stroke segments.
///
/// Round, flat, and pulse profiles are stored as unit-radius templates
/// and scaled by the context's line radius at generation time; the flat
/// brush's rectangular cross-section keeps its configured extents
/// instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    /// Cylindrical tube between each consecutive pair of points.
    Round { profile: Profile, capped: bool },
    /// Flat ribbon with a rectangular cross-section. The far ring is
    /// oriented along the outgoing segment so corners do not crease,
    /// which is why this brush needs a third point before it emits.
    Flat { profile: Profile },
    /// Tube whose radius oscillates as the stroke is drawn; the phase
    /// advances one fixed step per emission and the resulting scale
    /// multiplies the context radius.
    Pulse { profile: Profile, phase: f32 },
    /// Cubic Bezier smoothing over disjoint groups of four control
    /// points, each discretized into the context's detail level.
    Bezier { profile: Profile },
}

impl Brush {
    pub fn round(segment_count: usize) -> Result<Self, GeometryError> {
        Ok(Self::Round {
            profile: Profile::circle(1.0, segment_count)?,
            capped: false,
        })
    }

    pub fn flat(width: f32, height: f32) -> Result<Self, GeometryError> {
        Ok(Self::Flat {
            profile: Profile::rectangle(width, height)?,
        })
    }

    pub fn pulse(segment_count: usize) -> Result<Self, GeometryError> {
        Ok(Self::Pulse {
            profile: Profile::circle(1.0, segment_count)?,
            phase: 0.0,
        })
    }

    pub fn bezier(segment_count: usize) -> Result<Self, GeometryError> {
        Ok(Self::Bezier {
            profile: Profile::circle(1.0, segment_count)?,
        })
    }

    /// Whether terminal rings are closed with fan caps at end of stroke.
    pub fn set_capped(&mut self, value: bool) {
        if let Self::Round { capped, .. } = self {
            *capped = value;
        }
    }

    /// Points that must be buffered before this brush can emit.
    pub fn min_points(&self) -> usize {
        match self {
            Self::Round { .. } | Self::Pulse { .. } => 2,
            Self::Flat { .. } => 3,
            Self::Bezier { .. } => 4,
        }
    }

    /// Points carried over after an emission.
    ///
    /// Sliding-window brushes keep the shared endpoint(s); Bezier groups
    /// are disjoint, so its window restarts empty.
    pub fn retained_points(&self) -> usize {
        match self {
            Self::Round { .. } | Self::Pulse { .. } => 1,
            Self::Flat { .. } => 2,
            Self::Bezier { .. } => 0,
        }
    }

    /// Generate one mesh segment from the current window of points.
    ///
    /// The canvas guarantees `window.len() >= min_points()`; anything
    /// less is a contract violation. Returns `None` when the window is
    /// geometrically degenerate (coincident points).
    pub fn generate(&mut self, window: &[Vec3], context: &Context) -> Option<Node> {
        debug_assert!(
            window.len() >= self.min_points(),
            "emission before {} points buffered",
            self.min_points()
        );
        match self {
            Self::Round { profile, .. } => {
                let [u, v] = last_two(window);
                let ring = profile.scaled(context.line_radius).oriented(v - u);
                tube_between(u, v, &ring, &ring, context.color)
            }
            Self::Flat { profile } => {
                let [u, v, w] = last_three(window);
                let near = profile.oriented(v - u);
                let far = profile.oriented(w - v);
                tube_between(u, v, &near, &far, context.color)
            }
            Self::Pulse { profile, phase } => {
                *phase += PULSE_PHASE_STEP;
                let scale = PULSE_MIN_SCALE + (1.0 - PULSE_MIN_SCALE) * (1.0 + phase.sin()) / 2.0;
                let [u, v] = last_two(window);
                let ring = profile
                    .scaled(context.line_radius * scale)
                    .oriented(v - u);
                tube_between(u, v, &ring, &ring, context.color)
            }
            Self::Bezier { profile } => {
                let control = [
                    window[window.len() - 4],
                    window[window.len() - 3],
                    window[window.len() - 2],
                    window[window.len() - 1],
                ];
                let points = discretize(&control, context.detail);
                let segments = chain_tubes(profile, &points, context);
                if segments.is_empty() {
                    return None;
                }
                Some(Node::group(segments))
            }
        }
    }

    /// Consume leftover points at end of stroke.
    ///
    /// The Bezier brush passes trailing groups of two or three points
    /// through as straight tube segments rather than dropping them; a
    /// single leftover point carries no geometry. Sliding-window brushes
    /// leave nothing behind.
    pub fn flush(&mut self, leftover: &[Vec3], context: &Context) -> Option<Node> {
        let Self::Bezier { profile } = self else {
            return None;
        };
        if leftover.len() < 2 {
            return None;
        }
        debug!(
            "bezier flush: {} leftover points as straight segments",
            leftover.len()
        );
        let segments = chain_tubes(profile, leftover, context);
        if segments.is_empty() {
            return None;
        }
        Some(Node::group(segments))
    }

    /// Fan caps over a finished stroke's terminal rings, when enabled.
    pub fn end_caps(&self, vertices: &[Vec3], context: &Context) -> Vec<Node> {
        let Self::Round {
            profile,
            capped: true,
        } = self
        else {
            return Vec::new();
        };
        if vertices.len() < 2 {
            return Vec::new();
        }

        let scaled = profile.scaled(context.line_radius);
        let first = vertices[0];
        let second = vertices[1];
        let last = vertices[vertices.len() - 1];
        let before_last = vertices[vertices.len() - 2];

        let mut caps = Vec::with_capacity(2);
        if let Some(cap) = ring_cap(first, &scaled.oriented(second - first), context.color) {
            caps.push(cap);
        }
        if let Some(cap) = ring_cap(last, &scaled.oriented(last - before_last), context.color) {
            caps.push(cap);
        }
        caps
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::Round {
            profile: Profile::circle(1.0, DEFAULT_SEGMENT_COUNT)
                .expect("default profile parameters are valid"),
            capped: false,
        }
    }
}

fn last_two(window: &[Vec3]) -> [Vec3; 2] {
    [window[window.len() - 2], window[window.len() - 1]]
}

fn last_three(window: &[Vec3]) -> [Vec3; 3] {
    [
        window[window.len() - 3],
        window[window.len() - 2],
        window[window.len() - 1],
    ]
}

/// Tube every consecutive pair of `points`, skipping degenerate pairs.
fn chain_tubes(profile: &Profile, points: &[Vec3], context: &Context) -> Vec<Node> {
    let scaled = profile.scaled(context.line_radius);
    points
        .windows(2)
        .filter_map(|pair| {
            let ring = scaled.oriented(pair[1] - pair[0]);
            tube_between(pair[0], pair[1], &ring, &ring, context.color)
        })
        .collect()
}
