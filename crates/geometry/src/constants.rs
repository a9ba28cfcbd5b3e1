/// Default circumferential segments for round tube cross-sections.
pub const DEFAULT_SEGMENT_COUNT: usize = 48;

/// Default stroke radius in meters.
pub const DEFAULT_LINE_RADIUS: f32 = 0.005;

/// Default discretization level for Bezier smoothing.
pub const DEFAULT_DETAIL: usize = 16;

/// Directions and segments shorter than this are treated as degenerate.
pub const DIRECTION_EPSILON: f32 = 1e-6;

/// Hue advance per rainbow update (fraction of a full cycle).
pub const RAINBOW_HUE_STEP: f32 = 0.01;

/// Phase advance per pulse update, radians.
pub const PULSE_PHASE_STEP: f32 = 0.3;

/// Smallest radius scale a pulse reaches, as a fraction of the base radius.
pub const PULSE_MIN_SCALE: f32 = 0.25;
