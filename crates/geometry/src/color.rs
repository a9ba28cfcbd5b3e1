//! Color helpers for context updaters

/// Convert HSV (all components in `0.0..=1.0`) plus alpha to linear RGBA.
pub fn hsv_to_rgba(hue: f32, saturation: f32, value: f32, alpha: f32) -> [f32; 4] {
    let h = hue.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let fract = h - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fract);
    let t = value * (1.0 - saturation * (1.0 - fract));

    let (r, g, b) = match sector as u32 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    [r, g, b, alpha]
}
