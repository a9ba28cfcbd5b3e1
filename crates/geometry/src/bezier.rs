//! Cubic Bezier discretization for smoothed strokes

use glam::{Mat4, Vec3, Vec4};

/// Cubic Bernstein basis, columns ordered by power of `t`.
///
/// Multiplying by `[1, t, t², t³]` yields the four control-point weights.
const BERNSTEIN: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, 0.0, 0.0, 0.0),
    Vec4::new(-3.0, 3.0, 0.0, 0.0),
    Vec4::new(3.0, -6.0, 3.0, 0.0),
    Vec4::new(-1.0, 3.0, -3.0, 1.0),
);

/// Point on the cubic Bezier defined by `control` at parameter `t`.
///
/// Computed as geometry matrix x Bernstein basis x power basis vector.
pub fn cubic_point(control: &[Vec3; 4], t: f32) -> Vec3 {
    let geometry = Mat4::from_cols(
        control[0].extend(1.0),
        control[1].extend(1.0),
        control[2].extend(1.0),
        control[3].extend(1.0),
    );
    let weights = BERNSTEIN * Vec4::new(1.0, t, t * t, t * t * t);
    (geometry * weights).truncate()
}

/// Discretize a cubic Bezier into `detail + 1` points, endpoints included.
pub fn discretize(control: &[Vec3; 4], detail: usize) -> Vec<Vec3> {
    let detail = detail.max(1);
    (0..=detail)
        .map(|i| cubic_point(control, i as f32 / detail as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn control() -> [Vec3; 4] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.1, 0.2, 0.0),
            Vec3::new(0.2, 0.2, 0.1),
            Vec3::new(0.3, 0.0, 0.1),
        ]
    }

    #[test]
    fn test_endpoints_interpolated() {
        let c = control();
        assert!(cubic_point(&c, 0.0).distance(c[0]) < EPS);
        assert!(cubic_point(&c, 1.0).distance(c[3]) < EPS);
    }

    #[test]
    fn test_collinear_controls_stay_on_line() {
        let c = [
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        ];
        for i in 0..=10 {
            let p = cubic_point(&c, i as f32 / 10.0);
            assert!(p.y.abs() < EPS && p.z.abs() < EPS);
            assert!(p.x >= -EPS && p.x <= 3.0 + EPS);
        }
    }

    #[test]
    fn test_discretize_count() {
        let points = discretize(&control(), 16);
        assert_eq!(points.len(), 17);
        assert!(points[0].distance(control()[0]) < EPS);
        assert!(points[16].distance(control()[3]) < EPS);
    }

    #[test]
    fn test_discretize_clamps_zero_detail() {
        let points = discretize(&control(), 0);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_curve_stays_in_control_hull() {
        // Convex-hull property, checked loosely on the bounding box.
        let c = control();
        for i in 0..=32 {
            let p = cubic_point(&c, i as f32 / 32.0);
            assert!(p.x >= -EPS && p.x <= 0.3 + EPS);
            assert!(p.y >= -EPS && p.y <= 0.2 + EPS);
            assert!(p.z >= -EPS && p.z <= 0.1 + EPS);
        }
    }
}
