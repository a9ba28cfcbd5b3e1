//! Vector helpers for stroke geometry
//!
//! glam covers distance and length; this module adds the rotation
//! machinery used to stand cross-section rings perpendicular to a stroke
//! segment, plus pose-matrix helpers for hosts that sample a tracked
//! camera.

use glam::{Mat4, Quat, Vec3};

use crate::constants::DIRECTION_EPSILON;

/// Midpoint of two points.
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}

/// Axis and angle rotating the canonical +Y axis onto `direction`.
///
/// For a direction `(x, y, z)` with horizontal magnitude `d = sqrt(x² + z²)`,
/// the rotation tilts +Y by `atan2(d, y)` around the horizontal axis
/// `(z/d, 0, -x/d)`. A direction parallel to ±Y has no well-defined
/// horizontal axis; the fallback is the fixed +X axis with angle 0 (up)
/// or π (down), so near-vertical strokes never divide by zero.
pub fn rotation_between(direction: Vec3) -> (Vec3, f32) {
    let d = (direction.x * direction.x + direction.z * direction.z).sqrt();
    if d < DIRECTION_EPSILON {
        let angle = if direction.y >= 0.0 {
            0.0
        } else {
            std::f32::consts::PI
        };
        return (Vec3::X, angle);
    }
    let angle = d.atan2(direction.y);
    let axis = Vec3::new(direction.z / d, 0.0, -direction.x / d);
    (axis, angle)
}

/// Rotate `point` by `angle` radians around the unit vector `axis`.
///
/// Length-preserving within floating tolerance.
pub fn rotate_axis_angle(point: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    Quat::from_axis_angle(axis, angle) * point
}

/// Translation column of a 4x4 pose matrix.
pub fn pose_translation(pose: Mat4) -> Vec3 {
    pose.w_axis.truncate()
}

/// World-space point `forward_offset` meters in front of a camera pose.
///
/// Camera space looks down -Z, so the draw point sits on the pose's
/// negative Z axis.
pub fn pose_point(pose: Mat4, forward_offset: f32) -> Vec3 {
    pose.transform_point3(Vec3::new(0.0, 0.0, -forward_offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_midpoint() {
        let m = midpoint(Vec3::new(1.0, 2.0, 3.0), Vec3::new(3.0, 4.0, 5.0));
        assert!(m.distance(Vec3::new(2.0, 3.0, 4.0)) < EPS);
    }

    #[test]
    fn test_rotation_between_maps_up_onto_direction() {
        let directions = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-0.3, 0.8, 0.5),
            Vec3::new(0.01, -1.0, 0.02),
        ];
        for n in directions {
            let (axis, angle) = rotation_between(n);
            let rotated = rotate_axis_angle(Vec3::Y, axis, angle);
            assert!(
                rotated.distance(n.normalize()) < EPS,
                "direction {n:?} produced {rotated:?}"
            );
        }
    }

    #[test]
    fn test_rotation_between_vertical_fallback() {
        // A stroke drawn straight up the reference axis must not divide
        // by zero and must return a stable axis.
        let (axis, angle) = rotation_between(Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(axis, Vec3::X);
        assert!(angle.abs() < EPS);

        let (axis, angle) = rotation_between(Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(axis, Vec3::X);
        assert!((angle - std::f32::consts::PI).abs() < EPS);
        let down = rotate_axis_angle(Vec3::Y, axis, angle);
        assert!(down.distance(Vec3::NEG_Y) < EPS);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let p = Vec3::new(0.3, -1.2, 0.7);
        let rotated = rotate_axis_angle(p, Vec3::Z, 1.234);
        assert!((rotated.length() - p.length()).abs() < EPS);
    }

    #[test]
    fn test_pose_point_in_front_of_camera() {
        // Identity pose looks down -Z from the origin.
        let p = pose_point(Mat4::IDENTITY, 0.2);
        assert!(p.distance(Vec3::new(0.0, 0.0, -0.2)) < EPS);

        // A translated pose carries the draw point with it.
        let pose = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let p = pose_point(pose, 0.2);
        assert!(p.distance(Vec3::new(1.0, 2.0, 2.8)) < EPS);
        assert!(pose_translation(pose).distance(Vec3::new(1.0, 2.0, 3.0)) < EPS);
    }
}
