//! Cross-section profiles for tube and ribbon meshes
//!
//! A profile is the ring of points swept along stroke segments to skin a
//! tube. Profiles are templates: generated once per brush in the X-Z
//! plane and re-oriented for every segment, so generation is
//! deterministic and per-frame work allocates nothing new here.

use glam::Vec3;

use crate::error::GeometryError;
use crate::math::{rotate_axis_angle, rotation_between};

/// An ordered ring of points lying in the X-Z plane.
///
/// The ring is closed: the first and last points coincide, so
/// interleaving two rings yields a triangle strip that wraps all the way
/// around.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<Vec3>,
}

impl Profile {
    /// Circle of `segment_count` segments with the given radius.
    ///
    /// Produces `segment_count + 1` points at angles `2π·i / segment_count`.
    pub fn circle(radius: f32, segment_count: usize) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        if segment_count < 3 {
            return Err(GeometryError::TooFewSegments {
                min: 3,
                actual: segment_count,
            });
        }
        let points = (0..=segment_count)
            .map(|i| {
                let theta = i as f32 / segment_count as f32 * std::f32::consts::TAU;
                Vec3::new(theta.cos(), 0.0, theta.sin()) * radius
            })
            .collect();
        Ok(Self { points })
    }

    /// Rectangle spanning `±width` by `±height`, for flat/chisel brushes.
    pub fn rectangle(width: f32, height: f32) -> Result<Self, GeometryError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::InvalidExtents { width, height });
        }
        let points = vec![
            Vec3::new(-width, 0.0, -height),
            Vec3::new(width, 0.0, -height),
            Vec3::new(width, 0.0, height),
            Vec3::new(-width, 0.0, height),
            Vec3::new(-width, 0.0, -height),
        ];
        Ok(Self { points })
    }

    /// Ring re-oriented to lie perpendicular to `direction`.
    pub fn oriented(&self, direction: Vec3) -> Vec<Vec3> {
        let (axis, angle) = rotation_between(direction);
        self.points
            .iter()
            .map(|&p| rotate_axis_angle(p, axis, angle))
            .collect()
    }

    /// Uniformly scaled copy of the template.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            points: self.points.iter().map(|&p| p * factor).collect(),
        }
    }

    /// Template points in the X-Z plane.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
