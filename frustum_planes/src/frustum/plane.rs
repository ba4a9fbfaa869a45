/// Plane in point-normal form.
///
/// - `normal` is unit length and points OUT of the half-space it bounds
/// - `distance` = dot(normal, any point on the plane)
/// - A point P is inside if dot(normal, P) <= distance

use glam::Vec3;
use crate::error::{Error, Result, log_and_return_error};
use crate::math::normalize_any_scale;

const SOURCE: &str = "frustum::Plane";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit outward normal
    pub normal: Vec3,
    /// Offset from the origin along `normal`
    pub distance: f32,
}

impl Plane {
    /// Plane through `point` with the given normal (normalized here).
    ///
    /// `normal` must be finite and non-zero, otherwise every field is NaN.
    /// Use [`Plane::try_from_point_normal`] for unchecked input.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            distance: normal.dot(point),
        }
    }

    /// Checked form of [`Plane::from_point_normal`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `point` is non-finite or `normal`
    /// is zero-length or non-finite.
    pub fn try_from_point_normal(point: Vec3, normal: Vec3) -> Result<Self> {
        if !point.is_finite() {
            return Err(log_and_return_error(
                SOURCE,
                Error::InvalidArgument(format!("plane point {:?} is not finite", point)),
            ));
        }
        let normal = normalize_any_scale(normal).ok_or_else(|| {
            log_and_return_error(
                SOURCE,
                Error::InvalidArgument(format!("plane normal {:?} cannot be normalized", normal)),
            )
        })?;
        Ok(Self {
            normal,
            distance: normal.dot(point),
        })
    }

    /// `dot(normal, point) - distance`. Negative inside, positive outside, zero on the plane.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// True if `point` is on the plane or on its inner side.
    pub fn is_inside(&self, point: Vec3) -> bool {
        self.signed_distance(point) <= 0.0
    }

    /// Same plane bounding the opposite half-space.
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
        }
    }
}

impl From<(Vec3, Vec3)> for Plane {
    /// `(point, normal)`; same precondition as [`Plane::from_point_normal`]
    fn from((point, normal): (Vec3, Vec3)) -> Self {
        Self::from_point_normal(point, normal)
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
