/// Side planes — top, bottom, left and right planes of a perspective frustum.
///
/// Each edge direction is `front` swept by the half field of view about a
/// basis axis (`right` for top/bottom, `true_up` for left/right). A further
/// quarter turn about the same axis, in the same sweep direction, turns that
/// edge direction into the plane normal pointing away from the frustum.
///
/// All four planes pass through the eye, not through the near plane.

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;
use crate::camera::{CameraBasis, validate_aspect, validate_fovy};
use crate::error::Result;
use crate::math::rotation::{from_axis_angle, rotate};
use super::plane::Plane;

const SOURCE: &str = "frustum::SidePlanes";

/// The four side planes of a frustum, all through the eye position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumSidePlanes {
    pub top: Plane,
    pub bottom: Plane,
    pub left: Plane,
    pub right: Plane,
}

impl FrustumSidePlanes {
    /// Planes in left, right, bottom, top order.
    pub fn as_array(&self) -> [Plane; 4] {
        [self.left, self.right, self.bottom, self.top]
    }

    /// True if `point` is inside (or on) all four planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.as_array().iter().all(|plane| plane.is_inside(point))
    }
}

/// Vertical and horizontal half field of view, in radians.
///
/// `half_h = atan(tan(half_v) * aspect)`.
pub fn half_angles(aspect: f32, fovy_degrees: f32) -> (f32, f32) {
    let half_fov_v = fovy_degrees.to_radians() * 0.5;
    let half_fov_h = (half_fov_v.tan() * aspect).atan();
    (half_fov_v, half_fov_h)
}

/// Unit normal perpendicular to `edge_direction`, obtained by turning it a
/// further +90° about `rotation_axis`.
///
/// For a unit axis perpendicular to the edge this equals
/// `normalize(rotation_axis × edge_direction)`. Edges swept by a negative
/// angle should pass the negated axis so the normal ends up on the outer side.
pub fn normal_perpendicular_to(edge_direction: Vec3, rotation_axis: Vec3) -> Vec3 {
    rotate(from_axis_angle(rotation_axis, FRAC_PI_2), edge_direction).normalize()
}

/// Derive the four side planes from a camera basis.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `aspect` is not a finite positive
/// number or `fovy_degrees` is outside (0, 180).
pub fn derive_side_planes(
    basis: &CameraBasis,
    aspect: f32,
    fovy_degrees: f32,
) -> Result<FrustumSidePlanes> {
    validate_aspect(aspect)?;
    validate_fovy(fovy_degrees)?;

    let (half_fov_v, half_fov_h) = half_angles(aspect, fovy_degrees);

    crate::frustum_trace!(
        SOURCE,
        "half_fov_v={} rad, half_fov_h={} rad",
        half_fov_v,
        half_fov_h
    );

    let planes = FrustumSidePlanes {
        top: side_plane(basis, basis.right, half_fov_v),
        bottom: side_plane(basis, basis.right, -half_fov_v),
        left: side_plane(basis, basis.true_up, half_fov_h),
        right: side_plane(basis, basis.true_up, -half_fov_h),
    };

    crate::frustum_trace!(
        SOURCE,
        "top={:?} bottom={:?} left={:?} right={:?}",
        planes.top.normal,
        planes.bottom.normal,
        planes.left.normal,
        planes.right.normal
    );

    Ok(planes)
}

/// Sweep `front` by `half_angle` about `axis`, then build the plane through
/// the eye whose normal is perpendicular to that edge.
fn side_plane(basis: &CameraBasis, axis: Vec3, half_angle: f32) -> Plane {
    let edge_direction = rotate(from_axis_angle(axis, half_angle), basis.front);
    let normal_axis = if half_angle.is_sign_negative() { -axis } else { axis };
    let normal = normal_perpendicular_to(edge_direction, normal_axis);
    Plane::from_point_normal(basis.position, normal)
}

#[cfg(test)]
#[path = "side_planes_tests.rs"]
mod tests;
