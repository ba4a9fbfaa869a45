/// Depth planes — near and far planes perpendicular to the view direction.
///
/// Kept apart from the side planes: the side planes never depend on znear/zfar.

use crate::camera::{CameraBasis, validate_depth_range};
use crate::error::Result;
use super::plane::Plane;

/// Near and far planes. `near` faces back toward the eye, `far` faces forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumDepthPlanes {
    pub near: Plane,
    pub far: Plane,
}

/// Derive the near and far planes from a camera basis.
///
/// A point `position + front * t` is inside both planes iff `znear <= t <= zfar`.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` unless `0 < znear < zfar` and both are finite.
pub fn derive_depth_planes(basis: &CameraBasis, znear: f32, zfar: f32) -> Result<FrustumDepthPlanes> {
    validate_depth_range(znear, zfar)?;

    let near = Plane::from_point_normal(basis.position + basis.front * znear, -basis.front);
    let far = Plane::from_point_normal(basis.position + basis.front * zfar, basis.front);

    crate::frustum_trace!(
        "frustum::DepthPlanes",
        "near d={} far d={}",
        near.distance,
        far.distance
    );

    Ok(FrustumDepthPlanes { near, far })
}
