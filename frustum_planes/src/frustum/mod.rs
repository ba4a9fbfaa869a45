//! Frustum module — plane type, side and depth plane derivation, six-plane frustum.

mod depth_planes;
#[allow(clippy::module_inception)]
mod frustum;
mod plane;
mod side_planes;

pub use depth_planes::{FrustumDepthPlanes, derive_depth_planes};
pub use frustum::{
    Frustum, compute_frustum_side_planes,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use plane::Plane;
pub use side_planes::{FrustumSidePlanes, derive_side_planes, half_angles, normal_perpendicular_to};
