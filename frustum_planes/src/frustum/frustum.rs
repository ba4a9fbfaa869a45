/// Frustum — side planes through the eye plus near and far planes.
///
/// Every plane normal points outward. A point P is inside the frustum if
/// `plane.signed_distance(P) <= 0` for all six planes.
///
/// `compute_frustum_side_planes()` is the side-plane-only entry point;
/// `Frustum::from_camera()` builds the full six-plane volume from
/// configuration structs.

use glam::Vec3;
use crate::camera::{CameraBasis, CameraPose, Projection, build_basis};
use crate::error::Result;
use super::depth_planes::{FrustumDepthPlanes, derive_depth_planes};
use super::plane::Plane;
use super::side_planes::{FrustumSidePlanes, derive_side_planes};

const SOURCE: &str = "frustum::Frustum";

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Derive the four side planes straight from camera and projection parameters.
///
/// `znear` and `zfar` are accepted for call-site symmetry with a projection
/// matrix but do not affect the side planes; use `derive_depth_planes` or
/// `Frustum::from_camera` for those.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` for a degenerate basis (zero-length or
/// parallel `view_direction`/`world_up`), `aspect <= 0`, or `fovy_degrees`
/// outside (0, 180).
///
/// # Example
///
/// ```
/// use frustum_planes::compute_frustum_side_planes;
/// use frustum_planes::glam::Vec3;
///
/// let eye = Vec3::new(10.0, 10.0, 10.0);
/// let planes = compute_frustum_side_planes(
///     eye,
///     Vec3::new(-1.0, -1.0, -1.0),
///     Vec3::Y,
///     16.0 / 9.0,
///     90.0,
///     0.1,
///     100.0,
/// )?;
/// assert!(planes.top.signed_distance(eye).abs() < 1e-4);
/// # Ok::<(), frustum_planes::Error>(())
/// ```
pub fn compute_frustum_side_planes(
    eye: Vec3,
    view_direction: Vec3,
    world_up: Vec3,
    aspect: f32,
    fovy_degrees: f32,
    znear: f32,
    zfar: f32,
) -> Result<FrustumSidePlanes> {
    crate::frustum_trace!(
        SOURCE,
        "side planes only, znear={} zfar={} not applied",
        znear,
        zfar
    );

    let basis = build_basis(eye, view_direction, world_up)?;
    derive_side_planes(&basis, aspect, fovy_degrees)
}

/// Six-plane view frustum plus the basis it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    basis: CameraBasis,
    sides: FrustumSidePlanes,
    depth: FrustumDepthPlanes,
}

impl Frustum {
    /// Build the frustum for a camera pose and projection.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the projection fails
    /// `Projection::validate()` or the pose gives a degenerate basis.
    pub fn from_camera(pose: &CameraPose, projection: &Projection) -> Result<Self> {
        projection.validate()?;

        let basis = build_basis(pose.eye, pose.view_direction, pose.world_up)?;
        let sides = derive_side_planes(&basis, projection.aspect, projection.fovy_degrees)?;
        let depth = derive_depth_planes(&basis, projection.znear, projection.zfar)?;

        crate::frustum_debug!(
            SOURCE,
            "frustum at {:?} facing {:?}, fovy={} aspect={} depth=[{}, {}]",
            basis.position,
            basis.front,
            projection.fovy_degrees,
            projection.aspect,
            projection.znear,
            projection.zfar
        );

        Ok(Self { basis, sides, depth })
    }

    /// Camera basis (position, front, up, right, true_up).
    pub fn basis(&self) -> &CameraBasis {
        &self.basis
    }

    /// Top, bottom, left and right planes.
    pub fn side_planes(&self) -> &FrustumSidePlanes {
        &self.sides
    }

    /// Near and far planes.
    pub fn depth_planes(&self) -> &FrustumDepthPlanes {
        &self.depth
    }

    /// All six planes, indexed by the `PLANE_*` constants.
    pub fn planes(&self) -> [Plane; 6] {
        [
            self.sides.left,
            self.sides.right,
            self.sides.bottom,
            self.sides.top,
            self.depth.near,
            self.depth.far,
        ]
    }

    /// True if `point` is inside (or on) all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes().iter().all(|plane| plane.is_inside(point))
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
