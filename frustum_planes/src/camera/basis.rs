/// Camera basis — orthonormal frame derived from a camera pose.
///
/// `up` is the caller's world up, normalized but NOT re-orthogonalized
/// against `front`. `true_up` is the Gram-Schmidt corrected up, which is
/// what the left/right side planes rotate about. When the caller's up is
/// already perpendicular to the view direction the two are identical.

use glam::Vec3;
use crate::error::{Error, Result, log_and_return_error};
use crate::math::normalize_any_scale;

const SOURCE: &str = "frustum::Basis";

/// Minimum `|front × up|` (sine of the angle between them) for a usable basis
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Above this `|dot(front, up)|` the caller's up is reported as skewed
const SKEW_REPORT_THRESHOLD: f32 = 1e-3;

/// Orthonormal camera frame plus the eye position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Eye position, unchanged from the input
    pub position: Vec3,
    /// Unit view direction
    pub front: Vec3,
    /// Unit caller-supplied world up (not orthogonalized)
    pub up: Vec3,
    /// Unit `normalize(front × up)`
    pub right: Vec3,
    /// Unit up perpendicular to both `front` and `right`
    pub true_up: Vec3,
}

impl CameraBasis {
    /// How far the caller's up is from perpendicular to `front` (0 = perpendicular).
    pub fn up_skew(&self) -> f32 {
        self.front.dot(self.up).abs()
    }
}

/// Build the camera basis from an eye position, view direction and world up.
///
/// Neither direction needs to be pre-normalized.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if:
/// - `eye` has a non-finite component
/// - `view_direction` or `world_up` is zero-length or non-finite
/// - `view_direction` is parallel to `world_up`
pub fn build_basis(eye: Vec3, view_direction: Vec3, world_up: Vec3) -> Result<CameraBasis> {
    if !eye.is_finite() {
        return Err(invalid(format!("eye {:?} is not finite", eye)));
    }

    let front = normalize_any_scale(view_direction).ok_or_else(|| {
        invalid(format!("view_direction {:?} cannot be normalized", view_direction))
    })?;

    let up = normalize_any_scale(world_up)
        .ok_or_else(|| invalid(format!("world_up {:?} cannot be normalized", world_up)))?;

    let cross = front.cross(up);
    if cross.length() < PARALLEL_EPSILON {
        return Err(invalid(format!(
            "view_direction {:?} is parallel to world_up {:?}",
            view_direction, world_up
        )));
    }
    let right = cross.normalize();

    // Gram-Schmidt: drop the component of up along front
    let true_up = (up - front * up.dot(front)).normalize();

    let basis = CameraBasis {
        position: eye,
        front,
        up,
        right,
        true_up,
    };

    if basis.up_skew() > SKEW_REPORT_THRESHOLD {
        crate::frustum_debug!(
            SOURCE,
            "world_up is {:.2} degrees off perpendicular to view_direction, using corrected up {:?}",
            basis.up_skew().asin().to_degrees(),
            true_up
        );
    }

    crate::frustum_trace!(
        SOURCE,
        "position={:?} front={:?} up={:?} right={:?} true_up={:?}",
        basis.position,
        basis.front,
        basis.up,
        basis.right,
        basis.true_up
    );

    Ok(basis)
}

fn invalid(msg: String) -> Error {
    log_and_return_error(SOURCE, Error::InvalidArgument(msg))
}

#[cfg(test)]
#[path = "basis_tests.rs"]
mod tests;
