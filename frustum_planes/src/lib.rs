/*!
# Frustum Planes

Derives the clipping planes of a perspective view frustum from a camera pose
(eye, view direction, up) and perspective parameters (vertical FOV, aspect).

Everything is a pure function over `glam` value types: no state is kept
between calls and every entry point may be called from any thread.

## Architecture

- **math::rotation**: axis-angle quaternions and vector rotation
- **camera**: camera basis builder, pose and projection configuration
- **frustum**: plane type, side planes, near/far planes, six-plane frustum
- **log**: pluggable logger used for diagnostics and error reports

## Conventions

Plane normals are unit length and point OUT of the frustum. A point `p` is
inside a plane when `dot(normal, p) <= distance`.
*/

// Internal modules
mod error;
pub mod camera;
pub mod frustum;
pub mod log;
pub mod math;

// Error types
pub use error::{Error, Result};

// Main entry points
pub use camera::{CameraBasis, CameraPose, Projection, build_basis};
pub use frustum::{
    Frustum, FrustumDepthPlanes, FrustumSidePlanes, Plane,
    compute_frustum_side_planes, derive_depth_planes, derive_side_planes,
    normal_perpendicular_to,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use math::rotation;

// Re-export math library at crate root
pub use glam;
