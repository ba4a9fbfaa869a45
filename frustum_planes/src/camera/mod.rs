//! Camera module — camera basis and camera configuration.
//!
//! Nothing here is stored between calls: a pose and a projection go in,
//! a basis comes out, and the frustum module turns that into planes.

mod basis;
mod pose;

pub use basis::{CameraBasis, PARALLEL_EPSILON, build_basis};
pub use pose::{CameraPose, DEFAULT_HEIGHT, DEFAULT_WIDTH, Projection};

pub(crate) use pose::{validate_aspect, validate_depth_range, validate_fovy};
