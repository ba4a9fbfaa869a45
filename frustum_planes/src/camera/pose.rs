/// Camera configuration — pose and perspective projection parameters.
///
/// Plain data containers. `Projection::validate()` performs the same checks
/// the plane derivation performs, so a configuration can be rejected before
/// any geometry is built.

use glam::Vec3;
use crate::error::{Error, Result, log_and_return_error};

const SOURCE: &str = "frustum::Projection";

/// Default viewport used for the default aspect ratio
pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;

/// Camera pose: where the eye is and where it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position
    pub eye: Vec3,
    /// View direction (need not be normalized)
    pub view_direction: Vec3,
    /// World up (need not be normalized)
    pub world_up: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: Vec3::new(10.0, 10.0, 10.0),
            view_direction: Vec3::new(-5.0, -5.0, -5.0),
            world_up: Vec3::Y,
        }
    }
}

impl CameraPose {
    pub fn new(eye: Vec3, view_direction: Vec3, world_up: Vec3) -> Self {
        Self { eye, view_direction, world_up }
    }

    /// Pose looking from `eye` toward the point `target`.
    pub fn looking_at(eye: Vec3, target: Vec3, world_up: Vec3) -> Self {
        Self::new(eye, target - eye, world_up)
    }

    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    pub fn with_view_direction(mut self, view_direction: Vec3) -> Self {
        self.view_direction = view_direction;
        self
    }

    pub fn with_world_up(mut self, world_up: Vec3) -> Self {
        self.world_up = world_up;
        self
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport width / height, > 0
    pub aspect: f32,
    /// Full vertical field of view in degrees, in (0, 180)
    pub fovy_degrees: f32,
    /// Near clip distance along the view direction
    pub znear: f32,
    /// Far clip distance along the view direction
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect: DEFAULT_WIDTH as f32 / DEFAULT_HEIGHT as f32,
            fovy_degrees: 90.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Projection {
    pub fn new(aspect: f32, fovy_degrees: f32, znear: f32, zfar: f32) -> Self {
        Self { aspect, fovy_degrees, znear, zfar }
    }

    /// Aspect ratio from a viewport size in pixels.
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.aspect = width as f32 / height as f32;
        self
    }

    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn with_fovy_degrees(mut self, fovy_degrees: f32) -> Self {
        self.fovy_degrees = fovy_degrees;
        self
    }

    pub fn with_depth_range(mut self, znear: f32, zfar: f32) -> Self {
        self.znear = znear;
        self.zfar = zfar;
        self
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for the first offending field.
    pub fn validate(&self) -> Result<()> {
        validate_aspect(self.aspect)?;
        validate_fovy(self.fovy_degrees)?;
        validate_depth_range(self.znear, self.zfar)
    }
}

/// `aspect` must be finite and > 0.
pub(crate) fn validate_aspect(aspect: f32) -> Result<()> {
    if aspect.is_finite() && aspect > 0.0 {
        Ok(())
    } else {
        Err(log_and_return_error(
            SOURCE,
            Error::InvalidArgument(format!("aspect must be finite and > 0, got {}", aspect)),
        ))
    }
}

/// `fovy_degrees` must lie strictly inside (0, 180).
pub(crate) fn validate_fovy(fovy_degrees: f32) -> Result<()> {
    if fovy_degrees > 0.0 && fovy_degrees < 180.0 {
        Ok(())
    } else {
        Err(log_and_return_error(
            SOURCE,
            Error::InvalidArgument(format!(
                "fovy_degrees must be in (0, 180), got {}",
                fovy_degrees
            )),
        ))
    }
}

/// Requires finite `0 < znear < zfar`.
pub(crate) fn validate_depth_range(znear: f32, zfar: f32) -> Result<()> {
    if znear.is_finite() && zfar.is_finite() && znear > 0.0 && znear < zfar {
        Ok(())
    } else {
        Err(log_and_return_error(
            SOURCE,
            Error::InvalidArgument(format!(
                "depth range must satisfy 0 < znear < zfar, got znear={} zfar={}",
                znear, zfar
            )),
        ))
    }
}

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
