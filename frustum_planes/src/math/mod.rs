//! Math module — quaternion rotation primitive and scale-safe normalization.
//!
//! Vector and quaternion storage come from glam; this module only adds the
//! axis-angle construction and the rotation formula the frustum code relies on.

pub mod rotation;

pub use rotation::{from_axis_angle, rotate};

use glam::Vec3;

/// Normalize a finite, non-zero vector of any magnitude.
///
/// Dividing by the largest component first keeps `length_squared` away from
/// f32 overflow and subnormal underflow.
pub(crate) fn normalize_any_scale(v: Vec3) -> Option<Vec3> {
    if !v.is_finite() {
        return None;
    }
    let largest = v.abs().max_element();
    if largest == 0.0 {
        return None;
    }
    (v / largest).try_normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_any_scale_extremes() {
        for v in [Vec3::new(3e-39, 0.0, 4e-39), Vec3::new(3e30, 4e30, 0.0), Vec3::new(-2.0, 0.0, 0.0)] {
            let n = normalize_any_scale(v).unwrap();
            assert!((n.length() - 1.0).abs() < 1e-6, "{:?} -> {:?}", v, n);
            assert!(n.dot(v.signum()) > 0.0);
        }
    }

    #[test]
    fn test_normalize_any_scale_rejects_degenerate() {
        assert!(normalize_any_scale(Vec3::ZERO).is_none());
        assert!(normalize_any_scale(Vec3::new(f32::NAN, 1.0, 0.0)).is_none());
        assert!(normalize_any_scale(Vec3::new(f32::INFINITY, 1.0, 0.0)).is_none());
        assert!(normalize_any_scale(Vec3::new(f32::MAX, f32::MAX, f32::MAX)).is_some());
    }
}
