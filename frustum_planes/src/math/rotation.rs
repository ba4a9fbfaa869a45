/// Quaternion rotation primitive.
///
/// Both functions are unchecked: the axis must already be unit length.
/// A non-unit axis yields a non-unit quaternion, and `rotate` then scales
/// the vector instead of only turning it.

use glam::{Quat, Vec3};

/// Build a rotation quaternion `(axis * sin(angle/2), cos(angle/2))`.
///
/// `angle` is in radians, right-handed about `axis`.
pub fn from_axis_angle(axis: Vec3, angle: f32) -> Quat {
    let (s, c) = (angle * 0.5).sin_cos();
    let v = axis * s;
    Quat::from_xyzw(v.x, v.y, v.z, c)
}

/// Rotate `v` by `q` using the double-cross form of `q * v * q⁻¹`:
/// `v + 2 * cross(q_vec, cross(q_vec, v) + q_w * v)`.
pub fn rotate(q: Quat, v: Vec3) -> Vec3 {
    let q_vec = Vec3::new(q.x, q.y, q.z);
    let tmp = q_vec.cross(v) + v * q.w;
    v + q_vec.cross(tmp) * 2.0
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
