use glam::Vec3;
use super::*;

const EPS: f32 = 1e-6;

#[test]
fn test_from_point_normal_normalizes() {
    let plane = Plane::from_point_normal(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(plane.normal, Vec3::Y);
    assert!((plane.distance - 2.0).abs() < EPS);
}

#[test]
fn test_from_tuple_matches_from_point_normal() {
    let point = Vec3::new(1.0, 2.0, 3.0);
    let normal = Vec3::new(-1.0, 0.5, 2.0);
    assert_eq!(Plane::from((point, normal)), Plane::from_point_normal(point, normal));
}

#[test]
fn test_point_on_plane_has_zero_signed_distance() {
    let point = Vec3::new(10.0, 10.0, 10.0);
    let plane = Plane::from_point_normal(point, Vec3::new(0.3, -0.2, 0.9));
    assert!(plane.signed_distance(point).abs() < 1e-5);
}

#[test]
fn test_signed_distance_sign_convention() {
    let plane = Plane::from_point_normal(Vec3::ZERO, Vec3::X);

    assert!((plane.signed_distance(Vec3::new(3.0, 1.0, -4.0)) - 3.0).abs() < EPS);
    assert!(!plane.is_inside(Vec3::new(3.0, 0.0, 0.0)));
    assert!(plane.is_inside(Vec3::new(-3.0, 0.0, 0.0)));
    assert!(plane.is_inside(Vec3::new(0.0, 7.0, 0.0)));
}

#[test]
fn test_flipped_swaps_half_spaces() {
    let plane = Plane::from_point_normal(Vec3::new(0.0, 0.0, 2.0), Vec3::Z);
    let flipped = plane.flipped();

    let p = Vec3::new(0.0, 0.0, 5.0);
    assert!(!plane.is_inside(p));
    assert!(flipped.is_inside(p));
    assert!((plane.signed_distance(p) + flipped.signed_distance(p)).abs() < EPS);
}

#[test]
fn test_try_from_point_normal_matches_unchecked() {
    let point = Vec3::new(1.0, 2.0, 3.0);
    let normal = Vec3::new(-1.0, 0.5, 2.0);
    let checked = Plane::try_from_point_normal(point, normal).unwrap();
    let unchecked = Plane::from_point_normal(point, normal);
    assert!((checked.normal - unchecked.normal).length() < EPS);
    assert!((checked.distance - unchecked.distance).abs() < 1e-5);
}

#[test]
fn test_try_from_point_normal_rejects_degenerate_normal() {
    for normal in [Vec3::ZERO, Vec3::new(f32::NAN, 1.0, 0.0), Vec3::new(0.0, f32::INFINITY, 0.0)] {
        let result = Plane::try_from_point_normal(Vec3::ONE, normal);
        assert!(matches!(result, Err(Error::InvalidArgument(msg)) if msg.contains("normal")));
    }
}

#[test]
fn test_try_from_point_normal_rejects_non_finite_point() {
    let result = Plane::try_from_point_normal(Vec3::new(0.0, f32::NAN, 0.0), Vec3::Y);
    assert!(matches!(result, Err(Error::InvalidArgument(msg)) if msg.contains("point")));
}

#[test]
fn test_zero_normal_unchecked_is_nan() {
    let plane = Plane::from_point_normal(Vec3::ONE, Vec3::ZERO);
    assert!(plane.normal.is_nan());
}

#[test]
fn test_try_from_point_normal_accepts_extreme_magnitudes() {
    for scale in [1e-30_f32, 1e30] {
        let plane = Plane::try_from_point_normal(Vec3::ZERO, Vec3::new(0.0, 0.0, scale)).unwrap();
        assert!((plane.normal - Vec3::Z).length() < EPS);
    }
}
