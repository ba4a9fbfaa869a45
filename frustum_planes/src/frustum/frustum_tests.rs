use glam::Vec3;
use crate::camera::{CameraPose, Projection};
use crate::error::Error;
use super::*;

// ============================================================================
// compute_frustum_side_planes
// ============================================================================

#[test]
fn test_compute_side_planes_matches_two_step_derivation() {
    let eye = Vec3::new(1.0, 2.0, 3.0);
    let view = Vec3::new(0.5, -0.2, -1.0);

    let planes = compute_frustum_side_planes(eye, view, Vec3::Y, 1.5, 60.0, 0.1, 100.0).unwrap();
    let basis = build_basis(eye, view, Vec3::Y).unwrap();
    let expected = derive_side_planes(&basis, 1.5, 60.0).unwrap();

    assert_eq!(planes, expected);
}

#[test]
fn test_compute_side_planes_ignores_depth_range() {
    let eye = Vec3::new(10.0, 10.0, 10.0);
    let view = Vec3::splat(-1.0);

    let a = compute_frustum_side_planes(eye, view, Vec3::Y, 1.0, 90.0, 0.1, 100.0).unwrap();
    let b = compute_frustum_side_planes(eye, view, Vec3::Y, 1.0, 90.0, 50.0, 5.0).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_compute_side_planes_rejects_zero_view_direction() {
    let result = compute_frustum_side_planes(Vec3::ZERO, Vec3::ZERO, Vec3::Y, 1.0, 90.0, 0.1, 100.0);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

// ============================================================================
// Frustum::from_camera
// ============================================================================

#[test]
fn test_frustum_from_default_camera() {
    let frustum = Frustum::from_camera(&CameraPose::default(), &Projection::default()).unwrap();
    let basis = frustum.basis();

    assert_eq!(basis.position, Vec3::new(10.0, 10.0, 10.0));
    for plane in frustum.planes() {
        assert!((plane.normal.length() - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_frustum_plane_indices() {
    let frustum = Frustum::from_camera(&CameraPose::default(), &Projection::default()).unwrap();
    let planes = frustum.planes();

    assert_eq!(planes[PLANE_LEFT], frustum.side_planes().left);
    assert_eq!(planes[PLANE_RIGHT], frustum.side_planes().right);
    assert_eq!(planes[PLANE_BOTTOM], frustum.side_planes().bottom);
    assert_eq!(planes[PLANE_TOP], frustum.side_planes().top);
    assert_eq!(planes[PLANE_NEAR], frustum.depth_planes().near);
    assert_eq!(planes[PLANE_FAR], frustum.depth_planes().far);
}

#[test]
fn test_frustum_contains_points_along_view_axis() {
    let pose = CameraPose::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let projection = Projection::new(1.0, 90.0, 1.0, 20.0);
    let frustum = Frustum::from_camera(&pose, &projection).unwrap();

    assert!(frustum.contains_point(Vec3::ZERO));
    assert!(frustum.contains_point(Vec3::new(2.0, -2.0, 0.0)));

    // Closer than znear
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 4.5)));
    // Beyond zfar
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -20.0)));
    // Behind the eye
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 10.0)));
    // Outside the right plane (45° half-angle, depth 5)
    assert!(!frustum.contains_point(Vec3::new(8.0, 0.0, 0.0)));
}

#[test]
fn test_frustum_rejects_invalid_projection() {
    let pose = CameraPose::default();

    let bad_fovy = Projection::default().with_fovy_degrees(180.0);
    assert!(matches!(Frustum::from_camera(&pose, &bad_fovy), Err(Error::InvalidArgument(_))));

    let bad_depth = Projection::default().with_depth_range(10.0, 1.0);
    assert!(matches!(Frustum::from_camera(&pose, &bad_depth), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_frustum_rejects_parallel_up() {
    let pose = CameraPose::default().with_view_direction(Vec3::NEG_Y);
    let result = Frustum::from_camera(&pose, &Projection::default());
    assert!(matches!(result, Err(Error::InvalidArgument(msg)) if msg.contains("parallel")));
}
