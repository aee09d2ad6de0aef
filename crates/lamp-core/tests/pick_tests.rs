// Host-side tests for pointer picking helpers.

use glam::Vec3;
use lamp_core::{fixture_hit, fixture_pose, ray_segment_distance, ray_sphere, SwayState};

#[test]
fn ray_sphere_intersection_basic() {
    // Ray from origin pointing in +Z direction
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    // Sphere at (0, 0, 5) with radius 2
    let result = ray_sphere(ray_origin, ray_dir, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(result.is_some());

    let t = result.unwrap();
    assert!(t > 0.0);
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(1.0, 0.0, 0.0);

    // Ray goes in X, sphere is in Z
    let result = ray_sphere(ray_origin, ray_dir, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(result.is_none());
}

#[test]
fn ray_sphere_behind_the_origin_is_a_miss() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);
    let result = ray_sphere(ray_origin, ray_dir, Vec3::new(0.0, 0.0, -5.0), 2.0);
    assert!(result.is_none());
}

#[test]
fn ray_segment_distance_perpendicular() {
    let ro = Vec3::ZERO;
    let rd = Vec3::new(0.0, 0.0, 1.0);
    let a = Vec3::new(1.0, -1.0, 5.0);
    let b = Vec3::new(1.0, 1.0, 5.0);
    let d = ray_segment_distance(ro, rd, a, b);
    assert!((d - 1.0).abs() < 1e-5, "d = {d}");
}

#[test]
fn ray_segment_distance_clamps_to_the_near_endpoint() {
    let ro = Vec3::ZERO;
    let rd = Vec3::new(0.0, 0.0, 1.0);
    let a = Vec3::new(3.0, 5.0, 0.0);
    let b = Vec3::new(3.0, 6.0, 0.0);
    let d = ray_segment_distance(ro, rd, a, b);
    assert!((d - 34.0_f32.sqrt()).abs() < 1e-4, "d = {d}");
}

#[test]
fn fixture_hit_accepts_the_bulb_and_the_cable() {
    let pose = fixture_pose(&SwayState::new(), 0.0);

    // Straight at the bulb from the scene camera side
    let to_bulb = (pose.bulb_center - Vec3::new(0.0, 2.5, 8.0)).normalize();
    assert!(fixture_hit(Vec3::new(0.0, 2.5, 8.0), to_bulb, &pose));

    // At the cable midpoint
    let mid = (pose.cable_top + pose.cable_bottom) * 0.5;
    let to_mid = (mid - Vec3::new(0.0, 2.5, 8.0)).normalize();
    assert!(fixture_hit(Vec3::new(0.0, 2.5, 8.0), to_mid, &pose));
}

#[test]
fn fixture_hit_rejects_rays_pointing_away() {
    let pose = fixture_pose(&SwayState::new(), 0.0);
    assert!(!fixture_hit(
        Vec3::new(0.0, 2.5, 8.0),
        Vec3::new(0.0, 0.0, 1.0),
        &pose
    ));
}
