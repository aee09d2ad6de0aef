//! Pointer picking against the fixture's interactive surface.

use crate::constants::{BULB_RADIUS, PICK_BULB_PADDING, PICK_CABLE_RADIUS};
use crate::state::FixturePose;
use glam::Vec3;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Smallest distance between a forward ray and a line segment.
pub fn ray_segment_distance(ray_origin: Vec3, ray_dir: Vec3, a: Vec3, b: Vec3) -> f32 {
    let d1 = ray_dir;
    let d2 = b - a;
    let r = ray_origin - a;
    let a11 = d1.dot(d1).max(1e-8);
    let b12 = d1.dot(d2);
    let c22 = d2.dot(d2).max(1e-8);
    let d_ = d1.dot(r);
    let e_ = d2.dot(r);

    let denom = a11 * c22 - b12 * b12;
    let mut t = if denom.abs() > 1e-8 {
        (a11 * e_ - b12 * d_) / denom
    } else {
        0.0
    };
    t = t.clamp(0.0, 1.0);
    let s = ((b12 * t - d_) / a11).max(0.0);
    t = ((b12 * s + e_) / c22).clamp(0.0, 1.0);

    let p_ray = ray_origin + d1 * s;
    let p_seg = a + d2 * t;
    (p_ray - p_seg).length()
}

/// Hit test the pointer ray against the fixture: the padded bulb sphere or
/// the cable segment.
pub fn fixture_hit(ray_origin: Vec3, ray_dir: Vec3, pose: &FixturePose) -> bool {
    if ray_sphere(
        ray_origin,
        ray_dir,
        pose.bulb_center,
        BULB_RADIUS + PICK_BULB_PADDING,
    )
    .is_some()
    {
        return true;
    }
    ray_segment_distance(ray_origin, ray_dir, pose.cable_top, pose.cable_bottom)
        < PICK_CABLE_RADIUS
}
