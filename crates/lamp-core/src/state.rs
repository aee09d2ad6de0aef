//! Shared scene state consumed by both frontends.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! are suitable for use on both native and web targets. The frontends use
//! them to derive pointer rays, the world-space viewport, the fixture's
//! per-frame pose, and the GPU uniform block.

use crate::constants::*;
use crate::sway::SwayState;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed lamp-scene camera at a given aspect ratio.
    pub fn scene(aspect: f32) -> Self {
        Self {
            eye: CAMERA_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World-space extent of the view at the plane containing `point`
    /// (perpendicular distance along the camera forward axis).
    pub fn viewport_world_size(&self, point: Vec3) -> Vec2 {
        let forward = (self.target - self.eye).normalize();
        let dist = (point - self.eye).dot(forward).max(self.znear);
        let height = 2.0 * (self.fovy_radians * 0.5).tan() * dist;
        Vec2::new(height * self.aspect, height)
    }

    /// Compute a world-space ray through normalized device coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)` in world space.
    pub fn screen_to_world_ray(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p_far: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p_far - self.eye).normalize();
        (self.eye, rd)
    }
}

/// Per-frame world-space pose of the fixture, derived from the sway state.
///
/// The cable hangs rigidly from the pivot; the bobble offset moves only the
/// bulb along the rotated cable axis. The point light sits at the cable end.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixturePose {
    pub cable_top: Vec3,
    pub cable_bottom: Vec3,
    pub bulb_center: Vec3,
}

pub fn fixture_pose(sway: &SwayState, bobble_y: f32) -> FixturePose {
    let rot = Quat::from_euler(EulerRot::XYZ, sway.rotation_x, 0.0, sway.rotation_z);
    FixturePose {
        cable_top: PIVOT_POSITION,
        cable_bottom: PIVOT_POSITION + rot * Vec3::new(0.0, -CABLE_HEIGHT, 0.0),
        bulb_center: PIVOT_POSITION + rot * Vec3::new(0.0, -CABLE_HEIGHT + bobble_y, 0.0),
    }
}

/// GPU uniform block for the fullscreen scene pass, shared by the web and
/// native renderers. Field order matches the WGSL struct in
/// `shaders/scene.wgsl` (16-byte rows).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub light_intensity: f32,
    pub bulb_center: [f32; 3],
    pub bulb_radius: f32,
    pub cable_top: [f32; 3],
    pub cable_radius: f32,
    pub cable_bottom: [f32; 3],
    pub fovy: f32,
    pub cam_eye: [f32; 3],
    pub aspect: f32,
    pub cam_target: [f32; 3],
    pub _pad: f32,
}

impl SceneUniforms {
    pub fn new(
        resolution: [f32; 2],
        time: f32,
        pose: &FixturePose,
        light_intensity: f32,
        camera: &Camera,
    ) -> Self {
        Self {
            resolution,
            time,
            light_intensity,
            bulb_center: pose.bulb_center.to_array(),
            bulb_radius: BULB_RADIUS,
            cable_top: pose.cable_top.to_array(),
            cable_radius: CABLE_RADIUS,
            cable_bottom: pose.cable_bottom.to_array(),
            fovy: camera.fovy_radians,
            cam_eye: camera.eye.to_array(),
            aspect: camera.aspect,
            cam_target: camera.target.to_array(),
            _pad: 0.0,
        }
    }
}
