//! Sway physics for the hanging lamp fixture.
//!
//! Two independent scalar oscillators (rotation about the pivot's local X and
//! Z axes) advance once per rendered frame: target-tracking while a drag is
//! active, spring-damper return to rest otherwise. The step size is one
//! frame, not a measured time delta; the response curve follows the host's
//! frame cadence.

use crate::constants::*;
use glam::Vec2;

/// Latest pointer sample, refreshed continuously by the host input system.
///
/// `ndc` is the pointer position in normalized device coordinates
/// (`[-1, 1]` on both axes, y up); `viewport` is the world-space extent of
/// the view at the fixture pivot's depth.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSignal {
    pub ndc: Vec2,
    pub viewport: Vec2,
}

/// Oscillator state for the fixture pivot. Owned exclusively by the frame
/// context and mutated exactly once per rendered frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwayState {
    pub rotation_x: f32,
    pub rotation_z: f32,
    pub velocity_x: f32,
    pub velocity_z: f32,
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Rotation targets the drag branch steers toward for a given pointer sample.
#[inline]
pub fn drag_target(pointer: PointerSignal) -> (f32, f32) {
    let target_x = pointer.ndc.y * (pointer.viewport.y / 2.0) * SWAY_INTENSITY * DRAG_TARGET_SCALE;
    let target_z = pointer.ndc.x * (pointer.viewport.x / 2.0) * SWAY_INTENSITY * DRAG_TARGET_SCALE;
    (target_x, target_z)
}

impl SwayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance both oscillators by one rendered frame.
    pub fn step(&mut self, dragging: bool, pointer: PointerSignal) {
        if dragging {
            self.step_dragging(pointer);
        } else {
            self.step_idle();
        }
    }

    // Track the pointer directly; residual velocity from a prior idle phase
    // is bled off multiplicatively so the handover is continuous.
    fn step_dragging(&mut self, pointer: PointerSignal) {
        let (target_x, target_z) = drag_target(pointer);
        self.rotation_x = lerp(self.rotation_x, target_x, DRAG_LERP_FACTOR);
        self.rotation_z = lerp(self.rotation_z, target_z, DRAG_LERP_FACTOR);
        self.velocity_x *= DRAG_VELOCITY_BLEED;
        self.velocity_z *= DRAG_VELOCITY_BLEED;
    }

    // Semi-implicit Euler: velocity from spring force first, then position
    // from the updated velocity. Rest position is zero on both axes.
    fn step_idle(&mut self) {
        let force_x = (0.0 - self.rotation_x) * SPRING_STIFFNESS;
        let force_z = (0.0 - self.rotation_z) * SPRING_STIFFNESS;
        self.velocity_x = (self.velocity_x + force_x) * DAMPING_FACTOR;
        self.velocity_z = (self.velocity_z + force_z) * DAMPING_FACTOR;
        self.rotation_x += self.velocity_x;
        self.rotation_z += self.velocity_z;
    }
}

/// Vertical bob applied to the bulb's local position, independent of the
/// drag state. `elapsed_sec` is a monotonic clock sampled once per frame.
#[inline]
pub fn bobble_offset(elapsed_sec: f32) -> f32 {
    (elapsed_sec * BOBBLE_ANGULAR_RATE).sin() * BOBBLE_AMPLITUDE
}

/// Point light brightness. Switched instantaneously with the drag state,
/// never interpolated.
#[inline]
pub fn light_intensity(dragging: bool) -> f32 {
    if dragging {
        LIGHT_INTENSITY_DRAGGING
    } else {
        LIGHT_INTENSITY_IDLE
    }
}
