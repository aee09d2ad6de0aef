// Host-side tests for the sway integrator and bobble oscillator.

use glam::Vec2;
use lamp_core::{
    bobble_offset, drag_target, light_intensity, PointerSignal, SwayState, BOBBLE_AMPLITUDE,
    BOBBLE_ANGULAR_RATE, DAMPING_FACTOR, DRAG_VELOCITY_BLEED, SPRING_STIFFNESS,
};

fn pointer(x: f32, y: f32) -> PointerSignal {
    PointerSignal {
        ndc: Vec2::new(x, y),
        viewport: Vec2::new(8.0, 6.0),
    }
}

#[test]
fn idle_tick_is_a_fixed_point_at_rest() {
    let mut s = SwayState::new();
    s.step(false, PointerSignal::default());
    assert_eq!(s.rotation_x, 0.0);
    assert_eq!(s.rotation_z, 0.0);
    assert_eq!(s.velocity_x, 0.0);
    assert_eq!(s.velocity_z, 0.0);
}

#[test]
fn idle_ticks_converge_from_a_displaced_start() {
    let mut s = SwayState {
        rotation_x: 0.3,
        rotation_z: -0.1,
        velocity_x: 0.0,
        velocity_z: 0.0,
    };
    for _ in 0..300 {
        s.step(false, PointerSignal::default());
    }
    assert!(s.rotation_x.abs() < 1e-4, "rotation_x = {}", s.rotation_x);
    assert!(s.rotation_z.abs() < 1e-4, "rotation_z = {}", s.rotation_z);
}

#[test]
fn drag_tracking_reaches_the_target_within_thirty_ticks() {
    let p = pointer(0.5, -0.4);
    let (target_x, target_z) = drag_target(p);
    let mut s = SwayState::new();
    for _ in 0..30 {
        s.step(true, p);
    }
    assert!(
        (s.rotation_x - target_x).abs() < 1e-3,
        "rotation_x = {} target = {}",
        s.rotation_x,
        target_x
    );
    assert!(
        (s.rotation_z - target_z).abs() < 1e-3,
        "rotation_z = {} target = {}",
        s.rotation_z,
        target_z
    );
}

#[test]
fn dragging_bleeds_residual_velocity_multiplicatively() {
    let mut s = SwayState {
        rotation_x: 0.0,
        rotation_z: 0.0,
        velocity_x: 0.1,
        velocity_z: -0.2,
    };
    s.step(true, pointer(0.0, 0.0));
    assert!((s.velocity_x - 0.1 * DRAG_VELOCITY_BLEED).abs() < 1e-7);
    assert!((s.velocity_z - -0.2 * DRAG_VELOCITY_BLEED).abs() < 1e-7);
}

#[test]
fn velocity_is_continuous_across_release() {
    let p = pointer(0.8, 0.6);
    let mut s = SwayState {
        rotation_x: 0.2,
        rotation_z: -0.15,
        velocity_x: 0.03,
        velocity_z: -0.02,
    };
    for _ in 0..5 {
        s.step(true, p);
    }
    // The drag branch has already applied the bleed; the first idle tick
    // starts from that velocity, with no reset in between.
    let before = s;
    s.step(false, p);
    let expected_vx = (before.velocity_x + (0.0 - before.rotation_x) * SPRING_STIFFNESS)
        * DAMPING_FACTOR;
    let expected_vz = (before.velocity_z + (0.0 - before.rotation_z) * SPRING_STIFFNESS)
        * DAMPING_FACTOR;
    assert!((s.velocity_x - expected_vx).abs() < 1e-7);
    assert!((s.velocity_z - expected_vz).abs() < 1e-7);
}

#[test]
fn rotations_stay_finite_under_alternating_input() {
    let mut s = SwayState::new();
    let wild = PointerSignal {
        ndc: Vec2::new(1.0, -1.0),
        viewport: Vec2::new(100.0, 100.0),
    };
    for i in 0..1000 {
        s.step(i % 7 < 3, wild);
        assert!(s.rotation_x.is_finite() && s.rotation_z.is_finite());
        assert!(s.velocity_x.is_finite() && s.velocity_z.is_finite());
    }
}

#[test]
fn bobble_starts_at_zero() {
    assert_eq!(bobble_offset(0.0), 0.0);
}

#[test]
fn bobble_has_expected_period_and_peak() {
    let period = 2.0 * std::f32::consts::PI / BOBBLE_ANGULAR_RATE;
    for i in 0..8 {
        let t = i as f32 * 0.37;
        assert!(
            (bobble_offset(t + period) - bobble_offset(t)).abs() < 1e-5,
            "not periodic at t = {t}"
        );
    }
    // Peak at a quarter period
    let quarter = std::f32::consts::FRAC_PI_2 / BOBBLE_ANGULAR_RATE;
    assert!((bobble_offset(quarter) - BOBBLE_AMPLITUDE).abs() < 1e-6);
}

#[test]
fn light_intensity_switches_between_exact_levels() {
    assert_eq!(light_intensity(false), 18.0);
    assert_eq!(light_intensity(true), 22.0);
}
