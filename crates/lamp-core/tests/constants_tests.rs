// Host-side tests for constants and their mathematical relationships.

use lamp_core::{
    BOBBLE_AMPLITUDE, BOBBLE_ANGULAR_RATE, BULB_RADIUS, CABLE_HEIGHT, CABLE_RADIUS,
    CAMERA_FOVY, CAMERA_ZFAR, CAMERA_ZNEAR, DAMPING_FACTOR, DRAG_LERP_FACTOR, DRAG_TARGET_SCALE,
    DRAG_VELOCITY_BLEED, LIGHT_INTENSITY_DRAGGING, LIGHT_INTENSITY_IDLE, PICK_BULB_PADDING,
    PICK_CABLE_RADIUS, SPRING_STIFFNESS, SWAY_INTENSITY,
};

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_within_reasonable_bounds() {
    // Blend factors stay inside the unit interval
    assert!(DRAG_LERP_FACTOR > 0.0 && DRAG_LERP_FACTOR <= 1.0);
    assert!(DRAG_VELOCITY_BLEED > 0.0 && DRAG_VELOCITY_BLEED < 1.0);
    assert!(DAMPING_FACTOR > 0.0 && DAMPING_FACTOR < 1.0);

    // Spring and target mapping are positive and gentle
    assert!(SPRING_STIFFNESS > 0.0);
    assert!(SWAY_INTENSITY > 0.0);
    assert!(DRAG_TARGET_SCALE > 0.0 && DRAG_TARGET_SCALE < 1.0);

    // Bobble
    assert!(BOBBLE_AMPLITUDE > 0.0);
    assert!(BOBBLE_ANGULAR_RATE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Dragging brightens the bulb
    assert!(LIGHT_INTENSITY_DRAGGING > LIGHT_INTENSITY_IDLE);

    // The bob stays well inside the bulb silhouette
    assert!(BOBBLE_AMPLITUDE < BULB_RADIUS);

    // Padding widens the pick target without dwarfing the bulb itself
    assert!(PICK_BULB_PADDING > 0.0 && PICK_BULB_PADDING < BULB_RADIUS);

    // The cable must be easier to hit than its visual radius
    assert!(PICK_CABLE_RADIUS > CABLE_RADIUS);
    assert!(PICK_CABLE_RADIUS < CABLE_HEIGHT);

    // Camera frustum is sane and sees the whole scene
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_FOVY > 0.0 && CAMERA_FOVY < std::f32::consts::PI);
}
