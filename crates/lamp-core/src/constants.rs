use glam::Vec3;

/// Sway and drag tuning constants for the hanging lamp fixture.
///
/// These constants express intended behavior (target mapping, spring/damping
/// response, brightness levels) and keep magic numbers out of the code.
// Drag target mapping
pub const SWAY_INTENSITY: f32 = 0.4;
pub const DRAG_TARGET_SCALE: f32 = 0.1; // extra factor compounded with SWAY_INTENSITY
pub const DRAG_LERP_FACTOR: f32 = 0.2; // rotation -> target blend per tick while dragging
pub const DRAG_VELOCITY_BLEED: f32 = 0.8; // residual velocity multiplier per dragging tick

// Spring return to rest (per rendered frame, not per second)
pub const SPRING_STIFFNESS: f32 = 0.01;
pub const DAMPING_FACTOR: f32 = 0.82;

// Idle bobbing of the bulb
pub const BOBBLE_AMPLITUDE: f32 = 0.015; // world units
pub const BOBBLE_ANGULAR_RATE: f32 = 1.5; // radians per second

// Point light brightness, switched with the drag state
pub const LIGHT_INTENSITY_IDLE: f32 = 18.0;
pub const LIGHT_INTENSITY_DRAGGING: f32 = 22.0;

// Fixture geometry (world units, relative to the pivot)
pub const PIVOT_POSITION: Vec3 = Vec3::new(0.0, 3.0, 0.5);
pub const CABLE_HEIGHT: f32 = 1.3;
pub const CABLE_RADIUS: f32 = 0.025;
pub const BULB_RADIUS: f32 = 0.25;

// Interaction
pub const PICK_BULB_PADDING: f32 = 0.1; // extra pick radius for easier grabbing
pub const PICK_CABLE_RADIUS: f32 = 0.1; // accept distance around the cable segment

// Scene layout
pub const FLOOR_Y: f32 = -0.05;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 2.5, 8.0);
pub const CAMERA_FOVY: f32 = 50.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.5;
pub const CAMERA_ZFAR: f32 = 100.0;
