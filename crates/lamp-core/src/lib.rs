pub mod constants;
pub mod drag;
pub mod pick;
pub mod state;
pub mod sway;

pub use constants::*;
pub use drag::*;
pub use pick::*;
pub use state::*;
pub use sway::*;

// Scene shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
