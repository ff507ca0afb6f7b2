/// Canvas the hero scene renders into.
pub const HERO_CANVAS_SELECTOR: &str = "#heroCanvas";

/// Brand accent, `#EB3223`.
pub const ACCENT_RGB: [u8; 3] = [0xEB, 0x32, 0x23];
/// Inner sphere glow, `#C72818`.
pub const EMISSIVE_RGB: [u8; 3] = [0xC7, 0x28, 0x18];

pub const CAMERA_DISTANCE: f32 = 5.0;
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

pub const AMBIENT_BRIGHTNESS: f32 = 0.6;
pub const KEY_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const KEY_LIGHT_INTENSITY: f32 = 1.5;
pub const FILL_LIGHT_POSITION: [f32; 3] = [-5.0, -5.0, 5.0];
pub const FILL_LIGHT_INTENSITY: f32 = 0.8;

pub const OUTER_RADIUS: f32 = 1.5;
pub const INNER_RADIUS: f32 = 0.8;
pub const INNER_SEGMENTS: u32 = 32;
pub const INNER_METALLIC: f32 = 0.8;
pub const INNER_ROUGHNESS: f32 = 0.2;
pub const INNER_EMISSIVE_STRENGTH: f32 = 0.3;

pub const PARTICLE_COUNT: usize = 50;
/// Edge length of the cube particles are scattered in.
pub const PARTICLE_SPREAD: f32 = 10.0;
pub const PARTICLE_SIZE: f32 = 0.05;
pub const PARTICLE_OPACITY: f32 = 0.6;

/// Radians per 60 Hz frame; converted to per-second rates by the engine.
pub const OUTER_SPIN_PER_FRAME: f32 = 0.005;
pub const INNER_SPIN_PER_FRAME: f32 = -0.003;
pub const PARTICLE_SPIN_PER_FRAME: f32 = 0.001;
pub const REFERENCE_FRAME_RATE: f32 = 60.0;
