// Scene tuning constants shared by the gallery, the vaporwave landscape and
// the hero panel. Values mirror the look of the live portfolio.

// Viewport
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Gallery: scroll-driven camera pan
pub const WHEEL_IMPULSE_SCALE: f32 = 0.0009; // velocity added per unit of wheel deltaY
pub const PAN_DECAY_PER_FRAME: f32 = 0.9; // geometric velocity decay applied every frame

// Gallery layout
pub const GALLERY_IMAGE_COUNT: usize = 7;
pub const GALLERY_IMAGE_SPACING: f32 = -1.2; // x step between consecutive images
pub const GALLERY_IMAGE_DEPTH: f32 = 1.0;
pub const GALLERY_PLANE_SIZE: [f32; 2] = [1.0, 1.3];
pub const GALLERY_CAMERA_Z: f32 = 3.0;
pub const GALLERY_CAMERA_FOV_DEG: f32 = 75.0;
pub const GALLERY_CAMERA_NEAR: f32 = 0.1;
pub const GALLERY_CAMERA_FAR: f32 = 100.0;
pub const GALLERY_POINT_LIGHT: (u32, f32, [f32; 3]) = (0xffffff, 0.1, [2.0, 3.0, 4.0]);

// Debug panel bounds for the gallery camera x slider
pub const DEBUG_CAMERA_X_MIN: f32 = -10.0;
pub const DEBUG_CAMERA_X_MAX: f32 = 5.0;

// Vaporwave: looping ground planes
pub const PLANE_SCROLL_RATE: f64 = 0.15; // world units per second
pub const PLANE_PERIOD: f64 = 2.0; // plane depth, also the loop length
pub const PLANE_SIZE: [f32; 2] = [1.0, 2.0];
pub const PLANE_SEGMENTS: u32 = 24;
pub const PLANE_INITIAL_Z: f32 = 0.15;

// Vaporwave material
pub const DISPLACEMENT_SCALE: f32 = 0.4;
pub const METALNESS: f32 = 1.0;
pub const ROUGHNESS: f32 = 0.23;

// Vaporwave fog
pub const FOG_COLOR: u32 = 0x000000;
pub const FOG_NEAR: f32 = 1.0;
pub const FOG_FAR: f32 = 2.5;

// Vaporwave lights
pub const AMBIENT_COLOR: u32 = 0xffdd00;
pub const AMBIENT_INTENSITY: f32 = 10.0;
pub const SPOT_COLORS: [u32; 2] = [0x00ff91, 0x00ff1e];
pub const SPOT_INTENSITY: f32 = 40.0;
pub const SPOT_DISTANCE: f32 = 25.0;
pub const SPOT_ANGLE: f32 = std::f32::consts::PI * 0.1;
pub const SPOT_PENUMBRA: f32 = 0.25;
pub const SPOT_DECAY: f32 = 2.0;
pub const SPOT_POSITIONS: [[f32; 3]; 2] = [[0.5, 0.75, 2.1], [-0.5, 0.75, 2.1]];
pub const SPOT_TARGETS: [[f32; 3]; 2] = [[-0.25, 0.25, 0.25], [0.25, 0.25, 0.25]];

// Vaporwave camera
pub const VAPOR_CAMERA_FOV_DEG: f32 = 75.0;
pub const VAPOR_CAMERA_NEAR: f32 = 0.01;
pub const VAPOR_CAMERA_FAR: f32 = 20.0;
pub const VAPOR_CAMERA_POSITION: [f32; 3] = [0.0, 0.12, 1.0];

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_MIN_POLAR: f32 = std::f32::consts::PI * 0.30;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI * 0.45;
pub const ORBIT_MIN_AZIMUTH: f32 = 0.0;
pub const ORBIT_MAX_AZIMUTH: f32 = 0.0;

// Post-processing
pub const RGB_SHIFT_AMOUNT: f32 = 0.00582;
pub const RGB_SHIFT_ANGLE: f32 = 0.0;
pub const BLOOM_STRENGTH: f32 = 2.4;
pub const BLOOM_RADIUS: f32 = 0.0;
pub const BLOOM_THRESHOLD: f32 = 0.0;

// Hero panel
pub const HERO_AUDIO_SRC: &str = "./water.mp3";
pub const HERO_ACCENT: &str = "#915eff";
