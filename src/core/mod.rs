pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod lifetime;
pub mod loading;
pub mod orbit;
pub mod pan;
pub mod plane_loop;
pub mod playback;
pub mod post;
pub mod scene;
pub mod viewport;

pub use camera::PerspectiveCamera;
pub use clock::Clock;
pub use config::{AppConfig, DebugRange, GalleryParams, HeroParams, VaporwaveParams};
pub use lifetime::LifetimeToken;
pub use orbit::OrbitControls;
pub use pan::ScrollPan;
pub use plane_loop::{plane_pair, PlanePair};
pub use playback::{PlaybackCommand, TrackHandle, TrackToggle};
pub use post::{PostChain, PostStage};
pub use scene::{Light, Material, MeshId, SceneDesc};
pub use viewport::{Viewport, ViewportHub};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
