/// Page hooks looked up by the auto-mount in `start`.
///
/// Pages without these elements load the module without mounting anything
/// and call the exported `mount_*` functions themselves.
// Standalone gallery page canvas
pub const GALLERY_CANVAS_SELECTOR: &str = "canvas.webgl";

// Container that receives the hero section
pub const HERO_ROOT_ID: &str = "hero";
