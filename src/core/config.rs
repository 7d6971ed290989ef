// Runtime configuration: page query flags plus per-scene parameters.

use super::constants::*;

/// Page-level settings read from `location.search`.
///
/// Recognised keys: `debug` (flag), `log=<level>`, `assets=<base path>`.
/// Unknown keys are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub debug_panel: bool,
    pub log_level: log::Level,
    pub asset_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug_panel: false,
            log_level: log::Level::Info,
            asset_base: String::new(),
        }
    }
}

impl AppConfig {
    pub fn from_query(search: &str) -> Self {
        let mut cfg = Self::default();
        let search = search.strip_prefix('?').unwrap_or(search);
        for pair in search.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (k, Some(v)),
                None => (pair, None),
            };
            match key {
                "debug" => {
                    cfg.debug_panel = !matches!(value, Some("0") | Some("false"));
                }
                "log" => {
                    if let Some(level) = value.and_then(|v| v.parse::<log::Level>().ok()) {
                        cfg.log_level = level;
                    }
                }
                "assets" => {
                    if let Some(v) = value {
                        cfg.asset_base = v.trim_end_matches('/').to_string();
                    }
                }
                _ => {}
            }
        }
        cfg
    }

    /// Resolve an asset path against the configured base.
    pub fn asset_url(&self, path: &str) -> String {
        asset_url(&self.asset_base, path)
    }
}

pub fn asset_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    let path = path.strip_prefix("./").unwrap_or(path);
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Allowed range of the debug panel's camera-x slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugRange {
    pub min: f32,
    pub max: f32,
}

impl Default for DebugRange {
    fn default() -> Self {
        Self {
            min: DEBUG_CAMERA_X_MIN,
            max: DEBUG_CAMERA_X_MAX,
        }
    }
}

impl DebugRange {
    #[inline]
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryParams {
    pub image_paths: Vec<String>,
    pub spacing: f32,
    pub depth: f32,
    pub plane_size: [f32; 2],
    pub camera_z: f32,
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub debug: Option<DebugRange>,
}

impl GalleryParams {
    pub fn from_config(cfg: &AppConfig) -> Self {
        let image_paths = (1..=GALLERY_IMAGE_COUNT)
            .map(|i| cfg.asset_url(&format!("media/pictures/{}.png", i)))
            .collect();
        Self {
            image_paths,
            spacing: GALLERY_IMAGE_SPACING,
            depth: GALLERY_IMAGE_DEPTH,
            plane_size: GALLERY_PLANE_SIZE,
            camera_z: GALLERY_CAMERA_Z,
            fov_deg: GALLERY_CAMERA_FOV_DEG,
            near: GALLERY_CAMERA_NEAR,
            far: GALLERY_CAMERA_FAR,
            debug: cfg.debug_panel.then(DebugRange::default),
        }
    }
}

impl Default for GalleryParams {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VaporwaveParams {
    pub grid_texture: String,
    pub displacement_texture: String,
    pub metalness_texture: String,
    pub displacement_scale: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub rgb_shift_amount: f32,
    pub bloom_strength: f32,
}

impl VaporwaveParams {
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            grid_texture: cfg.asset_url("./grid.png"),
            displacement_texture: cfg.asset_url("./displacement.png"),
            metalness_texture: cfg.asset_url("./metalness.png"),
            displacement_scale: DISPLACEMENT_SCALE,
            metalness: METALNESS,
            roughness: ROUGHNESS,
            rgb_shift_amount: RGB_SHIFT_AMOUNT,
            bloom_strength: BLOOM_STRENGTH,
        }
    }
}

impl Default for VaporwaveParams {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroParams {
    pub name: String,
    pub tagline: [String; 2],
    pub audio_src: String,
    pub accent: String,
}

impl HeroParams {
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            name: "Jonathan".to_string(),
            tagline: [
                "I am a full stack developer with".to_string(),
                "experience in various frameworks and languages.".to_string(),
            ],
            audio_src: cfg.asset_url(HERO_AUDIO_SRC),
            accent: HERO_ACCENT.to_string(),
        }
    }
}

impl Default for HeroParams {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

pub const HERO_TOGGLE_CLASS: &str = "hero-toggle";
pub const HERO_CANVAS_CLASS: &str = "canvas";

/// Inner markup of the hero section. The caller inserts it and then looks up
/// the toggle and canvas by class.
pub fn hero_markup(p: &HeroParams) -> String {
    format!(
        "<div class='hero-inner' style='position:absolute;inset:0;top:120px;max-width:80rem;margin:0 auto;display:flex;flex-direction:row;align-items:flex-start;gap:1.25rem;padding:0 1.5rem'>\
<div style='display:flex;flex-direction:column;justify-content:center;align-items:center;margin-top:1.25rem'>\
<div class='{toggle}' style='width:1.25rem;height:1.25rem;border-radius:9999px;background:{accent};z-index:10;cursor:pointer'></div>\
<div class='violet-gradient' style='width:0.25rem;height:20rem'></div>\
</div>\
<div>\
<h1 class='hero-head' style='color:#fff'>Hi, I'm <span style='color:{accent}'>{name}</span></h1>\
<p class='hero-sub' style='margin-top:0.5rem'>{line0} <br> {line1}</p>\
</div>\
</div>\
<div class='canvas-container' style='position:absolute;inset:0;z-index:-1;overflow:hidden;width:100%;height:100%'>\
<canvas class='{canvas}'></canvas>\
</div>",
        toggle = HERO_TOGGLE_CLASS,
        canvas = HERO_CANVAS_CLASS,
        accent = escape_html(&p.accent),
        name = escape_html(&p.name),
        line0 = escape_html(&p.tagline[0]),
        line1 = escape_html(&p.tagline[1]),
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
