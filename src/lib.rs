#![cfg(target_arch = "wasm32")]
use crate::core::AppConfig;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod gallery;
mod hero;
mod input;
mod mount;
mod overlay;
mod render;
mod resize;
mod vaporwave;

thread_local! {
    static CONFIG: RefCell<AppConfig> = RefCell::new(AppConfig::default());
    // Scenes mounted by `start` live as long as the page
    static PAGE_MOUNTS: RefCell<Vec<PageMount>> = const { RefCell::new(Vec::new()) };
}

enum PageMount {
    Gallery(gallery::Gallery),
    Hero(hero::Hero),
}

fn config() -> AppConfig {
    CONFIG.with(|c| c.borrow().clone())
}

fn js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

fn read_config() -> AppConfig {
    let search = web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    AppConfig::from_query(&search)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let cfg = read_config();
    console_log::init_with_level(cfg.log_level).ok();
    log::info!(
        "portfolio-scenes starting (debug_panel={}, assets='{}')",
        cfg.debug_panel,
        cfg.asset_base
    );
    CONFIG.with(|c| *c.borrow_mut() = cfg.clone());

    if let Err(e) = auto_mount(&cfg) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn auto_mount(cfg: &AppConfig) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document
        .query_selector(constants::GALLERY_CANVAS_SELECTOR)
        .ok()
        .flatten()
        .is_some()
    {
        let canvas = dom::query_canvas(&document, constants::GALLERY_CANVAS_SELECTOR)?;
        let g = gallery::mount(canvas, cfg);
        PAGE_MOUNTS.with(|m| m.borrow_mut().push(PageMount::Gallery(g)));
    }
    if let Some(root) = document.get_element_by_id(constants::HERO_ROOT_ID) {
        let h = hero::mount(&root, cfg)?;
        PAGE_MOUNTS.with(|m| m.borrow_mut().push(PageMount::Hero(h)));
    }
    Ok(())
}

/// Handle returned to JS for a scene mounted on demand.
#[wasm_bindgen]
pub struct SceneHandle {
    inner: Option<Mounted>,
}

enum Mounted {
    Gallery(gallery::Gallery),
    Vaporwave(vaporwave::Vaporwave),
    Hero(hero::Hero),
}

#[wasm_bindgen]
impl SceneHandle {
    /// Stop the render loop and release listeners, audio and markup.
    pub fn unmount(&mut self) {
        match self.inner.take() {
            Some(Mounted::Gallery(mut g)) => g.unmount(),
            Some(Mounted::Vaporwave(mut v)) => v.unmount(),
            Some(Mounted::Hero(mut h)) => h.unmount(),
            None => {}
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.is_some()
    }

    /// Whether the hero track is playing; `false` for other scenes.
    #[wasm_bindgen(getter)]
    pub fn playing(&self) -> bool {
        matches!(&self.inner, Some(Mounted::Hero(h)) if h.is_playing())
    }
}

#[wasm_bindgen]
pub fn mount_gallery(selector: &str) -> Result<SceneHandle, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = dom::query_canvas(&document, selector).map_err(js_err)?;
    Ok(SceneHandle {
        inner: Some(Mounted::Gallery(gallery::mount(canvas, &config()))),
    })
}

#[wasm_bindgen]
pub fn mount_vaporwave(selector: &str) -> Result<SceneHandle, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = dom::query_canvas(&document, selector).map_err(js_err)?;
    let vaporwave = vaporwave::mount(canvas, &config()).map_err(js_err)?;
    Ok(SceneHandle {
        inner: Some(Mounted::Vaporwave(vaporwave)),
    })
}

#[wasm_bindgen]
pub fn mount_hero(container_id: &str) -> Result<SceneHandle, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", container_id)))?;
    let hero = hero::mount(&root, &config()).map_err(js_err)?;
    Ok(SceneHandle {
        inner: Some(Mounted::Hero(hero)),
    })
}
