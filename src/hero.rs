use crate::audio::HeroTrack;
use crate::core::config::{hero_markup, HERO_CANVAS_CLASS, HERO_TOGGLE_CLASS};
use crate::core::{AppConfig, HeroParams, PlaybackCommand, TrackToggle};
use crate::dom::Listener;
use crate::vaporwave::{self, Vaporwave};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type HeroToggle = TrackToggle<HeroTrack, Box<dyn FnMut() -> HeroTrack>>;

/// Hero panel: headline, a play/pause dot for the background track and the
/// vaporwave landscape behind everything.
pub struct Hero {
    section: web::Element,
    toggle: Rc<RefCell<HeroToggle>>,
    background: Vaporwave,
    click: Option<Listener>,
}

impl Hero {
    pub fn is_playing(&self) -> bool {
        self.toggle.borrow().state().is_playing()
    }

    /// Tear down in reverse order of construction. Idempotent.
    pub fn unmount(&mut self) {
        if self.click.take().is_none() {
            return;
        }
        self.toggle.borrow_mut().release();
        self.background.unmount();
        self.section.remove();
        log::info!("[hero] unmounted");
    }
}

impl Drop for Hero {
    fn drop(&mut self) {
        self.unmount();
    }
}

pub fn mount(container: &web::Element, cfg: &AppConfig) -> anyhow::Result<Hero> {
    let params = HeroParams::from_config(cfg);
    let document = container
        .owner_document()
        .ok_or_else(|| anyhow::anyhow!("hero container is detached"))?;
    let section = document
        .create_element("section")
        .map_err(|e| anyhow::anyhow!("hero section: {:?}", e))?;
    section.set_class_name("hero");
    _ = section.set_attribute(
        "style",
        "position:relative;width:100%;height:100vh;margin:0 auto",
    );
    section.set_inner_html(&hero_markup(&params));
    container
        .append_child(&section)
        .map_err(|e| anyhow::anyhow!("hero append: {:?}", e))?;

    let find = |class: &str| {
        section
            .query_selector(&format!(".{}", class))
            .ok()
            .flatten()
            .ok_or_else(|| anyhow::anyhow!("hero markup is missing .{}", class))
    };
    let dot = find(HERO_TOGGLE_CLASS)?;
    let canvas: web::HtmlCanvasElement = find(HERO_CANVAS_CLASS)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("hero canvas: {:?}", e))?;

    let src = params.audio_src.clone();
    let make: Box<dyn FnMut() -> HeroTrack> = Box::new(move || HeroTrack::open(&src));
    let toggle = Rc::new(RefCell::new(TrackToggle::new(make)));

    let toggle_click = toggle.clone();
    let click = Listener::new(&dot, "click", move |_| {
        match toggle_click.borrow_mut().toggle() {
            PlaybackCommand::Pause => log::info!("[hero] audio paused"),
            PlaybackCommand::Resume { offset_sec } => {
                log::info!("[hero] audio playing from {:.2}s", offset_sec)
            }
        }
    });

    let background = match vaporwave::mount(canvas, cfg) {
        Ok(b) => b,
        Err(e) => {
            section.remove();
            return Err(e);
        }
    };
    log::info!("[hero] mounted");
    Ok(Hero {
        section,
        toggle,
        background,
        click: Some(click),
    })
}
