use crate::core::scene::{gallery_camera, gallery_scene};
use crate::core::{AppConfig, GalleryParams, PerspectiveCamera, ScrollPan, Viewport};
use crate::dom;
use crate::events;
use crate::frame::FrameTick;
use crate::mount::{Mounted, Scene};
use crate::overlay::DebugPanel;
use crate::render::{texture, GpuState, RendererOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct GalleryScene {
    gpu: GpuState,
    camera: PerspectiveCamera,
    pan: Rc<RefCell<ScrollPan>>,
    canvas: web::HtmlCanvasElement,
}

impl FrameTick for GalleryScene {
    fn frame(&mut self) {
        self.camera.position.x = self.pan.borrow_mut().step();
        if let Err(e) = self.gpu.render(&self.camera) {
            log::error!("render error: {:?}", e);
        }
    }
}

impl Scene for GalleryScene {
    fn resize(&mut self, vp: Viewport) {
        self.camera.fit_viewport(&vp);
        let (w, h) = dom::apply_canvas_size(&self.canvas, vp);
        self.gpu.resize(w, h);
    }
}

/// A mounted gallery: the pan state, its input listeners and (once the GPU is
/// ready) the render loop.
pub struct Gallery {
    mounted: Mounted,
    panel: Option<DebugPanel>,
}

impl Gallery {
    pub fn unmount(&mut self) {
        self.mounted.unmount();
        self.panel.take();
        log::info!("[gallery] unmounted");
    }
}

pub fn mount(canvas: web::HtmlCanvasElement, cfg: &AppConfig) -> Gallery {
    let params = GalleryParams::from_config(cfg);
    let pan = Rc::new(RefCell::new(ScrollPan::new()));
    let mut mounted = Mounted::new();
    mounted.keep(events::wire_wheel_pan(pan.clone()));

    let panel = match (params.debug, dom::window_document()) {
        (Some(range), Some(doc)) => match DebugPanel::mount(&doc, range, pan.clone()) {
            Ok(p) => Some(p),
            Err(e) => {
                log::warn!("{:?}", e);
                None
            }
        },
        _ => None,
    };

    let vp = dom::window_viewport().unwrap_or(Viewport::new(
        canvas.client_width() as f64,
        canvas.client_height() as f64,
        1.0,
    ));
    dom::apply_canvas_size(&canvas, vp);

    let scene = gallery_scene(&params, &mut rand::thread_rng());
    let camera = gallery_camera(&params, vp.aspect());
    let launcher = mounted.launcher();
    spawn_local(async move {
        let images = texture::load_all(&scene.textures).await;
        if !launcher.is_alive() {
            return;
        }
        let gpu = match GpuState::new(canvas.clone(), &scene, images, RendererOptions::default()).await
        {
            Ok(g) => g,
            Err(e) => {
                log::error!("[gallery] WebGPU init error: {:?}", e);
                return;
            }
        };
        log::info!("[gallery] ready: {} images", scene.meshes.len());
        launcher.launch(GalleryScene {
            gpu,
            camera,
            pan,
            canvas,
        });
    });

    Gallery {
        mounted,
        panel,
    }
}
