use crate::core::scene::{vaporwave_camera, vaporwave_scene, VAPOR_FAR_PLANE, VAPOR_NEAR_PLANE};
use crate::core::{
    plane_pair, AppConfig, Clock, OrbitControls, PerspectiveCamera, PostChain, VaporwaveParams,
    Viewport,
};
use crate::dom;
use crate::events;
use crate::frame::FrameTick;
use crate::mount::{Mounted, Scene};
use crate::render::{texture, GpuState, RendererOptions};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct VaporwaveScene {
    gpu: GpuState,
    camera: PerspectiveCamera,
    controls: Rc<RefCell<OrbitControls>>,
    clock: Clock,
    canvas: web::HtmlCanvasElement,
}

impl FrameTick for VaporwaveScene {
    fn frame(&mut self) {
        let planes = plane_pair(self.clock.elapsed_sec());
        self.gpu
            .set_mesh_position(VAPOR_NEAR_PLANE, Vec3::new(0.0, 0.0, planes.near_z));
        self.gpu
            .set_mesh_position(VAPOR_FAR_PLANE, Vec3::new(0.0, 0.0, planes.far_z));

        self.controls.borrow_mut().update(&mut self.camera);

        if let Err(e) = self.gpu.render(&self.camera) {
            log::error!("render error: {:?}", e);
        }
    }
}

impl Scene for VaporwaveScene {
    fn resize(&mut self, vp: Viewport) {
        self.camera.fit_viewport(&vp);
        // also recreates the post-processing targets
        let (w, h) = dom::apply_canvas_size(&self.canvas, vp);
        self.gpu.resize(w, h);
    }
}

pub struct Vaporwave {
    mounted: Mounted,
}

impl Vaporwave {
    pub fn unmount(&mut self) {
        if self.mounted.is_mounted() {
            self.mounted.unmount();
            log::info!("[vaporwave] unmounted");
        }
    }
}

pub fn mount(canvas: web::HtmlCanvasElement, cfg: &AppConfig) -> anyhow::Result<Vaporwave> {
    let params = VaporwaveParams::from_config(cfg);
    let chain = PostChain::vaporwave(params.rgb_shift_amount, params.bloom_strength)?;
    let controls = Rc::new(RefCell::new(OrbitControls::new(Vec3::ZERO)));
    let mut mounted = Mounted::new();
    mounted.keep(events::wire_orbit_drag(&canvas, controls.clone()));

    let vp = dom::window_viewport().unwrap_or(Viewport::new(
        canvas.client_width() as f64,
        canvas.client_height() as f64,
        1.0,
    ));
    dom::apply_canvas_size(&canvas, vp);

    let scene = vaporwave_scene(&params);
    let camera = vaporwave_camera(vp.aspect());
    let launcher = mounted.launcher();
    spawn_local(async move {
        let images = texture::load_all(&scene.textures).await;
        if !launcher.is_alive() {
            return;
        }
        let opts = RendererOptions {
            transparent: true,
            post: Some(chain),
            ..Default::default()
        };
        let gpu = match GpuState::new(canvas.clone(), &scene, images, opts).await {
            Ok(g) => g,
            Err(e) => {
                log::error!("[vaporwave] WebGPU init error: {:?}", e);
                return;
            }
        };
        log::info!("[vaporwave] ready");
        launcher.launch(VaporwaveScene {
            gpu,
            camera,
            controls,
            clock: Clock::new(),
            canvas,
        });
    });

    Ok(Vaporwave { mounted })
}
