use crate::core::scene::SceneDesc;
use crate::core::{MeshId, PerspectiveCamera, PostChain};
use glam::Vec3;
use web_sys as web;

mod helpers;
mod mesh;
mod post;
mod targets;
pub(crate) mod texture;

pub(crate) use mesh::Pixels;
use post::PostResources;
use targets::RenderTargets;

/// How a scene wants its surface set up.
pub struct RendererOptions {
    /// Composite the canvas over the page (premultiplied alpha, transparent clear).
    pub transparent: bool,
    pub clear_color: wgpu::Color,
    /// Full-screen passes after the mesh pass; `None` draws straight to the canvas.
    pub post: Option<PostChain>,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            transparent: false,
            clear_color: wgpu::Color::BLACK,
            post: None,
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: (wgpu::Texture, wgpu::TextureView),
    meshes: mesh::MeshResources,
    post: Option<(RenderTargets, PostResources)>,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        scene: &SceneDesc,
        images: Vec<Option<Pixels>>,
        opts: RendererOptions,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits; older WebGPU implementations reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = if opts.transparent {
            caps.alpha_modes
                .iter()
                .copied()
                .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        } else {
            wgpu::CompositeAlphaMode::Opaque
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth = helpers::create_depth_texture(&device, width, height);
        let post = opts
            .post
            .as_ref()
            .filter(|chain| !chain.passes().is_empty())
            .map(|chain| {
                let targets = RenderTargets::new(&device, width, height);
                let res = post::create_post_resources(&device, chain, &targets, format);
                res.write_uniforms(&queue, &targets);
                (targets, res)
            });
        let mesh_format = if post.is_some() {
            targets::HDR_FORMAT
        } else {
            format
        };
        let meshes = mesh::MeshResources::new(&device, &queue, scene, images, mesh_format);
        log::info!(
            "[gpu] surface {}x{} {:?} alpha={:?} post={:?}",
            width,
            height,
            format,
            alpha_mode,
            opts.post.as_ref().map(|c| c.stages())
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            meshes,
            post,
            clear_color: if opts.transparent {
                wgpu::Color::TRANSPARENT
            } else {
                opts.clear_color
            },
            width,
            height,
        })
    }

    pub fn set_mesh_position(&mut self, mesh: MeshId, position: Vec3) {
        self.meshes.set_position(mesh, position);
    }

    /// Resize the surface, depth buffer and post targets to a new backing size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth = helpers::create_depth_texture(&self.device, width, height);
        if let Some((targets, res)) = &mut self.post {
            targets.recreate(&self.device, width, height);
            res.rebind(&self.device, &self.queue, targets);
        }
    }

    pub fn render(&mut self, camera: &PerspectiveCamera) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        self.meshes.update(&self.queue, camera);
        match &self.post {
            Some((targets, res)) => {
                self.meshes.encode(
                    &mut encoder,
                    targets.view(targets::TargetId::Scene),
                    &self.depth.1,
                    self.clear_color,
                );
                res.encode(&mut encoder, targets, &view, self.clear_color);
            }
            None => {
                self.meshes
                    .encode(&mut encoder, &view, &self.depth.1, self.clear_color);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
