use super::helpers;
use wgpu;

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TargetId {
    Scene,
    Ping,
    Pong,
    BloomA,
    BloomB,
}

impl TargetId {
    pub(crate) const ALL: [TargetId; 5] = [
        TargetId::Scene,
        TargetId::Ping,
        TargetId::Pong,
        TargetId::BloomA,
        TargetId::BloomB,
    ];
}

/// Offscreen color targets for the post chain.
///
/// - `scene` receives the mesh pass (full resolution, HDR).
/// - `ping`/`pong` alternate as source and destination of full-screen passes.
/// - `bloom_*` are half-resolution buffers for bright-pass and blur.
pub(crate) struct RenderTargets {
    scene: (wgpu::Texture, wgpu::TextureView),
    ping: (wgpu::Texture, wgpu::TextureView),
    pong: (wgpu::Texture, wgpu::TextureView),
    bloom_a: (wgpu::Texture, wgpu::TextureView),
    bloom_b: (wgpu::Texture, wgpu::TextureView),
    full_size: (u32, u32),
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (bw, bh) = bloom_size(width, height);
        Self {
            scene: helpers::create_color_texture(device, "scene_tex", width, height, HDR_FORMAT, usage),
            ping: helpers::create_color_texture(device, "ping_tex", width, height, HDR_FORMAT, usage),
            pong: helpers::create_color_texture(device, "pong_tex", width, height, HDR_FORMAT, usage),
            bloom_a: helpers::create_color_texture(device, "bloom_a", bw, bh, HDR_FORMAT, usage),
            bloom_b: helpers::create_color_texture(device, "bloom_b", bw, bh, HDR_FORMAT, usage),
            full_size: (width.max(1), height.max(1)),
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }

    pub(crate) fn view(&self, id: TargetId) -> &wgpu::TextureView {
        match id {
            TargetId::Scene => &self.scene.1,
            TargetId::Ping => &self.ping.1,
            TargetId::Pong => &self.pong.1,
            TargetId::BloomA => &self.bloom_a.1,
            TargetId::BloomB => &self.bloom_b.1,
        }
    }

    pub(crate) fn full_size(&self) -> (u32, u32) {
        self.full_size
    }

    pub(crate) fn bloom_size(&self) -> (u32, u32) {
        bloom_size(self.full_size.0, self.full_size.1)
    }
}

fn bloom_size(width: u32, height: u32) -> (u32, u32) {
    ((width.max(1) / 2).max(1), (height.max(1) / 2).max(1))
}
