use super::helpers;
use super::targets::{RenderTargets, TargetId, HDR_FORMAT};
use crate::core::{PostChain, PostStage};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    blur_dir: [f32; 2],
    amount: f32,
    angle: f32,
    strength: f32,
    threshold: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Dest {
    Target(TargetId),
    Screen,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Scale {
    Full,
    Bloom,
}

struct Step {
    label: &'static str,
    src: TargetId,
    dst: Dest,
    with_bloom: bool,
    scale: Scale,
    params: PostUniforms,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_group: wgpu::BindGroup,
}

/// GPU side of a `PostChain`: one full-screen pass per step, reading from the
/// previous step's target and writing to the next one (or the swapchain).
pub(crate) struct PostResources {
    bgl_tex: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    src_groups: Vec<(TargetId, wgpu::BindGroup)>,
    bloom_group: wgpu::BindGroup,
    steps: Vec<Step>,
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    chain: &PostChain,
    targets: &RenderTargets,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("post_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
    });
    let frag = wgpu::ShaderStages::FRAGMENT;
    let bgl_tex = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl_tex"),
        entries: &[helpers::texture_entry(0, frag), helpers::sampler_entry(1, frag)],
    });
    let bgl_uniform = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl_uniform"),
        entries: &[helpers::uniform_entry(0, frag)],
    });
    let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post"),
        bind_group_layouts: &[&bgl_tex, &bgl_uniform],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl_tex, &bgl_uniform, &bgl_tex],
        push_constant_ranges: &[],
    });
    let sampler = helpers::linear_sampler(device, "post_sampler");

    let plan = plan_steps(chain);
    let steps = plan
        .into_iter()
        .map(|p| {
            let format = match p.dst {
                Dest::Screen => swap_format,
                Dest::Target(_) => HDR_FORMAT,
            };
            let layout = if p.with_bloom { &pl_composite } else { &pl_single };
            let pipeline =
                helpers::make_post_pipeline(device, layout, &shader, p.entry, format, None);
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(p.label),
                size: std::mem::size_of::<PostUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let uniform_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(p.label),
                layout: &bgl_uniform,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            Step {
                label: p.label,
                src: p.src,
                dst: p.dst,
                with_bloom: p.with_bloom,
                scale: p.scale,
                params: p.params,
                pipeline,
                uniform_buffer,
                uniform_group,
            }
        })
        .collect();

    let (src_groups, bloom_group) = build_source_groups(device, &bgl_tex, &sampler, targets);
    PostResources {
        bgl_tex,
        sampler,
        src_groups,
        bloom_group,
        steps,
    }
}

impl PostResources {
    /// Rebind the (re)created targets and refresh resolution-dependent uniforms.
    pub(crate) fn rebind(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, targets: &RenderTargets) {
        let (src_groups, bloom_group) =
            build_source_groups(device, &self.bgl_tex, &self.sampler, targets);
        self.src_groups = src_groups;
        self.bloom_group = bloom_group;
        self.write_uniforms(queue, targets);
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, targets: &RenderTargets) {
        let full = targets.full_size();
        let bloom = targets.bloom_size();
        for step in &self.steps {
            let (w, h) = match step.scale {
                Scale::Full => full,
                Scale::Bloom => bloom,
            };
            let u = PostUniforms {
                resolution: [w as f32, h as f32],
                ..step.params
            };
            queue.write_buffer(&step.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    pub(crate) fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        targets: &RenderTargets,
        screen: &wgpu::TextureView,
        screen_clear: wgpu::Color,
    ) {
        for step in &self.steps {
            let (view, clear) = match step.dst {
                Dest::Screen => (screen, screen_clear),
                Dest::Target(t) => (targets.view(t), wgpu::Color::TRANSPARENT),
            };
            let src = self.source_group(step.src);
            let bloom = step.with_bloom.then_some(&self.bloom_group);
            blit(encoder, step.label, view, clear, &step.pipeline, src, &step.uniform_group, bloom);
        }
    }

    fn source_group(&self, id: TargetId) -> &wgpu::BindGroup {
        self.src_groups
            .iter()
            .find(|(t, _)| *t == id)
            .map(|(_, g)| g)
            .unwrap_or(&self.src_groups[0].1)
    }
}

struct PlannedStep {
    label: &'static str,
    entry: &'static str,
    src: TargetId,
    dst: Dest,
    with_bloom: bool,
    scale: Scale,
    params: PostUniforms,
}

fn plan_steps(chain: &PostChain) -> Vec<PlannedStep> {
    let passes = chain.passes();
    let mut out = Vec::with_capacity(passes.len() + 3);
    let mut src = TargetId::Scene;
    for (i, stage) in passes.iter().enumerate() {
        let dst = if i + 1 == passes.len() {
            Dest::Screen
        } else if src == TargetId::Ping {
            Dest::Target(TargetId::Pong)
        } else {
            Dest::Target(TargetId::Ping)
        };
        match *stage {
            PostStage::Render => continue,
            PostStage::RgbShift { amount, angle } => out.push(PlannedStep {
                label: "rgb_shift",
                entry: "fs_rgb_shift",
                src,
                dst,
                with_bloom: false,
                scale: Scale::Full,
                params: PostUniforms {
                    amount,
                    angle,
                    ..Default::default()
                },
            }),
            PostStage::GammaCorrection => out.push(PlannedStep {
                label: "gamma",
                entry: "fs_gamma",
                src,
                dst,
                with_bloom: false,
                scale: Scale::Full,
                params: PostUniforms::default(),
            }),
            PostStage::Bloom {
                strength,
                radius,
                threshold,
            } => {
                out.push(PlannedStep {
                    label: "bloom_bright",
                    entry: "fs_bright",
                    src,
                    dst: Dest::Target(TargetId::BloomA),
                    with_bloom: false,
                    scale: Scale::Bloom,
                    params: PostUniforms {
                        threshold,
                        ..Default::default()
                    },
                });
                for (label, from, to, dir) in [
                    ("bloom_blur_h", TargetId::BloomA, TargetId::BloomB, [1.0, 0.0]),
                    ("bloom_blur_v", TargetId::BloomB, TargetId::BloomA, [0.0, 1.0]),
                ] {
                    out.push(PlannedStep {
                        label,
                        entry: "fs_blur",
                        src: from,
                        dst: Dest::Target(to),
                        with_bloom: false,
                        scale: Scale::Bloom,
                        params: PostUniforms {
                            blur_dir: dir,
                            amount: radius,
                            ..Default::default()
                        },
                    });
                }
                out.push(PlannedStep {
                    label: "bloom_composite",
                    entry: "fs_composite",
                    src,
                    dst,
                    with_bloom: true,
                    scale: Scale::Full,
                    params: PostUniforms {
                        strength,
                        ..Default::default()
                    },
                });
            }
        }
        if let Dest::Target(t) = dst {
            src = t;
        }
    }
    out
}

fn build_source_groups(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    targets: &RenderTargets,
) -> (Vec<(TargetId, wgpu::BindGroup)>, wgpu::BindGroup) {
    let make = |id: TargetId| {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("post_src"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(targets.view(id)),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    };
    let groups = TargetId::ALL.iter().map(|&id| (id, make(id))).collect();
    (groups, make(TargetId::BloomA))
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: &wgpu::BindGroup,
    bg2: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    r.set_bind_group(1, bg1, &[]);
    if let Some(g2) = bg2 {
        r.set_bind_group(2, g2, &[]);
    }
    r.draw(0..3, 0..1);
}
