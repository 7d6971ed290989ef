use super::helpers;
use crate::core::scene::{Fog, Light, Material, SceneDesc};
use crate::core::PerspectiveCamera;
use glam::{Mat4, Vec3};
use wgpu;
use wgpu::util::DeviceExt;

pub(crate) const MAX_LIGHTS: usize = 4;

const KIND_AMBIENT: f32 = 0.0;
const KIND_POINT: f32 = 1.0;
const KIND_SPOT: f32 = 2.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LightRaw {
    position: [f32; 4],
    color: [f32; 4],
    direction: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    fog_color: [f32; 4],
    fog: [f32; 4],
    lights: [LightRaw; MAX_LIGHTS],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MaterialUniforms {
    base_color: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniforms {
    model: [[f32; 4]; 4],
}

pub(crate) fn pack_lights(lights: &[Light]) -> ([LightRaw; MAX_LIGHTS], usize) {
    let mut out = [LightRaw::default(); MAX_LIGHTS];
    if lights.len() > MAX_LIGHTS {
        log::warn!("scene has {} lights, only {} are shaded", lights.len(), MAX_LIGHTS);
    }
    let n = lights.len().min(MAX_LIGHTS);
    for (raw, light) in out.iter_mut().zip(lights) {
        *raw = match *light {
            Light::Ambient { color, intensity } => {
                let [r, g, b] = color.scaled(intensity);
                LightRaw {
                    position: [0.0, 0.0, 0.0, KIND_AMBIENT],
                    color: [r, g, b, 0.0],
                    ..Default::default()
                }
            }
            Light::Point {
                color,
                intensity,
                position,
            } => {
                let [r, g, b] = color.scaled(intensity);
                LightRaw {
                    position: [position.x, position.y, position.z, KIND_POINT],
                    color: [r, g, b, 0.0],
                    params: [0.0, 2.0, 0.0, 0.0],
                    ..Default::default()
                }
            }
            Light::Spot {
                color,
                intensity,
                distance,
                angle,
                penumbra,
                decay,
                position,
                target,
            } => {
                let [r, g, b] = color.scaled(intensity);
                let dir = (target - position).normalize_or_zero();
                LightRaw {
                    position: [position.x, position.y, position.z, KIND_SPOT],
                    color: [r, g, b, distance],
                    direction: [dir.x, dir.y, dir.z, angle.cos()],
                    params: [(angle * (1.0 - penumbra)).cos(), decay, 0.0, 0.0],
                }
            }
        };
    }
    (out, n)
}

struct GpuGeometry {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

struct GpuMaterial {
    group: wgpu::BindGroup,
    standard: bool,
}

struct GpuMesh {
    geometry: usize,
    material: usize,
    uniform_buffer: wgpu::Buffer,
    group: wgpu::BindGroup,
    position: Vec3,
    rotation_x: f32,
}

/// Decoded RGBA8 image ready for upload.
pub(crate) struct Pixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Everything needed to draw one `SceneDesc` with the mesh shader.
pub(crate) struct MeshResources {
    frame_buffer: wgpu::Buffer,
    frame_group: wgpu::BindGroup,
    basic_pipeline: wgpu::RenderPipeline,
    standard_pipeline: wgpu::RenderPipeline,
    geometries: Vec<GpuGeometry>,
    materials: Vec<GpuMaterial>,
    meshes: Vec<GpuMesh>,
    lights: [LightRaw; MAX_LIGHTS],
    light_count: usize,
    fog: Option<Fog>,
    _textures: Vec<wgpu::Texture>,
}

impl MeshResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &SceneDesc,
        images: Vec<Option<Pixels>>,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let vf = wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT;
        let frag = wgpu::ShaderStages::FRAGMENT;
        let bgl_frame = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh_bgl_frame"),
            entries: &[helpers::uniform_entry(0, vf)],
        });
        let bgl_material = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh_bgl_material"),
            entries: &[
                helpers::uniform_entry(0, vf),
                helpers::texture_entry(1, frag),
                helpers::texture_entry(2, wgpu::ShaderStages::VERTEX),
                helpers::texture_entry(3, frag),
                helpers::sampler_entry(4, vf),
            ],
        });
        let bgl_object = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh_bgl_object"),
            entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX)],
        });

        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_group"),
            layout: &bgl_frame,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_mesh"),
            bind_group_layouts: &[&bgl_frame, &bgl_material, &bgl_object],
            push_constant_ranges: &[],
        });
        let basic_pipeline = make_mesh_pipeline(device, &layout, &shader, "fs_basic", color_format);
        let standard_pipeline =
            make_mesh_pipeline(device, &layout, &shader, "fs_standard", color_format);

        // Failed or missing images fall back to neutral 1x1 textures
        let (white_tex, white) = helpers::upload_rgba8(device, queue, "white", 1, 1, &[255; 4]);
        let (black_tex, black) =
            helpers::upload_rgba8(device, queue, "black", 1, 1, &[0, 0, 0, 255]);
        let mut textures = vec![white_tex, black_tex];
        let mut views: Vec<Option<wgpu::TextureView>> = Vec::with_capacity(images.len());
        for (path, img) in scene.textures.iter().zip(images) {
            match img {
                Some(p) => {
                    let (t, v) = helpers::upload_rgba8(device, queue, path, p.width, p.height, &p.data);
                    textures.push(t);
                    views.push(Some(v));
                }
                None => views.push(None),
            }
        }
        let pick = |id: Option<usize>, fallback: &'_ wgpu::TextureView| -> wgpu::TextureView {
            id.and_then(|i| views.get(i).cloned().flatten())
                .unwrap_or_else(|| fallback.clone())
        };
        let sampler = helpers::linear_sampler(device, "mesh_sampler");

        let materials = scene
            .materials
            .iter()
            .map(|m| {
                let (map, disp, metal, uniforms, standard) = match *m {
                    Material::Basic { map } => (
                        map,
                        None,
                        None,
                        MaterialUniforms {
                            base_color: [1.0; 4],
                            params: [0.0; 4],
                        },
                        false,
                    ),
                    Material::Standard {
                        map,
                        displacement_map,
                        displacement_scale,
                        metalness,
                        metalness_map,
                        roughness,
                    } => (
                        map,
                        displacement_map,
                        metalness_map,
                        MaterialUniforms {
                            base_color: [1.0; 4],
                            params: [displacement_scale, metalness, roughness, 0.0],
                        },
                        true,
                    ),
                };
                let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("material_uniforms"),
                    contents: bytemuck::bytes_of(&uniforms),
                    usage: wgpu::BufferUsages::UNIFORM,
                });
                let map_view = pick(map, &white);
                let disp_view = pick(disp, &black);
                let metal_view = pick(metal, &white);
                let group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("material_group"),
                    layout: &bgl_material,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: buffer.as_entire_binding(),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::TextureView(&map_view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 2,
                            resource: wgpu::BindingResource::TextureView(&disp_view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 3,
                            resource: wgpu::BindingResource::TextureView(&metal_view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 4,
                            resource: wgpu::BindingResource::Sampler(&sampler),
                        },
                    ],
                });
                GpuMaterial { group, standard }
            })
            .collect();

        let geometries = scene
            .geometries
            .iter()
            .map(|g| {
                let vertices = g.vertices();
                let indices = g.indices();
                GpuGeometry {
                    vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("plane_vertices"),
                        contents: bytemuck::cast_slice(&vertices),
                        usage: wgpu::BufferUsages::VERTEX,
                    }),
                    index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("plane_indices"),
                        contents: bytemuck::cast_slice(&indices),
                        usage: wgpu::BufferUsages::INDEX,
                    }),
                    index_count: indices.len() as u32,
                }
            })
            .collect();

        let meshes = scene
            .meshes
            .iter()
            .map(|m| {
                let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("object_uniforms"),
                    size: std::mem::size_of::<ObjectUniforms>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("object_group"),
                    layout: &bgl_object,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });
                GpuMesh {
                    geometry: m.geometry,
                    material: m.material,
                    uniform_buffer,
                    group,
                    position: m.position,
                    rotation_x: m.rotation_x,
                }
            })
            .collect();

        let (lights, light_count) = pack_lights(&scene.lights);
        Self {
            frame_buffer,
            frame_group,
            basic_pipeline,
            standard_pipeline,
            geometries,
            materials,
            meshes,
            lights,
            light_count,
            fog: scene.fog,
            _textures: textures,
        }
    }

    pub(crate) fn set_position(&mut self, mesh: usize, position: Vec3) {
        if let Some(m) = self.meshes.get_mut(mesh) {
            m.position = position;
        }
    }

    /// Write camera, light and per-mesh transforms for this frame.
    pub(crate) fn update(&self, queue: &wgpu::Queue, camera: &PerspectiveCamera) {
        let (fog_color, fog) = match self.fog {
            Some(f) => (
                [f.color.r, f.color.g, f.color.b, 1.0],
                [f.near, f.far, 1.0, self.light_count as f32],
            ),
            None => ([0.0; 4], [0.0, 0.0, 0.0, self.light_count as f32]),
        };
        let u = FrameUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            camera_pos: camera.position.extend(1.0).to_array(),
            fog_color,
            fog,
            lights: self.lights,
        };
        queue.write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&u));
        for m in &self.meshes {
            let model = Mat4::from_translation(m.position) * Mat4::from_rotation_x(m.rotation_x);
            let o = ObjectUniforms {
                model: model.to_cols_array_2d(),
            };
            queue.write_buffer(&m.uniform_buffer, 0, bytemuck::bytes_of(&o));
        }
    }

    pub(crate) fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        color: &wgpu::TextureView,
        depth: &wgpu::TextureView,
        clear: wgpu::Color,
    ) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_bind_group(0, &self.frame_group, &[]);
        for m in &self.meshes {
            let (Some(geo), Some(mat)) = (self.geometries.get(m.geometry), self.materials.get(m.material))
            else {
                continue;
            };
            rpass.set_pipeline(if mat.standard {
                &self.standard_pipeline
            } else {
                &self.basic_pipeline
            });
            rpass.set_bind_group(1, &mat.group, &[]);
            rpass.set_bind_group(2, &m.group, &[]);
            rpass.set_vertex_buffer(0, geo.vertex_buffer.slice(..));
            rpass.set_index_buffer(geo.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..geo.index_count, 0, 0..1);
        }
    }
}

fn make_mesh_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    frag_entry: &str,
    color_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let attributes = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(frag_entry),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<crate::core::geometry::Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &attributes,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(frag_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
