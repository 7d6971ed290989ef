// Data-only descriptions of the two scenes.
//
// A `SceneDesc` is built once per mount and handed to the renderer; after
// that only mesh positions change.

use super::camera::PerspectiveCamera;
use super::config::{GalleryParams, VaporwaveParams};
use super::constants::*;
use super::geometry::PlaneGeometry;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn scaled(self, k: f32) -> [f32; 3] {
        [self.r * k, self.g * k, self.b * k]
    }
}

pub type TextureId = usize;
pub type MaterialId = usize;
pub type MeshId = usize;

#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// Unlit, texture only.
    Basic { map: Option<TextureId> },
    /// Metal/rough shading with optional maps and vertex displacement.
    Standard {
        map: Option<TextureId>,
        displacement_map: Option<TextureId>,
        displacement_scale: f32,
        metalness: f32,
        metalness_map: Option<TextureId>,
        roughness: f32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Point {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
    Spot {
        color: Color,
        intensity: f32,
        distance: f32,
        angle: f32,
        penumbra: f32,
        decay: f32,
        position: Vec3,
        target: Vec3,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshDesc {
    pub geometry: usize,
    pub material: MaterialId,
    pub position: Vec3,
    pub rotation_x: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneDesc {
    pub textures: Vec<String>,
    pub geometries: Vec<PlaneGeometry>,
    pub materials: Vec<Material>,
    pub meshes: Vec<MeshDesc>,
    pub lights: Vec<Light>,
    pub fog: Option<Fog>,
}

/// Gallery: a row of picture planes receding along −x.
pub fn gallery_scene(p: &GalleryParams, rng: &mut impl Rng) -> SceneDesc {
    let geometry = PlaneGeometry::new(p.plane_size[0], p.plane_size[1], 1, 1);
    let mut materials = Vec::with_capacity(p.image_paths.len());
    let mut meshes = Vec::with_capacity(p.image_paths.len());
    for (slot, _) in p.image_paths.iter().enumerate() {
        let i = (slot + 1) as f32;
        materials.push(Material::Basic { map: Some(slot) });
        meshes.push(MeshDesc {
            geometry: 0,
            material: slot,
            position: Vec3::new(i * p.spacing, rng.gen::<f32>(), p.depth),
            rotation_x: 0.0,
        });
    }
    let (hex, intensity, pos) = GALLERY_POINT_LIGHT;
    SceneDesc {
        textures: p.image_paths.clone(),
        geometries: vec![geometry],
        materials,
        meshes,
        lights: vec![Light::Point {
            color: Color::from_hex(hex),
            intensity,
            position: Vec3::from_array(pos),
        }],
        fog: None,
    }
}

pub fn gallery_camera(p: &GalleryParams, aspect: f32) -> PerspectiveCamera {
    PerspectiveCamera::new(p.fov_deg, aspect, p.near, p.far).at(Vec3::new(0.0, 0.0, p.camera_z))
}

/// Index of the near/far ground planes in `vaporwave_scene().meshes`.
pub const VAPOR_NEAR_PLANE: MeshId = 0;
pub const VAPOR_FAR_PLANE: MeshId = 1;

/// Vaporwave: two displaced, fogged ground planes lit by two green spots.
pub fn vaporwave_scene(p: &VaporwaveParams) -> SceneDesc {
    let geometry = PlaneGeometry::new(PLANE_SIZE[0], PLANE_SIZE[1], PLANE_SEGMENTS, PLANE_SEGMENTS);
    let material = Material::Standard {
        map: Some(0),
        displacement_map: Some(1),
        displacement_scale: p.displacement_scale,
        metalness: p.metalness,
        metalness_map: Some(2),
        roughness: p.roughness,
    };
    let plane = |z: f32| MeshDesc {
        geometry: 0,
        material: 0,
        position: Vec3::new(0.0, 0.0, z),
        rotation_x: -std::f32::consts::FRAC_PI_2,
    };
    let mut lights = vec![Light::Ambient {
        color: Color::from_hex(AMBIENT_COLOR),
        intensity: AMBIENT_INTENSITY,
    }];
    for i in 0..2 {
        lights.push(Light::Spot {
            color: Color::from_hex(SPOT_COLORS[i]),
            intensity: SPOT_INTENSITY,
            distance: SPOT_DISTANCE,
            angle: SPOT_ANGLE,
            penumbra: SPOT_PENUMBRA,
            decay: SPOT_DECAY,
            position: Vec3::from_array(SPOT_POSITIONS[i]),
            target: Vec3::from_array(SPOT_TARGETS[i]),
        });
    }
    SceneDesc {
        textures: vec![
            p.grid_texture.clone(),
            p.displacement_texture.clone(),
            p.metalness_texture.clone(),
        ],
        geometries: vec![geometry],
        materials: vec![material],
        meshes: vec![
            plane(PLANE_INITIAL_Z),
            plane(PLANE_INITIAL_Z - PLANE_PERIOD as f32),
        ],
        lights,
        fog: Some(Fog {
            color: Color::from_hex(FOG_COLOR),
            near: FOG_NEAR,
            far: FOG_FAR,
        }),
    }
}

pub fn vaporwave_camera(aspect: f32) -> PerspectiveCamera {
    PerspectiveCamera::new(VAPOR_CAMERA_FOV_DEG, aspect, VAPOR_CAMERA_NEAR, VAPOR_CAMERA_FAR)
        .at(Vec3::from_array(VAPOR_CAMERA_POSITION))
}
