// Host-side tests for plane geometry and the two scene descriptions.

#![allow(dead_code)]
mod core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::config::{AppConfig, GalleryParams, VaporwaveParams};
use crate::core::geometry::PlaneGeometry;
use crate::core::scene::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn plane_counts_match_segments() {
    let quad = PlaneGeometry::new(1.0, 1.3, 1, 1);
    assert_eq!(quad.vertices().len(), 4);
    assert_eq!(quad.indices().len(), 6);

    let grid = PlaneGeometry::new(1.0, 2.0, 24, 24);
    assert_eq!(grid.vertices().len(), grid.vertex_count());
    assert_eq!(grid.vertex_count(), 625);
    assert_eq!(grid.index_count(), 3456);
    assert!(grid.indices().iter().all(|&i| (i as usize) < grid.vertex_count()));
}

#[test]
fn zero_segments_become_one() {
    let g = PlaneGeometry::new(1.0, 1.0, 0, 0);
    assert_eq!((g.segments_x, g.segments_y), (1, 1));
}

#[test]
fn plane_is_centred_with_upright_uvs() {
    let g = PlaneGeometry::new(2.0, 4.0, 2, 2);
    let v = g.vertices();
    let first = v.first().copied().unwrap();
    let last = v.last().copied().unwrap();
    assert_eq!(first.position, [-1.0, 2.0, 0.0]);
    assert_eq!(first.uv, [0.0, 0.0]);
    assert_eq!(last.position, [1.0, -2.0, 0.0]);
    assert_eq!(last.uv, [1.0, 1.0]);
    assert!(v.iter().all(|p| p.normal == [0.0, 0.0, 1.0]));
}

#[test]
fn triangles_face_positive_z() {
    let g = PlaneGeometry::new(1.0, 1.0, 3, 2);
    let v = g.vertices();
    for tri in g.indices().chunks(3) {
        let p = |i: u16| Vec3::from_array(v[i as usize].position);
        let n = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
        assert!(n.z > 0.0, "triangle {:?} winds clockwise", tri);
    }
}

#[test]
fn gallery_lays_images_along_negative_x() {
    let params = GalleryParams::default();
    let mut rng = StdRng::seed_from_u64(7);
    let scene = gallery_scene(&params, &mut rng);

    assert_eq!(scene.meshes.len(), 7);
    assert_eq!(scene.textures.len(), 7);
    assert_eq!(scene.textures[0], "media/pictures/1.png");
    assert_eq!(scene.textures[6], "media/pictures/7.png");
    for (i, m) in scene.meshes.iter().enumerate() {
        let expected_x = (i + 1) as f32 * -1.2;
        assert!((m.position.x - expected_x).abs() < 1e-6);
        assert!((0.0..1.0).contains(&m.position.y));
        assert_eq!(m.position.z, 1.0);
        assert_eq!(scene.materials[m.material], Material::Basic { map: Some(i) });
    }
    assert!(scene.fog.is_none());
    assert!(matches!(scene.lights.as_slice(), [Light::Point { .. }]));
}

#[test]
fn gallery_heights_come_from_the_rng() {
    let params = GalleryParams::default();
    let a = gallery_scene(&params, &mut StdRng::seed_from_u64(1));
    let b = gallery_scene(&params, &mut StdRng::seed_from_u64(1));
    let c = gallery_scene(&params, &mut StdRng::seed_from_u64(2));
    assert_eq!(a.meshes, b.meshes);
    assert_ne!(a.meshes, c.meshes);
}

#[test]
fn gallery_camera_sits_in_front_of_the_row() {
    let cam = gallery_camera(&GalleryParams::default(), 1.5);
    assert_eq!(cam.position, Vec3::new(0.0, 0.0, 3.0));
    assert_eq!(cam.fov_deg, 75.0);
    assert!(cam.target.is_none());
}

#[test]
fn asset_base_prefixes_texture_urls() {
    let cfg = AppConfig::from_query("?assets=/static");
    let scene = vaporwave_scene(&VaporwaveParams::from_config(&cfg));
    assert_eq!(
        scene.textures,
        vec![
            "/static/grid.png".to_string(),
            "/static/displacement.png".to_string(),
            "/static/metalness.png".to_string(),
        ]
    );
}

#[test]
fn vaporwave_has_two_ground_planes_one_period_apart() {
    let scene = vaporwave_scene(&VaporwaveParams::default());
    assert_eq!(scene.meshes.len(), 2);
    let near = &scene.meshes[VAPOR_NEAR_PLANE];
    let far = &scene.meshes[VAPOR_FAR_PLANE];
    assert_eq!(near.position.z, 0.15);
    assert!((far.position.z - (0.15 - 2.0)).abs() < 1e-6);
    assert_eq!(near.rotation_x, -std::f32::consts::FRAC_PI_2);
    assert_eq!(near.material, far.material);
}

#[test]
fn vaporwave_material_and_fog() {
    let scene = vaporwave_scene(&VaporwaveParams::default());
    match scene.materials[0] {
        Material::Standard {
            map,
            displacement_map,
            displacement_scale,
            metalness,
            metalness_map,
            roughness,
        } => {
            assert_eq!((map, displacement_map, metalness_map), (Some(0), Some(1), Some(2)));
            assert_eq!(displacement_scale, 0.4);
            assert_eq!(metalness, 1.0);
            assert_eq!(roughness, 0.23);
        }
        ref other => panic!("unexpected material {:?}", other),
    }
    let fog = scene.fog.expect("vaporwave is fogged");
    assert_eq!((fog.near, fog.far), (1.0, 2.5));
    assert_eq!(fog.color, Color::from_hex(0x000000));
}

#[test]
fn vaporwave_lights_one_ambient_two_spots() {
    let scene = vaporwave_scene(&VaporwaveParams::default());
    assert_eq!(scene.lights.len(), 3);
    assert!(matches!(scene.lights[0], Light::Ambient { .. }));
    let spots: Vec<_> = scene
        .lights
        .iter()
        .filter_map(|l| match l {
            Light::Spot { position, target, .. } => Some((*position, *target)),
            _ => None,
        })
        .collect();
    assert_eq!(spots.len(), 2);
    assert_eq!(spots[0].0.x, -spots[1].0.x);
    assert_eq!(spots[0].1.x, -spots[1].1.x);
}

#[test]
fn hex_colors_unpack_to_unit_range() {
    let c = Color::from_hex(0xff8000);
    assert_eq!(c.r, 1.0);
    assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
    assert_eq!(c.b, 0.0);
    assert_eq!(Color::from_hex(0xffffff).scaled(0.5), [0.5, 0.5, 0.5]);
}
