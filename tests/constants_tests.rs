// Sanity checks on tuning constants.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
fn pan_decay_is_a_contraction() {
    assert!(PAN_DECAY_PER_FRAME > 0.0 && PAN_DECAY_PER_FRAME < 1.0);
    assert!(WHEEL_IMPULSE_SCALE > 0.0);
}

#[test]
fn polar_band_is_ordered_and_above_horizon() {
    assert!(ORBIT_MIN_POLAR < ORBIT_MAX_POLAR);
    assert!(ORBIT_MAX_POLAR < std::f32::consts::FRAC_PI_2);
    assert_eq!(ORBIT_MIN_AZIMUTH, ORBIT_MAX_AZIMUTH);
}

#[test]
fn ground_plane_depth_matches_loop_period() {
    assert_eq!(PLANE_SIZE[1] as f64, PLANE_PERIOD);
    assert!((PLANE_INITIAL_Z as f64) < PLANE_PERIOD);
}

#[test]
fn fog_range_is_ordered() {
    assert!(FOG_NEAR < FOG_FAR);
    assert!(FOG_FAR < VAPOR_CAMERA_FAR);
}

#[test]
fn debug_range_contains_gallery_row() {
    assert!(DEBUG_CAMERA_X_MIN < DEBUG_CAMERA_X_MAX);
    let last_x = GALLERY_IMAGE_COUNT as f32 * GALLERY_IMAGE_SPACING;
    assert!(last_x >= DEBUG_CAMERA_X_MIN);
}

#[test]
fn pixel_ratio_cap() {
    assert_eq!(MAX_PIXEL_RATIO, 2.0);
}
