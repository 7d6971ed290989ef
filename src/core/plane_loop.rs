use super::constants::{PLANE_PERIOD, PLANE_SCROLL_RATE};

/// Depth offset of the near ground plane after `elapsed_sec` seconds.
///
/// Always lies in `[0, PLANE_PERIOD)`; `rem_euclid` keeps that true even for a
/// clock that was somehow wound backwards.
#[inline]
pub fn plane_offset(elapsed_sec: f64) -> f32 {
    let z = (elapsed_sec * PLANE_SCROLL_RATE).rem_euclid(PLANE_PERIOD);
    // f64 -> f32 can round a value just below the period up to it
    let z = z as f32;
    if z >= PLANE_PERIOD as f32 {
        0.0
    } else {
        z
    }
}

/// Depths of the two ground planes: one covers the near field, the other
/// trails exactly one period behind it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanePair {
    pub near_z: f32,
    pub far_z: f32,
}

#[inline]
pub fn plane_pair(elapsed_sec: f64) -> PlanePair {
    let near_z = plane_offset(elapsed_sec);
    PlanePair {
        near_z,
        far_z: near_z - PLANE_PERIOD as f32,
    }
}
