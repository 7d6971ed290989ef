// Perspective camera shared by both scenes.
//
// Free of platform APIs so the projection rules can be checked on the host.

use super::viewport::Viewport;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera.
///
/// With no `target` the camera looks straight down −Z from its position,
/// which is what the gallery relies on while it slides along x.
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Option<Vec3>,
    pub up: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_deg,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            target: None,
            up: Vec3::Y,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = Some(target);
    }

    /// Keep the projection in step with the drawing surface.
    #[inline]
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Resize rule: the projection aspect follows the window exactly.
    #[inline]
    pub fn fit_viewport(&mut self, vp: &Viewport) {
        self.set_aspect(vp.aspect());
    }

    /// Clip-space projection with wgpu's `[0, 1]` depth range.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }

    /// World to view transform.
    pub fn view_matrix(&self) -> Mat4 {
        match self.target {
            Some(t) => Mat4::look_at_rh(self.position, t, self.up),
            None => Mat4::look_to_rh(self.position, Vec3::NEG_Z, self.up),
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
