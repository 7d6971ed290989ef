use super::camera::PerspectiveCamera;
use super::constants::{
    ORBIT_DAMPING_FACTOR, ORBIT_MAX_AZIMUTH, ORBIT_MAX_POLAR, ORBIT_MIN_AZIMUTH, ORBIT_MIN_POLAR,
    ORBIT_ROTATE_SPEED,
};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const POLAR_EPS: f32 = 1e-6;

/// Spherical coordinates around the orbit target: `phi` is measured from +Y,
/// `theta` around +Y starting at +Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(s * self.theta.sin(), self.phi.cos() * self.radius, s * self.theta.cos())
    }
}

/// Pointer-driven orbit controller limited to a band of polar angles and a
/// single azimuth, so dragging only tilts the camera.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_rotate: bool,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_azimuth: f32,
    pub max_azimuth: f32,
    delta: Spherical,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_rotate: true,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
            min_azimuth: ORBIT_MIN_AZIMUTH,
            max_azimuth: ORBIT_MAX_AZIMUTH,
            delta: Spherical::default(),
        }
    }
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// Pending rotation not yet applied by `update`.
    pub fn pending(&self) -> (f32, f32) {
        (self.delta.theta, self.delta.phi)
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta.phi -= angle;
    }

    /// Feed a pointer drag of `(dx, dy)` pixels over an element `element_height` tall.
    pub fn handle_drag(&mut self, dx: f32, dy: f32, element_height: f32) {
        if !self.enable_rotate || element_height <= 0.0 {
            return;
        }
        let dx = dx * self.rotate_speed;
        let dy = dy * self.rotate_speed;
        self.rotate_left(TAU * dx / element_height);
        self.rotate_up(TAU * dy / element_height);
    }

    /// Apply pending rotation, enforce the angle limits and move `camera`.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        let mut s = Spherical::from_offset(camera.position - self.target);

        if self.enable_damping {
            s.theta += self.delta.theta * self.damping_factor;
            s.phi += self.delta.phi * self.damping_factor;
        } else {
            s.theta += self.delta.theta;
            s.phi += self.delta.phi;
        }

        s.theta = clamp_azimuth(s.theta, self.min_azimuth, self.max_azimuth);
        s.phi = s
            .phi
            .clamp(self.min_polar, self.max_polar)
            .clamp(POLAR_EPS, PI - POLAR_EPS);

        camera.position = self.target + s.to_offset();
        camera.look_at(self.target);

        if self.enable_damping {
            self.delta.theta *= 1.0 - self.damping_factor;
            self.delta.phi *= 1.0 - self.damping_factor;
        } else {
            self.delta = Spherical::default();
        }
    }
}

fn clamp_azimuth(theta: f32, min: f32, max: f32) -> f32 {
    if !min.is_finite() || !max.is_finite() {
        return theta;
    }
    let wrap = |a: f32| {
        if a < -PI {
            a + TAU
        } else if a > PI {
            a - TAU
        } else {
            a
        }
    };
    let (min, max) = (wrap(min), wrap(max));
    if min <= max {
        theta.clamp(min, max)
    } else if theta > (min + max) / 2.0 {
        theta.max(min)
    } else {
        theta.min(max)
    }
}
