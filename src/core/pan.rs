use super::constants::{PAN_DECAY_PER_FRAME, WHEEL_IMPULSE_SCALE};

/// Scroll-driven horizontal camera pan for the gallery.
///
/// Every wheel tick adds an impulse to `velocity`; every frame integrates the
/// velocity into `position` and then decays it geometrically. The state is
/// owned by one mounted gallery and dropped with it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPan {
    pub velocity: f32,
    pub position: f32,
}

impl ScrollPan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate a wheel impulse. No clamping: a large delta produces a large
    /// velocity that simply decays over the following frames.
    #[inline]
    pub fn on_wheel(&mut self, delta_y: f64) {
        self.velocity += delta_y as f32 * WHEEL_IMPULSE_SCALE;
    }

    /// Advance one frame and return the new camera x.
    #[inline]
    pub fn step(&mut self) -> f32 {
        self.position += self.velocity;
        self.velocity *= PAN_DECAY_PER_FRAME;
        self.position
    }

    /// Re-seat the resting position (debug panel), keeping any velocity.
    pub fn seat(&mut self, position: f32) {
        self.position = position;
    }
}
