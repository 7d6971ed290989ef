use glam::Vec2;

/// Tracks a primary-button pointer drag and reports per-move deltas.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
}

impl DragState {
    #[inline]
    pub fn begin(&mut self, at: Vec2) {
        self.active = true;
        self.last = at;
    }

    /// Delta since the previous position, or `None` when no drag is active.
    #[inline]
    pub fn drag_to(&mut self, at: Vec2) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        let d = at - self.last;
        self.last = at;
        Some(d)
    }

    #[inline]
    pub fn end(&mut self) {
        self.active = false;
    }
}

/// Wheel deltas arrive in pixels, lines or pages depending on the device.
/// Normalise to pixels so the pan impulse does not depend on the mouse.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        1 => delta_y * 16.0,
        2 => delta_y * page_height,
        _ => delta_y,
    }
}
