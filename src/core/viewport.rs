use super::constants::MAX_PIXEL_RATIO;
use fnv::FnvHashMap;

/// Window size in CSS pixels plus the clamped device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Camera aspect ratio; exactly `width / height`.
    #[inline]
    pub fn aspect(&self) -> f32 {
        (self.width / self.height) as f32
    }

    /// Renderer size in CSS pixels.
    #[inline]
    pub fn renderer_size(&self) -> (u32, u32) {
        (self.width.max(0.0) as u32, self.height.max(0.0) as u32)
    }

    /// Backing-store size: CSS size times pixel ratio, never zero.
    #[inline]
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).floor().max(1.0) as u32;
        let h = (self.height * self.pixel_ratio).floor().max(1.0) as u32;
        (w, h)
    }
}

pub type SubscriptionId = u64;

/// Single fan-out point for window resizes. Each mounted scene subscribes
/// once and unsubscribes when it is torn down.
pub struct ViewportHub {
    current: Option<Viewport>,
    next_id: SubscriptionId,
    subscribers: FnvHashMap<SubscriptionId, Box<dyn FnMut(Viewport)>>,
}

impl Default for ViewportHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportHub {
    pub fn new() -> Self {
        Self {
            current: None,
            next_id: 1,
            subscribers: FnvHashMap::default(),
        }
    }

    pub fn current(&self) -> Option<Viewport> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Register `f`. A subscriber that joins after a resize was published is
    /// called once right away with the latest viewport, so scenes that finish
    /// loading late still match the window.
    pub fn subscribe(&mut self, mut f: impl FnMut(Viewport) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        if let Some(vp) = self.current {
            f(vp);
        }
        self.subscribers.insert(id, Box::new(f));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    /// Record the new size and notify every subscriber synchronously.
    pub fn publish(&mut self, viewport: Viewport) {
        self.current = Some(viewport);
        for f in self.subscribers.values_mut() {
            f(viewport);
        }
    }
}
