use crate::core::TrackHandle;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// One `<audio>` element playing the hero track.
pub struct AudioTrack {
    el: web::HtmlAudioElement,
}

impl AudioTrack {
    pub fn new(src: &str) -> Option<Self> {
        match web::HtmlAudioElement::new_with_src(src) {
            Ok(el) => Some(Self { el }),
            Err(e) => {
                log::error!("audio element {}: {:?}", src, e);
                None
            }
        }
    }
}

impl TrackHandle for AudioTrack {
    fn start(&self, offset_sec: f64) {
        self.el.set_current_time(offset_sec);
        match self.el.play() {
            Ok(promise) => spawn_local(async move {
                // Rejected when autoplay is blocked or the source fails
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("audio play rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("audio play: {:?}", e),
        }
    }

    fn pause(&self) {
        _ = self.el.pause();
    }

    fn position_sec(&self) -> f64 {
        self.el.current_time()
    }
}

/// Stand-in used when the audio element cannot be created; keeps the toggle
/// state machine running.
pub struct Silent;

impl TrackHandle for Silent {
    fn start(&self, _offset_sec: f64) {}
    fn pause(&self) {}
    fn position_sec(&self) -> f64 {
        0.0
    }
}

pub enum HeroTrack {
    Audio(AudioTrack),
    Silent(Silent),
}

impl HeroTrack {
    pub fn open(src: &str) -> Self {
        AudioTrack::new(src).map_or(HeroTrack::Silent(Silent), HeroTrack::Audio)
    }
}

impl TrackHandle for HeroTrack {
    fn start(&self, offset_sec: f64) {
        match self {
            HeroTrack::Audio(a) => a.start(offset_sec),
            HeroTrack::Silent(s) => s.start(offset_sec),
        }
    }

    fn pause(&self) {
        match self {
            HeroTrack::Audio(a) => a.pause(),
            HeroTrack::Silent(s) => s.pause(),
        }
    }

    fn position_sec(&self) -> f64 {
        match self {
            HeroTrack::Audio(a) => a.position_sec(),
            HeroTrack::Silent(s) => s.position_sec(),
        }
    }
}
