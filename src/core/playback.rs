/// What the hero toggle should do with the audio track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaybackCommand {
    Pause,
    Resume { offset_sec: f64 },
}

/// Play/pause flag plus the offset recorded at the last pause.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackState {
    playing: bool,
    resume_at_sec: f64,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn resume_at_sec(&self) -> f64 {
        self.resume_at_sec
    }

    /// Flip state. `position_sec` is the track position right now and is only
    /// read when pausing.
    pub fn toggle(&mut self, position_sec: f64) -> PlaybackCommand {
        let cmd = if self.playing {
            self.resume_at_sec = position_sec.max(0.0);
            PlaybackCommand::Pause
        } else {
            PlaybackCommand::Resume {
                offset_sec: self.resume_at_sec,
            }
        };
        self.playing = !self.playing;
        cmd
    }
}

/// A playable track instance.
pub trait TrackHandle {
    fn start(&self, offset_sec: f64);
    fn pause(&self);
    fn position_sec(&self) -> f64;
}

/// Single-track play/pause driver. Every resume builds a fresh handle via
/// `make` and seeks it to the offset recorded at the previous pause.
pub struct TrackToggle<H, F>
where
    H: TrackHandle,
    F: FnMut() -> H,
{
    make: F,
    current: Option<H>,
    state: PlaybackState,
}

impl<H, F> TrackToggle<H, F>
where
    H: TrackHandle,
    F: FnMut() -> H,
{
    pub fn new(make: F) -> Self {
        Self {
            make,
            current: None,
            state: PlaybackState::default(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn toggle(&mut self) -> PlaybackCommand {
        let position = self.current.as_ref().map_or(0.0, |h| h.position_sec());
        let cmd = self.state.toggle(position);
        match cmd {
            PlaybackCommand::Pause => {
                if let Some(h) = &self.current {
                    h.pause();
                }
            }
            PlaybackCommand::Resume { offset_sec } => {
                let h = (self.make)();
                h.start(offset_sec);
                self.current = Some(h);
            }
        }
        cmd
    }

    /// Stop playback and release the handle.
    pub fn release(&mut self) {
        if let Some(h) = self.current.take() {
            if self.state.is_playing() {
                h.pause();
            }
        }
        self.state = PlaybackState::default();
    }
}

impl<H, F> Drop for TrackToggle<H, F>
where
    H: TrackHandle,
    F: FnMut() -> H,
{
    fn drop(&mut self) {
        self.release();
    }
}
