use crate::{
    clock::{ClockReading, Ease, read_clock},
    config::ShareLink,
    foundation::error::{PaceError, PaceResult},
    sequence::{Sequence, is_valid_sequence, parse_sequence},
};

/// Whether the pacer is running.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackState {
    /// Editing allowed; nothing animates.
    Stopped,
    /// Running the sequence parsed at start; the text is locked.
    Playing {
        /// Sequence frozen for this session.
        sequence: Sequence,
        /// Caller clock value (seconds) at which playback began.
        started_at: f64,
    },
}

/// Play/pause control surface around an editable sequence text.
///
/// Time is supplied by the caller on every call, in seconds on any monotonic clock.
#[derive(Clone, Debug)]
pub struct Pacer {
    link: ShareLink,
    ease: Ease,
    state: PlaybackState,
}

impl Pacer {
    /// Stopped pacer initialised from a share link.
    pub fn new(link: ShareLink) -> Self {
        Self {
            link,
            ease: Ease::default(),
            state: PlaybackState::Stopped,
        }
    }

    /// Use `ease` for the breathing scale.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Current editable text.
    pub fn text(&self) -> &str {
        &self.link.sequence
    }

    /// Current share link; updated with the canonical sequence on every successful start.
    pub fn link(&self) -> &ShareLink {
        &self.link
    }

    /// Current state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Whether a session is running.
    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    /// Replace the sequence text. Refused while playing.
    pub fn set_text(&mut self, text: impl Into<String>) -> PaceResult<()> {
        if self.is_playing() {
            return Err(PaceError::validation(
                "sequence cannot be edited while playing",
            ));
        }
        self.link.sequence = text.into();
        Ok(())
    }

    /// Whether [`Pacer::start`] would succeed.
    pub fn can_start(&self) -> bool {
        !self.is_playing() && is_valid_sequence(&self.link.sequence)
    }

    /// Re-parse the text and begin playback at `now`.
    ///
    /// On success the canonical sequence is written back into the link, which is returned.
    pub fn start(&mut self, now: f64) -> PaceResult<ShareLink> {
        if self.is_playing() {
            return Err(PaceError::validation("pacer is already playing"));
        }
        let sequence = parse_sequence(&self.link.sequence)?;
        self.link = self.link.with_sequence(&sequence);
        tracing::info!(sequence = %sequence, "playback started");
        self.state = PlaybackState::Playing {
            sequence,
            started_at: now,
        };
        Ok(self.link.clone())
    }

    /// Stop playback. Returns `false` if nothing was playing.
    pub fn stop(&mut self) -> bool {
        let was_playing = self.is_playing();
        if was_playing {
            tracing::info!("playback stopped");
        }
        self.state = PlaybackState::Stopped;
        was_playing
    }

    /// Start when stopped, stop when playing. Returns the new playing flag.
    pub fn toggle(&mut self, now: f64) -> PaceResult<bool> {
        if self.is_playing() {
            self.stop();
            Ok(false)
        } else {
            self.start(now)?;
            Ok(true)
        }
    }

    /// Clock outputs at `now`, or `None` while stopped.
    pub fn reading(&self, now: f64) -> Option<ClockReading> {
        match &self.state {
            PlaybackState::Stopped => None,
            PlaybackState::Playing {
                sequence,
                started_at,
            } => Some(read_clock(sequence, now - started_at, self.ease)),
        }
    }

    /// Sequence of the running session.
    pub fn playing_sequence(&self) -> Option<&Sequence> {
        match &self.state {
            PlaybackState::Stopped => None,
            PlaybackState::Playing { sequence, .. } => Some(sequence),
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(ShareLink::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/pacer.rs"]
mod tests;
