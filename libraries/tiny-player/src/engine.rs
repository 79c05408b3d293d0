//! Sound engine abstraction
//!
//! The session never decodes or outputs audio itself. A platform engine
//! (an HTML5 media element wrapper, a native mixer, a test double) creates
//! one [`SoundHandle`] per playlist entry and owns the global volume.

use crate::error::Result;
use crate::events::SoundEvent;
use std::time::Duration;

/// Transport controls for one loaded sound
///
/// Implementors queue lifecycle signals as transport state changes and hand
/// them out through [`SoundHandle::poll_events`]. Calls are expected to be
/// synchronous: after `stop()` returns, `is_playing()` reports `false`.
pub trait SoundHandle {
    /// Start or resume playback
    fn play(&mut self);

    /// Pause, keeping the position
    fn pause(&mut self);

    /// Stop and rewind to the start
    fn stop(&mut self);

    /// Jump to a position from the start of the track
    fn seek(&mut self, position: Duration);

    /// Current position, `None` until the engine can report one
    fn position(&self) -> Option<Duration>;

    /// Track duration, `None` until metadata has loaded
    fn duration(&self) -> Option<Duration>;

    /// Whether the sound is currently playing
    fn is_playing(&self) -> bool;

    /// Take the lifecycle signals queued since the last poll, oldest first
    fn poll_events(&mut self) -> Vec<SoundEvent>;
}

/// Factory for sound handles plus the engine-wide volume
pub trait SoundEngine {
    /// Create a handle for a track, trying `sources` in order
    ///
    /// # Errors
    /// Returns an error if none of the sources can be used
    fn load(&mut self, sources: &[String]) -> Result<Box<dyn SoundHandle>>;

    /// Set the global output volume (0.0 = silent, 1.0 = full volume)
    fn set_volume(&mut self, volume: f64);
}
