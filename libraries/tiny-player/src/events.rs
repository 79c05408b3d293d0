//! Sound lifecycle events
//!
//! Engines report transport changes through a small closed set of signals.
//! The session drains them from every handle and mirrors them into the
//! entry's view:
//! - `Started` swaps the play icon for the pause icon and arms the sync loop
//! - `MetadataLoaded` writes the track duration into the timer
//! - `Paused` restores the play icon
//! - `Stopped` and `Ended` also reset progress and the title

use serde::{Deserialize, Serialize};

/// Lifecycle signal emitted by a sound handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEvent {
    /// Playback started or resumed
    Started,

    /// Playback paused mid-track
    Paused,

    /// Playback stopped explicitly, position rewound
    Stopped,

    /// Track reached its end
    Ended,

    /// Duration became known
    MetadataLoaded,
}

impl SoundEvent {
    /// Whether the widget should go back to its idle look (progress 0 %, original title)
    pub fn resets_widget(self) -> bool {
        matches!(self, SoundEvent::Stopped | SoundEvent::Ended)
    }

    /// Whether the play icon should be visible after this event
    pub fn shows_play_icon(self) -> bool {
        matches!(
            self,
            SoundEvent::Paused | SoundEvent::Stopped | SoundEvent::Ended
        )
    }
}
