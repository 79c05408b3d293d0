//! Playlist entries
//!
//! An entry binds a discovered track to its widget view and, once setup
//! attached one, its sound handle.

use crate::engine::SoundHandle;
use crate::events::SoundEvent;
use crate::view::EntryView;
use std::time::Duration;
use tracing::warn;

/// One track of the page playlist
pub struct PlaylistEntry {
    title: String,
    sources: Vec<String>,

    /// Title as rendered, including padding (rotated by the marquee)
    display_title: String,

    view: Box<dyn EntryView>,
    sound: Option<Box<dyn SoundHandle>>,
}

impl PlaylistEntry {
    /// Create an entry without a sound handle
    pub fn new(
        title: impl Into<String>,
        sources: Vec<String>,
        view: Box<dyn EntryView>,
        title_padding: &str,
    ) -> Self {
        let title = title.into();
        let display_title = format!("{}{}", title, title_padding);
        Self {
            title,
            sources,
            display_title,
            view,
            sound: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Title text currently shown in the view
    pub fn display_title(&self) -> &str {
        &self.display_title
    }

    pub fn view(&self) -> &dyn EntryView {
        self.view.as_ref()
    }

    pub(crate) fn view_mut(&mut self) -> &mut dyn EntryView {
        self.view.as_mut()
    }

    pub fn sound(&self) -> Option<&dyn SoundHandle> {
        match &self.sound {
            Some(sound) => Some(sound.as_ref()),
            None => None,
        }
    }

    pub fn has_sound(&self) -> bool {
        self.sound.is_some()
    }

    /// Attach the sound handle
    ///
    /// Handles are never reassigned: a second attach is ignored and
    /// returns `false`.
    pub(crate) fn attach_sound(&mut self, sound: Box<dyn SoundHandle>) -> bool {
        if self.sound.is_some() {
            warn!(title = %self.title, "Sound already attached, ignoring new handle");
            return false;
        }
        self.sound = Some(sound);
        true
    }

    // ===== Transport (no-ops without a handle) =====

    pub(crate) fn play(&mut self) {
        match self.sound.as_mut() {
            Some(sound) => sound.play(),
            None => warn!(title = %self.title, "Play ignored, no sound attached"),
        }
    }

    pub(crate) fn pause(&mut self) {
        if let Some(sound) = self.sound.as_mut() {
            sound.pause();
        }
    }

    pub(crate) fn stop(&mut self) {
        match self.sound.as_mut() {
            Some(sound) => sound.stop(),
            None => warn!(title = %self.title, "Stop ignored, no sound attached"),
        }
    }

    pub(crate) fn seek(&mut self, position: Duration) {
        if let Some(sound) = self.sound.as_mut() {
            sound.seek(position);
        }
    }

    pub(crate) fn poll_events(&mut self) -> Vec<SoundEvent> {
        self.sound
            .as_mut()
            .map(|sound| sound.poll_events())
            .unwrap_or_default()
    }

    // ===== Queries =====

    pub fn is_playing(&self) -> bool {
        self.sound.as_ref().is_some_and(|sound| sound.is_playing())
    }

    /// Playback position, zero while unknown
    pub fn position(&self) -> Duration {
        self.sound
            .as_ref()
            .and_then(|sound| sound.position())
            .unwrap_or_default()
    }

    /// Track duration, zero while unknown
    pub fn duration(&self) -> Duration {
        self.sound
            .as_ref()
            .and_then(|sound| sound.duration())
            .unwrap_or_default()
    }

    // ===== Title =====

    /// Show the original padded title again
    pub(crate) fn restore_title(&mut self, title_padding: &str) {
        self.display_title = format!("{}{}", self.title, title_padding);
        self.view.set_title_text(&self.display_title);
    }

    /// Scroll the displayed title one character to the left
    pub(crate) fn scroll_title(&mut self) {
        self.display_title = rotate_left(&self.display_title);
        self.view.set_title_text(&self.display_title);
    }
}

impl std::fmt::Debug for PlaylistEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaylistEntry")
            .field("title", &self.title)
            .field("sources", &self.sources)
            .field("has_sound", &self.sound.is_some())
            .finish_non_exhaustive()
    }
}

/// Move the first character to the end
fn rotate_left(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut rotated: String = chars.collect();
            rotated.push(first);
            rotated
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::mock::RecordingView;

    fn entry() -> PlaylistEntry {
        let (view, _) = RecordingView::new();
        PlaylistEntry::new(
            "Song",
            vec!["song.ogg".to_string()],
            Box::new(view),
            "  ",
        )
    }

    #[test]
    fn rotate_left_moves_first_char_to_end() {
        assert_eq!(rotate_left("abc"), "bca");
        assert_eq!(rotate_left("é  "), "  é");
        assert_eq!(rotate_left(""), "");
    }

    #[test]
    fn entry_without_sound_reports_idle_values() {
        let mut entry = entry();
        assert!(!entry.has_sound());
        assert!(!entry.is_playing());
        assert_eq!(entry.position(), Duration::ZERO);
        assert_eq!(entry.duration(), Duration::ZERO);

        // Transport calls are tolerated
        entry.play();
        entry.pause();
        entry.stop();
        assert!(entry.poll_events().is_empty());
    }

    #[test]
    fn scrolling_and_restoring_title() {
        let mut entry = entry();
        assert_eq!(entry.display_title(), "Song  ");

        entry.scroll_title();
        entry.scroll_title();
        assert_eq!(entry.display_title(), "ng  So");

        entry.restore_title("  ");
        assert_eq!(entry.display_title(), "Song  ");
    }
}
