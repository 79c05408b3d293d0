//! Player session - core orchestration
//!
//! Owns the playlist, the current index, the interaction flags and the
//! global volume. Transport calls go to the entry's sound handle and update
//! its view immediately; lifecycle signals coming back from the engine are
//! drained by [`PlayerSession::pump_events`] and drive the icon, timer and
//! title transitions plus the per-frame sync loop.

use crate::{
    config::PlayerConfig,
    discovery::{discover, DocumentNode},
    engine::SoundEngine,
    entry::PlaylistEntry,
    error::{PlayerError, Result},
    events::SoundEvent,
    sync::{FrameClock, SyncLoop, TitleMarquee},
    time::{format_duration, format_progress},
    types::{DiscoveredAudio, Icon},
    view::ViewFactory,
    volume::{Volume, VolumeSlider},
};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Width of the progress bar, in percent, for a playback fraction
///
/// Anything outside 0.0..=1.0, including the NaN produced by dividing by an
/// unknown duration, resolves to an empty bar.
pub fn progress_percent(fraction: f64) -> f64 {
    if (0.0..=1.0).contains(&fraction) {
        fraction * 100.0
    } else {
        0.0
    }
}

/// Central player state
///
/// At most one entry plays at a time. The data model does not enforce
/// this; [`PlayerSession::toggle_to`] does, by stopping the current entry
/// before starting another one.
pub struct PlayerSession {
    playlist: Vec<PlaylistEntry>,
    engine: Box<dyn SoundEngine>,

    current_index: usize,

    // Interaction flags
    pub(crate) mouse_down: bool,
    pub(crate) seeking: bool,

    volume: Volume,
    slider: VolumeSlider,

    sync: SyncLoop,
    marquee: TitleMarquee,

    config: PlayerConfig,
}

impl PlayerSession {
    /// Build a session from discovered audio
    ///
    /// Creates one entry per track, renders its initial widget state,
    /// attaches a sound handle and broadcasts the configured volume. An
    /// entry whose sound fails to load stays in the playlist without a
    /// handle and ignores transport calls.
    ///
    /// # Errors
    /// Returns [`PlayerError::NoSources`] if a track has no source URL.
    pub fn setup(
        tracks: Vec<DiscoveredAudio>,
        mut engine: Box<dyn SoundEngine>,
        views: &mut dyn ViewFactory,
        config: PlayerConfig,
    ) -> Result<Self> {
        let mut playlist = Vec::with_capacity(tracks.len());

        for track in tracks {
            if track.sources.is_empty() {
                return Err(PlayerError::NoSources(track.title));
            }

            let view = views.create_view(&track.title);
            let mut entry =
                PlaylistEntry::new(track.title, track.sources, view, &config.title_padding);

            let title = entry.display_title().to_string();
            let view = entry.view_mut();
            view.set_title_text(&title);
            view.show_icon(Icon::Play);
            view.hide_icon(Icon::Pause);
            view.hide_volume_panel();

            match engine.load(entry.sources()) {
                Ok(sound) => {
                    entry.attach_sound(sound);
                }
                Err(e) => {
                    warn!(title = %entry.title(), error = %e, "Failed to load sound");
                }
            }

            playlist.push(entry);
        }

        let mut session = Self {
            playlist,
            engine,
            current_index: 0,
            mouse_down: false,
            seeking: false,
            volume: config.initial_volume(),
            slider: config.volume_slider(),
            sync: SyncLoop::new(),
            marquee: TitleMarquee::new(config.marquee_enabled, config.marquee_interval_ms),
            config,
        };

        session.volume(session.config.initial_volume);

        info!(entries = session.playlist.len(), "Player session ready");
        Ok(session)
    }

    /// Scan document nodes and build a session from the audio found
    pub fn from_document(
        nodes: &[DocumentNode],
        engine: Box<dyn SoundEngine>,
        views: &mut dyn ViewFactory,
        config: PlayerConfig,
    ) -> Result<Self> {
        let tracks = discover(nodes)?;
        Self::setup(tracks, engine, views, config)
    }

    // ===== Transport =====

    /// Play an entry, the current one if `index` is `None`
    ///
    /// No guard against playing an entry that already plays.
    pub fn play(&mut self, index: Option<usize>) -> Result<()> {
        let index = self.resolve(index)?;
        debug!(index, "Play");

        self.playlist[index].play();
        self.current_index = index;
        Ok(())
    }

    /// Pause an entry, the current one if `index` is `None`
    pub fn pause(&mut self, index: Option<usize>) -> Result<()> {
        let index = self.resolve(index)?;
        debug!(index, "Pause");

        self.playlist[index].pause();
        Ok(())
    }

    /// Stop an entry, the current one if `index` is `None`
    pub fn stop(&mut self, index: Option<usize>) -> Result<()> {
        let index = self.resolve(index)?;
        debug!(index, "Stop");

        self.playlist[index].stop();
        self.current_index = index;
        Ok(())
    }

    /// Switch to an entry
    ///
    /// - current entry playing, same index: pause it
    /// - current entry playing, other index: stop it, then play `index`
    /// - nothing playing: play `index`
    pub fn toggle_to(&mut self, index: usize) -> Result<()> {
        let index = self.resolve(Some(index))?;
        let current = self.current_index;

        if self.playlist[current].is_playing() {
            if index == current {
                return self.pause(None);
            }
            debug!(from = current, to = index, "Switching tracks");
            self.playlist[current].stop();
        }

        self.play(Some(index))
    }

    /// Seek an entry to a fraction of its duration and update its timer
    ///
    /// Non-finite fractions seek to the start; others are clamped to
    /// 0.0..=1.0. Does not touch the `seeking` flag.
    pub fn seek(&mut self, index: usize, fraction: f64) -> Result<()> {
        let index = self.resolve(Some(index))?;
        let fraction = clamp_fraction(fraction);

        let entry = &mut self.playlist[index];
        let duration = entry.duration();
        let target = duration.mul_f64(fraction);
        debug!(index, ?target, "Seek");

        entry.seek(target);
        entry
            .view_mut()
            .set_timer_text(&format_progress(target, duration));
        Ok(())
    }

    /// Draw an entry's progress bar at `fraction` of the strip
    pub fn update_duration(&mut self, index: usize, fraction: f64) -> Result<()> {
        let index = self.resolve(Some(index))?;
        self.playlist[index]
            .view_mut()
            .set_progress_width(progress_percent(fraction));
        Ok(())
    }

    /// Set the global volume and redraw every entry's volume slider
    ///
    /// `value` is a fraction in 0.0..=1.0 and is clamped to it. Non-finite
    /// values are ignored.
    pub fn volume(&mut self, value: f64) {
        if !self.volume.set_level(value) {
            warn!(value, "Ignoring non-finite volume");
            return;
        }

        let level = self.volume.level();
        debug!(level, "Volume");
        self.engine.set_volume(level);

        let width = self.slider.bar_width(self.volume);
        let offset = self.slider.dot_offset(self.volume);
        for entry in &mut self.playlist {
            let view = entry.view_mut();
            view.set_volume_bar_width(width);
            view.set_volume_dot_offset(offset);
        }
    }

    // ===== Sync loop =====

    /// Push the current entry's live position into its view
    ///
    /// The timer always updates; the progress bar only when no seek drag
    /// is in progress. Re-arms the sync loop while the sound still plays.
    pub fn step(&mut self, timestamp: f64) {
        let seeking = self.seeking;
        let Some(entry) = self.playlist.get_mut(self.current_index) else {
            return;
        };

        let position = entry.position();
        let duration = entry.duration();
        trace!(timestamp, ?position, ?duration, "Step");

        entry
            .view_mut()
            .set_timer_text(&format_progress(position, duration));

        if !seeking {
            let fraction = position.as_secs_f64() / duration.as_secs_f64();
            entry
                .view_mut()
                .set_progress_width(progress_percent(fraction));
        }

        if entry.view().title_overflows() && self.marquee.due(timestamp) {
            entry.scroll_title();
        }

        if entry.is_playing() {
            self.sync.arm();
        }
    }

    /// Run one display frame
    ///
    /// Applies pending lifecycle signals, then runs a step if the sync loop
    /// is armed. Returns whether another frame is wanted.
    pub fn run_frame(&mut self, clock: &mut dyn FrameClock) -> bool {
        self.pump_events();

        if self.sync.take() {
            let timestamp = clock.next_frame();
            self.step(timestamp);
        }

        self.sync.is_armed()
    }

    /// Stop the sync loop without waiting for playback to end
    pub fn cancel_sync(&mut self) {
        self.sync.cancel();
    }

    // ===== Lifecycle signals =====

    /// Drain and apply lifecycle signals from every entry, in playlist order
    ///
    /// Returns the number of signals applied.
    pub fn pump_events(&mut self) -> usize {
        let mut applied = 0;
        for index in 0..self.playlist.len() {
            for event in self.playlist[index].poll_events() {
                self.apply_sound_event(index, event);
                applied += 1;
            }
        }
        applied
    }

    /// Apply one lifecycle signal of an entry to its view
    pub fn handle_sound_event(&mut self, index: usize, event: SoundEvent) -> Result<()> {
        let index = self.resolve(Some(index))?;
        self.apply_sound_event(index, event);
        Ok(())
    }

    fn apply_sound_event(&mut self, index: usize, event: SoundEvent) {
        debug!(index, ?event, "Sound event");
        let padding = self.config.title_padding.as_str();
        let entry = &mut self.playlist[index];

        match event {
            SoundEvent::Started => {
                let view = entry.view_mut();
                view.hide_icon(Icon::Play);
                view.show_icon(Icon::Pause);
                self.sync.arm();
                self.marquee.reset();
            }
            SoundEvent::MetadataLoaded => {
                let text = format_duration(entry.duration());
                entry.view_mut().set_timer_text(&text);
            }
            SoundEvent::Paused | SoundEvent::Stopped | SoundEvent::Ended => {
                if event.resets_widget() {
                    let text = format_duration(entry.duration());
                    entry.view_mut().set_timer_text(&text);
                    entry.view_mut().set_progress_width(0.0);
                    entry.restore_title(padding);
                    self.marquee.reset();

                    // A pending step would overwrite the reset timer
                    if index == self.current_index {
                        self.sync.cancel();
                    }
                }
                if event.shows_play_icon() {
                    let view = entry.view_mut();
                    view.hide_icon(Icon::Pause);
                    view.show_icon(Icon::Play);
                }
            }
        }
    }

    // ===== Queries =====

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&PlaylistEntry> {
        self.playlist.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &PlaylistEntry> {
        self.playlist.iter()
    }

    /// Whether the current entry's sound reports playing
    pub fn is_playing(&self) -> bool {
        self.playlist
            .get(self.current_index)
            .is_some_and(PlaylistEntry::is_playing)
    }

    /// Position of the current entry, zero while unknown
    pub fn position(&self) -> Duration {
        self.playlist
            .get(self.current_index)
            .map(PlaylistEntry::position)
            .unwrap_or_default()
    }

    pub fn volume_level(&self) -> f64 {
        self.volume.level()
    }

    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    pub fn sync_loop(&self) -> &SyncLoop {
        &self.sync
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    // ===== Internal =====

    /// Resolve an optional index against the playlist
    pub(crate) fn resolve(&self, index: Option<usize>) -> Result<usize> {
        let index = index.unwrap_or(self.current_index);
        if index < self.playlist.len() {
            Ok(index)
        } else {
            warn!(index, len = self.playlist.len(), "Index out of bounds");
            Err(PlayerError::IndexOutOfBounds {
                index,
                len: self.playlist.len(),
            })
        }
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> &mut PlaylistEntry {
        &mut self.playlist[index]
    }
}

impl std::fmt::Debug for PlayerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerSession")
            .field("playlist", &self.playlist)
            .field("current_index", &self.current_index)
            .field("mouse_down", &self.mouse_down)
            .field("seeking", &self.seeking)
            .field("volume", &self.volume)
            .field("sync", &self.sync)
            .finish_non_exhaustive()
    }
}

/// Clamp a fraction to 0.0..=1.0, mapping non-finite input to 0.0
pub(crate) fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
