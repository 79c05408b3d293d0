//! Tiny Player - In-page Audio Widget
//!
//! Platform-agnostic state machine behind a compact audio player widget.
//!
//! This crate provides:
//! - Audio discovery over a flattened document (title from attribute or heading)
//! - Playlist with at most one entry playing at a time
//! - Transport controls (play, pause, stop, toggle, seek)
//! - Global volume broadcast to every widget
//! - Frame-driven position sync with seek-drag suppression
//! - Title marquee for overflowing titles
//! - Timer formatting (`M:SS`, `H:MM:SS`)
//!
//! # Architecture
//!
//! `tiny-player` never decodes audio and never touches a real UI:
//! - Sound loading and output go through [`SoundEngine`] / [`SoundHandle`]
//! - Widget updates go through [`EntryView`], built per entry by a [`ViewFactory`]
//! - Frame timestamps come from a [`FrameClock`]
//!
//! Lifecycle signals (started, paused, ended...) are queued by each handle
//! and applied by [`PlayerSession::pump_events`], so the whole session runs
//! on the host's UI thread without callbacks.
//!
//! # Example: Timer Text
//!
//! ```rust
//! use tiny_player::{format_time, progress_percent};
//!
//! assert_eq!(format_time(200.0), "3:20");
//! assert_eq!(progress_percent(0.5), 50.0);
//! assert_eq!(progress_percent(f64::NAN), 0.0);
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use tiny_player::{
//!     DocumentNode, ElementBox, EntryView, Icon, PlayerConfig, PlayerSession, Result,
//!     SoundEngine, SoundEvent, SoundHandle, SystemFrameClock, WidgetEvent, WidgetPart,
//! };
//! use std::time::Duration;
//!
//! // Wrap your platform's media element
//! struct MySound;
//!
//! impl SoundHandle for MySound {
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn stop(&mut self) {}
//!     fn seek(&mut self, _position: Duration) {}
//!     fn position(&self) -> Option<Duration> {
//!         None
//!     }
//!     fn duration(&self) -> Option<Duration> {
//!         None
//!     }
//!     fn is_playing(&self) -> bool {
//!         false
//!     }
//!     fn poll_events(&mut self) -> Vec<SoundEvent> {
//!         Vec::new()
//!     }
//! }
//!
//! struct MyEngine;
//!
//! impl SoundEngine for MyEngine {
//!     fn load(&mut self, _sources: &[String]) -> Result<Box<dyn SoundHandle>> {
//!         Ok(Box::new(MySound))
//!     }
//!     fn set_volume(&mut self, _volume: f64) {}
//! }
//!
//! // Draw into your UI toolkit
//! struct MyView;
//!
//! impl EntryView for MyView {
//!     fn set_timer_text(&mut self, _text: &str) {}
//!     fn set_progress_width(&mut self, _percent: f64) {}
//!     fn set_title_text(&mut self, _text: &str) {}
//!     fn show_icon(&mut self, _icon: Icon) {}
//!     fn hide_icon(&mut self, _icon: Icon) {}
//!     fn set_volume_bar_width(&mut self, _percent: f64) {}
//!     fn set_volume_dot_offset(&mut self, _percent: f64) {}
//!     fn show_volume_panel(&mut self) {}
//!     fn hide_volume_panel(&mut self) {}
//!     fn bounds(&self, _part: WidgetPart) -> ElementBox {
//!         ElementBox::new(0.0, 200.0)
//!     }
//! }
//!
//! let document = vec![
//!     DocumentNode::Heading("Episode 1".to_string()),
//!     DocumentNode::Audio {
//!         title: None,
//!         sources: vec!["episode1.ogg".to_string(), "episode1.mp3".to_string()],
//!     },
//! ];
//!
//! let mut views = |_title: &str| -> Box<dyn EntryView> { Box::new(MyView) };
//! let mut session = PlayerSession::from_document(
//!     &document,
//!     Box::new(MyEngine),
//!     &mut views,
//!     PlayerConfig::default(),
//! )?;
//!
//! // Forward user input
//! session.handle_event(0, WidgetEvent::PlayClicked)?;
//!
//! // Drive from the display refresh callback
//! let mut clock = SystemFrameClock::new();
//! while session.run_frame(&mut clock) {}
//! # Ok::<(), tiny_player::PlayerError>(())
//! ```

mod config;
mod discovery;
mod engine;
mod entry;
mod error;
mod events;
mod interaction;
mod session;
mod sync;
mod time;
pub mod types;
mod view;
mod volume;

// Public exports
pub use config::{PlayerConfig, ENV_PREFIX};
pub use discovery::{discover, DocumentNode};
pub use engine::{SoundEngine, SoundHandle};
pub use entry::PlaylistEntry;
pub use error::{PlayerError, Result};
pub use events::SoundEvent;
pub use interaction::{pointer_fraction, SeekSurface, WidgetEvent};
pub use session::{progress_percent, PlayerSession};
pub use sync::{FrameClock, SyncLoop, SystemFrameClock, TitleMarquee, VirtualFrameClock};
pub use time::{format_duration, format_progress, format_time};
pub use types::{DiscoveredAudio, ElementBox, Icon, WidgetPart};
pub use view::{EntryView, ViewFactory};
pub use volume::{Volume, VolumeSlider};
