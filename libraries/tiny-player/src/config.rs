//! Player configuration
//!
//! Defaults reproduce the stock widget look. Values can be layered from a
//! TOML file and `TINY_PLAYER_*` environment variables.

use crate::error::{PlayerError, Result};
use crate::volume::{Volume, VolumeSlider};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "TINY_PLAYER";

/// Configuration for a player session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Volume broadcast when the session starts (0.0-1.0, default: 1.0)
    pub initial_volume: f64,

    /// Filled volume bar width at full volume, in percent (default: 60)
    pub volume_bar_scale: f64,

    /// Volume dot offset added to the bar width, in percent (default: 20)
    pub volume_dot_base: f64,

    /// Pointer correction for the volume dot radius, in pixels (default: 7.5)
    pub volume_pointer_offset: f64,

    /// Appended to every title so a scrolling title keeps a gap (default: two spaces)
    pub title_padding: String,

    /// Scroll titles that overflow their container (default: true)
    pub marquee_enabled: bool,

    /// Minimum frame time between two title scroll steps (default: 500 ms)
    pub marquee_interval_ms: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            volume_bar_scale: 60.0,
            volume_dot_base: 20.0,
            volume_pointer_offset: 7.5,
            title_padding: "  ".to_string(),
            marquee_enabled: true,
            marquee_interval_ms: 500.0,
        }
    }
}

impl PlayerConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Missing keys keep their defaults. Environment variables use the
    /// [`ENV_PREFIX`] prefix, e.g. `TINY_PLAYER_INITIAL_VOLUME=0.5`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path).required(true));
        }

        // Override with environment variables (prefixed with TINY_PLAYER_)
        settings =
            settings.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let loaded: Self = settings
            .build()
            .map_err(|e| PlayerError::config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlayerError::config(e.to_string()))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(PlayerError::config(format!(
                "initial_volume must be within 0.0..=1.0, got {}",
                self.initial_volume
            )));
        }

        if !self.volume_bar_scale.is_finite() || self.volume_bar_scale < 0.0 {
            return Err(PlayerError::config(format!(
                "volume_bar_scale must be a non-negative number, got {}",
                self.volume_bar_scale
            )));
        }

        if !self.volume_dot_base.is_finite() || !self.volume_pointer_offset.is_finite() {
            return Err(PlayerError::config(
                "volume_dot_base and volume_pointer_offset must be finite",
            ));
        }

        if !self.marquee_interval_ms.is_finite() || self.marquee_interval_ms <= 0.0 {
            return Err(PlayerError::config(format!(
                "marquee_interval_ms must be positive, got {}",
                self.marquee_interval_ms
            )));
        }

        Ok(())
    }

    /// Slider geometry derived from this configuration
    pub fn volume_slider(&self) -> VolumeSlider {
        VolumeSlider::new(self.volume_bar_scale, self.volume_dot_base)
    }

    pub fn initial_volume(&self) -> Volume {
        Volume::new(self.initial_volume)
    }
}
