//! Global volume and its slider geometry
//!
//! Volume is a linear fraction in 0.0..=1.0 everywhere: pointer math produces
//! it, the engine consumes it, and the slider geometry is derived from it.

/// Global volume level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f64,
}

impl Volume {
    /// Create a volume at `level`, clamped to 0.0..=1.0
    ///
    /// Non-finite levels fall back to full volume.
    pub fn new(level: f64) -> Self {
        let level = if level.is_finite() {
            level.clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self { level }
    }

    /// Set the level, clamped to 0.0..=1.0
    ///
    /// Returns `false` and keeps the old level when `level` is not finite.
    pub fn set_level(&mut self, level: f64) -> bool {
        if !level.is_finite() {
            return false;
        }
        self.level = level.clamp(0.0, 1.0);
        true
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f64 {
        self.level
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Maps a volume level onto the slider drawn in every entry
///
/// The filled bar spans `level * bar_scale` percent of the panel and the
/// dot sits `dot_base` percent further right, past the speaker icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeSlider {
    bar_scale: f64,
    dot_base: f64,
}

impl VolumeSlider {
    pub fn new(bar_scale: f64, dot_base: f64) -> Self {
        Self {
            bar_scale,
            dot_base,
        }
    }

    /// Width of the filled bar, in percent
    pub fn bar_width(&self, volume: Volume) -> f64 {
        volume.level() * self.bar_scale
    }

    /// Left offset of the dot, in percent
    pub fn dot_offset(&self, volume: Volume) -> f64 {
        self.bar_width(volume) + self.dot_base
    }
}

impl Default for VolumeSlider {
    fn default() -> Self {
        Self::new(60.0, 20.0)
    }
}
