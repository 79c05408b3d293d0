//! Core types shared by the session, views and discovery

use serde::{Deserialize, Serialize};

/// Icons rendered in an entry's control row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Play,
    Pause,
    Stop,
    /// Opens the volume panel
    VolumeUp,
    /// Closes the volume panel
    Close,
}

/// Widget elements whose geometry feeds pointer math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetPart {
    /// Full-width seek strip behind the progress bar
    SeekStrip,

    /// Filled part of the seek strip
    ProgressBar,

    /// Background track of the volume slider
    VolumeTrack,
}

/// Horizontal extent of a widget element in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementBox {
    /// Left edge
    pub left: f64,

    /// Inner width
    pub width: f64,
}

impl ElementBox {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// Audio element found while scanning a document
///
/// Sources are ordered by preference and must not be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredAudio {
    /// Display title
    pub title: String,

    /// Source URLs handed to the engine
    pub sources: Vec<String>,
}

impl DiscoveredAudio {
    pub fn new(title: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            title: title.into(),
            sources,
        }
    }
}
