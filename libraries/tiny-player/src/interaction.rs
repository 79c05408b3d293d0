//! Widget interaction
//!
//! Hosts translate raw clicks and pointer moves on an entry's widget into
//! [`WidgetEvent`]s and hand them to [`PlayerSession::handle_event`]. Pointer
//! events carry only the horizontal page coordinate; element geometry is
//! read back from the entry's view at the time of the event.
//!
//! Seek dragging works the same on the seek strip and on the progress bar:
//! press starts a preview, moves update the preview while seeking, release
//! commits the seek.

use crate::error::Result;
use crate::session::PlayerSession;
use crate::types::{ElementBox, WidgetPart};
use tracing::debug;

/// Fraction of `element` left of the pointer, clamped to 0.0..=1.0
///
/// `fixed_offset` is subtracted from the pointer first (e.g. the radius of
/// a drag handle). Elements without width yield 0.0.
pub fn pointer_fraction(pointer_x: f64, element: ElementBox, fixed_offset: f64) -> f64 {
    if element.width.is_nan() || element.width <= 0.0 {
        return 0.0;
    }

    let fraction = (pointer_x - element.left - fixed_offset) / element.width;
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Surface a seek drag happens on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekSurface {
    Strip,
    ProgressBar,
}

impl SeekSurface {
    fn part(self) -> WidgetPart {
        match self {
            SeekSurface::Strip => WidgetPart::SeekStrip,
            SeekSurface::ProgressBar => WidgetPart::ProgressBar,
        }
    }
}

/// User input on an entry's widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    PlayClicked,
    PauseClicked,
    StopClicked,

    /// Speaker icon: open the volume panel
    VolumeIconClicked,

    /// Close icon: hide the volume panel
    VolumeCloseClicked,

    /// Click anywhere on the volume track
    VolumeTrackClicked { pointer_x: f64 },

    /// Press on the volume dot, starting a drag
    VolumeDotPressed,

    /// Pointer moved over the volume panel
    VolumePanelMoved { pointer_x: f64 },

    /// Pointer released over the volume panel
    VolumePanelReleased,

    SeekPressed { surface: SeekSurface, pointer_x: f64 },
    SeekMoved { surface: SeekSurface, pointer_x: f64 },
    SeekReleased { surface: SeekSurface, pointer_x: f64 },
}

impl PlayerSession {
    /// Apply a widget event of entry `index`
    pub fn handle_event(&mut self, index: usize, event: WidgetEvent) -> Result<()> {
        let index = self.resolve(Some(index))?;
        debug!(index, ?event, "Widget event");

        match event {
            WidgetEvent::PlayClicked => self.toggle_to(index)?,
            WidgetEvent::PauseClicked => self.pause(Some(index))?,
            WidgetEvent::StopClicked => self.stop(Some(index))?,

            WidgetEvent::VolumeIconClicked => self.entry_mut(index).view_mut().show_volume_panel(),
            WidgetEvent::VolumeCloseClicked => {
                self.entry_mut(index).view_mut().hide_volume_panel();
            }

            WidgetEvent::VolumeTrackClicked { pointer_x } => {
                let fraction = self.volume_fraction(index, pointer_x);
                self.volume(fraction);
            }
            WidgetEvent::VolumeDotPressed => self.mouse_down = true,
            WidgetEvent::VolumePanelReleased => self.mouse_down = false,
            WidgetEvent::VolumePanelMoved { pointer_x } => {
                if self.mouse_down {
                    let fraction = self.volume_fraction(index, pointer_x);
                    self.volume(fraction);
                }
            }

            WidgetEvent::SeekPressed { surface, pointer_x } => {
                self.seeking = true;
                let fraction = self.seek_fraction(index, surface, pointer_x);
                self.update_duration(index, fraction)?;
            }
            WidgetEvent::SeekMoved { surface, pointer_x } => {
                if self.seeking {
                    let fraction = self.seek_fraction(index, surface, pointer_x);
                    self.update_duration(index, fraction)?;
                }
            }
            WidgetEvent::SeekReleased { surface, pointer_x } => {
                self.seeking = false;
                let fraction = self.seek_fraction(index, surface, pointer_x);
                self.seek(index, fraction)?;
                self.update_duration(index, fraction)?;
            }
        }

        Ok(())
    }

    /// Volume under the pointer, measured on the volume track
    fn volume_fraction(&self, index: usize, pointer_x: f64) -> f64 {
        let offset = self.config().volume_pointer_offset;
        self.entry(index)
            .map(|entry| {
                pointer_fraction(pointer_x, entry.view().bounds(WidgetPart::VolumeTrack), offset)
            })
            .unwrap_or_default()
    }

    /// Seek fraction under the pointer
    ///
    /// Measured from the left edge of the surface that received the event,
    /// scaled by the width of the full seek strip.
    fn seek_fraction(&self, index: usize, surface: SeekSurface, pointer_x: f64) -> f64 {
        self.entry(index)
            .map(|entry| {
                let view = entry.view();
                let reference = ElementBox::new(
                    view.bounds(surface.part()).left,
                    view.bounds(WidgetPart::SeekStrip).width,
                );
                pointer_fraction(pointer_x, reference, 0.0)
            })
            .unwrap_or_default()
    }
}
