//! Rendering contract for one playlist entry
//!
//! A view is whatever draws an entry's widget: a DOM subtree, an immediate
//! mode panel, a terminal row. The session only pushes updates through this
//! trait and reads back element geometry for pointer math.

use crate::types::{ElementBox, Icon, WidgetPart};

/// Per-entry widget updates
pub trait EntryView {
    /// Replace the timer text ("1:05 / 3:20")
    fn set_timer_text(&mut self, text: &str);

    /// Set the progress bar width as a percentage of the seek strip
    fn set_progress_width(&mut self, percent: f64);

    /// Replace the title text
    fn set_title_text(&mut self, text: &str);

    fn show_icon(&mut self, icon: Icon);

    fn hide_icon(&mut self, icon: Icon);

    /// Set the filled part of the volume slider, in percent
    fn set_volume_bar_width(&mut self, percent: f64);

    /// Set the left offset of the volume dot, in percent
    fn set_volume_dot_offset(&mut self, percent: f64);

    fn show_volume_panel(&mut self);

    fn hide_volume_panel(&mut self);

    /// Geometry of a widget element
    ///
    /// Views without layout information report an empty box, which makes
    /// every pointer fraction resolve to 0.
    fn bounds(&self, part: WidgetPart) -> ElementBox {
        let _ = part;
        ElementBox::default()
    }

    /// Whether the title text is wider than its container
    fn title_overflows(&self) -> bool {
        false
    }
}

/// Builds the view for a newly discovered entry
pub trait ViewFactory {
    fn create_view(&mut self, title: &str) -> Box<dyn EntryView>;
}

impl<F> ViewFactory for F
where
    F: FnMut(&str) -> Box<dyn EntryView>,
{
    fn create_view(&mut self, title: &str) -> Box<dyn EntryView> {
        self(title)
    }
}
