//! State types for the fast scroller

/// Visibility of an animated scroller part.
///
/// A part counts as visible from the moment its show animation starts until
/// its hide animation has finished, so `Hiding` is still visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Gone: hide animation finished (or never shown)
    #[default]
    Hidden,
    /// Shown, or sliding in
    Visible,
    /// Sliding out
    Hiding,
}

impl Visibility {
    /// Check if the part is on screen
    pub fn is_visible(&self) -> bool {
        !matches!(self, Visibility::Hidden)
    }

    /// Check if the part is fully shown (not on its way out)
    pub fn is_shown(&self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Mutable state of a fast scroller, owned by the UI thread.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    /// Current widget height in pixels
    pub viewport_height: f32,
    /// Current widget width in pixels
    pub viewport_width: f32,
    /// True between a press inside the track and the matching release/cancel
    pub handle_selected: bool,
    /// Vertical offset of the handle
    pub handle_y: f32,
    /// Vertical offset of the bubble
    pub bubble_y: f32,
    /// Track (and handle) visibility
    pub track: Visibility,
    /// Bubble visibility
    pub bubble: Visibility,
}

impl WidgetState {
    /// Create state for a widget that has not been laid out yet
    pub fn new() -> Self {
        Self::default()
    }
}
