//! Appearance configuration for the fast scroller.
//!
//! Colors have no behavioral effect beyond the handle tint swap while dragging.
//! Sizes are the measured dimensions of the scroller parts and feed the
//! position math.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BUBBLE_HEIGHT, DEFAULT_BUBBLE_WIDTH, DEFAULT_HANDLE_HEIGHT, DEFAULT_HANDLE_WIDTH,
    DEFAULT_TRACK_WIDTH,
};
use crate::{Color, Size};

/// Configuration for fast scroller appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FastScrollStyle {
    /// Track tint
    pub track_color: Color,
    /// Handle tint when idle
    pub handle_color: Color,
    /// Bubble background, also used as the handle tint while dragging
    pub bubble_color: Color,
    /// Bubble label color
    pub bubble_text_color: Color,
    /// Width of the track column along the right edge
    pub track_width: f32,
    /// Handle size
    pub handle_size: Size,
    /// Bubble size
    pub bubble_size: Size,
}

impl Default for FastScrollStyle {
    fn default() -> Self {
        Self {
            track_color: Color::LIGHT_GRAY,
            handle_color: Color::DARK_GRAY,
            bubble_color: Color::BLUE,
            bubble_text_color: Color::WHITE,
            track_width: DEFAULT_TRACK_WIDTH,
            handle_size: Size::new(DEFAULT_HANDLE_WIDTH, DEFAULT_HANDLE_HEIGHT),
            bubble_size: Size::new(DEFAULT_BUBBLE_WIDTH, DEFAULT_BUBBLE_HEIGHT),
        }
    }
}

impl FastScrollStyle {
    /// Create a new style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the track color.
    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set the handle color.
    pub fn handle_color(mut self, color: Color) -> Self {
        self.handle_color = color;
        self
    }

    /// Set the bubble background color.
    pub fn bubble_color(mut self, color: Color) -> Self {
        self.bubble_color = color;
        self
    }

    /// Set the bubble text color.
    pub fn bubble_text_color(mut self, color: Color) -> Self {
        self.bubble_text_color = color;
        self
    }

    /// Set the track width.
    pub fn track_width(mut self, width: f32) -> Self {
        self.track_width = width;
        self
    }

    /// Set the handle size.
    pub fn handle_size(mut self, width: f32, height: f32) -> Self {
        self.handle_size = Size::new(width, height);
        self
    }

    /// Set the bubble size.
    pub fn bubble_size(mut self, width: f32, height: f32) -> Self {
        self.bubble_size = Size::new(width, height);
        self
    }
}
