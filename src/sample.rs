//! Sample list backing the demo screen.
//!
//! A fixed-height row list that keeps its own scroll offset and queues the
//! resulting scroll deltas, the way a platform list posts scroll callbacks
//! after it has moved.

use lvscroll_ui::ListView;

/// Items `"0"..="last"` sorted as strings, so the first character groups them.
pub fn sample_items(last: usize) -> Vec<String> {
    let mut items: Vec<String> = (0..=last).map(|i| i.to_string()).collect();
    items.sort();
    items
}

/// A scrollable list of uniform rows.
#[derive(Debug, Clone)]
pub struct SampleList {
    items: Vec<String>,
    item_height: f32,
    viewport_height: f32,
    scroll_offset: f32,
    /// Scroll distance not yet reported to listeners
    pending_dy: f32,
}

impl SampleList {
    pub fn new(items: Vec<String>, item_height: f32, viewport_height: f32) -> Self {
        Self {
            items,
            item_height,
            viewport_height,
            scroll_offset: 0.0,
            pending_dy: 0.0,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn content_height(&self) -> f32 {
        self.items.len() as f32 * self.item_height
    }

    fn max_scroll(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    fn set_offset(&mut self, offset: f32) {
        let offset = offset.clamp(0.0, self.max_scroll());
        self.pending_dy += offset - self.scroll_offset;
        self.scroll_offset = offset;
    }

    /// Scroll by `dy` pixels, as a finger drag or fling on the list would.
    pub fn scroll_by(&mut self, dy: f32) {
        self.set_offset(self.scroll_offset + dy);
    }

    /// Take the scroll distance accumulated since the last call.
    pub fn take_scroll_delta(&mut self) -> Option<f32> {
        let dy = std::mem::take(&mut self.pending_dy);
        (dy != 0.0).then_some(dy)
    }

    /// Index of the first row at least partly on screen.
    pub fn first_visible_position(&self) -> Option<usize> {
        if self.items.is_empty() || self.item_height <= 0.0 {
            return None;
        }
        let index = (self.scroll_offset / self.item_height).floor() as usize;
        Some(index.min(self.items.len() - 1))
    }

    /// Index of the first row entirely on screen.
    pub fn first_completely_visible_position(&self) -> Option<usize> {
        if self.items.is_empty() || self.item_height <= 0.0 {
            return None;
        }
        let index = (self.scroll_offset / self.item_height).ceil() as usize;
        let bottom = (index + 1) as f32 * self.item_height;
        (index < self.items.len() && bottom <= self.scroll_offset + self.viewport_height)
            .then_some(index)
    }

    /// Rows on screen, top to bottom, with their y offset inside the viewport.
    pub fn visible_rows(&self) -> Vec<(f32, &str)> {
        let Some(first) = self.first_visible_position() else {
            return Vec::new();
        };
        self.items[first..]
            .iter()
            .enumerate()
            .map(|(i, item)| ((first + i) as f32 * self.item_height - self.scroll_offset, item.as_str()))
            .take_while(|(y, _)| *y < self.viewport_height)
            .collect()
    }
}

impl ListView for SampleList {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn vertical_scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn vertical_scroll_range(&self) -> f32 {
        self.content_height()
    }

    fn scroll_to_position_with_offset(&mut self, index: usize, offset: f32) {
        self.set_offset(index as f32 * self.item_height - offset);
    }
}
