//! The list collaborator the fast scroller drives.

/// A vertically scrolling list.
///
/// Offsets and ranges are in pixels: `vertical_scroll_range` is the full
/// content height and `vertical_scroll_offset` how far it is scrolled.
pub trait ListView {
    /// Number of items in the list.
    fn item_count(&self) -> usize;

    /// Current scroll offset of the content.
    fn vertical_scroll_offset(&self) -> f32;

    /// Total height of the content.
    fn vertical_scroll_range(&self) -> f32;

    /// Jump so that `index` is laid out `offset` pixels below the top.
    fn scroll_to_position_with_offset(&mut self, index: usize, offset: f32);
}
