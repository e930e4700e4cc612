//! Position mapping between touch coordinates, scroller pixels and list indices.
//!
//! The handle and bubble positions are derived from a single vertical
//! coordinate: either the finger position while dragging, or the equivalent
//! coordinate reconstructed from the list's scroll offset. The target list
//! index goes the other way, from the dragged handle back into the list.

use crate::constants::SCROLLER_MAX_POSITION_GAP;

/// Vertical offsets of the handle and bubble inside the widget.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollerPosition {
    pub handle_y: f32,
    pub bubble_y: f32,
}

// =============================================================================
// Clamping
// =============================================================================

/// Clamp `value` to `[0, max]`.
///
/// A negative `max` (element taller than the viewport) and a NaN `value` both
/// collapse to 0.
pub fn clamp_to_range(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max.max(0.0))
}

// =============================================================================
// Touch -> Scroller
// =============================================================================

/// Place the handle centered on the finger and the bubble one handle-height above it.
pub fn position_from_touch(
    touch_y: f32,
    viewport_height: f32,
    handle_height: f32,
    bubble_height: f32,
) -> ScrollerPosition {
    ScrollerPosition {
        handle_y: clamp_to_range(touch_y - handle_height / 2.0, viewport_height - handle_height),
        bubble_y: clamp_to_range(touch_y - handle_height, viewport_height - bubble_height),
    }
}

// =============================================================================
// Scroller -> List index
// =============================================================================

/// Proportion of the list the handle points at.
///
/// Pinned to 0 when the handle sits at the top and to 1 when its bottom edge is
/// within [`SCROLLER_MAX_POSITION_GAP`] of the widget bottom, since the handle's
/// own height eats into the travel range at both ends.
pub fn drag_proportion(handle_y: f32, handle_height: f32, viewport_height: f32, touch_y: f32) -> f32 {
    if handle_y == 0.0 {
        0.0
    } else if handle_y + handle_height >= viewport_height - SCROLLER_MAX_POSITION_GAP {
        1.0
    } else {
        let proportion = touch_y / viewport_height;
        if proportion.is_finite() {
            proportion
        } else {
            0.0
        }
    }
}

/// List index the dragged handle points at, or `None` for an empty list.
pub fn target_index(
    handle_y: f32,
    handle_height: f32,
    viewport_height: f32,
    touch_y: f32,
    item_count: usize,
) -> Option<usize> {
    if item_count == 0 {
        return None;
    }

    let proportion = drag_proportion(handle_y, handle_height, viewport_height, touch_y);
    let target = clamp_to_range(proportion * item_count as f32, (item_count - 1) as f32);
    Some(target.round() as usize)
}

// =============================================================================
// List scroll -> Scroller
// =============================================================================

/// Touch coordinate equivalent to the list's current scroll offset.
///
/// `scroll_range` is the full content height. When it does not exceed the
/// viewport there is nothing to scroll and the result is 0.
pub fn position_from_scroll_offset(scroll_offset: f32, scroll_range: f32, viewport_height: f32) -> f32 {
    let max_scroll = scroll_range - viewport_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }

    let proportion = scroll_offset / max_scroll;
    if !proportion.is_finite() {
        return 0.0;
    }
    viewport_height * proportion
}
