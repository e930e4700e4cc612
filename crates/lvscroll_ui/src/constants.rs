//! Centralized constants for lvscroll_ui
//!
//! Timing and geometry values shared by the fast scroller and its helpers.

use std::time::Duration;

// =============================================================================
// Timing
// =============================================================================

/// Quiet period after the last scroll/drag before the track slides away
pub const HIDE_DELAY: Duration = Duration::from_secs(1);

/// Duration of the track show/hide slide
pub const ANIMATION_TIME_HANDLE: Duration = Duration::from_millis(400);

/// Duration of the bubble show/hide slide
pub const ANIMATION_TIME_BUBBLE: Duration = Duration::from_millis(150);

// =============================================================================
// Geometry
// =============================================================================

/// Tolerance in pixels for treating the handle as pinned to the bottom
pub const SCROLLER_MAX_POSITION_GAP: f32 = 5.0;

/// Default width of the track column
pub const DEFAULT_TRACK_WIDTH: f32 = 24.0;

/// Default handle height
pub const DEFAULT_HANDLE_HEIGHT: f32 = 40.0;

/// Default handle width
pub const DEFAULT_HANDLE_WIDTH: f32 = 24.0;

/// Default bubble height
pub const DEFAULT_BUBBLE_HEIGHT: f32 = 48.0;

/// Default bubble width
pub const DEFAULT_BUBBLE_WIDTH: f32 = 48.0;
