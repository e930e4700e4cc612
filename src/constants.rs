//! Global constants for the lvscroll demo

use lvscroll_ui::Size;

/// The sample list holds the numbers `0..=DEFAULT_LAST_ITEM`
pub const DEFAULT_LAST_ITEM: usize = 1000;

/// Height of one list row
pub const DEFAULT_ITEM_HEIGHT: f32 = 50.0;

/// Size of the demo screen
pub const DEFAULT_VIEWPORT: Size = Size {
    width: 360.0,
    height: 600.0,
};

/// Simulated frame time for the scripted session
pub const FRAME_TIME_MS: u64 = 50;

/// Width of the text-rendered list column, in characters
pub const TEXT_COLUMN_WIDTH: usize = 12;
