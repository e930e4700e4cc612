//! lvscroll_ui - A fast scroller overlay for vertical lists
//!
//! The crate is headless: it owns the scroller's state, position math and
//! auto-hide timing, and asks the host to play animations and move the list.

mod animation;
mod color;
mod constants;
mod debounce;
mod event;
mod fast_scroll;
mod layout;
mod list;
mod position;
mod state;
mod style;
mod timer;

pub use animation::{AnimatedProperty, Animation, Animator, Part};
pub use color::Color;
pub use constants::*;
pub use debounce::{DebounceState, HideDebouncer};
pub use event::{EventStatus, TouchEvent};
pub use fast_scroll::FastScroll;
pub use layout::{Point, Rectangle, Size};
pub use list::ListView;
pub use position::{
    clamp_to_range, drag_proportion, position_from_scroll_offset, position_from_touch,
    target_index, ScrollerPosition,
};
pub use state::{Visibility, WidgetState};
pub use style::FastScrollStyle;
pub use timer::{
    Clock, HideTimer, ManualClock, PolledHideTimer, SystemClock, ThreadedHideTimer, TimerError,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::animation::{Animation, Animator, Part};
    pub use crate::event::{EventStatus, TouchEvent};
    pub use crate::fast_scroll::FastScroll;
    pub use crate::list::ListView;
    pub use crate::style::FastScrollStyle;
    pub use crate::timer::{HideTimer, PolledHideTimer, ThreadedHideTimer};
    pub use crate::Color;
}
