//! The demo screen: a sample list with a fast scroller on top.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;
use std::time::Duration;

use lvscroll_ui::{
    Clock, EventStatus, FastScroll, ListView, Part, PolledHideTimer, TouchEvent, Visibility,
};

use crate::animator::TweenAnimator;
use crate::config::DemoConfig;
use crate::constants::TEXT_COLUMN_WIDTH;
use crate::sample::{sample_items, SampleList};

/// Demo screen state.
pub struct DemoApp<C: Clock> {
    list: Rc<RefCell<SampleList>>,
    scroll: FastScroll<TweenAnimator, PolledHideTimer<C>>,
}

impl<C: Clock> DemoApp<C> {
    /// Build the screen from `config`, timing the scroller on `clock`.
    pub fn new(config: &DemoConfig, clock: C) -> Self {
        let list = Rc::new(RefCell::new(SampleList::new(
            sample_items(config.last_item),
            config.item_height,
            config.viewport.height,
        )));

        let mut scroll = FastScroll::new(
            config.style.clone(),
            TweenAnimator::new(),
            PolledHideTimer::with_clock(clock),
        );
        scroll.on_size_changed(config.viewport.width, config.viewport.height);
        scroll.attach_list(&list);

        log::info!(
            "Demo screen ready: {} items, {}x{} viewport",
            list.borrow().item_count(),
            config.viewport.width,
            config.viewport.height
        );

        Self { list, scroll }
    }

    pub fn list(&self) -> &Rc<RefCell<SampleList>> {
        &self.list
    }

    pub fn scroll(&self) -> &FastScroll<TweenAnimator, PolledHideTimer<C>> {
        &self.scroll
    }

    /// Route a touch to the scroller, then deliver any scroll it caused.
    pub fn touch(&mut self, event: TouchEvent) -> EventStatus {
        let status = self.scroll.on_touch(&event);
        self.dispatch_scroll_events();
        status
    }

    /// Scroll the list directly, as a finger fling on the list would.
    pub fn fling(&mut self, dy: f32) {
        self.list.borrow_mut().scroll_by(dy);
        self.dispatch_scroll_events();
    }

    /// Advance animations by `dt` and deliver any timer expiry.
    pub fn frame(&mut self, dt: Duration) {
        self.scroll.poll_hide();
        let finished = self.scroll.animator_mut().advance(dt);
        for part in finished {
            self.scroll.on_animation_finished(part);
        }
    }

    /// Deliver queued list scroll callbacks: the screen's own bubble-text
    /// listener first, then the scroller.
    fn dispatch_scroll_events(&mut self) {
        loop {
            let Some(dy) = self.list.borrow_mut().take_scroll_delta() else {
                break;
            };
            self.update_bubble_text();
            self.scroll.on_list_scrolled(0.0, dy);
        }
    }

    /// Bubble shows the first character of the first fully visible item.
    fn update_bubble_text(&mut self) {
        let label = {
            let list = self.list.borrow();
            match list.first_completely_visible_position() {
                Some(position) if position > 0 => {
                    list.items()[position].chars().next().map(String::from)
                }
                _ => None,
            }
        };
        if let Some(label) = label {
            self.scroll.set_bubble_text(label);
        }
    }

    /// Render the screen as text, one line per list row.
    pub fn render(&self) -> String {
        let list = self.list.borrow();
        let item_height = list.item_height();
        let state = self.scroll.state();
        let style = self.scroll.style();

        let overlaps = |row_y: f32, top: f32, height: f32| {
            top < row_y + item_height && top + height > row_y
        };

        let mut screen = String::new();
        for (row_y, item) in list.visible_rows() {
            let bubble = if state.bubble.is_visible()
                && overlaps(row_y, state.bubble_y, style.bubble_size.height)
            {
                format!("({})", self.scroll.bubble_text())
            } else {
                String::new()
            };

            let track = match state.track {
                Visibility::Hidden => "   ",
                _ if overlaps(row_y, state.handle_y, style.handle_size.height) => {
                    if state.handle_selected {
                        "[#]"
                    } else {
                        "[=]"
                    }
                }
                Visibility::Hiding => " : ",
                Visibility::Visible => " | ",
            };

            let _ = writeln!(
                screen,
                "{:<width$}{:>5} {}",
                item,
                bubble,
                track,
                width = TEXT_COLUMN_WIDTH
            );
        }

        let _ = writeln!(
            screen,
            "offset {:.0} | track {:?} (x+{:.0}) | bubble {:?}",
            list.vertical_scroll_offset(),
            state.track,
            self.scroll.animator().translation_x(Part::Track),
            state.bubble
        );
        screen
    }
}
