//! Fast scroller overlay for a vertical list.
//!
//! The widget owns a track along its right edge with a draggable handle, and a
//! bubble label that follows the handle. Dragging the handle jumps the list to
//! the matching item. Scrolling the list moves the handle. The track slides
//! away after a quiet period, and the bubble slides away as soon as the finger
//! lifts.
//!
//! All methods must be called from the thread that owns the widget. Timer
//! expiries reach the widget through [`FastScroll::poll_hide`], which the host
//! calls from its event loop.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::animation::{Animation, Animator, Part};
use crate::constants::{ANIMATION_TIME_BUBBLE, ANIMATION_TIME_HANDLE};
use crate::list::ListView;
use crate::position::{
    position_from_scroll_offset, position_from_touch, target_index, ScrollerPosition,
};
use crate::state::{Visibility, WidgetState};
use crate::style::FastScrollStyle;
use crate::timer::HideTimer;
use crate::{Color, EventStatus, Rectangle, TouchEvent};

/// Fast scroller widget.
pub struct FastScroll<A, T: HideTimer> {
    style: FastScrollStyle,
    state: WidgetState,
    /// Back reference to the list; the host owns it
    list: Option<Weak<RefCell<dyn ListView>>>,
    animator: A,
    hide_timer: T,
    bubble_text: String,
    /// Current handle tint (bubble color while dragging)
    handle_color: Color,
}

impl<A: Animator, T: HideTimer> FastScroll<A, T> {
    /// Create a detached scroller. Both parts start hidden.
    pub fn new(style: FastScrollStyle, animator: A, hide_timer: T) -> Self {
        let handle_color = style.handle_color;
        Self {
            style,
            state: WidgetState::new(),
            list: None,
            animator,
            hide_timer,
            bubble_text: String::new(),
            handle_color,
        }
    }

    // === Accessors ===

    pub fn style(&self) -> &FastScrollStyle {
        &self.style
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn is_handle_selected(&self) -> bool {
        self.state.handle_selected
    }

    pub fn handle_y(&self) -> f32 {
        self.state.handle_y
    }

    pub fn bubble_y(&self) -> f32 {
        self.state.bubble_y
    }

    pub fn track_visibility(&self) -> Visibility {
        self.state.track
    }

    pub fn bubble_visibility(&self) -> Visibility {
        self.state.bubble
    }

    /// Current handle tint.
    pub fn handle_color(&self) -> Color {
        self.handle_color
    }

    pub fn bubble_text(&self) -> &str {
        &self.bubble_text
    }

    /// Label shown in the bubble. The host decides what it says.
    pub fn set_bubble_text(&mut self, text: impl Into<String>) {
        self.bubble_text = text.into();
    }

    /// Whether a list is attached and still alive.
    pub fn has_list(&self) -> bool {
        self.live_list().is_some()
    }

    // === Host lifecycle ===

    /// Start following `list`. Only a weak reference is kept.
    pub fn attach_list<L: ListView + 'static>(&mut self, list: &Rc<RefCell<L>>) {
        let list: Rc<RefCell<dyn ListView>> = list.clone();
        self.list = Some(Rc::downgrade(&list));
        log::info!("Fast scroll attached to list");
    }

    /// Stop following the list. Scroll notifications become no-ops.
    pub fn detach_list(&mut self) {
        if self.list.take().is_some() {
            log::info!("Fast scroll detached from list");
        }
    }

    /// Tear down: drop the list and cancel any pending hide.
    pub fn detach(&mut self) {
        self.detach_list();
        self.hide_timer.cancel();
        log::debug!("Fast scroll detached, pending hide cancelled");
    }

    /// Record the widget's new size.
    pub fn on_size_changed(&mut self, width: f32, height: f32) {
        self.state.viewport_width = width;
        self.state.viewport_height = height;
        log::debug!("Fast scroll resized to {}x{}", width, height);
    }

    /// Hit region of the track: a full-height column along the right edge,
    /// shifted by [`Self::track_translation`].
    pub fn track_bounds(&self) -> Rectangle {
        let width = self.style.track_width.min(self.state.viewport_width);
        Rectangle::new(
            self.state.viewport_width - width + self.track_translation(),
            0.0,
            width,
            self.state.viewport_height,
        )
    }

    /// Horizontal translation of the track. A hidden track sits slid out by
    /// the handle width; it stays in place until its hide slide finishes.
    pub fn track_translation(&self) -> f32 {
        match self.state.track {
            Visibility::Hidden => self.style.handle_size.width,
            Visibility::Visible | Visibility::Hiding => 0.0,
        }
    }

    // === Touch ===

    /// Handle a touch event.
    ///
    /// Presses inside the track start a drag and are captured, as are moves
    /// during a drag. Release and cancel end the drag but are never captured,
    /// so the list underneath still sees them.
    pub fn on_touch(&mut self, event: &TouchEvent) -> EventStatus {
        match *event {
            TouchEvent::Pressed { position } => {
                if !self.track_bounds().contains(position) {
                    return EventStatus::Ignored;
                }

                self.state.handle_selected = true;
                self.show_bubble();
                self.show_track();
                self.handle_color = self.style.bubble_color;
                self.show_scroller(position.y);
                log::debug!("Fast scroll drag started at y={}", position.y);
                EventStatus::Captured
            }
            TouchEvent::Moved { position } => {
                if !self.state.handle_selected {
                    return EventStatus::Ignored;
                }

                self.show_scroller(position.y);
                self.hide_timer.pulse();
                EventStatus::Captured
            }
            TouchEvent::Released { .. } | TouchEvent::Cancelled => {
                if self.state.handle_selected {
                    log::debug!("Fast scroll drag ended");
                    // Restart the quiet period so a track shown by the press goes away
                    self.hide_timer.pulse();
                }
                self.state.handle_selected = false;
                self.hide_bubble();
                self.handle_color = self.style.handle_color;
                EventStatus::Ignored
            }
        }
    }

    // === List notifications ===

    /// The list scrolled by `(dx, dy)` pixels.
    pub fn on_list_scrolled(&mut self, _dx: f32, dy: f32) {
        if dy == 0.0 {
            return;
        }
        let Some(list) = self.live_list() else {
            return;
        };

        if !self.state.track.is_visible() {
            self.show_track();
        }
        self.update_bubble_and_handle_position(&list);
        self.hide_timer.pulse();
    }

    // === Timer / animation callbacks ===

    /// Deliver timer expiries. Returns true if the track started hiding.
    ///
    /// An expiry that arrives mid-drag is dropped, not rescheduled.
    pub fn poll_hide(&mut self) -> bool {
        if !self.hide_timer.poll_expired() {
            return false;
        }
        if self.state.handle_selected {
            log::trace!("Hide expiry dropped: handle selected");
            return false;
        }
        self.hide_track()
    }

    /// The host's animation on `part` ended or was cancelled.
    pub fn on_animation_finished(&mut self, part: Part) {
        let visibility = match part {
            Part::Track => &mut self.state.track,
            Part::Bubble => &mut self.state.bubble,
        };
        if *visibility == Visibility::Hiding {
            *visibility = Visibility::Hidden;
            log::trace!("{:?} hidden", part);
        }
    }

    // === Internals ===

    fn live_list(&self) -> Option<Rc<RefCell<dyn ListView>>> {
        self.list.as_ref()?.upgrade()
    }

    fn show_scroller(&mut self, touch_y: f32) {
        self.set_scroller_position(touch_y);
        self.set_list_position(touch_y);
    }

    fn set_scroller_position(&mut self, touch_y: f32) {
        let ScrollerPosition { handle_y, bubble_y } = position_from_touch(
            touch_y,
            self.state.viewport_height,
            self.style.handle_size.height,
            self.style.bubble_size.height,
        );
        self.state.handle_y = handle_y;
        self.state.bubble_y = bubble_y;
    }

    fn set_list_position(&mut self, touch_y: f32) {
        let Some(list) = self.live_list() else {
            return;
        };
        let Ok(mut list) = list.try_borrow_mut() else {
            log::warn!("List is busy, skipping fast scroll jump");
            return;
        };

        let Some(index) = target_index(
            self.state.handle_y,
            self.style.handle_size.height,
            self.state.viewport_height,
            touch_y,
            list.item_count(),
        ) else {
            return;
        };

        log::trace!("Fast scroll jump to item {}", index);
        list.scroll_to_position_with_offset(index, 0.0);
    }

    fn update_bubble_and_handle_position(&mut self, list: &Rc<RefCell<dyn ListView>>) {
        if self.state.handle_selected {
            return;
        }
        let Ok(list) = list.try_borrow() else {
            log::warn!("List is busy, skipping fast scroll update");
            return;
        };

        let touch_y = position_from_scroll_offset(
            list.vertical_scroll_offset(),
            list.vertical_scroll_range(),
            self.state.viewport_height,
        );
        drop(list);
        self.set_scroller_position(touch_y);
    }

    fn show_track(&mut self) {
        if self.state.track.is_shown() {
            return;
        }
        self.state.track = Visibility::Visible;
        self.animator.animate(Animation::slide_in(
            Part::Track,
            self.style.handle_size.width,
            ANIMATION_TIME_HANDLE,
        ));
    }

    fn hide_track(&mut self) -> bool {
        if !self.state.track.is_shown() {
            return false;
        }
        self.state.track = Visibility::Hiding;
        self.animator.animate(Animation::slide_out(
            Part::Track,
            self.style.handle_size.width,
            ANIMATION_TIME_HANDLE,
        ));
        true
    }

    fn show_bubble(&mut self) {
        if self.state.bubble.is_shown() {
            return;
        }
        self.state.bubble = Visibility::Visible;
        self.animator.animate(Animation::slide_in(
            Part::Bubble,
            self.style.bubble_size.width,
            ANIMATION_TIME_BUBBLE,
        ));
    }

    fn hide_bubble(&mut self) {
        if !self.state.bubble.is_shown() {
            return;
        }
        self.state.bubble = Visibility::Hiding;
        self.animator.animate(Animation::slide_out(
            Part::Bubble,
            self.style.bubble_size.width,
            ANIMATION_TIME_BUBBLE,
        ));
    }
}

impl<A, T: HideTimer> Drop for FastScroll<A, T> {
    fn drop(&mut self) {
        self.hide_timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimatedProperty;
    use crate::constants::HIDE_DELAY;
    use crate::timer::{ManualClock, PolledHideTimer, ThreadedHideTimer};
    use std::thread;
    use std::time::Duration;

    const WIDTH: f32 = 300.0;
    const HEIGHT: f32 = 1000.0;
    const TRACK_X: f32 = 290.0;

    #[derive(Default)]
    struct RecordingAnimator {
        started: Vec<Animation>,
    }

    impl Animator for RecordingAnimator {
        fn animate(&mut self, animation: Animation) {
            self.started.push(animation);
        }
    }

    struct TestList {
        item_count: usize,
        offset: f32,
        range: f32,
        jumps: Vec<(usize, f32)>,
    }

    impl TestList {
        fn new(item_count: usize, range: f32) -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                item_count,
                offset: 0.0,
                range,
                jumps: Vec::new(),
            }))
        }
    }

    impl ListView for TestList {
        fn item_count(&self) -> usize {
            self.item_count
        }

        fn vertical_scroll_offset(&self) -> f32 {
            self.offset
        }

        fn vertical_scroll_range(&self) -> f32 {
            self.range
        }

        fn scroll_to_position_with_offset(&mut self, index: usize, offset: f32) {
            self.jumps.push((index, offset));
        }
    }

    type TestScroll = FastScroll<RecordingAnimator, PolledHideTimer<ManualClock>>;

    fn scroller(clock: &ManualClock) -> TestScroll {
        let mut scroll = FastScroll::new(
            FastScrollStyle::default(),
            RecordingAnimator::default(),
            PolledHideTimer::with_clock(clock.clone()),
        );
        scroll.on_size_changed(WIDTH, HEIGHT);
        scroll
    }

    /// Slide the track in the way a user would see it: by scrolling the list.
    fn reveal_track<A: Animator, T: HideTimer>(scroll: &mut FastScroll<A, T>) {
        scroll.on_list_scrolled(0.0, 1.0);
        assert_eq!(scroll.track_visibility(), Visibility::Visible);
    }

    #[test]
    fn test_press_inside_track_starts_drag() {
        let clock = ManualClock::new();
        let list = TestList::new(1001, 40_040.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);
        reveal_track(&mut scroll);

        let status = scroll.on_touch(&TouchEvent::pressed(TRACK_X, 50.0));

        assert_eq!(status, EventStatus::Captured);
        assert!(scroll.is_handle_selected());
        assert_eq!(scroll.handle_y(), 30.0);
        assert_eq!(scroll.bubble_y(), 10.0);
        assert_eq!(list.borrow().jumps, vec![(50, 0.0)]);
        assert_eq!(scroll.bubble_visibility(), Visibility::Visible);
        assert_eq!(scroll.track_visibility(), Visibility::Visible);
        assert_eq!(scroll.handle_color(), scroll.style().bubble_color);
    }

    #[test]
    fn test_press_outside_track_is_ignored() {
        let clock = ManualClock::new();
        let list = TestList::new(100, 4000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);

        let status = scroll.on_touch(&TouchEvent::pressed(100.0, 50.0));

        assert_eq!(status, EventStatus::Ignored);
        assert!(!scroll.is_handle_selected());
        assert!(list.borrow().jumps.is_empty());
        assert_eq!(scroll.bubble_visibility(), Visibility::Hidden);
        assert!(scroll.animator().started.is_empty());
    }

    #[test]
    fn test_move_follows_finger_only_while_dragging() {
        let clock = ManualClock::new();
        let list = TestList::new(1000, 40_000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);

        assert_eq!(
            scroll.on_touch(&TouchEvent::moved(TRACK_X, 500.0)),
            EventStatus::Ignored
        );
        assert!(list.borrow().jumps.is_empty());

        reveal_track(&mut scroll);
        scroll.on_touch(&TouchEvent::pressed(TRACK_X, 10.0));
        let status = scroll.on_touch(&TouchEvent::moved(100.0, HEIGHT));

        assert_eq!(status, EventStatus::Captured);
        assert_eq!(scroll.handle_y(), HEIGHT - 40.0);
        assert_eq!(list.borrow().jumps, vec![(0, 0.0), (999, 0.0)]);
    }

    #[test]
    fn test_release_hides_bubble_immediately() {
        let clock = ManualClock::new();
        let list = TestList::new(100, 4000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);
        reveal_track(&mut scroll);

        scroll.on_touch(&TouchEvent::pressed(TRACK_X, 200.0));
        let status = scroll.on_touch(&TouchEvent::released(TRACK_X, 200.0));

        assert_eq!(status, EventStatus::Ignored);
        assert!(!scroll.is_handle_selected());
        assert_eq!(scroll.bubble_visibility(), Visibility::Hiding);
        assert_eq!(scroll.handle_color(), scroll.style().handle_color);

        let last = *scroll.animator().started.last().unwrap();
        assert_eq!(last.part, Part::Bubble);
        assert_eq!(last.property, AnimatedProperty::TranslationX);
        assert_eq!(last.to, scroll.style().bubble_size.width);
        assert_eq!(last.duration, ANIMATION_TIME_BUBBLE);

        scroll.on_animation_finished(Part::Bubble);
        assert_eq!(scroll.bubble_visibility(), Visibility::Hidden);
        // Track is untouched by the release
        assert_eq!(scroll.track_visibility(), Visibility::Visible);
    }

    #[test]
    fn test_cancel_behaves_like_release() {
        let clock = ManualClock::new();
        let list = TestList::new(100, 4000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);
        reveal_track(&mut scroll);

        scroll.on_touch(&TouchEvent::pressed(TRACK_X, 200.0));
        assert_eq!(scroll.on_touch(&TouchEvent::Cancelled), EventStatus::Ignored);
        assert!(!scroll.is_handle_selected());
        assert_eq!(scroll.bubble_visibility(), Visibility::Hiding);
    }

    #[test]
    fn test_hide_never_fires_while_dragging() {
        let clock = ManualClock::new();
        let list = TestList::new(100, 4000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);

        scroll.on_list_scrolled(0.0, 10.0);
        scroll.on_touch(&TouchEvent::pressed(TRACK_X, 200.0));
        clock.advance(HIDE_DELAY * 2);

        assert!(!scroll.poll_hide());
        assert_eq!(scroll.track_visibility(), Visibility::Visible);

        scroll.on_touch(&TouchEvent::released(TRACK_X, 200.0));
        scroll.on_list_scrolled(0.0, 10.0);
        clock.advance(HIDE_DELAY);

        assert!(scroll.poll_hide());
        assert_eq!(scroll.track_visibility(), Visibility::Hiding);
        let last = *scroll.animator().started.last().unwrap();
        assert_eq!(last.part, Part::Track);
        assert_eq!(last.duration, ANIMATION_TIME_HANDLE);

        scroll.on_animation_finished(Part::Track);
        assert_eq!(scroll.track_visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_scroll_pulses_reset_the_deadline() {
        let clock = ManualClock::new();
        let list = TestList::new(100, 4000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);

        scroll.on_list_scrolled(0.0, 5.0);
        clock.advance(Duration::from_millis(600));
        scroll.on_list_scrolled(0.0, 5.0);

        clock.advance(Duration::from_millis(400));
        assert!(!scroll.poll_hide());

        clock.advance(Duration::from_millis(600));
        assert!(scroll.poll_hide());

        clock.advance(HIDE_DELAY * 2);
        assert!(!scroll.poll_hide());
    }

    #[test]
    fn test_scroll_moves_handle_from_offset() {
        let clock = ManualClock::new();
        let list = TestList::new(75, 3000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);

        list.borrow_mut().offset = 1000.0;
        scroll.on_list_scrolled(0.0, 1000.0);

        assert_eq!(scroll.track_visibility(), Visibility::Visible);
        // touch equivalent = 1000 * 1000 / 2000 = 500
        assert_eq!(scroll.handle_y(), 480.0);
        assert_eq!(scroll.bubble_y(), 460.0);
    }

    #[test]
    fn test_zero_dy_scroll_is_ignored() {
        let clock = ManualClock::new();
        let list = TestList::new(75, 3000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);

        scroll.on_list_scrolled(12.0, 0.0);
        assert_eq!(scroll.track_visibility(), Visibility::Hidden);
        clock.advance(HIDE_DELAY);
        assert!(!scroll.poll_hide());
    }

    #[test]
    fn test_scroll_does_not_fight_drag() {
        let clock = ManualClock::new();
        let list = TestList::new(75, 3000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);
        reveal_track(&mut scroll);

        scroll.on_touch(&TouchEvent::pressed(TRACK_X, 100.0));
        list.borrow_mut().offset = 2000.0;
        scroll.on_list_scrolled(0.0, 2000.0);

        assert_eq!(scroll.handle_y(), 80.0);
    }

    #[test]
    fn test_scroll_range_equal_to_viewport() {
        let clock = ManualClock::new();
        let list = TestList::new(25, HEIGHT);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);

        list.borrow_mut().offset = 10.0;
        scroll.on_list_scrolled(0.0, 10.0);

        assert_eq!(scroll.handle_y(), 0.0);
        assert_eq!(scroll.bubble_y(), 0.0);
    }

    #[test]
    fn test_empty_list_skips_jump() {
        let clock = ManualClock::new();
        let list = TestList::new(0, 0.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);
        reveal_track(&mut scroll);

        assert_eq!(
            scroll.on_touch(&TouchEvent::pressed(TRACK_X, 500.0)),
            EventStatus::Captured
        );
        assert!(list.borrow().jumps.is_empty());
    }

    #[test]
    fn test_without_list_is_inert() {
        let clock = ManualClock::new();
        let mut scroll = scroller(&clock);
        assert!(!scroll.has_list());

        scroll.on_list_scrolled(0.0, 50.0);
        assert_eq!(scroll.track_visibility(), Visibility::Hidden);

        // Nothing ever slid the track in, so there is nothing to grab
        assert_eq!(
            scroll.on_touch(&TouchEvent::pressed(TRACK_X, 500.0)),
            EventStatus::Ignored
        );
    }

    #[test]
    fn test_dropped_list_is_inert() {
        let clock = ManualClock::new();
        let list = TestList::new(100, 4000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);
        reveal_track(&mut scroll);
        drop(list);

        assert!(!scroll.has_list());
        let handle_before = scroll.handle_y();
        scroll.on_list_scrolled(0.0, 50.0);
        assert_eq!(scroll.handle_y(), handle_before);

        // Dragging still moves the handle, there is just no list to jump
        assert!(scroll.on_touch(&TouchEvent::pressed(TRACK_X, 500.0)).is_captured());
        assert_eq!(scroll.handle_y(), 480.0);
    }

    #[test]
    fn test_detach_cancels_pending_hide() {
        let clock = ManualClock::new();
        let list = TestList::new(100, 4000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);

        scroll.on_list_scrolled(0.0, 10.0);
        scroll.detach();
        clock.advance(HIDE_DELAY * 2);

        assert!(!scroll.poll_hide());
        assert!(!scroll.has_list());

        list.borrow_mut().offset = 3000.0;
        let handle_before = scroll.handle_y();
        scroll.on_list_scrolled(0.0, 10.0);
        assert_eq!(scroll.handle_y(), handle_before);
    }

    #[test]
    fn test_show_is_not_repeated_while_visible() {
        let clock = ManualClock::new();
        let list = TestList::new(100, 4000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);

        scroll.on_list_scrolled(0.0, 10.0);
        scroll.on_list_scrolled(0.0, 10.0);
        scroll.on_touch(&TouchEvent::pressed(TRACK_X, 200.0));
        scroll.on_touch(&TouchEvent::moved(TRACK_X, 300.0));

        let track_slides = scroll
            .animator()
            .started
            .iter()
            .filter(|a| a.part == Part::Track)
            .count();
        assert_eq!(track_slides, 1);
    }

    #[test]
    fn test_scroll_during_hide_lets_slide_finish() {
        let clock = ManualClock::new();
        let list = TestList::new(100, 4000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);

        scroll.on_list_scrolled(0.0, 10.0);
        clock.advance(HIDE_DELAY);
        assert!(scroll.poll_hide());

        // Still visible while sliding out, so no second show
        scroll.on_list_scrolled(0.0, 10.0);
        assert_eq!(scroll.track_visibility(), Visibility::Hiding);
        scroll.on_animation_finished(Part::Track);
        assert_eq!(scroll.track_visibility(), Visibility::Hidden);

        scroll.on_list_scrolled(0.0, 10.0);
        assert_eq!(scroll.track_visibility(), Visibility::Visible);
        let track_slides = scroll
            .animator()
            .started
            .iter()
            .filter(|a| a.part == Part::Track)
            .count();
        assert_eq!(track_slides, 3);
    }

    #[test]
    fn test_press_on_slid_out_track_is_ignored() {
        let clock = ManualClock::new();
        let list = TestList::new(100, 4000.0);
        let mut scroll = scroller(&clock);
        scroll.attach_list(&list);

        reveal_track(&mut scroll);
        assert_eq!(scroll.track_bounds().x, WIDTH - 24.0);

        clock.advance(HIDE_DELAY);
        assert!(scroll.poll_hide());
        // Mid-slide the track can still be grabbed
        assert_eq!(scroll.track_bounds().x, WIDTH - 24.0);

        scroll.on_animation_finished(Part::Track);
        assert_eq!(scroll.track_visibility(), Visibility::Hidden);
        assert_eq!(scroll.track_bounds().x, WIDTH);

        let status = scroll.on_touch(&TouchEvent::pressed(TRACK_X, 500.0));
        assert_eq!(status, EventStatus::Ignored);
        assert!(!scroll.is_handle_selected());
        assert!(list.borrow().jumps.is_empty());
    }

    // === Background timer thread ===

    const THREAD_DELAY: Duration = Duration::from_millis(20);
    const THREAD_SETTLE: Duration = Duration::from_millis(200);

    fn threaded_scroller(
        list: &Rc<RefCell<TestList>>,
    ) -> FastScroll<RecordingAnimator, ThreadedHideTimer> {
        let timer = ThreadedHideTimer::spawn_with_delay(THREAD_DELAY).unwrap();
        let mut scroll = FastScroll::new(
            FastScrollStyle::default(),
            RecordingAnimator::default(),
            timer,
        );
        scroll.on_size_changed(WIDTH, HEIGHT);
        scroll.attach_list(list);
        scroll
    }

    #[test]
    fn test_threaded_timer_hides_after_scroll() {
        let list = TestList::new(100, 4000.0);
        let mut scroll = threaded_scroller(&list);

        scroll.on_list_scrolled(0.0, 10.0);

        thread::sleep(THREAD_SETTLE);
        assert!(scroll.poll_hide());
        assert_eq!(scroll.track_visibility(), Visibility::Hiding);
    }

    #[test]
    fn test_threaded_timer_waits_for_held_handle() {
        let list = TestList::new(100, 4000.0);
        let mut scroll = threaded_scroller(&list);

        reveal_track(&mut scroll);
        scroll.on_touch(&TouchEvent::pressed(TRACK_X, 200.0));
        scroll.on_touch(&TouchEvent::moved(TRACK_X, 300.0));

        thread::sleep(THREAD_SETTLE);
        assert!(!scroll.poll_hide());
        assert_eq!(scroll.track_visibility(), Visibility::Visible);

        scroll.on_touch(&TouchEvent::released(TRACK_X, 300.0));
        thread::sleep(THREAD_SETTLE);
        assert!(scroll.poll_hide());
    }

    #[test]
    fn test_threaded_timer_detach_discards_expiry() {
        let list = TestList::new(100, 4000.0);
        let mut scroll = threaded_scroller(&list);

        scroll.on_list_scrolled(0.0, 10.0);
        scroll.detach();

        thread::sleep(THREAD_SETTLE);
        assert!(!scroll.poll_hide());
        assert_eq!(scroll.track_visibility(), Visibility::Visible);
    }
}
