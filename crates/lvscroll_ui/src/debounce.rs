//! Hide debouncing for the fast scroller.
//!
//! Every drag move and list scroll "pulses" the debouncer. Only the latest
//! pulse counts: once a full quiet period has passed since it, the debouncer
//! reports a single expiry and goes back to idle.

use std::time::Duration;
use web_time::Instant;

use crate::constants::HIDE_DELAY;

/// Debounce state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceState {
    /// No hide pending
    #[default]
    Idle,
    /// Hide due at the deadline unless another pulse arrives first
    PendingHide { deadline: Instant },
}

/// Most-recent-wins deadline tracker.
#[derive(Debug, Clone)]
pub struct HideDebouncer {
    /// Quiet period required before an expiry.
    delay: Duration,

    state: DebounceState,
}

impl HideDebouncer {
    /// Create a debouncer with [`HIDE_DELAY`].
    pub fn new() -> Self {
        Self::with_delay(HIDE_DELAY)
    }

    /// Create a debouncer with a custom quiet period.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    /// Quiet period required before an expiry.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current state.
    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Pending deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            DebounceState::PendingHide { deadline } => Some(deadline),
            DebounceState::Idle => None,
        }
    }

    /// Whether a hide is pending.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::PendingHide { .. })
    }

    /// Push the deadline out to `now + delay`.
    pub fn pulse(&mut self, now: Instant) {
        self.state = DebounceState::PendingHide {
            deadline: now + self.delay,
        };
        log::trace!("Hide debounce: pulse");
    }

    /// Returns true exactly once when the deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            DebounceState::PendingHide { deadline } if now >= deadline => {
                self.state = DebounceState::Idle;
                log::trace!("Hide debounce: expired");
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, if one is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        if self.is_pending() {
            log::trace!("Hide debounce: cancelled");
        }
        self.state = DebounceState::Idle;
    }
}

impl Default for HideDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
