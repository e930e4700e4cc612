//! Hide timers that drive a [`HideDebouncer`].
//!
//! The fast scroller only ever talks to the [`HideTimer`] trait from the UI
//! thread. Two implementations are provided:
//!
//! - [`PolledHideTimer`] checks the deadline against a [`Clock`] whenever the
//!   host polls it, which suits hosts that already run a frame loop.
//! - [`ThreadedHideTimer`] keeps the deadline on a background thread and hands
//!   the expiry back over a channel. The expiry is only observed when the UI
//!   thread polls, so the hide itself always runs on the UI thread.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use web_time::Instant;

use crate::constants::HIDE_DELAY;
use crate::debounce::HideDebouncer;

/// Scheduler for the debounced hide of the track.
pub trait HideTimer {
    /// Restart the quiet period.
    fn pulse(&mut self);

    /// Returns true once per expired quiet period. Called on the UI thread.
    fn poll_expired(&mut self) -> bool;

    /// Drop any pending deadline and any expiry not yet observed.
    fn cancel(&mut self);
}

/// Errors that can occur when setting up a hide timer.
#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    /// The background thread could not be started
    #[error("Failed to spawn hide timer thread: {0}")]
    Spawn(#[from] std::io::Error),
}

// =============================================================================
// Clocks
// =============================================================================

/// Source of the current time for [`PolledHideTimer`].
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Start at the current instant.
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

// =============================================================================
// Polled timer
// =============================================================================

/// Hide timer checked from the host's frame loop.
#[derive(Debug, Clone)]
pub struct PolledHideTimer<C: Clock = SystemClock> {
    debouncer: HideDebouncer,
    clock: C,
}

impl PolledHideTimer<SystemClock> {
    /// Timer on the wall clock with [`HIDE_DELAY`].
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for PolledHideTimer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PolledHideTimer<C> {
    /// Timer on a custom clock with [`HIDE_DELAY`].
    pub fn with_clock(clock: C) -> Self {
        Self {
            debouncer: HideDebouncer::with_delay(HIDE_DELAY),
            clock,
        }
    }

    /// Override the quiet period.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.debouncer = HideDebouncer::with_delay(delay);
        self
    }

    /// Whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

impl<C: Clock> HideTimer for PolledHideTimer<C> {
    fn pulse(&mut self) {
        self.debouncer.pulse(self.clock.now());
    }

    fn poll_expired(&mut self) -> bool {
        self.debouncer.poll(self.clock.now())
    }

    fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}

// =============================================================================
// Threaded timer
// =============================================================================

/// Message sent to the timer thread.
enum TimerMessage {
    /// Restart the quiet period; the expiry will carry this generation
    Pulse(u64),
    /// Drop the pending deadline
    Cancel,
    /// Stop the thread
    Shutdown,
}

/// Hide timer whose deadline runs on a background thread.
pub struct ThreadedHideTimer {
    /// Commands for the background thread
    command_tx: Sender<TimerMessage>,
    /// Expiries from the background thread, tagged with the pulse generation
    expired_rx: Receiver<u64>,
    /// Handle to the background thread (for joining on drop)
    thread_handle: Option<JoinHandle<()>>,
    /// Bumped on cancel so expiries already in flight are ignored
    generation: u64,
}

impl ThreadedHideTimer {
    /// Spawn a timer thread with [`HIDE_DELAY`].
    pub fn spawn() -> Result<Self, TimerError> {
        Self::spawn_with_delay(HIDE_DELAY)
    }

    /// Spawn a timer thread with a custom quiet period.
    pub fn spawn_with_delay(delay: Duration) -> Result<Self, TimerError> {
        let (command_tx, command_rx) = mpsc::channel::<TimerMessage>();
        let (expired_tx, expired_rx) = mpsc::channel::<u64>();

        let thread_handle = thread::Builder::new()
            .name("fast-scroll-hide".to_string())
            .spawn(move || {
                log::debug!("Hide timer thread started");
                Self::thread_loop(delay, command_rx, expired_tx);
                log::debug!("Hide timer thread exiting");
            })?;

        Ok(Self {
            command_tx,
            expired_rx,
            thread_handle: Some(thread_handle),
            generation: 0,
        })
    }

    /// Background thread main loop.
    fn thread_loop(delay: Duration, command_rx: Receiver<TimerMessage>, expired_tx: Sender<u64>) {
        let mut debouncer = HideDebouncer::with_delay(delay);
        let mut armed_generation = 0;

        loop {
            let message = match debouncer.remaining(Instant::now()) {
                Some(wait) => match command_rx.recv_timeout(wait) {
                    Ok(message) => Some(message),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                },
                None => match command_rx.recv() {
                    Ok(message) => Some(message),
                    Err(_) => break,
                },
            };

            match message {
                Some(TimerMessage::Pulse(generation)) => {
                    armed_generation = generation;
                    debouncer.pulse(Instant::now());
                }
                Some(TimerMessage::Cancel) => debouncer.cancel(),
                Some(TimerMessage::Shutdown) => {
                    log::trace!("Hide timer received shutdown signal");
                    break;
                }
                None => {
                    if debouncer.poll(Instant::now()) && expired_tx.send(armed_generation).is_err() {
                        log::debug!("Expiry channel closed, hide timer exiting");
                        break;
                    }
                }
            }
        }
    }

    fn send(&self, message: TimerMessage) {
        if self.command_tx.send(message).is_err() {
            log::warn!("Hide timer thread is gone, dropping command");
        }
    }
}

impl HideTimer for ThreadedHideTimer {
    fn pulse(&mut self) {
        self.send(TimerMessage::Pulse(self.generation));
    }

    fn poll_expired(&mut self) -> bool {
        let mut expired = false;
        loop {
            match self.expired_rx.try_recv() {
                Ok(generation) => expired |= generation == self.generation,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Hide timer thread disconnected");
                    break;
                }
            }
        }
        expired
    }

    fn cancel(&mut self) {
        self.generation += 1;
        self.send(TimerMessage::Cancel);
    }
}

impl Drop for ThreadedHideTimer {
    fn drop(&mut self) {
        log::debug!("Shutting down hide timer thread");

        let _ = self.command_tx.send(TimerMessage::Shutdown);

        if let Some(handle) = self.thread_handle.take() {
            if let Err(e) = handle.join() {
                log::warn!("Hide timer thread panicked: {:?}", e);
            }
        }
    }
}
