//! Frame-stepped animator for the demo screen.

use std::collections::HashMap;
use std::time::Duration;

use lvscroll_ui::{Animation, Animator, Part};

/// Plays scroller animations by linear interpolation, one frame at a time.
#[derive(Debug, Default)]
pub struct TweenAnimator {
    running: HashMap<Part, (Animation, Duration)>,
    /// Translation of each part once its animation has settled
    settled: HashMap<Part, f32>,
}

impl TweenAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current horizontal translation of `part`.
    pub fn translation_x(&self, part: Part) -> f32 {
        match self.running.get(&part) {
            Some((animation, elapsed)) => animation.value_at(*elapsed),
            None => self.settled.get(&part).copied().unwrap_or(0.0),
        }
    }

    pub fn is_running(&self, part: Part) -> bool {
        self.running.contains_key(&part)
    }

    /// Advance every running animation by `dt`. Returns the parts that finished.
    pub fn advance(&mut self, dt: Duration) -> Vec<Part> {
        let mut finished = Vec::new();
        for (part, (animation, elapsed)) in self.running.iter_mut() {
            *elapsed += dt;
            if *elapsed >= animation.duration {
                finished.push(*part);
            }
        }

        for part in &finished {
            if let Some((animation, _)) = self.running.remove(part) {
                self.settled.insert(*part, animation.to);
                log::trace!("{:?} animation finished at {}", part, animation.to);
            }
        }
        finished
    }
}

impl Animator for TweenAnimator {
    fn animate(&mut self, animation: Animation) {
        if self.running.contains_key(&animation.part) {
            log::trace!("Replacing running {:?} animation", animation.part);
        }
        self.running
            .insert(animation.part, (animation, Duration::ZERO));
    }
}
