//! Animation requests issued by the fast scroller.
//!
//! The widget does not tween anything itself. It describes each slide as an
//! [`Animation`] and hands it to the host's [`Animator`]. When an animation ends
//! (or is cancelled) the host reports back through
//! [`FastScroll::on_animation_finished`](crate::FastScroll::on_animation_finished).

use std::time::Duration;

/// The visual parts of the scroller that animate independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// Track column, including the handle riding on it
    Track,
    /// Floating label next to the handle
    Bubble,
}

/// Animatable properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatedProperty {
    /// Horizontal offset from the laid-out position
    TranslationX,
}

/// A single property animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub part: Part,
    pub property: AnimatedProperty,
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
}

impl Animation {
    /// Slide `part` in from `offset` pixels to the right.
    pub fn slide_in(part: Part, offset: f32, duration: Duration) -> Self {
        Self {
            part,
            property: AnimatedProperty::TranslationX,
            from: offset,
            to: 0.0,
            duration,
        }
    }

    /// Slide `part` out by `offset` pixels to the right.
    pub fn slide_out(part: Part, offset: f32, duration: Duration) -> Self {
        Self {
            part,
            property: AnimatedProperty::TranslationX,
            from: 0.0,
            to: offset,
            duration,
        }
    }

    /// Value of the property `elapsed` into the animation, linearly interpolated.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }
}

/// Host capability that plays animations.
pub trait Animator {
    /// Start `animation`, replacing any running animation on the same part.
    fn animate(&mut self, animation: Animation);
}

impl<A: Animator + ?Sized> Animator for Box<A> {
    fn animate(&mut self, animation: Animation) {
        (**self).animate(animation);
    }
}
