//! Scripted interaction for the demo binary.

use std::time::Duration;

use lvscroll_ui::{ManualClock, TouchEvent};

use crate::app::DemoApp;
use crate::config::DemoConfig;
use crate::constants::FRAME_TIME_MS;

/// One step of a scripted session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Deliver a touch event
    Touch(TouchEvent),
    /// Scroll the list directly
    Fling(f32),
    /// Let time pass, frame by frame
    Wait(Duration),
}

/// Drag the handle down the track, let go, fling, then sit idle.
pub fn demo_script(config: &DemoConfig) -> Vec<Step> {
    let track_x = config.viewport.width - config.style.track_width / 2.0;
    let height = config.viewport.height;

    vec![
        Step::Fling(600.0),
        Step::Wait(Duration::from_millis(300)),
        Step::Touch(TouchEvent::pressed(track_x, height * 0.1)),
        Step::Touch(TouchEvent::moved(track_x, height * 0.3)),
        Step::Touch(TouchEvent::moved(track_x, height * 0.6)),
        Step::Wait(Duration::from_millis(1500)),
        Step::Touch(TouchEvent::moved(track_x, height)),
        Step::Touch(TouchEvent::released(track_x, height)),
        Step::Wait(Duration::from_millis(1600)),
        Step::Fling(-1200.0),
        Step::Wait(Duration::from_millis(1600)),
    ]
}

/// Play `steps` on `app`, calling `on_frame` with the rendered screen after
/// every touch or fling and at the end of every wait.
pub fn play(
    app: &mut DemoApp<ManualClock>,
    clock: &ManualClock,
    steps: &[Step],
    mut on_frame: impl FnMut(&Step, String),
) {
    let frame_time = Duration::from_millis(FRAME_TIME_MS);

    for step in steps {
        match *step {
            Step::Touch(event) => {
                let status = app.touch(event);
                log::debug!("{:?} -> {:?}", event, status);
            }
            Step::Fling(dy) => app.fling(dy),
            Step::Wait(total) => {
                let mut waited = Duration::ZERO;
                while waited < total {
                    clock.advance(frame_time);
                    app.frame(frame_time);
                    waited += frame_time;
                }
            }
        }
        on_frame(step, app.render());
    }
}
