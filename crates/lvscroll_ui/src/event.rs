use crate::Point;

/// Touch events delivered to the fast scroller, in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Finger down.
    Pressed { position: Point },
    /// Finger moved while down.
    Moved { position: Point },
    /// Finger lifted.
    Released { position: Point },
    /// Gesture taken away by the platform (treated like a release).
    Cancelled,
}

impl TouchEvent {
    pub fn pressed(x: f32, y: f32) -> Self {
        TouchEvent::Pressed {
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        TouchEvent::Moved {
            position: Point::new(x, y),
        }
    }

    pub fn released(x: f32, y: f32) -> Self {
        TouchEvent::Released {
            position: Point::new(x, y),
        }
    }
}

/// Whether the widget consumed an event or let it through to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The widget handled the event.
    Captured,
    /// The host (the list underneath) should process the event.
    Ignored,
}

impl EventStatus {
    pub fn is_captured(self) -> bool {
        matches!(self, EventStatus::Captured)
    }
}
