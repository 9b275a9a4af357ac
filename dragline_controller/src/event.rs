// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-delivered pointer events and the controller's response flags.

use kurbo::Point;

bitflags::bitflags! {
    /// Host-side reactions the controller requests for a forwarded event.
    ///
    /// Returned from [`DragController::press`](crate::DragController::press)
    /// and [`DragController::motion`](crate::DragController::motion); the
    /// host applies the flags to the originating event after dispatch
    /// (`preventDefault`/`stopPropagation` in DOM terms, or their
    /// equivalents). An empty response means the event was not consumed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventResponse: u8 {
        /// Suppress the event's default action.
        const PREVENT_DEFAULT = 1 << 0;
        /// Stop the event from propagating further.
        const STOP_PROPAGATION = 1 << 1;
    }
}

/// A pointer event delivered by the host input surface.
///
/// The position is optional: some inputs cannot resolve a primary contact
/// point (for example a touch-move whose tracked contact has lifted). The
/// controller silently drops motion events without a position — no callback
/// fires and the session's moved state does not advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The pointer position in the host's coordinate space, if resolvable.
    pub position: Option<Point>,
}

impl PointerEvent {
    /// Creates an event at the given position.
    #[must_use]
    pub const fn at(position: Point) -> Self {
        Self {
            position: Some(position),
        }
    }

    /// Creates an event whose primary contact point could not be resolved.
    #[must_use]
    pub const fn unresolved() -> Self {
        Self { position: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_carries_position() {
        let ev = PointerEvent::at(Point::new(3.0, 4.0));
        assert_eq!(ev.position, Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn unresolved_has_no_position() {
        assert_eq!(PointerEvent::unresolved().position, None);
    }

    #[test]
    fn response_flags_compose() {
        let all = EventResponse::PREVENT_DEFAULT | EventResponse::STOP_PROPAGATION;
        assert!(all.contains(EventResponse::PREVENT_DEFAULT));
        assert!(all.contains(EventResponse::STOP_PROPAGATION));
        assert!(EventResponse::empty().is_empty());
    }
}
