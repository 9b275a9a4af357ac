// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Payload-free wrapper for the "move this thing under the pointer" case.

use core::fmt;

use kurbo::Point;

use crate::callbacks::DragCallbacks;
use crate::controller::DragController;
use crate::event::{EventResponse, PointerEvent};
use crate::surface::MotionSurface;

/// A drag tracker with a single position callback and a moving flag.
///
/// Wraps a [`DragController`] with a unit payload: no per-session data, just
/// "the pointer is down and moving, keep me posted". The press handler
/// always requests [`EventResponse::PREVENT_DEFAULT`] on the press itself
/// (a pressed draggable should not start a text selection or a scroll), in
/// addition to whatever the motion options request.
///
/// ```
/// use dragline_controller::{NullSurface, PointerEvent, SimpleDrag};
/// use kurbo::Point;
///
/// let mut drag = SimpleDrag::new(NullSurface, |pos: Point| {
///     // Position the dragged element at `pos`.
/// });
///
/// drag.press();
/// assert!(drag.moving());
/// drag.motion(&PointerEvent::at(Point::new(4.0, 2.0)));
/// drag.release();
/// assert!(!drag.moving());
/// ```
pub struct SimpleDrag<S: MotionSurface> {
    inner: DragController<(), S>,
}

impl<S: MotionSurface> SimpleDrag<S> {
    /// Creates an idle tracker; `update` receives every forwarded position.
    pub fn new(surface: S, mut update: impl FnMut(Point) + 'static) -> Self {
        let callbacks = DragCallbacks::new().on_motion(move |pos, _: &()| update(pos));
        Self {
            inner: DragController::new(surface, callbacks),
        }
    }

    /// The press-start handler for the host element's pointer-down.
    pub fn press(&mut self) -> EventResponse {
        self.inner.press(()) | EventResponse::PREVENT_DEFAULT
    }

    /// Handles an ambient move event; see [`DragController::motion`].
    pub fn motion(&mut self, event: &PointerEvent) -> EventResponse {
        self.inner.motion(event)
    }

    /// Handles an ambient release or cancel event; see
    /// [`DragController::release`].
    pub fn release(&mut self) -> EventResponse {
        self.inner.release()
    }

    /// Returns `true` while the element is being dragged.
    #[must_use]
    pub fn moving(&self) -> bool {
        self.inner.is_dragging()
    }

    /// Returns a reference to the host surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        self.inner.surface()
    }
}

impl<S: MotionSurface> fmt::Debug for SimpleDrag<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleDrag")
            .field("moving", &self.moving())
            .finish_non_exhaustive()
    }
}
