// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag-session controller: arming, dispatch, and listener lifecycle.

use core::fmt;

use dragline_session::{DragSession, MotionClass, ReleaseClass};

use crate::callbacks::DragCallbacks;
use crate::event::{EventResponse, PointerEvent};
use crate::surface::{Interest, MotionSurface};

/// How the controller answers forwarded press/motion events.
///
/// Both options default to `true`, matching the common case of a drag target
/// that should neither scroll the page nor let the event reach ancestors
/// while a gesture is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOptions {
    /// Request suppression of the event's default action.
    pub prevent_default: bool,
    /// Request that the event stop propagating.
    pub stop_propagation: bool,
}

impl DragOptions {
    fn response(&self) -> EventResponse {
        let mut response = EventResponse::empty();
        if self.prevent_default {
            response |= EventResponse::PREVENT_DEFAULT;
        }
        if self.stop_propagation {
            response |= EventResponse::STOP_PROPAGATION;
        }
        response
    }
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: true,
        }
    }
}

/// Tracks one drag session at a time and dispatches its callbacks.
///
/// The controller owns three things: the session state machine, the caller's
/// [`DragCallbacks`], and the host's [`MotionSurface`]. Arming a session
/// attaches an ambient motion + release subscription on the surface; release
/// (or dropping the controller) is guaranteed to detach it. While idle, no
/// ambient subscription exists and every inbound event is ignored.
///
/// See the crate docs for the event-routing contract and a worked example.
pub struct DragController<T, S: MotionSurface> {
    session: DragSession<T>,
    callbacks: DragCallbacks<T>,
    options: DragOptions,
    surface: S,
    attached: bool,
}

impl<T, S: MotionSurface> DragController<T, S> {
    /// Creates an idle controller over the given surface and callbacks,
    /// with default [`DragOptions`].
    pub fn new(surface: S, callbacks: DragCallbacks<T>) -> Self {
        Self {
            session: DragSession::new(),
            callbacks,
            options: DragOptions::default(),
            surface,
            attached: false,
        }
    }

    /// Sets the forwarding options, replacing the defaults.
    #[must_use]
    pub fn with_options(mut self, options: DragOptions) -> Self {
        self.options = options;
        self
    }

    /// The press-start handler: the host element routes its pointer/mouse/
    /// touch-down here.
    ///
    /// Arms a session carrying `payload` and returns the response flags the
    /// host should apply to the press event. Equivalent to [`Self::arm`]
    /// plus the options-derived [`EventResponse`].
    pub fn press(&mut self, payload: T) -> EventResponse {
        self.arm(payload);
        self.options.response()
    }

    /// Arms a session with the given payload.
    ///
    /// Side effect: attaches the ambient motion/release subscription if it
    /// is not already attached. Re-arming while armed replaces the session
    /// (moved state restarts at false, no terminal callback for the
    /// superseded session) and performs **no** additional attach, so
    /// re-entrant arming never stacks or leaks listeners.
    pub fn arm(&mut self, payload: T) {
        if !self.attached {
            self.surface.attach(Interest::MOTION | Interest::RELEASE);
            self.attached = true;
        }
        self.session.arm(payload);
    }

    /// Handles an ambient move event.
    ///
    /// Ignored (empty response, no callback, no state advance) while idle or
    /// when the event carries no resolvable position. Otherwise fires
    /// `on_motion`, plus `on_start` for the first move of the session or
    /// `on_move` for subsequent ones, and returns the options-derived
    /// response flags.
    pub fn motion(&mut self, event: &PointerEvent) -> EventResponse {
        let Some(position) = event.position else {
            return EventResponse::empty();
        };
        let Some(class) = self.session.motion() else {
            return EventResponse::empty();
        };
        if let Some(payload) = self.session.payload() {
            if let Some(f) = self.callbacks.on_motion.as_mut() {
                f(position, payload);
            }
            let classified = match class {
                MotionClass::Start => self.callbacks.on_start.as_mut(),
                MotionClass::Continue => self.callbacks.on_move.as_mut(),
            };
            if let Some(f) = classified {
                f(position, payload);
            }
        }
        self.options.response()
    }

    /// Handles an ambient release or cancel event.
    ///
    /// Ignored while idle. Otherwise detaches the ambient subscription and
    /// fires exactly one of `on_click` (no move occurred during the session)
    /// or `on_end` (the gesture was a drag). Release events are not
    /// suppressed; the returned response is always empty.
    pub fn release(&mut self) -> EventResponse {
        let Some((payload, class)) = self.session.release() else {
            return EventResponse::empty();
        };
        self.detach_if_attached();
        let terminal = match class {
            ReleaseClass::Click => self.callbacks.on_click.as_mut(),
            ReleaseClass::Drag => self.callbacks.on_end.as_mut(),
        };
        if let Some(f) = terminal {
            f(&payload);
        }
        EventResponse::empty()
    }

    /// Returns the live session's payload, or `None` while idle.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.session.payload()
    }

    /// Returns `true` while a session is armed.
    ///
    /// Suitable for reactive "is dragging" feedback in the host UI.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_armed()
    }

    /// Returns the forwarding options currently in effect.
    #[must_use]
    pub fn options(&self) -> DragOptions {
        self.options
    }

    /// Returns a reference to the host surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn detach_if_attached(&mut self) {
        if self.attached {
            self.surface.detach(Interest::MOTION | Interest::RELEASE);
            self.attached = false;
        }
    }
}

impl<T, S: MotionSurface> Drop for DragController<T, S> {
    /// Detaches the ambient subscription if the controller is dropped while
    /// a session is armed, so an unmounting consumer never leaks listeners.
    fn drop(&mut self) {
        self.detach_if_attached();
    }
}

impl<T: fmt::Debug, S: MotionSurface + fmt::Debug> fmt::Debug for DragController<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragController")
            .field("session", &self.session.payload())
            .field("callbacks", &self.callbacks)
            .field("options", &self.options)
            .field("surface", &self.surface)
            .field("attached", &self.attached)
            .finish()
    }
}
