// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The optional callback surface a caller hands to the controller.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;

type MotionFn<T> = Box<dyn FnMut(Point, &T)>;
type EndFn<T> = Box<dyn FnMut(&T)>;

/// Callbacks fired as a drag session progresses.
///
/// Every callback is optional; an omitted one is a no-op, never a fault.
/// Within a single session the controller guarantees:
///
/// - `on_motion` fires for every forwarded move, including the first;
/// - `on_start` fires exactly once, on the first move after arming;
/// - `on_move` fires on the second and every subsequent move;
/// - exactly one of `on_click` (no move occurred) or `on_end` (at least one
///   move occurred) fires on release.
///
/// Build the set with the chained setters:
///
/// ```
/// use dragline_controller::DragCallbacks;
/// use kurbo::Point;
///
/// let callbacks = DragCallbacks::<u32>::new()
///     .on_start(|pos: Point, id: &u32| { /* drag began */ })
///     .on_end(|id: &u32| { /* drag finished */ });
/// ```
pub struct DragCallbacks<T> {
    pub(crate) on_motion: Option<MotionFn<T>>,
    pub(crate) on_start: Option<MotionFn<T>>,
    pub(crate) on_move: Option<MotionFn<T>>,
    pub(crate) on_end: Option<EndFn<T>>,
    pub(crate) on_click: Option<EndFn<T>>,
}

impl<T> DragCallbacks<T> {
    /// Creates an empty callback set; every notification is a no-op.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            on_motion: None,
            on_start: None,
            on_move: None,
            on_end: None,
            on_click: None,
        }
    }

    /// Called for every forwarded move while armed, including the first.
    ///
    /// Receives the pointer position and the session payload.
    #[must_use]
    pub fn on_motion(mut self, f: impl FnMut(Point, &T) + 'static) -> Self {
        self.on_motion = Some(Box::new(f));
        self
    }

    /// Called exactly once per session, on the first move after arming.
    #[must_use]
    pub fn on_start(mut self, f: impl FnMut(Point, &T) + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    /// Called on the second and every subsequent move within a session.
    #[must_use]
    pub fn on_move(mut self, f: impl FnMut(Point, &T) + 'static) -> Self {
        self.on_move = Some(Box::new(f));
        self
    }

    /// Called on release when at least one move occurred during the session.
    #[must_use]
    pub fn on_end(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    /// Called on release when **no** move occurred during the session.
    ///
    /// Mutually exclusive with [`DragCallbacks::on_end`] for a given session.
    #[must_use]
    pub fn on_click(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }
}

impl<T> Default for DragCallbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DragCallbacks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragCallbacks")
            .field("on_motion", &self.on_motion.is_some())
            .field("on_start", &self.on_start.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_end", &self.on_end.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}
