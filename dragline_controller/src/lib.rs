// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dragline_controller --heading-base-level=0

//! Dragline Controller: pointer drag tracking for interactive components.
//!
//! This crate wires the [`dragline_session`] state machine to a host input
//! surface so that sliders, draggable elements, and canvases can react to
//! pointer drags without reimplementing global listener plumbing:
//!
//! - A host element routes its press-start (mouse/touch/pointer down) into
//!   [`DragController::press`], which arms a session with a caller-defined
//!   payload.
//! - While armed, the controller holds an ambient subscription on the host's
//!   [`MotionSurface`] (document/window-level move and release listeners, not
//!   scoped to the originating element). The host routes those events into
//!   [`DragController::motion`] and [`DragController::release`].
//! - Motions stream into the optional [`DragCallbacks`]: `on_motion` for
//!   every move, `on_start` for the first move only, `on_move` for the rest.
//! - Release fires exactly one of `on_click` (no motion occurred) or
//!   `on_end` (the gesture was a drag), then drops the ambient subscription.
//!
//! While idle the controller holds **zero** ambient subscriptions, and
//! dropping it mid-session detaches them too, so a consumer going away never
//! leaks listeners.
//!
//! Every forwarded press/motion event yields an [`EventResponse`] telling the
//! host whether to suppress the event's default action and stop its
//! propagation, configurable via [`DragOptions`] (both on by default). The
//! host applies the flags after dispatch; the controller itself has no
//! side-effectful event handle to call into.
//!
//! ## Minimal example
//!
//! ```
//! use dragline_controller::{
//!     DragCallbacks, DragController, NullSurface, PointerEvent,
//! };
//! use kurbo::Point;
//!
//! let callbacks = DragCallbacks::new()
//!     .on_motion(|pos: Point, id: &u32| {
//!         // Update the element with `id` to follow `pos`.
//!     })
//!     .on_click(|id: &u32| {
//!         // Down + up with no movement: treat as a plain click.
//!     });
//!
//! let mut drag = DragController::new(NullSurface, callbacks);
//!
//! // Element 7 got a pointer-down.
//! drag.press(7);
//! assert!(drag.is_dragging());
//!
//! // Ambient moves stream in while armed.
//! drag.motion(&PointerEvent::at(Point::new(10.0, 20.0)));
//!
//! // Ambient release ends the session.
//! drag.release();
//! assert!(!drag.is_dragging());
//! ```
//!
//! ## Payload-free variant
//!
//! For the common "just move this thing under the pointer" case, see
//! [`SimpleDrag`]: one position callback, a `moving()` flag, and nothing
//! else.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod callbacks;
mod controller;
mod event;
mod simple;
mod surface;

pub use callbacks::DragCallbacks;
pub use controller::{DragController, DragOptions};
pub use event::{EventResponse, PointerEvent};
pub use simple::SimpleDrag;
pub use surface::{Interest, MotionSurface, NullSurface};
