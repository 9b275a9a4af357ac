// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host's ambient input surface: where global listeners attach.

bitflags::bitflags! {
    /// The kinds of ambient events a controller wants delivered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Interest: u8 {
        /// Pointer move events.
        const MOTION = 1 << 0;
        /// Pointer up and cancel events.
        const RELEASE = 1 << 1;
    }
}

/// The ambient input surface a drag controller subscribes to while armed.
///
/// In a browser-like host this is the document or window: move and release
/// events are observed globally, not just over the element that received the
/// press. Implementations register/unregister whatever listeners deliver
/// those events, and route them into
/// [`DragController::motion`](crate::DragController::motion) and
/// [`DragController::release`](crate::DragController::release) **only while
/// attached**.
///
/// The controller guarantees balanced calls: one `attach` when a session
/// arms from idle, one `detach` when it releases or the controller is
/// dropped mid-session. Re-arming an already-armed controller performs no
/// additional `attach`, so implementations never see nested registrations.
pub trait MotionSurface {
    /// Start delivering ambient events matching `interest`.
    fn attach(&mut self, interest: Interest);

    /// Stop delivering ambient events matching `interest`.
    fn detach(&mut self, interest: Interest);
}

/// A surface that ignores attach/detach bookkeeping.
///
/// Useful for hosts that unconditionally route every ambient event into the
/// controller and rely on it to ignore events while idle, and for tests and
/// doctests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSurface;

impl MotionSurface for NullSurface {
    fn attach(&mut self, _interest: Interest) {}

    fn detach(&mut self, _interest: Interest) {}
}
