// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session state machine: arm, classify motions, classify the release.

/// Classification of a processed motion event within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionClass {
    /// The first motion event since the session was armed.
    Start,
    /// The second and every subsequent motion event.
    Continue,
}

/// Classification of a release ending a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseClass {
    /// The session saw no motion event between arming and release.
    Click,
    /// At least one motion event was processed before release.
    Drag,
}

/// A single in-flight drag interaction: absent, or armed with a payload.
///
/// At most one session is live per instance. The `moved` bit starts false at
/// arming, flips on the first processed motion, and never reverts within the
/// same session.
#[derive(Debug, Clone, Default)]
pub struct DragSession<T> {
    armed: Option<Armed<T>>,
}

#[derive(Debug, Clone)]
struct Armed<T> {
    payload: T,
    moved: bool,
}

impl<T> DragSession<T> {
    /// Creates an idle session holder.
    #[must_use]
    pub const fn new() -> Self {
        Self { armed: None }
    }

    /// Arms a session with the given payload.
    ///
    /// Re-arming while a session is already live replaces it outright: the
    /// previous payload is dropped, `moved` restarts at false, and **no**
    /// terminal classification is produced for the superseded session. Hosts
    /// that need a click/end notification for the old session must call
    /// [`DragSession::release`] first.
    pub fn arm(&mut self, payload: T) {
        self.armed = Some(Armed {
            payload,
            moved: false,
        });
    }

    /// Records one motion event, returning its classification.
    ///
    /// Returns `None` while idle; motion events outside a session carry no
    /// meaning here and are ignored. The first motion after arming is
    /// [`MotionClass::Start`]; all later ones are [`MotionClass::Continue`].
    pub fn motion(&mut self) -> Option<MotionClass> {
        let armed = self.armed.as_mut()?;
        if armed.moved {
            Some(MotionClass::Continue)
        } else {
            armed.moved = true;
            Some(MotionClass::Start)
        }
    }

    /// Ends the session, yielding the payload and the release classification.
    ///
    /// Returns `None` while idle. After this call the session holder is idle
    /// again and may be re-armed.
    pub fn release(&mut self) -> Option<(T, ReleaseClass)> {
        let armed = self.armed.take()?;
        let class = if armed.moved {
            ReleaseClass::Drag
        } else {
            ReleaseClass::Click
        };
        Some((armed.payload, class))
    }

    /// Returns a reference to the live session's payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        self.armed.as_ref().map(|armed| &armed.payload)
    }

    /// Returns `true` while a session is live.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Returns `true` if the live session has processed at least one motion.
    ///
    /// `false` while idle.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.armed.as_ref().is_some_and(|armed| armed.moved)
    }
}
