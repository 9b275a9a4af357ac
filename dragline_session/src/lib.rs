// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=dragline_session --heading-base-level=0

//! Dragline Session: the drag-session state machine.
//!
//! This crate tracks a single in-flight drag interaction, from the moment a
//! press-start *arms* a session to the release that ends it, and classifies
//! the transitions along the way:
//!
//! - the first motion event after arming is a **start** (the gesture became a
//!   drag),
//! - every later motion event is a **continue**,
//! - a release with no preceding motion is a **click**,
//! - a release after motion is a **drag end**.
//!
//! The session carries an opaque caller-defined payload for its whole
//! lifetime (an element id, an initial position, or simply `()`), handed back
//! on release.
//!
//! ## Design Philosophy
//!
//! Like the rest of Dragline, this crate is a focused building block:
//!
//! - **Minimal and focused**: one interaction pattern, one entity.
//! - **Stateful but simple**: just enough state to classify transitions —
//!   armed or not, moved or not.
//! - **Integration-friendly**: it knows nothing about events, coordinates,
//!   listeners, or UI frameworks. Hosts feed it "a motion happened" /
//!   "a release happened" and interpret the returned classification.
//!
//! Coordinate forwarding, callback dispatch, and ambient listener lifecycle
//! live one layer up in `dragline_controller`.
//!
//! ## Minimal example
//!
//! ```
//! use dragline_session::{DragSession, MotionClass, ReleaseClass};
//!
//! let mut session = DragSession::new();
//!
//! // Pointer down on an element: arm with a caller-defined payload.
//! session.arm("knob");
//! assert!(session.is_armed());
//!
//! // First move is the start of the drag, later moves continue it.
//! assert_eq!(session.motion(), Some(MotionClass::Start));
//! assert_eq!(session.motion(), Some(MotionClass::Continue));
//!
//! // Release after motion is a drag end, and hands the payload back.
//! assert_eq!(session.release(), Some(("knob", ReleaseClass::Drag)));
//! assert!(!session.is_armed());
//!
//! // Down followed directly by up is a click.
//! session.arm("knob");
//! assert_eq!(session.release(), Some(("knob", ReleaseClass::Click)));
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

mod session;

pub use session::{DragSession, MotionClass, ReleaseClass};
