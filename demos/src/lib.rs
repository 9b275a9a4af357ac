// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Dragline demos.
//!
//! The demos have no real windowing system, so this crate simulates the
//! host side: a [`SimulatedSurface`] stands in for the document/window, and
//! its [`SurfaceProbe`] lets demo code ask "would an ambient event reach the
//! controller right now?" the way a real host only notifies registered
//! listeners.

use std::cell::Cell;
use std::rc::Rc;

use dragline_controller::{Interest, MotionSurface};

/// A stand-in for the ambient input surface of a real host.
///
/// Tracks the currently attached [`Interest`] set; demo drivers consult a
/// [`SurfaceProbe`] before delivering ambient events, mirroring how a real
/// event loop only invokes listeners that are registered.
#[derive(Debug, Clone)]
pub struct SimulatedSurface {
    interest: Rc<Cell<Interest>>,
}

impl Default for SimulatedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedSurface {
    /// Creates a surface with no listeners attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            interest: Rc::new(Cell::new(Interest::empty())),
        }
    }

    /// Returns a probe sharing this surface's registration state.
    #[must_use]
    pub fn probe(&self) -> SurfaceProbe {
        SurfaceProbe {
            interest: Rc::clone(&self.interest),
        }
    }
}

impl MotionSurface for SimulatedSurface {
    fn attach(&mut self, interest: Interest) {
        self.interest.set(self.interest.get() | interest);
    }

    fn detach(&mut self, interest: Interest) {
        self.interest.set(self.interest.get() - interest);
    }
}

/// Read-only view of a [`SimulatedSurface`]'s registration state.
#[derive(Debug, Clone)]
pub struct SurfaceProbe {
    interest: Rc<Cell<Interest>>,
}

impl SurfaceProbe {
    /// Returns `true` if an ambient event of the given kind would currently
    /// be delivered to the controller.
    #[must_use]
    pub fn delivers(&self, interest: Interest) -> bool {
        self.interest.get().contains(interest)
    }
}
