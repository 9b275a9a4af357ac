// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted slider drag: press on the knob, stream ambient moves, release.
//!
//! There is no real window here; the script below plays the role of the host
//! event loop, delivering ambient events only while the controller holds a
//! subscription on the [`SimulatedSurface`] — the same discipline a real
//! host follows with document-level listeners.

use std::cell::Cell;
use std::rc::Rc;

use dragline_controller::{DragCallbacks, DragController, Interest, PointerEvent};
use dragline_demos::SimulatedSurface;
use kurbo::Point;

/// Horizontal extent of the slider track, in logical pixels.
const TRACK_WIDTH: f64 = 300.0;

fn value_at(x: f64) -> f64 {
    (x / TRACK_WIDTH).clamp(0.0, 1.0) * 100.0
}

fn main() {
    let value = Rc::new(Cell::new(50.0_f64));

    let surface = SimulatedSurface::new();
    let probe = surface.probe();

    // The payload is the grab offset between the pointer and the knob
    // center, so the knob doesn't jump to the pointer on the first move.
    let callbacks = DragCallbacks::new()
        .on_start(|pos: Point, grab: &f64| {
            println!("drag started at {:?} (grab offset {grab})", pos);
        })
        .on_motion({
            let value = Rc::clone(&value);
            move |pos: Point, grab: &f64| {
                value.set(value_at(pos.x - grab));
                println!("  value -> {:.1}", value.get());
            }
        })
        .on_end(|_: &f64| println!("drag finished"))
        .on_click(|_: &f64| println!("click (no movement): reset to center"));

    let mut drag = DragController::new(surface, callbacks);

    // Ambient noise before any press: the surface has no listeners, so the
    // host would not deliver this at all.
    assert!(!probe.delivers(Interest::MOTION));

    // Pointer-down on the knob (knob center at x=150, pointer at x=153).
    drag.press(3.0);
    assert!(probe.delivers(Interest::MOTION));
    println!("pressed; dragging = {}", drag.is_dragging());

    // The host event loop streams document-level moves while attached.
    for x in [160.0, 180.0, 210.0, 240.0] {
        if probe.delivers(Interest::MOTION) {
            drag.motion(&PointerEvent::at(Point::new(x, 20.0)));
        }
    }

    if probe.delivers(Interest::RELEASE) {
        drag.release();
    }
    println!("released; dragging = {}", drag.is_dragging());
    println!("final value: {:.1}", value.get());

    // A quick down/up with no movement classifies as a click.
    drag.press(0.0);
    drag.release();
}
