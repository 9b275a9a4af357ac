// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `dragline_controller` crate.
//!
//! These exercise the full controller contract: click vs. drag
//! classification, callback counts per session, ambient subscription
//! lifecycle (including drop mid-session), and the response flags handed
//! back to the host.

use std::cell::Cell;
use std::rc::Rc;

use dragline_controller::{
    DragCallbacks, DragController, DragOptions, EventResponse, Interest, MotionSurface,
    PointerEvent, SimpleDrag,
};
use kurbo::Point;

/// A surface that records attach/detach traffic through shared handles, so
/// assertions survive the controller being dropped.
#[derive(Debug, Clone, Default)]
struct RecordingSurface {
    attaches: Rc<Cell<u32>>,
    detaches: Rc<Cell<u32>>,
    last_interest: Rc<Cell<Option<Interest>>>,
}

impl MotionSurface for RecordingSurface {
    fn attach(&mut self, interest: Interest) {
        self.attaches.set(self.attaches.get() + 1);
        self.last_interest.set(Some(interest));
    }

    fn detach(&mut self, _interest: Interest) {
        self.detaches.set(self.detaches.get() + 1);
    }
}

impl RecordingSurface {
    fn attached_now(&self) -> bool {
        self.attaches.get() > self.detaches.get()
    }
}

/// Per-callback invocation counters plus the last payload/position seen.
#[derive(Debug, Default)]
struct Counts {
    motion: Cell<u32>,
    start: Cell<u32>,
    moved: Cell<u32>,
    end: Cell<u32>,
    click: Cell<u32>,
    last_pos: Cell<Option<Point>>,
    last_payload: Cell<Option<u32>>,
}

fn counting_controller(
    counts: &Rc<Counts>,
    surface: RecordingSurface,
) -> DragController<u32, RecordingSurface> {
    let callbacks = DragCallbacks::new()
        .on_motion({
            let counts = Rc::clone(counts);
            move |pos, payload: &u32| {
                counts.motion.set(counts.motion.get() + 1);
                counts.last_pos.set(Some(pos));
                counts.last_payload.set(Some(*payload));
            }
        })
        .on_start({
            let counts = Rc::clone(counts);
            move |_, _: &u32| counts.start.set(counts.start.get() + 1)
        })
        .on_move({
            let counts = Rc::clone(counts);
            move |_, _: &u32| counts.moved.set(counts.moved.get() + 1)
        })
        .on_end({
            let counts = Rc::clone(counts);
            move |payload: &u32| {
                counts.end.set(counts.end.get() + 1);
                counts.last_payload.set(Some(*payload));
            }
        })
        .on_click({
            let counts = Rc::clone(counts);
            move |payload: &u32| {
                counts.click.set(counts.click.get() + 1);
                counts.last_payload.set(Some(*payload));
            }
        });
    DragController::new(surface, callbacks)
}

fn at(x: f64, y: f64) -> PointerEvent {
    PointerEvent::at(Point::new(x, y))
}

#[test]
fn ambient_events_while_idle_reach_nothing() {
    let counts = Rc::new(Counts::default());
    let surface = RecordingSurface::default();
    let mut drag = counting_controller(&counts, surface.clone());

    // No press-start yet: ambient traffic is ignored outright.
    assert_eq!(drag.motion(&at(1.0, 1.0)), EventResponse::empty());
    assert_eq!(drag.release(), EventResponse::empty());

    assert_eq!(counts.motion.get(), 0);
    assert_eq!(counts.click.get(), 0);
    assert_eq!(surface.attaches.get(), 0);
    assert!(!drag.is_dragging());
}

#[test]
fn press_then_release_is_a_click() {
    let counts = Rc::new(Counts::default());
    let mut drag = counting_controller(&counts, RecordingSurface::default());

    drag.press(7);
    drag.release();

    assert_eq!(counts.click.get(), 1);
    assert_eq!(counts.start.get(), 0);
    assert_eq!(counts.moved.get(), 0);
    assert_eq!(counts.motion.get(), 0);
    assert_eq!(counts.end.get(), 0);
    assert_eq!(counts.last_payload.get(), Some(7));
}

#[test]
fn single_motion_makes_a_drag_not_a_click() {
    let counts = Rc::new(Counts::default());
    let mut drag = counting_controller(&counts, RecordingSurface::default());

    drag.press(7);
    drag.motion(&at(10.0, 20.0));
    drag.release();

    // The very first move is classified as the start, not a move.
    assert_eq!(counts.start.get(), 1);
    assert_eq!(counts.moved.get(), 0);
    assert_eq!(counts.motion.get(), 1);
    assert_eq!(counts.end.get(), 1);
    assert_eq!(counts.click.get(), 0);
}

#[test]
fn second_motion_is_a_move() {
    let counts = Rc::new(Counts::default());
    let mut drag = counting_controller(&counts, RecordingSurface::default());

    drag.press(7);
    drag.motion(&at(10.0, 20.0));
    drag.motion(&at(11.0, 21.0));
    drag.release();

    assert_eq!(counts.start.get(), 1);
    assert_eq!(counts.moved.get(), 1);
    assert_eq!(counts.motion.get(), 2);
    assert_eq!(counts.end.get(), 1);
    assert_eq!(counts.click.get(), 0);
}

#[test]
fn n_motions_fire_start_once_and_move_n_minus_one_times() {
    let counts = Rc::new(Counts::default());
    let mut drag = counting_controller(&counts, RecordingSurface::default());
    let n = 5;

    drag.press(7);
    for i in 0..n {
        drag.motion(&at(f64::from(i), 0.0));
    }
    drag.release();

    assert_eq!(counts.start.get(), 1);
    assert_eq!(counts.moved.get(), n - 1);
    assert_eq!(counts.motion.get(), n);
    assert_eq!(counts.end.get(), 1);
    assert_eq!(counts.click.get(), 0);
}

#[test]
fn callbacks_receive_position_and_payload() {
    let counts = Rc::new(Counts::default());
    let mut drag = counting_controller(&counts, RecordingSurface::default());

    drag.press(42);
    drag.motion(&at(3.0, 4.0));

    assert_eq!(counts.last_pos.get(), Some(Point::new(3.0, 4.0)));
    assert_eq!(counts.last_payload.get(), Some(42));
    assert_eq!(drag.current(), Some(&42));
    assert!(drag.is_dragging());

    drag.release();
    assert_eq!(drag.current(), None);
    assert!(!drag.is_dragging());
}

#[test]
fn subscription_exists_exactly_while_armed() {
    let counts = Rc::new(Counts::default());
    let surface = RecordingSurface::default();
    let mut drag = counting_controller(&counts, surface.clone());

    assert!(!surface.attached_now());

    drag.press(1);
    assert!(surface.attached_now());
    assert_eq!(surface.attaches.get(), 1);
    assert_eq!(
        surface.last_interest.get(),
        Some(Interest::MOTION | Interest::RELEASE)
    );

    drag.release();
    assert!(!surface.attached_now());
    assert_eq!(surface.detaches.get(), 1);

    // A second session attaches again.
    drag.press(2);
    assert!(surface.attached_now());
    assert_eq!(surface.attaches.get(), 2);
}

#[test]
fn rearm_does_not_stack_subscriptions_or_fire_terminal_callbacks() {
    let counts = Rc::new(Counts::default());
    let surface = RecordingSurface::default();
    let mut drag = counting_controller(&counts, surface.clone());

    drag.press(1);
    drag.motion(&at(5.0, 5.0));

    // Re-arm mid-session: the superseded session gets no click/end, and the
    // surface sees no second attach.
    drag.press(2);
    assert_eq!(counts.click.get(), 0);
    assert_eq!(counts.end.get(), 0);
    assert_eq!(surface.attaches.get(), 1);
    assert_eq!(drag.current(), Some(&2));

    // The replacement session restarted with moved == false.
    drag.release();
    assert_eq!(counts.click.get(), 1);
    assert_eq!(counts.end.get(), 0);
    assert_eq!(counts.last_payload.get(), Some(2));
}

#[test]
fn drop_while_armed_releases_the_subscription() {
    let counts = Rc::new(Counts::default());
    let surface = RecordingSurface::default();
    let mut drag = counting_controller(&counts, surface.clone());

    drag.press(1);
    drag.motion(&at(5.0, 5.0));
    assert!(surface.attached_now());

    drop(drag);

    // The consumer went away mid-session: listeners are released and no
    // terminal callback fires.
    assert!(!surface.attached_now());
    assert_eq!(surface.detaches.get(), 1);
    assert_eq!(counts.end.get(), 0);
    assert_eq!(counts.click.get(), 0);
}

#[test]
fn drop_while_idle_detaches_nothing() {
    let counts = Rc::new(Counts::default());
    let surface = RecordingSurface::default();
    let drag = counting_controller(&counts, surface.clone());

    drop(drag);

    assert_eq!(surface.attaches.get(), 0);
    assert_eq!(surface.detaches.get(), 0);
}

#[test]
fn unresolvable_motion_is_dropped_silently() {
    let counts = Rc::new(Counts::default());
    let mut drag = counting_controller(&counts, RecordingSurface::default());

    drag.press(1);
    let response = drag.motion(&PointerEvent::unresolved());

    // Dropped: no callback, no response flags, and the session still counts
    // as motionless.
    assert_eq!(response, EventResponse::empty());
    assert_eq!(counts.motion.get(), 0);
    assert_eq!(counts.start.get(), 0);

    drag.release();
    assert_eq!(counts.click.get(), 1);
    assert_eq!(counts.end.get(), 0);
}

#[test]
fn response_flags_follow_options() {
    let counts = Rc::new(Counts::default());
    let both = EventResponse::PREVENT_DEFAULT | EventResponse::STOP_PROPAGATION;

    // Defaults: both flags on press and motion, none on release.
    let mut drag = counting_controller(&counts, RecordingSurface::default());
    assert_eq!(drag.press(1), both);
    assert_eq!(drag.motion(&at(1.0, 1.0)), both);
    assert_eq!(drag.release(), EventResponse::empty());

    // Fully disabled.
    let mut drag = counting_controller(&counts, RecordingSurface::default()).with_options(
        DragOptions {
            prevent_default: false,
            stop_propagation: false,
        },
    );
    assert_eq!(drag.press(1), EventResponse::empty());
    assert_eq!(drag.motion(&at(1.0, 1.0)), EventResponse::empty());

    // Mixed.
    let mut drag = counting_controller(&counts, RecordingSurface::default()).with_options(
        DragOptions {
            prevent_default: true,
            stop_propagation: false,
        },
    );
    assert_eq!(drag.motion(&at(1.0, 1.0)), EventResponse::empty());
    drag.press(1);
    assert_eq!(drag.motion(&at(1.0, 1.0)), EventResponse::PREVENT_DEFAULT);
}

#[test]
fn simple_drag_forwards_positions_and_tracks_moving() {
    let last = Rc::new(Cell::new(None));
    let surface = RecordingSurface::default();
    let mut drag = SimpleDrag::new(surface.clone(), {
        let last = Rc::clone(&last);
        move |pos| last.set(Some(pos))
    });

    assert!(!drag.moving());

    // The simplified press always suppresses the default action.
    let response = drag.press();
    assert!(response.contains(EventResponse::PREVENT_DEFAULT));
    assert!(drag.moving());
    assert!(surface.attached_now());

    drag.motion(&at(8.0, 9.0));
    assert_eq!(last.get(), Some(Point::new(8.0, 9.0)));

    // Unresolvable contact points are dropped here too.
    drag.motion(&PointerEvent::unresolved());
    assert_eq!(last.get(), Some(Point::new(8.0, 9.0)));

    drag.release();
    assert!(!drag.moving());
    assert!(!surface.attached_now());
}
