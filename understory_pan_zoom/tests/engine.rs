// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenario tests for `PanZoomEngine`.
//!
//! These drive the engine the way a host would (sizes, touches, programmatic
//! calls, frames) and check what observers see.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Point, Rect, Size, Vec2};
use understory_gesture::PointerId;
use understory_pan_zoom::{
    FlingWallPolicy, FrameScheduler, GestureState, Observer, PanZoomEngine, ScrollMetrics,
    Transform, TransformChange, ZoomUnit,
};

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Changed(Transform, bool),
    Idle,
    Active,
}

type Log = Rc<RefCell<Vec<Event>>>;

struct Recorder(Log);

impl Observer for Recorder {
    fn on_transform_changed(&mut self, change: &TransformChange) {
        self.0
            .borrow_mut()
            .push(Event::Changed(change.transform, change.first_sizing));
    }

    fn on_idle(&mut self) {
        self.0.borrow_mut().push(Event::Idle);
    }

    fn on_active(&mut self) {
        self.0.borrow_mut().push(Event::Active);
    }
}

/// 1000x1000 content in a 500x500 container, default options, log cleared.
fn sized_engine() -> (PanZoomEngine, Log) {
    let mut engine = PanZoomEngine::default();
    let log = Log::default();
    engine.add_observer(Box::new(Recorder(log.clone())));
    engine.set_content_size(Size::new(1000.0, 1000.0), false);
    engine.set_container_size(Size::new(500.0, 500.0), false);
    log.borrow_mut().clear();
    (engine, log)
}

fn take(log: &Log) -> Vec<Event> {
    core::mem::take(&mut *log.borrow_mut())
}

fn count(events: &[Event], wanted: &Event) -> usize {
    events.iter().filter(|e| *e == wanted).count()
}

fn assert_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
        "{a:?} != {b:?}"
    );
}

const FINGER: PointerId = PointerId(1);
const THUMB: PointerId = PointerId(2);

#[test]
fn first_sizing_applies_the_base_transformation_once() {
    let mut engine = PanZoomEngine::default();
    let log = Log::default();
    engine.add_observer(Box::new(Recorder(log.clone())));

    assert!(!engine.set_content_size(Size::new(1000.0, 1000.0), false));
    assert!(!engine.is_initialized());
    assert!(engine.set_container_size(Size::new(500.0, 500.0), false));
    assert!(engine.is_initialized());

    assert_eq!(
        take(&log),
        [Event::Changed(Transform::new(0.5, Vec2::ZERO), true)]
    );
    assert_eq!(engine.real_zoom(), 0.5);
    assert_eq!(engine.zoom(), 1.0);
}

#[test]
fn zoom_to_applies_logical_zoom_with_one_notification() {
    let (mut engine, log) = sized_engine();
    assert!(engine.zoom_to(2.0, false));
    assert_eq!(engine.real_zoom(), 1.0);
    assert_eq!(
        take(&log),
        [Event::Changed(
            Transform::new(1.0, Vec2::new(-250.0, -250.0)),
            false
        )]
    );
}

#[test]
fn zoom_by_at_the_minimum_changes_nothing() {
    let (mut engine, log) = sized_engine();
    engine.set_min_zoom(1.0, ZoomUnit::Logical).unwrap();
    assert!(!engine.zoom_by(0.7, false));
    assert_eq!(engine.zoom(), 1.0);
    assert!(take(&log).is_empty());
}

#[test]
fn zoom_limits_in_real_units() {
    let (mut engine, _log) = sized_engine();
    engine.set_max_zoom(0.75, ZoomUnit::Real).unwrap();
    engine.zoom_to(10.0, false);
    assert_eq!(engine.real_zoom(), 0.75);
    assert!(engine.set_max_zoom(-1.0, ZoomUnit::Real).is_err());
    assert_eq!(engine.max_zoom().value, 0.75);
}

#[test]
fn lowering_the_maximum_pulls_the_zoom_back() {
    let (mut engine, log) = sized_engine();
    engine.zoom_to(2.0, false);
    take(&log);
    engine.set_max_zoom(1.5, ZoomUnit::Logical).unwrap();
    assert_eq!(engine.zoom(), 1.5);
    assert_eq!(take(&log).len(), 1);
}

#[test]
fn relayout_with_the_same_size_is_idempotent() {
    let (mut engine, log) = sized_engine();
    let before = engine.transform();
    assert!(!engine.set_container_size(Size::new(500.0, 500.0), false));
    assert!(!engine.set_container_size(Size::new(500.0, 500.0), false));
    assert!(take(&log).is_empty());
    assert_eq!(engine.transform(), before);
}

#[test]
fn later_resizes_keep_the_real_zoom() {
    let (mut engine, log) = sized_engine();
    engine.zoom_to(2.0, false);
    take(&log);

    assert!(engine.set_container_size(Size::new(600.0, 600.0), false));
    assert_eq!(engine.real_zoom(), 1.0);
    assert!((engine.zoom() - 1.0 / 0.6).abs() < 1e-12);
    assert!(matches!(take(&log)[..], [Event::Changed(_, false)]));

    // Re-applying the base transformation refits the content.
    assert!(engine.set_container_size(Size::new(600.0, 600.0), true));
    assert_eq!(engine.zoom(), 1.0);
}

#[test]
fn slow_drag_release_goes_straight_to_idle() {
    let (mut engine, log) = sized_engine();
    engine.zoom_to(2.0, false);
    take(&log);

    let mut states = Vec::new();
    assert!(engine.on_touch_begin(FINGER, Point::new(250.0, 250.0), 0));
    states.push(engine.state());
    assert!(engine.on_touch_move(FINGER, Point::new(240.0, 250.0), 10));
    states.push(engine.state());
    assert!(engine.on_touch_move(FINGER, Point::new(230.0, 250.0), 20));
    states.push(engine.state());
    assert_eq!(engine.scaled_pan(), Vec2::new(-270.0, -250.0));
    assert!(engine.on_touch_end(FINGER, Point::new(230.0, 250.0), 600));
    states.push(engine.state());

    assert!(!states.contains(&GestureState::Flinging));
    assert_eq!(engine.state(), GestureState::Idle);
    let events = take(&log);
    assert_eq!(count(&events, &Event::Idle), 1);
    assert_eq!(count(&events, &Event::Active), 1);
    assert_eq!(events.first(), Some(&Event::Active));
    assert_eq!(events.last(), Some(&Event::Idle));
}

#[test]
fn drag_deltas_are_divided_by_the_zoom() {
    let (mut engine, _log) = sized_engine();
    engine.zoom_to(2.0, false);
    let pan_before = engine.pan();
    engine.on_touch_begin(FINGER, Point::new(250.0, 250.0), 0);
    engine.on_touch_move(FINGER, Point::new(250.0, 210.0), 10);
    // 40 container pixels at real zoom 1.0 is 40 content units.
    assert_eq!(engine.pan() - pan_before, Vec2::new(0.0, -40.0));
}

#[test]
fn taps_are_not_consumed() {
    let (mut engine, log) = sized_engine();
    engine.on_touch_begin(FINGER, Point::new(250.0, 250.0), 0);
    assert!(engine.on_touch_move(FINGER, Point::new(253.0, 250.0), 10));
    assert!(!engine.on_touch_end(FINGER, Point::new(253.0, 250.0), 20));
    assert_eq!(engine.state(), GestureState::Idle);
    assert!(take(&log).is_empty());
}

#[test]
fn disabled_axis_does_not_pan() {
    let (mut engine, _log) = sized_engine();
    engine.zoom_to(2.0, false);
    engine.set_vertical_pan_enabled(false);
    engine.on_touch_begin(FINGER, Point::new(250.0, 250.0), 0);
    engine.on_touch_move(FINGER, Point::new(230.0, 200.0), 10);
    assert_eq!(engine.scaled_pan(), Vec2::new(-270.0, -250.0));
}

#[test]
fn over_scroll_stays_within_the_elastic_band_and_settles_once() {
    let (mut engine, log) = sized_engine();
    // Content exactly fills the container: the strict horizontal range is [0, 0].
    engine.on_touch_begin(FINGER, Point::new(100.0, 250.0), 0);
    engine.on_touch_move(FINGER, Point::new(900.0, 250.0), 10);
    assert_eq!(engine.scaled_pan().x, 250.0);

    take(&log);
    engine.on_touch_end(FINGER, Point::new(900.0, 250.0), 1000);
    assert_eq!(
        take(&log),
        [
            Event::Changed(Transform::new(0.5, Vec2::ZERO), false),
            Event::Idle
        ]
    );
}

#[test]
fn over_scroll_can_be_disabled_per_axis() {
    let (mut engine, _log) = sized_engine();
    engine.set_over_scroll_horizontal(false);
    engine.on_touch_begin(FINGER, Point::new(100.0, 250.0), 0);
    engine.on_touch_move(FINGER, Point::new(900.0, 900.0), 10);
    assert_eq!(engine.scaled_pan(), Vec2::new(0.0, 250.0));
}

fn fast_drag_left(engine: &mut PanZoomEngine) {
    engine.on_touch_begin(FINGER, Point::new(250.0, 250.0), 0);
    for i in 1..5_u32 {
        let x = 250.0 - 20.0 * f64::from(i);
        engine.on_touch_move(FINGER, Point::new(x, 250.0), u64::from(i) * 10);
    }
    engine.on_touch_end(FINGER, Point::new(150.0, 250.0), 50);
}

#[test]
fn fast_release_flings_into_a_hard_wall() {
    let (mut engine, log) = sized_engine();
    engine.zoom_to(2.0, false);
    take(&log);

    fast_drag_left(&mut engine);
    assert_eq!(engine.state(), GestureState::Flinging);
    assert_eq!(engine.scaled_pan().x, -330.0);

    let mut now = 50;
    let mut frames = 0;
    while engine.advance(now + 16) {
        now += 16;
        frames += 1;
        assert!(engine.scaled_pan().x >= -500.0);
        assert!(frames < 1000, "fling never ended");
    }
    assert_eq!(engine.state(), GestureState::Idle);
    assert_eq!(engine.scaled_pan().x, -500.0);

    let events = take(&log);
    assert_eq!(count(&events, &Event::Active), 1);
    assert_eq!(count(&events, &Event::Idle), 1);
    assert_eq!(events.last(), Some(&Event::Idle));
}

#[test]
fn elastic_fling_settles_inside_strict_bounds() {
    let (mut engine, _log) = sized_engine();
    engine.zoom_to(2.0, false);
    engine.set_fling_wall_policy(FlingWallPolicy::Elastic);

    fast_drag_left(&mut engine);
    let mut now = 50;
    let mut furthest = 0.0_f64;
    while engine.advance(now + 16) {
        now += 16;
        furthest = furthest.min(engine.scaled_pan().x);
    }
    // The band is half the container wide.
    assert!(furthest >= -750.0);
    assert_eq!(engine.state(), GestureState::Idle);
    assert_eq!(engine.scaled_pan().x, -500.0);
}

/// Drags right past the left edge at zoom 2 and releases fast.
fn fast_release_while_over_scrolled(engine: &mut PanZoomEngine) {
    engine.on_touch_begin(FINGER, Point::new(100.0, 250.0), 0);
    for i in 1..5_u32 {
        let x = 100.0 + 100.0 * f64::from(i);
        engine.on_touch_move(FINGER, Point::new(x, 250.0), u64::from(i) * 10);
    }
    engine.on_touch_end(FINGER, Point::new(500.0, 250.0), 50);
}

#[test]
fn fast_release_while_over_scrolled_settles_without_flinging() {
    let (mut engine, log) = sized_engine();
    engine.zoom_to(2.0, false);
    take(&log);

    fast_release_while_over_scrolled(&mut engine);
    assert_eq!(engine.state(), GestureState::Idle);
    assert_eq!(engine.scaled_pan(), Vec2::new(0.0, -250.0));
    assert!(!engine.advance(66));

    let events = take(&log);
    assert!(!events.is_empty());
    assert_eq!(count(&events, &Event::Active), 1);
    assert_eq!(count(&events, &Event::Idle), 1);
    assert_eq!(events.last(), Some(&Event::Idle));
}

#[test]
fn hard_stop_fling_in_over_scroll_never_goes_further_out() {
    let (mut engine, log) = sized_engine();
    engine.zoom_to(2.0, false);
    engine.set_allow_fling_in_overscroll(true);
    take(&log);

    fast_release_while_over_scrolled(&mut engine);
    assert_eq!(engine.state(), GestureState::Flinging);
    let released = engine.scaled_pan().x;
    assert!(released > 0.0);

    let mut now = 50;
    let mut frames = 0;
    while engine.advance(now + 16) {
        now += 16;
        frames += 1;
        assert!(engine.scaled_pan().x <= released);
        assert!(frames < 1000, "fling never ended");
    }
    assert_eq!(engine.state(), GestureState::Idle);
    assert_eq!(engine.scaled_pan(), Vec2::new(0.0, -250.0));

    let events = take(&log);
    assert_eq!(count(&events, &Event::Active), 1);
    assert_eq!(count(&events, &Event::Idle), 1);
    assert_eq!(events.last(), Some(&Event::Idle));
}

#[test]
fn flings_can_be_disabled() {
    let (mut engine, _log) = sized_engine();
    engine.zoom_to(2.0, false);
    engine.set_fling_enabled(false);
    fast_drag_left(&mut engine);
    assert_eq!(engine.state(), GestureState::Idle);
    assert!(!engine.advance(100));
}

#[test]
fn a_touch_catches_a_fling() {
    let (mut engine, _log) = sized_engine();
    engine.zoom_to(2.0, false);
    fast_drag_left(&mut engine);
    assert!(engine.advance(66));

    assert!(engine.on_touch_begin(FINGER, Point::new(250.0, 250.0), 70));
    let held = engine.transform();
    assert!(!engine.advance(86));
    assert_eq!(engine.transform(), held);

    // Lifting without moving ends the gesture.
    assert!(engine.on_touch_end(FINGER, Point::new(250.0, 250.0), 90));
    assert_eq!(engine.state(), GestureState::Idle);
}

#[test]
fn a_caught_fling_becomes_a_drag() {
    let (mut engine, _log) = sized_engine();
    engine.zoom_to(2.0, false);
    fast_drag_left(&mut engine);
    engine.advance(66);

    engine.on_touch_begin(FINGER, Point::new(250.0, 250.0), 70);
    assert!(engine.on_touch_move(FINGER, Point::new(250.0, 200.0), 80));
    assert_eq!(engine.state(), GestureState::Dragging);
}

/// Two fingers 200px apart around (250, 250).
fn start_pinch(engine: &mut PanZoomEngine) {
    assert!(engine.on_touch_begin(FINGER, Point::new(150.0, 250.0), 0));
    assert!(engine.on_touch_begin(THUMB, Point::new(350.0, 250.0), 0));
    assert_eq!(engine.state(), GestureState::Pinching);
}

#[test]
fn pinch_keeps_the_focal_point_anchored() {
    let (mut engine, _log) = sized_engine();
    start_pinch(&mut engine);

    let focal = Point::new(300.0, 250.0);
    let under_focal = engine.container_to_content(focal);
    assert!(engine.on_touch_move(THUMB, Point::new(450.0, 250.0), 10));

    assert!((engine.real_zoom() - 0.75).abs() < 1e-12);
    assert_close(engine.content_to_container(under_focal), focal);
}

#[test]
fn two_finger_pan_follows_the_midpoint() {
    let (mut engine, _log) = sized_engine();
    engine.set_two_finger_pan_enabled(true);
    start_pinch(&mut engine);

    let under_previous = engine.container_to_content(Point::new(250.0, 250.0));
    engine.on_touch_move(THUMB, Point::new(450.0, 250.0), 10);
    assert_close(
        engine.content_to_container(under_previous),
        Point::new(300.0, 250.0),
    );
}

#[test]
fn over_pinch_settles_on_release_and_ignores_the_last_finger() {
    let (mut engine, log) = sized_engine();
    start_pinch(&mut engine);

    // Halving the span would reach real zoom 0.25; the elastic floor is 0.4 / 1.2.
    engine.on_touch_move(THUMB, Point::new(250.0, 250.0), 10);
    assert!((engine.real_zoom() - 0.4 / 1.2).abs() < 1e-12);

    take(&log);
    assert!(engine.on_touch_end(THUMB, Point::new(250.0, 250.0), 20));
    assert_eq!(
        take(&log),
        [
            Event::Changed(Transform::new(0.4, Vec2::new(50.0, 50.0)), false),
            Event::Idle
        ]
    );

    // The remaining finger does nothing until it lifts.
    assert!(!engine.on_touch_move(FINGER, Point::new(50.0, 50.0), 30));
    assert_eq!(engine.state(), GestureState::Idle);
    assert!(!engine.on_touch_end(FINGER, Point::new(50.0, 50.0), 40));

    // After that, a new drag works again.
    engine.zoom_to(2.0, false);
    engine.on_touch_begin(FINGER, Point::new(250.0, 250.0), 50);
    assert!(engine.on_touch_move(FINGER, Point::new(250.0, 200.0), 60));
    assert_eq!(engine.state(), GestureState::Dragging);
}

#[test]
fn pinch_without_over_pinch_stops_at_the_limit() {
    let (mut engine, _log) = sized_engine();
    engine.set_over_pinchable(false);
    start_pinch(&mut engine);
    engine.on_touch_move(THUMB, Point::new(250.0, 250.0), 10);
    assert_eq!(engine.real_zoom(), 0.4);
}

#[test]
fn second_finger_preempts_a_drag() {
    let (mut engine, log) = sized_engine();
    engine.zoom_to(2.0, false);
    engine.on_touch_begin(FINGER, Point::new(250.0, 250.0), 0);
    engine.on_touch_move(FINGER, Point::new(250.0, 200.0), 10);
    assert_eq!(engine.state(), GestureState::Dragging);

    take(&log);
    assert!(engine.on_touch_begin(THUMB, Point::new(250.0, 400.0), 20));
    assert_eq!(engine.state(), GestureState::Pinching);
    // Moving between states that are both active fires neither idle nor active.
    assert!(take(&log).is_empty());
}

#[test]
fn pinch_is_ignored_when_zoom_is_disabled() {
    let (mut engine, _log) = sized_engine();
    engine.set_zoom_enabled(false);
    engine.on_touch_begin(FINGER, Point::new(150.0, 250.0), 0);
    assert!(!engine.on_touch_begin(THUMB, Point::new(350.0, 250.0), 0));
    assert_ne!(engine.state(), GestureState::Pinching);
}

#[test]
fn touch_cancel_settles_and_idles() {
    let (mut engine, log) = sized_engine();
    engine.on_touch_begin(FINGER, Point::new(100.0, 250.0), 0);
    engine.on_touch_move(FINGER, Point::new(300.0, 250.0), 10);
    assert!(engine.on_touch_cancel());
    assert_eq!(engine.state(), GestureState::Idle);
    assert_eq!(engine.scaled_pan(), Vec2::ZERO);
    assert_eq!(take(&log).last(), Some(&Event::Idle));
    assert!(!engine.on_touch_cancel());
}

#[test]
fn animation_steps_notify_and_cancel_without_snapping() {
    let (mut engine, log) = sized_engine();
    assert!(engine.zoom_to(2.0, true));
    assert_eq!(engine.state(), GestureState::Animating);
    assert_eq!(take(&log), [Event::Active]);

    // The first frame only starts the clock.
    assert!(engine.advance(1_000));
    assert!(take(&log).is_empty());
    assert!(engine.advance(1_100));
    let midway = engine.transform();
    assert!(midway.scale > 0.5 && midway.scale < 1.0);
    assert_eq!(take(&log), [Event::Changed(midway, false)]);

    assert!(engine.cancel_animations());
    assert_eq!(engine.transform(), midway);
    assert_eq!(take(&log), [Event::Idle]);

    assert!(!engine.advance(1_200));
    assert!(take(&log).is_empty());
    assert!(!engine.cancel_animations());
}

#[test]
fn animation_ends_exactly_on_target() {
    let (mut engine, log) = sized_engine();
    engine.move_to(2.0, -100.0, -200.0, true);
    let mut now = 0;
    while engine.advance(now) {
        now += 16;
    }
    assert_eq!(engine.state(), GestureState::Idle);
    assert_eq!(engine.zoom(), 2.0);
    assert_eq!(engine.pan(), Vec2::new(-100.0, -200.0));
    let events = take(&log);
    assert_eq!(events.last(), Some(&Event::Idle));
    assert_eq!(
        events[events.len() - 2],
        Event::Changed(Transform::new(1.0, Vec2::new(-100.0, -200.0)), false)
    );
}

#[test]
fn animation_to_the_current_transform_does_not_start() {
    let (mut engine, log) = sized_engine();
    assert!(!engine.zoom_to(1.0, true));
    assert_eq!(engine.state(), GestureState::Idle);
    assert!(take(&log).is_empty());
}

#[test]
fn immediate_call_cancels_an_animation() {
    let (mut engine, _log) = sized_engine();
    engine.zoom_to(2.0, false);
    engine.zoom_to(1.0, true);
    engine.advance(0);
    assert!(engine.pan_by(-10.0, 0.0, false));
    assert_eq!(engine.scaled_pan(), Vec2::new(-260.0, -250.0));
    assert_eq!(engine.state(), GestureState::Idle);
    assert!(!engine.advance(16));
}

#[test]
fn touches_cannot_interrupt_an_animation() {
    let (mut engine, _log) = sized_engine();
    engine.zoom_to(2.0, true);
    assert!(!engine.on_touch_begin(FINGER, Point::new(250.0, 250.0), 0));
    assert!(!engine.on_touch_move(FINGER, Point::new(250.0, 100.0), 10));
    assert!(!engine.on_touch_end(FINGER, Point::new(250.0, 100.0), 20));
    assert_eq!(engine.state(), GestureState::Animating);
}

#[test]
fn resizing_cancels_an_animation() {
    let (mut engine, _log) = sized_engine();
    engine.zoom_to(2.0, true);
    engine.set_container_size(Size::new(400.0, 400.0), false);
    assert_eq!(engine.state(), GestureState::Idle);
}

#[test]
fn zoom_in_and_out_animate() {
    let (mut engine, _log) = sized_engine();
    assert!(engine.zoom_in());
    let mut now = 0;
    while engine.advance(now) {
        now += 16;
    }
    assert!((engine.zoom() - 1.3).abs() < 1e-12);
    assert!(engine.zoom_out());
    assert_eq!(engine.state(), GestureState::Animating);
}

#[test]
fn frame_requests_follow_running_work() {
    struct Counter(Rc<Cell<usize>>);
    impl FrameScheduler for Counter {
        fn request_frame(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let (mut engine, _log) = sized_engine();
    let requests = Rc::new(Cell::new(0));
    engine.set_frame_scheduler(Some(Box::new(Counter(requests.clone()))));

    engine.zoom_to(2.0, true);
    assert_eq!(requests.get(), 1);
    let mut now = 0;
    while engine.advance(now) {
        now += 16;
    }
    let after = requests.get();
    assert!(after > 1);
    engine.advance(now + 16);
    assert_eq!(requests.get(), after);
}

#[test]
fn uninitialized_engine_is_inert() {
    let mut engine = PanZoomEngine::default();
    engine.set_content_size(Size::new(100.0, 100.0), false);
    assert!(!engine.zoom_to(2.0, false));
    assert!(!engine.zoom_to(2.0, true));
    assert!(!engine.on_touch_begin(FINGER, Point::ZERO, 0));
    assert!(!engine.advance(16));
    assert_eq!(engine.state(), GestureState::Idle);
    assert_eq!(engine.visible_content_rect(), Rect::ZERO);
}

#[test]
fn invalid_sizes_are_treated_as_unset() {
    let mut engine = PanZoomEngine::default();
    engine.set_content_size(Size::new(-1.0, 100.0), false);
    engine.set_container_size(Size::new(100.0, 100.0), false);
    assert!(!engine.is_initialized());
    assert_eq!(engine.content_size(), Size::ZERO);
}

#[test]
fn clear_resets_and_next_sizing_is_first_again() {
    let (mut engine, log) = sized_engine();
    engine.zoom_to(2.0, false);
    engine.on_touch_begin(FINGER, Point::new(250.0, 250.0), 0);
    engine.on_touch_move(FINGER, Point::new(250.0, 200.0), 10);
    take(&log);

    engine.clear();
    assert_eq!(engine.state(), GestureState::Idle);
    assert!(!engine.is_initialized());
    assert_eq!(engine.content_size(), Size::ZERO);
    assert_eq!(take(&log), [Event::Idle]);

    engine.set_content_size(Size::new(1000.0, 1000.0), false);
    assert_eq!(
        take(&log),
        [Event::Changed(Transform::new(0.5, Vec2::ZERO), true)]
    );
}

#[test]
fn scroll_metrics_and_visible_rect() {
    let (mut engine, _log) = sized_engine();
    engine.zoom_to(2.0, false);
    assert_eq!(
        engine.horizontal_scroll(),
        ScrollMetrics {
            range: 1000.0,
            offset: 250.0,
            extent: 500.0,
        }
    );
    assert_eq!(engine.vertical_scroll().offset, 250.0);
    assert_eq!(
        engine.visible_content_rect(),
        Rect::new(250.0, 250.0, 750.0, 750.0)
    );
}

#[test]
fn removed_observers_are_not_called() {
    let (mut engine, log) = sized_engine();
    let other = Log::default();
    let id = engine.add_observer(Box::new(Recorder(other.clone())));
    engine.zoom_to(2.0, false);
    assert!(engine.remove_observer(id));
    engine.zoom_to(1.0, false);
    assert_eq!(other.borrow().len(), 1);
    assert_eq!(take(&log).len(), 2);
    assert!(!engine.remove_observer(id));
}
