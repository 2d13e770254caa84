// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag recognizer: slop detection, movement deltas and fling on release.
//!
//! ## Usage
//!
//! 1) Call [`DragFlingRecognizer::on_down`] when a pointer goes down.
//! 2) On each move, call [`DragFlingRecognizer::on_move`]. Nothing is reported
//!    until the pointer has travelled more than [`GestureConfig::touch_slop`]
//!    from its press; after that every move yields a [`DragUpdate`].
//! 3) On release, [`DragFlingRecognizer::on_up`] reports a tap, a plain
//!    release, or a [`Fling`] when the release velocity is high enough.
//! 4) Call [`DragFlingRecognizer::cancel`] when something else (for example a
//!    pinch) takes over the pointer.
//!
//! Deltas are in the pointer's coordinate space. Owners that pan content in a
//! different unit (such as content coordinates under a zoom) convert them.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_gesture::drag::{DragFlingRecognizer, DragRelease};
//! use understory_gesture::{GestureConfig, PointerId};
//!
//! let mut drag = DragFlingRecognizer::new(GestureConfig::default());
//! let p = PointerId(7);
//!
//! drag.on_down(p, Point::new(10.0, 20.0), 0);
//! let first = drag.on_move(p, Point::new(10.0, 40.0), 100).unwrap();
//! assert!(first.started);
//! assert_eq!(first.delta, Vec2::new(0.0, 20.0));
//!
//! let next = drag.on_move(p, Point::new(10.0, 45.0), 200).unwrap();
//! assert!(!next.started);
//! assert_eq!(next.delta, Vec2::new(0.0, 5.0));
//!
//! // The pointer rested before lifting, so there is no fling.
//! assert_eq!(drag.on_up(p, Point::new(10.0, 45.0), 600), DragRelease::Released);
//! ```

use kurbo::{Point, Vec2};

use crate::fling::Fling;
use crate::velocity::VelocityTracker;
use crate::{GestureConfig, PointerId};

/// Movement reported by [`DragFlingRecognizer::on_move`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate {
    /// Movement since the previous report (or since the press for the first one).
    pub delta: Vec2,
    /// `true` for the first report after the slop was exceeded.
    pub started: bool,
}

/// Outcome of releasing the tracked pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragRelease {
    /// The pointer was not the tracked one, or nothing was being tracked.
    Ignored,
    /// The pointer never left the touch slop.
    Tap,
    /// A drag ended with a release velocity below the fling threshold.
    Released,
    /// A drag ended fast enough to fling.
    Fling(Fling),
}

/// Tracks one pointer from press to release.
#[derive(Clone, Debug)]
pub struct DragFlingRecognizer {
    config: GestureConfig,
    pointer: Option<PointerId>,
    /// Position of the press.
    start_pos: Option<Point>,
    /// Last position reported to the owner (or the press position before the slop is exceeded).
    last_pos: Option<Point>,
    dragging: bool,
    tracker: VelocityTracker,
}

impl DragFlingRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            pointer: None,
            start_pos: None,
            last_pos: None,
            dragging: false,
            tracker: VelocityTracker::new(config.velocity_window_ms, config.velocity_max_samples),
        }
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Starts tracking `pointer`, replacing any previous pointer.
    pub fn on_down(&mut self, pointer: PointerId, pos: Point, time_ms: u64) {
        self.pointer = Some(pointer);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.dragging = false;
        self.tracker.clear();
        self.tracker.add(time_ms, pos);
    }

    /// Feeds a move; returns the movement delta once past the slop.
    pub fn on_move(&mut self, pointer: PointerId, pos: Point, time_ms: u64) -> Option<DragUpdate> {
        if self.pointer != Some(pointer) {
            return None;
        }
        let (start, last) = (self.start_pos?, self.last_pos?);
        self.tracker.add(time_ms, pos);

        let started = if self.dragging {
            false
        } else if (pos - start).hypot() > self.config.touch_slop {
            self.dragging = true;
            true
        } else {
            return None;
        };

        self.last_pos = Some(pos);
        Some(DragUpdate {
            delta: pos - last,
            started,
        })
    }

    /// Releases `pointer` and classifies the gesture.
    ///
    /// The recognizer is reset afterwards.
    pub fn on_up(&mut self, pointer: PointerId, pos: Point, time_ms: u64) -> DragRelease {
        if self.pointer != Some(pointer) {
            return DragRelease::Ignored;
        }
        self.tracker.add(time_ms, pos);
        let release = if !self.dragging {
            DragRelease::Tap
        } else {
            let mut velocity = self.tracker.velocity();
            let speed = velocity.hypot();
            if speed > self.config.max_fling_velocity {
                velocity *= self.config.max_fling_velocity / speed;
            }
            if speed >= self.config.min_fling_velocity {
                DragRelease::Fling(Fling::new(velocity, time_ms, &self.config))
            } else {
                DragRelease::Released
            }
        };
        self.cancel();
        release
    }

    /// Total offset from the press position, while a pointer is tracked.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Stops tracking without reporting anything.
    pub fn cancel(&mut self) {
        self.pointer = None;
        self.start_pos = None;
        self.last_pos = None;
        self.dragging = false;
        self.tracker.clear();
    }

    /// Returns the tracked pointer, if any.
    #[must_use]
    pub fn pointer(&self) -> Option<PointerId> {
        self.pointer
    }

    /// Returns `true` while a pointer is tracked (pressed, dragging or not).
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.pointer.is_some()
    }

    /// Returns `true` once the tracked pointer has left the touch slop.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
