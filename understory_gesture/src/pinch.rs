// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pointer pinch recognizer.
//!
//! The pinch starts when a second pointer goes down while one is already
//! held. Every subsequent move of either pointer yields a [`PinchUpdate`]
//! with the *incremental* scale factor (current span over previous span) and
//! the current and previous midpoints. Owners anchor the zoom at the focal
//! point: the content under the focal point must stay under it.
//!
//! Further pointers are ignored. Lifting either of the two pointers ends the
//! pinch; the remaining pointer stays recorded, so putting a second finger
//! down again starts a fresh pinch.

use kurbo::Point;

use crate::{GestureConfig, PointerId};

/// Reported when the second pointer lands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStart {
    /// Midpoint of the two pointers.
    pub focal: Point,
    /// Distance between the two pointers.
    pub span: f64,
}

/// Reported for each move while pinching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchUpdate {
    /// Current span divided by the span at the previous update.
    pub scale: f64,
    /// Current midpoint of the two pointers.
    pub focal: Point,
    /// Midpoint at the previous update.
    pub previous_focal: Point,
}

/// Tracks up to two pointers and reports pinch deltas.
#[derive(Clone, Debug)]
pub struct PinchRecognizer {
    min_span: f64,
    pointers: [Option<(PointerId, Point)>; 2],
    active: bool,
    initial_span: f64,
    previous_span: f64,
    previous_focal: Point,
}

impl PinchRecognizer {
    /// Creates a recognizer with no pointers down.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            min_span: config.min_pinch_span.max(f64::MIN_POSITIVE),
            pointers: [None, None],
            active: false,
            initial_span: 0.0,
            previous_span: 0.0,
            previous_focal: Point::ZERO,
        }
    }

    /// Records a pointer press; returns the start of a pinch when this is the second pointer.
    pub fn on_down(&mut self, pointer: PointerId, pos: Point) -> Option<PinchStart> {
        match self.pointers {
            [None, _] => {
                self.pointers[0] = Some((pointer, pos));
                None
            }
            [Some((first, _)), None] if first != pointer => {
                self.pointers[1] = Some((pointer, pos));
                let (span, focal) = self.geometry()?;
                self.active = true;
                self.initial_span = span;
                self.previous_span = span;
                self.previous_focal = focal;
                Some(PinchStart { focal, span })
            }
            _ => None,
        }
    }

    /// Records a pointer move; returns a pinch delta while pinching.
    pub fn on_move(&mut self, pointer: PointerId, pos: Point) -> Option<PinchUpdate> {
        let slot = self
            .pointers
            .iter_mut()
            .flatten()
            .find(|(id, _)| *id == pointer)?;
        slot.1 = pos;
        if !self.active {
            return None;
        }

        let (span, focal) = self.geometry()?;
        let previous_span = self.previous_span;
        let previous_focal = self.previous_focal;
        self.previous_span = span;
        self.previous_focal = focal;
        if span < self.min_span || previous_span < self.min_span {
            return None;
        }
        Some(PinchUpdate {
            scale: span / previous_span,
            focal,
            previous_focal,
        })
    }

    /// Records a pointer release; returns `true` if this ended an active pinch.
    pub fn on_up(&mut self, pointer: PointerId) -> bool {
        let Some(index) = self
            .pointers
            .iter()
            .position(|p| p.is_some_and(|(id, _)| id == pointer))
        else {
            return false;
        };
        self.pointers[index] = None;
        if index == 0 {
            self.pointers.swap(0, 1);
        }
        let ended = self.active;
        self.active = false;
        ended
    }

    /// Forgets every pointer and ends any pinch.
    pub fn cancel(&mut self) {
        self.pointers = [None, None];
        self.active = false;
    }

    /// Returns `true` while two pointers are down and pinching.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the number of recorded pointers (0, 1 or 2).
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.iter().flatten().count()
    }

    /// Current span relative to the span when the pinch started.
    #[must_use]
    pub fn total_scale(&self) -> f64 {
        if self.active && self.initial_span >= self.min_span {
            self.previous_span / self.initial_span
        } else {
            1.0
        }
    }

    fn geometry(&self) -> Option<(f64, Point)> {
        let [Some((_, a)), Some((_, b))] = self.pointers else {
            return None;
        };
        Some((a.distance(b), a.midpoint(b)))
    }
}
