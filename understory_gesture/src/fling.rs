// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exponential-decay fling.
//!
//! A [`Fling`] starts with a release velocity and, on every frame, advances by
//! `velocity * dt` before decaying the velocity by a fixed retention factor per
//! second. It never schedules itself: the host calls [`Fling::step`] once per
//! frame with the frame timestamp and applies the returned displacement.
//!
//! Axes can be stopped independently with [`Fling::stop_x`] / [`Fling::stop_y`],
//! which is how an owner models content hitting a wall on one axis while it
//! keeps sliding along the other.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

use crate::GestureConfig;

/// A decaying-velocity fling in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fling {
    velocity: Vec2,
    last_time: u64,
    retention: f64,
    stop_velocity: f64,
}

impl Fling {
    /// Starts a fling at `start_ms` with `velocity` (units per second).
    ///
    /// The retention factor is clamped into `(0, 1)`; a value outside that
    /// range would never decay (or would reverse direction).
    #[must_use]
    pub fn new(velocity: Vec2, start_ms: u64, config: &GestureConfig) -> Self {
        Self {
            velocity,
            last_time: start_ms,
            retention: config.fling_retention.clamp(1e-6, 1.0 - 1e-6),
            stop_velocity: config.fling_stop_velocity.max(0.0),
        }
    }

    /// Current velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Returns `true` once the speed is below the stop threshold.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.velocity.hypot() < self.stop_velocity || self.velocity == Vec2::ZERO
    }

    /// Stops horizontal motion.
    pub fn stop_x(&mut self) {
        self.velocity.x = 0.0;
    }

    /// Stops vertical motion.
    pub fn stop_y(&mut self) {
        self.velocity.y = 0.0;
    }

    /// Advances the fling to `now_ms`, returning the displacement for this frame.
    ///
    /// Returns `None` when the fling is already finished. A timestamp that does
    /// not move forward yields a zero displacement.
    pub fn step(&mut self, now_ms: u64) -> Option<Vec2> {
        if self.is_finished() {
            return None;
        }
        if now_ms <= self.last_time {
            return Some(Vec2::ZERO);
        }
        let dt = (now_ms - self.last_time) as f64 / 1000.0;
        self.last_time = now_ms;
        let displacement = self.velocity * dt;
        self.velocity *= self.retention.powf(dt);
        Some(displacement)
    }
}
