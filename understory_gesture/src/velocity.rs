// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer velocity estimation over a short trailing window.
//!
//! Using only the last two samples makes release velocity jittery: a single
//! late or duplicated sample can double or zero it. [`VelocityTracker`] keeps
//! every sample from the last few tens of milliseconds and fits a straight
//! line through them (least squares) per axis.
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::velocity::VelocityTracker;
//!
//! let mut tracker = VelocityTracker::new(100, 20);
//! tracker.add(0, Point::new(0.0, 0.0));
//! tracker.add(10, Point::new(10.0, 0.0));
//! tracker.add(20, Point::new(20.0, 0.0));
//!
//! // 10 px every 10 ms is 1000 px/s.
//! let v = tracker.velocity();
//! assert!((v.x - 1000.0).abs() < 1e-9);
//! assert_eq!(v.y, 0.0);
//! ```

use alloc::collections::VecDeque;

use kurbo::{Point, Vec2};

/// Collects timestamped positions and estimates velocity in units per second.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    samples: VecDeque<(u64, Point)>,
    window_ms: u64,
    max_samples: usize,
}

impl VelocityTracker {
    /// Creates a tracker keeping samples no older than `window_ms` relative to
    /// the newest one, and at most `max_samples` of them.
    #[must_use]
    pub fn new(window_ms: u64, max_samples: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(max_samples.max(2)),
            window_ms,
            max_samples: max_samples.max(2),
        }
    }

    /// Records a position at `time_ms`.
    ///
    /// A timestamp older than the newest sample means the host restarted its
    /// clock; the history is discarded.
    pub fn add(&mut self, time_ms: u64, pos: Point) {
        if let Some(&(last, _)) = self.samples.back() {
            if time_ms < last {
                self.samples.clear();
            }
        }
        self.samples.push_back((time_ms, pos));
        while self.samples.len() > self.max_samples {
            self.samples.pop_front();
        }
        while let Some(&(first, _)) = self.samples.front() {
            if time_ms - first > self.window_ms {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Drops all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Returns the number of samples currently in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no samples are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Estimated velocity in units per second.
    ///
    /// Returns zero with fewer than two samples or when all samples share a
    /// timestamp.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        let Some(&(newest, _)) = self.samples.back() else {
            return Vec2::ZERO;
        };
        if self.samples.len() < 2 {
            return Vec2::ZERO;
        }

        // Time axis in seconds, relative to the newest sample (so always <= 0).
        let offset_secs = |t: u64| -((newest - t) as f64) / 1000.0;
        let n = self.samples.len() as f64;

        let mut mean_t = 0.0;
        let mut mean = Vec2::ZERO;
        for &(t, p) in &self.samples {
            mean_t += offset_secs(t);
            mean += p.to_vec2();
        }
        mean_t /= n;
        mean /= n;

        let mut var_t = 0.0;
        let mut cov = Vec2::ZERO;
        for &(t, p) in &self.samples {
            let dt = offset_secs(t) - mean_t;
            var_t += dt * dt;
            cov += (p.to_vec2() - mean) * dt;
        }
        if var_t <= f64::EPSILON {
            return Vec2::ZERO;
        }
        cov / var_t
    }
}
