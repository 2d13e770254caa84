// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Thresholds shared by the recognizers in this crate.
///
/// Distances are in the pointer's coordinate space (logical pixels for most
/// hosts) and velocities in those units per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Distance a pointer must travel from its press before a drag starts.
    ///
    /// Anything below this is treated as a tap.
    pub touch_slop: f64,
    /// Minimum release speed for a drag to turn into a fling.
    pub min_fling_velocity: f64,
    /// Release speeds above this are clamped down to it.
    pub max_fling_velocity: f64,
    /// A fling whose speed drops below this is finished.
    pub fling_stop_velocity: f64,
    /// Fraction of fling velocity retained after one second, in `(0, 1)`.
    pub fling_retention: f64,
    /// Width of the trailing sample window used for release velocity.
    pub velocity_window_ms: u64,
    /// Maximum number of samples kept by the velocity tracker.
    pub velocity_max_samples: usize,
    /// Pinch spans below this are ignored to avoid degenerate scale factors.
    pub min_pinch_span: f64,
}

impl GestureConfig {
    /// Default drag threshold, in logical pixels.
    pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: Self::DEFAULT_TOUCH_SLOP,
            min_fling_velocity: 50.0,
            max_fling_velocity: 8_000.0,
            fling_stop_velocity: 20.0,
            fling_retention: 0.02,
            velocity_window_ms: 100,
            velocity_max_samples: 20,
            min_pinch_span: 1.0,
        }
    }
}
