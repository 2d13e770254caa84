// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tweened transform changes driven by host frames.

use kurbo::Vec2;

use crate::Transform;

/// Progress curve of a [`Tween`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start and end (smoothstep).
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Interpolation from one transform to another over a fixed duration.
///
/// The clock starts at the first [`Tween::sample`], so a tween created
/// between frames does not jump on its first frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: Transform,
    to: Transform,
    duration_ms: u64,
    easing: Easing,
    start_ms: Option<u64>,
}

impl Tween {
    /// Creates a tween; it has not started until it is first sampled.
    #[must_use]
    pub fn new(from: Transform, to: Transform, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            start_ms: None,
        }
    }

    /// Final transform.
    #[must_use]
    pub fn target(&self) -> Transform {
        self.to
    }

    /// Returns the transform at `now_ms` and whether the tween has completed.
    ///
    /// The completing sample returns exactly the target transform.
    pub fn sample(&mut self, now_ms: u64) -> (Transform, bool) {
        let start = *self.start_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        if self.duration_ms == 0 || elapsed >= self.duration_ms {
            return (self.to, true);
        }
        let t = self.easing.apply(elapsed as f64 / self.duration_ms as f64);
        let scale = lerp(self.from.scale, self.to.scale, t);
        let translation = Vec2::new(
            lerp(self.from.translation.x, self.to.translation.x, t),
            lerp(self.from.translation.y, self.to.translation.y, t),
        );
        (Transform::new(scale, translation), false)
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
