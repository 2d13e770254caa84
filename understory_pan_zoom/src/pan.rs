// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan ranges, alignment and elastic over-scroll.
//!
//! All values here are translations in container pixels (the content origin's
//! position inside the container), not content-unit pans.

use kurbo::{Size, Vec2};

use crate::{Alignment, AxisAlignment, ConfigurationError, GeometryState};

/// One of the two pan axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X.
    Horizontal,
    /// Y.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const BOTH: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Component of `size` along this axis.
    #[must_use]
    pub fn of_size(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Component of `v` along this axis.
    #[must_use]
    pub fn of_vec(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    fn set(self, v: &mut Vec2, value: f64) {
        match self {
            Self::Horizontal => v.x = value,
            Self::Vertical => v.y = value,
        }
    }
}

/// Legal translation interval on one axis; `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanRange {
    /// Smallest legal translation.
    pub min: f64,
    /// Largest legal translation.
    pub max: f64,
}

impl PanRange {
    /// Clamps `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Returns `true` if `value` lies within the range (inclusive).
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Smallest range covering both `self` and `value`.
    #[must_use]
    pub fn including(self, value: f64) -> Self {
        if value.is_nan() {
            return self;
        }
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}

/// Computes legal pan ranges for the current geometry.
///
/// Content larger than the container may move as long as it still covers the
/// container: the range is `[container - content, 0]`. Content smaller than
/// the container is pinned by [`Alignment`]; with [`AxisAlignment::None`] it
/// may sit anywhere inside the container. When over-scroll is requested and
/// enabled for an axis, both ends widen by `over_scroll_factor * container`.
#[derive(Clone, Debug, PartialEq)]
pub struct PanManager {
    alignment: Alignment,
    over_scroll_horizontal: bool,
    over_scroll_vertical: bool,
    over_scroll_factor: f64,
}

impl PanManager {
    /// Default elastic slack, as a fraction of the container dimension.
    pub const DEFAULT_OVER_SCROLL_FACTOR: f64 = 0.5;

    /// Creates a manager with center alignment and over-scroll enabled on both axes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alignment: Alignment::CENTER,
            over_scroll_horizontal: true,
            over_scroll_vertical: true,
            over_scroll_factor: Self::DEFAULT_OVER_SCROLL_FACTOR,
        }
    }

    /// Alignment used for content smaller than the container.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Sets the alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Returns `true` if elastic over-scroll is enabled on `axis`.
    #[must_use]
    pub fn over_scroll(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.over_scroll_horizontal,
            Axis::Vertical => self.over_scroll_vertical,
        }
    }

    /// Enables or disables elastic over-scroll on `axis`.
    pub fn set_over_scroll(&mut self, axis: Axis, enabled: bool) {
        match axis {
            Axis::Horizontal => self.over_scroll_horizontal = enabled,
            Axis::Vertical => self.over_scroll_vertical = enabled,
        }
    }

    /// Elastic slack as a fraction of the container dimension.
    #[must_use]
    pub fn over_scroll_factor(&self) -> f64 {
        self.over_scroll_factor
    }

    /// Sets the elastic slack; it must be finite and non-negative.
    pub fn set_over_scroll_factor(&mut self, factor: f64) -> Result<(), ConfigurationError> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(ConfigurationError::InvalidFactor(factor));
        }
        self.over_scroll_factor = factor;
        Ok(())
    }

    /// Maximum excursion beyond the strict range on `axis`, in container pixels.
    #[must_use]
    pub fn max_over_scroll(&self, geometry: &GeometryState, axis: Axis) -> f64 {
        if self.over_scroll(axis) {
            self.over_scroll_factor * axis.of_size(geometry.container_size())
        } else {
            0.0
        }
    }

    /// Legal translation range on `axis`.
    #[must_use]
    pub fn compute_pan_range(
        &self,
        geometry: &GeometryState,
        axis: Axis,
        allow_over_scroll: bool,
    ) -> PanRange {
        let container = axis.of_size(geometry.container_size());
        let content = axis.of_size(geometry.content_scaled_size());
        let extra = container - content;
        let (min, max) = if extra >= 0.0 {
            match self.alignment.for_axis(axis).offset(extra) {
                Some(pinned) => (pinned, pinned),
                None => (0.0, extra),
            }
        } else {
            (extra, 0.0)
        };
        let slack = if allow_over_scroll {
            self.max_over_scroll(geometry, axis)
        } else {
            0.0
        };
        PanRange {
            min: min - slack,
            max: max + slack,
        }
    }

    /// Clamps a translation on `axis` into its legal range.
    #[must_use]
    pub fn check_bounds(
        &self,
        geometry: &GeometryState,
        axis: Axis,
        value: f64,
        allow_over_scroll: bool,
    ) -> f64 {
        self.compute_pan_range(geometry, axis, allow_over_scroll)
            .clamp(value)
    }

    /// [`PanManager::check_bounds`] for the horizontal axis.
    #[must_use]
    pub fn check_bounds_x(&self, geometry: &GeometryState, value: f64, allow: bool) -> f64 {
        self.check_bounds(geometry, Axis::Horizontal, value, allow)
    }

    /// [`PanManager::check_bounds`] for the vertical axis.
    #[must_use]
    pub fn check_bounds_y(&self, geometry: &GeometryState, value: f64, allow: bool) -> f64 {
        self.check_bounds(geometry, Axis::Vertical, value, allow)
    }

    /// Clamps a whole translation.
    #[must_use]
    pub fn check_translation(
        &self,
        geometry: &GeometryState,
        translation: Vec2,
        allow_over_scroll: bool,
    ) -> Vec2 {
        let mut out = translation;
        for axis in Axis::BOTH {
            let value = self.check_bounds(geometry, axis, axis.of_vec(translation), allow_over_scroll);
            axis.set(&mut out, value);
        }
        out
    }

    /// Clamps a translation so no axis ends further outside the strict range
    /// than it is now.
    ///
    /// An axis already over-scrolled may move back toward the range (or stay
    /// put) but never further out.
    #[must_use]
    pub fn check_translation_inward(&self, geometry: &GeometryState, translation: Vec2) -> Vec2 {
        let current = geometry.transform().translation;
        let mut out = translation;
        for axis in Axis::BOTH {
            let range = self
                .compute_pan_range(geometry, axis, false)
                .including(axis.of_vec(current));
            axis.set(&mut out, range.clamp(axis.of_vec(translation)));
        }
        out
    }

    /// Offset that places content with `extra` spare pixels according to `gravity`.
    ///
    /// `extra` is `container - scaled content` and may be negative, in which
    /// case centered or end gravity crops the content symmetrically or from
    /// the start. An axis without pinning places the content at the origin.
    #[must_use]
    pub fn apply_gravity(&self, gravity: Alignment, extra: f64, axis: Axis) -> f64 {
        match gravity.for_axis(axis) {
            AxisAlignment::None => 0.0,
            pinned => pinned.offset(extra).unwrap_or(0.0),
        }
    }

    /// Translation change needed to bring the current transform back into range.
    #[must_use]
    pub fn correction(&self, geometry: &GeometryState, allow_over_scroll: bool) -> Vec2 {
        let current = geometry.transform().translation;
        self.check_translation(geometry, current, allow_over_scroll) - current
    }

    /// Returns `true` if the current translation lies outside the strict range.
    #[must_use]
    pub fn is_over_scrolled(&self, geometry: &GeometryState) -> bool {
        self.correction(geometry, false) != Vec2::ZERO
    }
}

impl Default for PanManager {
    fn default() -> Self {
        Self::new()
    }
}
