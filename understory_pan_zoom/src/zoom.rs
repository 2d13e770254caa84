// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom units, limits and bounds checking.

use crate::ConfigurationError;

/// Unit a zoom value is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomUnit {
    /// Relative to the base transformation zoom (`1.0` = fitted).
    #[default]
    Logical,
    /// The actual scale factor applied to the content.
    Real,
}

/// A zoom limit together with its unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimit {
    /// Limit value.
    pub value: f64,
    /// Unit of [`ZoomLimit::value`].
    pub unit: ZoomUnit,
}

impl ZoomLimit {
    /// A limit in logical units.
    #[must_use]
    pub const fn logical(value: f64) -> Self {
        Self {
            value,
            unit: ZoomUnit::Logical,
        }
    }

    /// A limit in real units.
    #[must_use]
    pub const fn real(value: f64) -> Self {
        Self {
            value,
            unit: ZoomUnit::Real,
        }
    }
}

/// Resolved real-zoom bounds; `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRange {
    /// Minimum real zoom.
    pub min: f64,
    /// Maximum real zoom.
    pub max: f64,
}

impl ZoomRange {
    /// Returns `true` if `real` lies within the range (inclusive).
    #[must_use]
    pub fn contains(&self, real: f64) -> bool {
        real >= self.min && real <= self.max
    }
}

/// Converts between logical and real zoom and enforces zoom limits.
///
/// The manager never owns the transform; it only answers questions about zoom
/// values. The base transformation zoom is pushed in by the controller each
/// time the sizes change. Until then logical and real units coincide, so no
/// conversion ever divides by an unknown base.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomManager {
    min: ZoomLimit,
    max: ZoomLimit,
    over_pinch_factor: f64,
    base_zoom: Option<f64>,
}

impl ZoomManager {
    /// Default minimum zoom, in logical units.
    pub const DEFAULT_MIN_ZOOM: f64 = 0.8;
    /// Default maximum zoom, in logical units.
    pub const DEFAULT_MAX_ZOOM: f64 = 2.5;
    /// Default elastic factor beyond the zoom limits during a pinch.
    pub const DEFAULT_OVER_PINCH_FACTOR: f64 = 1.2;

    /// Creates a manager with the given limits and over-pinch factor.
    ///
    /// Invalid values fall back to the defaults.
    #[must_use]
    pub fn new(min: ZoomLimit, max: ZoomLimit, over_pinch_factor: f64) -> Self {
        let mut manager = Self::default();
        report(manager.set_min_zoom(min));
        report(manager.set_max_zoom(max));
        report(manager.set_over_pinch_factor(over_pinch_factor));
        manager
    }

    /// Base transformation zoom, once known.
    #[must_use]
    pub fn base_zoom(&self) -> Option<f64> {
        self.base_zoom
    }

    pub(crate) fn set_base_zoom(&mut self, base: Option<f64>) {
        self.base_zoom = base.filter(|b| b.is_finite() && *b > 0.0);
    }

    fn base(&self) -> f64 {
        self.base_zoom.unwrap_or(1.0)
    }

    /// Converts a real zoom into logical units.
    #[must_use]
    pub fn real_zoom_to_logical(&self, real: f64) -> f64 {
        real / self.base()
    }

    /// Converts a logical zoom into real units.
    #[must_use]
    pub fn logical_to_real_zoom(&self, logical: f64) -> f64 {
        logical * self.base()
    }

    /// Converts a zoom limit into real units.
    #[must_use]
    pub fn resolve(&self, limit: ZoomLimit) -> f64 {
        match limit.unit {
            ZoomUnit::Logical => self.logical_to_real_zoom(limit.value),
            ZoomUnit::Real => limit.value,
        }
    }

    /// Configured minimum zoom.
    #[must_use]
    pub fn min_zoom(&self) -> ZoomLimit {
        self.min
    }

    /// Configured maximum zoom.
    #[must_use]
    pub fn max_zoom(&self) -> ZoomLimit {
        self.max
    }

    /// Sets the minimum zoom; non-positive or non-finite values are refused.
    pub fn set_min_zoom(&mut self, limit: ZoomLimit) -> Result<(), ConfigurationError> {
        self.min = validate_limit(limit)?;
        Ok(())
    }

    /// Sets the maximum zoom; non-positive or non-finite values are refused.
    pub fn set_max_zoom(&mut self, limit: ZoomLimit) -> Result<(), ConfigurationError> {
        self.max = validate_limit(limit)?;
        Ok(())
    }

    /// Elastic factor applied beyond the limits while pinching.
    #[must_use]
    pub fn over_pinch_factor(&self) -> f64 {
        self.over_pinch_factor
    }

    /// Sets the over-pinch factor; it must be finite and at least `1.0`.
    pub fn set_over_pinch_factor(&mut self, factor: f64) -> Result<(), ConfigurationError> {
        if !factor.is_finite() || factor < 1.0 {
            return Err(ConfigurationError::InvalidFactor(factor));
        }
        self.over_pinch_factor = factor;
        Ok(())
    }

    /// Resolves both limits into real zoom.
    ///
    /// If the minimum resolves above the maximum, the pair is swapped and the
    /// inconsistency is reported at `debug` level.
    #[must_use]
    pub fn resolve_bounds(&self) -> ZoomRange {
        let min = self.resolve(self.min);
        let max = self.resolve(self.max);
        if min > max {
            tracing::debug!(
                error = %ConfigurationError::InvertedZoomBounds { min, max },
                "swapping zoom bounds"
            );
            ZoomRange { min: max, max: min }
        } else {
            ZoomRange { min, max }
        }
    }

    /// Real-zoom range allowed while pinching with over-pinch enabled.
    #[must_use]
    pub fn elastic_bounds(&self) -> ZoomRange {
        let strict = self.resolve_bounds();
        ZoomRange {
            min: strict.min / self.over_pinch_factor,
            max: strict.max * self.over_pinch_factor,
        }
    }

    /// Clamps a real zoom into the strict or the elastic range.
    ///
    /// A NaN input resolves to the minimum.
    #[must_use]
    pub fn check_bounds(&self, real: f64, allow_over_pinch: bool) -> f64 {
        let range = if allow_over_pinch {
            self.elastic_bounds()
        } else {
            self.resolve_bounds()
        };
        if real.is_nan() {
            return range.min;
        }
        real.clamp(range.min, range.max)
    }
}

impl Default for ZoomManager {
    fn default() -> Self {
        Self {
            min: ZoomLimit::logical(Self::DEFAULT_MIN_ZOOM),
            max: ZoomLimit::logical(Self::DEFAULT_MAX_ZOOM),
            over_pinch_factor: Self::DEFAULT_OVER_PINCH_FACTOR,
            base_zoom: None,
        }
    }
}

/// Logs a refused configuration value; the previous value stays in effect.
pub(crate) fn report(result: Result<(), ConfigurationError>) {
    if let Err(error) = result {
        tracing::debug!(%error, "ignoring configuration value");
    }
}

fn validate_limit(limit: ZoomLimit) -> Result<ZoomLimit, ConfigurationError> {
    if limit.value.is_finite() && limit.value > 0.0 {
        Ok(limit)
    } else {
        Err(ConfigurationError::InvalidZoom(limit.value))
    }
}
