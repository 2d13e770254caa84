// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::Alignment;

/// How content is initially fitted into the container.
///
/// The resulting real zoom is the *base transformation zoom*: logical zoom
/// `1.0` corresponds to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Keep the content at its natural size (base zoom `1.0`).
    None,
    /// Scale so that the whole content fits inside the container.
    #[default]
    CenterInside,
    /// Scale so that the content covers the whole container.
    CenterCrop,
}

/// Fit mode plus the gravity used to place the content at first sizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transformation {
    /// How the base zoom is computed.
    pub fit: FitMode,
    /// Where the fitted content is placed inside the container.
    pub gravity: Alignment,
}

impl Transformation {
    /// Creates a transformation from a fit mode and a gravity.
    #[must_use]
    pub const fn new(fit: FitMode, gravity: Alignment) -> Self {
        Self { fit, gravity }
    }

    /// Computes the base transformation zoom for the given sizes.
    ///
    /// Both sizes must be non-empty; callers check that first.
    #[must_use]
    pub fn base_zoom(&self, content: Size, container: Size) -> f64 {
        let sx = container.width / content.width;
        let sy = container.height / content.height;
        match self.fit {
            FitMode::None => 1.0,
            FitMode::CenterInside => sx.min(sy),
            FitMode::CenterCrop => sx.max(sy),
        }
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::new(FitMode::CenterInside, Alignment::CENTER)
    }
}

/// What a fling does when the content reaches a pan bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FlingWallPolicy {
    /// The fling never over-scrolls: an axis that hits its bound stops dead.
    #[default]
    HardStop,
    /// The fling may run into the over-scroll band of axes that allow it; it
    /// stops at the band's edge and the content settles back when the fling
    /// ends.
    Elastic,
}
