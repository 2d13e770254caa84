// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment and gravity flags.

use crate::Axis;

bitflags::bitflags! {
    /// Edge or center that content is pinned to, per axis.
    ///
    /// Used twice: as the pan *alignment* (where content smaller than the
    /// container sits) and as the transformation *gravity* (where content is
    /// placed at first sizing). Combine one horizontal and one vertical flag,
    /// e.g. `Alignment::LEFT | Alignment::BOTTOM`.
    ///
    /// An axis with no flag set behaves as centered. If several flags are set
    /// for one axis, the start edge wins over the end edge, which wins over
    /// center, which wins over none.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Alignment: u8 {
        /// Pin to the left edge.
        const LEFT = 1 << 0;
        /// Pin to the right edge.
        const RIGHT = 1 << 1;
        /// Center horizontally.
        const CENTER_HORIZONTAL = 1 << 2;
        /// No horizontal pinning: smaller content may sit anywhere inside the container.
        const NONE_HORIZONTAL = 1 << 3;
        /// Pin to the top edge.
        const TOP = 1 << 4;
        /// Pin to the bottom edge.
        const BOTTOM = 1 << 5;
        /// Center vertically.
        const CENTER_VERTICAL = 1 << 6;
        /// No vertical pinning: smaller content may sit anywhere inside the container.
        const NONE_VERTICAL = 1 << 7;

        /// Center on both axes.
        const CENTER = Self::CENTER_HORIZONTAL.bits() | Self::CENTER_VERTICAL.bits();
        /// No pinning on either axis.
        const NONE = Self::NONE_HORIZONTAL.bits() | Self::NONE_VERTICAL.bits();
        /// Top-left corner.
        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        /// Bottom-right corner.
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Alignment resolved for a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisAlignment {
    /// Left or top.
    Start,
    /// Middle.
    Center,
    /// Right or bottom.
    End,
    /// Not pinned.
    None,
}

impl AxisAlignment {
    /// Offset of the content inside a container with `extra` spare pixels.
    ///
    /// Returns `None` for [`AxisAlignment::None`], which has no single offset.
    #[must_use]
    pub fn offset(self, extra: f64) -> Option<f64> {
        match self {
            Self::Start => Some(0.0),
            Self::Center => Some(extra / 2.0),
            Self::End => Some(extra),
            Self::None => None,
        }
    }
}

impl Alignment {
    /// Resolves the horizontal flags.
    #[must_use]
    pub fn horizontal(self) -> AxisAlignment {
        self.resolve(
            Self::LEFT,
            Self::RIGHT,
            Self::CENTER_HORIZONTAL,
            Self::NONE_HORIZONTAL,
        )
    }

    /// Resolves the vertical flags.
    #[must_use]
    pub fn vertical(self) -> AxisAlignment {
        self.resolve(Self::TOP, Self::BOTTOM, Self::CENTER_VERTICAL, Self::NONE_VERTICAL)
    }

    /// Resolves the flags for `axis`.
    #[must_use]
    pub fn for_axis(self, axis: Axis) -> AxisAlignment {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }

    fn resolve(self, start: Self, end: Self, center: Self, none: Self) -> AxisAlignment {
        if self.contains(start) {
            AxisAlignment::Start
        } else if self.contains(end) {
            AxisAlignment::End
        } else if self.contains(center) {
            AxisAlignment::Center
        } else if self.contains(none) {
            AxisAlignment::None
        } else {
            AxisAlignment::Center
        }
    }
}
