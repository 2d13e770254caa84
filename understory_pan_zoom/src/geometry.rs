// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Uniform scale plus translation mapping content space into container space.
///
/// `container = content * scale + translation`. The scale is the *real zoom*;
/// there is only one scale field, so horizontal and vertical scale are always
/// equal. `translation` is expressed in container pixels (the "scaled pan").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Real zoom.
    pub scale: f64,
    /// Offset of the content origin in container pixels.
    pub translation: Vec2,
}

impl Transform {
    /// Scale `1.0`, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform from a real zoom and a translation in container pixels.
    #[must_use]
    pub const fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Horizontal scale; always equal to [`Transform::scale_y`].
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale
    }

    /// Vertical scale; always equal to [`Transform::scale_x`].
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale
    }

    /// Translation expressed in content units (`translation / scale`).
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.translation / self.scale
    }

    /// Content → container as a kurbo [`Affine`].
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Maps a content-space point into container space.
    #[must_use]
    pub fn content_to_container(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.translation).to_point()
    }

    /// Maps a container-space point into content space.
    #[must_use]
    pub fn container_to_content(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.translation) / self.scale).to_point()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Content size, container size and the current transform.
///
/// This is plain data: [`TransformController`](crate::TransformController)
/// is its only writer and everything else reads snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeometryState {
    pub(crate) content_size: Size,
    pub(crate) container_size: Size,
    pub(crate) transform: Transform,
}

impl GeometryState {
    /// Size of the content in content units; zero while unset.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Size of the container in container pixels; zero while unset.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Current transform snapshot.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns `true` once both sizes are known (non-zero on both axes).
    #[must_use]
    pub fn has_sizes(&self) -> bool {
        is_set(self.content_size) && is_set(self.container_size)
    }

    /// Content size multiplied by the current real zoom.
    #[must_use]
    pub fn content_scaled_size(&self) -> Size {
        self.content_size * self.transform.scale
    }

    /// Content bounds in container pixels.
    #[must_use]
    pub fn content_scaled_rect(&self) -> Rect {
        Rect::from_origin_size(
            self.transform.translation.to_point(),
            self.content_scaled_size(),
        )
    }

    /// The part of the content currently visible, in content units.
    ///
    /// Returns [`Rect::ZERO`] while the engine is not sized.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        if !self.has_sizes() {
            return Rect::ZERO;
        }
        let visible = Rect::from_origin_size(
            self.transform.container_to_content(Point::ZERO),
            self.container_size / self.transform.scale,
        );
        visible.intersect(self.content_size.to_rect())
    }

    /// Zeroes the content size and resets the transform.
    ///
    /// The container size is kept: it belongs to the host layout, not the content.
    pub(crate) fn clear(&mut self) {
        self.content_size = Size::ZERO;
        self.transform = Transform::IDENTITY;
    }
}

pub(crate) fn is_set(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.is_finite()
}
