// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::zoom::report;
use crate::{
    Alignment, Axis, ConfigurationError, Easing, GeometryState, Observer, ObserverId, PanManager,
    Transform, TransformChange, Transformation, Tween, UpdateDispatcher, ZoomLimit, ZoomManager,
    ZoomRange,
};

/// Scrollbar-style description of one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Scaled content length along the axis.
    pub range: f64,
    /// How far the container has scrolled into the content.
    pub offset: f64,
    /// Container length along the axis.
    pub extent: f64,
}

/// Sole writer of the transform.
///
/// Every mutating call bounds-checks through [`ZoomManager`] and
/// [`PanManager`], writes the transform only if the checked value differs
/// from the current one, and then notifies observers exactly once. Animations
/// notify once per [`TransformController::step`].
#[derive(Debug)]
pub struct TransformController {
    geometry: GeometryState,
    zoom: ZoomManager,
    pan: PanManager,
    transformation: Transformation,
    easing: Easing,
    animation_duration_ms: u64,
    animation: Option<Tween>,
    sized_once: bool,
    dispatcher: UpdateDispatcher,
}

impl TransformController {
    /// Default animation duration in milliseconds.
    pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 280;

    /// Creates a controller with unset sizes and an identity transform.
    #[must_use]
    pub fn new(zoom: ZoomManager, pan: PanManager, transformation: Transformation) -> Self {
        Self {
            geometry: GeometryState::default(),
            zoom,
            pan,
            transformation,
            easing: Easing::default(),
            animation_duration_ms: Self::DEFAULT_ANIMATION_DURATION_MS,
            animation: None,
            sized_once: false,
            dispatcher: UpdateDispatcher::new(),
        }
    }

    /// Read-only geometry snapshot.
    #[must_use]
    pub fn geometry(&self) -> &GeometryState {
        &self.geometry
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.geometry.transform
    }

    /// Zoom policy in use.
    #[must_use]
    pub fn zoom_manager(&self) -> &ZoomManager {
        &self.zoom
    }

    /// Pan policy in use.
    #[must_use]
    pub fn pan_manager(&self) -> &PanManager {
        &self.pan
    }

    /// Fit mode and gravity in use.
    #[must_use]
    pub fn transformation(&self) -> Transformation {
        self.transformation
    }

    /// Observers notified by this controller.
    pub fn dispatcher_mut(&mut self) -> &mut UpdateDispatcher {
        &mut self.dispatcher
    }

    /// Registers an observer.
    pub fn add_observer(&mut self, observer: alloc::boxed::Box<dyn Observer>) -> ObserverId {
        self.dispatcher.add(observer)
    }

    /// Removes an observer; returns `false` if `id` is unknown.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.dispatcher.remove(id)
    }

    /// Returns `true` once both sizes are known and the base zoom is computed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.geometry.has_sizes() && self.zoom.base_zoom().is_some()
    }

    /// Current zoom in logical units.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom.real_zoom_to_logical(self.geometry.transform.scale)
    }

    /// Current real zoom.
    #[must_use]
    pub fn real_zoom(&self) -> f64 {
        self.geometry.transform.scale
    }

    /// Current pan in content units.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.geometry.transform.pan()
    }

    /// Resolved real-zoom bounds.
    #[must_use]
    pub fn zoom_bounds(&self) -> ZoomRange {
        self.zoom.resolve_bounds()
    }

    /// Scroll position along `axis`, for hosts drawing scrollbars.
    #[must_use]
    pub fn scroll_metrics(&self, axis: Axis) -> ScrollMetrics {
        ScrollMetrics {
            range: axis.of_size(self.geometry.content_scaled_size()),
            offset: -axis.of_vec(self.geometry.transform.translation),
            extent: axis.of_size(self.geometry.container_size),
        }
    }

    // --- sizing ---

    /// Sets the content size.
    ///
    /// Returns `true` if observers were notified. See
    /// [`TransformController::set_container_size`] for the sizing rules.
    pub fn set_content_size(&mut self, size: Size, apply_base_transform: bool) -> bool {
        let size = sanitize(size);
        if self.geometry.content_size == size && !apply_base_transform {
            return false;
        }
        self.geometry.content_size = size;
        self.on_size_changed(apply_base_transform)
    }

    /// Sets the container size.
    ///
    /// Once both sizes are known for the first time (or whenever
    /// `apply_base_transform` is set) the base zoom is applied and the content
    /// is placed by the transformation gravity. On later changes the real zoom
    /// is kept unless it now violates the bounds. Either way the pan is
    /// re-enforced without over-scroll and one notification fires, flagged
    /// with [`TransformChange::first_sizing`] the first time only. Setting the
    /// same size again does nothing.
    pub fn set_container_size(&mut self, size: Size, apply_base_transform: bool) -> bool {
        let size = sanitize(size);
        if self.geometry.container_size == size && !apply_base_transform {
            return false;
        }
        self.geometry.container_size = size;
        self.on_size_changed(apply_base_transform)
    }

    fn on_size_changed(&mut self, apply_base_transform: bool) -> bool {
        if !self.geometry.has_sizes() {
            return false;
        }
        let content = self.geometry.content_size;
        let container = self.geometry.container_size;
        let base = self.transformation.base_zoom(content, container);
        self.zoom.set_base_zoom(Some(base));

        let first_sizing = !self.sized_once;
        let scale = if first_sizing || apply_base_transform {
            self.sized_once = true;
            base
        } else {
            self.geometry.transform.scale
        };
        self.geometry.transform.scale = self.zoom.check_bounds(scale, false);

        let translation = if first_sizing || apply_base_transform {
            let scaled = self.geometry.content_scaled_size();
            let gravity = self.transformation.gravity;
            Vec2::new(
                self.pan.apply_gravity(gravity, container.width - scaled.width, Axis::Horizontal),
                self.pan.apply_gravity(gravity, container.height - scaled.height, Axis::Vertical),
            )
        } else {
            self.geometry.transform.translation
        };
        self.geometry.transform.translation =
            self.pan
                .check_translation(&self.geometry, translation, false);

        tracing::debug!(
            base_zoom = base,
            first_sizing,
            real_zoom = self.geometry.transform.scale,
            "sizes changed"
        );
        self.notify(first_sizing);
        true
    }

    /// Zeroes the content size and forgets the base zoom.
    ///
    /// The next time both sizes are known counts as a first sizing again.
    pub fn clear(&mut self) {
        self.geometry.clear();
        self.zoom.set_base_zoom(None);
        self.sized_once = false;
        self.animation = None;
    }

    // --- configuration ---

    /// Sets the minimum zoom and re-enforces the bounds.
    pub fn set_min_zoom(&mut self, limit: ZoomLimit) -> Result<bool, ConfigurationError> {
        self.zoom.set_min_zoom(limit)?;
        Ok(self.enforce_bounds())
    }

    /// Sets the maximum zoom and re-enforces the bounds.
    pub fn set_max_zoom(&mut self, limit: ZoomLimit) -> Result<bool, ConfigurationError> {
        self.zoom.set_max_zoom(limit)?;
        Ok(self.enforce_bounds())
    }

    /// Sets the over-pinch factor.
    pub fn set_over_pinch_factor(&mut self, factor: f64) -> Result<(), ConfigurationError> {
        self.zoom.set_over_pinch_factor(factor)
    }

    /// Sets the over-scroll factor.
    pub fn set_over_scroll_factor(&mut self, factor: f64) -> Result<(), ConfigurationError> {
        self.pan.set_over_scroll_factor(factor)
    }

    /// Enables or disables over-scroll on `axis`.
    pub fn set_over_scroll(&mut self, axis: Axis, enabled: bool) {
        self.pan.set_over_scroll(axis, enabled);
    }

    /// Sets the alignment and re-enforces the bounds.
    pub fn set_alignment(&mut self, alignment: Alignment) -> bool {
        self.pan.set_alignment(alignment);
        self.enforce_bounds()
    }

    /// Sets fit mode and gravity; they take effect at the next base transformation.
    pub fn set_transformation(&mut self, transformation: Transformation) {
        self.transformation = transformation;
    }

    /// Sets the duration and easing of programmatic animations.
    pub fn set_animation(&mut self, duration_ms: u64, easing: Easing) {
        self.animation_duration_ms = duration_ms;
        self.easing = easing;
    }

    /// Duration of programmatic animations in milliseconds.
    #[must_use]
    pub fn animation_duration_ms(&self) -> u64 {
        self.animation_duration_ms
    }

    fn enforce_bounds(&mut self) -> bool {
        if !self.is_initialized() {
            return false;
        }
        let center = self.container_center();
        let scale = self.zoom.check_bounds(self.geometry.transform.scale, false);
        let target = self.zoom_about(scale, center, center, false);
        self.commit(target)
    }

    // --- immediate mutations ---

    /// Zooms to `real` around the container center.
    pub fn apply_zoom(&mut self, real: f64, allow_over_pinch: bool) -> bool {
        if !self.is_initialized() || !real.is_finite() {
            return false;
        }
        let center = self.container_center();
        let scale = self.zoom.check_bounds(real, allow_over_pinch);
        let target = self.zoom_about(scale, center, center, allow_over_pinch);
        self.commit(target)
    }

    /// Zooms to `real`, moving the content under `from` (container
    /// coordinates) to `to`.
    ///
    /// With `from == to` this is a zoom anchored at a fixed point; a pinch
    /// whose midpoint moves passes the previous and current midpoints.
    pub fn apply_zoom_about(
        &mut self,
        real: f64,
        from: Point,
        to: Point,
        allow_over_pinch: bool,
        allow_over_scroll: bool,
    ) -> bool {
        if !self.is_initialized() || !real.is_finite() {
            return false;
        }
        let scale = self.zoom.check_bounds(real, allow_over_pinch);
        let target = self.zoom_about(scale, from, to, allow_over_scroll);
        self.commit(target)
    }

    /// Pans by `delta` content units.
    pub fn apply_pan(&mut self, delta: Vec2, allow_over_scroll: bool) -> bool {
        if !self.is_initialized() || !delta.is_finite() {
            return false;
        }
        let t = self.geometry.transform;
        let target = self.constrain(
            Transform::new(t.scale, t.translation + delta * t.scale),
            allow_over_scroll,
        );
        self.commit(target)
    }

    /// Moves to real zoom `real` and absolute pan `pan` (content units) at once.
    pub fn apply_zoom_and_pan(&mut self, real: f64, pan: Vec2, allow_over_pan: bool) -> bool {
        match self.zoom_and_pan_target(real, pan, allow_over_pan) {
            Some(target) => self.commit(target),
            None => false,
        }
    }

    /// Brings an over-scrolled or over-pinched transform back within strict
    /// bounds in one step, pivoting any zoom correction around `pivot`.
    pub fn settle(&mut self, pivot: Point) -> bool {
        if !self.is_initialized() {
            return false;
        }
        let scale = self.zoom.check_bounds(self.geometry.transform.scale, false);
        let target = self.zoom_about(scale, pivot, pivot, false);
        self.commit(target)
    }

    /// Returns `true` if the transform lies outside strict zoom or pan bounds.
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        self.is_initialized()
            && (!self.zoom_bounds().contains(self.geometry.transform.scale)
                || self.pan.is_over_scrolled(&self.geometry))
    }

    // --- animations ---

    /// Animates to `real` zoom around the container center.
    pub fn animate_zoom(&mut self, real: f64) -> bool {
        if !self.is_initialized() || !real.is_finite() {
            return false;
        }
        let center = self.container_center();
        let scale = self.zoom.check_bounds(real, false);
        let target = self.zoom_about(scale, center, center, false);
        self.start_animation(target)
    }

    /// Animates to an absolute pan (content units) at the current zoom.
    pub fn animate_pan(&mut self, pan: Vec2) -> bool {
        let real = self.geometry.transform.scale;
        self.animate_zoom_and_pan(real, pan)
    }

    /// Animates to real zoom `real` and absolute pan `pan` (content units).
    pub fn animate_zoom_and_pan(&mut self, real: f64, pan: Vec2) -> bool {
        match self.zoom_and_pan_target(real, pan, false) {
            Some(target) => self.start_animation(target),
            None => false,
        }
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advances the running animation to `now_ms`.
    ///
    /// Applies one intermediate transform per call and notifies only when it
    /// differs from the current one; the first call starts the clock, so it
    /// usually changes nothing. The final call applies the exact target.
    /// Returns `true` while more steps are needed.
    pub fn step(&mut self, now_ms: u64) -> bool {
        let Some(tween) = self.animation.as_mut() else {
            return false;
        };
        let (sample, done) = tween.sample(now_ms);
        if done {
            self.animation = None;
        }
        // Limits may have changed since the tween was created.
        let scale = self.zoom.check_bounds(sample.scale, false);
        let next = self.constrain(Transform::new(scale, sample.translation), false);
        self.commit(next);
        !done
    }

    /// Stops the running animation where it is; returns `true` if one was running.
    pub fn cancel_animations(&mut self) -> bool {
        self.animation.take().is_some()
    }

    fn start_animation(&mut self, target: Transform) -> bool {
        if target == self.geometry.transform {
            self.animation = None;
            return false;
        }
        tracing::trace!(?target, "starting transform animation");
        self.animation = Some(Tween::new(
            self.geometry.transform,
            target,
            self.animation_duration_ms,
            self.easing,
        ));
        true
    }

    // --- helpers ---

    fn container_center(&self) -> Point {
        self.geometry.container_size.to_rect().center()
    }

    fn zoom_and_pan_target(&self, real: f64, pan: Vec2, allow_over_pan: bool) -> Option<Transform> {
        if !self.is_initialized() || !real.is_finite() || !pan.is_finite() {
            return None;
        }
        let scale = self.zoom.check_bounds(real, false);
        Some(self.constrain(Transform::new(scale, pan * scale), allow_over_pan))
    }

    /// Transform with `scale` that maps the content under `from` to `to`,
    /// with its pan constrained.
    fn zoom_about(&self, scale: f64, from: Point, to: Point, allow_over_scroll: bool) -> Transform {
        let current = self.geometry.transform;
        if scale == current.scale && from == to {
            return self.constrain(current, allow_over_scroll);
        }
        let content_pt = current.container_to_content(from);
        let translation = to.to_vec2() - content_pt.to_vec2() * scale;
        self.constrain(Transform::new(scale, translation), allow_over_scroll)
    }

    /// Clamps the translation of `candidate` into the pan range at its scale.
    fn constrain(&self, candidate: Transform, allow_over_scroll: bool) -> Transform {
        let mut next = self.geometry;
        next.transform = candidate;
        let translation = self
            .pan
            .check_translation(&next, candidate.translation, allow_over_scroll);
        Transform::new(candidate.scale, translation)
    }

    fn commit(&mut self, target: Transform) -> bool {
        if target == self.geometry.transform {
            return false;
        }
        self.geometry.transform = target;
        self.notify(false);
        true
    }

    fn notify(&mut self, first_sizing: bool) {
        self.dispatcher.notify_transform_changed(TransformChange {
            transform: self.geometry.transform,
            first_sizing,
        });
    }
}

impl Default for TransformController {
    fn default() -> Self {
        Self::new(
            ZoomManager::default(),
            PanManager::default(),
            Transformation::default(),
        )
    }
}

fn sanitize(size: Size) -> Size {
    if size.is_finite() && size.width >= 0.0 && size.height >= 0.0 {
        size
    } else {
        report(Err(ConfigurationError::InvalidSize(size)));
        Size::ZERO
    }
}
