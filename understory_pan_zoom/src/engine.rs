// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine: touch routing, programmatic API and frame stepping.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect, Size, Vec2};
use understory_gesture::PointerId;
use understory_gesture::drag::{DragFlingRecognizer, DragRelease};
use understory_gesture::fling::Fling;
use understory_gesture::pinch::{PinchRecognizer, PinchUpdate};

use crate::{
    Alignment, Axis, ConfigurationError, EngineConfig, Easing, FlingWallPolicy, GestureState,
    GestureStateMachine, Observer, ObserverId, PanManager, ScrollMetrics, Transform,
    TransformController, Transformation, Transition, ZoomLimit, ZoomManager, ZoomUnit,
};

/// Host hook for scheduling frames.
///
/// The engine never runs its own timer. When an animation or fling starts,
/// and after every [`PanZoomEngine::advance`] that needs another step, it
/// calls [`FrameScheduler::request_frame`]; the host answers by calling
/// `advance` on its next frame.
pub trait FrameScheduler {
    /// Asks the host for one more frame.
    fn request_frame(&mut self);
}

/// Factor applied by [`PanZoomEngine::zoom_in`].
const ZOOM_IN_FACTOR: f64 = 1.3;
/// Factor applied by [`PanZoomEngine::zoom_out`].
const ZOOM_OUT_FACTOR: f64 = 0.7;

/// Pan and zoom engine for one content/container pair.
///
/// Feed it sizes, touches and programmatic requests; drive it with
/// [`PanZoomEngine::advance`] while [`PanZoomEngine::state`] is animating or
/// flinging. Observers see one transform notification per mutating call.
pub struct PanZoomEngine {
    config: EngineConfig,
    controller: TransformController,
    machine: GestureStateMachine,
    drag: DragFlingRecognizer,
    pinch: PinchRecognizer,
    fling: Option<Fling>,
    pointers: Vec<PointerId>,
    /// Set after a pinch ends with pointers still down; cleared when all lift.
    ignore_until_lift: bool,
    last_focal: Option<Point>,
    scheduler: Option<Box<dyn FrameScheduler>>,
}

impl fmt::Debug for PanZoomEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanZoomEngine")
            .field("config", &self.config)
            .field("controller", &self.controller)
            .field("machine", &self.machine)
            .field("fling", &self.fling)
            .field("pointers", &self.pointers)
            .field("ignore_until_lift", &self.ignore_until_lift)
            .field("has_scheduler", &self.scheduler.is_some())
            .finish_non_exhaustive()
    }
}

impl PanZoomEngine {
    /// Creates an engine; it stays inert until both sizes are set.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let zoom = ZoomManager::new(config.min_zoom, config.max_zoom, config.over_pinch_factor);
        let mut pan = PanManager::new();
        pan.set_alignment(config.alignment);
        pan.set_over_scroll(Axis::Horizontal, config.over_scroll_horizontal);
        pan.set_over_scroll(Axis::Vertical, config.over_scroll_vertical);
        if let Err(error) = pan.set_over_scroll_factor(config.over_scroll_factor) {
            tracing::debug!(%error, "ignoring configuration value");
        }
        let mut controller = TransformController::new(zoom, pan, config.transformation);
        controller.set_animation(config.animation_duration_ms, config.easing);

        Self {
            drag: DragFlingRecognizer::new(config.gesture),
            pinch: PinchRecognizer::new(config.gesture),
            config,
            controller,
            machine: GestureStateMachine::new(),
            fling: None,
            pointers: Vec::new(),
            ignore_until_lift: false,
            last_focal: None,
            scheduler: None,
        }
    }

    /// Installs (or removes) the host frame scheduler.
    pub fn set_frame_scheduler(&mut self, scheduler: Option<Box<dyn FrameScheduler>>) {
        self.scheduler = scheduler;
    }

    /// Registers an observer.
    pub fn add_observer(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        self.controller.add_observer(observer)
    }

    /// Removes an observer; returns `false` if `id` is unknown.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.controller.remove_observer(id)
    }

    // --- sizing ---

    /// Sets the content size; see [`TransformController::set_container_size`].
    ///
    /// Returns `true` if observers were notified.
    pub fn set_content_size(&mut self, size: Size, apply_base_transform: bool) -> bool {
        if size != self.content_size() || apply_base_transform {
            self.stop_animation();
        }
        let notified = self.controller.set_content_size(size, apply_base_transform);
        self.sync_initialized();
        notified
    }

    /// Sets the container size; see [`TransformController::set_container_size`].
    ///
    /// Returns `true` if observers were notified.
    pub fn set_container_size(&mut self, size: Size, apply_base_transform: bool) -> bool {
        if size != self.container_size() || apply_base_transform {
            self.stop_animation();
        }
        let notified = self.controller.set_container_size(size, apply_base_transform);
        self.sync_initialized();
        notified
    }

    /// Forgets the content: zeroes its size, resets the transform and returns to idle.
    pub fn clear(&mut self) {
        self.drag.cancel();
        self.pinch.cancel();
        self.pointers.clear();
        self.ignore_until_lift = false;
        self.transition(GestureState::Idle);
        self.controller.clear();
        self.sync_initialized();
    }

    fn sync_initialized(&mut self) {
        let initialized = self.controller.is_initialized();
        self.machine.set_initialized(initialized);
        if !initialized {
            self.transition(GestureState::Idle);
        }
    }

    // --- touch input ---

    /// Handles a pointer going down; returns `true` if the engine consumed it.
    pub fn on_touch_begin(&mut self, pointer: PointerId, position: Point, time_ms: u64) -> bool {
        if !self.is_initialized() || self.pointers.contains(&pointer) {
            return false;
        }
        self.pointers.push(pointer);
        if self.ignore_until_lift {
            return false;
        }
        if let Some(start) = self.pinch.on_down(pointer, position) {
            if !self.config.zoom_enabled || !self.transition(GestureState::Pinching) {
                return false;
            }
            self.drag.cancel();
            self.last_focal = Some(start.focal);
            return true;
        }
        if self.pointers.len() != 1 {
            return false;
        }
        if !self.machine.is_allowed(GestureState::Dragging) {
            return false;
        }
        if self.state() == GestureState::Flinging {
            // The finger catches the fling: it resumes as a drag or ends as a tap.
            self.fling = None;
        }
        self.drag.on_down(pointer, position, time_ms);
        true
    }

    /// Handles a pointer move; returns `true` if the engine consumed it.
    pub fn on_touch_move(&mut self, pointer: PointerId, position: Point, time_ms: u64) -> bool {
        if self.ignore_until_lift || !self.pointers.contains(&pointer) {
            return false;
        }
        let pinch = self.pinch.on_move(pointer, position);
        if self.state() == GestureState::Pinching {
            if let Some(update) = pinch {
                self.apply_pinch(update);
            }
            return true;
        }

        let Some(update) = self.drag.on_move(pointer, position, time_ms) else {
            return self.drag.pointer() == Some(pointer);
        };
        if update.started && !self.transition(GestureState::Dragging) {
            self.drag.cancel();
            return false;
        }
        if self.state() != GestureState::Dragging {
            return false;
        }
        let delta = self.mask_pan(update.delta);
        let scale = self.controller.real_zoom();
        self.controller.apply_pan(delta / scale, true);
        true
    }

    /// Handles a pointer going up; returns `true` if the engine consumed it.
    ///
    /// Ending a drag or pinch settles any elastic excursion in one step. A
    /// fast drag release starts a fling instead.
    pub fn on_touch_end(&mut self, pointer: PointerId, position: Point, time_ms: u64) -> bool {
        let Some(index) = self.pointers.iter().position(|p| *p == pointer) else {
            return false;
        };
        self.pointers.remove(index);
        let was_pinching = self.state() == GestureState::Pinching;
        self.pinch.on_up(pointer);

        if self.ignore_until_lift {
            self.ignore_until_lift = !self.pointers.is_empty();
            return false;
        }
        if was_pinching {
            self.ignore_until_lift = !self.pointers.is_empty();
            self.finish_gesture(self.last_focal);
            return true;
        }

        match self.drag.on_up(pointer, position, time_ms) {
            DragRelease::Ignored => false,
            DragRelease::Tap => {
                if self.state() == GestureState::Flinging {
                    self.finish_gesture(None);
                    true
                } else {
                    false
                }
            }
            DragRelease::Released => {
                self.finish_gesture(None);
                true
            }
            DragRelease::Fling(fling) => {
                self.begin_fling(fling);
                true
            }
        }
    }

    /// Aborts every live gesture and settles; returns `true` if one was live.
    pub fn on_touch_cancel(&mut self) -> bool {
        self.drag.cancel();
        self.pinch.cancel();
        self.pointers.clear();
        self.ignore_until_lift = false;
        match self.state() {
            GestureState::Dragging | GestureState::Pinching | GestureState::Flinging => {
                self.finish_gesture(self.last_focal);
                true
            }
            GestureState::Idle | GestureState::Animating => false,
        }
    }

    fn apply_pinch(&mut self, update: PinchUpdate) {
        let real = self.controller.real_zoom() * update.scale;
        let from = if self.config.two_finger_pan_enabled {
            update.previous_focal
        } else {
            update.focal
        };
        self.controller.apply_zoom_about(
            real,
            from,
            update.focal,
            self.config.over_pinchable,
            true,
        );
        self.last_focal = Some(update.focal);
    }

    fn mask_pan(&self, mut delta: Vec2) -> Vec2 {
        if !self.config.horizontal_pan_enabled {
            delta.x = 0.0;
        }
        if !self.config.vertical_pan_enabled {
            delta.y = 0.0;
        }
        delta
    }

    fn begin_fling(&mut self, mut fling: Fling) {
        if !self.config.horizontal_pan_enabled {
            fling.stop_x();
        }
        if !self.config.vertical_pan_enabled {
            fling.stop_y();
        }
        let over_scrolled = self
            .controller
            .pan_manager()
            .is_over_scrolled(self.controller.geometry());
        let allowed = self.config.fling_enabled
            && !fling.is_finished()
            && (self.config.allow_fling_in_overscroll || !over_scrolled);
        if !allowed || !self.transition(GestureState::Flinging) {
            self.finish_gesture(None);
            return;
        }
        tracing::trace!(velocity = ?fling.velocity(), "fling started");
        self.fling = Some(fling);
        self.request_frame();
    }

    fn step_fling(&mut self, now_ms: u64) -> bool {
        // A finger is holding the fling.
        let Some(mut fling) = self.fling else {
            return false;
        };
        let Some(displacement) = fling.step(now_ms) else {
            self.end_fling();
            return false;
        };

        let geometry = *self.controller.geometry();
        let pan = self.controller.pan_manager();
        let current = geometry.transform().translation;
        let wanted = current + displacement;
        let reached = match self.config.fling_wall_policy {
            FlingWallPolicy::Elastic => pan.check_translation(&geometry, wanted, true),
            // An existing excursion may shrink but never grow.
            FlingWallPolicy::HardStop => pan.check_translation_inward(&geometry, wanted),
        };
        if reached.x != wanted.x {
            fling.stop_x();
        }
        if reached.y != wanted.y {
            fling.stop_y();
        }
        self.controller
            .apply_pan((reached - current) / geometry.transform().scale, true);

        if fling.is_finished() {
            self.end_fling();
            false
        } else {
            self.fling = Some(fling);
            true
        }
    }

    fn end_fling(&mut self) {
        tracing::trace!("fling finished");
        self.fling = None;
        self.finish_gesture(None);
    }

    /// Settles back within strict bounds and returns to idle.
    fn finish_gesture(&mut self, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or_else(|| self.container_center());
        self.controller.settle(pivot);
        self.last_focal = None;
        self.transition(GestureState::Idle);
    }

    // --- frames ---

    /// Advances the running animation or fling to `now_ms`.
    ///
    /// Returns `true` if another frame is needed. Does nothing (and notifies
    /// nobody) when neither is running.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let more = match self.state() {
            GestureState::Animating => {
                let more = self.controller.step(now_ms);
                if !more {
                    tracing::trace!("animation finished");
                    self.transition(GestureState::Idle);
                }
                more
            }
            GestureState::Flinging => self.step_fling(now_ms),
            GestureState::Idle | GestureState::Dragging | GestureState::Pinching => false,
        };
        if more {
            self.request_frame();
        }
        more
    }

    fn request_frame(&mut self) {
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.request_frame();
        }
    }

    // --- programmatic API ---

    /// Moves to logical zoom `zoom` with the pan `(x, y)` in content units.
    pub fn move_to(&mut self, zoom: f64, x: f64, y: f64, animate: bool) -> bool {
        let real = self.controller.zoom_manager().logical_to_real_zoom(zoom);
        self.real_move_to(real, Vec2::new(x, y), animate)
    }

    /// Pans to `(x, y)` in content units at the current zoom.
    pub fn pan_to(&mut self, x: f64, y: f64, animate: bool) -> bool {
        let real = self.controller.real_zoom();
        self.real_move_to(real, Vec2::new(x, y), animate)
    }

    /// Pans by `(dx, dy)` content units.
    pub fn pan_by(&mut self, dx: f64, dy: f64, animate: bool) -> bool {
        let target = self.pan() + Vec2::new(dx, dy);
        self.pan_to(target.x, target.y, animate)
    }

    /// Zooms to logical zoom `zoom` around the container center.
    pub fn zoom_to(&mut self, zoom: f64, animate: bool) -> bool {
        let real = self.controller.zoom_manager().logical_to_real_zoom(zoom);
        self.real_zoom_to(real, animate)
    }

    /// Multiplies the zoom by `factor`.
    pub fn zoom_by(&mut self, factor: f64, animate: bool) -> bool {
        let real = self.controller.real_zoom() * factor;
        self.real_zoom_to(real, animate)
    }

    /// Zooms to real zoom `real` around the container center.
    pub fn real_zoom_to(&mut self, real: f64, animate: bool) -> bool {
        if animate {
            self.animate(|controller| controller.animate_zoom(real))
        } else {
            self.apply_now(|controller| controller.apply_zoom(real, false))
        }
    }

    /// Animated zoom in by a fixed step.
    pub fn zoom_in(&mut self) -> bool {
        self.zoom_by(ZOOM_IN_FACTOR, true)
    }

    /// Animated zoom out by a fixed step.
    pub fn zoom_out(&mut self) -> bool {
        self.zoom_by(ZOOM_OUT_FACTOR, true)
    }

    /// Stops a running animation or fling; returns `true` if one was running.
    pub fn cancel_animations(&mut self) -> bool {
        match self.state() {
            GestureState::Animating => self.transition(GestureState::Idle),
            GestureState::Flinging => {
                self.finish_gesture(None);
                true
            }
            GestureState::Idle | GestureState::Dragging | GestureState::Pinching => false,
        }
    }

    fn real_move_to(&mut self, real: f64, pan: Vec2, animate: bool) -> bool {
        if animate {
            self.animate(|controller| controller.animate_zoom_and_pan(real, pan))
        } else {
            self.apply_now(|controller| controller.apply_zoom_and_pan(real, pan, false))
        }
    }

    /// Applies an immediate change, first ending any animation or fling.
    fn apply_now(&mut self, apply: impl FnOnce(&mut TransformController) -> bool) -> bool {
        if !self.is_initialized() {
            return false;
        }
        if matches!(
            self.state(),
            GestureState::Animating | GestureState::Flinging
        ) {
            self.transition(GestureState::Idle);
        }
        apply(&mut self.controller)
    }

    /// Starts an animation, preempting whatever is running.
    fn animate(&mut self, start: impl FnOnce(&mut TransformController) -> bool) -> bool {
        if !self.machine.is_allowed(GestureState::Animating) {
            return false;
        }
        if !start(&mut self.controller) {
            // A no-op request replaces a running animation with nothing.
            if self.state() == GestureState::Animating && !self.controller.is_animating() {
                self.transition(GestureState::Idle);
            }
            return false;
        }
        self.transition(GestureState::Animating);
        self.request_frame();
        true
    }

    fn stop_animation(&mut self) {
        if self.state() == GestureState::Animating {
            self.transition(GestureState::Idle);
        }
    }

    // --- state plumbing ---

    fn transition(&mut self, to: GestureState) -> bool {
        match self.machine.transition(to) {
            Ok(transition) => {
                self.on_transition(transition);
                true
            }
            Err(_) => false,
        }
    }

    /// Runs the cleanup of the state that was left, then fires idle/active.
    fn on_transition(&mut self, transition: Transition) {
        match transition.from {
            _ if transition.from == transition.to => {}
            GestureState::Idle => {}
            GestureState::Dragging => self.drag.cancel(),
            GestureState::Flinging => self.fling = None,
            GestureState::Pinching => {
                self.pinch.cancel();
                self.ignore_until_lift = !self.pointers.is_empty();
            }
            GestureState::Animating => {
                self.controller.cancel_animations();
            }
        }
        if transition.left_idle() {
            self.controller.dispatcher_mut().notify_active();
        } else if transition.entered_idle() {
            self.controller.dispatcher_mut().notify_idle();
        }
    }

    fn container_center(&self) -> Point {
        self.container_size().to_rect().center()
    }

    // --- accessors ---

    /// Current gesture state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.machine.state()
    }

    /// Returns `true` once both sizes are known.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.controller.is_initialized()
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.controller.transform()
    }

    /// Current logical zoom.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.controller.zoom()
    }

    /// Current real zoom.
    #[must_use]
    pub fn real_zoom(&self) -> f64 {
        self.controller.real_zoom()
    }

    /// Current pan in content units.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.controller.pan()
    }

    /// Current pan in container pixels.
    #[must_use]
    pub fn scaled_pan(&self) -> Vec2 {
        self.controller.transform().translation
    }

    /// Content size; zero while unset.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.controller.geometry().content_size()
    }

    /// Container size; zero while unset.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.controller.geometry().container_size()
    }

    /// Configured minimum zoom.
    #[must_use]
    pub fn min_zoom(&self) -> ZoomLimit {
        self.controller.zoom_manager().min_zoom()
    }

    /// Configured maximum zoom.
    #[must_use]
    pub fn max_zoom(&self) -> ZoomLimit {
        self.controller.zoom_manager().max_zoom()
    }

    /// Horizontal scroll position, for scrollbars.
    #[must_use]
    pub fn horizontal_scroll(&self) -> ScrollMetrics {
        self.controller.scroll_metrics(Axis::Horizontal)
    }

    /// Vertical scroll position, for scrollbars.
    #[must_use]
    pub fn vertical_scroll(&self) -> ScrollMetrics {
        self.controller.scroll_metrics(Axis::Vertical)
    }

    /// Maps a container point into content coordinates.
    #[must_use]
    pub fn container_to_content(&self, pt: Point) -> Point {
        self.transform().container_to_content(pt)
    }

    /// Maps a content point into container coordinates.
    #[must_use]
    pub fn content_to_container(&self, pt: Point) -> Point {
        self.transform().content_to_container(pt)
    }

    /// The visible part of the content, in content units.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        self.controller.geometry().visible_content_rect()
    }

    /// The underlying controller.
    #[must_use]
    pub fn controller(&self) -> &TransformController {
        &self.controller
    }

    /// Options currently in effect.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // --- configuration ---

    /// Sets the minimum zoom and re-enforces the bounds.
    pub fn set_min_zoom(&mut self, value: f64, unit: ZoomUnit) -> Result<(), ConfigurationError> {
        let limit = ZoomLimit { value, unit };
        self.controller
            .set_min_zoom(limit)
            .map_err(log_refused)?;
        self.config.min_zoom = limit;
        Ok(())
    }

    /// Sets the maximum zoom and re-enforces the bounds.
    pub fn set_max_zoom(&mut self, value: f64, unit: ZoomUnit) -> Result<(), ConfigurationError> {
        let limit = ZoomLimit { value, unit };
        self.controller
            .set_max_zoom(limit)
            .map_err(log_refused)?;
        self.config.max_zoom = limit;
        Ok(())
    }

    /// Sets the elastic zoom factor used while pinching.
    pub fn set_over_pinch_factor(&mut self, factor: f64) -> Result<(), ConfigurationError> {
        self.controller
            .set_over_pinch_factor(factor)
            .map_err(log_refused)?;
        self.config.over_pinch_factor = factor;
        Ok(())
    }

    /// Sets the elastic pan slack as a fraction of the container dimension.
    pub fn set_over_scroll_factor(&mut self, factor: f64) -> Result<(), ConfigurationError> {
        self.controller
            .set_over_scroll_factor(factor)
            .map_err(log_refused)?;
        self.config.over_scroll_factor = factor;
        Ok(())
    }

    /// Enables or disables horizontal over-scroll.
    pub fn set_over_scroll_horizontal(&mut self, enabled: bool) {
        self.controller.set_over_scroll(Axis::Horizontal, enabled);
        self.config.over_scroll_horizontal = enabled;
    }

    /// Enables or disables vertical over-scroll.
    pub fn set_over_scroll_vertical(&mut self, enabled: bool) {
        self.controller.set_over_scroll(Axis::Vertical, enabled);
        self.config.over_scroll_vertical = enabled;
    }

    /// Enables or disables horizontal panning by touch.
    pub fn set_horizontal_pan_enabled(&mut self, enabled: bool) {
        self.config.horizontal_pan_enabled = enabled;
    }

    /// Enables or disables vertical panning by touch.
    pub fn set_vertical_pan_enabled(&mut self, enabled: bool) {
        self.config.vertical_pan_enabled = enabled;
    }

    /// Enables or disables elastic zoom while pinching.
    pub fn set_over_pinchable(&mut self, enabled: bool) {
        self.config.over_pinchable = enabled;
    }

    /// Enables or disables pinch zoom.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.config.zoom_enabled = enabled;
    }

    /// Enables or disables flings.
    pub fn set_fling_enabled(&mut self, enabled: bool) {
        self.config.fling_enabled = enabled;
    }

    /// Allows or forbids starting a fling while over-scrolled.
    pub fn set_allow_fling_in_overscroll(&mut self, allow: bool) {
        self.config.allow_fling_in_overscroll = allow;
    }

    /// Lets the pinch midpoint pan the content.
    pub fn set_two_finger_pan_enabled(&mut self, enabled: bool) {
        self.config.two_finger_pan_enabled = enabled;
    }

    /// Sets what a fling does at a pan bound.
    pub fn set_fling_wall_policy(&mut self, policy: FlingWallPolicy) {
        self.config.fling_wall_policy = policy;
    }

    /// Sets the alignment and re-enforces the bounds.
    pub fn set_alignment(&mut self, alignment: Alignment) -> bool {
        self.config.alignment = alignment;
        self.controller.set_alignment(alignment)
    }

    /// Sets the fit mode and gravity.
    ///
    /// It takes effect at the next sizing with `apply_base_transform` (or the
    /// first sizing, if that has not happened yet).
    pub fn set_transformation(&mut self, transformation: Transformation) {
        self.config.transformation = transformation;
        self.controller.set_transformation(transformation);
    }

    /// Sets duration and easing of programmatic animations.
    pub fn set_animation(&mut self, duration_ms: u64, easing: Easing) {
        self.config.animation_duration_ms = duration_ms;
        self.config.easing = easing;
        self.controller.set_animation(duration_ms, easing);
    }
}

impl Default for PanZoomEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn log_refused(error: ConfigurationError) -> ConfigurationError {
    tracing::debug!(%error, "ignoring configuration value");
    error
}
