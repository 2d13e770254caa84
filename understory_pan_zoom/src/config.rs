// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_gesture::GestureConfig;

use crate::{
    Alignment, Easing, FlingWallPolicy, PanManager, TransformController, Transformation,
    ZoomLimit, ZoomManager,
};

/// Options for a [`PanZoomEngine`](crate::PanZoomEngine).
///
/// Every field can also be changed later through the matching engine setter.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Allow elastic over-scroll on the horizontal axis during gestures.
    pub over_scroll_horizontal: bool,
    /// Allow elastic over-scroll on the vertical axis during gestures.
    pub over_scroll_vertical: bool,
    /// Let touch input pan horizontally.
    pub horizontal_pan_enabled: bool,
    /// Let touch input pan vertically.
    pub vertical_pan_enabled: bool,
    /// Allow elastic zoom beyond the limits while pinching.
    pub over_pinchable: bool,
    /// Let touch input zoom.
    pub zoom_enabled: bool,
    /// Start a fling on a fast drag release.
    pub fling_enabled: bool,
    /// Allow a fling to start while the content is over-scrolled.
    pub allow_fling_in_overscroll: bool,
    /// Let the pinch midpoint pan the content as it moves.
    pub two_finger_pan_enabled: bool,
    /// Fit mode and gravity used for the base transformation.
    pub transformation: Transformation,
    /// Where content smaller than the container is pinned.
    pub alignment: Alignment,
    /// Duration of programmatic animations in milliseconds.
    pub animation_duration_ms: u64,
    /// Progress curve of programmatic animations.
    pub easing: Easing,
    /// Minimum zoom.
    pub min_zoom: ZoomLimit,
    /// Maximum zoom.
    pub max_zoom: ZoomLimit,
    /// Elastic pan slack as a fraction of the container dimension.
    pub over_scroll_factor: f64,
    /// Elastic zoom factor beyond the limits.
    pub over_pinch_factor: f64,
    /// What a fling does at a pan bound.
    pub fling_wall_policy: FlingWallPolicy,
    /// Touch thresholds and fling physics.
    pub gesture: GestureConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            over_scroll_horizontal: true,
            over_scroll_vertical: true,
            horizontal_pan_enabled: true,
            vertical_pan_enabled: true,
            over_pinchable: true,
            zoom_enabled: true,
            fling_enabled: true,
            allow_fling_in_overscroll: false,
            two_finger_pan_enabled: false,
            transformation: Transformation::default(),
            alignment: Alignment::CENTER,
            animation_duration_ms: TransformController::DEFAULT_ANIMATION_DURATION_MS,
            easing: Easing::default(),
            min_zoom: ZoomLimit::logical(ZoomManager::DEFAULT_MIN_ZOOM),
            max_zoom: ZoomLimit::logical(ZoomManager::DEFAULT_MAX_ZOOM),
            over_scroll_factor: PanManager::DEFAULT_OVER_SCROLL_FACTOR,
            over_pinch_factor: ZoomManager::DEFAULT_OVER_PINCH_FACTOR,
            fling_wall_policy: FlingWallPolicy::default(),
            gesture: GestureConfig::default(),
        }
    }
}
