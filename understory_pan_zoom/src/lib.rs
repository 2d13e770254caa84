// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan_zoom --heading-base-level=0

//! Understory Pan Zoom: a headless pan/zoom transform and gesture-state engine.
//!
//! This crate keeps a uniform-scale transform that maps content space into
//! container space and keeps it within configurable limits while the content
//! is dragged, flung, pinched or moved programmatically. It focuses on:
//! - Zoom in two units: *real* zoom (the actual scale) and *logical* zoom
//!   (relative to the fitted base transformation).
//! - Pan ranges that keep the content covering the container, with alignment
//!   for content smaller than the container.
//! - Elastic over-scroll and over-pinch during live gestures, settled back
//!   into strict bounds when the gesture ends.
//! - A single-owner state machine that arbitrates between dragging, flinging,
//!   pinching and programmatic animations.
//!
//! It does **not** render anything, own a timer, or talk to a windowing
//! system. Callers are expected to:
//! - Report content and container sizes with
//!   [`PanZoomEngine::set_content_size`] / [`PanZoomEngine::set_container_size`].
//! - Forward touch samples to [`PanZoomEngine::on_touch_begin`] and friends.
//! - Call [`PanZoomEngine::advance`] once per frame while it asks for more
//!   frames (see [`FrameScheduler`]).
//! - Apply [`Transform::to_affine`] when drawing the content.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_gesture::PointerId;
//! use understory_pan_zoom::{GestureState, PanZoomEngine};
//!
//! let mut engine = PanZoomEngine::default();
//! engine.set_content_size(Size::new(1000.0, 1000.0), false);
//! engine.set_container_size(Size::new(500.0, 500.0), false);
//!
//! // Center-inside fitting: the content is shown at half size, logical zoom 1.
//! assert_eq!(engine.real_zoom(), 0.5);
//! assert_eq!(engine.zoom(), 1.0);
//!
//! // Zoom in around the container center.
//! assert!(engine.zoom_to(2.0, false));
//! assert_eq!(engine.real_zoom(), 1.0);
//! assert_eq!(engine.scaled_pan(), Vec2::new(-250.0, -250.0));
//!
//! // Drag the content 50 pixels to the left, then rest and lift.
//! let finger = PointerId(1);
//! engine.on_touch_begin(finger, Point::new(250.0, 250.0), 0);
//! engine.on_touch_move(finger, Point::new(200.0, 250.0), 16);
//! assert_eq!(engine.state(), GestureState::Dragging);
//! assert_eq!(engine.scaled_pan(), Vec2::new(-300.0, -250.0));
//! engine.on_touch_end(finger, Point::new(200.0, 250.0), 500);
//! assert_eq!(engine.state(), GestureState::Idle);
//! ```
//!
//! ## Animations
//!
//! Animated requests only record a target; the host drives them:
//!
//! ```rust
//! use kurbo::Size;
//! use understory_pan_zoom::{GestureState, PanZoomEngine};
//!
//! let mut engine = PanZoomEngine::default();
//! engine.set_content_size(Size::new(400.0, 400.0), false);
//! engine.set_container_size(Size::new(400.0, 400.0), false);
//!
//! assert!(engine.zoom_to(2.0, true));
//! assert_eq!(engine.state(), GestureState::Animating);
//!
//! let mut now = 1_000;
//! while engine.advance(now) {
//!     now += 16;
//! }
//! assert_eq!(engine.zoom(), 2.0);
//! assert_eq!(engine.state(), GestureState::Idle);
//! ```
//!
//! ## Design notes
//!
//! - [`TransformController`] is the only writer of the transform. The zoom
//!   and pan managers are query-only policies it consults.
//! - Gesture recognizers live in `understory_gesture`; this crate decides
//!   whether their output is allowed to move the content.
//! - Nothing here panics on out-of-range input: values are clamped, and
//!   unusable configuration is refused and reported through `tracing`.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod alignment;
mod animation;
mod config;
mod controller;
mod dispatch;
mod engine;
mod error;
mod geometry;
mod modes;
mod pan;
mod state;
mod zoom;

pub use alignment::{Alignment, AxisAlignment};
pub use animation::{Easing, Tween};
pub use config::EngineConfig;
pub use controller::{ScrollMetrics, TransformController};
pub use dispatch::{Observer, ObserverId, TransformChange, UpdateDispatcher};
pub use engine::{FrameScheduler, PanZoomEngine};
pub use error::{ConfigurationError, RejectReason, RejectedTransition};
pub use geometry::{GeometryState, Transform};
pub use modes::{FitMode, FlingWallPolicy, Transformation};
pub use pan::{Axis, PanManager, PanRange};
pub use state::{GestureState, GestureStateMachine, Transition};
pub use zoom::{ZoomLimit, ZoomManager, ZoomRange, ZoomUnit};
