// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: touch gesture recognizers for pan/zoom surfaces.
//!
//! This crate turns raw multi-touch samples (pointer id, position, timestamp)
//! into gesture deltas. Each recognizer handles one interaction pattern:
//!
//! - [`drag`]: one-pointer drags past a touch slop, with release velocity.
//! - [`fling`]: exponential-decay fling driven one frame at a time.
//! - [`pinch`]: two-pointer pinch producing incremental scale and focal points.
//! - [`velocity`]: trailing-window velocity estimation used by [`drag`].
//!
//! Recognizers never decide whether a gesture is *allowed*; that is the job of
//! whatever owns them (for example the state machine in `understory_pan_zoom`).
//! They also never touch a transform: they only report deltas in the pointer's
//! coordinate space (typically container pixels).
//!
//! ## Drag and fling
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::drag::{DragFlingRecognizer, DragRelease};
//! use understory_gesture::{GestureConfig, PointerId};
//!
//! let mut drag = DragFlingRecognizer::new(GestureConfig::default());
//! let finger = PointerId(1);
//!
//! drag.on_down(finger, Point::new(100.0, 100.0), 0);
//! // Below the touch slop: nothing is reported yet.
//! assert!(drag.on_move(finger, Point::new(103.0, 100.0), 8).is_none());
//! // Past the slop: the whole movement since the press is reported once.
//! let update = drag.on_move(finger, Point::new(140.0, 100.0), 16).unwrap();
//! assert!(update.started);
//! assert_eq!(update.delta.x, 40.0);
//!
//! // A fast release produces a fling that the host advances per frame.
//! if let DragRelease::Fling(mut fling) = drag.on_up(finger, Point::new(180.0, 100.0), 24) {
//!     let step = fling.step(40).unwrap();
//!     assert!(step.x > 0.0);
//! }
//! ```
//!
//! ## Pinch
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::pinch::PinchRecognizer;
//! use understory_gesture::{GestureConfig, PointerId};
//!
//! let mut pinch = PinchRecognizer::new(GestureConfig::default());
//! assert!(pinch.on_down(PointerId(1), Point::new(100.0, 100.0)).is_none());
//! let start = pinch.on_down(PointerId(2), Point::new(200.0, 100.0)).unwrap();
//! assert_eq!(start.focal, Point::new(150.0, 100.0));
//!
//! let update = pinch.on_move(PointerId(2), Point::new(300.0, 100.0)).unwrap();
//! assert_eq!(update.scale, 2.0);
//! assert_eq!(update.focal, Point::new(200.0, 100.0));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod types;

pub mod drag;
pub mod fling;
pub mod pinch;
pub mod velocity;

pub use config::GestureConfig;
pub use types::PointerId;
