// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics reported by the engine.
//!
//! None of these are faults: configuration problems are corrected (or the
//! offending value is ignored) and rejected transitions leave everything
//! untouched. They exist so that callers and `tracing` subscribers can see
//! *why* something did not happen.

use core::fmt;

use crate::GestureState;

/// A configuration value that could not be used as given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigurationError {
    /// The resolved minimum real zoom exceeds the resolved maximum.
    ///
    /// The two bounds are swapped when this happens.
    InvertedZoomBounds {
        /// Resolved minimum real zoom.
        min: f64,
        /// Resolved maximum real zoom.
        max: f64,
    },
    /// A zoom value that is not finite and strictly positive.
    InvalidZoom(f64),
    /// An elastic factor that is not finite or is out of range.
    InvalidFactor(f64),
    /// A content or container size with a negative or non-finite dimension.
    InvalidSize(kurbo::Size),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedZoomBounds { min, max } => {
                write!(f, "minimum zoom {min} exceeds maximum zoom {max}")
            }
            Self::InvalidZoom(value) => {
                write!(f, "zoom {value} is not a finite positive number")
            }
            Self::InvalidFactor(value) => write!(f, "factor {value} is out of range"),
            Self::InvalidSize(size) => {
                write!(f, "size {}x{} is not usable", size.width, size.height)
            }
        }
    }
}

impl core::error::Error for ConfigurationError {}

/// Why a gesture state transition was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Content or container size is still unknown.
    Uninitialized,
    /// The transition is not permitted from the current state.
    NotPermitted,
}

/// A transition refused by [`GestureStateMachine`](crate::GestureStateMachine).
///
/// The state is unchanged when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RejectedTransition {
    /// State at the time of the request.
    pub from: GestureState,
    /// Requested state.
    pub to: GestureState,
    /// Why the request was refused.
    pub reason: RejectReason,
}

impl fmt::Display for RejectedTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let why = match self.reason {
            RejectReason::Uninitialized => "engine is not sized yet",
            RejectReason::NotPermitted => "transition not permitted",
        };
        write!(f, "cannot move from {:?} to {:?}: {why}", self.from, self.to)
    }
}

impl core::error::Error for RejectedTransition {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_values() {
        let inverted = ConfigurationError::InvertedZoomBounds { min: 3.0, max: 2.0 };
        assert_eq!(inverted.to_string(), "minimum zoom 3 exceeds maximum zoom 2");

        let rejected = RejectedTransition {
            from: GestureState::Animating,
            to: GestureState::Dragging,
            reason: RejectReason::NotPermitted,
        };
        assert_eq!(
            rejected.to_string(),
            "cannot move from Animating to Dragging: transition not permitted"
        );
    }
}
