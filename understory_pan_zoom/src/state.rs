// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-owner gesture state machine.
//!
//! Exactly one [`GestureState`] holds at any time. The machine only decides
//! whether a transition may happen; it never performs cleanup itself. A
//! successful [`GestureStateMachine::transition`] returns a [`Transition`]
//! naming the state that was left, and the owner runs that state's cleanup
//! (cancel the fling, cancel the animation, drop the drag) before acting on
//! the new one.
//!
//! Permitted transitions:
//!
//! | from \ to  | Idle | Dragging | Flinging | Pinching | Animating |
//! |------------|------|----------|----------|----------|-----------|
//! | Idle       | -    | yes      |          | yes      | yes       |
//! | Dragging   | yes  |          | yes      | yes      | yes       |
//! | Flinging   | yes  | yes      |          | yes      | yes       |
//! | Pinching   | yes  |          |          |          | yes       |
//! | Animating  | yes  |          |          |          | yes       |
//!
//! Any transition out of `Idle` additionally requires the engine to be
//! initialized (both sizes known). Moving to `Idle` is always allowed.

use crate::{RejectReason, RejectedTransition};

/// Interaction that currently owns the transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    /// Nothing is happening.
    #[default]
    Idle,
    /// One pointer is panning the content.
    Dragging,
    /// Content is sliding after a fast drag release.
    Flinging,
    /// Two pointers are zooming the content.
    Pinching,
    /// A programmatic animation is running.
    Animating,
}

/// A transition that was performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State that was left (and needs cleanup if it differs from `to`).
    pub from: GestureState,
    /// State that is now active.
    pub to: GestureState,
}

impl Transition {
    /// Returns `true` if this transition entered `Idle` from another state.
    #[must_use]
    pub fn entered_idle(&self) -> bool {
        self.to == GestureState::Idle && self.from != GestureState::Idle
    }

    /// Returns `true` if this transition left `Idle`.
    #[must_use]
    pub fn left_idle(&self) -> bool {
        self.from == GestureState::Idle && self.to != GestureState::Idle
    }
}

/// Holds the current [`GestureState`] and arbitrates transitions.
#[derive(Clone, Debug, Default)]
pub struct GestureStateMachine {
    state: GestureState,
    initialized: bool,
}

impl GestureStateMachine {
    /// Creates a machine in `Idle`, not yet initialized.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Records whether content and container sizes are both known.
    pub fn set_initialized(&mut self, initialized: bool) {
        self.initialized = initialized;
    }

    /// Returns whether the engine is initialized.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns `true` if moving to `to` from the current state would be accepted.
    #[must_use]
    pub fn is_allowed(&self, to: GestureState) -> bool {
        self.check(to).is_ok()
    }

    /// Moves to `to`, or explains why not.
    ///
    /// Moving to the current state succeeds with `from == to`; for
    /// `Animating` this means the previous animation must still be cleaned up
    /// by the caller.
    pub fn transition(&mut self, to: GestureState) -> Result<Transition, RejectedTransition> {
        match self.check(to) {
            Ok(()) => {
                let from = self.state;
                self.state = to;
                if from != to {
                    tracing::trace!(?from, ?to, "gesture state transition");
                }
                Ok(Transition { from, to })
            }
            Err(rejected) => {
                tracing::trace!(%rejected, "gesture state transition rejected");
                Err(rejected)
            }
        }
    }

    fn check(&self, to: GestureState) -> Result<(), RejectedTransition> {
        use GestureState::*;

        let from = self.state;
        if to == Idle {
            return Ok(());
        }
        if !self.initialized {
            return Err(RejectedTransition {
                from,
                to,
                reason: RejectReason::Uninitialized,
            });
        }
        let permitted = matches!(
            (from, to),
            (_, Animating)
                | (Idle | Flinging, Dragging)
                | (Dragging, Flinging)
                | (Idle | Dragging | Flinging, Pinching)
        );
        if permitted {
            Ok(())
        } else {
            Err(RejectedTransition {
                from,
                to,
                reason: RejectReason::NotPermitted,
            })
        }
    }
}
