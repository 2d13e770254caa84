// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observer registry: ordered fan-out of transform and idle notifications.
//!
//! There is no coalescing: every call to
//! [`UpdateDispatcher::notify_transform_changed`] reaches every observer, in
//! registration order. Callers are responsible for calling it once per
//! mutation.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Transform;

/// Payload of a transform notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformChange {
    /// The transform after the mutation.
    pub transform: Transform,
    /// `true` only for the notification that follows the very first sizing.
    pub first_sizing: bool,
}

/// Receives engine notifications.
pub trait Observer {
    /// Called after every applied or animated transform mutation.
    fn on_transform_changed(&mut self, change: &TransformChange);

    /// Called each time the engine returns to idle.
    fn on_idle(&mut self) {}

    /// Called each time the engine leaves idle.
    fn on_active(&mut self) {}
}

/// Handle returned by [`UpdateDispatcher::add`], used to remove an observer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered list of observers.
#[derive(Default)]
pub struct UpdateDispatcher {
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    next_id: u64,
}

impl fmt::Debug for UpdateDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<ObserverId> = self.observers.iter().map(|(id, _)| *id).collect();
        f.debug_struct("UpdateDispatcher")
            .field("observers", &ids)
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl UpdateDispatcher {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `observer` after all existing ones.
    pub fn add(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer; returns `false` if `id` is unknown.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let Some(index) = self.observers.iter().position(|(i, _)| *i == id) else {
            return false;
        };
        self.observers.remove(index);
        true
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Forwards a transform snapshot to every observer.
    pub fn notify_transform_changed(&mut self, change: TransformChange) {
        for (_, observer) in &mut self.observers {
            observer.on_transform_changed(&change);
        }
    }

    /// Tells every observer that the engine is idle.
    pub fn notify_idle(&mut self) {
        for (_, observer) in &mut self.observers {
            observer.on_idle();
        }
    }

    /// Tells every observer that the engine left idle.
    pub fn notify_active(&mut self) {
        for (_, observer) in &mut self.observers {
            observer.on_active();
        }
    }
}
