// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: turn successive hit results into enter/leave transitions.
//!
//! Feed [`HoverState::update`] the target under the pointer after every
//! motion event. When the target changes, it emits `Leave(old)` before
//! `Enter(new)`, so a consumer never sees two overlapping enters.
//!
//! ```
//! use easel_event_state::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//! assert_eq!(hover.update(Some(1)), vec![HoverEvent::Enter(1)]);
//! assert_eq!(hover.update(Some(1)), vec![]);
//! assert_eq!(hover.update(Some(2)), vec![HoverEvent::Leave(1), HoverEvent::Enter(2)]);
//! assert_eq!(hover.update(None), vec![HoverEvent::Leave(2)]);
//! ```

use alloc::vec::Vec;

/// A hover transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered the target.
    Enter(K),
    /// The pointer left the target.
    Leave(K),
}

/// Tracks which target the pointer is over.
#[derive(Clone, Debug)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: Copy + PartialEq> HoverState<K> {
    /// Creates a state with nothing hovered.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The target currently under the pointer.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Updates the hovered target and returns the transitions it caused.
    pub fn update(&mut self, target: Option<K>) -> Vec<HoverEvent<K>> {
        if self.current == target {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(old) = self.current {
            events.push(HoverEvent::Leave(old));
        }
        if let Some(new) = target {
            events.push(HoverEvent::Enter(new));
        }
        self.current = target;
        events
    }

    /// Records `target` as hovered without emitting transitions.
    ///
    /// Use when enter and leave are reported directly rather than derived
    /// from hit tests, so later [`update`](Self::update) calls start from the
    /// right target.
    pub fn set(&mut self, target: Option<K>) {
        self.current = target;
    }

    /// Forgets the hovered target, returning a leave for it if there was one.
    ///
    /// Use when the pointer leaves the canvas surface entirely.
    pub fn clear(&mut self) -> Option<HoverEvent<K>> {
        self.current.take().map(HoverEvent::Leave)
    }
}
