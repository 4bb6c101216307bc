// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: remember the dragged target and compute movement deltas.
//!
//! ## Usage
//!
//! 1) On primary press over a target, call [`DragState::start`] with the target and the position.
//! 2) On each motion event, call [`DragState::update`] to get the target and the delta since the last update.
//! 3) Optionally call [`DragState::total_offset`] to get the cumulative offset from the start position.
//! 4) On release, call [`DragState::end`]; later motion is ignored until the next start.
//!
//! Positions are whatever space the caller works in; interaction code passes
//! scene-space points so that deltas can be applied to geometry directly.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use easel_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Start dragging item 7 at (10, 20)
//! drag.start(7, Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! // Move to (15, 25): item 7 moves by (5, 5)
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some((7, Vec2::new(5.0, 5.0))));
//!
//! // Release; further motion does nothing.
//! assert_eq!(drag.end(), Some(7));
//! assert_eq!(drag.update(Point::new(30.0, 30.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Tracks one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState<K> {
    /// No drag in progress.
    Idle,
    /// A drag of `target` is in progress.
    Dragging {
        /// The target fixed at drag start.
        target: K,
        /// Position where the drag started.
        start_pos: Point,
        /// Last recorded position; overwritten on every update.
        last_pos: Point,
    },
}

impl<K> Default for DragState<K> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<K: Copy> DragState<K> {
    /// Starts a new drag of `target` from `pos`, replacing any previous drag.
    pub fn start(&mut self, target: K, pos: Point) {
        *self = Self::Dragging {
            target,
            start_pos: pos,
            last_pos: pos,
        };
    }

    /// Records a new position and returns the target with the delta since the last one.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn update(&mut self, pos: Point) -> Option<(K, Vec2)> {
        match self {
            Self::Idle => None,
            Self::Dragging {
                target, last_pos, ..
            } => {
                let delta = pos - *last_pos;
                *last_pos = pos;
                Some((*target, delta))
            }
        }
    }

    /// Returns the total offset from the drag start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Dragging { start_pos, .. } => Some(current_pos - *start_pos),
        }
    }

    /// Ends the drag and returns the target that was being dragged.
    pub fn end(&mut self) -> Option<K> {
        let target = self.target();
        *self = Self::Idle;
        target
    }

    /// The target being dragged, if any.
    pub fn target(&self) -> Option<K> {
        match self {
            Self::Idle => None,
            Self::Dragging { target, .. } => Some(*target),
        }
    }

    /// The last recorded position, if dragging.
    pub fn last_pos(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { last_pos, .. } => Some(*last_pos),
        }
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
