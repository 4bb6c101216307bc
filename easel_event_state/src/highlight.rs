// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlight slot: remember one overwritten attribute so it can be put back.
//!
//! [`HighlightState`] is a single slot. On enter, the caller picks an
//! attribute, saves its current value into the slot, and overwrites the
//! attribute with a highlight. On leave, the slot hands the saved value back
//! (or discards it when the leave does not match, see [`StaleLeavePolicy`]).
//!
//! The slot is generic over the target id `K`, attribute key `A` and saved
//! value `V`; it never touches the scene itself.
//!
//! ```
//! use easel_event_state::highlight::{Highlight, HighlightState, LeaveOutcome, StaleLeavePolicy};
//!
//! let mut slot = HighlightState::new();
//! assert!(slot.enter(Highlight::new(1_u32, "outline", Some("red"))).is_none());
//!
//! // Leaving the recorded target hands back what to restore.
//! match slot.leave(&1, StaleLeavePolicy::Discard) {
//!     LeaveOutcome::Restore(h) => assert_eq!(h.saved, Some("red")),
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert!(slot.is_idle());
//! ```

/// One saved attribute of one target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight<K, A, V> {
    /// The highlighted target.
    pub target: K,
    /// The attribute that was overwritten.
    pub attr: A,
    /// The attribute's value before the highlight.
    pub saved: V,
}

impl<K, A, V> Highlight<K, A, V> {
    /// Creates a record.
    pub fn new(target: K, attr: A, saved: V) -> Self {
        Self {
            target,
            attr,
            saved,
        }
    }
}

/// What to do when a leave reports a target other than the recorded one.
///
/// This happens when the pointer moves straight from one item onto an
/// overlapping one and the leave is resolved against the new item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StaleLeavePolicy {
    /// Drop the record without restoring anything.
    #[default]
    Discard,
    /// Restore the recorded target's attribute anyway.
    RestoreRecorded,
}

/// Result of [`HighlightState::leave`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeaveOutcome<K, A, V> {
    /// The caller should write `saved` back to `attr` on `target`.
    Restore(Highlight<K, A, V>),
    /// The record was dropped without restoring.
    Discard(Highlight<K, A, V>),
    /// Nothing was recorded.
    Ignored,
}

/// Single-slot highlight state: `Idle` or `Highlighting`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HighlightState<K, A, V> {
    /// Nothing is highlighted.
    Idle,
    /// One target is highlighted.
    Highlighting(Highlight<K, A, V>),
}

impl<K, A, V> Default for HighlightState<K, A, V> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<K: PartialEq, A, V> HighlightState<K, A, V> {
    /// Creates an idle slot.
    pub fn new() -> Self {
        Self::Idle
    }

    /// Returns `true` when nothing is recorded.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The current record, if any.
    pub fn current(&self) -> Option<&Highlight<K, A, V>> {
        match self {
            Self::Idle => None,
            Self::Highlighting(h) => Some(h),
        }
    }

    /// Returns `true` if `target` is the recorded target.
    pub fn is_highlighting(&self, target: &K) -> bool {
        self.current().is_some_and(|h| &h.target == target)
    }

    /// Records a new highlight, returning any record it replaced.
    ///
    /// A replaced record is stale; the caller decides whether to restore it.
    pub fn enter(&mut self, highlight: Highlight<K, A, V>) -> Option<Highlight<K, A, V>> {
        match core::mem::replace(self, Self::Highlighting(highlight)) {
            Self::Idle => None,
            Self::Highlighting(prev) => Some(prev),
        }
    }

    /// Handles a leave reported for `target`; the slot is idle afterwards.
    pub fn leave(&mut self, target: &K, policy: StaleLeavePolicy) -> LeaveOutcome<K, A, V> {
        match core::mem::take(self) {
            Self::Idle => LeaveOutcome::Ignored,
            Self::Highlighting(h) if &h.target == target => LeaveOutcome::Restore(h),
            Self::Highlighting(h) => match policy {
                StaleLeavePolicy::Discard => LeaveOutcome::Discard(h),
                StaleLeavePolicy::RestoreRecorded => LeaveOutcome::Restore(h),
            },
        }
    }

    /// Empties the slot, returning the record it held.
    pub fn clear(&mut self) -> Option<Highlight<K, A, V>> {
        match core::mem::take(self) {
            Self::Idle => None,
            Self::Highlighting(h) => Some(h),
        }
    }
}
