// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage summary types returned from [`Scene::take_damage`](crate::Scene::take_damage).

use alloc::vec::Vec;
use kurbo::Rect;

/// Scene regions touched by mutations since the last [`Scene::take_damage`](crate::Scene::take_damage).
///
/// `Damage` is intentionally coarse: inserts, removals and style changes
/// record the item's bounds, moves record both the old and the new bounds.
/// Rectangles may overlap and are not deduplicated. A renderer on another
/// thread should receive this value (or the rects in it) as the hand-off
/// before its next frame reads the scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Damage {
    /// Scene-space rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    /// Returns the union of all damage rects.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// Returns `true` when nothing was touched.
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }

    pub(crate) fn push(&mut self, rect: Rect) {
        self.dirty_rects.push(rect);
    }
}
