// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How scrolling is confined relative to an optional scroll region.
///
/// Consulted by every [`crate::ScrollView`] operation that moves the visible
/// window (scrolling, rescaling, resizing the view or changing the region).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not confine; the view may scroll anywhere in scene space.
    None,
    /// Keep at least some part of the scroll region visible.
    KeepSomeVisible,
    /// Keep the visible window inside the scroll region.
    ///
    /// When the region is smaller than the visible window along an axis, the
    /// window's minimum edge is pinned to the region's minimum edge.
    #[default]
    Contain,
}
