// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel View 2D: the scrollable window onto an Easel scene.
//!
//! This crate provides a small, headless model of a canvas view: a
//! device-space rectangle showing part of a larger scene. It focuses on:
//! - Scroll offset and uniform scale.
//! - Coordinate conversion between device (pointer) and scene space.
//! - Confinement of scrolling to a scroll region.
//!
//! It does **not** own a scene or a renderer. Interaction code only needs the
//! [`CoordinateSpace`] trait; the rendering surface owns the [`ScrollView`]
//! and drives it from its scrollbars or gestures.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use easel_view2d::{CoordinateSpace, ScrollView};
//!
//! // 400x300 canvas widget over a 1200x900 scene.
//! let mut view = ScrollView::new(Rect::new(0.0, 0.0, 400.0, 300.0));
//! view.set_scroll_region(Some(Rect::new(0.0, 0.0, 1200.0, 900.0)));
//! view.scroll_to(Point::new(200.0, 100.0));
//!
//! // A pointer at (10, 10) in the widget is at (210, 110) in the scene.
//! assert_eq!(view.to_scene(Point::new(10.0, 10.0)), Point::new(210.0, 110.0));
//! ```
//!
//! ## Design notes
//!
//! - The view is axis-aligned with a **uniform** scale.
//! - The scroll offset is stored in scene space: it is the scene point shown
//!   at the view's top-left corner.
//! - Scroll deltas are expressed in device pixels.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod scroll_view;

pub use modes::ClampMode;
pub use scroll_view::{CoordinateSpace, ScrollView, ScrollViewDebugInfo};
