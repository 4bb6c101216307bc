// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Canvas: hover highlight and drag for a scrollable scene.
//!
//! This crate wires the Easel building blocks into pointer event entry points:
//!
//! - [`easel_view2d::ScrollView`] converts device points into scene points.
//! - [`easel_scene::HitTester`] finds the topmost interactive item.
//! - [`InteractionController`] keeps the highlight slot and drag state and
//!   mutates the [`easel_scene::Scene`].
//!
//! [`Canvas`] bundles a scene, a view and a controller for the common case.
//!
//! ## Highlight
//!
//! Entering an item tagged [`Tag::INTERACTIVE`](easel_scene::Tag::INTERACTIVE)
//! overwrites one style attribute with the highlight color and saves the old
//! value. Leaving puts it back. Which attribute is overwritten depends on the
//! item kind, see [`HighlightPolicy`].
//!
//! ## Drag
//!
//! Pressing the primary button over an interactive item starts a drag. Each
//! motion translates the item by the scene-space distance since the previous
//! motion. Releasing ends the drag.
//!
//! ```
//! use easel_canvas::{Canvas, CanvasConfig, Effect};
//! use easel_scene::{Item, StyleAttr, Tag};
//! use kurbo::{Point, Rect, Vec2};
//!
//! let view = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let mut canvas = Canvas::new(view, CanvasConfig::default()).unwrap();
//! let id = canvas.insert(
//!     Item::rectangle(Rect::new(0.0, 0.0, 20.0, 20.0))
//!         .with_style(StyleAttr::Outline, "black")
//!         .with_tag(Tag::INTERACTIVE),
//! );
//!
//! // The rectangle is unfilled, so its outline is highlighted.
//! canvas.on_pointer_enter(Point::new(0.0, 10.0));
//! assert_eq!(canvas.scene().style(id, StyleAttr::Outline).unwrap().as_str(), "SteelBlue2");
//! canvas.on_pointer_leave(Point::new(50.0, 50.0));
//! assert_eq!(canvas.scene().style(id, StyleAttr::Outline).unwrap().as_str(), "black");
//!
//! canvas.on_primary_down(Point::new(0.0, 10.0));
//! let effects = canvas.on_primary_move(Point::new(5.0, 12.0));
//! assert_eq!(effects[0], Effect::Moved { item: id, delta: Vec2::new(5.0, 2.0) });
//! canvas.on_primary_up();
//! ```
//!
//! ## Logging
//!
//! State transitions are reported through [`tracing`] at `debug` and `trace`
//! level. Install a subscriber in the host application to see them.

mod canvas;
mod config;
mod controller;
mod error;
mod policy;

pub use canvas::Canvas;
pub use config::{CanvasConfig, DEFAULT_HIGHLIGHT_COLOR};
pub use controller::{Effect, Effects, HighlightSlot, InteractionController};
pub use error::{CanvasError, CanvasResult};
pub use policy::{AttrProbe, HighlightPolicy, HighlightRule};

pub use easel_event_state::highlight::StaleLeavePolicy;
