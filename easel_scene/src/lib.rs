// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Scene: the item store behind an Easel canvas.
//!
//! A [`Scene`] holds heterogeneous graphical items: lines, curves, polygons,
//! rectangles, ovals, arcs, text, bitmaps and embedded windows. Each
//! [`Item`] has:
//! - a [`ItemKind`] and a [`Geometry`] in scene coordinates,
//! - a style map from [`StyleAttr`] to [`Color`] (absent or empty means unset),
//! - a set of [`Tag`]s opting it into behaviors,
//! - [`ItemFlags`] gating visibility and picking.
//!
//! Scene construction inserts items; interaction code then reads and writes
//! styles, translates geometry, and asks a [`HitTester`] which tagged item is
//! under the pointer.
//!
//! ## Contract
//!
//! - [`Scene::find_by_tag`] → ids in draw order.
//! - [`Scene::style`] / [`Scene::set_style`] read and write one attribute.
//! - [`Scene::move_by`] translates geometry only.
//! - Writes through a stale [`ItemId`] are silent no-ops returning `false`.
//! - [`Scene::take_damage`] drains the regions touched since the last call.
//!
//! ## Hit testing
//!
//! [`HitTester::item_under_pointer`] returns the topmost tagged, visible and
//! pickable item whose precise geometry contains the point (see [`hit`] for
//! the per-kind rules). Untagged items never block tagged ones.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
pub mod hit;
mod item;
mod scene;
mod types;

pub use damage::Damage;
pub use hit::{Hit, HitKind, HitParams, HitScore, HitTester, PreciseHitTest};
pub use item::{Geometry, Item};
pub use scene::Scene;
pub use types::{Color, ItemFlags, ItemId, ItemKind, StyleAttr, Tag};
