// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precise hit testing of items and the topmost-item query used by pointer interaction.
//!
//! Items are tested against their real geometry rather than their bounding
//! boxes:
//! - Lines and curves are hit within half their width plus
//!   [`HitParams::tolerance`] of the path.
//! - Closed shapes are hit anywhere inside when they have a `fill`, otherwise
//!   only near their outline.
//! - Text, bitmaps and embedded windows are hit inside their extent, grown
//!   by the tolerance.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{BezPath, ParamCurveNearest, Point};

use crate::item::{Geometry, Item};
use crate::scene::Scene;
use crate::types::{ItemFlags, ItemId, StyleAttr, Tag};

/// Tunable parameters for precise hit testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Extra distance, in scene units, within which a point still counts as a hit.
    pub tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self { tolerance: 1.0 }
    }
}

/// Which part of an item was hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitKind {
    /// Inside a filled area.
    Fill,
    /// On a line or outline.
    Stroke,
    /// Inside an opaque extent (text, bitmap, window).
    Bounds,
}

/// Score for a single precise hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Distance from the query point to the hit geometry; `0.0` for area hits.
    pub distance: f64,
    /// Which part was hit.
    pub kind: HitKind,
}

/// Geometry that can be hit-tested precisely in scene coordinates.
pub trait PreciseHitTest {
    /// Returns a score if `pt` hits the geometry.
    fn hit_test(&self, pt: Point, params: &HitParams) -> Option<HitScore>;
}

impl PreciseHitTest for Item {
    fn hit_test(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let half_width = self.stroke_width() / 2.0;
        let reach = half_width + params.tolerance;
        if !self.bounds().inflate(params.tolerance, params.tolerance).contains(pt) {
            return None;
        }
        let geometry = self.geometry();
        if let Geometry::Bounds(extent) = geometry {
            let extent = extent.inflate(params.tolerance, params.tolerance);
            return extent.contains(pt).then_some(HitScore {
                distance: 0.0,
                kind: HitKind::Bounds,
            });
        }
        if geometry.is_closed()
            && self.style(StyleAttr::Fill).is_some()
            && geometry.area_contains(pt)
        {
            return Some(HitScore {
                distance: 0.0,
                kind: HitKind::Fill,
            });
        }
        let distance = distance_to_path(&geometry.outline(), pt);
        (distance <= reach).then_some(HitScore {
            distance,
            kind: HitKind::Stroke,
        })
    }
}

fn distance_to_path(path: &BezPath, pt: Point) -> f64 {
    path.segments()
        .map(|seg| seg.nearest(pt, 1e-6).distance_sq)
        .fold(f64::INFINITY, f64::min)
        .sqrt()
}

/// A resolved hit: the item and how it was hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// The item under the point.
    pub id: ItemId,
    /// How it was hit.
    pub score: HitScore,
}

/// Finds the item under the pointer among items carrying one tag.
///
/// Only items that are tagged, `VISIBLE` and `PICKABLE` are considered. When
/// several overlap, the one drawn last (topmost) wins. Untagged items never
/// block tagged items below them.
///
/// ```
/// use kurbo::{Point, Rect};
/// use easel_scene::{HitTester, Item, Scene, StyleAttr, Tag};
///
/// let mut scene = Scene::new();
/// let below = scene.insert(
///     Item::rectangle(Rect::new(0.0, 0.0, 50.0, 50.0))
///         .with_style(StyleAttr::Fill, "red")
///         .with_tag(Tag::INTERACTIVE),
/// );
/// let above = scene.insert(
///     Item::oval(Rect::new(20.0, 20.0, 60.0, 60.0))
///         .with_style(StyleAttr::Fill, "blue")
///         .with_tag(Tag::INTERACTIVE),
/// );
///
/// let hits = HitTester::new(Tag::INTERACTIVE);
/// assert_eq!(hits.item_under_pointer(&scene, Point::new(40.0, 40.0)), Some(above));
/// assert_eq!(hits.item_under_pointer(&scene, Point::new(5.0, 5.0)), Some(below));
/// assert_eq!(hits.item_under_pointer(&scene, Point::new(90.0, 90.0)), None);
/// ```
#[derive(Clone, Debug)]
pub struct HitTester {
    tag: Tag,
    params: HitParams,
}

impl HitTester {
    /// Creates a tester for items carrying `tag`, with default parameters.
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            params: HitParams::default(),
        }
    }

    /// Replaces the hit parameters.
    #[must_use]
    pub fn with_params(mut self, params: HitParams) -> Self {
        self.params = params;
        self
    }

    /// The tag that opts items in.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// The hit parameters.
    pub fn params(&self) -> HitParams {
        self.params
    }

    /// Returns the topmost tagged item under `pt` with its score.
    pub fn hit(&self, scene: &Scene, pt: Point) -> Option<Hit> {
        let required = ItemFlags::VISIBLE | ItemFlags::PICKABLE;
        scene
            .items()
            .rev()
            .filter(|(_, item)| item.flags().contains(required) && item.has_tag(&self.tag))
            .find_map(|(id, item)| {
                item.hit_test(pt, &self.params)
                    .map(|score| Hit { id, score })
            })
    }

    /// Returns the topmost tagged item under `pt`.
    pub fn item_under_pointer(&self, scene: &Scene, pt: Point) -> Option<ItemId> {
        self.hit(scene, pt).map(|hit| hit.id)
    }
}
