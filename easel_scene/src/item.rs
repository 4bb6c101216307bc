// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene items: kind, geometry, style map, tags and flags.

use core::f64::consts::PI;

use hashbrown::HashMap;
use kurbo::{Affine, Arc, BezPath, Ellipse, Point, Rect, Shape, Vec2};
use smallvec::SmallVec;

use crate::types::{Color, ItemFlags, ItemKind, StyleAttr, Tag};

/// Flattening tolerance used when converting curved shapes to paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Geometry of an item in scene coordinates.
#[derive(Clone, Debug)]
pub enum Geometry {
    /// Open path stroked with the item's width (lines and curves).
    Stroke(BezPath),
    /// Closed path (polygons).
    Polygon(BezPath),
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Ellipse.
    Oval(Ellipse),
    /// Pie slice of an ellipse.
    Arc(Arc),
    /// Opaque extent of text, bitmaps and embedded windows.
    Bounds(Rect),
}

impl Geometry {
    /// Conservative bounding box, not including stroke width.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Stroke(path) | Self::Polygon(path) => path.bounding_box(),
            Self::Rect(rect) | Self::Bounds(rect) => *rect,
            Self::Oval(ellipse) => ellipse.bounding_box(),
            Self::Arc(arc) => pie_slice(arc).bounding_box(),
        }
    }

    /// Translates every coordinate by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Self::Stroke(path) | Self::Polygon(path) => {
                path.apply_affine(Affine::translate(delta));
            }
            Self::Rect(rect) | Self::Bounds(rect) => *rect = *rect + delta,
            Self::Oval(ellipse) => *ellipse = Affine::translate(delta) * *ellipse,
            Self::Arc(arc) => arc.center += delta,
        }
    }

    /// Returns `true` if the geometry encloses an area that can be filled.
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            Self::Polygon(_) | Self::Rect(_) | Self::Oval(_) | Self::Arc(_)
        )
    }

    /// The path traced by the item's outline (or the line itself).
    pub(crate) fn outline(&self) -> BezPath {
        match self {
            Self::Stroke(path) | Self::Polygon(path) => path.clone(),
            Self::Rect(rect) | Self::Bounds(rect) => rect.to_path(PATH_TOLERANCE),
            Self::Oval(ellipse) => ellipse.to_path(PATH_TOLERANCE),
            Self::Arc(arc) => pie_slice(arc),
        }
    }

    /// Returns `true` if `pt` lies inside the enclosed area.
    pub(crate) fn area_contains(&self, pt: Point) -> bool {
        match self {
            Self::Stroke(_) => false,
            Self::Polygon(path) => path.contains(pt),
            Self::Rect(rect) | Self::Bounds(rect) => rect.contains(pt),
            Self::Oval(ellipse) => ellipse.contains(pt),
            Self::Arc(arc) => pie_slice(arc).contains(pt),
        }
    }
}

fn pie_slice(arc: &Arc) -> BezPath {
    let dir = Vec2::from_angle(arc.start_angle);
    let start = arc.center + Vec2::new(dir.x * arc.radii.x, dir.y * arc.radii.y);
    let mut path = BezPath::new();
    path.move_to(arc.center);
    path.line_to(start);
    path.extend(arc.append_iter(PATH_TOLERANCE));
    path.close_path();
    path
}

fn polyline(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, pt) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path
}

/// A drawable or embedded-control entity in the scene.
///
/// Items are built by scene construction code and then handed to
/// [`Scene::insert`](crate::Scene::insert). After insertion they are mutated
/// only through the [`Scene`](crate::Scene).
///
/// ```
/// use kurbo::Rect;
/// use easel_scene::{Item, ItemKind, StyleAttr, Tag};
///
/// let item = Item::rectangle(Rect::new(10.0, 10.0, 50.0, 40.0))
///     .with_style(StyleAttr::Outline, "red")
///     .with_stroke_width(3.0)
///     .with_tag(Tag::INTERACTIVE);
/// assert_eq!(item.kind(), ItemKind::Rectangle);
/// assert!(item.style(StyleAttr::Fill).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Item {
    kind: ItemKind,
    geometry: Geometry,
    stroke_width: f64,
    style: HashMap<StyleAttr, Color>,
    tags: SmallVec<[Tag; 2]>,
    flags: ItemFlags,
}

impl Item {
    fn from_parts(kind: ItemKind, geometry: Geometry) -> Self {
        Self {
            kind,
            geometry,
            stroke_width: 1.0,
            style: HashMap::new(),
            tags: SmallVec::new(),
            flags: ItemFlags::default(),
        }
    }

    /// Polyline through `points`.
    pub fn line(points: impl IntoIterator<Item = Point>) -> Self {
        Self::from_parts(ItemKind::Line, Geometry::Stroke(polyline(points)))
    }

    /// Curve along an already smoothed path.
    pub fn curve(path: BezPath) -> Self {
        Self::from_parts(ItemKind::Curve, Geometry::Stroke(path))
    }

    /// Closed polygon through `points`.
    ///
    /// With no points the polygon is empty and never hit.
    pub fn polygon(points: impl IntoIterator<Item = Point>) -> Self {
        let mut path = polyline(points);
        if !path.elements().is_empty() {
            path.close_path();
        }
        Self::from_parts(ItemKind::Polygon, Geometry::Polygon(path))
    }

    /// Rectangle.
    pub fn rectangle(rect: Rect) -> Self {
        Self::from_parts(ItemKind::Rectangle, Geometry::Rect(rect))
    }

    /// Oval inscribed in `bounds`.
    pub fn oval(bounds: Rect) -> Self {
        Self::from_parts(ItemKind::Oval, Geometry::Oval(Ellipse::from_rect(bounds)))
    }

    /// Pie-slice arc of the oval inscribed in `bounds`.
    ///
    /// Angles are in degrees, measured counter-clockwise (as seen on screen)
    /// from the positive x axis.
    pub fn arc(bounds: Rect, start_degrees: f64, extent_degrees: f64) -> Self {
        let to_rad = PI / 180.0;
        // Scene y grows downward, so a visually counter-clockwise angle is negative.
        let arc = Arc::new(
            bounds.center(),
            Vec2::new(bounds.width() / 2.0, bounds.height() / 2.0),
            -start_degrees * to_rad,
            -extent_degrees * to_rad,
            0.0,
        );
        Self::from_parts(ItemKind::Arc, Geometry::Arc(arc))
    }

    /// Text occupying `extent`, as laid out by the rendering surface.
    pub fn text(extent: Rect) -> Self {
        Self::from_parts(ItemKind::Text, Geometry::Bounds(extent))
    }

    /// Bitmap occupying `extent`.
    pub fn bitmap(extent: Rect) -> Self {
        Self::from_parts(ItemKind::Bitmap, Geometry::Bounds(extent))
    }

    /// Embedded control occupying `extent`.
    pub fn window(extent: Rect) -> Self {
        Self::from_parts(ItemKind::Window, Geometry::Bounds(extent))
    }

    /// Sets a style attribute.
    #[must_use]
    pub fn with_style(mut self, attr: StyleAttr, color: impl Into<Color>) -> Self {
        self.set_style(attr, Some(color.into()));
        self
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.add_tag(tag.into());
        self
    }

    /// Sets the stroke width (default `1.0`).
    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    /// Sets the flags (default `VISIBLE | PICKABLE`).
    #[must_use]
    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The item's kind.
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// The item's geometry in scene coordinates.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Stroke width in scene units.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Bounding box including half the stroke width.
    pub fn bounds(&self) -> Rect {
        let half = self.stroke_width / 2.0;
        self.geometry.bounding_box().inflate(half, half)
    }

    /// Returns the attribute's value, or `None` when unset or empty.
    pub fn style(&self, attr: StyleAttr) -> Option<&Color> {
        self.style.get(&attr).filter(|c| !c.is_empty())
    }

    /// Returns `true` if the item carries `tag`.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The item's tags.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Visibility and picking flags.
    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    pub(crate) fn set_style(&mut self, attr: StyleAttr, value: Option<Color>) {
        match value {
            Some(color) => {
                self.style.insert(attr, color);
            }
            None => {
                self.style.remove(&attr);
            }
        }
    }

    pub(crate) fn add_tag(&mut self, tag: Tag) -> bool {
        if self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub(crate) fn remove_tag(&mut self, tag: &Tag) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub(crate) fn set_flags(&mut self, flags: ItemFlags) {
        self.flags = flags;
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.geometry.translate(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_moves_every_geometry_kind() {
        let delta = Vec2::new(5.0, -2.0);
        let items = [
            Item::line([Point::new(0.0, 0.0), Point::new(10.0, 0.0)]),
            Item::polygon([Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)]),
            Item::rectangle(Rect::new(0.0, 0.0, 10.0, 10.0)),
            Item::oval(Rect::new(0.0, 0.0, 10.0, 10.0)),
            Item::arc(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, 90.0),
            Item::bitmap(Rect::new(0.0, 0.0, 10.0, 10.0)),
        ];
        for mut item in items {
            let before = item.geometry().bounding_box();
            item.translate(delta);
            let after = item.geometry().bounding_box();
            assert!((after.x0 - before.x0 - delta.x).abs() < 1e-9, "{:?}", item.kind());
            assert!((after.y0 - before.y0 - delta.y).abs() < 1e-9, "{:?}", item.kind());
            assert!((after.width() - before.width()).abs() < 1e-9, "{:?}", item.kind());
        }
    }

    #[test]
    fn empty_polygon_is_inert() {
        let mut item = Item::polygon(core::iter::empty()).with_style(StyleAttr::Fill, "red");
        assert_eq!(item.kind(), ItemKind::Polygon);
        assert!(item.geometry().outline().elements().is_empty());
        item.translate(Vec2::new(3.0, 4.0));
        assert!(item.geometry().outline().elements().is_empty());
    }

    #[test]
    fn translate_leaves_style_alone() {
        let mut item =
            Item::oval(Rect::new(0.0, 0.0, 4.0, 4.0)).with_style(StyleAttr::Fill, "blue");
        item.translate(Vec2::new(1.0, 1.0));
        assert_eq!(item.style(StyleAttr::Fill), Some(&Color::from("blue")));
    }

    #[test]
    fn empty_style_reads_as_unset() {
        let item = Item::rectangle(Rect::new(0.0, 0.0, 4.0, 4.0)).with_style(StyleAttr::Fill, "");
        assert!(item.style(StyleAttr::Fill).is_none());
    }

    #[test]
    fn clearing_a_style_removes_it() {
        let mut item =
            Item::rectangle(Rect::new(0.0, 0.0, 4.0, 4.0)).with_style(StyleAttr::Outline, "red");
        item.set_style(StyleAttr::Outline, None);
        assert!(item.style(StyleAttr::Outline).is_none());
    }

    #[test]
    fn tags_are_deduplicated() {
        let mut item = Item::text(Rect::new(0.0, 0.0, 4.0, 4.0)).with_tag(Tag::INTERACTIVE);
        assert!(!item.add_tag(Tag::INTERACTIVE));
        assert_eq!(item.tags().len(), 1);
        assert!(item.remove_tag(&Tag::INTERACTIVE));
        assert!(!item.has_tag(&Tag::INTERACTIVE));
    }

    #[test]
    fn quarter_arc_covers_its_quadrant() {
        // 0..90 degrees counter-clockwise on screen is the upper-right quadrant.
        let arc = Item::arc(Rect::new(0.0, 0.0, 20.0, 20.0), 0.0, 90.0);
        assert!(arc.geometry().area_contains(Point::new(14.0, 6.0)));
        assert!(!arc.geometry().area_contains(Point::new(6.0, 14.0)));
    }
}
