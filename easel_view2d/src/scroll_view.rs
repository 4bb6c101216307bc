// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::modes::ClampMode;

/// Conversion from device (pointer) coordinates into scene coordinates.
///
/// This is the only thing interaction code needs from a view. The rendering
/// surface owns the scroll offset and scale; consumers treat the space as
/// read-only.
pub trait CoordinateSpace {
    /// Converts a device-space point into scene space.
    fn to_scene(&self, device: Point) -> Point;

    /// Converts a scene-space point into device space.
    fn to_device(&self, scene: Point) -> Point;
}

/// Scrollable window onto a scene.
///
/// `ScrollView` tracks a device-space view rectangle (the canvas widget), the
/// scene-space position of its top-left corner (the scroll offset), and a
/// uniform scale. It can be used to:
/// - Convert pointer positions into scene coordinates for hit testing.
/// - Scroll by device deltas or jump to a scene position.
/// - Confine scrolling to a scroll region, see [`ClampMode`].
#[derive(Clone, Debug)]
pub struct ScrollView {
    view_rect: Rect,
    scroll_region: Option<Rect>,
    offset: Vec2,
    scale: f64,
    min_scale: f64,
    max_scale: f64,
    clamp_mode: ClampMode,
    device_to_scene: Affine,
    scene_to_device: Affine,
}

impl ScrollView {
    /// Creates a view covering `view_rect` with no scroll offset and unit scale.
    ///
    /// - Initial offset is zero (scene origin at the view rect origin).
    /// - Scale is clamped to the range `[1e-3, 1e3]` by default.
    /// - Clamping defaults to [`ClampMode::Contain`]; it has no effect until a
    ///   scroll region is set.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut view = Self {
            view_rect,
            scroll_region: None,
            offset: Vec2::ZERO,
            scale: 1.0,
            min_scale: 1e-3,
            max_scale: 1e3,
            clamp_mode: ClampMode::default(),
            device_to_scene: Affine::IDENTITY,
            scene_to_device: Affine::IDENTITY,
        };
        view.rebuild_transforms();
        view
    }

    /// Returns the view rectangle in device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle in device coordinates.
    ///
    /// The scroll offset is kept, then re-confined to the scroll region.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
        self.clamp_to_region();
    }

    /// Sets the optional scroll region in scene coordinates.
    pub fn set_scroll_region(&mut self, region: Option<Rect>) {
        if self.scroll_region == region {
            return;
        }
        self.scroll_region = region;
        self.clamp_to_region();
    }

    /// Returns the scroll region, if any.
    #[must_use]
    pub fn scroll_region(&self) -> Option<Rect> {
        self.scroll_region
    }

    /// Sets the clamp mode used against the scroll region.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.clamp_to_region();
        }
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Returns the scene-space position of the view's top-left corner.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset.to_point()
    }

    /// Returns the current uniform scale (device pixels per scene unit).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the minimum and maximum scale factors.
    ///
    /// The range is normalized so that `min <= max` and the current scale is
    /// clamped into it.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.set_scale(self.scale);
    }

    /// Sets the scale, clamped into the configured range.
    ///
    /// The scroll offset (the scene point at the view origin) is preserved.
    /// Non-finite or non-positive values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() || scale <= 0.0 {
            return;
        }
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        if (self.scale - clamped).abs() < f64::EPSILON {
            return;
        }
        self.scale = clamped;
        self.rebuild_transforms();
        self.clamp_to_region();
    }

    /// Scales around an anchor in device coordinates.
    ///
    /// The scene point under `anchor` stays under `anchor` unless confinement
    /// has to move the view.
    pub fn zoom_about_device_point(&mut self, anchor: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let new_scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return;
        }
        let anchored = self.to_scene_point(anchor);
        self.scale = new_scale;
        let from_origin = (anchor - self.view_rect.origin()) / new_scale;
        self.offset = anchored.to_vec2() - from_origin;
        self.rebuild_transforms();
        self.clamp_to_region();
    }

    /// Scrolls so that `origin` (scene space) sits at the view's top-left corner.
    pub fn scroll_to(&mut self, origin: Point) {
        let offset = origin.to_vec2();
        if offset == self.offset {
            return;
        }
        self.offset = offset;
        self.rebuild_transforms();
        self.clamp_to_region();
    }

    /// Scrolls by a delta in device pixels.
    ///
    /// Positive deltas move the visible window towards larger scene
    /// coordinates.
    pub fn scroll_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.offset += delta / self.scale;
        self.rebuild_transforms();
        self.clamp_to_region();
    }

    /// Returns the scene-space rectangle currently visible.
    #[must_use]
    pub fn visible_scene_rect(&self) -> Rect {
        self.to_scene_rect(self.view_rect)
    }

    /// Converts a device-space point into scene coordinates.
    #[must_use]
    pub fn to_scene_point(&self, pt: Point) -> Point {
        self.device_to_scene * pt
    }

    /// Converts a scene-space point into device coordinates.
    #[must_use]
    pub fn to_device_point(&self, pt: Point) -> Point {
        self.scene_to_device * pt
    }

    /// Converts a device-space rectangle into scene coordinates.
    #[must_use]
    pub fn to_scene_rect(&self, rect: Rect) -> Rect {
        // Axis-aligned uniform scale: mapping the two corners is exact.
        Rect::from_points(
            self.device_to_scene * rect.origin(),
            self.device_to_scene * Point::new(rect.x1, rect.y1),
        )
    }

    /// Converts a scene-space rectangle into device coordinates.
    #[must_use]
    pub fn to_device_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.scene_to_device * rect.origin(),
            self.scene_to_device * Point::new(rect.x1, rect.y1),
        )
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ScrollViewDebugInfo {
        ScrollViewDebugInfo {
            view_rect: self.view_rect,
            scroll_region: self.scroll_region,
            visible_scene_rect: self.visible_scene_rect(),
            offset: self.offset,
            scale: self.scale,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            clamp_mode: self.clamp_mode,
        }
    }

    fn rebuild_transforms(&mut self) {
        let view_origin = self.view_rect.origin().to_vec2();
        // Device -> scene: shift into the view rect, unscale, then add the scroll offset.
        self.device_to_scene = Affine::translate(self.offset)
            * Affine::scale(1.0 / self.scale)
            * Affine::translate(-view_origin);
        self.scene_to_device = self.device_to_scene.inverse();
    }

    fn clamp_to_region(&mut self) {
        let region = match self.scroll_region {
            Some(r) if r.width() > 0.0 && r.height() > 0.0 => r,
            _ => return,
        };
        let visible = self.visible_scene_rect();
        if visible.width() <= 0.0 || visible.height() <= 0.0 {
            return;
        }

        let target = match self.clamp_mode {
            ClampMode::None => return,
            ClampMode::Contain => Vec2::new(
                contain_axis(self.offset.x, visible.width(), region.x0, region.x1),
                contain_axis(self.offset.y, visible.height(), region.y0, region.y1),
            ),
            ClampMode::KeepSomeVisible => {
                let mut target = self.offset;
                if visible.max_x() < region.min_x() {
                    target.x += region.min_x() - visible.max_x();
                } else if visible.min_x() > region.max_x() {
                    target.x += region.max_x() - visible.min_x();
                }
                if visible.max_y() < region.min_y() {
                    target.y += region.min_y() - visible.max_y();
                } else if visible.min_y() > region.max_y() {
                    target.y += region.max_y() - visible.min_y();
                }
                target
            }
        };

        if target != self.offset {
            self.offset = target;
            self.rebuild_transforms();
        }
    }
}

impl CoordinateSpace for ScrollView {
    fn to_scene(&self, device: Point) -> Point {
        self.to_scene_point(device)
    }

    fn to_device(&self, scene: Point) -> Point {
        self.to_device_point(scene)
    }
}

fn contain_axis(offset: f64, visible_len: f64, min: f64, max: f64) -> f64 {
    if max - min <= visible_len {
        min
    } else {
        offset.clamp(min, max - visible_len)
    }
}

/// Debug snapshot of a [`ScrollView`] state.
#[derive(Clone, Copy, Debug)]
pub struct ScrollViewDebugInfo {
    /// View rectangle in device coordinates.
    pub view_rect: Rect,
    /// Optional scroll region in scene coordinates.
    pub scroll_region: Option<Rect>,
    /// Scene-space rectangle currently visible through the view.
    pub visible_scene_rect: Rect,
    /// Scene-space position of the view's top-left corner.
    pub offset: Vec2,
    /// Current uniform scale.
    pub scale: f64,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Clamp mode used against the scroll region.
    pub clamp_mode: ClampMode,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::{ClampMode, CoordinateSpace, ScrollView};

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9, "x: {} vs {}", a.x, b.x);
        assert!((a.y - b.y).abs() < 1e-9, "y: {} vs {}", a.y, b.y);
    }

    #[test]
    fn unscrolled_view_is_identity() {
        let view = ScrollView::new(Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_close(view.to_scene(Point::new(12.0, 34.0)), Point::new(12.0, 34.0));
    }

    #[test]
    fn scroll_offset_is_added_to_device_points() {
        let mut view = ScrollView::new(Rect::new(0.0, 0.0, 400.0, 300.0));
        view.scroll_to(Point::new(100.0, 50.0));

        assert_close(view.to_scene(Point::new(10.0, 10.0)), Point::new(110.0, 60.0));
        assert_close(view.to_device(Point::new(110.0, 60.0)), Point::new(10.0, 10.0));
    }

    #[test]
    fn scale_divides_device_distance() {
        let mut view = ScrollView::new(Rect::new(0.0, 0.0, 400.0, 300.0));
        view.scroll_to(Point::new(100.0, 0.0));
        view.set_scale(2.0);

        assert_close(view.to_scene(Point::new(20.0, 40.0)), Point::new(110.0, 20.0));
    }

    #[test]
    fn scroll_by_uses_device_pixels() {
        let mut view = ScrollView::new(Rect::new(0.0, 0.0, 400.0, 300.0));
        view.set_scale(2.0);
        view.scroll_by(Vec2::new(40.0, 20.0));

        assert_close(view.offset(), Point::new(20.0, 10.0));
    }

    #[test]
    fn contain_keeps_window_inside_region() {
        let mut view = ScrollView::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        view.set_scroll_region(Some(Rect::new(0.0, 0.0, 300.0, 240.0)));

        view.scroll_to(Point::new(1000.0, -50.0));
        assert_close(view.offset(), Point::new(200.0, 0.0));

        let visible = view.visible_scene_rect();
        assert!(visible.x1 <= 300.0 + 1e-9);
        assert!(visible.y0 >= -1e-9);
    }

    #[test]
    fn contain_pins_small_region_to_its_origin() {
        let mut view = ScrollView::new(Rect::new(0.0, 0.0, 500.0, 500.0));
        view.set_scroll_region(Some(Rect::new(10.0, 20.0, 110.0, 120.0)));

        view.scroll_to(Point::new(60.0, 70.0));
        assert_close(view.offset(), Point::new(10.0, 20.0));
    }

    #[test]
    fn keep_some_visible_pulls_back_far_scrolls() {
        let mut view = ScrollView::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        view.set_clamp_mode(ClampMode::KeepSomeVisible);
        let region = Rect::new(0.0, 0.0, 50.0, 50.0);
        view.set_scroll_region(Some(region));

        view.scroll_by(Vec2::new(1000.0, 1000.0));
        let visible = view.visible_scene_rect();
        assert!(visible.min_x() <= region.max_x() + 1e-9);
        assert!(visible.min_y() <= region.max_y() + 1e-9);
    }

    #[test]
    fn clamp_none_leaves_offset_alone() {
        let mut view = ScrollView::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        view.set_clamp_mode(ClampMode::None);
        view.set_scroll_region(Some(Rect::new(0.0, 0.0, 50.0, 50.0)));

        view.scroll_to(Point::new(-500.0, 900.0));
        assert_close(view.offset(), Point::new(-500.0, 900.0));
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let mut view = ScrollView::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        view.scroll_to(Point::new(30.0, 40.0));
        let anchor = Point::new(400.0, 300.0);
        let before = view.to_scene(anchor);

        view.zoom_about_device_point(anchor, 2.0);
        assert!((view.scale() - 2.0).abs() < 1e-12);
        assert_close(view.to_scene(anchor), before);
    }

    #[test]
    fn invalid_scale_is_ignored() {
        let mut view = ScrollView::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        view.set_scale(0.0);
        view.set_scale(f64::NAN);
        view.set_scale(-3.0);
        assert_eq!(view.scale(), 1.0);

        view.set_scale_limits(4.0, 2.0);
        assert_eq!(view.scale(), 2.0);
        let info = view.debug_info();
        assert!(info.min_scale <= info.max_scale);
    }

    #[test]
    fn view_rect_origin_is_respected() {
        let view = ScrollView::new(Rect::new(5.0, 5.0, 105.0, 105.0));
        assert_close(view.to_scene(Point::new(5.0, 5.0)), Point::ZERO);
    }
}
