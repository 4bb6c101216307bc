// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scene for the Easel demos.
//!
//! [`canvas_items`] builds the classic "canvas items" page: a 30 cm × 24 cm
//! scene split into a 3 × 3 grid, with one cell per item kind. Every item in
//! a cell is tagged [`Tag::INTERACTIVE`]; the grid and the captions are not.
//! The view shows a 15 cm × 10 cm window onto it.
//!
//! Run:
//! - `cargo run -p easel_demos --example canvas_items`

use easel_canvas::{Canvas, CanvasConfig, CanvasResult};
use easel_scene::{Item, Scene, StyleAttr, Tag};
use easel_view2d::ScrollView;
use kurbo::{BezPath, Point, Rect, Vec2};

/// Device pixels per centimeter at 96 DPI.
pub const PX_PER_CM: f64 = 96.0 / 2.54;

const BLUE: &str = "DeepSkyBlue";
const RED: &str = "red";
const GREEN: &str = "SeaGreen3";

/// Converts centimeters to scene units.
pub fn cm(value: f64) -> f64 {
    value * PX_PER_CM
}

/// A point given in centimeters.
pub fn pt(x: f64, y: f64) -> Point {
    Point::new(cm(x), cm(y))
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
    Rect::from_points(pt(x0, y0), pt(x1, y1))
}

fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| pt(x, y)).collect()
}

/// Quadratic spline through the midpoints of `points`, with the vertices as controls.
///
/// The curve starts at the first point and ends at the last one.
fn smooth(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);
    if rest.len() < 2 {
        for &p in rest {
            path.line_to(p);
        }
        return path;
    }
    for pair in rest.windows(2).take(rest.len() - 2) {
        path.quad_to(pair[0], pair[0].midpoint(pair[1]));
    }
    let n = rest.len();
    path.quad_to(rest[n - 2], rest[n - 1]);
    path
}

/// Text extent for a caption anchored at its top center.
fn caption_north(x: f64, y: f64, width: f64, height: f64) -> Rect {
    rect(x - width / 2.0, y, x + width / 2.0, y + height)
}

/// Extent of a bitmap centered at (`x`, `y`).
fn bitmap_at(x: f64, y: f64) -> Rect {
    rect(x - 0.75, y - 0.75, x + 0.75, y + 0.75)
}

/// Builds the demo scene and returns a canvas showing its top-left corner.
pub fn canvas_items(config: CanvasConfig) -> CanvasResult<Canvas> {
    let mut view = ScrollView::new(Rect::new(0.0, 0.0, cm(15.0), cm(10.0)));
    view.set_scroll_region(Some(rect(0.0, 0.0, 30.0, 24.0)));
    let mut canvas = Canvas::with_scene(Scene::new(), view, config)?;

    draw_grid(&mut canvas);
    draw_lines(&mut canvas);
    draw_curves(&mut canvas);
    draw_polygons(&mut canvas);
    draw_rectangles(&mut canvas);
    draw_ovals(&mut canvas);
    draw_text(&mut canvas);
    draw_arcs(&mut canvas);
    draw_bitmaps(&mut canvas);
    draw_windows(&mut canvas);
    Ok(canvas)
}

fn draw_grid(canvas: &mut Canvas) {
    let width = 2.0;
    canvas.insert(Item::rectangle(rect(0.0, 0.0, 30.0, 24.0)).with_stroke_width(width));
    for (a, b) in [
        ((0.0, 8.0), (30.0, 8.0)),
        ((0.0, 16.0), (30.0, 16.0)),
        ((10.0, 0.0), (10.0, 24.0)),
        ((20.0, 0.0), (20.0, 24.0)),
    ] {
        canvas.insert(Item::line(points(&[a, b])).with_stroke_width(width));
    }
}

fn interactive(item: Item) -> Item {
    item.with_tag(Tag::INTERACTIVE)
}

fn draw_lines(canvas: &mut Canvas) {
    canvas.insert(Item::text(caption_north(5.0, 0.2, 2.0, 0.5)));
    canvas.insert(interactive(
        Item::line(points(&[(1.0, 1.0), (3.0, 1.0), (1.0, 4.0), (3.0, 4.0)]))
            .with_stroke_width(cm(0.2))
            .with_style(StyleAttr::Fill, BLUE),
    ));
    canvas.insert(interactive(Item::line(points(&[(4.67, 1.0), (4.67, 4.0)]))));
    canvas.insert(interactive(Item::line(points(&[(6.33, 1.0), (6.33, 4.0)]))));
    canvas.insert(interactive(
        Item::line(points(&[
            (5.0, 6.0),
            (9.0, 6.0),
            (9.0, 1.0),
            (8.0, 1.0),
            (8.0, 4.8),
            (8.8, 4.8),
            (8.8, 1.2),
            (8.2, 1.2),
            (8.2, 4.6),
            (8.6, 4.6),
            (8.6, 1.4),
            (8.4, 1.4),
            (8.4, 4.4),
        ]))
        .with_stroke_width(3.0)
        .with_style(StyleAttr::Fill, RED),
    ));
    canvas.insert(interactive(
        Item::line(points(&[(1.0, 5.0), (7.0, 5.0), (7.0, 7.0), (9.0, 7.0)]))
            .with_stroke_width(cm(0.5)),
    ));
    canvas.insert(interactive(
        Item::line(points(&[
            (1.0, 7.0),
            (1.75, 5.8),
            (2.5, 7.0),
            (3.25, 5.8),
            (4.0, 7.0),
        ]))
        .with_stroke_width(cm(0.5)),
    ));
}

fn draw_curves(canvas: &mut Canvas) {
    canvas.insert(Item::text(caption_north(15.0, 0.2, 5.0, 0.5)));
    canvas.insert(interactive(
        Item::curve(smooth(&points(&[
            (11.0, 4.0),
            (11.5, 1.0),
            (13.5, 1.0),
            (14.0, 4.0),
        ])))
        .with_style(StyleAttr::Fill, BLUE),
    ));
    canvas.insert(interactive(
        Item::curve(smooth(&points(&[
            (15.5, 1.0),
            (19.5, 1.5),
            (15.5, 4.5),
            (19.5, 4.0),
        ])))
        .with_stroke_width(3.0),
    ));
    canvas.insert(interactive(
        Item::curve(smooth(&points(&[
            (12.0, 6.0),
            (13.5, 4.5),
            (16.5, 7.5),
            (18.0, 6.0),
            (16.5, 4.5),
            (13.5, 7.5),
            (12.0, 6.0),
        ])))
        .with_stroke_width(cm(0.3))
        .with_style(StyleAttr::Fill, RED),
    ));
}

fn draw_polygons(canvas: &mut Canvas) {
    canvas.insert(Item::text(caption_north(25.0, 0.2, 2.5, 0.5)));
    canvas.insert(interactive(
        Item::polygon(points(&[
            (21.0, 1.0),
            (22.5, 1.75),
            (24.0, 1.0),
            (23.25, 2.5),
            (24.0, 4.0),
            (22.5, 3.25),
            (21.0, 4.0),
            (21.75, 2.5),
        ]))
        .with_stroke_width(4.0)
        .with_style(StyleAttr::Fill, GREEN)
        .with_style(StyleAttr::Outline, "black"),
    ));
    canvas.insert(interactive(
        Item::polygon(points(&[
            (25.0, 4.0),
            (25.0, 1.0),
            (26.0, 1.0),
            (27.0, 4.0),
            (28.0, 1.0),
            (29.0, 1.0),
            (29.0, 4.0),
        ]))
        .with_style(StyleAttr::Fill, RED),
    ));
    canvas.insert(interactive(
        Item::polygon(points(&[
            (22.0, 4.5),
            (25.0, 4.5),
            (25.0, 6.75),
            (28.0, 6.75),
            (28.0, 5.25),
            (24.0, 5.25),
            (24.0, 6.0),
            (26.0, 6.0),
            (26.0, 7.5),
            (22.0, 7.5),
        ]))
        .with_style(StyleAttr::Outline, "black"),
    ));
}

fn draw_rectangles(canvas: &mut Canvas) {
    canvas.insert(Item::text(caption_north(5.0, 8.2, 3.0, 0.5)));
    canvas.insert(interactive(
        Item::rectangle(rect(1.0, 9.5, 4.0, 12.5))
            .with_stroke_width(cm(0.3))
            .with_style(StyleAttr::Outline, RED),
    ));
    canvas.insert(interactive(
        Item::rectangle(rect(0.5, 13.5, 4.5, 15.5))
            .with_style(StyleAttr::Fill, GREEN)
            .with_style(StyleAttr::Outline, "black"),
    ));
    canvas.insert(interactive(
        Item::rectangle(rect(6.0, 10.0, 9.0, 15.0)).with_style(StyleAttr::Fill, BLUE),
    ));
}

fn draw_ovals(canvas: &mut Canvas) {
    canvas.insert(Item::text(caption_north(15.0, 8.2, 1.5, 0.5)));
    canvas.insert(interactive(
        Item::oval(rect(11.0, 9.5, 14.0, 12.5))
            .with_stroke_width(cm(0.3))
            .with_style(StyleAttr::Outline, RED),
    ));
    canvas.insert(interactive(
        Item::oval(rect(10.5, 13.5, 14.5, 15.5))
            .with_style(StyleAttr::Fill, GREEN)
            .with_style(StyleAttr::Outline, "black"),
    ));
    canvas.insert(interactive(
        Item::oval(rect(16.0, 10.0, 19.0, 15.0)).with_style(StyleAttr::Fill, BLUE),
    ));
}

fn draw_text(canvas: &mut Canvas) {
    canvas.insert(Item::text(caption_north(25.0, 8.2, 1.2, 0.5)));
    canvas.insert(interactive(
        Item::text(caption_north(22.5, 9.0, 4.0, 1.6)).with_style(StyleAttr::Fill, "black"),
    ));
    canvas.insert(interactive(
        Item::text(rect(25.5, 10.0, 28.5, 12.0)).with_style(StyleAttr::Fill, BLUE),
    ));
    canvas.insert(interactive(
        Item::text(rect(21.0, 13.5, 29.0, 14.5)).with_style(StyleAttr::Fill, RED),
    ));
}

fn draw_arcs(canvas: &mut Canvas) {
    canvas.insert(Item::text(caption_north(5.0, 16.2, 1.2, 0.5)));
    canvas.insert(interactive(
        Item::arc(rect(0.5, 17.0, 7.0, 20.0), 45.0, 270.0)
            .with_style(StyleAttr::Fill, GREEN)
            .with_style(StyleAttr::Outline, "black"),
    ));
    canvas.insert(interactive(
        Item::arc(rect(6.5, 17.0, 9.5, 20.0), 135.0, 270.0)
            .with_stroke_width(cm(0.4))
            .with_style(StyleAttr::Outline, BLUE),
    ));
    canvas.insert(interactive(
        Item::arc(rect(0.5, 20.0, 9.5, 24.0), 225.0, -90.0)
            .with_stroke_width(cm(0.4))
            .with_style(StyleAttr::Fill, "")
            .with_style(StyleAttr::Outline, RED),
    ));
    canvas.insert(interactive(
        Item::arc(rect(5.5, 20.5, 9.5, 23.5), 45.0, 270.0)
            .with_stroke_width(cm(0.4))
            .with_style(StyleAttr::Fill, BLUE),
    ));
}

fn draw_bitmaps(canvas: &mut Canvas) {
    canvas.insert(Item::text(caption_north(15.0, 16.2, 1.8, 0.5)));
    for (x, y) in [(13.0, 20.0), (17.0, 18.5), (17.0, 21.5)] {
        canvas.insert(interactive(
            Item::bitmap(bitmap_at(x, y))
                .with_style(StyleAttr::Foreground, "black")
                .with_style(StyleAttr::Background, "white"),
        ));
    }
}

fn draw_windows(canvas: &mut Canvas) {
    canvas.insert(Item::text(caption_north(25.0, 16.2, 2.0, 0.5)));
    canvas.insert(Item::text(rect(21.0, 17.4, 22.5, 17.9)));
    canvas.insert(interactive(Item::window(rect(21.0, 18.0, 23.5, 18.8))));
    canvas.insert(Item::text(rect(21.0, 20.4, 22.2, 20.9)));
    canvas.insert(interactive(Item::window(rect(21.0, 21.0, 25.0, 21.7))));
    canvas.insert(interactive(Item::window(
        caption_north(28.5, 17.5, 0.8, 6.0),
    )));
}

/// A scripted pointer session: device positions for hover and drag steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Pointer motion with no button held.
    Hover(Point),
    /// Primary button pressed.
    Press(Point),
    /// Pointer motion with the primary button held.
    Drag(Point),
    /// Primary button released.
    Release,
    /// The view scrolls by a device-space delta.
    Scroll(Vec2),
    /// The pointer leaves the canvas.
    Exit,
}

/// The session replayed by the `canvas_items` demo, in device coordinates.
///
/// It hovers over the blue "Z" line and a curve, drags the "Z" 2 cm right and
/// 1 cm down, then scrolls to the bottom-right corner of the scene, hovers a
/// bitmap and the button window, and drags the bitmap.
pub fn scripted_session() -> Vec<Step> {
    vec![
        Step::Hover(pt(2.0, 1.0)),
        Step::Hover(pt(0.5, 2.5)),
        Step::Hover(pt(11.0, 4.0)),
        Step::Press(pt(2.0, 1.0)),
        Step::Drag(pt(3.0, 1.5)),
        Step::Drag(pt(4.0, 2.0)),
        Step::Drag(pt(4.0, 2.0)),
        Step::Release,
        Step::Drag(pt(6.0, 3.0)),
        Step::Scroll(Vec2::new(cm(15.0), cm(14.0))),
        Step::Hover(pt(2.0, 4.5)),
        Step::Hover(pt(7.0, 4.4)),
        Step::Press(pt(2.0, 4.5)),
        Step::Drag(pt(3.0, 5.0)),
        Step::Release,
        Step::Exit,
    ]
}
