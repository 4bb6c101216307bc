// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag behavior of `easel_canvas`, including drags under a scrolled and
//! scaled view.

use easel_canvas::{Canvas, CanvasConfig, Effect, Effects};
use easel_scene::{Geometry, Item, ItemId, StyleAttr, Tag};
use kurbo::{Point, Rect, Vec2};

fn canvas() -> Canvas {
    Canvas::new(Rect::new(0.0, 0.0, 400.0, 300.0), CanvasConfig::default()).unwrap()
}

fn square(canvas: &mut Canvas, rect: Rect) -> ItemId {
    canvas.insert(
        Item::rectangle(rect)
            .with_style(StyleAttr::Fill, "orange")
            .with_tag(Tag::INTERACTIVE),
    )
}

fn moved(effects: &Effects) -> Option<Vec2> {
    match effects.as_slice() {
        [Effect::Moved { delta, .. }] => Some(*delta),
        _ => None,
    }
}

fn rect_of(canvas: &Canvas, id: ItemId) -> Rect {
    match canvas.scene().item(id).unwrap().geometry() {
        Geometry::Rect(rect) => *rect,
        other => panic!("unexpected geometry {other:?}"),
    }
}

#[test]
fn drag_moves_by_pointer_delta_and_zero_motion_is_zero() {
    let mut canvas = canvas();
    let x = square(&mut canvas, Rect::new(0.0, 0.0, 20.0, 20.0));

    assert_eq!(canvas.on_primary_down(Point::new(10.0, 10.0)), Some(x));
    assert_eq!(moved(&canvas.on_primary_move(Point::new(12.0, 11.0))), Some(Vec2::new(2.0, 1.0)));
    assert_eq!(rect_of(&canvas, x), Rect::new(2.0, 1.0, 22.0, 21.0));

    assert_eq!(moved(&canvas.on_primary_move(Point::new(12.0, 11.0))), Some(Vec2::ZERO));
    assert_eq!(rect_of(&canvas, x), Rect::new(2.0, 1.0, 22.0, 21.0));
}

#[test]
fn per_call_deltas_accumulate() {
    let mut canvas = canvas();
    let x = square(&mut canvas, Rect::new(0.0, 0.0, 20.0, 20.0));
    canvas.on_primary_down(Point::new(5.0, 5.0));

    let total = [
        Point::new(7.0, 5.0),
        Point::new(7.0, 8.0),
        Point::new(6.0, 7.0),
    ]
    .into_iter()
    .filter_map(|p| moved(&canvas.on_primary_move(p)))
    .fold(Vec2::ZERO, |acc, d| acc + d);

    assert_eq!(total, Vec2::new(1.0, 2.0));
    assert_eq!(rect_of(&canvas, x), Rect::new(1.0, 2.0, 21.0, 22.0));
    assert_eq!(
        canvas.controller().drag_offset(canvas.view(), Point::new(6.0, 7.0)),
        Some(Vec2::new(1.0, 2.0))
    );
}

#[test]
fn drag_follows_the_item_fixed_at_press() {
    let mut canvas = canvas();
    let a = square(&mut canvas, Rect::new(0.0, 0.0, 20.0, 20.0));
    let b = square(&mut canvas, Rect::new(100.0, 0.0, 120.0, 20.0));

    canvas.on_primary_down(Point::new(10.0, 10.0));
    // Sweep across `b`; only `a` moves.
    canvas.on_primary_move(Point::new(110.0, 10.0));

    assert_eq!(rect_of(&canvas, a), Rect::new(100.0, 0.0, 120.0, 20.0));
    assert_eq!(rect_of(&canvas, b), Rect::new(100.0, 0.0, 120.0, 20.0));
    assert_eq!(canvas.controller().dragging(), Some(a));
}

#[test]
fn motion_after_release_is_ignored() {
    let mut canvas = canvas();
    let x = square(&mut canvas, Rect::new(0.0, 0.0, 20.0, 20.0));

    canvas.on_primary_down(Point::new(10.0, 10.0));
    canvas.on_primary_move(Point::new(15.0, 10.0));
    assert_eq!(canvas.on_primary_up(), Some(x));
    assert_eq!(canvas.on_primary_up(), None);

    assert!(canvas.on_primary_move(Point::new(50.0, 50.0)).is_empty());
    assert_eq!(rect_of(&canvas, x), Rect::new(5.0, 0.0, 25.0, 20.0));
}

#[test]
fn press_on_empty_space_starts_nothing() {
    let mut canvas = canvas();
    let x = square(&mut canvas, Rect::new(0.0, 0.0, 20.0, 20.0));

    assert_eq!(canvas.on_primary_down(Point::new(200.0, 200.0)), None);
    assert!(canvas.on_primary_move(Point::new(210.0, 200.0)).is_empty());
    assert_eq!(rect_of(&canvas, x), Rect::new(0.0, 0.0, 20.0, 20.0));
}

#[test]
fn non_interactive_items_cannot_be_dragged() {
    let mut canvas = canvas();
    let plain = canvas.insert(Item::bitmap(Rect::new(0.0, 0.0, 20.0, 20.0)));

    assert_eq!(canvas.on_primary_down(Point::new(10.0, 10.0)), None);
    canvas.on_primary_move(Point::new(30.0, 30.0));
    assert_eq!(
        canvas.scene().item(plain).unwrap().geometry().bounding_box(),
        Rect::new(0.0, 0.0, 20.0, 20.0)
    );
}

#[test]
fn windows_can_be_dragged() {
    let mut canvas = canvas();
    let w = canvas.insert(Item::window(Rect::new(0.0, 0.0, 40.0, 20.0)).with_tag(Tag::INTERACTIVE));

    assert_eq!(canvas.on_primary_down(Point::new(20.0, 10.0)), Some(w));
    canvas.on_primary_move(Point::new(30.0, 10.0));
    assert_eq!(
        canvas.scene().item(w).unwrap().geometry().bounding_box(),
        Rect::new(10.0, 0.0, 50.0, 20.0)
    );
}

#[test]
fn drag_uses_scene_coordinates_under_scroll() {
    let mut canvas = canvas();
    let x = square(&mut canvas, Rect::new(500.0, 400.0, 520.0, 420.0));
    canvas.view_mut().scroll_to(Point::new(490.0, 390.0));

    // Device (20, 20) is scene (510, 410).
    assert_eq!(canvas.item_under_pointer(Point::new(20.0, 20.0)), Some(x));
    canvas.on_primary_down(Point::new(20.0, 20.0));
    assert_eq!(moved(&canvas.on_primary_move(Point::new(23.0, 24.0))), Some(Vec2::new(3.0, 4.0)));
    assert_eq!(rect_of(&canvas, x), Rect::new(503.0, 404.0, 523.0, 424.0));
}

#[test]
fn drag_uses_scene_units_under_scale() {
    let mut canvas = canvas();
    let x = square(&mut canvas, Rect::new(0.0, 0.0, 20.0, 20.0));
    canvas.set_scale(2.0).unwrap();

    // At 2x, device (20, 20) is scene (10, 10) and 4 device pixels are 2 scene units.
    canvas.on_primary_down(Point::new(20.0, 20.0));
    assert_eq!(moved(&canvas.on_primary_move(Point::new(24.0, 20.0))), Some(Vec2::new(2.0, 0.0)));
    assert_eq!(rect_of(&canvas, x), Rect::new(2.0, 0.0, 22.0, 20.0));
}

#[test]
fn highlight_survives_a_drag() {
    let mut canvas = canvas();
    let x = square(&mut canvas, Rect::new(0.0, 0.0, 20.0, 20.0));

    canvas.on_pointer_enter(Point::new(10.0, 10.0));
    canvas.on_primary_down(Point::new(10.0, 10.0));
    canvas.on_primary_move(Point::new(40.0, 10.0));
    canvas.on_primary_up();

    assert_eq!(canvas.controller().highlighted(), Some(x));
    canvas.on_pointer_leave(Point::new(200.0, 200.0));
    assert_eq!(canvas.scene().style(x, StyleAttr::Fill).map(|c| c.as_str()), Some("orange"));
}

#[test]
fn drag_reports_damage_for_old_and_new_positions() {
    let mut canvas = canvas();
    square(&mut canvas, Rect::new(0.0, 0.0, 20.0, 20.0));
    canvas.take_damage();

    canvas.on_primary_down(Point::new(10.0, 10.0));
    canvas.on_primary_move(Point::new(40.0, 10.0));
    let damage = canvas.take_damage();
    let union = damage.union_rect().unwrap();
    assert!(union.contains_rect(Rect::new(0.0, 0.0, 50.0, 20.0)));
    assert!(canvas.take_damage().is_empty());
}
