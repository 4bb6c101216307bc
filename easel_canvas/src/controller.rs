// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction controller: hover highlight and primary-button drag.

use easel_event_state::drag::DragState;
use easel_event_state::highlight::{Highlight, HighlightState, LeaveOutcome, StaleLeavePolicy};
use easel_event_state::hover::{HoverEvent, HoverState};
use easel_scene::{Color, HitTester, ItemId, Scene, StyleAttr};
use easel_view2d::CoordinateSpace;
use kurbo::{Point, Vec2};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::CanvasConfig;
use crate::error::CanvasResult;

/// A scene mutation made while handling an event.
///
/// Renderers use these to know what to redraw; [`Scene::take_damage`] gives
/// the matching regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// A style attribute of `item` was written.
    StyleChanged {
        /// The item whose style changed.
        item: ItemId,
        /// The attribute that was written.
        attr: StyleAttr,
    },
    /// `item` was translated by `delta` scene units.
    Moved {
        /// The dragged item.
        item: ItemId,
        /// The applied translation; zero when the pointer did not move.
        delta: Vec2,
    },
}

impl Effect {
    /// The item this effect touched.
    pub fn item(&self) -> ItemId {
        match self {
            Self::StyleChanged { item, .. } | Self::Moved { item, .. } => *item,
        }
    }
}

/// Effects produced by one event.
///
/// At most two: restoring a stale highlight and applying a new one.
pub type Effects = SmallVec<[Effect; 2]>;

/// The highlight slot as used by the controller.
pub type HighlightSlot = HighlightState<ItemId, StyleAttr, Option<Color>>;

/// Pointer interaction for one canvas.
///
/// Each instance owns its own highlight slot, hover tracker and drag state, so
/// several canvases can coexist. All entry points take the scene and the
/// coordinate space explicitly; the controller never holds on to them.
///
/// Entry points:
/// - [`on_pointer_enter`](Self::on_pointer_enter) / [`on_pointer_leave`](Self::on_pointer_leave):
///   explicit enter/leave reports from the surface.
/// - [`on_pointer_motion`](Self::on_pointer_motion): derive enter/leave from hit tests.
/// - [`on_primary_down`](Self::on_primary_down) / [`on_primary_move`](Self::on_primary_move) /
///   [`on_primary_up`](Self::on_primary_up): drag.
///
/// Highlight and drag are independent: an item can be highlighted and
/// dragged at the same time.
#[derive(Debug, Clone)]
pub struct InteractionController {
    config: CanvasConfig,
    hits: HitTester,
    highlight: HighlightSlot,
    hover: HoverState<ItemId>,
    drag: DragState<ItemId>,
}

impl InteractionController {
    /// Creates a controller after validating `config`.
    pub fn new(config: CanvasConfig) -> CanvasResult<Self> {
        config.validate()?;
        let hits = HitTester::new(config.interactive_tag.clone()).with_params(config.hit_params());
        Ok(Self {
            config,
            hits,
            highlight: HighlightState::new(),
            hover: HoverState::new(),
            drag: DragState::default(),
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The hit tester used to resolve items under the pointer.
    pub fn hit_tester(&self) -> &HitTester {
        &self.hits
    }

    /// The highlight slot.
    pub fn highlight_state(&self) -> &HighlightSlot {
        &self.highlight
    }

    /// The currently highlighted item.
    pub fn highlighted(&self) -> Option<ItemId> {
        self.highlight.current().map(|h| h.target)
    }

    /// The item being dragged.
    pub fn dragging(&self) -> Option<ItemId> {
        self.drag.target()
    }

    /// Cumulative scene-space offset of the current drag at device point `device`.
    pub fn drag_offset(&self, space: &impl CoordinateSpace, device: Point) -> Option<Vec2> {
        self.drag.total_offset(space.to_scene(device))
    }

    /// The interactive item under a device-space point.
    pub fn item_under_pointer(
        &self,
        scene: &Scene,
        space: &impl CoordinateSpace,
        device: Point,
    ) -> Option<ItemId> {
        self.hits.item_under_pointer(scene, space.to_scene(device))
    }

    /// Highlights `item`.
    ///
    /// Entering the already highlighted item does nothing. Entering another
    /// item first resolves the old record with the stale-leave policy.
    /// Untagged items, windows and kinds without a highlight rule leave the
    /// slot idle.
    pub fn enter_item(&mut self, scene: &mut Scene, item: ItemId) -> Effects {
        let mut effects = Effects::new();
        if self.highlight.is_highlighting(&item) {
            return effects;
        }
        self.resolve_stale(scene, &mut effects);

        let Some(entered) = scene.item(item) else {
            debug!(item = ?item, "enter on an item that is no longer in the scene");
            return effects;
        };
        if !entered.has_tag(&self.config.interactive_tag) {
            trace!(item = ?item, "enter on a non-interactive item");
            return effects;
        }
        let Some(attr) = self.config.highlight_policy.target_attr(entered) else {
            trace!(item = ?item, kind = ?entered.kind(), "kind is not highlighted");
            return effects;
        };
        let saved = entered.style(attr).cloned();

        scene.set_style(item, attr, Some(self.config.highlight_color.clone()));
        debug!(item = ?item, %attr, saved = ?saved, "highlight applied");
        self.highlight.enter(Highlight::new(item, attr, saved));
        effects.push(Effect::StyleChanged { item, attr });
        effects
    }

    /// Removes the highlight after the pointer left `item`.
    ///
    /// A leave for an item other than the highlighted one is handled by the
    /// configured [`StaleLeavePolicy`]. Either way the slot ends up idle.
    pub fn leave_item(&mut self, scene: &mut Scene, item: ItemId) -> Effects {
        let mut effects = Effects::new();
        match self.highlight.leave(&item, self.config.stale_leave) {
            LeaveOutcome::Restore(record) => restore(scene, record, &mut effects),
            LeaveOutcome::Discard(record) => {
                debug!(
                    recorded = ?record.target,
                    reported = ?item,
                    "discarding stale highlight without restoring"
                );
            }
            LeaveOutcome::Ignored => {}
        }
        effects
    }

    /// The surface reports the pointer entered an item at `device`.
    ///
    /// The hover tracker follows, so a later
    /// [`on_pointer_motion`](Self::on_pointer_motion) off the item leaves it.
    pub fn on_pointer_enter(
        &mut self,
        scene: &mut Scene,
        space: &impl CoordinateSpace,
        device: Point,
    ) -> Effects {
        let Some(item) = self.item_under_pointer(scene, space, device) else {
            return Effects::new();
        };
        self.hover.set(Some(item));
        self.enter_item(scene, item)
    }

    /// The surface reports the pointer left an item, now at `device`.
    ///
    /// The reported item is the interactive item under `device`. If there is
    /// none, the leave refers to the highlighted item. The hover tracker is
    /// reset, so motion back onto an item enters it again.
    pub fn on_pointer_leave(
        &mut self,
        scene: &mut Scene,
        space: &impl CoordinateSpace,
        device: Point,
    ) -> Effects {
        self.hover.set(None);
        let reported = self
            .item_under_pointer(scene, space, device)
            .or_else(|| self.highlighted());
        match reported {
            Some(item) => self.leave_item(scene, item),
            None => Effects::new(),
        }
    }

    /// Pointer motion at `device`: leave and enter items as the one under the pointer changes.
    pub fn on_pointer_motion(
        &mut self,
        scene: &mut Scene,
        space: &impl CoordinateSpace,
        device: Point,
    ) -> Effects {
        let target = self.item_under_pointer(scene, space, device);
        let mut effects = Effects::new();
        for event in self.hover.update(target) {
            let step = match event {
                HoverEvent::Leave(item) => self.leave_item(scene, item),
                HoverEvent::Enter(item) => self.enter_item(scene, item),
            };
            effects.extend(step);
        }
        effects
    }

    /// The pointer left the canvas surface: drop hover and highlight.
    pub fn on_pointer_exit_surface(&mut self, scene: &mut Scene) -> Effects {
        self.hover.clear();
        match self.highlighted() {
            Some(item) => self.leave_item(scene, item),
            None => Effects::new(),
        }
    }

    /// Primary button pressed at `device`: start dragging the interactive item under it.
    ///
    /// Returns the item being dragged. A press over empty space starts nothing
    /// and drops any drag left over from a missed release.
    pub fn on_primary_down(
        &mut self,
        scene: &Scene,
        space: &impl CoordinateSpace,
        device: Point,
    ) -> Option<ItemId> {
        let pos = space.to_scene(device);
        match self.hits.item_under_pointer(scene, pos) {
            Some(item) => {
                debug!(item = ?item, x = pos.x, y = pos.y, "drag started");
                self.drag.start(item, pos);
                Some(item)
            }
            None => {
                if let Some(stale) = self.drag.end() {
                    debug!(item = ?stale, "dropping drag left over from a missed release");
                }
                None
            }
        }
    }

    /// Primary-button motion at `device`: translate the dragged item.
    ///
    /// Emits one [`Effect::Moved`] with the scene-space delta since the last
    /// motion; the delta is zero when the pointer did not move. Emits nothing
    /// when no drag is active or the dragged item is gone.
    pub fn on_primary_move(
        &mut self,
        scene: &mut Scene,
        space: &impl CoordinateSpace,
        device: Point,
    ) -> Effects {
        let mut effects = Effects::new();
        let Some((item, delta)) = self.drag.update(space.to_scene(device)) else {
            return effects;
        };
        if !scene.is_alive(item) {
            debug!(item = ?item, "dragged item is no longer in the scene");
            return effects;
        }
        if delta != Vec2::ZERO {
            scene.move_by(item, delta);
        }
        trace!(item = ?item, dx = delta.x, dy = delta.y, "drag moved");
        effects.push(Effect::Moved { item, delta });
        effects
    }

    /// Primary button released: end the drag and return the item that was dragged.
    pub fn on_primary_up(&mut self) -> Option<ItemId> {
        let item = self.drag.end();
        if let Some(item) = item {
            debug!(item = ?item, "drag ended");
        }
        item
    }

    fn resolve_stale(&mut self, scene: &mut Scene, effects: &mut Effects) {
        let Some(record) = self.highlight.clear() else {
            return;
        };
        match self.config.stale_leave {
            StaleLeavePolicy::Discard => {
                debug!(
                    recorded = ?record.target,
                    "enter without leave; discarding stale highlight"
                );
            }
            StaleLeavePolicy::RestoreRecorded => restore(scene, record, effects),
        }
    }
}

fn restore(
    scene: &mut Scene,
    record: Highlight<ItemId, StyleAttr, Option<Color>>,
    effects: &mut Effects,
) {
    let Highlight {
        target,
        attr,
        saved,
    } = record;
    if scene.set_style(target, attr, saved) {
        debug!(item = ?target, %attr, "highlight restored");
        effects.push(Effect::StyleChanged { item: target, attr });
    } else {
        debug!(item = ?target, "highlighted item is no longer in the scene");
    }
}

#[cfg(test)]
mod tests {
    use easel_scene::{Item, Tag};
    use easel_view2d::ScrollView;
    use kurbo::Rect;

    use super::*;

    fn setup() -> (Scene, ScrollView, InteractionController) {
        let view = ScrollView::new(Rect::new(0.0, 0.0, 200.0, 200.0));
        let controller = InteractionController::new(CanvasConfig::default()).unwrap();
        (Scene::new(), view, controller)
    }

    #[test]
    fn entering_twice_does_not_save_the_highlight_color() {
        let (mut scene, _, mut controller) = setup();
        let id = scene.insert(
            Item::rectangle(Rect::new(0.0, 0.0, 10.0, 10.0))
                .with_style(StyleAttr::Outline, "red")
                .with_tag(Tag::INTERACTIVE),
        );

        assert_eq!(controller.enter_item(&mut scene, id).len(), 1);
        assert!(controller.enter_item(&mut scene, id).is_empty());
        controller.leave_item(&mut scene, id);

        assert_eq!(scene.style(id, StyleAttr::Outline), Some(&Color::from("red")));
    }

    #[test]
    fn untagged_items_are_not_highlighted() {
        let (mut scene, _, mut controller) = setup();
        let id = scene.insert(
            Item::rectangle(Rect::new(0.0, 0.0, 10.0, 10.0)).with_style(StyleAttr::Fill, "red"),
        );

        assert!(controller.enter_item(&mut scene, id).is_empty());
        assert_eq!(controller.highlighted(), None);
    }

    #[test]
    fn removed_highlighted_item_leaves_slot_idle() {
        let (mut scene, _, mut controller) = setup();
        let id = scene.insert(
            Item::oval(Rect::new(0.0, 0.0, 10.0, 10.0))
                .with_style(StyleAttr::Fill, "red")
                .with_tag(Tag::INTERACTIVE),
        );
        controller.enter_item(&mut scene, id);
        scene.remove(id);

        assert!(controller.leave_item(&mut scene, id).is_empty());
        assert_eq!(controller.highlighted(), None);
    }

    #[test]
    fn press_over_empty_space_drops_stale_drag() {
        let (mut scene, view, mut controller) = setup();
        scene.insert(
            Item::bitmap(Rect::new(0.0, 0.0, 10.0, 10.0)).with_tag(Tag::INTERACTIVE),
        );
        assert!(controller.on_primary_down(&scene, &view, Point::new(5.0, 5.0)).is_some());

        assert_eq!(controller.on_primary_down(&scene, &view, Point::new(150.0, 150.0)), None);
        assert_eq!(controller.dragging(), None);
        assert!(controller.on_primary_move(&mut scene, &view, Point::new(160.0, 160.0)).is_empty());
    }

    #[test]
    fn drag_of_removed_item_is_a_noop() {
        let (mut scene, view, mut controller) = setup();
        let id = scene.insert(
            Item::bitmap(Rect::new(0.0, 0.0, 10.0, 10.0)).with_tag(Tag::INTERACTIVE),
        );
        controller.on_primary_down(&scene, &view, Point::new(5.0, 5.0));
        scene.remove(id);

        assert!(controller.on_primary_move(&mut scene, &view, Point::new(8.0, 8.0)).is_empty());
    }
}
