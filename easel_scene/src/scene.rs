// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene container: item storage, draw order and the read/write contract.

use alloc::vec::Vec;
use core::mem;

use kurbo::Vec2;

use crate::damage::Damage;
use crate::item::Item;
use crate::types::{Color, ItemFlags, ItemId, StyleAttr, Tag};

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    item: Option<Item>,
}

/// Owns the items of a scene and their draw order.
///
/// Mutations through a stale or unknown [`ItemId`] are silent no-ops that
/// report `false`; items are owned by external scene logic and may disappear
/// between events.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    order: Vec<ItemId>,
    damage: Damage,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item on top of the draw order.
    pub fn insert(&mut self, item: Item) -> ItemId {
        self.damage.push(item.bounds());
        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.item = Some(item);
            ItemId::new(idx, slot.generation)
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "scenes never hold more than u32::MAX items"
            )]
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                item: Some(item),
            });
            ItemId::new(idx, 1)
        };
        self.order.push(id);
        id
    }

    /// Removes an item, returning it if it was alive.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        if !self.is_alive(id) {
            return None;
        }
        let item = self.slots[id.idx()].item.take()?;
        self.free.push(id.0);
        self.order.retain(|&o| o != id);
        self.damage.push(item.bounds());
        Some(item)
    }

    /// Returns `true` if `id` refers to a live item.
    pub fn is_alive(&self, id: ItemId) -> bool {
        self.slots
            .get(id.idx())
            .is_some_and(|s| s.generation == id.1 && s.item.is_some())
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the scene holds no items.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the item for `id`, if alive.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.item.as_ref()
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.item.as_mut()
    }

    /// Iterates live items from bottom to top of the draw order.
    pub fn items(&self) -> impl DoubleEndedIterator<Item = (ItemId, &Item)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.item(id).map(|item| (id, item)))
    }

    /// Ids of all items carrying `tag`, in draw order.
    pub fn find_by_tag(&self, tag: &Tag) -> Vec<ItemId> {
        self.items()
            .filter(|(_, item)| item.has_tag(tag))
            .map(|(id, _)| id)
            .collect()
    }

    /// Reads a style attribute. Missing items and empty values read as unset.
    pub fn style(&self, id: ItemId, attr: StyleAttr) -> Option<&Color> {
        self.item(id)?.style(attr)
    }

    /// Writes a style attribute; `None` clears it.
    ///
    /// Returns `false` (and does nothing) if the item is gone.
    pub fn set_style(&mut self, id: ItemId, attr: StyleAttr, value: Option<Color>) -> bool {
        let Some(item) = self.item_mut(id) else {
            return false;
        };
        item.set_style(attr, value);
        let bounds = item.bounds();
        self.damage.push(bounds);
        true
    }

    /// Translates the item's geometry by `delta` without touching its style.
    ///
    /// Returns `false` (and does nothing) if the item is gone.
    pub fn move_by(&mut self, id: ItemId, delta: Vec2) -> bool {
        let Some(item) = self.item_mut(id) else {
            return false;
        };
        let old = item.bounds();
        item.translate(delta);
        let new = item.bounds();
        self.damage.push(old);
        self.damage.push(new);
        true
    }

    /// Adds `tag` to the item. Returns `false` if the item is gone or already tagged.
    pub fn add_tag(&mut self, id: ItemId, tag: impl Into<Tag>) -> bool {
        self.item_mut(id).is_some_and(|item| item.add_tag(tag.into()))
    }

    /// Removes `tag` from the item. Returns `false` if the item is gone or untagged.
    pub fn remove_tag(&mut self, id: ItemId, tag: &Tag) -> bool {
        self.item_mut(id).is_some_and(|item| item.remove_tag(tag))
    }

    /// Returns `true` if the item is alive and carries `tag`.
    pub fn has_tag(&self, id: ItemId, tag: &Tag) -> bool {
        self.item(id).is_some_and(|item| item.has_tag(tag))
    }

    /// Replaces the item's flags. Returns `false` if the item is gone.
    pub fn set_flags(&mut self, id: ItemId, flags: ItemFlags) -> bool {
        let Some(item) = self.item_mut(id) else {
            return false;
        };
        item.set_flags(flags);
        let bounds = item.bounds();
        self.damage.push(bounds);
        true
    }

    /// Takes the damage accumulated since the previous call.
    pub fn take_damage(&mut self) -> Damage {
        mem::take(&mut self.damage)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::*;

    fn rect_item() -> Item {
        Item::rectangle(Rect::new(0.0, 0.0, 10.0, 10.0)).with_style(StyleAttr::Outline, "red")
    }

    #[test]
    fn insert_appends_to_draw_order() {
        let mut scene = Scene::new();
        let a = scene.insert(rect_item());
        let b = scene.insert(Item::text(Rect::new(0.0, 0.0, 1.0, 1.0)));
        let order: Vec<_> = scene.items().map(|(id, _)| id).collect();
        assert_eq!(order, [a, b]);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn stale_ids_do_not_alias_reused_slots() {
        let mut scene = Scene::new();
        let a = scene.insert(rect_item());
        assert!(scene.remove(a).is_some());
        let b = scene.insert(rect_item());

        assert_ne!(a, b);
        assert!(!scene.is_alive(a));
        assert!(scene.is_alive(b));
        assert!(scene.item(a).is_none());
    }

    #[test]
    fn find_by_tag_returns_tagged_ids_in_draw_order() {
        let mut scene = Scene::new();
        let a = scene.insert(rect_item().with_tag(Tag::INTERACTIVE));
        let _grid = scene.insert(Item::line([Point::ZERO, Point::new(5.0, 0.0)]));
        let c = scene.insert(Item::oval(Rect::new(0.0, 0.0, 3.0, 3.0)).with_tag(Tag::INTERACTIVE));

        assert_eq!(scene.find_by_tag(&Tag::INTERACTIVE), [a, c]);
        assert!(scene.find_by_tag(&Tag::from("scalevalue")).is_empty());
    }

    #[test]
    fn set_style_round_trips_including_unset() {
        let mut scene = Scene::new();
        let id = scene.insert(rect_item());

        assert!(scene.set_style(id, StyleAttr::Fill, Some(Color::from("green"))));
        assert_eq!(scene.style(id, StyleAttr::Fill), Some(&Color::from("green")));
        assert!(scene.set_style(id, StyleAttr::Fill, None));
        assert!(scene.style(id, StyleAttr::Fill).is_none());
    }

    #[test]
    fn operations_on_missing_items_are_noops() {
        let mut scene = Scene::new();
        let id = scene.insert(rect_item());
        scene.remove(id);
        scene.take_damage();

        assert!(!scene.set_style(id, StyleAttr::Fill, Some(Color::from("green"))));
        assert!(!scene.move_by(id, Vec2::new(1.0, 1.0)));
        assert!(!scene.add_tag(id, Tag::INTERACTIVE));
        assert!(!scene.set_flags(id, ItemFlags::empty()));
        assert!(scene.style(id, StyleAttr::Outline).is_none());
        assert!(scene.take_damage().is_empty());
    }

    #[test]
    fn move_by_reports_old_and_new_bounds() {
        let mut scene = Scene::new();
        let id = scene.insert(Item::bitmap(Rect::new(0.0, 0.0, 10.0, 10.0)).with_stroke_width(0.0));
        scene.take_damage();

        assert!(scene.move_by(id, Vec2::new(5.0, 0.0)));
        let damage = scene.take_damage();
        assert_eq!(
            damage.dirty_rects,
            [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(5.0, 0.0, 15.0, 10.0)]
        );
        assert_eq!(damage.union_rect(), Some(Rect::new(0.0, 0.0, 15.0, 10.0)));
        assert_eq!(scene.style(id, StyleAttr::Background), None);
    }
}
