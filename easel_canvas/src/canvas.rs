// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_scene::{Damage, Item, ItemId, Scene};
use easel_view2d::ScrollView;
use kurbo::{Point, Rect};
use tracing::debug;

use crate::config::CanvasConfig;
use crate::controller::{Effects, InteractionController};
use crate::error::{CanvasError, CanvasResult};

/// A scene, the view onto it and the controller that handles its pointer events.
///
/// Event methods take device-space points and forward to
/// [`InteractionController`] with this canvas's scene and view.
#[derive(Debug, Clone)]
pub struct Canvas {
    scene: Scene,
    view: ScrollView,
    controller: InteractionController,
}

impl Canvas {
    /// Creates an empty canvas whose view covers `view_rect` in device space.
    pub fn new(view_rect: Rect, config: CanvasConfig) -> CanvasResult<Self> {
        Self::with_scene(Scene::new(), ScrollView::new(view_rect), config)
    }

    /// Wraps an existing scene and view.
    pub fn with_scene(scene: Scene, view: ScrollView, config: CanvasConfig) -> CanvasResult<Self> {
        Ok(Self {
            scene,
            view,
            controller: InteractionController::new(config)?,
        })
    }

    /// The scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene, for construction and external logic.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The view.
    pub fn view(&self) -> &ScrollView {
        &self.view
    }

    /// Mutable access to the view, for scrolling.
    pub fn view_mut(&mut self) -> &mut ScrollView {
        &mut self.view
    }

    /// The interaction controller.
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Adds an item to the top of the draw order.
    pub fn insert(&mut self, item: Item) -> ItemId {
        self.scene.insert(item)
    }

    /// Sets the view scale.
    ///
    /// Unlike [`ScrollView::set_scale`], which ignores bad values, this reports them.
    pub fn set_scale(&mut self, scale: f64) -> CanvasResult<()> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CanvasError::InvalidScale(scale));
        }
        self.view.set_scale(scale);
        debug!(requested = scale, applied = self.view.scale(), "view scale changed");
        Ok(())
    }

    /// The interactive item under a device-space point.
    pub fn item_under_pointer(&self, device: Point) -> Option<ItemId> {
        self.controller.item_under_pointer(&self.scene, &self.view, device)
    }

    /// See [`InteractionController::on_pointer_enter`].
    pub fn on_pointer_enter(&mut self, device: Point) -> Effects {
        self.controller.on_pointer_enter(&mut self.scene, &self.view, device)
    }

    /// See [`InteractionController::on_pointer_leave`].
    pub fn on_pointer_leave(&mut self, device: Point) -> Effects {
        self.controller.on_pointer_leave(&mut self.scene, &self.view, device)
    }

    /// See [`InteractionController::on_pointer_motion`].
    pub fn on_pointer_motion(&mut self, device: Point) -> Effects {
        self.controller.on_pointer_motion(&mut self.scene, &self.view, device)
    }

    /// See [`InteractionController::on_pointer_exit_surface`].
    pub fn on_pointer_exit_surface(&mut self) -> Effects {
        self.controller.on_pointer_exit_surface(&mut self.scene)
    }

    /// See [`InteractionController::enter_item`].
    pub fn enter_item(&mut self, item: ItemId) -> Effects {
        self.controller.enter_item(&mut self.scene, item)
    }

    /// See [`InteractionController::leave_item`].
    pub fn leave_item(&mut self, item: ItemId) -> Effects {
        self.controller.leave_item(&mut self.scene, item)
    }

    /// See [`InteractionController::on_primary_down`].
    pub fn on_primary_down(&mut self, device: Point) -> Option<ItemId> {
        self.controller.on_primary_down(&self.scene, &self.view, device)
    }

    /// See [`InteractionController::on_primary_move`].
    pub fn on_primary_move(&mut self, device: Point) -> Effects {
        self.controller.on_primary_move(&mut self.scene, &self.view, device)
    }

    /// See [`InteractionController::on_primary_up`].
    pub fn on_primary_up(&mut self) -> Option<ItemId> {
        self.controller.on_primary_up()
    }

    /// Drains the scene regions touched since the last call.
    pub fn take_damage(&mut self) -> Damage {
        self.scene.take_damage()
    }
}
