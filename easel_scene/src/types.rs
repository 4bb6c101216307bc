// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: item identifiers, flags, kinds, style attributes and tags.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// Identifier for an item in the scene.
///
/// This is a small, copyable handle that stays stable for the life of the item
/// but becomes invalid when the item is removed.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ItemId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ItemId`.
///
/// Stale `ItemId`s never alias a different live item because the generation must match.
/// Use [`Scene::is_alive`](crate::Scene::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemId(pub(crate) u32, pub(crate) u32);

impl ItemId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Item flags controlling visibility and picking.
    ///
    /// The three classic canvas item states map onto these flags:
    /// normal is `VISIBLE | PICKABLE`, disabled is `VISIBLE`, hidden is empty.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item is drawn.
        const VISIBLE  = 0b0000_0001;
        /// Item participates in hit testing.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// The kind of a scene item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    /// Straight polyline.
    Line,
    /// Smoothed path.
    Curve,
    /// Closed polygon.
    Polygon,
    /// Axis-aligned rectangle.
    Rectangle,
    /// Ellipse inscribed in a rectangle.
    Oval,
    /// Pie-slice arc of an ellipse.
    Arc,
    /// Text run; geometry is its laid-out extent.
    Text,
    /// Bitmap image; geometry is its extent.
    Bitmap,
    /// Embedded control hosted in the scene; geometry is its extent.
    Window,
}

impl ItemKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Line,
        Self::Curve,
        Self::Polygon,
        Self::Rectangle,
        Self::Oval,
        Self::Arc,
        Self::Text,
        Self::Bitmap,
        Self::Window,
    ];
}

/// A named style attribute of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StyleAttr {
    /// Interior (or line) color.
    Fill,
    /// Outline color of closed shapes.
    Outline,
    /// Background color of bitmaps.
    Background,
    /// Foreground color of bitmaps.
    Foreground,
}

impl StyleAttr {
    /// The attribute's conventional name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Outline => "outline",
            Self::Background => "background",
            Self::Foreground => "foreground",
        }
    }
}

impl fmt::Display for StyleAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color value as understood by the rendering surface (for example `"red"` or `"#4682b4"`).
///
/// The scene does not interpret colors. An empty color is treated as unset by
/// every read path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(String);

impl Color {
    /// Creates a color from its textual form.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty color.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A behavior label attached to items.
///
/// Tags opt items into behavior categories. [`Tag::INTERACTIVE`] is the label
/// that pointer interaction (hover highlight and drag) looks for by default.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tag(Cow<'static, str>);

impl Tag {
    /// The default label for items that react to hover and drag.
    pub const INTERACTIVE: Self = Self(Cow::Borrowed("interactive"));

    /// Creates a tag.
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self(label.into())
    }

    /// Returns the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Tag {
    fn from(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_visible_and_pickable() {
        let flags = ItemFlags::default();
        assert!(flags.contains(ItemFlags::VISIBLE));
        assert!(flags.contains(ItemFlags::PICKABLE));
    }

    #[test]
    fn tags_compare_by_label() {
        assert_eq!(Tag::new("interactive"), Tag::INTERACTIVE);
        assert_ne!(Tag::from("item"), Tag::INTERACTIVE);
    }

    #[test]
    fn empty_color_reports_empty() {
        assert!(Color::default().is_empty());
        assert!(!Color::from("red").is_empty());
    }
}
