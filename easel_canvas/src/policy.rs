// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which style attribute a highlight overwrites, per item kind.
//!
//! The policy is a lookup table from [`ItemKind`] to an ordered list of
//! [`AttrProbe`]s. The first probe that applies wins:
//! an unconditional probe always applies, a conditional one applies only when
//! the item has a non-empty value for its attribute. A kind with no probes (or
//! no entry) is never highlighted. Embedded windows are never highlighted,
//! whatever their rule says.
//!
//! The default table:
//!
//! | Kind | Probes |
//! |---|---|
//! | bitmap | `background` |
//! | rectangle, oval, arc | `fill` if set, then `outline` |
//! | line, curve, polygon, text | `fill` |
//! | window | none |

use easel_scene::{Item, ItemKind, StyleAttr};
use serde::{Deserialize, Serialize};

/// One candidate attribute in a [`HighlightRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrProbe {
    /// The attribute to overwrite.
    pub attr: StyleAttr,
    /// Only take this attribute when the item has a value for it.
    #[serde(default)]
    pub require_set: bool,
}

impl AttrProbe {
    /// A probe that always applies.
    pub const fn always(attr: StyleAttr) -> Self {
        Self {
            attr,
            require_set: false,
        }
    }

    /// A probe that applies only when `attr` is set on the item.
    pub const fn if_set(attr: StyleAttr) -> Self {
        Self {
            attr,
            require_set: true,
        }
    }
}

/// Probes for one item kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRule {
    /// The kind this rule applies to.
    pub kind: ItemKind,
    /// Candidates, in priority order.
    #[serde(default)]
    pub probes: Vec<AttrProbe>,
}

/// Lookup table from item kind to highlight attribute candidates.
///
/// Deserialization goes through [`HighlightPolicy::from_rules`], so a
/// document listing a kind twice keeps the later rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PolicyDocument")]
pub struct HighlightPolicy {
    rules: Vec<HighlightRule>,
}

#[derive(Deserialize)]
struct PolicyDocument {
    rules: Vec<HighlightRule>,
}

impl From<PolicyDocument> for HighlightPolicy {
    fn from(doc: PolicyDocument) -> Self {
        Self::from_rules(doc.rules)
    }
}

impl Default for HighlightPolicy {
    fn default() -> Self {
        let fill_or_outline = || {
            vec![
                AttrProbe::if_set(StyleAttr::Fill),
                AttrProbe::always(StyleAttr::Outline),
            ]
        };
        let fill = || vec![AttrProbe::always(StyleAttr::Fill)];
        Self::from_rules([
            HighlightRule {
                kind: ItemKind::Bitmap,
                probes: vec![AttrProbe::always(StyleAttr::Background)],
            },
            HighlightRule {
                kind: ItemKind::Rectangle,
                probes: fill_or_outline(),
            },
            HighlightRule {
                kind: ItemKind::Oval,
                probes: fill_or_outline(),
            },
            HighlightRule {
                kind: ItemKind::Arc,
                probes: fill_or_outline(),
            },
            HighlightRule {
                kind: ItemKind::Line,
                probes: fill(),
            },
            HighlightRule {
                kind: ItemKind::Curve,
                probes: fill(),
            },
            HighlightRule {
                kind: ItemKind::Polygon,
                probes: fill(),
            },
            HighlightRule {
                kind: ItemKind::Text,
                probes: fill(),
            },
            HighlightRule {
                kind: ItemKind::Window,
                probes: Vec::new(),
            },
        ])
    }
}

impl HighlightPolicy {
    /// Builds a policy from rules. A later rule for the same kind replaces an earlier one.
    pub fn from_rules(rules: impl IntoIterator<Item = HighlightRule>) -> Self {
        let mut policy = Self { rules: Vec::new() };
        for rule in rules {
            policy.set_rule(rule);
        }
        policy
    }

    /// Inserts or replaces the rule for `rule.kind`.
    pub fn set_rule(&mut self, rule: HighlightRule) {
        match self.rules.iter_mut().find(|r| r.kind == rule.kind) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// The rules, in insertion order.
    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    /// Probes for `kind`; empty when the kind is never highlighted.
    pub fn probes(&self, kind: ItemKind) -> &[AttrProbe] {
        self.rules
            .iter()
            .find(|r| r.kind == kind)
            .map(|r| r.probes.as_slice())
            .unwrap_or(&[])
    }

    /// Picks the attribute to overwrite on `item`, or `None` to skip highlighting it.
    ///
    /// Unset and empty values both count as "not set" for conditional probes.
    /// Windows always give `None`.
    pub fn target_attr(&self, item: &Item) -> Option<StyleAttr> {
        if item.kind() == ItemKind::Window {
            return None;
        }
        self.probes(item.kind())
            .iter()
            .find(|probe| !probe.require_set || item.style(probe.attr).is_some())
            .map(|probe| probe.attr)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::*;

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn bitmap_uses_background() {
        let policy = HighlightPolicy::default();
        let item = Item::bitmap(rect()).with_style(StyleAttr::Fill, "red");
        assert_eq!(policy.target_attr(&item), Some(StyleAttr::Background));
    }

    #[test]
    fn unfilled_closed_shapes_fall_back_to_outline() {
        let policy = HighlightPolicy::default();
        for item in [
            Item::rectangle(rect()),
            Item::oval(rect()),
            Item::arc(rect(), 0.0, 90.0),
            Item::rectangle(rect()).with_style(StyleAttr::Fill, ""),
        ] {
            assert_eq!(policy.target_attr(&item), Some(StyleAttr::Outline), "{:?}", item.kind());
        }
    }

    #[test]
    fn filled_closed_shapes_use_fill() {
        let policy = HighlightPolicy::default();
        let item = Item::oval(rect()).with_style(StyleAttr::Fill, "blue");
        assert_eq!(policy.target_attr(&item), Some(StyleAttr::Fill));
    }

    #[test]
    fn unfilled_polygon_and_line_still_use_fill() {
        let policy = HighlightPolicy::default();
        let polygon = Item::polygon([Point::ZERO, Point::new(5.0, 0.0), Point::new(0.0, 5.0)]);
        let line = Item::line([Point::ZERO, Point::new(5.0, 0.0)]);
        assert_eq!(policy.target_attr(&polygon), Some(StyleAttr::Fill));
        assert_eq!(policy.target_attr(&line), Some(StyleAttr::Fill));
    }

    #[test]
    fn windows_are_never_highlighted() {
        let policy = HighlightPolicy::default();
        assert_eq!(policy.target_attr(&Item::window(rect())), None);
    }

    #[test]
    fn window_rule_with_probes_is_ignored() {
        let mut policy = HighlightPolicy::default();
        policy.set_rule(HighlightRule {
            kind: ItemKind::Window,
            probes: vec![AttrProbe::always(StyleAttr::Background)],
        });
        let window = Item::window(rect()).with_style(StyleAttr::Background, "gray");
        assert_eq!(policy.target_attr(&window), None);
    }

    #[test]
    fn every_kind_has_a_default_rule() {
        let policy = HighlightPolicy::default();
        for kind in ItemKind::ALL {
            assert!(policy.rules().iter().any(|r| r.kind == kind), "{kind:?}");
        }
    }

    #[test]
    fn set_rule_replaces_existing_kind() {
        let mut policy = HighlightPolicy::default();
        policy.set_rule(HighlightRule {
            kind: ItemKind::Text,
            probes: vec![AttrProbe::always(StyleAttr::Foreground)],
        });
        assert_eq!(policy.probes(ItemKind::Text), [AttrProbe::always(StyleAttr::Foreground)]);
        assert_eq!(policy.rules().len(), ItemKind::ALL.len());
    }
}
