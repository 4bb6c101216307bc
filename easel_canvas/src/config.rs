// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_event_state::highlight::StaleLeavePolicy;
use easel_scene::{Color, HitParams, ItemKind, Tag};
use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, CanvasResult};
use crate::policy::HighlightPolicy;

/// Default highlight color.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "SteelBlue2";

/// Interaction configuration for a canvas.
///
/// This type is serializable so host applications can keep interaction
/// settings next to the rest of their setup. Every field has a default, so a
/// partial document such as `{"highlight_color": "gold"}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Color written over the highlighted attribute.
    pub highlight_color: Color,
    /// Tag that opts items into hover and drag handling.
    pub interactive_tag: Tag,
    /// Extra hit distance in scene units.
    pub hit_tolerance: f64,
    /// What to do with a leave that reports a different item than the highlighted one.
    pub stale_leave: StaleLeavePolicy,
    /// Per-kind choice of the highlighted attribute.
    pub highlight_policy: HighlightPolicy,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            highlight_color: Color::from(DEFAULT_HIGHLIGHT_COLOR),
            interactive_tag: Tag::INTERACTIVE,
            hit_tolerance: HitParams::default().tolerance,
            stale_leave: StaleLeavePolicy::default(),
            highlight_policy: HighlightPolicy::default(),
        }
    }
}

impl CanvasConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the highlight color.
    #[must_use]
    pub fn with_highlight_color(mut self, color: impl Into<Color>) -> Self {
        self.highlight_color = color.into();
        self
    }

    /// Sets the interactive tag.
    #[must_use]
    pub fn with_interactive_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.interactive_tag = tag.into();
        self
    }

    /// Sets the hit tolerance.
    #[must_use]
    pub fn with_hit_tolerance(mut self, tolerance: f64) -> Self {
        self.hit_tolerance = tolerance;
        self
    }

    /// Sets the stale-leave policy.
    #[must_use]
    pub fn with_stale_leave(mut self, policy: StaleLeavePolicy) -> Self {
        self.stale_leave = policy;
        self
    }

    /// Replaces the highlight policy.
    #[must_use]
    pub fn with_highlight_policy(mut self, policy: HighlightPolicy) -> Self {
        self.highlight_policy = policy;
        self
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(input: &str) -> CanvasResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> CanvasResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the values that would otherwise make interaction misbehave silently.
    pub fn validate(&self) -> CanvasResult<()> {
        if self.highlight_color.is_empty() {
            return Err(CanvasError::EmptyHighlightColor);
        }
        if self.interactive_tag.as_str().is_empty() {
            return Err(CanvasError::EmptyInteractiveTag);
        }
        if !self.hit_tolerance.is_finite() || self.hit_tolerance < 0.0 {
            return Err(CanvasError::InvalidHitTolerance(self.hit_tolerance));
        }
        if !self.highlight_policy.probes(ItemKind::Window).is_empty() {
            return Err(CanvasError::WindowHighlightRule);
        }
        Ok(())
    }

    /// Hit parameters derived from this configuration.
    pub fn hit_params(&self) -> HitParams {
        HitParams {
            tolerance: self.hit_tolerance,
        }
    }
}
