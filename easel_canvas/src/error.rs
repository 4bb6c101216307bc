// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Result alias for fallible canvas setup.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors raised while configuring a canvas.
///
/// Pointer event handling never fails; these only come from configuration.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The configuration was not valid JSON or did not match the schema.
    #[error("invalid canvas config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// The highlight color was empty.
    #[error("highlight color must not be empty")]
    EmptyHighlightColor,

    /// The interactive tag was empty.
    #[error("interactive tag must not be empty")]
    EmptyInteractiveTag,

    /// The hit tolerance was negative or not finite.
    #[error("invalid hit tolerance: {0}")]
    InvalidHitTolerance(f64),

    /// A highlight rule gave embedded windows an attribute to overwrite.
    #[error("window items cannot be highlighted")]
    WindowHighlightRule,

    /// The view scale was not positive or not finite.
    #[error("invalid view scale: {0}")]
    InvalidScale(f64),
}
