// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Event State: small state machines for pointer interaction on a canvas.
//!
//! Each module handles one interaction pattern that needs state across events:
//!
//! - [`hover`]: turn successive hit results into enter/leave transitions
//! - [`highlight`]: a single slot remembering one overwritten attribute
//! - [`drag`]: track the dragged target and per-motion deltas
//!
//! The managers are generic over the caller's id, attribute and value types
//! and never touch a scene. Callers feed them hit-test results and apply the
//! transitions they return.
//!
//! ## Hover + highlight
//!
//! ```rust
//! use easel_event_state::highlight::{Highlight, HighlightState, LeaveOutcome, StaleLeavePolicy};
//! use easel_event_state::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//! let mut slot: HighlightState<u32, &str, Option<&str>> = HighlightState::new();
//!
//! for event in hover.update(Some(7)) {
//!     if let HoverEvent::Enter(id) = event {
//!         slot.enter(Highlight::new(id, "fill", Some("red")));
//!     }
//! }
//! assert!(slot.is_highlighting(&7));
//!
//! for event in hover.update(None) {
//!     if let HoverEvent::Leave(id) = event {
//!         assert!(matches!(slot.leave(&id, StaleLeavePolicy::Discard), LeaveOutcome::Restore(_)));
//!     }
//! }
//! assert!(slot.is_idle());
//! ```
//!
//! ## Drag
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::{Point, Vec2};
//! use easel_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(1_u32, Point::new(10.0, 10.0));
//! assert_eq!(drag.update(Point::new(12.0, 11.0)), Some((1, Vec2::new(2.0, 1.0))));
//! assert_eq!(drag.update(Point::new(12.0, 11.0)), Some((1, Vec2::ZERO)));
//! drag.end();
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//! - `serde`: Serialize [`highlight::StaleLeavePolicy`]
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

#[cfg(feature = "drag")]
pub mod drag;
pub mod highlight;
pub mod hover;
