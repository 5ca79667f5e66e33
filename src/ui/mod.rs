// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern: components own
//! their state, return `(Effect, Task)` from `update`, and leave window-level
//! side effects to the application.
//!
//! - [`gallery`] - Scrollable column of media cards
//! - [`video_widget`] - Embedded video with surface, overlay and pointer routing
//! - [`video_controls`] - Auto-hiding control overlay
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Inline SVG icons

pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod styles;
pub mod video_controls;
pub mod video_widget;
