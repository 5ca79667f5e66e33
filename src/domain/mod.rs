// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core widget state with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`video`]: Video widget types ([`PlaybackState`](video::PlaybackState),
//!   [`Volume`](video::Volume), [`ProgressPercent`](video::ProgressPercent),
//!   [`HideDelay`](video::HideDelay), [`TimerId`](video::TimerId))

pub mod video;
