// SPDX-License-Identifier: MPL-2.0
//! Video widget domain types.
//!
//! This module contains the per-widget playback state and the value objects
//! it is built from, independent of any presentation or infrastructure concerns.

pub mod newtypes;
pub mod playback;

pub use newtypes::{HideDelay, ProgressPercent, Volume};
pub use playback::{PlaybackState, TimerId};
