// SPDX-License-Identifier: MPL-2.0
//! Video widget newtypes.
//!
//! This module provides type-safe wrappers for the values a widget stores,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_HIDE_DELAY_SECS, DEFAULT_VOLUME, MAX_HIDE_DELAY_SECS, MAX_VOLUME, MIN_HIDE_DELAY_SECS,
    MIN_VOLUME,
};
use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use iced_showreel::domain::video::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// NaN collapses to silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(MIN_VOLUME);
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the level is exactly zero.
    ///
    /// A slider dragged to its left edge reports 0.0 exactly, which is the
    /// only level that counts as muting.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 == MIN_VOLUME
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

// =============================================================================
// ProgressPercent
// =============================================================================

/// Playback progress as a percentage of the total duration (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressPercent(f64);

impl ProgressPercent {
    /// Lower bound.
    pub const MIN: f64 = 0.0;
    /// Upper bound.
    pub const MAX: f64 = 100.0;

    /// Creates a progress value, clamping to [0, 100].
    ///
    /// Non-finite input resolves to 0.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        if !percent.is_finite() {
            return Self(Self::MIN);
        }
        Self(percent.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the percentage as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

// =============================================================================
// HideDelay
// =============================================================================

/// Idle time before the control overlay hides, in whole seconds (1–30).
///
/// # Example
///
/// ```
/// use iced_showreel::domain::video::HideDelay;
///
/// let delay = HideDelay::new(5);
/// assert_eq!(delay.value(), 5);
/// assert_eq!(HideDelay::new(100).value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u32);

impl HideDelay {
    /// Creates a new hide delay, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_HIDE_DELAY_SECS, MAX_HIDE_DELAY_SECS))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(DEFAULT_HIDE_DELAY_SECS)
    }
}
