// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Overlay**: Control overlay auto-hide delay
//! - **Volume**: Playback volume bounds and initial level
//! - **Playback**: Autoplay, initial mute and loop behavior
//! - **Timing**: Time-update cadence of the media element

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Idle time before the control overlay hides (in seconds).
pub const DEFAULT_HIDE_DELAY_SECS: u32 = 3;

/// Minimum overlay hide delay (in seconds).
pub const MIN_HIDE_DELAY_SECS: u32 = 1;

/// Maximum overlay hide delay (in seconds).
pub const MAX_HIDE_DELAY_SECS: u32 = 30;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Volume a freshly mounted widget starts with (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Granularity of the volume slider.
pub const VOLUME_SLIDER_STEP: f32 = 0.01;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Widgets start playing as soon as they are mounted.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Widgets start muted.
pub const DEFAULT_START_MUTED: bool = true;

/// Playback restarts from the beginning at end of stream.
pub const DEFAULT_LOOP_ENABLED: bool = true;

/// Granularity of the progress slider, in percent.
pub const PROGRESS_SLIDER_STEP: f64 = 0.1;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Minimum interval between two time-update notifications (in milliseconds).
pub const TIME_UPDATE_INTERVAL_MS: u64 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_HIDE_DELAY_SECS > 0);
    assert!(MAX_HIDE_DELAY_SECS >= MIN_HIDE_DELAY_SECS);
    assert!(DEFAULT_HIDE_DELAY_SECS >= MIN_HIDE_DELAY_SECS);
    assert!(DEFAULT_HIDE_DELAY_SECS <= MAX_HIDE_DELAY_SECS);

    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(VOLUME_SLIDER_STEP > 0.0);

    assert!(PROGRESS_SLIDER_STEP > 0.0);
    assert!(TIME_UPDATE_INTERVAL_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_delay_defaults_are_valid() {
        assert_eq!(DEFAULT_HIDE_DELAY_SECS, 3);
        assert!(DEFAULT_HIDE_DELAY_SECS >= MIN_HIDE_DELAY_SECS);
        assert!(DEFAULT_HIDE_DELAY_SECS <= MAX_HIDE_DELAY_SECS);
    }

    #[test]
    fn volume_defaults_are_valid() {
        assert_eq!(DEFAULT_VOLUME, 1.0);
        assert_eq!(MIN_VOLUME, 0.0);
        assert_eq!(MAX_VOLUME, 1.0);
    }

    #[test]
    fn playback_defaults_autoplay_muted_and_looping() {
        assert!(DEFAULT_AUTOPLAY);
        assert!(DEFAULT_START_MUTED);
        assert!(DEFAULT_LOOP_ENABLED);
    }
}
