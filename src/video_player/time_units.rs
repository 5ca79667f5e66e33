// SPDX-License-Identifier: MPL-2.0
//! Time unit conversion utilities for video playback.
//!
//! Provides:
//! - Progress percentage from a position/duration pair
//! - Position from a progress percentage
//! - `M:SS` formatting for the elapsed/duration readout
//! - Seconds to FFmpeg `AV_TIME_BASE` (microsecond) timestamps for seeking
//!
//! Every function here tolerates unknown durations (zero or NaN) and
//! degrades to zero or `None` instead of propagating NaN.

use crate::domain::video::ProgressPercent;

/// Microseconds per second as f64 for calculations.
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Returns true if `duration` can be used as a divisor for progress math.
#[inline]
#[must_use]
pub fn is_known_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}

/// Computes the playback progress for `current` seconds of `duration`.
///
/// # Examples
///
/// ```
/// use iced_showreel::video_player::time_units::progress_percent;
///
/// assert_eq!(progress_percent(5.0, 20.0).value(), 25.0);
/// assert_eq!(progress_percent(5.0, 0.0).value(), 0.0);
/// assert_eq!(progress_percent(5.0, f64::NAN).value(), 0.0);
/// ```
#[must_use]
pub fn progress_percent(current: f64, duration: f64) -> ProgressPercent {
    if !is_known_duration(duration) {
        return ProgressPercent::new(ProgressPercent::MIN);
    }
    ProgressPercent::new(current / duration * 100.0)
}

/// Maps a progress percentage back to a position in seconds.
///
/// Returns `None` while the duration is unknown.
///
/// # Examples
///
/// ```
/// use iced_showreel::video_player::time_units::position_for_percent;
///
/// assert_eq!(position_for_percent(50.0, 120.0), Some(60.0));
/// assert_eq!(position_for_percent(50.0, f64::NAN), None);
/// ```
#[must_use]
pub fn position_for_percent(percent: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() {
        return None;
    }
    Some(percent / 100.0 * duration)
}

/// Formats a number of seconds as `M:SS`.
///
/// Minutes are not padded and may exceed 59; fractional seconds are dropped.
/// Negative and non-finite inputs format as `0:00`.
///
/// # Examples
///
/// ```
/// use iced_showreel::video_player::time_units::format_elapsed;
///
/// assert_eq!(format_elapsed(75.9), "1:15");
/// assert_eq!(format_elapsed(5.2), "0:05");
/// ```
#[must_use]
pub fn format_elapsed(total_seconds: f64) -> String {
    let whole = if total_seconds.is_finite() && total_seconds > 0.0 {
        total_seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Converts seconds to an FFmpeg `AV_TIME_BASE` timestamp.
///
/// # Examples
///
/// ```
/// use iced_showreel::video_player::time_units::secs_to_timestamp;
///
/// assert_eq!(secs_to_timestamp(1.0), 1_000_000);
/// assert_eq!(secs_to_timestamp(0.5), 500_000);
/// ```
#[inline]
#[must_use]
pub fn secs_to_timestamp(secs: f64) -> i64 {
    (secs * MICROS_PER_SECOND) as i64
}

/// Converts an FFmpeg `AV_TIME_BASE` timestamp to seconds.
#[inline]
#[must_use]
pub fn timestamp_to_secs(timestamp: i64) -> f64 {
    timestamp as f64 / MICROS_PER_SECOND
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn progress_is_ratio_times_hundred() {
        assert_abs_diff_eq!(progress_percent(30.0, 120.0).value(), 25.0);
        assert_abs_diff_eq!(progress_percent(120.0, 120.0).value(), 100.0);
        assert_abs_diff_eq!(progress_percent(0.0, 120.0).value(), 0.0);
    }

    #[test]
    fn progress_clamps_overshoot() {
        // Decoders can report a last frame slightly past the container duration
        assert_abs_diff_eq!(progress_percent(121.0, 120.0).value(), 100.0);
        assert_abs_diff_eq!(progress_percent(-1.0, 120.0).value(), 0.0);
    }

    #[test]
    fn progress_is_zero_for_unknown_duration() {
        assert_abs_diff_eq!(progress_percent(10.0, 0.0).value(), 0.0);
        assert_abs_diff_eq!(progress_percent(0.0, 0.0).value(), 0.0);
        assert_abs_diff_eq!(progress_percent(10.0, f64::NAN).value(), 0.0);
        assert_abs_diff_eq!(progress_percent(f64::NAN, 10.0).value(), 0.0);
    }

    #[test]
    fn position_for_percent_scales_duration() {
        assert_eq!(position_for_percent(0.0, 90.0), Some(0.0));
        assert_eq!(position_for_percent(100.0, 90.0), Some(90.0));
        let mid = position_for_percent(33.3, 90.0).unwrap();
        assert_abs_diff_eq!(mid, 29.97, epsilon = 1e-9);
    }

    #[test]
    fn position_for_percent_rejects_non_finite_duration() {
        assert_eq!(position_for_percent(50.0, f64::NAN), None);
        assert_eq!(position_for_percent(50.0, f64::INFINITY), None);
    }

    #[test]
    fn format_elapsed_truncates_fractions() {
        assert_eq!(format_elapsed(75.9), "1:15");
        assert_eq!(format_elapsed(5.2), "0:05");
        assert_eq!(format_elapsed(59.999), "0:59");
    }

    #[test]
    fn format_elapsed_boundaries() {
        assert_eq!(format_elapsed(0.0), "0:00");
        assert_eq!(format_elapsed(60.0), "1:00");
        assert_eq!(format_elapsed(600.0), "10:00");
        assert_eq!(format_elapsed(3725.0), "62:05");
    }

    #[test]
    fn format_elapsed_degenerate_inputs() {
        assert_eq!(format_elapsed(-4.0), "0:00");
        assert_eq!(format_elapsed(f64::NAN), "0:00");
        assert_eq!(format_elapsed(f64::INFINITY), "0:00");
    }

    #[test]
    fn known_duration_check() {
        assert!(is_known_duration(1.0));
        assert!(!is_known_duration(0.0));
        assert!(!is_known_duration(f64::NAN));
        assert!(!is_known_duration(f64::INFINITY));
    }

    #[test]
    fn timestamp_conversion() {
        assert_eq!(secs_to_timestamp(2.5), 2_500_000);
        assert_abs_diff_eq!(timestamp_to_secs(1_234_567), 1.234567);
    }
}
