// SPDX-License-Identifier: MPL-2.0
//! Per-widget playback state.

use super::newtypes::{ProgressPercent, Volume};

/// Opaque handle to a pending one-shot timer.
///
/// Issued by a scheduler when a timer is armed; the widget keeps at most one
/// at a time and passes it back to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Wraps a raw scheduler-issued identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Everything a single video widget tracks about its element.
///
/// `is_playing` reflects the last command issued, not the element's actual
/// state. `volume` is the last user-chosen level and is kept while muted so
/// that unmuting restores it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub progress_percent: ProgressPercent,
    pub is_playing: bool,
    pub volume: Volume,
    pub is_muted: bool,
    pub controls_visible: bool,
    pub hide_timer: Option<TimerId>,
}

impl PlaybackState {
    /// State of a freshly mounted widget before any timer is armed.
    #[must_use]
    pub fn initial(is_playing: bool, is_muted: bool, volume: Volume) -> Self {
        Self {
            progress_percent: ProgressPercent::default(),
            is_playing,
            volume,
            is_muted,
            controls_visible: true,
            hide_timer: None,
        }
    }

    /// Level the volume slider should display.
    #[must_use]
    pub fn displayed_volume(&self) -> f32 {
        if self.is_muted {
            0.0
        } else {
            self.volume.value()
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::initial(true, true, Volume::default())
    }
}
