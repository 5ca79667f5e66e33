// SPDX-License-Identifier: MPL-2.0
//! Widget state machine for an embedded video.
//!
//! [`VideoPlayer`] owns one [`PlaybackState`] and drives a [`MediaElement`]
//! and a [`Scheduler`]. It is the only place that mutates the state:
//!
//! - Transport: play/pause toggling, seeking by percentage
//! - Audio: volume level and the independent muted flag
//! - Overlay visibility: the auto-hide countdown and pointer tracking
//!
//! At most one hide timer is pending at any time. Arming a new one cancels
//! the previous, and an elapsed notification is honoured only if its id
//! matches the pending one.

use crate::application::port::{MediaElement, Scheduler, TimerId};
use crate::config::WidgetSettings;
use crate::domain::video::{HideDelay, PlaybackState, Volume};
use crate::error::MediaError;
use crate::video_player::time_units;
use tracing::{debug, info};

/// Messages that drive a video widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The element's playback position advanced.
    TimeUpdate,
    /// Seek to a percentage of the duration (0–100).
    Seek(f64),
    TogglePlay,
    ToggleMute,
    /// New volume level from the slider (0.0–1.0).
    SetVolume(f32),
    RequestFullscreen,
    PointerEntered,
    PointerLeft,
    /// A previously armed hide timer fired.
    HideTimerElapsed(TimerId),
}

/// Side effects the host may need to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The overlay was shown (`true`) or hidden (`false`).
    ControlsVisibilityChanged(bool),
    /// The element refused to go fullscreen.
    FullscreenFailed(MediaError),
}

/// One embedded video widget.
pub struct VideoPlayer<M: MediaElement, S: Scheduler> {
    element: M,
    scheduler: S,
    state: PlaybackState,
    hide_delay: HideDelay,
    mounted: bool,
}

impl<M: MediaElement, S: Scheduler> VideoPlayer<M, S> {
    /// Creates a widget in its initial state. Nothing is sent to the element
    /// and no timer is armed until [`mount`](Self::mount).
    pub fn new(element: M, scheduler: S, settings: WidgetSettings) -> Self {
        Self {
            element,
            scheduler,
            state: PlaybackState::initial(
                settings.autoplay,
                settings.start_muted,
                settings.initial_volume,
            ),
            hide_delay: settings.hide_delay,
            mounted: false,
        }
    }

    /// Applies the initial state to the element, shows the controls and
    /// starts the hide countdown.
    pub fn mount(&mut self) {
        self.element.set_volume(self.state.volume.value());
        self.element.set_muted(self.state.is_muted);
        if self.state.is_playing {
            self.element.play();
        } else {
            self.element.pause();
        }
        self.state.controls_visible = true;
        self.arm_hide_timer();
        self.mounted = true;
        info!(
            playing = self.state.is_playing,
            muted = self.state.is_muted,
            "video widget mounted"
        );
    }

    /// Cancels the pending hide timer. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.cancel_hide_timer();
        if self.mounted {
            self.mounted = false;
            info!("video widget unmounted");
        }
    }

    /// Current widget state.
    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn element(&self) -> &M {
        &self.element
    }

    /// Mutable access for the host to feed decoder output into the element.
    pub fn element_mut(&mut self) -> &mut M {
        &mut self.element
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Handles a message, returning any effect the host should know about.
    pub fn handle(&mut self, message: Message) -> Effect {
        let was_visible = self.state.controls_visible;

        match message {
            Message::TimeUpdate => self.on_time_update(),
            Message::Seek(percent) => self.seek(percent),
            Message::TogglePlay => self.toggle_play(),
            Message::ToggleMute => self.toggle_mute(),
            Message::SetVolume(volume) => self.set_volume(volume),
            Message::RequestFullscreen => {
                if let Err(err) = self.request_fullscreen() {
                    return Effect::FullscreenFailed(err);
                }
            }
            Message::PointerEntered => self.pointer_enter(),
            Message::PointerLeft => self.pointer_leave(),
            Message::HideTimerElapsed(id) => self.hide_timer_elapsed(id),
        }

        if self.state.controls_visible == was_visible {
            Effect::None
        } else {
            Effect::ControlsVisibilityChanged(self.state.controls_visible)
        }
    }

    /// Recomputes progress from the element's position and duration.
    pub fn on_time_update(&mut self) {
        self.state.progress_percent =
            time_units::progress_percent(self.element.current_time(), self.element.duration());
    }

    /// Playback stopped at the end of the media without looping.
    ///
    /// The widget becomes paused and shows its controls, so the next
    /// [`toggle_play`](Self::toggle_play) starts playback again.
    pub fn on_ended(&mut self) {
        if !self.state.is_playing {
            return;
        }
        self.state.is_playing = false;
        self.reveal_controls();
        debug!("playback ended");
    }

    /// Moves playback to `target_percent` of the duration.
    ///
    /// Does nothing while the duration is unknown.
    pub fn seek(&mut self, target_percent: f64) {
        let Some(position) =
            time_units::position_for_percent(target_percent, self.element.duration())
        else {
            debug!(target_percent, "seek ignored, duration unknown");
            return;
        };
        self.element.set_current_time(position);
        self.reveal_controls();
    }

    /// Pauses if playing, resumes otherwise.
    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.element.pause();
            self.state.is_playing = false;
        } else {
            self.element.play();
            self.state.is_playing = true;
        }
        self.reveal_controls();
    }

    /// Flips the muted flag. The volume level is left untouched.
    pub fn toggle_mute(&mut self) {
        self.state.is_muted = !self.state.is_muted;
        self.element.set_muted(self.state.is_muted);
        self.reveal_controls();
    }

    /// Sets the volume level. Zero mutes; anything above zero unmutes.
    pub fn set_volume(&mut self, volume: f32) {
        let volume = Volume::new(volume);
        self.state.volume = volume;
        self.state.is_muted = volume.is_silent();
        self.element.set_volume(volume.value());
        self.element.set_muted(self.state.is_muted);
        self.reveal_controls();
    }

    /// Forwards a fullscreen request to the element.
    ///
    /// # Errors
    ///
    /// Returns whatever the element reports, unchanged.
    pub fn request_fullscreen(&mut self) -> Result<(), MediaError> {
        self.element.request_fullscreen()
    }

    /// Shows the controls and restarts the hide countdown.
    pub fn pointer_enter(&mut self) {
        self.reveal_controls();
    }

    /// Hides the controls immediately if playing; otherwise keeps them.
    pub fn pointer_leave(&mut self) {
        if self.state.is_playing {
            self.cancel_hide_timer();
            self.state.controls_visible = false;
        }
    }

    /// Hides the controls if `id` is the pending timer and playback is running.
    pub fn hide_timer_elapsed(&mut self, id: TimerId) {
        if self.state.hide_timer != Some(id) {
            debug!(timer = id.raw(), "stale hide timer ignored");
            return;
        }
        self.state.hide_timer = None;
        if self.state.is_playing {
            self.state.controls_visible = false;
        }
    }

    fn reveal_controls(&mut self) {
        self.state.controls_visible = true;
        self.arm_hide_timer();
    }

    fn arm_hide_timer(&mut self) {
        self.cancel_hide_timer();
        let id = self.scheduler.schedule(self.hide_delay.as_duration());
        debug!(timer = id.raw(), delay_secs = self.hide_delay.value(), "hide timer armed");
        self.state.hide_timer = Some(id);
    }

    fn cancel_hide_timer(&mut self) {
        if let Some(id) = self.state.hide_timer.take() {
            debug!(timer = id.raw(), "hide timer cancelled");
            self.scheduler.cancel(id);
        }
    }
}

impl<M: MediaElement, S: Scheduler> Drop for VideoPlayer<M, S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<M: MediaElement, S: Scheduler> std::fmt::Debug for VideoPlayer<M, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoPlayer")
            .field("state", &self.state)
            .field("hide_delay", &self.hide_delay)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
