// SPDX-License-Identifier: MPL-2.0
//! Decoder adapter implementing the [`MediaElement`] port trait.
//!
//! [`DecoderMediaElement`] mirrors what the playback subscription reports
//! (position, duration) and turns transport calls into decoder commands.
//!
//! # Design Notes
//!
//! - The decoder may start after the widget mounts; commands issued before
//!   then are recorded and replayed when the command sender arrives
//! - No audio device is opened; volume and mute live in the widget state
//! - [`detach`](DecoderMediaElement::detach) ends the decoder thread when the
//!   owning widget goes away
//! - Fullscreen is queued for the host, which owns the window
//!
//! [`MediaElement`]: crate::application::port::MediaElement

use crate::application::port::MediaElement;
use crate::error::MediaError;
use crate::video_player::{DecoderCommand, DecoderCommandSender};
use iced::window;
use tracing::debug;

/// Media element backed by an [`AsyncDecoder`](crate::video_player::AsyncDecoder).
#[derive(Debug)]
pub struct DecoderMediaElement {
    commands: Option<DecoderCommandSender>,
    position_secs: f64,
    duration_secs: f64,
    wants_playing: bool,
    window: Option<window::Id>,
    fullscreen_request: Option<window::Id>,
}

impl DecoderMediaElement {
    /// Creates an element with no decoder attached and an unknown duration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: None,
            position_secs: 0.0,
            duration_secs: f64::NAN,
            wants_playing: false,
            window: None,
            fullscreen_request: None,
        }
    }

    /// Connects the decoder and replays the transport state requested so far.
    pub fn attach(&mut self, commands: DecoderCommandSender) {
        self.commands = Some(commands);
        if self.position_secs > 0.0 {
            self.send(DecoderCommand::Seek {
                target_secs: self.position_secs,
            });
        }
        if self.wants_playing {
            self.send(DecoderCommand::Play);
        }
    }

    /// Stops the decoder and forgets it.
    pub fn detach(&mut self) {
        if self.commands.is_some() {
            debug!("stopping decoder");
        }
        self.send(DecoderCommand::Stop);
        self.commands = None;
    }

    /// Records the position of the last frame shown.
    pub fn record_position(&mut self, secs: f64) {
        self.position_secs = secs;
    }

    /// Records the duration read from container metadata.
    pub fn record_duration(&mut self, secs: f64) {
        self.duration_secs = secs;
    }

    /// Marks playback as stopped at end of stream.
    pub fn record_ended(&mut self) {
        self.wants_playing = false;
    }

    /// Sets the window fullscreen requests apply to.
    pub fn set_window(&mut self, window: Option<window::Id>) {
        self.window = window;
    }

    /// Takes the pending fullscreen request, if any.
    pub fn take_fullscreen_request(&mut self) -> Option<window::Id> {
        self.fullscreen_request.take()
    }

    fn send(&self, command: DecoderCommand) {
        if let Some(commands) = &self.commands {
            if let Err(err) = commands.send(command.clone()) {
                debug!(?command, error = %err, "decoder command dropped");
            }
        }
    }
}

impl Default for DecoderMediaElement {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaElement for DecoderMediaElement {
    fn current_time(&self) -> f64 {
        self.position_secs
    }

    fn duration(&self) -> f64 {
        self.duration_secs
    }

    fn set_current_time(&mut self, secs: f64) {
        self.position_secs = secs;
        self.send(DecoderCommand::Seek { target_secs: secs });
    }

    fn play(&mut self) {
        self.wants_playing = true;
        self.send(DecoderCommand::Play);
    }

    fn pause(&mut self) {
        self.wants_playing = false;
        self.send(DecoderCommand::Pause);
    }

    fn set_volume(&mut self, volume: f32) {
        debug!(volume, "no audio output, volume not applied");
    }

    fn set_muted(&mut self, muted: bool) {
        debug!(muted, "no audio output, mute not applied");
    }

    fn request_fullscreen(&mut self) -> Result<(), MediaError> {
        let window = self.window.ok_or(MediaError::FullscreenUnavailable)?;
        self.fullscreen_request = Some(window);
        Ok(())
    }
}
