// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for video playback events.
//!
//! This module provides an Iced subscription that connects the async decoder
//! to the UI event loop, delivering frames and throttled time updates.

use super::{AsyncDecoder, DecoderCommand, DecoderEvent};
use crate::config::TIME_UPDATE_INTERVAL_MS;
use crate::error::MediaError;
use iced::futures::SinkExt;
use iced::stream;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Identifies one playback session of one showreel card.
///
/// Each session gets a unique `session_id` so the subscription is recreated
/// when a card restarts playback of its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSession {
    /// Position of the owning card; echoed back with every message.
    pub card: usize,
    pub session_id: u64,
    pub path: PathBuf,
    pub loop_enabled: bool,
}

impl Hash for PlaybackSession {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.card.hash(state);
        self.session_id.hash(state);
    }
}

/// Handle for sending commands to the decoder from UI.
#[derive(Clone)]
pub struct DecoderCommandSender(mpsc::UnboundedSender<DecoderCommand>);

impl DecoderCommandSender {
    /// Sends a command to the video decoder.
    pub fn send(&self, command: DecoderCommand) -> Result<(), MediaError> {
        self.0
            .send(command)
            .map_err(|_| MediaError::DecoderUnavailable)
    }
}

impl From<mpsc::UnboundedSender<DecoderCommand>> for DecoderCommandSender {
    fn from(sender: mpsc::UnboundedSender<DecoderCommand>) -> Self {
        Self(sender)
    }
}

impl std::fmt::Debug for DecoderCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderCommandSender")
            .field("closed", &self.0.is_closed())
            .finish()
    }
}

/// Messages emitted by the video playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Subscription started, provides command sender for pause/play/seek.
    Started(DecoderCommandSender),

    /// Container metadata is available.
    MetadataLoaded { duration_secs: f64 },

    /// A new frame is ready for display.
    FrameReady {
        /// RGBA pixel data.
        rgba_data: Arc<Vec<u8>>,
        width: u32,
        height: u32,
        /// Presentation timestamp in seconds.
        pts_secs: f64,
    },

    /// Playback position advanced; emitted at most every
    /// [`TIME_UPDATE_INTERVAL_MS`] while frames flow.
    TimeUpdate { position_secs: f64 },

    /// Playback reached the end and stopped.
    EndOfStream,

    /// An error occurred.
    Error(String),
}

/// Rate limiter for [`PlaybackMessage::TimeUpdate`].
#[derive(Debug)]
struct TimeUpdateThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl TimeUpdateThrottle {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Returns true if an update is due at `now`, and records it.
    fn is_due(&mut self, now: Instant) -> bool {
        let due = self
            .last
            .is_none_or(|last| now.duration_since(last) >= self.interval);
        if due {
            self.last = Some(now);
        }
        due
    }

    /// Makes the next check due immediately.
    fn force_next(&mut self) {
        self.last = None;
    }
}

/// Creates a video playback subscription.
///
/// The subscription sends a `Started` message with a `DecoderCommandSender`
/// before any other message. The decoder waits for a `Play` command, so the
/// UI decides whether playback begins right away.
pub fn video_playback(session: PlaybackSession) -> iced::Subscription<(usize, PlaybackMessage)> {
    iced::Subscription::run_with(session, playback_stream)
}

fn playback_stream(
    session: &PlaybackSession,
) -> impl iced::futures::Stream<Item = (usize, PlaybackMessage)> {
    let session = session.clone();

    stream::channel(100, move |mut output| async move {
        let card = session.card;

        let mut decoder = match AsyncDecoder::new(&session.path, session.loop_enabled) {
            Ok(decoder) => decoder,
            Err(e) => {
                warn!(path = %session.path.display(), error = %e, "cannot start playback");
                let _ = output.send((card, PlaybackMessage::Error(e.to_string()))).await;
                std::future::pending::<()>().await;
                return;
            }
        };
        debug!(card, path = %session.path.display(), "playback subscription started");

        let sender = DecoderCommandSender::from(decoder.command_sender());
        let _ = output.send((card, PlaybackMessage::Started(sender))).await;

        let mut throttle = TimeUpdateThrottle::new(Duration::from_millis(TIME_UPDATE_INTERVAL_MS));

        while let Some(event) = decoder.recv_event().await {
            let messages = match event {
                DecoderEvent::MetadataLoaded { duration_secs } => {
                    vec![PlaybackMessage::MetadataLoaded { duration_secs }]
                }
                DecoderEvent::FrameReady(frame) => {
                    let position_secs = frame.pts_secs;
                    let mut messages = vec![PlaybackMessage::FrameReady {
                        rgba_data: frame.rgba_data,
                        width: frame.width,
                        height: frame.height,
                        pts_secs: frame.pts_secs,
                    }];
                    if throttle.is_due(Instant::now()) {
                        messages.push(PlaybackMessage::TimeUpdate { position_secs });
                    }
                    messages
                }
                DecoderEvent::Looped => {
                    throttle.force_next();
                    vec![PlaybackMessage::TimeUpdate { position_secs: 0.0 }]
                }
                DecoderEvent::EndOfStream => vec![PlaybackMessage::EndOfStream],
                DecoderEvent::Error(msg) => vec![PlaybackMessage::Error(msg)],
            };

            for message in messages {
                if output.send((card, message)).await.is_err() {
                    return;
                }
            }
        }

        debug!(card, "decoder closed, playback subscription idle");
        // Keep subscription alive but idle
        std::future::pending::<()>().await;
    })
}
