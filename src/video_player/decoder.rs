// SPDX-License-Identifier: MPL-2.0
//! FFmpeg frame source for one showreel video.
//!
//! Each [`AsyncDecoder`] owns a blocking Tokio thread. The thread opens the
//! file, reports its duration, then idles until it receives
//! [`DecoderCommand::Play`]. While playing it paces RGBA frames against the
//! wall clock; at end of stream it either rewinds (looping) or stops.
//!
//! FFmpeg contexts are not `Send`, so everything FFmpeg-related stays inside
//! [`FrameSource`] on that one thread. The UI talks to it only through the
//! command and event channels.

use crate::error::{Error, MediaError, Result};
use crate::media::video::{duration_secs, init_ffmpeg};
use crate::video_player::time_units::secs_to_timestamp;
use ffmpeg_next::format::{context::Input, Pixel};
use ffmpeg_next::software::scaling;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// How long the thread sleeps between command checks while paused.
const IDLE_POLL: Duration = Duration::from_millis(10);

/// Frames in flight between the decoder thread and the subscription.
const EVENT_CAPACITY: usize = 2;

/// One RGBA frame, tightly packed (no row padding).
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    pub rgba_data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
    /// Presentation time in seconds from the start of the stream.
    pub pts_secs: f64,
}

/// Transport commands accepted by the decoder thread.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoderCommand {
    Play,
    Pause,
    /// Jump to `target_secs`, keeping the current play/pause state.
    Seek { target_secs: f64 },
    /// End the thread.
    Stop,
}

/// What the decoder thread reports back.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// Sent once after opening; NaN when the container has no duration.
    MetadataLoaded { duration_secs: f64 },
    FrameReady(DecodedFrame),
    /// End of stream reached with looping on; playback restarted at 0.
    Looped,
    /// End of stream reached with looping off; playback stopped.
    EndOfStream,
    Error(String),
}

/// Handle to a running decoder thread.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    // Bounded so a slow UI throttles decoding instead of piling up frames
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Starts a decoder thread for `video_path`.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file does not exist. Problems found while
    /// opening or decoding arrive later as [`DecoderEvent::Error`].
    pub fn new<P: AsRef<Path>>(video_path: P, loop_enabled: bool) -> Result<Self> {
        let path = video_path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Io(format!("Video file not found: {}", path.display())));
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(EVENT_CAPACITY);

        tokio::task::spawn_blocking(move || {
            if let Err(e) = run_decoder(&path, loop_enabled, command_rx, &event_tx) {
                warn!(path = %path.display(), error = %e, "decoder thread failed");
                let _ = event_tx.blocking_send(DecoderEvent::Error(e.to_string()));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// A sender the UI can keep after the decoder handle moves into a stream.
    #[must_use]
    pub fn command_sender(&self) -> mpsc::UnboundedSender<DecoderCommand> {
        self.command_tx.clone()
    }

    /// Next event, or `None` once the thread has exited.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }
}

/// Play/pause state of the decoder thread plus its wall-clock anchor.
#[derive(Debug, Default)]
struct Transport {
    playing: bool,
    /// Show one frame at the new position even though paused.
    preview_pending: bool,
    /// Wall time and pts of the first frame since the last (re)start.
    anchor: Option<(Instant, f64)>,
    /// Stopped at end of stream; the next `Play` starts over from 0.
    ended: bool,
}

impl Transport {
    /// Resumes playback. Returns true when the source must first be
    /// rewound because the last run reached the end of the stream.
    fn play(&mut self) -> bool {
        self.playing = true;
        self.anchor = None;
        std::mem::take(&mut self.ended)
    }

    fn pause(&mut self) {
        self.playing = false;
        self.anchor = None;
    }

    fn seeked(&mut self) {
        self.anchor = None;
        self.ended = false;
        self.preview_pending = !self.playing;
    }

    fn wants_frame(&self) -> bool {
        self.playing || self.preview_pending
    }

    fn frame_sent(&mut self) {
        self.preview_pending = false;
    }

    fn stopped(&mut self) {
        self.playing = false;
        self.preview_pending = false;
        self.anchor = None;
        self.ended = true;
    }

    /// How long to wait before presenting the frame at `pts_secs`.
    fn delay_for(&mut self, pts_secs: f64, now: Instant) -> Duration {
        if !self.playing {
            return Duration::ZERO;
        }
        let (start, first_pts) = *self.anchor.get_or_insert((now, pts_secs));
        let due = start + Duration::from_secs_f64((pts_secs - first_pts).max(0.0));
        due.saturating_duration_since(now)
    }
}

/// The FFmpeg side: demuxer, video decoder and RGBA scaler for one file.
struct FrameSource {
    input: Input,
    decoder: ffmpeg_next::decoder::Video,
    scaler: scaling::Context,
    stream_index: usize,
    secs_per_tick: f64,
}

impl FrameSource {
    fn open(path: &Path) -> std::result::Result<Self, MediaError> {
        init_ffmpeg()?;

        let input = ffmpeg_next::format::input(path)
            .map_err(|e| MediaError::Ffmpeg(format!("Failed to open video: {e}")))?;
        let stream = input
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(MediaError::NoVideoStream)?;
        let stream_index = stream.index();
        let time_base = stream.time_base();
        let secs_per_tick = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        let decoder = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
            .and_then(|context| context.decoder().video())
            .map_err(|e| MediaError::Ffmpeg(format!("Failed to create video decoder: {e}")))?;

        let (width, height) = (decoder.width(), decoder.height());
        let scaler = scaling::Context::get(
            decoder.format(),
            width,
            height,
            Pixel::RGBA,
            width,
            height,
            scaling::Flags::BILINEAR,
        )
        .map_err(|e| MediaError::Ffmpeg(format!("Failed to create scaler: {e}")))?;

        Ok(Self {
            input,
            decoder,
            scaler,
            stream_index,
            secs_per_tick,
        })
    }

    fn duration_secs(&self) -> f64 {
        duration_secs(&self.input)
    }

    /// Moves to the keyframe at or before `secs`.
    fn seek(&mut self, secs: f64) -> std::result::Result<(), MediaError> {
        let timestamp = secs_to_timestamp(secs.max(0.0));
        self.input.seek(timestamp, ..timestamp)?;
        self.decoder.flush();
        Ok(())
    }

    /// Decodes the next video frame, or returns `None` at end of stream.
    ///
    /// Packets that fail to decode or scale are skipped; the failure is
    /// returned through `on_error` so playback carries on.
    fn next_frame(&mut self, on_error: &mut dyn FnMut(String)) -> Option<DecodedFrame> {
        for (stream, packet) in self.input.packets() {
            if stream.index() != self.stream_index {
                continue;
            }
            if let Err(e) = self.decoder.send_packet(&packet) {
                on_error(format!("Packet send failed: {e}"));
                continue;
            }

            let mut decoded = ffmpeg_next::frame::Video::empty();
            if self.decoder.receive_frame(&mut decoded).is_err() {
                continue;
            }
            let mut rgba = ffmpeg_next::frame::Video::empty();
            if let Err(e) = self.scaler.run(&decoded, &mut rgba) {
                on_error(format!("Scaling failed: {e}"));
                continue;
            }

            let pts_secs = decoded
                .timestamp()
                .map_or(0.0, |pts| pts as f64 * self.secs_per_tick);
            return Some(DecodedFrame {
                rgba_data: Arc::new(packed_rgba(&rgba)),
                width: rgba.width(),
                height: rgba.height(),
                pts_secs,
            });
        }
        None
    }
}

/// Body of the decoder thread.
fn run_decoder(
    path: &Path,
    loop_enabled: bool,
    mut commands: mpsc::UnboundedReceiver<DecoderCommand>,
    events: &mpsc::Sender<DecoderEvent>,
) -> std::result::Result<(), MediaError> {
    let mut source = FrameSource::open(path)?;
    let duration_secs = source.duration_secs();
    debug!(path = %path.display(), duration_secs, "decoder opened");

    let send = |event: DecoderEvent| events.blocking_send(event).is_ok();
    if !send(DecoderEvent::MetadataLoaded { duration_secs }) {
        return Ok(());
    }

    let mut transport = Transport::default();

    loop {
        match commands.try_recv() {
            Ok(DecoderCommand::Play) => {
                if transport.play() {
                    debug!(path = %path.display(), "replaying from start");
                    if let Err(e) = source.seek(0.0) {
                        send(DecoderEvent::Error(format!("Rewind failed: {e}")));
                    }
                }
            }
            Ok(DecoderCommand::Pause) => transport.pause(),
            Ok(DecoderCommand::Seek { target_secs }) => match source.seek(target_secs) {
                Ok(()) => transport.seeked(),
                Err(e) => {
                    send(DecoderEvent::Error(format!("Seek failed: {e}")));
                }
            },
            Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => break,
            Err(mpsc::error::TryRecvError::Empty) => {}
        }

        if !transport.wants_frame() {
            std::thread::sleep(IDLE_POLL);
            continue;
        }

        let mut report = |message: String| {
            send(DecoderEvent::Error(message));
        };
        if let Some(frame) = source.next_frame(&mut report) {
            std::thread::sleep(transport.delay_for(frame.pts_secs, Instant::now()));
            if !send(DecoderEvent::FrameReady(frame)) {
                return Ok(());
            }
            transport.frame_sent();
            continue;
        }

        if loop_enabled && transport.playing {
            match source.seek(0.0) {
                Ok(()) => {
                    debug!(path = %path.display(), "looping to start");
                    transport.play();
                    send(DecoderEvent::Looped);
                    continue;
                }
                Err(e) => {
                    send(DecoderEvent::Error(format!("Loop seek failed: {e}")));
                }
            }
        }
        transport.stopped();
        send(DecoderEvent::EndOfStream);
    }

    debug!(path = %path.display(), "decoder stopped");
    Ok(())
}

/// Copies plane 0 of an RGBA frame without the per-row stride padding.
fn packed_rgba(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let row_bytes = frame.width() as usize * 4;
    let stride = frame.stride(0);
    frame
        .data(0)
        .chunks(stride)
        .take(frame.height() as usize)
        .flat_map(|row| &row[..row_bytes])
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let result = AsyncDecoder::new("/nonexistent/video.mp4", true);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn unreadable_file_reports_error_event() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let video_path = temp_dir.path().join("broken.mp4");
        std::fs::write(&video_path, b"not a video").expect("write");

        let mut decoder = AsyncDecoder::new(&video_path, true).expect("decoder starts");
        let event = tokio::time::timeout(Duration::from_secs(5), decoder.recv_event())
            .await
            .expect("event in time");
        assert!(matches!(event, Some(DecoderEvent::Error(_))));
    }

    #[test]
    fn transport_paces_from_first_frame() {
        let mut transport = Transport::default();
        transport.play();
        let now = Instant::now();
        assert_eq!(transport.delay_for(12.0, now), Duration::ZERO);
        assert_eq!(transport.delay_for(12.5, now), Duration::from_millis(500));
        assert_eq!(
            transport.delay_for(12.5, now + Duration::from_secs(1)),
            Duration::ZERO
        );
    }

    #[test]
    fn paused_transport_never_waits() {
        let mut transport = Transport::default();
        assert_eq!(transport.delay_for(40.0, Instant::now()), Duration::ZERO);
        assert!(!transport.wants_frame());
    }

    #[test]
    fn seek_while_paused_previews_one_frame() {
        let mut transport = Transport::default();
        transport.seeked();
        assert!(transport.wants_frame());
        transport.frame_sent();
        assert!(!transport.wants_frame());

        transport.play();
        transport.seeked();
        assert!(transport.wants_frame());
        assert!(!transport.preview_pending);
    }

    #[test]
    fn end_of_stream_stops_transport() {
        let mut transport = Transport::default();
        assert!(!transport.play());
        transport.stopped();
        assert!(!transport.wants_frame());
    }

    #[test]
    fn play_after_end_of_stream_rewinds_once() {
        let mut transport = Transport::default();
        transport.play();
        transport.stopped();

        assert!(transport.play());
        assert!(transport.wants_frame());
        transport.pause();
        assert!(!transport.play());
    }

    #[test]
    fn seek_after_end_of_stream_skips_rewind() {
        let mut transport = Transport::default();
        transport.play();
        transport.stopped();
        transport.seeked();
        assert!(!transport.play());
    }
}
