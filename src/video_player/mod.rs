// SPDX-License-Identifier: MPL-2.0
//! Embedded video widget engine.
//!
//! [`VideoPlayer`] is the host-agnostic widget state machine. The rest of
//! this module is the FFmpeg host side: an async decoder running on a
//! blocking Tokio thread and an Iced subscription delivering its frames.

mod decoder;
mod state;
pub mod subscription;
pub mod time_units;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
pub use state::{Effect, Message, VideoPlayer};
pub use subscription::{video_playback, DecoderCommandSender, PlaybackMessage, PlaybackSession};
pub use time_units::format_elapsed;
