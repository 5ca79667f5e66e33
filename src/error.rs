// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Media Error: {0}")]
    Media(#[from] MediaError),
}

/// Failures reported by a media element or its decoder.
///
/// The widget core never inspects these; they are handed back to the host
/// exactly as the element produced them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MediaError {
    /// The platform refused or could not service a fullscreen request.
    ///
    /// Returned by hosts whose fullscreen call can be denied outright. The
    /// bundled Iced host queues the request for its window instead, so it
    /// only ever reports [`MediaError::FullscreenUnavailable`].
    #[error("Fullscreen request rejected: {0}")]
    FullscreenRejected(String),

    /// No window is available yet to switch into fullscreen.
    #[error("Fullscreen is unavailable before the window is open")]
    FullscreenUnavailable,

    /// File exists but contains no video stream.
    #[error("No video stream found")]
    NoVideoStream,

    /// The decoder task is not running (not started yet, or already stopped).
    #[error("Decoder is not running")]
    DecoderUnavailable,

    /// Raw error reported by FFmpeg.
    #[error("FFmpeg: {0}")]
    Ffmpeg(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ffmpeg_next::Error> for MediaError {
    fn from(err: ffmpeg_next::Error) -> Self {
        MediaError::Ffmpeg(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
