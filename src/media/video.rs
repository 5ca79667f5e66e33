// SPDX-License-Identifier: MPL-2.0
//! FFmpeg initialization and duration lookup.

use crate::error::MediaError;
use crate::video_player::time_units::timestamp_to_secs;
use std::sync::Once;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with appropriate log level.
///
/// This function is safe to call multiple times - initialization will only
/// happen once thanks to `std::sync::Once`. It sets the FFmpeg log level
/// to ERROR to suppress warning messages like "Detected creation time before 1970".
pub fn init_ffmpeg() -> Result<(), MediaError> {
    let mut init_result: Result<(), MediaError> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(MediaError::Ffmpeg(format!("initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Duration of an opened input in seconds.
///
/// Prefers the video stream's own duration, falls back to the container's,
/// and yields NaN when neither is set.
pub(crate) fn duration_secs(ictx: &ffmpeg_next::format::context::Input) -> f64 {
    if let Some(stream) = ictx.streams().best(ffmpeg_next::media::Type::Video) {
        if stream.duration() > 0 {
            let time_base = stream.time_base();
            return stream.duration() as f64 * f64::from(time_base.numerator())
                / f64::from(time_base.denominator());
        }
    }
    if ictx.duration() > 0 {
        return timestamp_to_secs(ictx.duration());
    }
    f64::NAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        assert!(init_ffmpeg().is_ok());
        assert!(init_ffmpeg().is_ok());
    }
}
