// SPDX-License-Identifier: MPL-2.0
//! Media source classification and FFmpeg setup.
//!
//! A showreel entry is either a video, played through the embedded widget,
//! or anything else, which is shown as a still image.

pub mod video;

use std::path::Path;

pub use video::init_ffmpeg;

/// Represents different kinds of showreel media
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

pub mod extensions {
    /// Extensions played through the video widget (lowercase).
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];
}

/// Classifies a source from its file extension, case-insensitively.
///
/// Sources without a known video extension are treated as images.
pub fn detect_media_kind<P: AsRef<Path>>(path: P) -> MediaKind {
    let is_video = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| extensions::VIDEO_EXTENSIONS.contains(&ext.as_str()));

    if is_video {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_video_formats() {
        assert_eq!(detect_media_kind("video.mp4"), MediaKind::Video);
        assert_eq!(detect_media_kind("clip.webm"), MediaKind::Video);
        assert_eq!(detect_media_kind("movie.AVI"), MediaKind::Video);
        assert_eq!(detect_media_kind("clip.mkv"), MediaKind::Video);
    }

    #[test]
    fn test_everything_else_is_an_image() {
        assert_eq!(detect_media_kind("photo.jpg"), MediaKind::Image);
        assert_eq!(detect_media_kind("poster.png"), MediaKind::Image);
        assert_eq!(detect_media_kind("no_extension"), MediaKind::Image);
    }

    #[test]
    fn test_path_with_directories() {
        let path = PathBuf::from("/home/user/videos/Showreel.MOV");
        assert_eq!(detect_media_kind(&path), MediaKind::Video);
    }

    #[test]
    fn test_video_extensions_are_lowercase_and_unique() {
        let all = extensions::VIDEO_EXTENSIONS;
        let unique = all.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(all.len(), unique.len());
        assert!(all.iter().all(|ext| *ext == ext.to_lowercase()));
    }
}
