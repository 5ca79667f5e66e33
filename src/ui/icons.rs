// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the video overlay.
//!
//! Icons are inline SVG documents drawn in white for the dark overlay.
//! Handles are cached using `OnceLock` so each document is parsed once.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `expand` not `enter_fullscreen`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="white">"#,
                        $path,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Video Playback Icons
// =============================================================================

define_icon!(play, r#"<path d="M8 5v14l11-7z"/>"#, "Play triangle.");

define_icon!(
    pause,
    r#"<path d="M6 5h4v14H6zM14 5h4v14h-4z"/>"#,
    "Two vertical pause bars."
);

define_icon!(
    volume,
    r#"<path d="M3 9v6h4l5 5V4L7 9H3zm13.5 3A4.5 4.5 0 0 0 14 8v8a4.5 4.5 0 0 0 2.5-4z"/>"#,
    "Speaker with sound waves."
);

define_icon!(
    volume_mute,
    r#"<path d="M3 9v6h4l5 5V4L7 9H3zm18.7 0.7-1.4-1.4L18 10.6l-2.3-2.3-1.4 1.4 2.3 2.3-2.3 2.3 1.4 1.4 2.3-2.3 2.3 2.3 1.4-1.4-2.3-2.3z"/>"#,
    "Speaker with a cross."
);

define_icon!(
    expand,
    r#"<path d="M4 4h6v2H6v4H4zM14 4h6v6h-2V6h-4zM4 14h2v4h4v2H4zM18 14h2v6h-6v-2h4z"/>"#,
    "Four outward corners."
);

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
