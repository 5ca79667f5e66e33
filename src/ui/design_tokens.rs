// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the showreel.
//!
//! Every color, alpha, gap and size used by the styles and views comes from
//! here. Spacing follows an 8px grid; overlay alphas are applied to
//! [`palette::BLACK`] so the video stays readable underneath.
//!
//! ```
//! use iced_showreel::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let scrim = Color { a: opacity::OVERLAY_STRONG, ..palette::BLACK };
//! assert!(scrim.a < 1.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Card background.
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    /// Card border.
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    /// Secondary text.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

/// Alpha levels for overlay surfaces.
pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Hovered overlay button.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Pressed overlay button and the dark end of the control gradient.
    pub const OVERLAY_STRONG: f32 = 0.7;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const BUTTON_HEIGHT: f32 = 32.0;
    pub const VOLUME_SLIDER_WIDTH: f32 = 80.0;

    /// Media area of a card, 16:9.
    pub const CARD_WIDTH: f32 = 640.0;
    pub const CARD_MEDIA_HEIGHT: f32 = 360.0;
}

pub mod typography {
    pub const TITLE_SM: f32 = 18.0;
    /// Elapsed/duration readout.
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const MD: f32 = 8.0;
    /// Round overlay buttons.
    pub const FULL: f32 = 9999.0;
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);

    assert!(opacity::TRANSPARENT < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < 1.0);

    assert!(sizing::BUTTON_HEIGHT > sizing::ICON_SM);
    assert!(typography::TITLE_SM > typography::CAPTION);
};
