// SPDX-License-Identifier: MPL-2.0
//! Container styles for showreel cards.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_700, GRAY_900, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card frame around a title and its media.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GRAY_900)),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..GRAY_700
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Letterbox behind the video frame.
pub fn media_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
