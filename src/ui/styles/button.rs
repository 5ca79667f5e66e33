// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for icon buttons sitting on the video overlay.
///
/// The background stays transparent until hovered so the gradient shows through.
pub fn overlay(alpha_hover: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => opacity::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Style for the invisible button covering the video surface.
pub fn surface(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_button_is_transparent_until_hovered() {
        let theme = Theme::Dark;
        let style_fn = overlay(opacity::OVERLAY_MEDIUM);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_eq!(
            normal.background,
            Some(Background::Color(Color::TRANSPARENT))
        );
        assert_ne!(normal.background, hover.background);
        assert_eq!(hover.text_color, WHITE);
    }

    #[test]
    fn surface_button_has_no_background() {
        let style = surface(&Theme::Dark, button::Status::Hovered);
        assert!(style.background.is_none());
    }
}
