// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the video control bar.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::gradient::Linear;
use iced::widget::{container, svg};
use iced::{Background, Color, Gradient, Radians, Theme};

/// Bottom-anchored fade from black to transparent behind the controls.
#[must_use]
pub fn controls_gradient(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(0.0))
        .add_stop(
            0.0,
            Color {
                a: opacity::OVERLAY_STRONG,
                ..BLACK
            },
        )
        .add_stop(
            1.0,
            Color {
                a: opacity::TRANSPARENT,
                ..BLACK
            },
        );

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Tint for overlay SVG icons.
pub fn icon(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_use_gradient_background() {
        let style = controls_gradient(&Theme::Dark);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
        assert_eq!(style.text_color, Some(WHITE));
    }

    #[test]
    fn icon_style_applies_color() {
        let style = icon(WHITE)(&Theme::Dark, svg::Status::Idle);
        assert_eq!(style.color, Some(WHITE));
    }
}
