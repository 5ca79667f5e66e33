// SPDX-License-Identifier: MPL-2.0
//! Video control overlay UI.
//!
//! Renders the bar drawn over the bottom of a video: progress scrubber,
//! play/pause, mute, volume slider, elapsed/duration readout and fullscreen.
//! The overlay emits widget messages directly, so it can be mapped by
//! whatever owns the [`VideoPlayer`](crate::video_player::VideoPlayer).

use crate::config::{PROGRESS_SLIDER_STEP, VOLUME_SLIDER_STEP};
use crate::domain::video::PlaybackState;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use crate::video_player::{format_elapsed, Message};
use iced::widget::{button, column, container, row, slider, text, tooltip, Space, Svg, Text};
use iced::{Alignment, Element, Length};

/// Media readings the overlay shows next to the widget state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Current position in seconds.
    pub position_secs: f64,
    /// Total duration in seconds, NaN while unknown.
    pub duration_secs: f64,
}

/// Returns the `elapsed / duration` readout.
#[must_use]
pub fn time_readout(timing: Timing) -> String {
    format!(
        "{} / {}",
        format_elapsed(timing.position_secs),
        format_elapsed(timing.duration_secs)
    )
}

fn icon_button<'a>(icon: Svg<'static>, message: Message, hint: &'a str) -> Element<'a, Message> {
    let content = button(
        icons::sized(icon, sizing::ICON_SM).style(styles::overlay::icon(palette::WHITE)),
    )
    .on_press(message)
    .padding(spacing::XS)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::overlay(opacity::OVERLAY_MEDIUM));

    tooltip(content, Text::new(hint), tooltip::Position::Top)
        .gap(4)
        .into()
}

/// Renders the control overlay, or nothing when the controls are hidden.
pub fn view<'a>(state: &PlaybackState, timing: Timing) -> Element<'a, Message> {
    if !state.controls_visible {
        return Space::new().width(Length::Fill).height(Length::Shrink).into();
    }

    let progress = slider(0.0..=100.0, state.progress_percent.value(), Message::Seek)
        .step(PROGRESS_SLIDER_STEP)
        .width(Length::Fill);

    let play_pause = if state.is_playing {
        icon_button(icons::pause(), Message::TogglePlay, "Pause")
    } else {
        icon_button(icons::play(), Message::TogglePlay, "Play")
    };

    let mute = if state.is_muted {
        icon_button(icons::volume_mute(), Message::ToggleMute, "Unmute")
    } else {
        icon_button(icons::volume(), Message::ToggleMute, "Mute")
    };

    let volume = slider(0.0..=1.0, state.displayed_volume(), Message::SetVolume)
        .step(VOLUME_SLIDER_STEP)
        .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH));

    let readout = text(time_readout(timing)).size(typography::CAPTION);

    let fullscreen = icon_button(icons::expand(), Message::RequestFullscreen, "Fullscreen");

    let buttons = row![
        play_pause,
        mute,
        volume,
        readout,
        Space::new().width(Length::Fill),
        fullscreen,
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);

    container(column![progress, buttons].spacing(spacing::XXS))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::overlay::controls_gradient)
        .into()
}
