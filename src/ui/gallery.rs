// SPDX-License-Identifier: MPL-2.0
//! Showreel gallery: a scrollable column of titled media cards.
//!
//! Every video card owns its own [`VideoWidget`], so playback state, timers
//! and decoder sessions never leak between cards.

use crate::config::WidgetSettings;
use crate::media::{detect_media_kind, MediaKind};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::video_widget::{self, VideoWidget};
use crate::video_player::PlaybackMessage;
use iced::widget::{column, container, image, scrollable, text};
use iced::{window, Alignment, ContentFit, Element, Length, Subscription, Task};
use std::path::PathBuf;

#[derive(Debug)]
pub enum Card {
    Video { title: String, widget: VideoWidget },
    Still { title: String, handle: image::Handle },
}

impl Card {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Card::Video { title, .. } | Card::Still { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Video(usize, video_widget::Message),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    EnterFullscreen(window::Id),
}

#[derive(Debug, Default)]
pub struct Gallery {
    cards: Vec<Card>,
}

fn card_title(path: &std::path::Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned())
}

impl Gallery {
    /// Builds one card per path and mounts every video widget.
    pub fn new(paths: Vec<PathBuf>, settings: WidgetSettings) -> (Self, Task<Message>) {
        let mut cards = Vec::with_capacity(paths.len());
        let mut tasks = Vec::new();

        for (index, path) in paths.into_iter().enumerate() {
            let title = card_title(&path);
            match detect_media_kind(&path) {
                MediaKind::Video => {
                    let (widget, task) = VideoWidget::new(index, path, settings);
                    tasks.push(task.map(move |message| Message::Video(index, message)));
                    cards.push(Card::Video { title, widget });
                }
                MediaKind::Image => {
                    let handle = image::Handle::from_path(&path);
                    cards.push(Card::Still { title, handle });
                }
            }
        }

        (Self { cards }, Task::batch(tasks))
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the video widget of `card`, if that card holds a video.
    #[must_use]
    pub fn video(&self, card: usize) -> Option<&VideoWidget> {
        match self.cards.get(card) {
            Some(Card::Video { widget, .. }) => Some(widget),
            _ => None,
        }
    }

    pub fn set_window(&mut self, window: Option<window::Id>) {
        for card in &mut self.cards {
            if let Card::Video { widget, .. } = card {
                widget.set_window(window);
            }
        }
    }

    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Video(index, message) => {
                let Some(Card::Video { widget, .. }) = self.cards.get_mut(index) else {
                    return (Effect::None, Task::none());
                };
                let (effect, task) = widget.update(message);
                let task = task.map(move |message| Message::Video(index, message));
                let effect = match effect {
                    video_widget::Effect::None => Effect::None,
                    video_widget::Effect::EnterFullscreen(id) => Effect::EnterFullscreen(id),
                };
                (effect, task)
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(self.cards.iter().filter_map(|card| match card {
            Card::Video { widget, .. } => Some(widget.subscription()),
            Card::Still { .. } => None,
        }))
        .map(|(index, message): (usize, PlaybackMessage)| {
            Message::Video(index, video_widget::Message::Playback(message))
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        if self.cards.is_empty() {
            return container(
                text("No media. Pass video or image files on the command line.")
                    .size(typography::TITLE_SM)
                    .color(palette::GRAY_400),
            )
            .center(Length::Fill)
            .into();
        }

        let cards = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| card_view(index, card));

        scrollable(
            container(
                column(cards)
                    .spacing(spacing::LG)
                    .align_x(Alignment::Center),
            )
            .width(Length::Fill)
            .padding(spacing::LG)
            .center_x(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    }
}

fn card_view(index: usize, card: &Card) -> Element<'_, Message> {
    let media: Element<'_, Message> = match card {
        Card::Video { widget, .. } => widget
            .view()
            .map(move |message| Message::Video(index, message)),
        Card::Still { handle, .. } => container(
            image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_MEDIA_HEIGHT))
        .style(styles::container::media_surface)
        .into(),
    };

    container(
        column![text(card.title().to_owned()).size(typography::TITLE_SM), media]
            .spacing(spacing::XS),
    )
    .padding(spacing::SM)
    .style(styles::container::card)
    .into()
}
