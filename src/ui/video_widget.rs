// SPDX-License-Identifier: MPL-2.0
//! One embedded video: decoded surface, control overlay and pointer routing.
//!
//! Glues a [`VideoPlayer`] to its FFmpeg playback subscription and its Iced
//! hide timers. The surface toggles playback when clicked; entering and
//! leaving the widget region drive the overlay's auto-hide protocol.

use crate::application::port::MediaElement;
use crate::config::WidgetSettings;
use crate::infrastructure::{DecoderMediaElement, TaskScheduler};
use crate::ui::design_tokens::sizing;
use crate::ui::{styles, video_controls};
use crate::video_player::{self, Effect as PlayerEffect, PlaybackMessage, PlaybackSession, VideoPlayer};
use iced::widget::{button, container, image, mouse_area, stack, text, Space};
use iced::alignment::Vertical;
use iced::{window, ContentFit, Element, Length, Subscription, Task};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Messages handled by a single video widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// User interaction or timer, forwarded to the widget state machine.
    Player(video_player::Message),
    /// Output of the decoder subscription.
    Playback(PlaybackMessage),
}

/// Requests the owner must carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    EnterFullscreen(window::Id),
}

/// Per-card video widget state.
pub struct VideoWidget {
    player: VideoPlayer<DecoderMediaElement, TaskScheduler>,
    session: PlaybackSession,
    frame: Option<image::Handle>,
    error: Option<String>,
}

impl VideoWidget {
    /// Creates and mounts a widget for `path`, returning the first hide timer.
    pub fn new(card: usize, path: PathBuf, settings: WidgetSettings) -> (Self, Task<Message>) {
        let session = PlaybackSession {
            card,
            session_id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            path,
            loop_enabled: settings.loop_enabled,
        };
        let mut player = VideoPlayer::new(DecoderMediaElement::new(), TaskScheduler::new(), settings);
        player.mount();

        let mut widget = Self {
            player,
            session,
            frame: None,
            error: None,
        };
        let task = widget.drain_timers();
        (widget, task)
    }

    #[must_use]
    pub fn player(&self) -> &VideoPlayer<DecoderMediaElement, TaskScheduler> {
        &self.player
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sets the window a fullscreen request should target.
    pub fn set_window(&mut self, window: Option<window::Id>) {
        self.player.element_mut().set_window(window);
    }

    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Player(message) => self.handle_player(message),
            Message::Playback(message) => self.handle_playback(message),
        }
    }

    fn handle_player(&mut self, message: video_player::Message) -> (Effect, Task<Message>) {
        if let video_player::Message::HideTimerElapsed(id) = message {
            self.player.scheduler_mut().complete(id);
        }

        match self.player.handle(message) {
            PlayerEffect::None => {}
            PlayerEffect::ControlsVisibilityChanged(visible) => {
                debug!(card = self.session.card, visible, "controls visibility changed");
            }
            PlayerEffect::FullscreenFailed(err) => {
                warn!(card = self.session.card, error = %err, "fullscreen request failed");
            }
        }

        let effect = match self.player.element_mut().take_fullscreen_request() {
            Some(window) => Effect::EnterFullscreen(window),
            None => Effect::None,
        };
        (effect, self.drain_timers())
    }

    fn handle_playback(&mut self, message: PlaybackMessage) -> (Effect, Task<Message>) {
        match message {
            PlaybackMessage::Started(commands) => {
                self.player.element_mut().attach(commands);
            }
            PlaybackMessage::MetadataLoaded { duration_secs } => {
                self.player.element_mut().record_duration(duration_secs);
                self.player.on_time_update();
            }
            PlaybackMessage::FrameReady {
                rgba_data,
                width,
                height,
                pts_secs,
            } => {
                let pixels = Arc::unwrap_or_clone(rgba_data);
                self.frame = Some(image::Handle::from_rgba(width, height, pixels));
                self.player.element_mut().record_position(pts_secs);
            }
            PlaybackMessage::TimeUpdate { position_secs } => {
                self.player.element_mut().record_position(position_secs);
                self.player.handle(video_player::Message::TimeUpdate);
            }
            PlaybackMessage::EndOfStream => {
                debug!(card = self.session.card, "end of stream");
                self.player.element_mut().record_ended();
                self.player.on_ended();
                return (Effect::None, self.drain_timers());
            }
            PlaybackMessage::Error(message) => {
                warn!(card = self.session.card, path = %self.session.path.display(), %message, "playback error");
                self.error = Some(message);
            }
        }
        (Effect::None, Task::none())
    }

    /// Hands newly armed hide timers to the runtime.
    fn drain_timers(&mut self) -> Task<Message> {
        self.player
            .scheduler_mut()
            .take_tasks()
            .map(|id| Message::Player(video_player::Message::HideTimerElapsed(id)))
    }

    /// Decoder subscription for this widget, tagged with its card index.
    pub fn subscription(&self) -> Subscription<(usize, PlaybackMessage)> {
        video_player::video_playback(self.session.clone())
    }

    pub fn view(&self) -> Element<'_, Message> {
        let surface: Element<'_, video_player::Message> = match (&self.frame, &self.error) {
            (Some(frame), _) => image(frame.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            (None, Some(error)) => container(text(error.clone()))
                .center(Length::Fill)
                .into(),
            (None, None) => Space::new().width(Length::Fill).height(Length::Fill).into(),
        };

        let surface = button(
            container(surface)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::media_surface),
        )
        .on_press(video_player::Message::TogglePlay)
        .padding(0)
        .style(styles::button::surface);

        let element = self.player.element();
        let timing = video_controls::Timing {
            position_secs: element.current_time(),
            duration_secs: element.duration(),
        };
        let overlay = container(video_controls::view(self.player.state(), timing))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Bottom);

        let layered: Element<'_, video_player::Message> = mouse_area(
            container(stack![surface, overlay])
                .width(Length::Fixed(sizing::CARD_WIDTH))
                .height(Length::Fixed(sizing::CARD_MEDIA_HEIGHT)),
        )
        .on_enter(video_player::Message::PointerEntered)
        .on_exit(video_player::Message::PointerLeft)
        .into();

        layered.map(Message::Player)
    }
}

impl Drop for VideoWidget {
    fn drop(&mut self) {
        self.player.unmount();
        self.player.element_mut().detach();
    }
}

impl std::fmt::Debug for VideoWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoWidget")
            .field("session", &self.session)
            .field("player", &self.player)
            .field("has_frame", &self.frame.is_some())
            .finish()
    }
}
