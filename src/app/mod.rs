// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct resolves configuration and command-line flags into widget
//! settings, hosts the gallery, and turns widget effects into window commands
//! such as entering fullscreen.

mod message;

pub use message::{Flags, Message};

use crate::config::{self, WidgetSettings};
use crate::ui::gallery::{self, Gallery};
use iced::{event, keyboard, window, Element, Subscription, Task, Theme};
use std::fmt;
use tracing::{info, warn};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 700;

const APP_NAME: &str = "Iced Showreel";

/// Root Iced application state.
#[derive(Default)]
pub struct App {
    gallery: Gallery,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cards", &self.gallery.cards().len())
            .field("window_id", &self.window_id)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Resolves config and CLI overrides into the settings every widget mounts with.
pub fn resolve_settings(flags: &Flags) -> WidgetSettings {
    let (config, warning) = match &flags.config_path {
        Some(path) => config::load_or_default(path),
        None => config::load(),
    };
    if let Some(warning) = warning {
        warn!(%warning, "using default settings");
    }

    let mut settings = config.widget_settings();
    if flags.paused {
        settings.autoplay = false;
    }
    if flags.unmuted {
        settings.start_muted = false;
    }
    settings
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let settings = resolve_settings(&flags);
        info!(
            sources = flags.media.len(),
            autoplay = settings.autoplay,
            muted = settings.start_muted,
            "starting showreel"
        );

        let (gallery, task) = Gallery::new(flags.media, settings);
        let app = App {
            gallery,
            ..Self::default()
        };
        (app, task.map(Message::Gallery))
    }

    fn title(&self) -> String {
        APP_NAME.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(|event, _status, window_id| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::ExitFullscreen),
            event::Event::Window(
                window::Event::Opened { .. } | window::Event::Resized(_) | window::Event::Focused,
            ) => Some(Message::WindowSeen(window_id)),
            _ => None,
        });

        Subscription::batch([events, self.gallery.subscription().map(Message::Gallery)])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                let (effect, task) = self.gallery.update(message);
                let task = task.map(Message::Gallery);
                match effect {
                    gallery::Effect::None => task,
                    gallery::Effect::EnterFullscreen(window_id) => {
                        Task::batch([task, set_fullscreen(window_id, true)])
                    }
                }
            }
            Message::WindowSeen(window_id) => {
                if self.window_id != Some(window_id) {
                    self.window_id = Some(window_id);
                    self.gallery.set_window(Some(window_id));
                }
                Task::none()
            }
            Message::ExitFullscreen => match self.window_id {
                Some(window_id) => set_fullscreen(window_id, false),
                None => Task::none(),
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.gallery.view().map(Message::Gallery)
    }
}

/// Switches the window mode. Always issued, since the window manager may
/// have changed the mode behind the app's back.
fn set_fullscreen(window_id: window::Id, fullscreen: bool) -> Task<Message> {
    let mode = if fullscreen {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(window_id, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn missing_config() -> Option<PathBuf> {
        Some(PathBuf::from("/nonexistent/iced_showreel/settings.toml"))
    }

    #[test]
    fn flags_override_config() {
        let flags = Flags {
            config_path: missing_config(),
            paused: true,
            unmuted: true,
            media: Vec::new(),
        };
        let settings = resolve_settings(&flags);
        assert!(!settings.autoplay);
        assert!(!settings.start_muted);
    }

    #[test]
    fn defaults_autoplay_muted() {
        let flags = Flags {
            config_path: missing_config(),
            ..Flags::default()
        };
        let settings = resolve_settings(&flags);
        assert!(settings.autoplay);
        assert!(settings.start_muted);
        assert_eq!(settings.hide_delay.value(), 3);
    }

    #[test]
    fn config_file_is_applied() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(file, "[overlay]\nhide_delay_secs = 5\n[playback]\nautoplay = false")
            .expect("write");

        let flags = Flags {
            config_path: Some(path),
            ..Flags::default()
        };
        let settings = resolve_settings(&flags);
        assert!(!settings.autoplay);
        assert_eq!(settings.hide_delay.value(), 5);
    }

    #[test]
    fn window_seen_reaches_widgets() {
        let flags = Flags {
            config_path: missing_config(),
            media: vec![PathBuf::from("a.mp4")],
            ..Flags::default()
        };
        let (mut app, _task) = App::new(flags);
        let id = window::Id::unique();
        let _ = app.update(Message::WindowSeen(id));
        assert_eq!(app.window_id, Some(id));
    }

    #[test]
    fn every_fullscreen_request_reaches_the_window() {
        let flags = Flags {
            config_path: missing_config(),
            media: vec![PathBuf::from("a.mp4")],
            ..Flags::default()
        };
        let (mut app, _task) = App::new(flags);
        let _ = app.update(Message::WindowSeen(window::Id::unique()));

        let request = || {
            Message::Gallery(gallery::Message::Video(
                0,
                crate::ui::video_widget::Message::Player(
                    crate::video_player::Message::RequestFullscreen,
                ),
            ))
        };
        // The second request follows a mode change the app never saw
        assert!(app.update(request()).units() > 0);
        assert!(app.update(request()).units() > 0);
        assert!(app.update(Message::ExitFullscreen).units() > 0);
    }

    #[test]
    fn exit_fullscreen_before_window_is_a_noop() {
        let mut app = App::default();
        assert_eq!(app.update(Message::ExitFullscreen).units(), 0);
    }

    #[test]
    fn title_is_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "Iced Showreel");
    }
}
