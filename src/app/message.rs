// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// A window event told us which window we are running in.
    WindowSeen(window::Id),
    /// Escape pressed: switch the window back to windowed mode.
    ExitFullscreen,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Settings file overriding the platform config location.
    pub config_path: Option<PathBuf>,
    /// Start every video paused regardless of config.
    pub paused: bool,
    /// Start every video with sound regardless of config.
    pub unmuted: bool,
    /// Media sources, one card each.
    pub media: Vec<PathBuf>,
}
