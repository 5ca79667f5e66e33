// SPDX-License-Identifier: MPL-2.0
//! `iced_showreel` is a small media showreel built with the Iced GUI framework.
//!
//! Each video in the reel gets an embedded player with a control overlay that
//! hides itself after a few idle seconds while playing and comes back when
//! the pointer enters the video.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
