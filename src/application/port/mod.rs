// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the widget core remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`media`]: A playable media element (position, transport, volume, fullscreen)
//! - [`timer`]: Deferred, cancellable one-shot actions
//!
//! # Design Notes
//!
//! - No Iced handles, no `FFmpeg` types
//! - Methods are synchronous; adapters that need async work queue it for the host
//! - Failures the core does not interpret are returned as `MediaError`
//!
//! # Example
//!
//! ```ignore
//! use iced_showreel::application::port::{MediaElement, Scheduler};
//! use iced_showreel::video_player::VideoPlayer;
//!
//! fn attach<M: MediaElement, S: Scheduler>(element: M, scheduler: S) -> VideoPlayer<M, S> {
//!     let mut player = VideoPlayer::new(element, scheduler, Default::default());
//!     player.mount();
//!     player
//! }
//! ```

pub mod media;
pub mod timer;

// Re-export main types for convenience
pub use crate::domain::video::TimerId;
pub use media::MediaElement;
pub use timer::Scheduler;
