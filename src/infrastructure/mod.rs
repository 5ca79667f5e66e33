// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap the `FFmpeg` decoder and the Iced
//! runtime.
//!
//! # Available Adapters
//!
//! - [`media_element`]: Decoder-backed media element (implements [`MediaElement`])
//! - [`scheduler`]: Abortable Iced tasks as hide timers (implements [`Scheduler`])
//!
//! [`MediaElement`]: crate::application::port::MediaElement
//! [`Scheduler`]: crate::application::port::Scheduler

pub mod media_element;
pub mod scheduler;

// Re-export main types for convenience
pub use media_element::DecoderMediaElement;
pub use scheduler::TaskScheduler;
