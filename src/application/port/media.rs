// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait: the playable-media
//! primitive a video widget drives. Infrastructure adapters (like the
//! `FFmpeg` decoder bridge) implement this trait.
//!
//! # Design Notes
//!
//! - Readings are plain `f64` seconds; `duration()` is NaN until metadata is known
//! - Transport calls never fail; an element that is not ready records the request
//! - Only `request_fullscreen` reports failure, and the widget passes it through

use crate::error::MediaError;

// =============================================================================
// MediaElement Trait
// =============================================================================

/// Port for a playable video element.
///
/// # Lifecycle
///
/// 1. Host creates the element for a source
/// 2. Widget issues transport/volume commands as the user interacts
/// 3. Host notifies the widget periodically so it can read `current_time()`
///
/// # Example
///
/// ```ignore
/// use iced_showreel::application::port::MediaElement;
///
/// fn rewind_if_loaded(element: &mut impl MediaElement) {
///     if element.duration().is_finite() {
///         element.set_current_time(0.0);
///     }
/// }
/// ```
pub trait MediaElement {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Total duration in seconds, NaN while unknown.
    fn duration(&self) -> f64;

    /// Moves the playback position to `secs`.
    fn set_current_time(&mut self, secs: f64);

    /// Resumes (or starts) playback.
    fn play(&mut self);

    /// Pauses playback, keeping the current position.
    fn pause(&mut self);

    /// Sets the output level (0.0 to 1.0).
    fn set_volume(&mut self, volume: f32);

    /// Sets the muted flag independently of the level.
    fn set_muted(&mut self, muted: bool);

    /// Asks the platform to show this element fullscreen.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] if the platform cannot or will not comply.
    fn request_fullscreen(&mut self) -> Result<(), MediaError>;
}
