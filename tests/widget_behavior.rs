// SPDX-License-Identifier: MPL-2.0
//! Behavioural tests for the video widget state machine, driven through its
//! public message interface with a mock element and a virtual clock.

mod common;

use approx::assert_abs_diff_eq;
use common::{advance, MockElement, TestPlayer, VirtualClock};
use iced_showreel::config::WidgetSettings;
use iced_showreel::domain::video::{HideDelay, Volume};
use iced_showreel::error::MediaError;
use iced_showreel::video_player::{format_elapsed, Effect, Message, VideoPlayer};

fn settings(autoplay: bool) -> WidgetSettings {
    WidgetSettings {
        autoplay,
        start_muted: true,
        loop_enabled: true,
        initial_volume: Volume::new(1.0),
        hide_delay: HideDelay::new(3),
    }
}

fn mounted(duration: f64, autoplay: bool) -> TestPlayer {
    let mut player = VideoPlayer::new(
        MockElement::with_duration(duration),
        VirtualClock::default(),
        settings(autoplay),
    );
    player.mount();
    player
}

fn time_update(player: &mut TestPlayer, current: f64) {
    player.element_mut().current_time = current;
    player.handle(Message::TimeUpdate);
}

#[test]
fn end_to_end_autoplay_hides_then_pointer_restores() {
    let mut player = mounted(30.0, true);
    assert!(player.state().is_playing);
    assert!(player.state().controls_visible);
    assert!(player.element().playing);
    assert!(player.element().muted);

    advance(&mut player, 2900);
    assert!(player.state().controls_visible);

    advance(&mut player, 100);
    assert!(!player.state().controls_visible);

    let effect = player.handle(Message::PointerEntered);
    assert_eq!(effect, Effect::ControlsVisibilityChanged(true));
    assert_eq!(player.scheduler_mut().pending(), 1);

    advance(&mut player, 3000);
    assert!(!player.state().controls_visible);
}

#[test]
fn progress_tracks_position_and_clamps() {
    let mut player = mounted(200.0, true);
    for (current, expected) in [(0.0, 0.0), (50.0, 25.0), (200.0, 100.0), (250.0, 100.0)] {
        time_update(&mut player, current);
        assert_abs_diff_eq!(player.state().progress_percent.value(), expected, epsilon = 1e-9);
    }
}

#[test]
fn progress_is_zero_for_invalid_duration() {
    for duration in [0.0, f64::NAN, f64::INFINITY] {
        let mut player = mounted(duration, true);
        time_update(&mut player, 12.0);
        assert_eq!(player.state().progress_percent.value(), 0.0);
    }
}

#[test]
fn seek_scales_percent_to_duration() {
    let mut player = mounted(80.0, true);
    player.handle(Message::Seek(25.0));
    assert_abs_diff_eq!(player.element().current_time, 20.0, epsilon = 1e-9);
}

#[test]
fn seek_without_duration_leaves_position() {
    let mut player = mounted(f64::NAN, true);
    player.element_mut().current_time = 4.0;
    player.handle(Message::Seek(50.0));
    assert_eq!(player.element().current_time, 4.0);
}

#[test]
fn volume_drives_mute_flag() {
    let mut player = mounted(10.0, true);
    assert!(player.state().is_muted);

    player.handle(Message::SetVolume(0.4));
    assert!(!player.state().is_muted);
    assert!(!player.element().muted);
    assert_abs_diff_eq!(player.element().volume, 0.4);

    player.handle(Message::SetVolume(0.0));
    assert!(player.state().is_muted);
    assert!(player.element().muted);
}

#[test]
fn toggle_mute_keeps_volume() {
    let mut player = mounted(10.0, true);
    player.handle(Message::SetVolume(0.6));
    player.handle(Message::ToggleMute);
    assert!(player.state().is_muted);
    assert_abs_diff_eq!(player.state().volume.value(), 0.6);
    assert_eq!(player.state().displayed_volume(), 0.0);

    player.handle(Message::ToggleMute);
    assert!(!player.state().is_muted);
    assert_abs_diff_eq!(player.state().displayed_volume(), 0.6);
}

#[test]
fn pointer_leave_depends_on_playback() {
    let mut player = mounted(10.0, true);
    let effect = player.handle(Message::PointerLeft);
    assert_eq!(effect, Effect::ControlsVisibilityChanged(false));
    assert_eq!(player.scheduler_mut().pending(), 0);

    player.handle(Message::TogglePlay);
    assert!(!player.state().is_playing);
    assert!(player.state().controls_visible);
    let effect = player.handle(Message::PointerLeft);
    assert_eq!(effect, Effect::None);
    assert!(player.state().controls_visible);
}

#[test]
fn paused_widget_keeps_controls_after_timeout() {
    let mut player = mounted(10.0, false);
    assert!(!player.element().playing);
    advance(&mut player, 10000);
    assert!(player.state().controls_visible);
}

#[test]
fn reentering_restarts_countdown() {
    let mut player = mounted(10.0, true);
    advance(&mut player, 2000);
    player.handle(Message::PointerEntered);

    // First timer would have fired here
    advance(&mut player, 1500);
    assert!(player.state().controls_visible);

    advance(&mut player, 1500);
    assert!(!player.state().controls_visible);

    let clock = player.scheduler_mut();
    assert_eq!(clock.scheduled.len(), 2);
    assert_eq!(clock.cancelled, vec![clock.scheduled[0]]);
}

#[test]
fn unmount_cancels_and_ignores_late_timer() {
    let mut player = mounted(10.0, true);
    let id = player.state().hide_timer.expect("armed on mount");
    player.unmount();
    player.unmount();
    assert!(!player.is_mounted());
    assert_eq!(player.scheduler_mut().pending(), 0);

    let effect = player.handle(Message::HideTimerElapsed(id));
    assert_eq!(effect, Effect::None);
    assert!(player.state().controls_visible);
}

#[test]
fn fullscreen_failure_is_reported_not_raised() {
    let mut player = mounted(10.0, true);
    assert_eq!(player.handle(Message::RequestFullscreen), Effect::None);

    player.element_mut().fullscreen_allowed = false;
    let effect = player.handle(Message::RequestFullscreen);
    assert!(matches!(
        effect,
        Effect::FullscreenFailed(MediaError::FullscreenRejected(_))
    ));
    assert_eq!(player.element().fullscreen_requests, 2);
}

#[test]
fn instances_are_isolated() {
    let mut first = mounted(10.0, true);
    let mut second = mounted(20.0, true);

    first.handle(Message::TogglePlay);
    first.handle(Message::SetVolume(0.2));
    advance(&mut second, 3000);

    assert!(!first.state().is_playing);
    assert!(first.state().controls_visible);
    assert!(second.state().is_playing);
    assert!(second.state().is_muted);
    assert!(!second.state().controls_visible);
}

#[test]
fn elapsed_readout_format() {
    assert_eq!(format_elapsed(75.9), "1:15");
    assert_eq!(format_elapsed(5.2), "0:05");
    assert_eq!(format_elapsed(0.0), "0:00");
    assert_eq!(format_elapsed(600.0), "10:00");
}

#[test]
fn ended_playback_restarts_with_one_click() {
    let mut player = mounted(10.0, true);
    player.handle(Message::PointerLeft);
    assert!(!player.state().controls_visible);

    player.element_mut().playing = false;
    player.on_ended();
    assert!(!player.state().is_playing);
    assert!(player.state().controls_visible);
    advance(&mut player, 3000);
    assert!(player.state().controls_visible);

    player.handle(Message::TogglePlay);
    assert!(player.state().is_playing);
    assert!(player.element().playing);
}
