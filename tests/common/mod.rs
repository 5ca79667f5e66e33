// SPDX-License-Identifier: MPL-2.0
//! Shared fakes for integration tests: a scripted media element and a
//! virtual-clock scheduler.

#![allow(dead_code)]

use iced_showreel::application::port::{MediaElement, Scheduler, TimerId};
use iced_showreel::error::MediaError;
use iced_showreel::video_player::{Message, VideoPlayer};
use std::collections::BTreeMap;
use std::time::Duration;

/// Media element whose readings are set directly by the test.
#[derive(Debug)]
pub struct MockElement {
    pub current_time: f64,
    pub duration: f64,
    pub playing: bool,
    pub volume: f32,
    pub muted: bool,
    pub fullscreen_requests: u32,
    pub fullscreen_allowed: bool,
}

impl MockElement {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            current_time: 0.0,
            duration,
            playing: false,
            volume: 1.0,
            muted: false,
            fullscreen_requests: 0,
            fullscreen_allowed: true,
        }
    }
}

impl MediaElement for MockElement {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_current_time(&mut self, secs: f64) {
        self.current_time = secs;
    }

    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn request_fullscreen(&mut self) -> Result<(), MediaError> {
        self.fullscreen_requests += 1;
        if self.fullscreen_allowed {
            Ok(())
        } else {
            Err(MediaError::FullscreenRejected("denied by test".into()))
        }
    }
}

/// Scheduler driven by a manually advanced clock.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<TimerId, Duration>,
    /// Every timer ever scheduled, in order.
    pub scheduled: Vec<TimerId>,
    /// Every timer ever cancelled, in order.
    pub cancelled: Vec<TimerId>,
}

impl VirtualClock {
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward, returning the timers that fired.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;
        let fired: Vec<TimerId> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in &fired {
            self.pending.remove(id);
        }
        fired
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        self.pending.insert(id, self.now + delay);
        self.scheduled.push(id);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.remove(&id);
        self.cancelled.push(id);
    }
}

pub type TestPlayer = VideoPlayer<MockElement, VirtualClock>;

/// Advances the virtual clock and delivers every fired timer to the player.
pub fn advance(player: &mut TestPlayer, millis: u64) {
    let fired = player
        .scheduler_mut()
        .advance(Duration::from_millis(millis));
    for id in fired {
        player.handle(Message::HideTimerElapsed(id));
    }
}
