// SPDX-License-Identifier: MPL-2.0
//! Iced adapter implementing the [`Scheduler`] port trait.
//!
//! Each timer is an abortable [`Task`] around a Tokio sleep that resolves to
//! its [`TimerId`]. The scheduler cannot run tasks itself: the host drains
//! them with [`TaskScheduler::take_tasks`] after every update and maps the
//! resulting ids into its own messages.
//!
//! [`Scheduler`]: crate::application::port::Scheduler

use crate::application::port::{Scheduler, TimerId};
use iced::task::{self, Task};
use std::collections::HashMap;
use std::time::Duration;

/// Hide timers backed by abortable Iced tasks.
#[derive(Default)]
pub struct TaskScheduler {
    next_id: u64,
    handles: HashMap<TimerId, task::Handle>,
    queued: Vec<Task<TimerId>>,
}

impl std::fmt::Debug for TaskScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("next_id", &self.next_id)
            .field("pending", &self.handles.len())
            .field("queued", &self.queued.len())
            .finish()
    }
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every task scheduled since the last call, batched.
    pub fn take_tasks(&mut self) -> Task<TimerId> {
        Task::batch(std::mem::take(&mut self.queued))
    }

    /// Forgets a timer that has fired.
    pub fn complete(&mut self, id: TimerId) {
        self.handles.remove(&id);
    }

    /// Number of timers armed and neither fired nor cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.handles.len()
    }
}

impl Scheduler for TaskScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);

        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| id,
        )
        .abortable();

        self.handles.insert(id, handle);
        self.queued.push(task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.handles.remove(&id) {
            handle.abort();
        }
    }
}
