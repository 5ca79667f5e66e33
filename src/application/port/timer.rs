// SPDX-License-Identifier: MPL-2.0
//! Deferred action port definition.
//!
//! The widget arms one-shot timers through [`Scheduler`] and hears back when
//! they fire via the [`TimerId`] the scheduler issued. How the elapsed
//! notification is delivered is up to the host.

use crate::domain::video::TimerId;
use std::time::Duration;

/// Port for cancellable one-shot timers.
///
/// Identifiers must be unique for the lifetime of a scheduler so that a
/// notification from a cancelled timer can never be mistaken for a live one.
pub trait Scheduler {
    /// Arms a timer that fires once after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancels a pending timer. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn _assert_object_safe(_: &dyn Scheduler) {}

    #[derive(Default)]
    struct CountingScheduler {
        next: u64,
        pending: BTreeSet<TimerId>,
    }

    impl Scheduler for CountingScheduler {
        fn schedule(&mut self, _delay: Duration) -> TimerId {
            self.next += 1;
            let id = TimerId::new(self.next);
            self.pending.insert(id);
            id
        }

        fn cancel(&mut self, id: TimerId) {
            self.pending.remove(&id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut scheduler = CountingScheduler::default();
        let a = scheduler.schedule(Duration::from_secs(3));
        let b = scheduler.schedule(Duration::from_secs(3));
        assert_ne!(a, b);
    }

    #[test]
    fn cancel_removes_only_the_given_timer() {
        let mut scheduler = CountingScheduler::default();
        let a = scheduler.schedule(Duration::from_secs(1));
        let b = scheduler.schedule(Duration::from_secs(1));
        scheduler.cancel(a);
        assert!(!scheduler.pending.contains(&a));
        assert!(scheduler.pending.contains(&b));

        // Cancelling twice is harmless
        scheduler.cancel(a);
        assert_eq!(scheduler.pending.len(), 1);
    }
}
