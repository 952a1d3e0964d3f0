// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fire-and-forget dismissal timers.
//!
//! Feedback banners and the emergency visual mode are cleared automatically
//! after a fixed delay. Each dismissal is recorded with its fire time. When a
//! tokio runtime is available a task sleeps until that time and fires it;
//! hosts without a runtime call [`DismissalTimers::fire_due`] from their own
//! loop. Either way a dismissal runs at most once.
//!
//! Scheduled dismissals cannot be cancelled, and scheduling a new one never
//! affects those already pending.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::feedback::FeedbackId;

/// What a pending timer clears when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// Removes a feedback banner.
    Feedback(FeedbackId),
    /// Ends the emergency visual mode.
    EmergencyMode,
}

/// A dismissal waiting for its fire time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDismissal {
    /// What will be cleared.
    pub dismissal: Dismissal,
    /// When it fires.
    pub fire_at: Instant,
}

type Action = Box<dyn FnOnce() + Send>;

struct Entry {
    id: u64,
    pending: PendingDismissal,
    action: Action,
}

/// Registry of scheduled dismissals.
///
/// Cloning is cheap; clones share the same schedule.
#[derive(Clone, Default)]
pub struct DismissalTimers {
    next_id: Arc<AtomicU64>,
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl DismissalTimers {
    /// Creates an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to run once `delay` has elapsed.
    pub fn schedule<F>(&self, dismissal: Dismissal, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let fire_at = Instant::now() + delay;
        self.entries.lock().push(Entry {
            id,
            pending: PendingDismissal { dismissal, fire_at },
            action: Box::new(action),
        });
        tracing::trace!(?dismissal, ?delay, "Scheduled dismissal");

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let timers = self.clone();
                handle.spawn(async move {
                    tokio::time::sleep_until(fire_at).await;
                    timers.fire(id);
                });
            }
            Err(_) => {
                tracing::debug!(?dismissal, "No tokio runtime; dismissal waits for fire_due");
            }
        }
    }

    /// Fires every dismissal whose time has come, in fire-time order.
    ///
    /// Returns the number of dismissals fired.
    pub fn fire_due(&self, now: Instant) -> usize {
        let mut due: Vec<Entry> = {
            let mut entries = self.entries.lock();
            let (due, keep): (Vec<Entry>, Vec<Entry>) = entries
                .drain(..)
                .partition(|entry| entry.pending.fire_at <= now);
            *entries = keep;
            due
        };
        due.sort_by_key(|entry| (entry.pending.fire_at, entry.id));
        let fired = due.len();
        for entry in due {
            (entry.action)();
        }
        fired
    }

    /// Returns the dismissals still waiting to fire.
    #[must_use]
    pub fn pending(&self) -> Vec<PendingDismissal> {
        self.entries.lock().iter().map(|entry| entry.pending).collect()
    }

    /// Returns the number of dismissals still waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries.lock().len()
    }

    fn fire(&self, id: u64) {
        let entry = {
            let mut entries = self.entries.lock();
            entries
                .iter()
                .position(|entry| entry.id == id)
                .map(|index| entries.remove(index))
        };
        // Already fired through fire_due otherwise
        if let Some(entry) = entry {
            (entry.action)();
        }
    }
}

impl std::fmt::Debug for DismissalTimers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DismissalTimers")
            .field("pending", &self.pending_count())
            .finish()
    }
}
