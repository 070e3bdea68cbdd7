// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-slot cancellable debounce timer.
//!
//! Arming the slot replaces any pending shot, so a burst of triggers within
//! the delay window collapses into one execution after quiescence. This is a
//! debounce, not a rate limit: every arm restarts the window from zero.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// A one-shot timer slot holding at most one pending task.
///
/// Requires a tokio runtime; tasks are spawned and the delay uses tokio's
/// clock, so tests can drive it with paused time.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use thermozone::timer::DebounceSlot;
///
/// # async fn example() {
/// let slot = DebounceSlot::new();
/// slot.arm(Duration::from_secs(30), async {
///     // runs once, 30 s after the last arm
/// });
/// // re-arming cancels the pending shot and restarts the window
/// slot.arm(Duration::from_secs(30), async {});
/// # }
/// ```
#[derive(Debug, Default)]
pub struct DebounceSlot {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl DebounceSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the slot: after `delay` of quiescence, runs `task`.
    ///
    /// Any previously pending shot is aborted first.
    pub fn arm<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut slot = self.handle.lock();
        if let Some(pending) = slot.take() {
            pending.abort();
        }
        // Anchor the window at arm time, not at the task's first poll.
        let deadline = tokio::time::Instant::now() + delay;
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task.await;
        }));
    }

    /// Cancels any pending shot.
    pub fn cancel(&self) {
        if let Some(pending) = self.handle.lock().take() {
            pending.abort();
        }
    }

    /// Returns whether a shot is pending (armed and not yet fired).
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.handle
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DebounceSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
