// SPDX-License-Identifier: MPL-2.0
//! Deferred auto-dismissal.
//!
//! Every notification with a non-zero duration gets its own timer task that
//! carries the notification id by value. When the timer fires it emits
//! [`Message::Expired`], which the manager treats as an idempotent dismiss,
//! so timers are never cancelled.

use super::manager::Message;
use super::notification::NotificationId;
use iced::Task;
use std::time::Duration;

/// A pending expiry returned by [`Manager::push`](super::Manager::push).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub id: NotificationId,
    pub delay: Duration,
}

/// Turns an expiry into a task that reports `Expired(id)` after the delay.
pub fn schedule(expiry: Expiry) -> Task<Message> {
    Task::perform(elapse(expiry), |expired| expired)
}

/// Waits out the delay, then names the notification to remove.
///
/// The timer is created on first poll, so building the future outside a
/// runtime is fine.
async fn elapse(expiry: Expiry) -> Message {
    tokio::time::sleep(expiry.delay).await;
    Message::Expired(expiry.id)
}
