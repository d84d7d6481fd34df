// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered queue of active notifications. Enqueue
//! always appends, so insertion order is display order. Removal happens
//! either through an explicit dismiss or through the notification's own
//! expiry timer, and removing an id that is no longer present is a no-op.

use super::expiry::{self, Expiry};
use super::notification::{Action, Kind, Notification, NotificationId, NotificationSpec};
use crate::app::Message as AppMessage;
use iced::Task;
use std::collections::VecDeque;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user closed a toast.
    Dismiss(NotificationId),
    /// The expiry timer of a notification fired.
    Expired(NotificationId),
    /// The user pressed the action button at `index` on a toast.
    ActionPressed { id: NotificationId, index: usize },
    /// Drop every notification.
    ClearAll,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// An action button was pressed; the application handles its message.
    Action(AppMessage),
}

/// Manages the notification queue.
#[derive(Debug, Default)]
pub struct Manager {
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a notification and appends it to the queue.
    ///
    /// Returns the expiry the caller must schedule, or `None` when the
    /// resolved duration is zero (sticky notification).
    pub fn push(&mut self, spec: NotificationSpec) -> Option<Expiry> {
        let notification = Notification::from_spec(spec);
        let id = notification.id();
        debug_assert!(!self.contains(id));

        tracing::debug!(
            %id,
            kind = ?notification.kind(),
            duration_ms = notification.duration().as_millis() as u64,
            "notification enqueued"
        );

        let expiry = notification
            .auto_dismiss_after()
            .map(|delay| Expiry { id, delay });
        self.queue.push_back(notification);
        expiry
    }

    /// Enqueues a notification and schedules its expiry timer.
    pub fn enqueue(&mut self, spec: NotificationSpec) -> Task<Message> {
        self.push(spec).map_or_else(Task::none, expiry::schedule)
    }

    /// Queues a success toast with the kind default duration.
    pub fn success(
        &mut self,
        title: impl Into<String>,
        message: Option<String>,
        actions: Vec<Action>,
    ) -> Task<Message> {
        self.enqueue_kind(Kind::Success, title, message, actions)
    }

    pub fn info(
        &mut self,
        title: impl Into<String>,
        message: Option<String>,
        actions: Vec<Action>,
    ) -> Task<Message> {
        self.enqueue_kind(Kind::Info, title, message, actions)
    }

    pub fn warning(
        &mut self,
        title: impl Into<String>,
        message: Option<String>,
        actions: Vec<Action>,
    ) -> Task<Message> {
        self.enqueue_kind(Kind::Warning, title, message, actions)
    }

    pub fn error(
        &mut self,
        title: impl Into<String>,
        message: Option<String>,
        actions: Vec<Action>,
    ) -> Task<Message> {
        self.enqueue_kind(Kind::Error, title, message, actions)
    }

    fn enqueue_kind(
        &mut self,
        kind: Kind,
        title: impl Into<String>,
        message: Option<String>,
        actions: Vec<Action>,
    ) -> Task<Message> {
        self.enqueue(
            NotificationSpec::new(kind, title)
                .with_optional_message(message)
                .with_actions(actions),
        )
    }

    /// Removes the notification with `id` if it is still queued.
    pub fn dismiss(&mut self, id: NotificationId) {
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            tracing::debug!(%id, "notification dismissed");
        }
    }

    /// Empties the queue. Pending expiry timers are left to fire as no-ops.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) -> Event {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
                Event::None
            }
            Message::Expired(id) => {
                if self.contains(id) {
                    tracing::debug!(%id, "notification expired");
                }
                self.dismiss(id);
                Event::None
            }
            Message::ActionPressed { id, index } => {
                let forwarded = self
                    .get(id)
                    .and_then(|n| n.actions().get(index))
                    .map(|action| action.on_press().clone());
                self.dismiss(id);
                forwarded.map_or(Event::None, Event::Action)
            }
            Message::ClearAll => {
                self.clear();
                Event::None
            }
        }
    }

    /// Read-only snapshot of the queue in display order (oldest first).
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.queue.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::wizard::Message as WizardMessage;
    use std::time::Duration;

    fn ids(manager: &Manager) -> Vec<NotificationId> {
        manager.notifications().map(Notification::id).collect()
    }

    /// Delivers every expiry whose delay is within `elapsed`, as the timer
    /// tasks would after that much time.
    fn advance(manager: &mut Manager, expiries: &[Expiry], elapsed: Duration) {
        for expiry in expiries.iter().filter(|e| e.delay <= elapsed) {
            manager.handle_message(Message::Expired(expiry.id));
        }
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn push_appends_with_fresh_id() {
        let mut manager = Manager::new();
        for i in 0..10 {
            let before = ids(&manager);
            manager.push(NotificationSpec::info(format!("n-{i}")));
            let after = ids(&manager);

            assert_eq!(after.len(), before.len() + 1);
            let newest = *after.last().unwrap();
            assert!(!before.contains(&newest));
        }
    }

    #[test]
    fn push_returns_expiry_for_own_id() {
        let mut manager = Manager::new();
        let expiry = manager.push(NotificationSpec::success("saved")).unwrap();
        let newest = manager.notifications().last().unwrap();

        assert_eq!(expiry.id, newest.id());
        assert_eq!(expiry.delay, Duration::from_millis(5000));
    }

    #[test]
    fn default_durations_are_applied() {
        let mut manager = Manager::new();
        let error = manager.push(NotificationSpec::error("e")).unwrap();
        let warning = manager.push(NotificationSpec::warning("w")).unwrap();
        let success = manager.push(NotificationSpec::success("s")).unwrap();
        let info = manager.push(NotificationSpec::info("i")).unwrap();

        assert_eq!(error.delay, Duration::from_millis(8000));
        assert_eq!(warning.delay, Duration::from_millis(6000));
        assert_eq!(success.delay, Duration::from_millis(5000));
        assert_eq!(info.delay, Duration::from_millis(5000));
    }

    #[test]
    fn dismiss_twice_equals_dismiss_once() {
        let mut manager = Manager::new();
        manager.push(NotificationSpec::success("a"));
        let target = manager.push(NotificationSpec::success("b")).unwrap().id;
        manager.push(NotificationSpec::success("c"));

        manager.dismiss(target);
        let once = ids(&manager);
        manager.dismiss(target);
        assert_eq!(ids(&manager), once);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn dismiss_unknown_id_leaves_queue_unchanged() {
        let mut manager = Manager::new();
        manager.push(NotificationSpec::info("kept"));
        let before = ids(&manager);

        manager.dismiss(NotificationId::new());
        assert_eq!(ids(&manager), before);
    }

    #[test]
    fn clear_always_empties() {
        let mut manager = Manager::new();
        manager.clear();
        assert!(manager.is_empty());

        for i in 0..5 {
            manager.push(NotificationSpec::warning(format!("w-{i}")));
        }
        manager.handle_message(Message::ClearAll);
        assert!(manager.is_empty());
    }

    #[test]
    fn zero_duration_is_never_auto_removed() {
        let mut manager = Manager::new();
        let expiry = manager.push(NotificationSpec::error("pinned").sticky());
        assert!(expiry.is_none());

        let other = manager.push(NotificationSpec::info("transient")).unwrap();
        advance(&mut manager, &[other], Duration::from_secs(60 * 60 * 24));

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.notifications().next().unwrap().title(), "pinned");
    }

    #[test]
    fn expiry_removes_only_its_own_notification() {
        let mut manager = Manager::new();
        let first = manager.push(NotificationSpec::success("first")).unwrap();
        let second = manager.push(NotificationSpec::error("second")).unwrap();

        advance(&mut manager, &[first, second], Duration::from_millis(5000));

        assert_eq!(ids(&manager), vec![second.id]);
    }

    #[test]
    fn expiry_after_manual_dismiss_is_noop() {
        let mut manager = Manager::new();
        let expiry = manager.push(NotificationSpec::success("gone")).unwrap();
        manager.push(NotificationSpec::info("stays").sticky());

        manager.handle_message(Message::Dismiss(expiry.id));
        let before = ids(&manager);
        manager.handle_message(Message::Expired(expiry.id));

        assert_eq!(ids(&manager), before);
    }

    #[test]
    fn expiry_after_clear_is_noop() {
        let mut manager = Manager::new();
        let expiry = manager.push(NotificationSpec::warning("w")).unwrap();
        manager.clear();
        manager.push(NotificationSpec::info("fresh"));

        manager.handle_message(Message::Expired(expiry.id));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn saved_failed_low_space_scenario() {
        let mut manager = Manager::new();
        let _ = manager.success("Saved", None, Vec::new());
        let _ = manager.error("Failed", Some("disk full".into()), Vec::new());
        let _ = manager.warning("Low space", None, Vec::new());

        let snapshot: Vec<(&str, Duration)> = manager
            .notifications()
            .map(|n| (n.title(), n.duration()))
            .collect();
        assert_eq!(
            snapshot,
            vec![
                ("Saved", Duration::from_millis(5000)),
                ("Failed", Duration::from_millis(8000)),
                ("Low space", Duration::from_millis(6000)),
            ]
        );

        let middle = manager.notifications().nth(1).unwrap().id();
        manager.dismiss(middle);

        let titles: Vec<&str> = manager.notifications().map(Notification::title).collect();
        assert_eq!(titles, vec!["Saved", "Low space"]);
    }

    #[test]
    fn action_press_forwards_message_and_dismisses() {
        let mut manager = Manager::new();
        manager.push(
            NotificationSpec::warning("Missing answers")
                .with_action(Action::new("Continue", AppMessage::Wizard(WizardMessage::ForceNext))),
        );
        let id = manager.notifications().next().unwrap().id();

        let event = manager.handle_message(Message::ActionPressed { id, index: 0 });

        assert!(matches!(event, Event::Action(AppMessage::Wizard(WizardMessage::ForceNext))));
        assert!(manager.is_empty());
    }

    #[test]
    fn kind_sugar_attaches_message_and_actions() {
        let mut manager = Manager::new();
        let _ = manager.error(
            "Could not save responses",
            Some("disk full".into()),
            vec![Action::new("Retry", AppMessage::Wizard(WizardMessage::Submit))],
        );
        let _ = manager.info("Starting over", None, Vec::new());

        let failed = manager.notifications().next().unwrap();
        assert_eq!(failed.kind(), Kind::Error);
        assert_eq!(failed.message(), Some("disk full"));
        assert_eq!(failed.actions().len(), 1);
        assert_eq!(failed.actions()[0].label(), "Retry");

        let restarted = manager.notifications().nth(1).unwrap();
        assert_eq!(restarted.kind(), Kind::Info);
        assert!(restarted.message().is_none());
        assert!(restarted.actions().is_empty());
    }

    #[test]
    fn action_press_on_absent_notification_is_ignored() {
        let mut manager = Manager::new();
        let event = manager.handle_message(Message::ActionPressed {
            id: NotificationId::new(),
            index: 0,
        });
        assert!(matches!(event, Event::None));
    }
}
