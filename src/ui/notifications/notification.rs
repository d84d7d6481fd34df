// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! Callers describe a notification with a [`NotificationSpec`]; the
//! [`Manager`](super::Manager) turns it into a [`Notification`] by assigning
//! the id, the creation time and the resolved auto-dismiss duration.

use crate::app::Message as AppMessage;
use crate::ui::design_tokens::palette;
use chrono::{DateTime, Local};
use iced::Color;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Auto-dismiss delay for success notifications.
pub const SUCCESS_DURATION: Duration = Duration::from_millis(5000);
/// Auto-dismiss delay for info notifications.
pub const INFO_DURATION: Duration = Duration::from_millis(5000);
/// Auto-dismiss delay for warning notifications.
pub const WARNING_DURATION: Duration = Duration::from_millis(6000);
/// Auto-dismiss delay for error notifications.
pub const ERROR_DURATION: Duration = Duration::from_millis(8000);

/// Unique identifier for a notification.
///
/// Ids come from a process-wide monotonic counter, so an id is never reused
/// while the process lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of notification; fixes the accent color and the default duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Success,
    Info,
    Warning,
    Error,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Info, Kind::Warning, Kind::Error];

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration applied when the caller sets none.
    #[must_use]
    pub fn default_duration(self) -> Duration {
        match self {
            Kind::Success => SUCCESS_DURATION,
            Kind::Info => INFO_DURATION,
            Kind::Warning => WARNING_DURATION,
            Kind::Error => ERROR_DURATION,
        }
    }

    /// Glyph rendered at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Info => "ℹ",
            Kind::Warning => "⚠",
            Kind::Error => "✕",
        }
    }
}

/// Visual style of an action button inside a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStyle {
    #[default]
    Primary,
    Secondary,
    Danger,
}

/// A button shown on a toast. Pressing it forwards `on_press` to the
/// application and dismisses the toast.
#[derive(Debug, Clone)]
pub struct Action {
    label: String,
    style: ActionStyle,
    on_press: AppMessage,
}

impl Action {
    pub fn new(label: impl Into<String>, on_press: AppMessage) -> Self {
        Self {
            label: label.into(),
            style: ActionStyle::default(),
            on_press,
        }
    }

    #[must_use]
    pub fn style(mut self, style: ActionStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn action_style(&self) -> ActionStyle {
        self.style
    }

    #[must_use]
    pub fn on_press(&self) -> &AppMessage {
        &self.on_press
    }
}

/// Caller-supplied description of a notification.
///
/// Callers never choose the id or creation time; both are assigned
/// when the manager accepts it.
#[derive(Debug, Clone)]
pub struct NotificationSpec {
    kind: Kind,
    title: String,
    message: Option<String>,
    duration: Option<Duration>,
    actions: Vec<Action>,
}

impl NotificationSpec {
    pub fn new(kind: Kind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: None,
            duration: None,
            actions: Vec::new(),
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Kind::Success, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Kind::Info, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Kind::Warning, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Kind::Error, title)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the message only when one is given; `None` keeps the current one.
    #[must_use]
    pub fn with_optional_message(mut self, message: Option<String>) -> Self {
        if let Some(message) = message {
            self.message = Some(message);
        }
        self
    }

    /// Overrides the kind default. `Duration::ZERO` disables auto-dismiss.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the notification until it is dismissed explicitly.
    #[must_use]
    pub fn sticky(self) -> Self {
        self.with_duration(Duration::ZERO)
    }

    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Appends buttons in order after any already attached.
    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A notification accepted into the queue.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: String,
    message: Option<String>,
    duration: Duration,
    actions: Vec<Action>,
    created_at: DateTime<Local>,
}

impl Notification {
    /// Materializes a spec: fresh id, `created_at = now`, resolved duration.
    pub(super) fn from_spec(spec: NotificationSpec) -> Self {
        let duration = spec
            .duration
            .unwrap_or_else(|| spec.kind.default_duration());
        Self {
            id: NotificationId::new(),
            kind: spec.kind,
            title: spec.title,
            message: spec.message,
            duration,
            actions: spec.actions,
            created_at: Local::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Resolved auto-dismiss duration; zero means the toast is sticky.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Delay after which the notification expires, if it expires at all.
    #[must_use]
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        (!self.duration.is_zero()).then_some(self.duration)
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Message;
    use crate::ui::wizard;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::from_spec(NotificationSpec::success("test"));
        let n2 = Notification::from_spec(NotificationSpec::success("test"));
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn kind_colors_are_distinct() {
        for (i, a) in Kind::ALL.iter().enumerate() {
            for b in &Kind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn default_durations_follow_kind() {
        assert_eq!(Kind::Success.default_duration(), Duration::from_millis(5000));
        assert_eq!(Kind::Info.default_duration(), Duration::from_millis(5000));
        assert_eq!(Kind::Warning.default_duration(), Duration::from_millis(6000));
        assert_eq!(Kind::Error.default_duration(), Duration::from_millis(8000));
    }

    #[test]
    fn explicit_duration_overrides_kind_default() {
        let n = Notification::from_spec(
            NotificationSpec::error("boom").with_duration(Duration::from_millis(1500)),
        );
        assert_eq!(n.duration(), Duration::from_millis(1500));
        assert_eq!(n.auto_dismiss_after(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn sticky_notification_never_auto_dismisses() {
        let n = Notification::from_spec(NotificationSpec::info("pinned").sticky());
        assert_eq!(n.duration(), Duration::ZERO);
        assert!(n.auto_dismiss_after().is_none());
    }

    #[test]
    fn spec_builder_carries_message_and_actions() {
        let spec = NotificationSpec::error("Could not save responses")
            .with_message("Disk full")
            .with_action(Action::new("Retry", Message::Wizard(wizard::Message::Submit)))
            .with_action(
                Action::new("Ignore", Message::Wizard(wizard::Message::Restart)).style(ActionStyle::Secondary),
            );
        let n = Notification::from_spec(spec);

        assert_eq!(n.kind(), Kind::Error);
        assert_eq!(n.title(), "Could not save responses");
        assert_eq!(n.message(), Some("Disk full"));
        assert_eq!(n.actions().len(), 2);
        assert_eq!(n.actions()[0].label(), "Retry");
        assert_eq!(n.actions()[1].action_style(), ActionStyle::Secondary);
    }

    #[test]
    fn absent_optional_message_keeps_existing_one() {
        let kept = NotificationSpec::info("Draft restored")
            .with_message("3 answers")
            .with_optional_message(None);
        assert_eq!(Notification::from_spec(kept).message(), Some("3 answers"));

        let replaced = NotificationSpec::info("Draft restored")
            .with_message("3 answers")
            .with_optional_message(Some("4 answers".into()));
        assert_eq!(Notification::from_spec(replaced).message(), Some("4 answers"));
    }

    #[test]
    fn with_actions_appends_in_order() {
        let spec = NotificationSpec::success("Saved")
            .with_action(Action::new("Open", Message::Wizard(wizard::Message::Submit)))
            .with_actions([
                Action::new("Start over", Message::Wizard(wizard::Message::Restart)),
                Action::new("Keep", Message::Wizard(wizard::Message::Previous)),
            ]);
        let notification = Notification::from_spec(spec);
        let labels: Vec<&str> = notification
            .actions()
            .iter()
            .map(Action::label)
            .collect();
        assert_eq!(labels, vec!["Open", "Start over", "Keep"]);
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(NotificationSpec::success("").kind(), Kind::Success);
        assert_eq!(NotificationSpec::info("").kind(), Kind::Info);
        assert_eq!(NotificationSpec::warning("").kind(), Kind::Warning);
        assert_eq!(NotificationSpec::error("").kind(), Kind::Error);
    }
}
