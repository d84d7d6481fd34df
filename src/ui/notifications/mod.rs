// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about outcomes (answers
//! missing, responses saved, a file could not be written) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - `NotificationSpec`, `Notification`, kinds and actions
//! - [`manager`] - `Manager`, the ordered queue and its lifecycle
//! - [`expiry`] - per-notification auto-dismiss timers
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, NotificationSpec};
//!
//! let mut manager = Manager::new();
//! let task = manager
//!     .enqueue(NotificationSpec::success("Responses saved"))
//!     .map(Message::Notification);
//!
//! // In the view function
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! # Durations
//!
//! success/info 5 s, warning 6 s, error 8 s unless overridden; a zero
//! duration keeps the toast until it is dismissed.

mod expiry;
mod manager;
mod notification;
mod toast;

pub use expiry::{schedule, Expiry};
pub use manager::{Event as NotificationEvent, Manager, Message as NotificationMessage};
pub use notification::{
    Action, ActionStyle, Kind, Notification, NotificationId, NotificationSpec,
};
pub use toast::Toast;
