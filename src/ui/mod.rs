// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns a `State`, renders from it, and turns its `Message`s into
//! `Event`s that the application reacts to.
//!
//! # Screens
//!
//! - [`wizard`] - The staged questionnaire and its review page
//! - [`settings`] - Language, theme and wizard preferences
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notification queue for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod wizard;
