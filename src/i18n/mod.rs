// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time. English
//! (`en-US`) and Simplified Chinese (`zh-CN`) ship with the application;
//! English doubles as the fallback for keys missing in another locale.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Fallback to the default locale when a translation is missing

pub mod fluent;
