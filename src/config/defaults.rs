// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config, nor OS locale resolves.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Wizard Defaults
// ==========================================================================

/// Whether the user may advance past a stage with unanswered required questions
/// after confirming through the warning toast.
pub const DEFAULT_ALLOW_SKIP_REQUIRED: bool = true;

/// Whether in-progress answers are saved to the draft file after each change.
pub const DEFAULT_AUTOSAVE_DRAFT: bool = true;
