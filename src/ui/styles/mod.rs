// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles.

pub mod button;
pub mod container;
pub mod tooltip;

use iced::Theme;

/// Whether the theme paints a dark page background.
pub(crate) fn has_dark_background(theme: &Theme) -> bool {
    let bg = theme.palette().background;
    (bg.r + bg.g + bg.b) / 3.0 < 0.5
}
