// SPDX-License-Identifier: MPL-2.0
//! Multi-stage questionnaire wizard.
//!
//! [`State`] holds the position, the visited stages and the answers, and
//! turns [`Message`]s into [`Event`]s. The view renders the current stage;
//! the final stage also shows a review of everything answered so far.

mod review;
mod state;
mod view;

pub use review::display_answer;
pub use state::{Event, Message, State};
pub use view::{view, ViewContext};
