// SPDX-License-Identifier: MPL-2.0
//! `invest_compass` is a bilingual investment-decision questionnaire built
//! with the Iced GUI framework.
//!
//! The user walks through seven stages of questions, gets glossary tooltips
//! for financial terms, and submits the answers to a local TOML file. The
//! interface is available in English and Simplified Chinese.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod questionnaire;
pub mod ui;
