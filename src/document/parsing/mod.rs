//! Document parsing utilities
//!
//! This module contains the helpers that turn docx-rs paragraphs into the
//! plain facts extraction works on: text, style names and heading levels.

pub(crate) mod heading;
pub(crate) mod style;
pub(crate) mod text;
