//! HTTP route handlers

pub mod diagnostics;
pub mod templates;
pub mod uploads;
