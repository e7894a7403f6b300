//! Platform-specific implementations
//!
//! Desktop integration for the demo: opening the start page in the user's
//! default browser.

pub mod browser;

pub use browser::{schedule_open, SystemOpener, UrlOpener};
