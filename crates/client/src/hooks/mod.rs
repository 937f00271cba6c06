//! Mount-time initialization hooks.

pub mod init;

pub use init::{use_dark_mode_preference, use_locale_detection};
