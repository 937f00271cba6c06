//! Shared types and platform-independent logic for the chatdesk client.
//!
//! Everything here is plain Rust with no UI runtime attached, so the
//! theme, locale and settings rules can be exercised natively.

pub mod config;
pub mod error;
pub mod locale;
pub mod settings;
pub mod theme;
pub mod theme_state;
pub mod toast;

pub use config::*;
pub use error::*;
pub use locale::*;
pub use settings::*;
pub use theme::*;
pub use theme_state::*;
pub use toast::*;
