//! Shell-level UI components.

pub mod dark_mode_switch;

pub use dark_mode_switch::*;
