//! chatdesk client - Dioxus application shell
//!
//! Theme and locale wiring for the chat-management front end. Builds for
//! the web (WASM) and for desktop.

pub mod api_client;
pub mod config;
pub mod logging;
pub mod storage;
pub mod theme;
pub mod toast;

pub mod components;
pub mod hooks;
pub mod routes;
pub mod views;

pub use api_client::ApiClient;
pub use routes::Route;
pub use theme::{use_theme, ThemeContext, ThemeProvider};
pub use toast::{use_toasts, ToastContainer, ToastContext, ToastProvider};
