//! chatdesk client - Main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use chatdesk_client::{
    components::DarkModeSwitch, routes::Route, ThemeProvider, ToastContainer, ToastProvider,
};
use dioxus::prelude::*;

// Assets
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("chatdesk_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            ThemeProvider {
                Router::<Route> {}
                DarkModeSwitch {}
                ToastContainer {}
            }
        }
    }
}
