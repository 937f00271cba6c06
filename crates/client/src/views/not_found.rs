use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "shell-content",
            section { class: "paper",
                h2 { "Page not found" }
                p { class: "subtitle", "Nothing lives at /{path}." }
                Link { to: Route::Dashboard {}, "Back to the dashboard" }
            }
        }
    }
}
