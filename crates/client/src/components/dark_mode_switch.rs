use chatdesk_shared::labels_for;
use dioxus::prelude::*;

use crate::theme::use_theme;

/// The "Dark Mode" switch pinned to the top-right corner.
///
/// Its position is read from the theme mode, and a change writes the new
/// position straight back, so the two cannot drift apart.
#[component]
pub fn DarkModeSwitch() -> Element {
    let mut theme = use_theme();
    let checked = theme.checked();
    let locale = theme.locale();
    let label = labels_for(locale.as_ref()).dark_mode;

    rsx! {
        div { class: "dark-mode-switch",
            label { class: "switch-label",
                input {
                    r#type: "checkbox",
                    role: "switch",
                    aria_label: "controlled",
                    aria_checked: if checked { "true" } else { "false" },
                    class: "switch-input",
                    checked,
                    onchange: move |e: Event<FormData>| {
                        theme.set_checked(e.checked());
                    },
                }
                span { class: "switch-track",
                    span { class: "switch-thumb" }
                }
                span { class: "switch-text", "{label}" }
            }
        }
    }
}
