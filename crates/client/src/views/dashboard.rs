use dioxus::prelude::*;

/// Landing view inside the themed shell.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "shell",
            header { class: "toolbar",
                span { class: "toolbar-title", "chatdesk" }
            }
            div { class: "shell-body",
                nav { class: "menu",
                    span { class: "menu-item menu-item-active", "Conversations" }
                    span { class: "menu-item", "Contacts" }
                    span { class: "menu-item", "Queues" }
                }
                div { class: "shell-content",
                    div { class: "subheader", "Conversations" }
                    section { class: "paper",
                        p { class: "subtitle", "Pick a queue from the menu to start attending." }
                    }
                }
            }
        }
    }
}
