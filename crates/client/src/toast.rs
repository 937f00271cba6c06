//! Toast notifications.

use chatdesk_shared::{ToastQueue, TOAST_TIMEOUT_MS};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct ToastContext {
    pub queue: Signal<ToastQueue>,
}

impl ToastContext {
    /// Show an error toast that goes away on its own.
    pub fn push_error(&mut self, message: impl Into<String>) {
        let Some(id) = self.queue.write().push(message) else {
            return;
        };

        let mut queue = self.queue;
        spawn(async move {
            sleep_ms(TOAST_TIMEOUT_MS).await;
            queue.write().dismiss(id);
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>()
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// Provides [`ToastContext`] to its children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::new);
    use_context_provider(|| ToastContext { queue });

    children
}

/// Renders the visible toasts in the bottom-right corner.
#[component]
pub fn ToastContainer() -> Element {
    let mut toasts = use_toasts();
    let visible = toasts.queue.read().toasts().to_vec();

    rsx! {
        div { class: "toast-container",
            for toast in visible {
                div {
                    key: "{toast.id}",
                    class: "toast toast-error",
                    role: "alert",
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: {
                            let id = toast.id;
                            move |_| toasts.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
