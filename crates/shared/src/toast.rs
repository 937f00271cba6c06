//! Transient notification queue.

/// How long a toast stays up before it is dismissed automatically.
pub const TOAST_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast. A message that is already on screen is not shown
    /// twice; `None` is returned in that case.
    pub fn push(&mut self, message: impl Into<String>) -> Option<u64> {
        let message = message.into();
        if self.toasts.iter().any(|t| t.message == message) {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, message });
        Some(id)
    }

    /// Returns `true` if the toast was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
