//! Toast Notifications
//!
//! A loading toast is later resolved into a success or error toast in the
//! same slot, so an operation never leaves two toasts behind.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    /// When the toast was shown or last replaced, in ms
    pub shown_at: u64,
}

impl Toast {
    /// Loading toasts stay until resolved.
    pub fn expires_at(&self, timeout_ms: u64) -> Option<u64> {
        match self.kind {
            ToastKind::Loading => None,
            _ => Some(self.shown_at + timeout_ms),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToastCenter {
    last_id: u64,
    toasts: Vec<Toast>,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    fn show(&mut self, kind: ToastKind, message: &str, now_ms: u64) -> ToastId {
        self.last_id += 1;
        let id = ToastId(self.last_id);
        self.toasts.push(Toast { id, kind, message: message.to_string(), shown_at: now_ms });
        id
    }

    pub fn loading(&mut self, message: &str, now_ms: u64) -> ToastId {
        self.show(ToastKind::Loading, message, now_ms)
    }

    pub fn success(&mut self, message: &str, now_ms: u64) -> ToastId {
        self.show(ToastKind::Success, message, now_ms)
    }

    pub fn error(&mut self, message: &str, now_ms: u64) -> ToastId {
        log::warn!("{}", message);
        self.show(ToastKind::Error, message, now_ms)
    }

    /// Replace toast `id` in place. If it was already dismissed a new toast
    /// is shown instead, so the outcome is never lost.
    pub fn resolve(&mut self, id: ToastId, kind: ToastKind, message: &str, now_ms: u64) -> ToastId {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.kind = kind;
                toast.message = message.to_string();
                toast.shown_at = now_ms;
                id
            }
            None => self.show(kind, message, now_ms),
        }
    }

    pub fn resolve_success(&mut self, id: ToastId, message: &str, now_ms: u64) -> ToastId {
        self.resolve(id, ToastKind::Success, message, now_ms)
    }

    pub fn resolve_error(&mut self, id: ToastId, message: &str, now_ms: u64) -> ToastId {
        log::warn!("{}", message);
        self.resolve(id, ToastKind::Error, message, now_ms)
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every non-loading toast older than `timeout_ms`.
    pub fn expire(&mut self, now_ms: u64, timeout_ms: u64) -> usize {
        let before = self.toasts.len();
        self.toasts
            .retain(|t| t.expires_at(timeout_ms).map_or(true, |at| at > now_ms));
        before - self.toasts.len()
    }

    /// Earliest pending expiry, for scheduling the next sweep
    pub fn next_expiry(&self, timeout_ms: u64) -> Option<u64> {
        self.toasts.iter().filter_map(|t| t.expires_at(timeout_ms)).min()
    }
}
