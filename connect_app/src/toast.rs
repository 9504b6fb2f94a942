use connect_domain::error::CcError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Notifications waiting to be displayed, oldest first.
#[derive(Default, Debug)]
pub struct Toasts {
    pending: Vec<Toast>,
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, error: &CcError) {
        self.push(ToastKind::Error, error.user_message());
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.pending.last()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Hand every pending toast to the renderer.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.pending)
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        tracing::debug!(?kind, "toast: {message}");
        self.pending.push(Toast { kind, message });
    }
}
