use yewdux::Store;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: u32 = 4_000;

/// Visual tone of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// DaisyUI alert class.
    #[must_use]
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Info => "alert-info",
        }
    }
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct Notifications {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl Notifications {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Toasts on screen.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_after_dismissal() {
        let mut notifications = Notifications::default();
        let first = notifications.push(ToastKind::Success, "Saved");
        notifications.dismiss(first);
        let second = notifications.push(ToastKind::Error, "Failed");
        assert_ne!(first, second);
        assert_eq!(notifications.toasts().len(), 1);
        assert_eq!(notifications.toasts()[0].message, "Failed");
    }

    #[test]
    fn dismiss_keeps_order_of_the_rest() {
        let mut notifications = Notifications::default();
        let a = notifications.push(ToastKind::Info, "a");
        let b = notifications.push(ToastKind::Info, "b");
        let c = notifications.push(ToastKind::Info, "c");
        notifications.dismiss(b);
        notifications.dismiss(99);
        let ids: Vec<_> = notifications.toasts().iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn alert_classes() {
        assert_eq!(ToastKind::Success.alert_class(), "alert-success");
        assert_eq!(ToastKind::Error.alert_class(), "alert-error");
    }
}
