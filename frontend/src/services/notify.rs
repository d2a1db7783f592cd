use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long a toast stays on screen before auto-dismissing.
const DISMISS_AFTER_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Ambient success/error toasts, shared across screens via Yew context.
///
/// Workflows call `notify` (or a kind-specific helper) instead of owning
/// any toast state themselves; the snackbar component renders whatever is
/// current and the message clears itself after a few seconds.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    current: UseStateHandle<Option<Notification>>,
}

impl Notifier {
    pub fn new(current: UseStateHandle<Option<Notification>>) -> Self {
        Self { current }
    }

    pub fn current(&self) -> Option<Notification> {
        (*self.current).clone()
    }

    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        self.current.set(Some(Notification {
            kind,
            message: message.into(),
        }));

        let current = self.current.clone();
        spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            current.set(None);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Warning, message);
    }
}

/// Fetch the ambient notifier provided by the app shell.
#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier context not provided")
}
