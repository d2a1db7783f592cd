use yew::prelude::*;

use crate::services::notify::{Notification, NotificationKind};

#[derive(Properties, PartialEq)]
pub struct SnackbarProps {
    pub notification: Option<Notification>,
}

/// Renders the current ambient notification, if any. Placement and
/// dismissal are owned by the notifier; this component only displays.
#[function_component(Snackbar)]
pub fn snackbar(props: &SnackbarProps) -> Html {
    let Some(notification) = &props.notification else {
        return html! {};
    };

    let class = match notification.kind {
        NotificationKind::Success => "snackbar success",
        NotificationKind::Error => "snackbar error",
        NotificationKind::Warning => "snackbar warning",
    };

    html! {
        <div {class} role="status">
            {&notification.message}
        </div>
    }
}
