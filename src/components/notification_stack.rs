//! Notification Stack Component
//!
//! Bottom-right toasts. Removal is driven by `SignalView`'s timers.

use leptos::prelude::*;

use task_sync::NotificationKind;

use crate::view::ViewHandles;

fn notification_class(kind: NotificationKind, fading: bool) -> String {
    let mut c = String::from("notification");
    c.push_str(match kind {
        NotificationKind::Success => " success",
        NotificationKind::Error => " error",
    });
    if fading {
        c.push_str(" fading");
    }
    c
}

#[component]
pub fn NotificationStack() -> impl IntoView {
    let handles = expect_context::<ViewHandles>();

    view! {
        <div class="notification-stack">
            <For
                each=move || handles.notifications.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let kind = n.kind;
                    let fading = move || {
                        handles.notifications.with(|list| list.iter().any(|x| x.id == id && x.fading))
                    };
                    view! {
                        <div class=move || notification_class(kind, fading()) role="status">
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
