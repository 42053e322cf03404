//! Signal-backed View
//!
//! Implements the controller's `TaskView` over Leptos signals. Components
//! render from the handles; the controller only ever writes to them.

use std::cell::Cell;
use std::collections::HashMap;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use task_sync::{ClientConfig, NotificationKind, SubmitLabel, Task, TaskId, TaskView};

/// What one row currently shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowVisual {
    /// Checkbox control state
    pub checked: bool,
    /// Strike-through styling
    pub struck: bool,
}

impl RowVisual {
    pub fn from_completed(completed: bool) -> Self {
        Self { checked: completed, struck: completed }
    }
}

/// A transient toast
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    /// Set once the visible period is over, before removal
    pub fading: bool,
}

/// Rendering handles the view writes and the components read
#[derive(Clone, Copy)]
pub struct ViewHandles {
    pub tasks: RwSignal<Vec<Task>>,
    pub visuals: RwSignal<HashMap<TaskId, RowVisual>>,
    pub editing_id: RwSignal<Option<TaskId>>,
    pub counter: RwSignal<String>,
    pub submit_label: RwSignal<SubmitLabel>,
    pub input: RwSignal<String>,
    pub input_ref: NodeRef<Input>,
    pub notifications: RwSignal<Vec<Notification>>,
}

impl ViewHandles {
    pub fn new() -> Self {
        Self {
            tasks: RwSignal::new(Vec::new()),
            visuals: RwSignal::new(HashMap::new()),
            editing_id: RwSignal::new(None),
            counter: RwSignal::new(String::new()),
            submit_label: RwSignal::new(SubmitLabel::Add),
            input: RwSignal::new(String::new()),
            input_ref: NodeRef::new(),
            notifications: RwSignal::new(Vec::new()),
        }
    }

    pub fn visual(&self, id: TaskId) -> RowVisual {
        self.visuals.with(|v| v.get(&id).copied().unwrap_or_default())
    }

    /// Mirror a checkbox the browser has just flipped
    pub fn mark_checked(&self, id: TaskId, checked: bool) {
        self.visuals.update(|v| {
            if let Some(visual) = v.get_mut(&id) {
                visual.checked = checked;
            }
        });
    }
}

pub struct SignalView {
    handles: ViewHandles,
    notification_timeout: Duration,
    notification_fade: Duration,
    next_notification: Cell<u64>,
}

impl SignalView {
    pub fn new(handles: ViewHandles, config: &ClientConfig) -> Self {
        Self {
            handles,
            notification_timeout: config.notification_timeout,
            notification_fade: config.notification_fade,
            next_notification: Cell::new(0),
        }
    }
}

fn millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

impl TaskView for SignalView {
    fn render_tasks(&self, tasks: &[Task], editing_id: Option<TaskId>) {
        let visuals = tasks
            .iter()
            .map(|t| (t.id, RowVisual::from_completed(t.completed)))
            .collect();
        self.handles.visuals.set(visuals);
        self.handles.editing_id.set(editing_id);
        self.handles.tasks.set(tasks.to_vec());
    }

    fn update_task_in_ui(&self, id: TaskId, completed: bool) {
        self.handles.visuals.update(|v| {
            if let Some(visual) = v.get_mut(&id) {
                *visual = RowVisual::from_completed(completed);
            }
        });
    }

    fn set_counter_text(&self, text: String) {
        self.handles.counter.set(text);
    }

    fn update_submit_button(&self, label: SubmitLabel) {
        self.handles.submit_label.set(label);
    }

    fn input_value(&self) -> String {
        self.handles.input.get_untracked()
    }

    fn set_input_value(&self, value: &str) {
        self.handles.input.set(value.to_string());
    }

    fn focus_input(&self) {
        if let Some(input) = self.handles.input_ref.get_untracked() {
            let _ = input.focus();
        }
    }

    fn show_notification(&self, message: &str, kind: NotificationKind) {
        let id = self.next_notification.get();
        self.next_notification.set(id + 1);

        let notifications = self.handles.notifications;
        notifications.update(|list| {
            list.push(Notification {
                id,
                message: message.to_string(),
                kind,
                fading: false,
            })
        });

        let visible = millis(self.notification_timeout);
        let fade = millis(self.notification_fade);
        spawn_local(async move {
            TimeoutFuture::new(visible).await;
            notifications.try_update(|list| {
                if let Some(n) = list.iter_mut().find(|n| n.id == id) {
                    n.fading = true;
                }
            });
            TimeoutFuture::new(fade).await;
            notifications.try_update(|list| list.retain(|n| n.id != id));
        });
    }
}
