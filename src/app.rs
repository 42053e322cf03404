//! Task List App
//!
//! Wires the signal-backed view, the HTTP client and the controller, then
//! lays out the form, the list and the footer.

use leptos::prelude::*;

use task_sync::{ClientConfig, HttpTaskApi, SyncController};

use crate::components::{NotificationStack, TaskFooter, TaskForm, TaskList};
use crate::confirm::BrowserConfirm;
use crate::dispatcher::Dispatcher;
use crate::view::{SignalView, ViewHandles};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let handles = ViewHandles::new();
    let controller = SyncController::new(
        HttpTaskApi::new(&config),
        SignalView::new(handles, &config),
        BrowserConfirm,
    );
    let dispatcher = Dispatcher::new(controller);

    // Provide context to all children
    provide_context(handles);
    provide_context(dispatcher);

    // Load once on mount
    Effect::new(move |_| dispatcher.init());

    view! {
        <main class="task-app">
            <h1>"Tasks"</h1>
            <TaskForm />
            <TaskList />
            <TaskFooter />
            <NotificationStack />
        </main>
    }
}
