//! Task Footer Component
//!
//! Completion counter and the clear-completed control.

use leptos::prelude::*;

use task_sync::Intent;

use crate::dispatcher::use_dispatcher;
use crate::view::ViewHandles;

#[component]
pub fn TaskFooter() -> impl IntoView {
    let handles = expect_context::<ViewHandles>();
    let dispatcher = use_dispatcher();

    view! {
        <footer class="task-footer">
            <span id="taskCount" class="task-count">{move || handles.counter.get()}</span>
            <button
                id="clearCompleted"
                class="clear-btn"
                on:click=move |_| dispatcher.send(Intent::ClearCompleted)
            >
                "Clear completed"
            </button>
        </footer>
    }
}
