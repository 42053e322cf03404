//! Task List Component

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::view::ViewHandles;

/// All rows, or a placeholder when there are none
#[component]
pub fn TaskList() -> impl IntoView {
    let handles = expect_context::<ViewHandles>();
    let has_tasks = move || handles.tasks.with(|t| !t.is_empty());

    view! {
        <Show
            when=has_tasks
            fallback=|| view! { <p class="empty-state">"No tasks yet. Add one above!"</p> }
        >
            <ul id="taskList" class="task-list">
                <For
                    each=move || handles.tasks.get()
                    // Title is part of the key so a renamed task gets a fresh row
                    key=|task| (task.id, task.title.clone())
                    children=move |task| view! { <TaskItem task=task /> }
                />
            </ul>
        </Show>
    }
}
