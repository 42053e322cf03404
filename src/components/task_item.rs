//! Task Item Component
//!
//! One row of the list, drawn as a normal row or an edit row.

use leptos::prelude::*;

use task_sync::{Intent, Task, TaskId};

use crate::dispatcher::use_dispatcher;
use crate::view::ViewHandles;

fn row_class(struck: bool) -> &'static str {
    if struck {
        "task-row completed"
    } else {
        "task-row"
    }
}

fn title_class(struck: bool) -> &'static str {
    if struck {
        "task-title line-through"
    } else {
        "task-title"
    }
}

/// A single task row
#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let handles = expect_context::<ViewHandles>();
    let dispatcher = use_dispatcher();

    let id = task.id;
    let title = task.title;
    let visual = move || handles.visual(id);
    let is_editing = move || handles.editing_id.get() == Some(id);

    // The browser has already flipped the box when this runs
    let on_toggle = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        handles.mark_checked(id, checked);
        dispatcher.send(Intent::ToggleCompleted { id, completed: checked });
    };

    view! {
        <li class=move || row_class(visual().struck) data-id=id.to_string()>
            <input
                type="checkbox"
                class="task-checkbox"
                prop:checked=move || visual().checked
                on:change=on_toggle
            />
            {move || {
                let title = title.clone();
                if is_editing() {
                    view! { <EditControls id=id title=title /> }.into_any()
                } else {
                    view! { <NormalControls id=id title=title /> }.into_any()
                }
            }}
        </li>
    }
}

#[component]
fn NormalControls(id: TaskId, title: String) -> impl IntoView {
    let handles = expect_context::<ViewHandles>();
    let dispatcher = use_dispatcher();
    let edit_title = title.clone();

    view! {
        <span class=move || title_class(handles.visual(id).struck)>{title}</span>
        <div class="task-actions">
            <button
                class="edit-btn"
                title="Edit"
                on:click=move |_| dispatcher.send(Intent::StartEdit { id, title: edit_title.clone() })
            >
                "✎"
            </button>
            <button
                class="delete-btn"
                title="Delete"
                on:click=move |_| dispatcher.send(Intent::Delete { id })
            >
                "×"
            </button>
        </div>
    }
}

#[component]
fn EditControls(id: TaskId, title: String) -> impl IntoView {
    let dispatcher = use_dispatcher();
    let edit_text = RwSignal::new(title);

    view! {
        <input
            type="text"
            class="edit-input"
            prop:value=move || edit_text.get()
            on:input=move |ev| edit_text.set(event_target_value(&ev))
        />
        <div class="task-actions">
            <button
                class="save-edit-btn"
                title="Save"
                on:click=move |_| dispatcher.send(Intent::SaveEdit { id, title: edit_text.get_untracked() })
            >
                "✓"
            </button>
            <button
                class="cancel-edit-btn"
                title="Cancel"
                on:click=move |_| dispatcher.send(Intent::CancelEdit)
            >
                "✗"
            </button>
        </div>
    }
}
