//! Task Form Component
//!
//! Single title input shared by create and edit.

use leptos::prelude::*;

use task_sync::{Intent, SubmitLabel};

use crate::dispatcher::use_dispatcher;
use crate::view::ViewHandles;

fn submit_icon(label: SubmitLabel) -> &'static str {
    match label {
        SubmitLabel::Add => "+",
        SubmitLabel::Update => "✓",
    }
}

#[component]
pub fn TaskForm() -> impl IntoView {
    let handles = expect_context::<ViewHandles>();
    let dispatcher = use_dispatcher();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        dispatcher.send(Intent::Submit);
    };

    view! {
        <form id="taskForm" class="task-form" on:submit=on_submit>
            <input
                id="taskInput"
                type="text"
                placeholder="What needs to be done?"
                node_ref=handles.input_ref
                prop:value=move || handles.input.get()
                on:input=move |ev| handles.input.set(event_target_value(&ev))
            />
            <button type="submit" class="submit-btn">
                <span class="submit-icon">{move || submit_icon(handles.submit_label.get())}</span>
                {move || handles.submit_label.get().text()}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_icon_follows_label() {
        assert_eq!(submit_icon(SubmitLabel::Add), "+");
        assert_eq!(submit_icon(SubmitLabel::Update), "✓");
    }
}
