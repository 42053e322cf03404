//! Synchronization Controller
//!
//! The only stateful component. Owns the edit session and sequences every
//! mutation around a reload, except the completion toggle which patches the
//! row optimistically and rolls back on failure.
//!
//! Runs on a single event loop. Intents are not serialized against each
//! other: when two are in flight, the last reload to finish wins.

use std::cell::RefCell;

use log::{debug, error, info};

use crate::api::TaskApi;
use crate::confirm::Confirm;
use crate::intent::Intent;
use crate::model::{TaskId, TaskTitle};
use crate::view::{NotificationKind, SubmitLabel, TaskView};

pub const LOAD_FAILED: &str = "Error loading tasks. Please refresh the page.";
pub const SAVE_FAILED: &str = "Error saving task. Please try again.";
pub const UPDATE_FAILED: &str = "Error updating task. Please try again.";
pub const DELETE_FAILED: &str = "Error deleting task. Please try again.";
pub const CLEAR_FAILED: &str = "Error clearing completed tasks. Please try again.";
pub const CLEAR_SUCCEEDED: &str = "Completed tasks cleared successfully!";
pub const NETWORK_FAILED: &str = "Network error. Please check your connection.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

/// Task currently being title-edited, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EditSession {
    editing_id: Option<TaskId>,
    /// Title before editing started
    original_title: String,
}

pub struct SyncController<A, V, C> {
    api: A,
    view: V,
    confirm: C,
    // Never borrowed across an await.
    session: RefCell<EditSession>,
}

impl<A, V, C> SyncController<A, V, C>
where
    A: TaskApi,
    V: TaskView,
    C: Confirm,
{
    pub fn new(api: A, view: V, confirm: C) -> Self {
        Self {
            api,
            view,
            confirm,
            session: RefCell::new(EditSession::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn editing_id(&self) -> Option<TaskId> {
        self.session.borrow().editing_id
    }

    pub fn original_title(&self) -> String {
        self.session.borrow().original_title.clone()
    }

    /// Initial load. Call once, before the host starts dispatching intents.
    pub async fn init(&self) {
        self.load().await;
    }

    pub async fn dispatch(&self, intent: Intent) {
        debug!("Dispatching {:?}", intent);
        match intent {
            Intent::Submit => self.submit().await,
            Intent::ClearCompleted => self.clear_completed().await,
            Intent::StartEdit { id, title } => self.start_edit(id, &title).await,
            Intent::SaveEdit { id, title } => self.save_edit(id, &title).await,
            Intent::CancelEdit => self.cancel_edit().await,
            Intent::Delete { id } => self.delete(id).await,
            Intent::ToggleCompleted { id, completed } => self.toggle_completed(id, completed).await,
        }
    }

    /// Full reload: render the list and the counter from one fetch.
    /// On failure the rendered list is left as it was.
    pub async fn load(&self) {
        match self.api.fetch_all().await {
            Ok(tasks) => {
                self.view.render_tasks(&tasks, self.editing_id());
                self.view.update_task_counter(&tasks);
            }
            Err(e) => {
                error!("Loading tasks failed: {}", e);
                self.view.show_notification(LOAD_FAILED, NotificationKind::Error);
            }
        }
    }

    /// Form submit: update the task being edited, or create a new one.
    /// A blank title does nothing.
    pub async fn submit(&self) {
        let Some(title) = TaskTitle::parse(&self.view.input_value()) else {
            return;
        };

        let result = match self.editing_id() {
            Some(id) => self
                .api
                .update_title(id, &title)
                .await
                .map(|_| self.reset_edit_mode()),
            None => self
                .api
                .create(&title)
                .await
                .map(|_| self.view.reset_input()),
        };

        match result {
            Ok(()) => self.load().await,
            Err(_) => self.view.show_notification(SAVE_FAILED, NotificationKind::Error),
        }
    }

    pub async fn clear_completed(&self) {
        match self.api.clear_completed().await {
            Ok(outcome) => {
                info!("Deleted {} tasks", outcome.deleted_count);
                self.view.show_notification(CLEAR_SUCCEEDED, NotificationKind::Success);
                self.end_session_for_reload();
                self.load().await;
            }
            Err(e) => {
                let message = e.server_message().unwrap_or(CLEAR_FAILED);
                self.view.show_notification(message, NotificationKind::Error);
            }
        }
    }

    /// Checkbox change. The host has already flipped the checkbox to
    /// `completed`; on failure the whole row goes back to `!completed`.
    pub async fn toggle_completed(&self, id: TaskId, completed: bool) {
        match self.api.set_completed(id, completed).await {
            Ok(_) => {
                self.view.update_task_in_ui(id, completed);
                self.refresh_counter().await;
            }
            Err(e) => {
                self.view.update_task_in_ui(id, !completed);
                let message = if e.is_transport() {
                    NETWORK_FAILED.to_string()
                } else {
                    format!("Update failed: {}", e)
                };
                self.view.show_notification(&message, NotificationKind::Error);
            }
        }
    }

    /// Delete one task after the user confirms
    pub async fn delete(&self, id: TaskId) {
        if !self.confirm.confirm(DELETE_PROMPT) {
            debug!("Delete of task {} declined", id);
            return;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                self.end_session_for_reload();
                self.load().await;
            }
            Err(_) => self.view.show_notification(DELETE_FAILED, NotificationKind::Error),
        }
    }

    /// Enter edit mode for `id`, replacing any session in progress
    pub async fn start_edit(&self, id: TaskId, title: &str) {
        *self.session.borrow_mut() = EditSession {
            editing_id: Some(id),
            original_title: title.to_string(),
        };
        self.view.set_input_value(title);
        self.view.focus_input();
        self.view.update_submit_button(SubmitLabel::Update);
        self.load().await;
    }

    /// Save button on an edit row. A blank title does nothing.
    pub async fn save_edit(&self, id: TaskId, title: &str) {
        let Some(title) = TaskTitle::parse(title) else {
            return;
        };

        match self.api.update_title(id, &title).await {
            Ok(_) => {
                self.reset_edit_mode();
                self.load().await;
            }
            Err(_) => self.view.show_notification(UPDATE_FAILED, NotificationKind::Error),
        }
    }

    pub async fn cancel_edit(&self) {
        self.reset_edit_mode();
        self.load().await;
    }

    // ========================
    // Helpers
    // ========================

    fn reset_edit_mode(&self) {
        *self.session.borrow_mut() = EditSession::default();
        self.view.reset_input();
        self.view.update_submit_button(SubmitLabel::Add);
    }

    /// Other mutations end the edit session before their reload
    fn end_session_for_reload(&self) {
        if self.editing_id().is_some() {
            self.reset_edit_mode();
        }
    }

    /// Recompute the counter from a fresh fetch without re-rendering rows
    async fn refresh_counter(&self) {
        match self.api.fetch_all().await {
            Ok(tasks) => self.view.update_task_counter(&tasks),
            Err(e) => error!("Error updating task counter: {}", e),
        }
    }
}
