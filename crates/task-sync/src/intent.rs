//! User intents dispatched to the controller.

use crate::model::TaskId;

/// Everything the user can ask the task list to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Form submit: create, or update the task being edited
    Submit,
    ClearCompleted,
    /// Enter edit mode for a row, carrying the title shown in it
    StartEdit { id: TaskId, title: String },
    /// Save button on an edit row, carrying the edit field's text
    SaveEdit { id: TaskId, title: String },
    CancelEdit,
    Delete { id: TaskId },
    /// Checkbox change. `completed` is the state after the user's click.
    ToggleCompleted { id: TaskId, completed: bool },
}
