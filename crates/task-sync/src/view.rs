//! View Seam
//!
//! Primitive rendering operations the controller drives. Implementations
//! receive their rendering handles at construction and never touch the
//! network.

use crate::counter::TaskCounter;
use crate::model::{Task, TaskId};

/// Visual treatment of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Label of the form's primary button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitLabel {
    #[default]
    Add,
    Update,
}

impl SubmitLabel {
    pub fn text(self) -> &'static str {
        match self {
            SubmitLabel::Add => "Add Task",
            SubmitLabel::Update => "Update",
        }
    }
}

/// Rendering surface for the task list
///
/// All methods take `&self`; implementations hold interior-mutable or
/// reactive handles.
pub trait TaskView {
    /// Render the whole list. The row whose id equals `editing_id` is drawn
    /// as an edit row, every other row as a normal row.
    fn render_tasks(&self, tasks: &[Task], editing_id: Option<TaskId>);

    /// Patch one row's checkbox and strike-through without re-rendering.
    /// Unknown ids are ignored.
    fn update_task_in_ui(&self, id: TaskId, completed: bool);

    fn set_counter_text(&self, text: String);

    fn update_task_counter(&self, tasks: &[Task]) {
        self.set_counter_text(TaskCounter::from_tasks(tasks).to_string());
    }

    fn update_submit_button(&self, label: SubmitLabel);

    /// Current text of the title input
    fn input_value(&self) -> String;

    fn set_input_value(&self, value: &str);

    fn reset_input(&self) {
        self.set_input_value("");
    }

    fn focus_input(&self);

    /// Show a message that dismisses itself after a fixed delay
    fn show_notification(&self, message: &str, kind: NotificationKind);
}
