//! UI Components
//!
//! Leptos components for the task list page.

mod notification_stack;
mod task_footer;
mod task_form;
mod task_item;
mod task_list;

pub use notification_stack::NotificationStack;
pub use task_footer::TaskFooter;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
