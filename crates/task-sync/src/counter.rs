//! Task counter shown under the list.

use std::fmt;

use crate::model::Task;

/// Completed/total tally derived from a task collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounter {
    pub total: usize,
    pub completed: usize,
}

impl TaskCounter {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }
}

impl fmt::Display for TaskCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            f.write_str("No tasks")
        } else if self.completed == self.total {
            write!(f, "All {} tasks completed!", self.total)
        } else {
            write!(f, "{} of {} tasks completed", self.completed, self.total)
        }
    }
}
