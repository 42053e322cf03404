//! Task Model
//!
//! Data structures matching the remote task store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// A title that is non-empty once trimmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Trim `raw` and reject it if nothing is left
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ========================
// Request / Response Bodies
// ========================

/// Body for creating a task. New tasks always start incomplete.
#[derive(Debug, Serialize)]
pub struct NewTask<'a> {
    pub title: &'a TaskTitle,
    pub completed: bool,
}

impl<'a> NewTask<'a> {
    pub fn new(title: &'a TaskTitle) -> Self {
        Self { title, completed: false }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TitleUpdate<'a> {
    pub title: &'a TaskTitle,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompletedUpdate {
    pub completed: bool,
}

/// Result of clearing completed tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ClearOutcome {
    #[serde(rename = "deletedCount", default)]
    pub deleted_count: u64,
}
