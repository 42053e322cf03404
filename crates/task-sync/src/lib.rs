//! Task Sync Core
//!
//! Keeps a rendered task list consistent with a remote task store.
//!
//! Layered architecture:
//! - model: Task entity, ids and validated titles
//! - api: REST client for the remote task store
//! - view / confirm: seams the host rendering surface implements
//! - controller: edit session and request/reload sequencing

mod config;
mod confirm;
mod counter;
mod error;
mod intent;
mod model;

pub mod api;
pub mod controller;
pub mod view;

pub use api::{HttpTaskApi, TaskApi};
pub use config::ClientConfig;
pub use confirm::Confirm;
pub use controller::SyncController;
pub use counter::TaskCounter;
pub use error::{ApiError, ApiResult, Failure};
pub use intent::Intent;
pub use model::{ClearOutcome, NewTask, Task, TaskId, TaskTitle};
pub use view::{NotificationKind, SubmitLabel, TaskView};
