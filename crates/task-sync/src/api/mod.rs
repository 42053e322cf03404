//! Task API
//!
//! Client-side bindings to the remote task store, one method per
//! synchronization intent. No retries, no caching.

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::model::{ClearOutcome, Task, TaskId, TaskTitle};

pub use http::{status_message, HttpTaskApi};

/// Remote task store operations
///
/// Futures are not `Send`: everything runs on the single browser event loop.
#[async_trait(?Send)]
pub trait TaskApi {
    /// All tasks, in server order
    async fn fetch_all(&self) -> ApiResult<Vec<Task>>;

    /// Create an incomplete task. `None` when the server sent no usable body.
    async fn create(&self, title: &TaskTitle) -> ApiResult<Option<Task>>;

    async fn update_title(&self, id: TaskId, title: &TaskTitle) -> ApiResult<Option<Task>>;

    async fn set_completed(&self, id: TaskId, completed: bool) -> ApiResult<Option<Task>>;

    async fn delete(&self, id: TaskId) -> ApiResult<()>;

    /// Delete every completed task
    async fn clear_completed(&self) -> ApiResult<ClearOutcome>;
}
