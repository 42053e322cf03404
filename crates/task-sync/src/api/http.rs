//! HTTP Task API
//!
//! REST bindings over reqwest. Works natively and on wasm32, where reqwest
//! goes through the browser's fetch.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::TaskApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, Failure};
use crate::model::{ClearOutcome, CompletedUpdate, NewTask, Task, TaskId, TaskTitle, TitleUpdate};

/// Error body convention of the task store
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pick the user-facing message for a non-2xx response
pub fn status_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

/// Parse a 2xx body, treating an absent or unexpected body as no result
fn decode_optional<T: DeserializeOwned>(body: &str) -> Option<T> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(body) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Ignoring unparseable response body: {}", e);
            None
        }
    }
}

/// Log a failed request and wrap it in its error kind
fn fail(kind: fn(Failure) -> ApiError, method: Method, url: &str, failure: Failure) -> ApiError {
    warn!("Task API {} {} failed: {}", method, url, failure);
    kind(failure)
}

/// reqwest-backed client for the remote task store
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), &config.api_base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // ========================
    // Endpoints
    // ========================

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    fn completed_url(&self, id: TaskId) -> String {
        format!("{}/{}/completed", self.base_url, id)
    }

    fn clear_completed_url(&self) -> String {
        format!("{}/clear_completed", self.base_url)
    }

    /// Send a request and return the raw body of a 2xx response
    async fn execute(&self, request: RequestBuilder) -> Result<String, Failure> {
        let response = request
            .send()
            .await
            .map_err(|e| Failure::Transport(e.to_string()))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Could not read response body ({}): {}", status, e);
                String::new()
            }
        };

        if !status.is_success() {
            return Err(Failure::Status {
                status: status.as_u16(),
                message: status_message(status.as_u16(), &body),
            });
        }
        Ok(body)
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn fetch_all(&self) -> ApiResult<Vec<Task>> {
        let url = &self.base_url;
        let body = self
            .execute(self.client.get(url))
            .await
            .map_err(|f| fail(ApiError::Load, Method::GET, url, f))?;

        serde_json::from_str(&body)
            .map_err(|e| fail(ApiError::Load, Method::GET, url, Failure::Decode(e.to_string())))
    }

    async fn create(&self, title: &TaskTitle) -> ApiResult<Option<Task>> {
        let url = &self.base_url;
        let body = self
            .execute(self.client.post(url).json(&NewTask::new(title)))
            .await
            .map_err(|f| fail(ApiError::Save, Method::POST, url, f))?;
        Ok(decode_optional(&body))
    }

    async fn update_title(&self, id: TaskId, title: &TaskTitle) -> ApiResult<Option<Task>> {
        let url = self.task_url(id);
        let body = self
            .execute(self.client.put(&url).json(&TitleUpdate { title }))
            .await
            .map_err(|f| fail(ApiError::Save, Method::PUT, &url, f))?;
        Ok(decode_optional(&body))
    }

    async fn set_completed(&self, id: TaskId, completed: bool) -> ApiResult<Option<Task>> {
        let url = self.completed_url(id);
        let body = self
            .execute(self.client.patch(&url).json(&CompletedUpdate { completed }))
            .await
            .map_err(|f| fail(ApiError::Toggle, Method::PATCH, &url, f))?;
        Ok(decode_optional(&body))
    }

    async fn delete(&self, id: TaskId) -> ApiResult<()> {
        let url = self.task_url(id);
        self.execute(self.client.delete(&url))
            .await
            .map_err(|f| fail(ApiError::Delete, Method::DELETE, &url, f))?;
        Ok(())
    }

    async fn clear_completed(&self) -> ApiResult<ClearOutcome> {
        let url = self.clear_completed_url();
        let body = self
            .execute(self.client.delete(&url))
            .await
            .map_err(|f| fail(ApiError::Delete, Method::DELETE, &url, f))?;
        Ok(decode_optional(&body).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// What the fake server saw
    struct Recorded {
        request_line: String,
        headers: String,
        body: String,
    }

    /// Serve exactly one canned response on a fresh port
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Recorded>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/api/tasks", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let header_end = loop {
                let n = stream.read(&mut chunk).await.unwrap();
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
                assert!(n > 0, "connection closed before headers were complete");
            };

            let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|l| {
                    let (name, value) = l.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            while buf.len() < header_end + content_length {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();

            let (request_line, headers) = head.split_once("\r\n").unwrap_or((head.as_str(), ""));
            Recorded {
                request_line: request_line.to_string(),
                headers: headers.to_lowercase(),
                body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
            }
        });

        (base, handle)
    }

    fn api(base: &str) -> HttpTaskApi {
        HttpTaskApi::with_client(Client::new(), base)
    }

    fn title(s: &str) -> TaskTitle {
        TaskTitle::parse(s).unwrap()
    }

    #[test]
    fn test_status_message_uses_body_message() {
        assert_eq!(status_message(400, r#"{"message":"Title required"}"#), "Title required");
    }

    #[test]
    fn test_status_message_fallbacks() {
        assert_eq!(status_message(500, ""), "Request failed with status 500");
        assert_eq!(status_message(500, "<html>oops</html>"), "Request failed with status 500");
        assert_eq!(
            status_message(500, r#"{"error":"Failed to delete completed tasks"}"#),
            "Request failed with status 500"
        );
        assert_eq!(status_message(404, r#"{"message":""}"#), "Request failed with status 404");
    }

    #[test]
    fn test_decode_optional_tolerates_empty_body() {
        assert_eq!(decode_optional::<Task>(""), None);
        assert_eq!(decode_optional::<Task>("{}"), None);
        assert_eq!(
            decode_optional::<Task>(r#"{"id":1,"title":"a","completed":false}"#),
            Some(Task { id: TaskId::new(1), title: "a".into(), completed: false })
        );
    }

    #[test]
    fn test_endpoints() {
        let api = api("http://localhost:8080/api/tasks/");
        assert_eq!(api.base_url, "http://localhost:8080/api/tasks");
        assert_eq!(api.task_url(TaskId::new(5)), "http://localhost:8080/api/tasks/5");
        assert_eq!(api.completed_url(TaskId::new(5)), "http://localhost:8080/api/tasks/5/completed");
        assert_eq!(api.clear_completed_url(), "http://localhost:8080/api/tasks/clear_completed");
    }

    #[tokio::test]
    async fn test_fetch_all() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"id":1,"title":"Buy milk","completed":false},{"id":2,"title":"Walk dog","completed":true}]"#,
        )
        .await;

        let tasks = api(&base).fetch_all().await.expect("fetch failed");
        let seen = server.await.unwrap();

        assert!(seen.request_line.starts_with("GET /api/tasks "));
        assert!(!seen.headers.contains("content-type"));
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Buy milk");
        assert!(tasks[1].completed);
    }

    #[tokio::test]
    async fn test_fetch_all_rejects_bad_body() {
        let (base, server) = serve_once("200 OK", "not json").await;

        let err = api(&base).fetch_all().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ApiError::Load(Failure::Decode(_))));
    }

    #[tokio::test]
    async fn test_create_sends_incomplete_task() {
        let (base, server) = serve_once("200 OK", r#"{"id":9,"title":"Buy milk","completed":false}"#).await;

        let created = api(&base).create(&title("Buy milk")).await.expect("create failed");
        let seen = server.await.unwrap();

        assert!(seen.request_line.starts_with("POST /api/tasks "));
        assert!(seen.headers.contains("content-type: application/json"));
        let body: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Buy milk", "completed": false}));
        assert_eq!(created.map(|t| t.id), Some(TaskId::new(9)));
    }

    #[tokio::test]
    async fn test_update_title() {
        let (base, server) = serve_once("200 OK", r#"{"id":3,"title":"Renamed","completed":false}"#).await;

        let updated = api(&base).update_title(TaskId::new(3), &title("Renamed")).await.unwrap();
        let seen = server.await.unwrap();

        assert!(seen.request_line.starts_with("PUT /api/tasks/3 "));
        let body: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Renamed"}));
        assert_eq!(updated.unwrap().title, "Renamed");
    }

    #[tokio::test]
    async fn test_set_completed_accepts_empty_body() {
        let (base, server) = serve_once("200 OK", "").await;

        let result = api(&base).set_completed(TaskId::new(4), true).await;
        let seen = server.await.unwrap();

        assert!(seen.request_line.starts_with("PATCH /api/tasks/4/completed "));
        let body: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
        assert_eq!(body, serde_json::json!({"completed": true}));
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_set_completed_not_found() {
        let (base, server) = serve_once("404 Not Found", "").await;

        let err = api(&base).set_completed(TaskId::new(4), true).await.unwrap_err();
        server.await.unwrap();

        assert_eq!(
            err,
            ApiError::Toggle(Failure::Status {
                status: 404,
                message: "Request failed with status 404".into()
            })
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let (base, server) = serve_once("200 OK", "").await;

        api(&base).delete(TaskId::new(12)).await.expect("delete failed");
        let seen = server.await.unwrap();

        assert!(seen.request_line.starts_with("DELETE /api/tasks/12 "));
        assert!(!seen.headers.contains("content-type"));
    }

    #[tokio::test]
    async fn test_clear_completed() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"message":"Successfully deleted completed tasks","deletedCount":1}"#,
        )
        .await;

        let outcome = api(&base).clear_completed().await.unwrap();
        let seen = server.await.unwrap();

        assert!(seen.request_line.starts_with("DELETE /api/tasks/clear_completed "));
        assert_eq!(outcome.deleted_count, 1);
    }

    #[tokio::test]
    async fn test_clear_completed_surfaces_server_message() {
        let (base, server) = serve_once("409 Conflict", r#"{"message":"Nothing to clear"}"#).await;

        let err = api(&base).clear_completed().await.unwrap_err();
        server.await.unwrap();

        assert_eq!(err.server_message(), Some("Nothing to clear"));
        assert!(matches!(err, ApiError::Delete(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/api/tasks", listener.local_addr().unwrap());
        drop(listener);

        let err = api(&base).set_completed(TaskId::new(1), true).await.unwrap_err();
        assert!(err.is_transport());
        assert!(matches!(err, ApiError::Toggle(_)));
    }
}
