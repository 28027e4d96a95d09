//! REST API Access
//!
//! `Transport` is the raw JSON exchange; `Api` adds the backend's envelope
//! conventions (`{ success, message, data, meta }`) and typed decoding.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AdminError, AdminResult};
use crate::pagination::PageMeta;
use crate::query::ListQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// One JSON request relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Sends requests and returns the decoded JSON body of 2xx responses.
///
/// Non-2xx statuses must come back as `AdminError::Http`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> AdminResult<Value>;
}

/// reqwest-backed transport with bearer authorization
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> AdminResult<Value> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };
        let url = self.url(&request.path);
        log::debug!("{} {}", method, url);

        let mut builder = self.client.request(method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AdminError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AdminError::Network(e.to_string()))?;
        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        if !status.is_success() {
            let message = envelope_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            log::warn!("{} -> {}: {}", url, status.as_u16(), message);
            return Err(AdminError::Http { status: status.as_u16(), message });
        }
        Ok(body)
    }
}

fn envelope_message(body: &Value) -> Option<String> {
    body.get("message").and_then(Value::as_str).map(str::to_string)
}

/// `success: false` inside a 2xx body is still a failure.
fn check_success(body: &Value) -> AdminResult<()> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(AdminError::Api {
            message: envelope_message(body).unwrap_or_else(|| "Request was not successful".to_string()),
        });
    }
    Ok(())
}

/// One page of records with its pagination summary
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub meta: PageMeta,
}

/// Outcome of a mutation: server message plus optional payload
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ListEnvelope<T> {
    #[serde(default)]
    data: Vec<T>,
    #[serde(default)]
    meta: Option<PageMeta>,
}

#[derive(Deserialize)]
struct ItemEnvelope<T> {
    data: Option<T>,
}

/// Typed access on top of any transport
#[derive(Debug, Clone)]
pub struct Api<T> {
    transport: T,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /{path}?{query}`. A missing `meta` is synthesized from the query
    /// and the number of records returned.
    pub async fn list<R: DeserializeOwned>(&self, path: &str, query: &ListQuery) -> AdminResult<Page<R>> {
        let request = ApiRequest::new(Method::Get, path).with_query(query.to_api_params());
        let body = self.transport.send(request).await?;
        check_success(&body)?;
        let envelope: ListEnvelope<R> = serde_json::from_value(body)?;
        let meta = envelope
            .meta
            .unwrap_or_else(|| PageMeta::new(query.page, query.limit, envelope.data.len() as u64));
        Ok(Page { records: envelope.data, meta })
    }

    /// `GET /{path}/{id}`; 404 and a null `data` both become `NotFound`.
    pub async fn get<R: DeserializeOwned>(&self, path: &str, id: &str) -> AdminResult<R> {
        let not_found = || AdminError::NotFound { resource: path.to_string(), id: id.to_string() };
        if id.trim().is_empty() {
            return Err(not_found());
        }
        let request = ApiRequest::new(Method::Get, format!("{}/{}", path, id));
        let body = match self.transport.send(request).await {
            Err(err) if err.is_not_found() => return Err(not_found()),
            other => other?,
        };
        check_success(&body)?;
        let envelope: ItemEnvelope<R> = serde_json::from_value(body)?;
        envelope.data.ok_or_else(not_found)
    }

    pub async fn create<B: Serialize>(&self, path: &str, body: &B) -> AdminResult<MessageResponse> {
        let request = ApiRequest::new(Method::Post, path).with_body(serde_json::to_value(body)?);
        self.mutate(request).await
    }

    pub async fn update<B: Serialize>(&self, path: &str, id: &str, body: &B) -> AdminResult<MessageResponse> {
        let request =
            ApiRequest::new(Method::Patch, format!("{}/{}", path, id)).with_body(serde_json::to_value(body)?);
        self.mutate(request).await
    }

    pub async fn delete(&self, path: &str, id: &str) -> AdminResult<MessageResponse> {
        self.mutate(ApiRequest::new(Method::Delete, format!("{}/{}", path, id))).await
    }

    async fn mutate(&self, request: ApiRequest) -> AdminResult<MessageResponse> {
        let body = self.transport.send(request).await?;
        check_success(&body)?;
        if body.is_null() {
            return Ok(MessageResponse { message: String::new(), data: None });
        }
        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording in-memory transport for async flow tests.

    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    #[derive(Default)]
    pub struct RecordingTransport {
        pub requests: RefCell<Vec<ApiRequest>>,
        responses: RefCell<VecDeque<AdminResult<Value>>>,
    }

    impl RecordingTransport {
        pub fn respond(self, response: AdminResult<Value>) -> Self {
            self.responses.borrow_mut().push_back(response);
            self
        }

        pub fn sent(&self) -> Vec<ApiRequest> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Transport for RecordingTransport {
        async fn send(&self, request: ApiRequest) -> AdminResult<Value> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AdminError::Network("no canned response".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingTransport;
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        name: String,
    }

    #[tokio::test]
    async fn test_list_decodes_envelope() {
        let transport = RecordingTransport::default().respond(Ok(json!({
            "success": true,
            "data": [{"name": "a"}, {"name": "b"}],
            "meta": {"page": 2, "limit": 2, "total": 7}
        })));
        let api = Api::new(transport);
        let mut query = ListQuery::new(2);
        query.page = 2;

        let page: Page<Row> = api.list("categories", &query).await.expect("list");
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.meta.total_pages(), 4);

        let sent = api.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].path, "categories");
        assert!(sent[0].query.contains(&("page".to_string(), "2".to_string())));
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_is_error() {
        let transport = RecordingTransport::default()
            .respond(Ok(json!({"success": false, "message": "Quiz is locked"})));
        let api = Api::new(transport);

        let err = api.delete("quizzes", "q1").await.unwrap_err();
        assert_eq!(err, AdminError::Api { message: "Quiz is locked".into() });
    }

    #[tokio::test]
    async fn test_get_maps_404_to_not_found() {
        let transport = RecordingTransport::default()
            .respond(Err(AdminError::Http { status: 404, message: "Not Found".into() }))
            .respond(Ok(json!({"success": true, "data": null})));
        let api = Api::new(transport);

        let err = api.get::<Row>("courses", "missing").await.unwrap_err();
        assert!(matches!(err, AdminError::NotFound { .. }));
        let err = api.get::<Row>("courses", "gone").await.unwrap_err();
        assert!(matches!(err, AdminError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_with_blank_id_sends_nothing() {
        let api = Api::new(RecordingTransport::default());
        let err = api.get::<Row>("courses", " ").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(api.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_update_patches_record_path() {
        let transport = RecordingTransport::default()
            .respond(Ok(json!({"success": true, "message": "Course updated"})));
        let api = Api::new(transport);

        let response = api
            .update("courses", "c7", &json!({"title": "Rust in Practice"}))
            .await
            .expect("update");
        assert_eq!(response.message, "Course updated");

        let sent = api.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Patch);
        assert_eq!(sent[0].path, "courses/c7");
        assert_eq!(sent[0].body, Some(json!({"title": "Rust in Practice"})));
    }

    #[test]
    fn test_http_transport_joins_url() {
        let transport = HttpTransport::new("https://api.example.com/v1/", Some(String::new()));
        assert_eq!(transport.url("/courses"), "https://api.example.com/v1/courses");
        assert!(transport.token.is_none());
    }
}
