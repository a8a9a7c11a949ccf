use super::{ApiError, TodoApi};
use crate::models::{
    ChangePasswordRequest, CreateTodoRequest, ErrorResponse, RegisterRequest, TodoRecord,
    TokenRequest, TokenResponse, UserRecord,
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};
use uuid::Uuid;

/// Fallback message for rejections without a usable `detail`.
pub const GENERIC_ERROR: &str = "An error occurred";
/// Fallback message for a rejected login.
pub const LOGIN_FAILED: &str = "Login failed";

/// HTTP client for the todo API.
///
/// Clones share the bearer token slot.
#[derive(Clone, Debug)]
pub struct TodoClient {
    base_url: String,
    client: Client,
    token: Arc<Mutex<Option<String>>>,
}

impl TodoClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// The bearer credential currently attached to requests, if any.
    pub fn current_token(&self) -> Option<String> {
        self.token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_token() {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    /// Issues a request and normalises the outcome.
    ///
    /// JSON bodies are sent with `Content-Type: application/json`. The bearer
    /// token is attached when one is set and `requires_auth` is true.
    ///
    /// # Returns
    /// `Ok(None)` for 204 responses and empty bodies, otherwise the decoded
    /// JSON value.
    ///
    /// # Errors
    /// [`ApiError::Rejected`] for non-success statuses, [`ApiError::Network`]
    /// when no response arrives, [`ApiError::Decode`] for malformed bodies.
    pub async fn request<B>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
        requires_auth: bool,
    ) -> Result<Option<Value>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        debug!(method = %method, path, "sending api request");
        let mut builder = self.client.request(method, self.api_url(path));
        if requires_auth {
            builder = self.apply_auth(builder);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await.map_err(ApiError::network)?;
        read_response(response, path, GENERIC_ERROR).await
    }

    async fn send_empty(&self, path: &str, method: Method) -> Result<Option<Value>, ApiError> {
        self.request::<Value>(path, method, None, true).await
    }
}

async fn read_response(
    response: Response,
    path: &str,
    fallback: &str,
) -> Result<Option<Value>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let detail = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.message().map(str::to_owned))
            .unwrap_or_else(|| fallback.to_string());
        warn!(status = status.as_u16(), path, %detail, "api request rejected");
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            detail,
        });
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    // Chunked bodies carry no length, so emptiness is only known once read.
    let body = response.bytes().await.map_err(ApiError::network)?;
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(&body).map(Some).map_err(ApiError::decode)
}

fn decode<T: DeserializeOwned>(value: Option<Value>) -> Result<T, ApiError> {
    let value = value.ok_or_else(|| ApiError::decode("empty response body"))?;
    serde_json::from_value(value).map_err(ApiError::decode)
}

#[async_trait(?Send)]
impl TodoApi for TodoClient {
    fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = token;
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let form = TokenRequest::password_grant(email, password);
        debug!(path = "auth/token", "requesting access token");
        let response = self
            .client
            .post(self.api_url("auth/token"))
            .form(&form)
            .send()
            .await
            .map_err(ApiError::network)?;
        decode(read_response(response, "auth/token", LOGIN_FAILED).await?)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.request("auth/", Method::POST, Some(request), false)
            .await
            .map(drop)
    }

    async fn current_user(&self) -> Result<UserRecord, ApiError> {
        decode(self.send_empty("users/me", Method::GET).await?)
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.request("users/change-password", Method::PUT, Some(request), true)
            .await
            .map(drop)
    }

    async fn list_todos(&self) -> Result<Vec<TodoRecord>, ApiError> {
        decode(self.send_empty("todos/", Method::GET).await?)
    }

    async fn create_todo(&self, request: &CreateTodoRequest) -> Result<(), ApiError> {
        self.request("todos/", Method::POST, Some(request), true)
            .await
            .map(drop)
    }

    async fn complete_todo(&self, id: Uuid) -> Result<(), ApiError> {
        self.send_empty(&format!("todos/{id}/complete"), Method::PUT)
            .await
            .map(drop)
    }

    async fn delete_todo(&self, id: Uuid) -> Result<(), ApiError> {
        self.send_empty(&format!("todos/{id}"), Method::DELETE)
            .await
            .map(drop)
    }
}
