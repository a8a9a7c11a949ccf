//! Access to the remote todo API.
//!
//! [`TodoApi`] is the seam the controller talks through; [`TodoClient`] is
//! the HTTP implementation used by both front-ends.

mod client;
mod error;

pub use client::{GENERIC_ERROR, LOGIN_FAILED, TodoClient};
pub use error::ApiError;

use crate::models::{
    ChangePasswordRequest, CreateTodoRequest, RegisterRequest, TodoRecord, TokenResponse,
    UserRecord,
};
use async_trait::async_trait;
use uuid::Uuid;

/// Typed endpoint calls against the todo service.
///
/// Futures are not `Send`: browser fetches are bound to the page's thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Sets or clears the bearer credential attached to authenticated calls.
    fn set_token(&self, token: Option<String>);

    /// `POST /auth/token` with a password grant.
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError>;

    /// `POST /auth/`
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;

    /// `GET /users/me`
    async fn current_user(&self) -> Result<UserRecord, ApiError>;

    /// `PUT /users/change-password`
    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError>;

    /// `GET /todos/`
    async fn list_todos(&self) -> Result<Vec<TodoRecord>, ApiError>;

    /// `POST /todos/`
    async fn create_todo(&self, request: &CreateTodoRequest) -> Result<(), ApiError>;

    /// `PUT /todos/{id}/complete`
    async fn complete_todo(&self, id: Uuid) -> Result<(), ApiError>;

    /// `DELETE /todos/{id}`
    async fn delete_todo(&self, id: Uuid) -> Result<(), ApiError>;
}
