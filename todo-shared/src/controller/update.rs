//! The pure half of the controller: `(state, event) -> effects`.

use super::state::{AppState, Form, NotificationId, NotificationLevel, Phase};
use crate::api::ApiError;
use crate::models::{
    ChangePasswordRequest, CreateTodoRequest, RegisterRequest, TodoRecord, UserRecord,
};
use crate::validation;
use tracing::info;
use uuid::Uuid;

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGOUT_SUCCESS: &str = "Logged out successfully!";
pub const REGISTER_SUCCESS: &str = "Registration successful! Please login.";
pub const TODO_ADDED: &str = "Todo added successfully!";
pub const TODO_COMPLETED: &str = "Todo completed!";
pub const TODO_DELETED: &str = "Todo deleted!";
pub const PASSWORD_CHANGED: &str = "Password changed successfully!";
pub const LOAD_FAILED: &str = "Failed to load todos";

/// Something that happened: a user action or the outcome of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Process or page start with whatever the session store held.
    Started { stored_token: Option<String> },
    LoginSubmitted { email: String, password: String },
    LoginSucceeded { token: String },
    LoginFailed(ApiError),
    UserLoaded(UserRecord),
    UserLoadFailed(ApiError),
    TodosLoaded(Vec<TodoRecord>),
    TodosLoadFailed(ApiError),
    RegisterSubmitted(RegisterRequest),
    Registered,
    AddTodoSubmitted(CreateTodoRequest),
    TodoCreated,
    CompleteRequested(Uuid),
    TodoCompleted,
    DeleteRequested(Uuid),
    TodoDeleted(Uuid),
    DeleteFailed { id: Uuid, error: ApiError },
    ChangePasswordSubmitted(ChangePasswordRequest),
    PasswordChanged,
    /// A register, create, complete, or change-password call failed.
    RequestFailed(ApiError),
    LogoutRequested,
    NotificationDismissed(NotificationId),
    NotificationExpired(NotificationId),
}

/// A call to the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RequestToken { email: String, password: String },
    FetchCurrentUser,
    FetchTodos,
    Register(RegisterRequest),
    CreateTodo(CreateTodoRequest),
    CompleteTodo(Uuid),
    DeleteTodo(Uuid),
    ChangePassword(ChangePasswordRequest),
}

/// Work for the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Start the auto-dismiss timeout of a notification.
    ScheduleDismiss(NotificationId),
    /// Cancel the timeout of a notification dismissed by hand.
    CancelDismiss(NotificationId),
    ResetForm(Form),
    ShowForm(Form),
    CloseForm(Form),
}

/// Work requested by [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Api(Command),
    PersistToken(String),
    ClearToken,
    Ui(UiEffect),
}

fn notify(state: &mut AppState, level: NotificationLevel, message: impl Into<String>) -> Effect {
    Effect::Ui(UiEffect::ScheduleDismiss(
        state.push_notification(level, message),
    ))
}

fn fail(state: &mut AppState, message: impl Into<String>) -> Vec<Effect> {
    vec![notify(state, NotificationLevel::Danger, message)]
}

/// Applies `event` to `state` and returns the effects to perform, in order.
///
/// Todo mutations outside [`Phase::Authenticated`] are ignored, as are
/// responses that arrive after the session they belong to has ended.
#[allow(clippy::too_many_lines)]
pub fn update(state: &mut AppState, event: Event) -> Vec<Effect> {
    let authenticated = state.is_authenticated();
    match event {
        Event::Started { stored_token } => match stored_token {
            Some(token) => {
                state.phase = Phase::Authenticating;
                state.token = Some(token);
                state.restoring_session = true;
                vec![Effect::Api(Command::FetchCurrentUser)]
            }
            None => {
                state.clear_session();
                Vec::new()
            }
        },

        Event::LoginSubmitted { email, password } => {
            if state.phase != Phase::Anonymous {
                return Vec::new();
            }
            state.phase = Phase::Authenticating;
            state.restoring_session = false;
            vec![Effect::Api(Command::RequestToken { email, password })]
        }
        Event::LoginSucceeded { token } => {
            if state.phase != Phase::Authenticating {
                return Vec::new();
            }
            state.token = Some(token.clone());
            vec![
                Effect::PersistToken(token),
                Effect::Api(Command::FetchCurrentUser),
            ]
        }
        Event::LoginFailed(error) => {
            if state.phase == Phase::Authenticating {
                state.phase = Phase::Anonymous;
            }
            fail(state, error.to_string())
        }

        Event::UserLoaded(user) => {
            if state.phase != Phase::Authenticating {
                return Vec::new();
            }
            info!(email = %user.email, "session authenticated");
            let restored = state.restoring_session;
            state.phase = Phase::Authenticated;
            state.user = Some(user);
            state.restoring_session = false;
            let mut effects = vec![Effect::Api(Command::FetchTodos)];
            if !restored {
                effects.push(notify(state, NotificationLevel::Success, LOGIN_SUCCESS));
            }
            effects
        }
        Event::UserLoadFailed(error) => {
            if state.phase != Phase::Authenticating {
                return Vec::new();
            }
            let restoring = state.restoring_session;
            info!(%error, restoring, "stored or issued token rejected");
            state.clear_session();
            let mut effects = vec![Effect::ClearToken];
            if !restoring {
                effects.push(notify(state, NotificationLevel::Danger, error.to_string()));
            }
            effects
        }

        Event::TodosLoaded(todos) => {
            if !authenticated {
                return Vec::new();
            }
            state
                .pending_deletes
                .retain(|id| todos.iter().any(|todo| todo.id == *id));
            state.todos = todos;
            Vec::new()
        }
        Event::TodosLoadFailed(_) => {
            if !authenticated {
                return Vec::new();
            }
            fail(state, LOAD_FAILED)
        }

        Event::RegisterSubmitted(request) => {
            if state.phase != Phase::Anonymous {
                return Vec::new();
            }
            if let Err(error) = validation::validate_registration(&request) {
                return fail(state, error.to_string());
            }
            vec![Effect::Api(Command::Register(request))]
        }
        Event::Registered => vec![
            notify(state, NotificationLevel::Success, REGISTER_SUCCESS),
            Effect::Ui(UiEffect::ShowForm(Form::Login)),
        ],

        Event::AddTodoSubmitted(request) => {
            if !authenticated {
                return Vec::new();
            }
            if let Err(error) = validation::validate_todo(&request.description, request.priority)
            {
                return fail(state, error.to_string());
            }
            vec![Effect::Api(Command::CreateTodo(request))]
        }
        Event::TodoCreated => {
            if !authenticated {
                return Vec::new();
            }
            vec![
                Effect::Ui(UiEffect::ResetForm(Form::Todo)),
                Effect::Api(Command::FetchTodos),
                notify(state, NotificationLevel::Success, TODO_ADDED),
            ]
        }

        Event::CompleteRequested(id) => {
            if !authenticated {
                return Vec::new();
            }
            vec![Effect::Api(Command::CompleteTodo(id))]
        }
        Event::TodoCompleted => {
            if !authenticated {
                return Vec::new();
            }
            vec![
                Effect::Api(Command::FetchTodos),
                notify(state, NotificationLevel::Success, TODO_COMPLETED),
            ]
        }

        Event::DeleteRequested(id) => {
            if !authenticated || state.pending_deletes.contains(&id) {
                return Vec::new();
            }
            state.pending_deletes.insert(id);
            vec![Effect::Api(Command::DeleteTodo(id))]
        }
        Event::TodoDeleted(_) => {
            if !authenticated {
                return Vec::new();
            }
            vec![
                Effect::Api(Command::FetchTodos),
                notify(state, NotificationLevel::Success, TODO_DELETED),
            ]
        }
        Event::DeleteFailed { id, error } => {
            if !authenticated {
                return Vec::new();
            }
            state.pending_deletes.remove(&id);
            fail(state, error.to_string())
        }

        Event::ChangePasswordSubmitted(request) => {
            if !authenticated {
                return Vec::new();
            }
            if let Err(error) = validation::validate_new_password(
                &request.new_password,
                &request.new_password_confirm,
            ) {
                return fail(state, error.to_string());
            }
            vec![Effect::Api(Command::ChangePassword(request))]
        }
        Event::PasswordChanged => vec![
            Effect::Ui(UiEffect::ResetForm(Form::Password)),
            Effect::Ui(UiEffect::CloseForm(Form::Password)),
            notify(state, NotificationLevel::Success, PASSWORD_CHANGED),
        ],

        Event::RequestFailed(error) => fail(state, error.to_string()),

        Event::LogoutRequested => {
            info!("logging out");
            state.clear_session();
            vec![
                Effect::ClearToken,
                Effect::Ui(UiEffect::ResetForm(Form::Login)),
                Effect::Ui(UiEffect::ResetForm(Form::Register)),
                notify(state, NotificationLevel::Info, LOGOUT_SUCCESS),
            ]
        }

        Event::NotificationDismissed(id) => {
            if state.remove_notification(id) {
                vec![Effect::Ui(UiEffect::CancelDismiss(id))]
            } else {
                Vec::new()
            }
        }
        Event::NotificationExpired(id) => {
            state.remove_notification(id);
            Vec::new()
        }
    }
}
