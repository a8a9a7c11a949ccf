use super::state::AppState;
use super::update::{Command, Effect, Event, UiEffect, update};
use crate::api::TodoApi;
use crate::session::SessionStore;
use std::cell::RefCell;
use std::collections::VecDeque;
use tracing::debug;

/// Rendering side of the controller.
pub trait View {
    /// Called with a fresh snapshot after every transition.
    fn render(&self, state: &AppState);

    /// Performs a UI effect; `state` is the snapshot it was produced with.
    fn apply(&self, _effect: UiEffect, _state: &AppState) {}
}

/// Owns the [`AppState`] and runs the effects [`update`] asks for.
///
/// The state lives in a `RefCell` that is never borrowed across an
/// `.await`, so independent actions may interleave on one thread.
pub struct Controller<A, S, V> {
    state: RefCell<AppState>,
    api: A,
    session: S,
    view: V,
}

impl<A, S, V> Controller<A, S, V>
where
    A: TodoApi,
    S: SessionStore,
    V: View,
{
    pub fn new(api: A, session: S, view: V) -> Self {
        Self {
            state: RefCell::new(AppState::default()),
            api,
            session,
            view,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Restores a stored session, if there is one.
    pub async fn start(&self) {
        let stored_token = self.session.get_token();
        self.dispatch(Event::Started { stored_token }).await;
    }

    /// Runs `event` and every event that follows from it to completion.
    ///
    /// API commands are awaited one after another, so a mutation always
    /// finishes before the reload it triggers is sent.
    pub async fn dispatch(&self, event: Event) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            let (effects, snapshot) = {
                let mut state = self.state.borrow_mut();
                let effects = update(&mut state, event);
                (effects, state.clone())
            };
            self.view.render(&snapshot);

            for effect in effects {
                match effect {
                    Effect::Api(command) => {
                        let token = self.state.borrow().token.clone();
                        self.api.set_token(token);
                        queue.push_back(self.execute(command).await);
                    }
                    Effect::PersistToken(token) => self.session.set_token(&token),
                    Effect::ClearToken => {
                        self.api.set_token(None);
                        self.session.clear_token();
                    }
                    Effect::Ui(ui) => self.view.apply(ui, &snapshot),
                }
            }
        }
    }

    async fn execute(&self, command: Command) -> Event {
        debug!(command = command_name(&command), "sending request");
        match command {
            Command::RequestToken { email, password } => {
                match self.api.login(&email, &password).await {
                    Ok(response) => Event::LoginSucceeded {
                        token: response.access_token,
                    },
                    Err(error) => Event::LoginFailed(error),
                }
            }
            Command::FetchCurrentUser => match self.api.current_user().await {
                Ok(user) => Event::UserLoaded(user),
                Err(error) => Event::UserLoadFailed(error),
            },
            Command::FetchTodos => match self.api.list_todos().await {
                Ok(todos) => Event::TodosLoaded(todos),
                Err(error) => Event::TodosLoadFailed(error),
            },
            Command::Register(request) => match self.api.register(&request).await {
                Ok(()) => Event::Registered,
                Err(error) => Event::RequestFailed(error),
            },
            Command::CreateTodo(request) => match self.api.create_todo(&request).await {
                Ok(()) => Event::TodoCreated,
                Err(error) => Event::RequestFailed(error),
            },
            Command::CompleteTodo(id) => match self.api.complete_todo(id).await {
                Ok(()) => Event::TodoCompleted,
                Err(error) => Event::RequestFailed(error),
            },
            Command::DeleteTodo(id) => match self.api.delete_todo(id).await {
                Ok(()) => Event::TodoDeleted(id),
                Err(error) => Event::DeleteFailed { id, error },
            },
            Command::ChangePassword(request) => match self.api.change_password(&request).await {
                Ok(()) => Event::PasswordChanged,
                Err(error) => Event::RequestFailed(error),
            },
        }
    }
}

// Commands carry credentials, so only the name is logged.
fn command_name(command: &Command) -> &'static str {
    match command {
        Command::RequestToken { .. } => "request_token",
        Command::FetchCurrentUser => "fetch_current_user",
        Command::FetchTodos => "fetch_todos",
        Command::Register(_) => "register",
        Command::CreateTodo(_) => "create_todo",
        Command::CompleteTodo(_) => "complete_todo",
        Command::DeleteTodo(_) => "delete_todo",
        Command::ChangePassword(_) => "change_password",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::controller::state::{Form, NotificationLevel, Phase};
    use crate::controller::update::{LOGIN_SUCCESS, TODO_ADDED, TODO_DELETED};
    use crate::models::{
        ChangePasswordRequest, CreateTodoRequest, RegisterRequest, TodoRecord, TokenResponse,
        UserRecord,
    };
    use crate::session::MemorySessionStore;
    use async_trait::async_trait;
    use uuid::Uuid;

    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<&'static str>>,
        tokens: RefCell<Vec<Option<String>>>,
        logins: RefCell<VecDeque<Result<TokenResponse, ApiError>>>,
        users: RefCell<VecDeque<Result<UserRecord, ApiError>>>,
        lists: RefCell<VecDeque<Result<Vec<TodoRecord>, ApiError>>>,
        mutations: RefCell<VecDeque<Result<(), ApiError>>>,
        created: RefCell<Vec<CreateTodoRequest>>,
    }

    fn next<T>(queue: &RefCell<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
        queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::network("no scripted reply")))
    }

    impl FakeApi {
        fn record(&self, call: &'static str) {
            self.calls.borrow_mut().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }

        fn last_token(&self) -> Option<String> {
            self.tokens.borrow().last().cloned().flatten()
        }
    }

    #[async_trait(?Send)]
    impl TodoApi for FakeApi {
        fn set_token(&self, token: Option<String>) {
            self.tokens.borrow_mut().push(token);
        }

        async fn login(&self, _email: &str, _password: &str) -> Result<TokenResponse, ApiError> {
            self.record("login");
            next(&self.logins)
        }

        async fn register(&self, _request: &RegisterRequest) -> Result<(), ApiError> {
            self.record("register");
            next(&self.mutations)
        }

        async fn current_user(&self) -> Result<UserRecord, ApiError> {
            self.record("current_user");
            next(&self.users)
        }

        async fn change_password(&self, _request: &ChangePasswordRequest) -> Result<(), ApiError> {
            self.record("change_password");
            next(&self.mutations)
        }

        async fn list_todos(&self) -> Result<Vec<TodoRecord>, ApiError> {
            self.record("list_todos");
            next(&self.lists)
        }

        async fn create_todo(&self, request: &CreateTodoRequest) -> Result<(), ApiError> {
            self.record("create_todo");
            self.created.borrow_mut().push(request.clone());
            next(&self.mutations)
        }

        async fn complete_todo(&self, _id: Uuid) -> Result<(), ApiError> {
            self.record("complete_todo");
            next(&self.mutations)
        }

        async fn delete_todo(&self, _id: Uuid) -> Result<(), ApiError> {
            self.record("delete_todo");
            next(&self.mutations)
        }
    }

    #[derive(Default)]
    struct RecordingView {
        renders: RefCell<usize>,
        effects: RefCell<Vec<UiEffect>>,
    }

    impl View for RecordingView {
        fn render(&self, _state: &AppState) {
            *self.renders.borrow_mut() += 1;
        }

        fn apply(&self, effect: UiEffect, _state: &AppState) {
            self.effects.borrow_mut().push(effect);
        }
    }

    type TestController = Controller<FakeApi, MemorySessionStore, RecordingView>;

    fn controller(api: FakeApi, session: MemorySessionStore) -> TestController {
        Controller::new(api, session, RecordingView::default())
    }

    fn ada() -> UserRecord {
        UserRecord {
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        }
    }

    fn todo(description: &str) -> TodoRecord {
        TodoRecord {
            id: Uuid::new_v4(),
            description: description.into(),
            priority: 2,
            due_date: None,
            is_completed: false,
            completed_at: None,
        }
    }

    fn token(value: &str) -> TokenResponse {
        TokenResponse {
            access_token: value.into(),
            token_type: Some("bearer".into()),
        }
    }

    async fn signed_in(todos: Vec<TodoRecord>) -> TestController {
        let api = FakeApi::default();
        api.users.borrow_mut().push_back(Ok(ada()));
        api.lists.borrow_mut().push_back(Ok(todos));
        let controller = controller(api, MemorySessionStore::with_token("stored"));
        controller.start().await;
        assert!(controller.state().is_authenticated());
        controller.api().calls.borrow_mut().clear();
        controller
    }

    #[tokio::test]
    async fn test_login_stores_token_and_loads_profile_then_todos() {
        let api = FakeApi::default();
        api.logins.borrow_mut().push_back(Ok(token("fresh")));
        api.users.borrow_mut().push_back(Ok(ada()));
        api.lists.borrow_mut().push_back(Ok(vec![todo("Write notes")]));
        let session = MemorySessionStore::new();
        let controller = controller(api, session.clone());

        controller.start().await;
        controller
            .dispatch(Event::LoginSubmitted {
                email: "ada@example.com".into(),
                password: "Engine#1843".into(),
            })
            .await;

        let state = controller.state();
        assert_eq!(state.phase, Phase::Authenticated);
        assert_eq!(state.welcome_text().as_deref(), Some("Welcome, Ada!"));
        assert_eq!(state.todos.len(), 1);
        assert_eq!(session.get_token().as_deref(), Some("fresh"));
        assert_eq!(
            controller.api().calls(),
            vec!["login", "current_user", "list_todos"]
        );
        assert_eq!(controller.api().last_token().as_deref(), Some("fresh"));
        assert_eq!(state.notifications[0].message, LOGIN_SUCCESS);
        assert!(matches!(
            controller.view().effects.borrow().as_slice(),
            [UiEffect::ScheduleDismiss(_)]
        ));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_session_empty() {
        let api = FakeApi::default();
        api.logins.borrow_mut().push_back(Err(ApiError::Rejected {
            status: 401,
            detail: "Incorrect username or password.".into(),
        }));
        let session = MemorySessionStore::new();
        let controller = controller(api, session.clone());

        controller
            .dispatch(Event::LoginSubmitted {
                email: "ada@example.com".into(),
                password: "wrong".into(),
            })
            .await;

        let state = controller.state();
        assert_eq!(state.phase, Phase::Anonymous);
        assert_eq!(session.get_token(), None);
        assert_eq!(
            state.notifications[0].message,
            "Incorrect username or password."
        );
        assert_eq!(controller.api().calls(), vec!["login"]);
    }

    #[tokio::test]
    async fn test_start_restores_stored_session_silently() {
        let controller = signed_in(vec![todo("a"), todo("b")]).await;

        let state = controller.state();
        assert_eq!(state.todos.len(), 2);
        assert!(state.notifications.is_empty());
        assert_eq!(controller.api().last_token().as_deref(), Some("stored"));
    }

    #[tokio::test]
    async fn test_start_with_rejected_token_downgrades_to_anonymous() {
        let api = FakeApi::default();
        api.users.borrow_mut().push_back(Err(ApiError::Rejected {
            status: 401,
            detail: "Could not validate user.".into(),
        }));
        let session = MemorySessionStore::with_token("stale");
        let controller = controller(api, session.clone());

        controller.start().await;

        let state = controller.state();
        assert_eq!(state.phase, Phase::Anonymous);
        assert!(state.notifications.is_empty());
        assert_eq!(session.get_token(), None);
        assert_eq!(controller.api().calls(), vec!["current_user"]);
        assert_eq!(controller.api().last_token(), None);
    }

    #[tokio::test]
    async fn test_add_todo_creates_then_reloads() {
        let controller = signed_in(Vec::new()).await;
        let milk = todo("Buy milk");
        controller.api().mutations.borrow_mut().push_back(Ok(()));
        controller
            .api()
            .lists
            .borrow_mut()
            .push_back(Ok(vec![milk.clone()]));

        controller
            .dispatch(Event::AddTodoSubmitted(CreateTodoRequest::new(
                "Buy milk", 2, None,
            )))
            .await;

        assert_eq!(controller.api().calls(), vec!["create_todo", "list_todos"]);
        let sent = controller.api().created.borrow()[0].clone();
        assert_eq!(
            serde_json::to_value(&sent).unwrap(),
            serde_json::json!({"description": "Buy milk", "priority": 2})
        );
        let state = controller.state();
        assert_eq!(state.todos, vec![milk]);
        assert!(
            state
                .notifications
                .iter()
                .any(|n| n.message == TODO_ADDED)
        );
        assert!(
            controller
                .view()
                .effects
                .borrow()
                .contains(&UiEffect::ResetForm(Form::Todo))
        );
    }

    #[tokio::test]
    async fn test_failed_create_skips_reload() {
        let controller = signed_in(Vec::new()).await;
        controller
            .api()
            .mutations
            .borrow_mut()
            .push_back(Err(ApiError::Rejected {
                status: 422,
                detail: "Validation failed".into(),
            }));

        controller
            .dispatch(Event::AddTodoSubmitted(CreateTodoRequest::new("x", 0, None)))
            .await;

        assert_eq!(controller.api().calls(), vec!["create_todo"]);
        let state = controller.state();
        assert_eq!(state.notifications[0].message, "Validation failed");
        assert_eq!(state.notifications[0].level, NotificationLevel::Danger);
        assert_eq!(state.phase, Phase::Authenticated);
    }

    #[tokio::test]
    async fn test_failed_delete_reverts_pending_flag() {
        let item = todo("stubborn");
        let controller = signed_in(vec![item.clone()]).await;
        controller
            .api()
            .mutations
            .borrow_mut()
            .push_back(Err(ApiError::Rejected {
                status: 404,
                detail: "Todo not found".into(),
            }));

        controller.dispatch(Event::DeleteRequested(item.id)).await;

        let state = controller.state();
        assert!(state.pending_deletes.is_empty());
        assert_eq!(state.todos, vec![item]);
        assert_eq!(state.notifications[0].message, "Todo not found");
        assert_eq!(controller.api().calls(), vec!["delete_todo"]);
    }

    #[tokio::test]
    async fn test_successful_delete_reloads_list() {
        let item = todo("done with");
        let controller = signed_in(vec![item.clone()]).await;
        controller.api().mutations.borrow_mut().push_back(Ok(()));
        controller.api().lists.borrow_mut().push_back(Ok(Vec::new()));

        controller.dispatch(Event::DeleteRequested(item.id)).await;

        let state = controller.state();
        assert!(state.todos.is_empty());
        assert!(state.pending_deletes.is_empty());
        assert_eq!(state.notifications[0].message, TODO_DELETED);
        assert_eq!(controller.api().calls(), vec!["delete_todo", "list_todos"]);
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_list() {
        let item = todo("keep");
        let controller = signed_in(vec![item.clone()]).await;
        controller.api().mutations.borrow_mut().push_back(Ok(()));
        controller
            .api()
            .lists
            .borrow_mut()
            .push_back(Err(ApiError::network("connection reset")));

        controller.dispatch(Event::CompleteRequested(item.id)).await;

        let state = controller.state();
        assert_eq!(state.todos, vec![item]);
        let messages: Vec<_> = state.notifications.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["Todo completed!", "Failed to load todos"]);
    }

    #[tokio::test]
    async fn test_weak_registration_never_reaches_network() {
        let controller = controller(FakeApi::default(), MemorySessionStore::new());

        controller
            .dispatch(Event::RegisterSubmitted(RegisterRequest {
                email: "new@example.com".into(),
                first_name: "New".into(),
                last_name: "User".into(),
                password: "short".into(),
            }))
            .await;

        assert!(controller.api().calls().is_empty());
        assert_eq!(controller.state().notifications.len(), 1);
    }

    #[tokio::test]
    async fn test_registration_shows_login_form() {
        let api = FakeApi::default();
        api.mutations.borrow_mut().push_back(Ok(()));
        let controller = controller(api, MemorySessionStore::new());

        controller
            .dispatch(Event::RegisterSubmitted(RegisterRequest {
                email: "new@example.com".into(),
                first_name: "New".into(),
                last_name: "User".into(),
                password: "Str0ng!pass".into(),
            }))
            .await;

        assert_eq!(controller.api().calls(), vec!["register"]);
        assert_eq!(controller.state().phase, Phase::Anonymous);
        assert!(
            controller
                .view()
                .effects
                .borrow()
                .contains(&UiEffect::ShowForm(Form::Login))
        );
    }

    #[tokio::test]
    async fn test_logout_is_local_only() {
        let controller = signed_in(vec![todo("a")]).await;

        controller.dispatch(Event::LogoutRequested).await;

        let state = controller.state();
        assert_eq!(state.phase, Phase::Anonymous);
        assert!(state.todos.is_empty());
        assert!(controller.api().calls().is_empty());
        assert_eq!(controller.session().get_token(), None);
        assert_eq!(controller.api().last_token(), None);
    }

    #[tokio::test]
    async fn test_every_transition_renders() {
        let controller = controller(FakeApi::default(), MemorySessionStore::new());
        controller.start().await;
        controller.dispatch(Event::LogoutRequested).await;

        assert_eq!(*controller.view().renders.borrow(), 2);
    }
}
