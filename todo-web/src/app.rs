use crate::components::{AlertList, AuthPanel, Header, Loading, PasswordModal, TodoForm, TodoList};
use crate::config;
use crate::models::ui_state::{AuthTab, UiStore};
use crate::session::LocalStorageSession;
use crate::view::{WebController, WebView};
use chrono::Utc;
use shared::api::TodoClient;
use shared::controller::{Controller, Event, Form, Phase};
use std::rc::Rc;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::{AttrValue, Callback, Html, function_component, html, use_effect_with, use_state};
use yewdux::Dispatch;
use yewdux::prelude::{use_dispatch, use_store_value};

const DELETE_PROMPT: &str = "Are you sure you want to delete this todo?";

/// Handle to the controller that outlives re-renders.
#[derive(Clone)]
pub struct AppContext {
    controller: Rc<WebController>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

impl AppContext {
    pub fn new(dispatch: Dispatch<UiStore>) -> Self {
        let config = config::load();
        let controller = Rc::new_cyclic(|weak| {
            Controller::new(
                TodoClient::new(&config.api_base_url),
                LocalStorageSession::new(&config.token_storage_key),
                WebView::new(dispatch, config.notification_timeout_ms, weak.clone()),
            )
        });
        Self { controller }
    }

    /// Runs `event` in the background.
    pub fn send(&self, event: Event) {
        let controller = self.controller.clone();
        spawn_local(async move {
            controller.dispatch(event).await;
        });
    }

    pub fn start(&self) {
        let controller = self.controller.clone();
        spawn_local(async move {
            controller.start().await;
        });
    }

    /// A callback that turns its input into an event and sends it.
    pub fn callback<T: 'static>(&self, make: impl Fn(T) -> Event + 'static) -> Callback<T> {
        let context = self.clone();
        Callback::from(move |value| context.send(make(value)))
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(DELETE_PROMPT).ok())
        .unwrap_or(false)
}

#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<UiStore>();
    let store = use_store_value::<UiStore>();
    let context = {
        let dispatch = dispatch.clone();
        use_state(move || AppContext::new(dispatch))
    };

    {
        let context = (*context).clone();
        use_effect_with((), move |_| {
            context.start();
            || ()
        });
    }

    let on_dismiss = context.callback(Event::NotificationDismissed);
    let on_logout = context.callback(|()| Event::LogoutRequested);
    let on_change_password = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce_mut(|store| store.password_modal_open = true))
    };
    let on_close_password = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce_mut(|store| store.password_modal_open = false))
    };
    let on_tab = Callback::from(move |tab: AuthTab| dispatch.reduce_mut(|store| store.auth_tab = tab));

    let state = &store.app;
    let body = match state.phase {
        Phase::Authenticating if state.restoring_session => html! { <Loading /> },
        Phase::Anonymous | Phase::Authenticating => html! {
            <AuthPanel
                tab={store.auth_tab}
                busy={state.phase == Phase::Authenticating}
                login_generation={store.forms.get(Form::Login)}
                register_generation={store.forms.get(Form::Register)}
                {on_tab}
                on_login={context.callback(|(email, password): (String, String)| {
                    Event::LoginSubmitted { email, password }
                })}
                on_register={context.callback(Event::RegisterSubmitted)}
            />
        },
        Phase::Authenticated => {
            let on_delete = {
                let context = (*context).clone();
                Callback::from(move |id: Uuid| {
                    if confirm_delete() {
                        context.send(Event::DeleteRequested(id));
                    }
                })
            };
            html! {
                <div id="todoSection">
                    <TodoForm
                        key={store.forms.get(Form::Todo)}
                        on_submit={context.callback(Event::AddTodoSubmitted)}
                    />
                    <TodoList
                        view={state.todo_view(Utc::now())}
                        on_complete={context.callback(Event::CompleteRequested)}
                        {on_delete}
                    />
                    <PasswordModal
                        key={store.forms.get(Form::Password)}
                        open={store.password_modal_open}
                        on_submit={context.callback(Event::ChangePasswordSubmitted)}
                        on_close={on_close_password}
                    />
                </div>
            }
        }
    };

    html! {
        <>
            <Header
                welcome={state.welcome_text().map(AttrValue::from)}
                {on_change_password}
                {on_logout}
            />
            <main class="container">
                <AlertList notifications={state.notifications.clone()} {on_dismiss} />
                { body }
            </main>
        </>
    }
}
