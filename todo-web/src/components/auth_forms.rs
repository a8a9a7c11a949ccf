use super::{StrengthBar, bind_input};
use crate::models::ui_state::AuthTab;
use shared::models::RegisterRequest;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    #[prop_or_default]
    pub busy: bool,
    /// Emits `(email, password)`.
    pub on_submit: Callback<(String, String)>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(((*email).clone(), (*password).clone()));
        })
    };

    html! {
        <form id="loginForm" {onsubmit}>
            <div class="mb-3">
                <label class="form-label" for="loginEmail">{"Email"}</label>
                <input
                    id="loginEmail"
                    class="form-control"
                    type="email"
                    required=true
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="loginPassword">{"Password"}</label>
                <input
                    id="loginPassword"
                    class="form-control"
                    type="password"
                    required=true
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                />
            </div>
            <button class="btn btn-primary w-100" type="submit" disabled={props.busy}>
                {if props.busy { "Signing in..." } else { "Login" }}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    #[prop_or_default]
    pub busy: bool,
    pub on_submit: Callback<RegisterRequest>,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let email = use_state(String::new);
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let email = email.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(RegisterRequest {
                email: (*email).clone(),
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                password: (*password).clone(),
            });
        })
    };

    html! {
        <form id="registerForm" {onsubmit}>
            <div class="mb-3">
                <label class="form-label" for="registerEmail">{"Email"}</label>
                <input
                    id="registerEmail"
                    class="form-control"
                    type="email"
                    required=true
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                />
            </div>
            <div class="row">
                <div class="col mb-3">
                    <label class="form-label" for="registerFirstName">{"First name"}</label>
                    <input
                        id="registerFirstName"
                        class="form-control"
                        required=true
                        value={(*first_name).clone()}
                        oninput={bind_input(&first_name)}
                    />
                </div>
                <div class="col mb-3">
                    <label class="form-label" for="registerLastName">{"Last name"}</label>
                    <input
                        id="registerLastName"
                        class="form-control"
                        required=true
                        value={(*last_name).clone()}
                        oninput={bind_input(&last_name)}
                    />
                </div>
            </div>
            <div class="mb-3">
                <label class="form-label" for="registerPassword">{"Password"}</label>
                <input
                    id="registerPassword"
                    class="form-control"
                    type="password"
                    required=true
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                />
                <StrengthBar password={(*password).clone()} />
            </div>
            <button class="btn btn-success w-100" type="submit" disabled={props.busy}>
                {"Register"}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthPanelProps {
    pub tab: AuthTab,
    #[prop_or_default]
    pub busy: bool,
    pub login_generation: u32,
    pub register_generation: u32,
    pub on_tab: Callback<AuthTab>,
    pub on_login: Callback<(String, String)>,
    pub on_register: Callback<RegisterRequest>,
}

/// Login and registration forms behind two tabs.
#[function_component(AuthPanel)]
pub fn auth_panel(props: &AuthPanelProps) -> Html {
    let tab_button = |tab: AuthTab, id: &'static str, label: &'static str| {
        let onclick = props.on_tab.reform(move |_: MouseEvent| tab);
        html! {
            <li class="nav-item">
                <button
                    id={id}
                    type="button"
                    class={classes!("nav-link", (props.tab == tab).then_some("active"))}
                    {onclick}
                >
                    {label}
                </button>
            </li>
        }
    };

    html! {
        <div id="authSection" class="card shadow-sm">
            <div class="card-body">
                <ul class="nav nav-tabs mb-3">
                    { tab_button(AuthTab::Login, "login-tab", "Login") }
                    { tab_button(AuthTab::Register, "register-tab", "Register") }
                </ul>
                {
                    match props.tab {
                        AuthTab::Login => html! {
                            <LoginForm
                                key={props.login_generation}
                                busy={props.busy}
                                on_submit={props.on_login.clone()}
                            />
                        },
                        AuthTab::Register => html! {
                            <RegisterForm
                                key={props.register_generation}
                                busy={props.busy}
                                on_submit={props.on_register.clone()}
                            />
                        },
                    }
                }
            </div>
        </div>
    }
}
