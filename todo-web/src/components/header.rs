use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// `Welcome, <first name>!` while signed in.
    #[prop_or_default]
    pub welcome: Option<AttrValue>,
    pub on_change_password: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <nav class="navbar navbar-dark bg-primary mb-4">
            <div class="container">
                <span class="navbar-brand">{"Todo App"}</span>
                <div class="d-flex align-items-center gap-2">
                    <span id="userInfo" class="text-white">
                        { props.welcome.clone().unwrap_or_default() }
                    </span>
                    if props.welcome.is_some() {
                        <button
                            class="btn btn-outline-light btn-sm"
                            onclick={props.on_change_password.reform(|_: MouseEvent| ())}
                        >
                            {"Change Password"}
                        </button>
                        <button
                            id="logoutBtn"
                            class="btn btn-outline-light btn-sm"
                            onclick={props.on_logout.reform(|_: MouseEvent| ())}
                        >
                            {"Logout"}
                        </button>
                    }
                </div>
            </div>
        </nav>
    }
}
