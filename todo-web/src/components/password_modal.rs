use super::{StrengthBar, bind_input};
use shared::models::ChangePasswordRequest;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PasswordModalProps {
    pub open: bool,
    pub on_submit: Callback<ChangePasswordRequest>,
    pub on_close: Callback<()>,
}

#[function_component(PasswordModal)]
pub fn password_modal(props: &PasswordModalProps) -> Html {
    let current = use_state(String::new);
    let new_password = use_state(String::new);
    let confirm = use_state(String::new);

    if !props.open {
        return html! {};
    }

    let onsubmit = {
        let current = current.clone();
        let new_password = new_password.clone();
        let confirm = confirm.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(ChangePasswordRequest {
                current_password: (*current).clone(),
                new_password: (*new_password).clone(),
                new_password_confirm: (*confirm).clone(),
            });
        })
    };
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <>
            <div class="modal fade show d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog">
                    <form id="passwordForm" class="modal-content" {onsubmit}>
                        <div class="modal-header">
                            <h5 class="modal-title">{"Change Password"}</h5>
                            <button type="button" class="btn-close" aria-label="Close" onclick={on_close.clone()}></button>
                        </div>
                        <div class="modal-body">
                            <div class="mb-3">
                                <label class="form-label" for="currentPassword">{"Current password"}</label>
                                <input
                                    id="currentPassword"
                                    class="form-control"
                                    type="password"
                                    required=true
                                    value={(*current).clone()}
                                    oninput={bind_input(&current)}
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="newPassword">{"New password"}</label>
                                <input
                                    id="newPassword"
                                    class="form-control"
                                    type="password"
                                    required=true
                                    value={(*new_password).clone()}
                                    oninput={bind_input(&new_password)}
                                />
                                <StrengthBar password={(*new_password).clone()} />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="confirmPassword">{"Confirm new password"}</label>
                                <input
                                    id="confirmPassword"
                                    class="form-control"
                                    type="password"
                                    required=true
                                    value={(*confirm).clone()}
                                    oninput={bind_input(&confirm)}
                                />
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" onclick={on_close}>{"Cancel"}</button>
                            <button type="submit" class="btn btn-primary">{"Change Password"}</button>
                        </div>
                    </form>
                </div>
            </div>
            <div class="modal-backdrop fade show"></div>
        </>
    }
}
