pub(crate) mod alerts;
pub(crate) mod auth_forms;
pub(crate) mod header;
pub(crate) mod loading;
pub(crate) mod password_modal;
pub(crate) mod strength_bar;
pub(crate) mod todo_form;
pub(crate) mod todo_list;

// Re-export components for convenience
pub use alerts::AlertList;
pub use auth_forms::AuthPanel;
pub use header::Header;
pub use loading::Loading;
pub use password_modal::PasswordModal;
pub use strength_bar::StrengthBar;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;

use web_sys::HtmlInputElement;
use yew::{Callback, InputEvent, TargetCast, UseStateHandle};

/// Mirrors an input's value into a state handle.
pub(crate) fn bind_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}
