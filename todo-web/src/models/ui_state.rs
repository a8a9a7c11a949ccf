use shared::controller::{AppState, Form, UiEffect};
use yewdux::Store;

/// Which of the two account forms is showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Per-form counters; bumping one remounts the form with empty fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormGenerations {
    login: u32,
    register: u32,
    todo: u32,
    password: u32,
}

impl FormGenerations {
    pub fn get(self, form: Form) -> u32 {
        match form {
            Form::Login => self.login,
            Form::Register => self.register,
            Form::Todo => self.todo,
            Form::Password => self.password,
        }
    }

    fn bump(&mut self, form: Form) {
        let slot = match form {
            Form::Login => &mut self.login,
            Form::Register => &mut self.register,
            Form::Todo => &mut self.todo,
            Form::Password => &mut self.password,
        };
        *slot = slot.wrapping_add(1);
    }
}

/// Everything the components render from.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct UiStore {
    /// Latest controller snapshot.
    pub app: AppState,
    pub forms: FormGenerations,
    pub auth_tab: AuthTab,
    pub password_modal_open: bool,
}

impl UiStore {
    /// Applies the form-related UI effects; timers are handled by the view.
    pub fn apply(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::ResetForm(form) => self.forms.bump(form),
            UiEffect::ShowForm(Form::Login) => self.auth_tab = AuthTab::Login,
            UiEffect::ShowForm(Form::Register) => self.auth_tab = AuthTab::Register,
            UiEffect::ShowForm(Form::Password) => self.password_modal_open = true,
            UiEffect::CloseForm(Form::Password) => self.password_modal_open = false,
            UiEffect::ShowForm(Form::Todo)
            | UiEffect::CloseForm(_)
            | UiEffect::ScheduleDismiss(_)
            | UiEffect::CancelDismiss(_) => {}
        }
    }
}
