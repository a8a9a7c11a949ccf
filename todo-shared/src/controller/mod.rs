//! Session state machine shared by the web and terminal front-ends.
//!
//! [`update`] is a pure transition from `(state, event)` to a list of
//! [`Effect`]s. [`Controller`] owns the state and performs those effects
//! against a [`TodoApi`](crate::api::TodoApi), a
//! [`SessionStore`](crate::session::SessionStore) and a [`View`].

mod driver;
mod state;
mod update;

pub use driver::{Controller, View};
pub use state::{AppState, Form, Notification, NotificationId, NotificationLevel, Phase};
pub use update::{
    Command, Effect, Event, LOAD_FAILED, LOGIN_SUCCESS, LOGOUT_SUCCESS, PASSWORD_CHANGED,
    REGISTER_SUCCESS, TODO_ADDED, TODO_COMPLETED, TODO_DELETED, UiEffect, update,
};
