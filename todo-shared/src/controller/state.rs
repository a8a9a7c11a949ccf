use crate::models::{TodoRecord, UserRecord};
use crate::view::{self, TodoListView};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Authentication phase of the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Anonymous,
    /// A token is being obtained or a stored one is being checked.
    Authenticating,
    Authenticated,
}

/// Severity of a notification, mapped onto alert styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Danger,
    Info,
}

impl NotificationLevel {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
            Self::Info => "alert-info",
        }
    }
}

pub type NotificationId = u64;

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub level: NotificationLevel,
    pub message: String,
}

/// Forms the controller can ask the view to reset, open, or close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    Login,
    Register,
    Todo,
    Password,
}

/// Everything the client knows about the current session.
///
/// Only the controller writes to this; views read snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub phase: Phase,
    pub token: Option<String>,
    pub user: Option<UserRecord>,
    /// The last full list returned by the server.
    pub todos: Vec<TodoRecord>,
    /// Todos with a delete request in flight.
    pub pending_deletes: BTreeSet<Uuid>,
    pub notifications: Vec<Notification>,
    /// Set while a stored token is being checked at startup.
    pub restoring_session: bool,
    next_notification_id: NotificationId,
}

impl AppState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == Phase::Authenticated
    }

    /// `Welcome, <first name>!` once the profile is loaded.
    #[must_use]
    pub fn welcome_text(&self) -> Option<String> {
        self.user.as_ref().map(UserRecord::welcome_text)
    }

    /// Renders the current list at `now`.
    #[must_use]
    pub fn todo_view(&self, now: DateTime<Utc>) -> TodoListView {
        view::render_with_pending(&self.todos, &self.pending_deletes, now)
    }

    pub(crate) fn push_notification(
        &mut self,
        level: NotificationLevel,
        message: impl Into<String>,
    ) -> NotificationId {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notifications.push(Notification {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Removes a notification; returns whether it was still shown.
    pub(crate) fn remove_notification(&mut self, id: NotificationId) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|notification| notification.id != id);
        self.notifications.len() != before
    }

    /// Drops all session data, keeping notifications.
    pub(crate) fn clear_session(&mut self) {
        self.phase = Phase::Anonymous;
        self.token = None;
        self.user = None;
        self.todos.clear();
        self.pending_deletes.clear();
        self.restoring_session = false;
    }
}
