//! Presentation rows for the todo list.
//!
//! [`render`] is pure apart from the `now` the caller supplies for the
//! overdue comparison. Input order is kept as the server returned it.

use crate::models::{TodoRecord, priority_label};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Shown instead of rows when the list is empty.
pub const EMPTY_PLACEHOLDER: &str = "No todos yet. Add one above!";

/// Due date display for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueView {
    pub text: String,
    pub overdue: bool,
}

/// One rendered todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: Uuid,
    pub description: String,
    pub priority_label: &'static str,
    /// `priority-<n>` with the raw server value.
    pub priority_class: String,
    pub due: Option<DueView>,
    /// `Completed: <time>` when the server recorded a completion instant.
    pub completed_text: Option<String>,
    pub completed: bool,
    pub show_complete: bool,
    pub show_delete: bool,
    /// A delete request is in flight; the row is dimmed and inert.
    pub pending_delete: bool,
}

impl TodoRow {
    /// Class list of the row container.
    #[must_use]
    pub fn container_class(&self) -> &'static str {
        if self.completed {
            "todo-item completed"
        } else {
            "todo-item"
        }
    }
}

/// The rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoListView {
    Empty { message: &'static str },
    Rows(Vec<TodoRow>),
}

impl TodoListView {
    #[must_use]
    pub fn rows(&self) -> &[TodoRow] {
        match self {
            Self::Empty { .. } => &[],
            Self::Rows(rows) => rows,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// A todo is overdue when it is still open and its due instant is strictly
/// before `now`.
#[must_use]
pub fn is_overdue(todo: &TodoRecord, now: DateTime<Utc>) -> bool {
    !todo.is_completed && todo.due_date.is_some_and(|due| due.0 < now)
}

fn row(todo: &TodoRecord, pending: &BTreeSet<Uuid>, now: DateTime<Utc>) -> TodoRow {
    TodoRow {
        id: todo.id,
        description: todo.description.clone(),
        priority_label: priority_label(todo.priority),
        priority_class: format!("priority-{}", todo.priority),
        due: todo.due_date.map(|due| DueView {
            text: format!("Due: {}", due.to_local_string()),
            overdue: is_overdue(todo, now),
        }),
        completed_text: todo
            .completed_at
            .map(|at| format!("Completed: {}", at.to_local_string())),
        completed: todo.is_completed,
        show_complete: !todo.is_completed,
        show_delete: true,
        pending_delete: pending.contains(&todo.id),
    }
}

/// Renders the list with no deletes in flight.
#[must_use]
pub fn render(todos: &[TodoRecord], now: DateTime<Utc>) -> TodoListView {
    render_with_pending(todos, &BTreeSet::new(), now)
}

/// Renders the list, dimming rows whose ids are in `pending`.
#[must_use]
pub fn render_with_pending(
    todos: &[TodoRecord],
    pending: &BTreeSet<Uuid>,
    now: DateTime<Utc>,
) -> TodoListView {
    if todos.is_empty() {
        return TodoListView::Empty {
            message: EMPTY_PLACEHOLDER,
        };
    }
    TodoListView::Rows(todos.iter().map(|todo| row(todo, pending, now)).collect())
}
