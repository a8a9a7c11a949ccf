//! Terminal rendering of controller output.

use shared::controller::{AppState, NotificationLevel, UiEffect, View};
use shared::view::{TodoListView, TodoRow};
use std::cell::RefCell;

/// Prints notifications as they appear and remembers the errors.
#[derive(Debug, Default)]
pub struct TerminalView {
    errors: RefCell<Vec<String>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first error shown since the last call, if any.
    pub fn take_error(&self) -> Option<String> {
        let mut errors = self.errors.borrow_mut();
        let first = errors.first().cloned();
        errors.clear();
        first
    }
}

impl View for TerminalView {
    fn render(&self, _state: &AppState) {}

    fn apply(&self, effect: UiEffect, state: &AppState) {
        let UiEffect::ScheduleDismiss(id) = effect else {
            return;
        };
        let Some(notification) = state.notifications.iter().find(|n| n.id == id) else {
            return;
        };
        match notification.level {
            NotificationLevel::Danger => {
                self.errors.borrow_mut().push(notification.message.clone());
            }
            NotificationLevel::Success | NotificationLevel::Info => {
                println!("{}", notification.message);
            }
        }
    }
}

/// One line per todo: status, id, description, priority, then dates.
pub fn format_row(row: &TodoRow) -> String {
    let mut line = format!(
        "[{}] {}  {} ({})",
        if row.completed { "x" } else { " " },
        row.id,
        row.description,
        row.priority_label
    );
    if let Some(due) = &row.due {
        line.push_str("  ");
        line.push_str(&due.text);
        if due.overdue {
            line.push_str(" OVERDUE");
        }
    }
    if let Some(completed) = &row.completed_text {
        line.push_str("  ");
        line.push_str(completed);
    }
    line
}

pub fn format_list(view: &TodoListView) -> String {
    match view {
        TodoListView::Empty { message } => (*message).to_string(),
        TodoListView::Rows(rows) => rows.iter().map(format_row).collect::<Vec<_>>().join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::controller::{Event, Notification, update};
    use shared::view::{DueView, EMPTY_PLACEHOLDER};
    use uuid::Uuid;

    fn row() -> TodoRow {
        TodoRow {
            id: Uuid::nil(),
            description: "Buy milk".into(),
            priority_label: "Medium",
            priority_class: "priority-2".into(),
            due: None,
            completed_text: None,
            completed: false,
            show_complete: true,
            show_delete: true,
            pending_delete: false,
        }
    }

    #[test]
    fn test_open_row() {
        assert_eq!(
            format_row(&row()),
            "[ ] 00000000-0000-0000-0000-000000000000  Buy milk (Medium)"
        );
    }

    #[test]
    fn test_overdue_and_completed_rows() {
        let overdue = TodoRow {
            due: Some(DueView {
                text: "Due: 2025-01-01 09:00:00".into(),
                overdue: true,
            }),
            ..row()
        };
        assert!(format_row(&overdue).ends_with("Due: 2025-01-01 09:00:00 OVERDUE"));

        let done = TodoRow {
            completed: true,
            completed_text: Some("Completed: 2025-01-02 10:00:00".into()),
            ..row()
        };
        let line = format_row(&done);
        assert!(line.starts_with("[x]"));
        assert!(line.ends_with("Completed: 2025-01-02 10:00:00"));
    }

    #[test]
    fn test_empty_list_prints_placeholder() {
        let view = TodoListView::Empty {
            message: EMPTY_PLACEHOLDER,
        };
        assert_eq!(format_list(&view), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_errors_are_collected() {
        let view = TerminalView::new();
        let mut state = AppState::default();
        for effect in update(&mut state, Event::LogoutRequested) {
            if let shared::controller::Effect::Ui(ui) = effect {
                view.apply(ui, &state);
            }
        }
        assert_eq!(view.take_error(), None);

        state.notifications.push(Notification {
            id: 99,
            level: NotificationLevel::Danger,
            message: "Todo not found".into(),
        });
        view.apply(UiEffect::ScheduleDismiss(99), &state);
        assert_eq!(view.take_error().as_deref(), Some("Todo not found"));
        assert_eq!(view.take_error(), None);
    }
}
