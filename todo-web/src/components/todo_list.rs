use shared::view::{TodoListView, TodoRow};
use uuid::Uuid;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TodoItemProps {
    pub row: TodoRow,
    pub on_complete: Callback<Uuid>,
    pub on_delete: Callback<Uuid>,
}

#[function_component(TodoItem)]
pub fn todo_item(props: &TodoItemProps) -> Html {
    let row = &props.row;
    let id = row.id;
    let inert = row.pending_delete;

    html! {
        <div
            class={classes!(row.container_class(), inert.then_some("pending-delete"))}
            style={inert.then_some("opacity: 0.5; pointer-events: none;")}
            data-id={id.to_string()}
        >
            <div class="d-flex justify-content-between align-items-start">
                <div class="flex-grow-1">
                    <div class="d-flex align-items-center gap-2 mb-1">
                        <span class="todo-description">{ row.description.clone() }</span>
                        <span class={classes!("badge", row.priority_class.clone(), "priority-badge")}>
                            { row.priority_label }
                        </span>
                    </div>
                    <div class="todo-meta">
                        if let Some(due) = &row.due {
                            <span class={classes!("due-date", due.overdue.then_some("overdue"))}>
                                { due.text.clone() }
                            </span>
                        }
                        if let Some(completed) = &row.completed_text {
                            <span class="completed-at">{ completed.clone() }</span>
                        }
                    </div>
                </div>
                <div class="todo-actions">
                    if row.show_complete {
                        <button
                            class="btn btn-success btn-sm complete-btn"
                            disabled={inert}
                            onclick={props.on_complete.reform(move |_: MouseEvent| id)}
                        >
                            {"Complete"}
                        </button>
                    }
                    if row.show_delete {
                        <button
                            class="btn btn-danger btn-sm delete-btn"
                            disabled={inert}
                            onclick={props.on_delete.reform(move |_: MouseEvent| id)}
                        >
                            {"Delete"}
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
    pub view: TodoListView,
    pub on_complete: Callback<Uuid>,
    pub on_delete: Callback<Uuid>,
}

#[function_component(TodoList)]
pub fn todo_list(props: &TodoListProps) -> Html {
    html! {
        <div id="todoList">
            {
                match &props.view {
                    TodoListView::Empty { message } => html! {
                        <p class="text-muted text-center">{ *message }</p>
                    },
                    TodoListView::Rows(rows) => rows.iter().map(|row| html! {
                        <TodoItem
                            key={row.id.to_string()}
                            row={row.clone()}
                            on_complete={props.on_complete.clone()}
                            on_delete={props.on_delete.clone()}
                        />
                    }).collect::<Html>(),
                }
            }
        </div>
    }
}
