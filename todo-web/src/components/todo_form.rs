use super::bind_input;
use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use shared::models::{CreateTodoRequest, PRIORITY_LABELS, Timestamp};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Reads a `datetime-local` input value as a local instant.
///
/// Blank or unparsable input means no due date.
pub fn parse_due_input(value: &str) -> Option<Timestamp> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| Timestamp(local.with_timezone(&Utc)))
}

#[derive(Properties, PartialEq)]
pub struct TodoFormProps {
    pub on_submit: Callback<CreateTodoRequest>,
}

#[function_component(TodoForm)]
pub fn todo_form(props: &TodoFormProps) -> Html {
    let description = use_state(String::new);
    let priority = use_state(|| 0_u8);
    let due = use_state(String::new);

    let on_priority_change = {
        let priority = priority.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                priority.set(select.value().parse().unwrap_or_default());
            }
        })
    };

    let onsubmit = {
        let description = description.clone();
        let priority = priority.clone();
        let due = due.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(CreateTodoRequest::new(
                (*description).clone(),
                *priority,
                parse_due_input(&due),
            ));
        })
    };

    html! {
        <form id="todoForm" class="card card-body shadow-sm mb-4" {onsubmit}>
            <div class="row g-2 align-items-end">
                <div class="col-md-6">
                    <label class="form-label" for="todoDescription">{"Description"}</label>
                    <input
                        id="todoDescription"
                        class="form-control"
                        placeholder="What needs to be done?"
                        required=true
                        value={(*description).clone()}
                        oninput={bind_input(&description)}
                    />
                </div>
                <div class="col-md-2">
                    <label class="form-label" for="todoPriority">{"Priority"}</label>
                    <select id="todoPriority" class="form-select" onchange={on_priority_change}>
                        { for PRIORITY_LABELS.iter().enumerate().map(|(index, label)| html! {
                            <option
                                value={index.to_string()}
                                selected={index == usize::from(*priority)}
                            >
                                { *label }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="col-md-3">
                    <label class="form-label" for="todoDueDate">{"Due date"}</label>
                    <input
                        id="todoDueDate"
                        class="form-control"
                        type="datetime-local"
                        value={(*due).clone()}
                        oninput={bind_input(&due)}
                    />
                </div>
                <div class="col-md-1">
                    <button class="btn btn-primary w-100" type="submit">{"Add"}</button>
                </div>
            </div>
        </form>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod render_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn offers_every_priority() {
        let rendered = yew::LocalServerRenderer::<TodoForm>::with_props(TodoFormProps {
            on_submit: Callback::noop(),
        })
        .render()
        .await;

        for label in PRIORITY_LABELS {
            assert!(rendered.contains(label));
        }
        assert!(rendered.contains("datetime-local"));
    }
}
