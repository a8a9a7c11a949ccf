use yew::{Html, function_component, html};

/// Shown while a stored session is being checked.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="d-flex justify-content-center py-5">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">{"Loading..."}</span>
            </div>
        </div>
    }
}
