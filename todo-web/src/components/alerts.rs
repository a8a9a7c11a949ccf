use shared::controller::{Notification, NotificationId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AlertListProps {
    pub notifications: Vec<Notification>,
    pub on_dismiss: Callback<NotificationId>,
}

/// Stack of dismissible notifications, oldest first.
#[function_component(AlertList)]
pub fn alert_list(props: &AlertListProps) -> Html {
    html! {
        <div id="alertContainer" class="alert-container">
            { for props.notifications.iter().map(|notification| {
                let id = notification.id;
                let onclick = props.on_dismiss.reform(move |_: MouseEvent| id);
                html! {
                    <div
                        key={id}
                        class={classes!("alert", notification.level.css_class(), "alert-dismissible", "fade", "show")}
                        role="alert"
                    >
                        { notification.message.clone() }
                        <button type="button" class="btn-close" aria-label="Close" {onclick}></button>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::controller::NotificationLevel;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn renders_each_notification_with_its_level() {
        let props = AlertListProps {
            notifications: vec![
                Notification {
                    id: 1,
                    level: NotificationLevel::Success,
                    message: "Todo added successfully!".into(),
                },
                Notification {
                    id: 2,
                    level: NotificationLevel::Danger,
                    message: "<b>nope</b>".into(),
                },
            ],
            on_dismiss: Callback::noop(),
        };

        let rendered = yew::LocalServerRenderer::<AlertList>::with_props(props)
            .render()
            .await;

        assert!(rendered.contains("alert-success"));
        assert!(rendered.contains("Todo added successfully!"));
        assert!(rendered.contains("alert-danger"));
        assert!(rendered.contains("&lt;b&gt;nope&lt;/b&gt;"));
        assert!(!rendered.contains("<b>nope</b>"));
    }
}
