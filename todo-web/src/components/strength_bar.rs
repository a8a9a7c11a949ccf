use shared::validation::StrengthMeter;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StrengthBarProps {
    pub password: AttrValue,
}

/// Password strength bar with a caption.
///
/// Purely advisory: the submit gate is `is_password_strong`.
#[function_component(StrengthBar)]
pub fn strength_bar(props: &StrengthBarProps) -> Html {
    let meter = StrengthMeter::measure(&props.password);

    html! {
        <div class="password-strength mt-2">
            <div class="progress" style="height: 6px;">
                <div
                    class={classes!("progress-bar", meter.level.css_class())}
                    role="progressbar"
                    style={format!("width: {}%", meter.percent)}
                ></div>
            </div>
            <small class="form-text">{ meter.text }</small>
        </div>
    }
}
