use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBarProps {
    pub message: Option<String>,
}

#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    html! {
        <div class="status" role="status" aria-live="polite">
            {props.message.clone().unwrap_or_default()}
        </div>
    }
}
