use shared::models::ModelId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub model: ModelId,
}

/// Window title: brand prefix plus a suffix styled per model. Unknown
/// models are echoed verbatim with the muted style.
#[function_component(ChatWindowTitle)]
pub fn chat_window_title(props: &Props) -> Html {
    let (suffix, class) = title_parts(&props.model);

    html! {
        <>
            {"Task"}<span class={class}>{suffix}</span>
        </>
    }
}

fn title_parts(model: &ModelId) -> (String, &'static str) {
    match model {
        ModelId::Gpt4o => ("GPT-4o".to_string(), "title-accent"),
        ModelId::Gpt4 => ("GPT-4".to_string(), "title-accent"),
        ModelId::Gpt35Turbo => ("GPT-3.5".to_string(), "title-muted"),
        ModelId::Other(name) => (name.clone(), "title-muted"),
    }
}
