use shared::models::{Language, ModelId, SettingsField, max_tokens_for};
use yew::prelude::*;

use crate::reset::ResetRegistry;
use crate::store::{Action, StoreContext};

/// Settings dialog. Every input dispatches a single-field update straight
/// into the store, so the clamp rule sees each change as it happens.
#[function_component(SettingsModal)]
pub fn settings_modal() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let resetters = use_context::<ResetRegistry>().expect("Reset registry context not found");

    let settings = store.settings.clone();
    let token_budget = max_tokens_for(&settings.custom_model_name);

    let on_close = {
        let store = store.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            store.dispatch(Action::CloseSettings);
        })
    };

    let on_overlay_click = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::CloseSettings))
    };

    let on_reset = {
        let resetters = resetters.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            resetters.reset_all();
        })
    };

    let on_language_change = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let code = select.value();
            if let Some(language) = Language::supported().into_iter().find(|l| l.code == code) {
                store.dispatch(Action::UpdateSettings(SettingsField::Language(language)));
            }
        })
    };

    let on_api_key_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            store.dispatch(Action::UpdateSettings(SettingsField::CustomApiKey(
                input.value(),
            )));
        })
    };

    let on_model_change = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            store.dispatch(Action::UpdateSettings(SettingsField::CustomModelName(
                ModelId::from(select.value()),
            )));
        })
    };

    let on_temperature_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Ok(val) = input.value().parse::<f64>() {
                store.dispatch(Action::UpdateSettings(SettingsField::CustomTemperature(val)));
            }
        })
    };

    let on_max_loops_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Ok(val) = input.value().parse::<u32>() {
                store.dispatch(Action::UpdateSettings(SettingsField::CustomMaxLoops(val)));
            }
        })
    };

    let on_max_tokens_input = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Ok(val) = input.value().parse::<u32>() {
                store.dispatch(Action::UpdateSettings(SettingsField::MaxTokens(val)));
            }
        })
    };

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class="modal-content" onclick={|e: MouseEvent| e.stop_propagation()}>
                <div class="modal-header">
                    <h2 class="modal-title">{"Settings"}</h2>
                    <button class="close-btn" onclick={on_close.clone()}>{"×"}</button>
                </div>

                <div class="modal-body">
                    <div class="form-group">
                        <label class="form-label">{"Language"}</label>
                        <select class="form-select" onchange={on_language_change}>
                            {for Language::supported().into_iter().map(|lang| html! {
                                <option value={lang.code.clone()}
                                    selected={lang.code == settings.language.code}>
                                    {lang.name}
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="form-group">
                        <label class="form-label">{"API Key"}</label>
                        <input type="password" class="form-input"
                            value={settings.custom_api_key.clone()}
                            oninput={on_api_key_input}
                            placeholder="sk-... (blank uses the server key)"
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label">{"Model"}</label>
                        <select class="form-select" onchange={on_model_change}>
                            {for ModelId::KNOWN.into_iter().map(|model| html! {
                                <option value={model.as_str().to_owned()}
                                    selected={model == settings.custom_model_name}>
                                    {model.as_str().to_owned()}
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="form-grid-2">
                        <div class="form-group">
                            <label class="form-label">{"Temperature"}</label>
                            <input type="number" class="form-input"
                                step="0.01" min="0" max="1"
                                value={settings.custom_temperature.to_string()}
                                oninput={on_temperature_input}
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label">{"Loop Budget"}</label>
                            <input type="number" class="form-input"
                                min="1"
                                value={settings.custom_max_loops.to_string()}
                                oninput={on_max_loops_input}
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label class="form-label">{"Max Tokens"}</label>
                        <input type="number" class="form-input"
                            min="1" max={token_budget.to_string()}
                            value={settings.max_tokens.to_string()}
                            oninput={on_max_tokens_input}
                        />
                    </div>

                    <div class="form-actions">
                        <button class="btn btn-secondary" onclick={on_reset}>{"Restore Defaults"}</button>
                        <button class="btn btn-primary" onclick={on_close}>{"Done"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
