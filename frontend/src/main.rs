mod api;
mod components;
mod persist;
mod reset;
mod store;

use components::agent_stage::AgentStage;
use components::chat_window_title::ChatWindowTitle;
use components::settings_modal::SettingsModal;
use reset::ResetRegistry;
use store::{Action, STORE_NAME, State, StoreContext};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let store = use_reducer(State::default);
    let resetters = (*use_state(ResetRegistry::default)).clone();

    // Make the settings store reachable through the process-wide reset
    // registry, alongside any other store that registers itself. The store
    // only exists once the component mounts, so registration happens in the
    // mount effect; nothing can call reset_all before the first render.
    {
        let resetters = resetters.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            resetters.register(STORE_NAME, move || store.dispatch(Action::ResetSettings));
            || ()
        });
    }

    let on_open_settings = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::OpenSettings))
    };

    html! {
        <ContextProvider<StoreContext> context={store.clone()}>
        <ContextProvider<ResetRegistry> context={resetters}>
            <div class="app-container">
                <header class="app-header">
                    <h1 class="app-title">
                        <ChatWindowTitle model={store.settings.custom_model_name.clone()} />
                    </h1>
                    <button class="btn btn-secondary" onclick={on_open_settings}>
                        {"Settings"}
                    </button>
                </header>

                <div class="main-stage">
                    <AgentStage />
                </div>

                if store.settings_open {
                    <SettingsModal />
                }
            </div>
        </ContextProvider<ResetRegistry>>
        </ContextProvider<StoreContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
