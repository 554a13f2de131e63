use shared::models::{ModelSettings, SettingsField};
use std::rc::Rc;
use yew::prelude::*;

use crate::persist;

/// Name under which the settings store registers its reset callback.
pub const STORE_NAME: &str = "model_settings";

#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub settings: ModelSettings,
    pub settings_open: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            settings: persist::load(),
            settings_open: false,
        }
    }
}

pub enum Action {
    /// Merge one field into the current settings record. Changing the model
    /// clamps `max_tokens` to the new model's budget.
    UpdateSettings(SettingsField),
    /// Restore the hardcoded defaults.
    ResetSettings,
    OpenSettings,
    CloseSettings,
}

impl State {
    /// Apply an action, returning the next state and whether the settings
    /// record changed and must be written back.
    fn apply(&self, action: Action) -> (State, bool) {
        let mut next = self.clone();
        let mut settings_changed = false;

        match action {
            Action::UpdateSettings(field) => {
                next.settings = self.settings.with_update(field);
                settings_changed = true;
            }
            Action::ResetSettings => {
                next.settings = ModelSettings::default();
                settings_changed = true;
            }
            Action::OpenSettings => {
                next.settings_open = true;
            }
            Action::CloseSettings => {
                next.settings_open = false;
            }
        }

        (next, settings_changed)
    }
}

impl Reducible for State {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // Each reduce reads the latest record before merging, so rapid
        // successive updates observe each other's writes.
        let (next, settings_changed) = self.apply(action);
        if settings_changed {
            persist::save(&next.settings);
        }
        next.into()
    }
}

pub type StoreContext = UseReducerHandle<State>;

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Language, ModelId};

    fn mutated_state() -> State {
        let settings = ModelSettings::default()
            .with_update(SettingsField::CustomModelName(ModelId::Gpt4))
            .with_update(SettingsField::MaxTokens(8000))
            .with_update(SettingsField::CustomApiKey("sk-local".to_string()))
            .with_update(SettingsField::Language(Language::new("German", "de")));
        State {
            settings,
            settings_open: true,
        }
    }

    #[test]
    fn reset_restores_exactly_the_defaults() {
        let state = mutated_state();
        assert_ne!(state.settings, ModelSettings::default());

        let (next, settings_changed) = state.apply(Action::ResetSettings);
        assert_eq!(next.settings, ModelSettings::default());
        assert!(settings_changed);
    }

    #[test]
    fn update_merges_and_marks_settings_for_persistence() {
        let state = State {
            settings: ModelSettings::default(),
            settings_open: false,
        };
        let (next, settings_changed) =
            state.apply(Action::UpdateSettings(SettingsField::CustomTemperature(0.3)));
        assert_eq!(next.settings.custom_temperature, 0.3);
        assert!(settings_changed);
    }

    #[test]
    fn modal_toggles_leave_settings_alone() {
        let state = mutated_state();
        let (next, settings_changed) = state.apply(Action::CloseSettings);
        assert!(!settings_changed);
        assert!(!next.settings_open);
        assert_eq!(next.settings, state.settings);
    }
}
