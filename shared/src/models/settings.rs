use serde::{Deserialize, Serialize};

use super::language::Language;
use super::model::{ModelId, max_tokens_for};

pub const DEFAULT_TEMPERATURE: f64 = 0.9;
pub const DEFAULT_MAX_LOOPS: u32 = 25;
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// The user's generation preferences, one record per browser profile.
///
/// Serialized with the camelCase keys the persisted envelope has always
/// used, so existing local-storage copies keep loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSettings {
    pub language: Language,
    /// Empty string means "use the server's key".
    pub custom_api_key: String,
    pub custom_model_name: ModelId,
    pub custom_temperature: f64,
    pub custom_max_loops: u32,
    pub max_tokens: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            language: Language::english(),
            custom_api_key: String::new(),
            custom_model_name: ModelId::Gpt35Turbo,
            custom_temperature: DEFAULT_TEMPERATURE,
            custom_max_loops: DEFAULT_MAX_LOOPS,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// One settable field of [`ModelSettings`]. The store's update contract
/// takes exactly one of these per call, so every field write is explicit
/// and exhaustively matched.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsField {
    Language(Language),
    CustomApiKey(String),
    CustomModelName(ModelId),
    CustomTemperature(f64),
    CustomMaxLoops(u32),
    MaxTokens(u32),
}

impl ModelSettings {
    /// Merge a single field update into a copy of the record.
    ///
    /// Changing the model clamps `max_tokens` down to the new model's
    /// budget. No other field is ever auto-adjusted; in particular a
    /// direct `MaxTokens` write is stored as-is.
    pub fn with_update(&self, field: SettingsField) -> ModelSettings {
        let mut next = self.clone();
        match field {
            SettingsField::Language(language) => next.language = language,
            SettingsField::CustomApiKey(key) => next.custom_api_key = key,
            SettingsField::CustomModelName(model) => {
                let budget = max_tokens_for(&model);
                next.custom_model_name = model;
                if next.max_tokens > budget {
                    next.max_tokens = budget;
                }
            }
            SettingsField::CustomTemperature(temperature) => {
                next.custom_temperature = temperature;
            }
            SettingsField::CustomMaxLoops(loops) => next.custom_max_loops = loops,
            SettingsField::MaxTokens(tokens) => next.max_tokens = tokens,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = ModelSettings::default();
        assert_eq!(settings.language, Language::english());
        assert_eq!(settings.custom_api_key, "");
        assert_eq!(settings.custom_model_name, ModelId::Gpt35Turbo);
        assert_eq!(settings.custom_temperature, DEFAULT_TEMPERATURE);
        assert_eq!(settings.custom_max_loops, DEFAULT_MAX_LOOPS);
        assert_eq!(settings.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn update_touches_only_the_named_field() {
        let base = ModelSettings::default();
        let next = base.with_update(SettingsField::CustomTemperature(0.2));
        assert_eq!(next.custom_temperature, 0.2);
        assert_eq!(next.language, base.language);
        assert_eq!(next.custom_api_key, base.custom_api_key);
        assert_eq!(next.custom_model_name, base.custom_model_name);
        assert_eq!(next.custom_max_loops, base.custom_max_loops);
        assert_eq!(next.max_tokens, base.max_tokens);
    }

    #[test]
    fn upgrading_model_never_raises_max_tokens() {
        let base = ModelSettings::default();
        let next = base.with_update(SettingsField::CustomModelName(ModelId::Gpt4));
        assert_eq!(next.custom_model_name, ModelId::Gpt4);
        // 4000 fits within gpt-4's 8000 budget, so it stays put.
        assert_eq!(next.max_tokens, 4000);
    }

    #[test]
    fn downgrading_model_clamps_max_tokens() {
        let settings = ModelSettings {
            custom_model_name: ModelId::Gpt4,
            max_tokens: 8000,
            ..ModelSettings::default()
        };
        let next = settings.with_update(SettingsField::CustomModelName(ModelId::Gpt35Turbo));
        assert_eq!(next.max_tokens, 4000);
    }

    #[test]
    fn direct_max_tokens_write_is_not_clamped() {
        // The clamp fires only on model changes; an over-budget value written
        // directly is stored as-is.
        let settings = ModelSettings {
            custom_model_name: ModelId::Gpt4,
            ..ModelSettings::default()
        };
        let next = settings.with_update(SettingsField::MaxTokens(9000));
        assert_eq!(next.max_tokens, 9000);
    }

    #[test]
    fn model_change_restores_budget_invariant() {
        let mut settings = ModelSettings::default();
        settings = settings.with_update(SettingsField::MaxTokens(9000));
        for model in ModelId::KNOWN {
            let budget = max_tokens_for(&model);
            let next = settings.with_update(SettingsField::CustomModelName(model));
            assert!(next.max_tokens <= budget);
        }
    }

    #[test]
    fn persists_with_camel_case_keys() {
        let value = serde_json::to_value(ModelSettings::default()).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "language",
            "customApiKey",
            "customModelName",
            "customTemperature",
            "customMaxLoops",
            "maxTokens",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 6);
    }
}
