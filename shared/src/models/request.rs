use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::ModelId;
use super::settings::ModelSettings;

/// Wire-shaped projection of [`ModelSettings`], named the way the backend
/// API expects its fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiModelSettings {
    pub language: String,
    pub model: ModelId,
    pub temperature: f64,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_api_key: Option<String>,
}

impl From<&ModelSettings> for ApiModelSettings {
    fn from(settings: &ModelSettings) -> Self {
        Self {
            language: settings.language.name.clone(),
            model: settings.custom_model_name.clone(),
            temperature: settings.custom_temperature,
            max_tokens: settings.max_tokens,
            custom_api_key: Some(settings.custom_api_key.clone()),
        }
    }
}

/// Backend's verdict on what to do with a task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub reasoning: String,
    pub action: String,
    pub arg: String,
}

/// Envelope for one agent step. Only `model_settings` and `goal` are always
/// present; the rest is filled in per endpoint by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<Uuid>,
    pub model_settings: ApiModelSettings,
    pub goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_tasks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RequestBody {
    /// Envelope with every optional field unset.
    pub fn new(model_settings: ApiModelSettings, goal: impl Into<String>) -> Self {
        Self {
            run_id: None,
            model_settings,
            goal: goal.into(),
            task: None,
            tasks: None,
            last_task: None,
            result: None,
            results: None,
            completed_tasks: None,
            analysis: None,
            tool_names: None,
            message: None,
        }
    }
}

// Agent endpoint replies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTasksResponse {
    pub new_tasks: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExecuteResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::language::Language;

    #[test]
    fn projection_renames_without_dropping() {
        let settings = ModelSettings {
            language: Language::new("French", "fr"),
            custom_api_key: "sk-test".to_string(),
            custom_model_name: ModelId::Gpt4,
            custom_temperature: 0.5,
            custom_max_loops: 10,
            max_tokens: 6000,
        };
        let api = ApiModelSettings::from(&settings);
        assert_eq!(api.language, "French");
        assert_eq!(api.model, ModelId::Gpt4);
        assert_eq!(api.temperature, 0.5);
        assert_eq!(api.max_tokens, 6000);
        assert_eq!(api.custom_api_key.as_deref(), Some("sk-test"));
        // The loop budget is a client-side concern and stays behind.
        let value = serde_json::to_value(&api).unwrap();
        let object = value.as_object().unwrap();
        for key in ["language", "model", "temperature", "max_tokens", "custom_api_key"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 5);
    }

    #[test]
    fn empty_api_key_is_still_carried() {
        let api = ApiModelSettings::from(&ModelSettings::default());
        assert_eq!(api.custom_api_key.as_deref(), Some(""));
    }

    #[test]
    fn request_body_skips_unset_fields() {
        let body = RequestBody::new(
            ApiModelSettings::from(&ModelSettings::default()),
            "Write a haiku",
        );
        let value = serde_json::to_value(&body).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("model_settings"));
        assert_eq!(object["goal"], "Write a haiku");
    }

    #[test]
    fn request_body_serializes_populated_fields() {
        let mut body = RequestBody::new(
            ApiModelSettings::from(&ModelSettings::default()),
            "Plan a trip",
        );
        body.run_id = Some(Uuid::new_v4());
        body.task = Some("Book flights".to_string());
        body.analysis = Some(Analysis {
            reasoning: "A tool helps here".to_string(),
            action: "search".to_string(),
            arg: "flights to Lisbon".to_string(),
        });
        let value = serde_json::to_value(&body).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("run_id"));
        assert_eq!(object["task"], "Book flights");
        assert_eq!(object["analysis"]["action"], "search");
        assert!(!object.contains_key("results"));
    }
}
