use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use shared::models::ModelSettings;

const STORAGE_KEY: &str = "taskloop-settings-storage-v2";
const STORAGE_VERSION: u32 = 2;

/// Envelope written to local storage. The version tag lets a future shape
/// change discard or migrate stale copies instead of misparsing them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSettings {
    pub state: PersistedState,
    pub version: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub model_settings: ModelSettings,
}

impl PersistedSettings {
    fn wrap(settings: &ModelSettings) -> Self {
        Self {
            state: PersistedState {
                model_settings: settings.clone(),
            },
            version: STORAGE_VERSION,
        }
    }

    fn unwrap_current(self) -> Option<ModelSettings> {
        (self.version == STORAGE_VERSION).then_some(self.state.model_settings)
    }
}

/// Settings for this profile, or the hardcoded defaults when nothing usable
/// is stored.
pub fn load() -> ModelSettings {
    match LocalStorage::get::<PersistedSettings>(STORAGE_KEY) {
        Ok(envelope) => envelope.unwrap_current().unwrap_or_default(),
        Err(_) => ModelSettings::default(),
    }
}

/// Fire-and-forget write. Callers never see storage failures; they are
/// logged and dropped.
pub fn save(settings: &ModelSettings) {
    if let Err(err) = LocalStorage::set(STORAGE_KEY, PersistedSettings::wrap(settings)) {
        tracing::warn!("failed to persist model settings: {err}");
    }
}
