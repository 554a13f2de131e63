use serde::{Deserialize, Serialize};
use std::fmt;

pub const GPT_35_TURBO: &str = "gpt-3.5-turbo";
pub const GPT_4: &str = "gpt-4";
pub const GPT_4O: &str = "gpt-4o";

/// Budget used for any model the registry does not know (the smallest tier).
pub const FALLBACK_MAX_TOKENS: u32 = 4000;

/// Identifier of a language-model backend.
///
/// Unrecognized names survive as [`ModelId::Other`] instead of failing to
/// deserialize, so settings written by a newer build still load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelId {
    Gpt35Turbo,
    Gpt4,
    Gpt4o,
    Other(String),
}

impl ModelId {
    /// The three identifiers the settings dialog offers.
    pub const KNOWN: [ModelId; 3] = [ModelId::Gpt35Turbo, ModelId::Gpt4, ModelId::Gpt4o];

    pub fn as_str(&self) -> &str {
        match self {
            ModelId::Gpt35Turbo => GPT_35_TURBO,
            ModelId::Gpt4 => GPT_4,
            ModelId::Gpt4o => GPT_4O,
            ModelId::Other(name) => name,
        }
    }
}

impl Default for ModelId {
    fn default() -> Self {
        ModelId::Gpt35Turbo
    }
}

impl From<String> for ModelId {
    fn from(name: String) -> Self {
        match name.as_str() {
            GPT_35_TURBO => ModelId::Gpt35Turbo,
            GPT_4 => ModelId::Gpt4,
            GPT_4O => ModelId::Gpt4o,
            _ => ModelId::Other(name),
        }
    }
}

impl From<ModelId> for String {
    fn from(model: ModelId) -> Self {
        model.as_str().to_owned()
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maximum context window (in tokens) a model accepts. Total: unknown
/// identifiers get [`FALLBACK_MAX_TOKENS`] rather than an error.
pub fn max_tokens_for(model: &ModelId) -> u32 {
    match model {
        ModelId::Gpt35Turbo => 4000,
        ModelId::Gpt4 | ModelId::Gpt4o => 8000,
        ModelId::Other(_) => FALLBACK_MAX_TOKENS,
    }
}
