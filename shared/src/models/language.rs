use serde::{Deserialize, Serialize};

/// Output language chosen by the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub code: String,
}

impl Language {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    pub fn english() -> Self {
        Self::new("English", "en")
    }

    /// Languages the settings dialog offers.
    pub fn supported() -> Vec<Language> {
        vec![
            Self::english(),
            Self::new("French", "fr"),
            Self::new("German", "de"),
            Self::new("Spanish", "es"),
            Self::new("Japanese", "ja"),
        ]
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}
