use std::env;

fn default_words_dir() -> String {
    "words".to_string()
}

/// Per-run knobs, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory of word files, relative to the dictionary repository
    pub words_dir: String,
    /// Stop after this many word files
    pub limit: Option<usize>,
}

impl Settings {
    pub fn from_env() -> Self {
        let words_dir = env::var("LADINO_WORDS_DIR").unwrap_or_else(|_| default_words_dir());

        let limit = env::var("LADINO_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok());

        Settings { words_dir, limit }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words_dir: default_words_dir(),
            limit: None,
        }
    }
}
