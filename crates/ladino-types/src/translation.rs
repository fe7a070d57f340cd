use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// A translation field as authored: a single word or a list of words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Translation {
    Word(String),
    Words(Vec<String>),
}

impl Translation {
    /// Canonical word list. An empty string means "nothing recorded yet".
    pub fn into_words(self) -> Vec<String> {
        match self {
            Translation::Word(word) if word.is_empty() => Vec::new(),
            Translation::Word(word) => vec![word],
            Translation::Words(words) => words,
        }
    }
}

/// Normalized translations of one word form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Translations {
    /// Recognized language -> ordered target words
    #[serde(flatten)]
    pub words: BTreeMap<String, Vec<String>>,

    /// Languages the config does not know about, left as authored
    #[serde(flatten)]
    pub unrecognized: BTreeMap<String, Value>,
}

impl Translations {
    pub fn get(&self, language: &str) -> Option<&[String]> {
        self.words.get(language).map(Vec::as_slice)
    }

    /// First word recorded for `language`, if any
    pub fn first(&self, language: &str) -> Option<&str> {
        self.get(language)
            .and_then(|words| words.first())
            .map(String::as_str)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.unrecognized.is_empty()
    }
}
