use std::collections::BTreeMap;

use serde::Serialize;
use serde_yaml::Value;

use crate::record::Spelling;
use crate::translation::Translations;
use crate::{ENGLISH, LADINO};

/// Where a word form came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormKind {
    /// Entry `index` of the record's `versions`
    Version { index: usize },
    /// One cell of a conjugation table
    Conjugation { tense: String, pronoun: String },
    /// Derived from the parent form's alternative spelling list
    AlternativeSpelling { of: String },
}

/// The atomic indexing unit.
///
/// Serializes to the same shape the word files use, so its JSON length can
/// be used as a rough measure of how much an entry carries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WordForm {
    pub ladino: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accented: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    pub translations: Translations,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternative_spelling: Vec<Spelling>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orijen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,

    #[serde(skip)]
    pub kind: FormKind,
    /// Index of the owning record in ingestion order
    #[serde(skip)]
    pub record: usize,
}

impl WordForm {
    /// First English translation, or "" when there is none
    pub fn english(&self) -> &str {
        self.translations.first(ENGLISH).unwrap_or_default()
    }

    /// Number of authored examples that carry a Ladino sentence
    pub fn example_count(&self) -> usize {
        match self.extra.get("examples") {
            Some(Value::Sequence(examples)) => examples
                .iter()
                .filter(|example| example.get(LADINO).is_some())
                .count(),
            _ => 0,
        }
    }

    pub fn is_alternative(&self) -> bool {
        matches!(self.kind, FormKind::AlternativeSpelling { .. })
    }

    /// Length of the JSON rendering with sorted keys
    pub fn serialized_len(&self) -> usize {
        // serde_yaml mappings keep authored order, so go through a BTreeMap-backed value
        serde_json::to_value(self)
            .and_then(|value| serde_json::to_string(&value))
            .map(|json| json.len())
            .unwrap_or(usize::MAX)
    }
}
