use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::translation::Translations;
use crate::ENGLISH;

/// Top-level fields a word file may carry
pub const RECORD_FIELDS: [&str; 8] = [
    "conjugations",
    "grammar",
    "versions",
    "id",
    "orijen",
    "kategorias",
    "linguas",
    "comments",
];

/// One word file, exactly as deserialized.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub grammar: Option<String>,
    pub orijen: Option<String>,
    pub versions: Option<Vec<RawVersion>>,
    pub conjugations: Option<Mapping>,
    pub kategorias: Option<Vec<String>>,
    pub linguas: Option<Vec<String>>,
    pub comments: Option<Value>,
    pub id: Option<Value>,
}

/// One sense of a word (or one conjugation cell), as authored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawVersion {
    pub ladino: Option<String>,
    pub accented: Option<String>,
    pub audio: Option<String>,
    pub translations: Option<Mapping>,
    pub gender: Option<String>,
    pub number: Option<String>,
    pub comments: Option<Value>,
    #[serde(default)]
    pub alternative_spelling: Vec<Spelling>,

    /// Anything else (examples, notes...) travels along untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// An alternative spelling: overrides the parent's spelling fields only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spelling {
    pub ladino: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accented: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

/// A version that passed validation, with its translations normalized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Version {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternative_spelling: Vec<Spelling>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Conjugation tables in authored order: tense -> pronoun -> cell.
#[derive(Debug, Clone, Default)]
pub struct Conjugations {
    pub tenses: Vec<Tense>,
}

#[derive(Debug, Clone)]
pub struct Tense {
    pub name: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub pronoun: String,
    pub version: RawVersion,
}

impl Conjugations {
    pub fn tense(&self, name: &str) -> Option<&Tense> {
        self.tenses.iter().find(|tense| tense.name == name)
    }

    pub fn has_tense(&self, name: &str) -> bool {
        self.tense(name).is_some()
    }

    /// Total number of cells across all tenses
    pub fn cell_count(&self) -> usize {
        self.tenses.iter().map(|tense| tense.cells.len()).sum()
    }
}

/// A validated word file.
#[derive(Debug, Clone)]
pub struct Record {
    /// File name the record was read from
    pub source: String,
    pub id: Option<Value>,
    pub grammar: String,
    pub orijen: String,
    pub kategorias: Vec<String>,
    pub linguas: Vec<String>,
    pub comments: Option<Value>,
    pub versions: Vec<Version>,
    pub conjugations: Option<Conjugations>,
}

impl Record {
    /// The first version's spelling
    pub fn headword(&self) -> &str {
        self.versions
            .first()
            .map(|version| version.ladino.as_str())
            .unwrap_or_default()
    }

    /// Sort key used by the category and origin groupings
    pub fn sort_key(&self) -> (&str, &[String]) {
        let english = self
            .versions
            .first()
            .and_then(|version| version.translations.get(ENGLISH))
            .unwrap_or_default();
        (self.headword(), english)
    }

    pub fn is_verb(&self) -> bool {
        self.grammar == "verb"
    }
}
