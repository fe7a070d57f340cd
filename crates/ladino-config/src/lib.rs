use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

pub use self::error::ConfigError;
pub use self::settings::Settings;

pub mod error;
pub mod settings;

/// Name of the vocabulary file at the root of a dictionary repository
pub const CONFIG_FILE: &str = "config.yaml";

/// Sections every config file must spell out, in the order they are checked
pub const REQUIRED_SECTIONS: [&str; 11] = [
    "linguas",
    "kategorias",
    "orijenes",
    "gramatika",
    "gender",
    "numero",
    "pajinas",
    "listas",
    "tiempos",
    "pronombres",
    "verbos-iregolares",
];

/// Controlled vocabularies every word file is validated against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Target languages
    pub linguas: Vec<String>,
    pub kategorias: Vec<String>,
    pub orijenes: Vec<String>,
    /// Grammar classes
    pub gramatika: Vec<String>,
    pub gender: Vec<String>,
    pub numero: Vec<String>,
    /// Fixed content pages, only used by page generators
    pub pajinas: Value,
    /// Curated list name -> headwords in display order
    pub listas: BTreeMap<String, Vec<String>>,
    /// Verb tenses
    pub tiempos: Vec<String>,
    pub pronombres: Vec<String>,
    pub verbos_iregolares: Vec<String>,
}

impl Config {
    /// Load `config.yaml` from the root of a dictionary repository.
    pub fn load(path_to_repo: &Path) -> Result<Self, ConfigError> {
        let path = path_to_repo.join(CONFIG_FILE);
        tracing::info!("Loading config from {}", path.display());
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&text, &path.display().to_string())
    }

    /// Parse a config document. `origin` only shows up in error messages.
    pub fn from_yaml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let document: Value = serde_yaml::from_str(text).map_err(|source| ConfigError::Yaml {
            path: origin.to_string(),
            source,
        })?;

        let Value::Mapping(sections) = &document else {
            return Err(ConfigError::NotAMapping(origin.to_string()));
        };

        // No defaults: every section has to be there
        for field in REQUIRED_SECTIONS {
            if !sections.contains_key(field) {
                return Err(ConfigError::MissingField {
                    field,
                    path: origin.to_string(),
                });
            }
        }

        serde_yaml::from_value(document).map_err(|source| ConfigError::Yaml {
            path: origin.to_string(),
            source,
        })
    }

    pub fn is_language(&self, language: &str) -> bool {
        contains(&self.linguas, language)
    }

    pub fn is_category(&self, category: &str) -> bool {
        contains(&self.kategorias, category)
    }

    pub fn is_origin(&self, orijen: &str) -> bool {
        contains(&self.orijenes, orijen)
    }

    pub fn is_grammar(&self, grammar: &str) -> bool {
        contains(&self.gramatika, grammar)
    }

    pub fn is_gender(&self, gender: &str) -> bool {
        contains(&self.gender, gender)
    }

    pub fn is_number(&self, number: &str) -> bool {
        contains(&self.numero, number)
    }

    pub fn is_tense(&self, tense: &str) -> bool {
        contains(&self.tiempos, tense)
    }

    pub fn is_pronoun(&self, pronoun: &str) -> bool {
        contains(&self.pronombres, pronoun)
    }

    pub fn is_irregular(&self, verb: &str) -> bool {
        contains(&self.verbos_iregolares, verb)
    }
}

fn contains(values: &[String], value: &str) -> bool {
    values.iter().any(|candidate| candidate == value)
}
