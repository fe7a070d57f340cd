use ladino_config::Config;
use ladino_types::{Translation, Translations};
use serde_yaml::{Mapping, Value};

use crate::error::{LadinoError, Result};

/// Turn an authored `translations` mapping into per-language word lists.
///
/// Only languages the config knows are normalized; anything else is kept
/// verbatim so new languages can be authored before the config lists them.
pub fn normalize_translations(
    config: &Config,
    translations: &Mapping,
    file: &str,
) -> Result<Translations> {
    let mut normalized = Translations::default();

    for (key, value) in translations {
        let Some(language) = key.as_str() else {
            return Err(LadinoError::value(
                file,
                format!("Translation key {key:?} is not a string"),
            ));
        };

        if !config.is_language(language) {
            normalized
                .unrecognized
                .insert(language.to_string(), value.clone());
            continue;
        }

        let words = parse_translation(value)
            .ok_or_else(|| {
                LadinoError::value(
                    file,
                    format!(
                        "Bad type {} for {language} in value {value:?}",
                        type_name(value)
                    ),
                )
            })?
            .into_words();
        normalized.words.insert(language.to_string(), words);
    }

    Ok(normalized)
}

fn parse_translation(value: &Value) -> Option<Translation> {
    serde_yaml::from_value(value.clone()).ok()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
