//! Field and vocabulary checks for a single word file.
//!
//! A file either comes out of here as a fully typed [`Record`] or stops the
//! whole build with an error naming the file and the offending field.

use ladino_config::Config;
use ladino_types::record::RECORD_FIELDS;
use ladino_types::{Cell, Conjugations, RawRecord, RawVersion, Record, Tense, Version};
use serde_yaml::{Mapping, Value};

use crate::error::{LadinoError, Result};
use crate::normalize::normalize_translations;

/// Grammar classes whose versions must carry gender and number
const GENDERED: [&str; 2] = ["noun", "pronoun"];

/// Validate one parsed word file against the config.
pub fn validate_record(config: &Config, document: &Value, file: &str) -> Result<Record> {
    let Value::Mapping(fields) = document else {
        return Err(LadinoError::schema(file, "Word file is not a mapping"));
    };
    check_fields(fields, file)?;

    let raw: RawRecord = serde_yaml::from_value(document.clone())
        .map_err(|e| LadinoError::schema(file, format!("Malformed word file: {e}")))?;

    let grammar = check_grammar(config, &raw, file)?;
    let orijen = check_orijen(config, &raw, file)?;
    let linguas = check_languages(config, &raw, file)?;
    let kategorias = check_categories(config, &raw, file)?;

    let raw_versions = raw
        .versions
        .ok_or_else(|| LadinoError::schema(file, "The 'versions' field is missing"))?;
    if raw_versions.is_empty() {
        return Err(LadinoError::schema(file, "The 'versions' field is empty"));
    }

    let versions = raw_versions
        .into_iter()
        .map(|version| check_version(config, version, file))
        .collect::<Result<Vec<_>>>()?;

    let conjugations = raw
        .conjugations
        .as_ref()
        .map(|tables| parse_conjugations(tables, file))
        .transpose()?;

    Ok(Record {
        source: file.to_string(),
        id: raw.id,
        grammar,
        orijen,
        kategorias,
        linguas,
        comments: raw.comments,
        versions,
        conjugations,
    })
}

fn check_fields(fields: &Mapping, file: &str) -> Result<()> {
    let mut invalid: Vec<String> = fields
        .keys()
        .filter(|key| {
            key.as_str()
                .is_none_or(|name| !RECORD_FIELDS.contains(&name))
        })
        .map(|key| match key.as_str() {
            Some(name) => name.to_string(),
            None => format!("{key:?}"),
        })
        .collect();

    if invalid.is_empty() {
        return Ok(());
    }
    invalid.sort();
    Err(LadinoError::schema(
        file,
        format!("Invalid fields {invalid:?} found"),
    ))
}

fn check_grammar(config: &Config, raw: &RawRecord, file: &str) -> Result<String> {
    let grammar = raw
        .grammar
        .clone()
        .ok_or_else(|| LadinoError::schema(file, "The 'grammar' field is missing"))?;

    if !config.is_grammar(&grammar) {
        return Err(LadinoError::schema(
            file,
            format!("Invalid grammar '{grammar}'"),
        ));
    }

    let is_verb = grammar == "verb";
    if is_verb && raw.conjugations.is_none() {
        return Err(LadinoError::schema(
            file,
            "Grammar is 'verb', but there is NO 'conjugations' field",
        ));
    }
    if !is_verb && raw.conjugations.is_some() {
        return Err(LadinoError::schema(
            file,
            "Grammar is NOT a 'verb', but there are conjugations",
        ));
    }

    // Adjectives carry gender inconsistently, so only nouns and pronouns are checked
    if GENDERED.contains(&grammar.as_str()) {
        for (index, version) in raw.versions.iter().flatten().enumerate() {
            check_gender_and_number(config, version, index, file)?;
        }
    }

    Ok(grammar)
}

fn check_gender_and_number(
    config: &Config,
    version: &RawVersion,
    index: usize,
    file: &str,
) -> Result<()> {
    let name = version_name(version, index);

    let gender = version.gender.as_deref().ok_or_else(|| {
        LadinoError::schema(file, format!("The 'gender' field is missing in {name}"))
    })?;
    if !config.is_gender(gender) {
        return Err(LadinoError::schema(
            file,
            format!("Invalid value '{gender}' in 'gender' field in {name}"),
        ));
    }

    let number = version.number.as_deref().ok_or_else(|| {
        LadinoError::schema(file, format!("The 'number' field is missing in {name}"))
    })?;
    if !config.is_number(number) {
        return Err(LadinoError::schema(
            file,
            format!("Invalid value '{number}' in 'number' field in {name}"),
        ));
    }

    Ok(())
}

fn version_name(version: &RawVersion, index: usize) -> String {
    match &version.ladino {
        Some(ladino) => format!("version {index} ('{ladino}')"),
        None => format!("version {index}"),
    }
}

fn check_orijen(config: &Config, raw: &RawRecord, file: &str) -> Result<String> {
    let orijen = raw
        .orijen
        .clone()
        .ok_or_else(|| LadinoError::schema(file, "The 'orijen' field is missing"))?;

    if !config.is_origin(&orijen) {
        return Err(LadinoError::schema(
            file,
            format!("Invalid orijen '{orijen}'"),
        ));
    }
    Ok(orijen)
}

fn check_languages(config: &Config, raw: &RawRecord, file: &str) -> Result<Vec<String>> {
    let linguas = raw.linguas.clone().unwrap_or_default();
    if let Some(language) = linguas.iter().find(|l| !config.is_language(l)) {
        return Err(LadinoError::schema(
            file,
            format!(
                "Invalid value in linguas field: '{language}'. Valid values are {:?}",
                config.linguas
            ),
        ));
    }
    Ok(linguas)
}

fn check_categories(config: &Config, raw: &RawRecord, file: &str) -> Result<Vec<String>> {
    let kategorias = raw.kategorias.clone().unwrap_or_default();
    if let Some(category) = kategorias.iter().find(|c| !config.is_category(c)) {
        return Err(LadinoError::schema(
            file,
            format!("Invalid category '{category}'"),
        ));
    }
    Ok(kategorias)
}

fn check_version(config: &Config, raw: RawVersion, file: &str) -> Result<Version> {
    let ladino = raw
        .ladino
        .ok_or_else(|| LadinoError::schema(file, "The ladino 'version' is missing"))?;
    if ladino.trim().is_empty() {
        return Err(LadinoError::schema(file, "The ladino 'version' is empty"));
    }

    if raw.accented.as_deref() == Some(ladino.as_str()) {
        tracing::warn!("The accented is the same as the ladino in '{file}'");
    }

    let translations = match &raw.translations {
        Some(translations) => normalize_translations(config, translations, file)?,
        None => Default::default(),
    };

    Ok(Version {
        ladino,
        accented: raw.accented,
        audio: raw.audio,
        translations,
        gender: raw.gender,
        number: raw.number,
        comments: raw.comments,
        alternative_spelling: raw.alternative_spelling,
        extra: raw.extra,
    })
}

/// Parse the tense -> pronoun -> cell tables, keeping authored order.
fn parse_conjugations(tables: &Mapping, file: &str) -> Result<Conjugations> {
    let mut conjugations = Conjugations::default();

    for (tense, cells) in tables {
        let tense = key_name(tense, file)?;
        let Value::Mapping(cells) = cells else {
            return Err(LadinoError::schema(
                file,
                format!("Verb time '{tense}' is not a mapping of pronouns"),
            ));
        };

        let mut parsed = Vec::with_capacity(cells.len());
        for (pronoun, cell) in cells {
            let pronoun = key_name(pronoun, file)?;
            let version: RawVersion = serde_yaml::from_value(cell.clone()).map_err(|e| {
                LadinoError::schema(
                    file,
                    format!("Malformed cell for verb time '{tense}' pronoun '{pronoun}': {e}"),
                )
            })?;
            parsed.push(Cell { pronoun, version });
        }

        conjugations.tenses.push(Tense {
            name: tense,
            cells: parsed,
        });
    }

    Ok(conjugations)
}

fn key_name(key: &Value, file: &str) -> Result<String> {
    key.as_str()
        .map(str::to_string)
        .ok_or_else(|| LadinoError::schema(file, format!("Conjugation key {key:?} is not a string")))
}
