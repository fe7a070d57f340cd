//! Flattening validated records into word forms.

use ladino_config::Config;
use ladino_types::{Cell, FormKind, RawVersion, Record, Spelling, Version, WordForm};
use serde_yaml::Value;

use crate::error::{LadinoError, Result};
use crate::normalize::normalize_translations;

/// Authored word forms of a record: one per version, then one per
/// conjugation cell.
///
/// Alternative spellings are not included here, see [`alternative_forms`].
pub fn expand_record(config: &Config, record: &Record, record_index: usize) -> Result<Vec<WordForm>> {
    let mut forms = Vec::with_capacity(
        record.versions.len()
            + record
                .conjugations
                .as_ref()
                .map_or(0, |conjugations| conjugations.cell_count()),
    );

    // Record comments go on the first version only
    let mut comments = record
        .comments
        .clone()
        .filter(|comments| !is_empty_list(comments));

    for (index, version) in record.versions.iter().enumerate() {
        let mut form = version_form(version, record, record_index, index);
        if let Some(comments) = comments.take() {
            form.comments = Some(comments);
        }
        forms.push(form);
    }

    if let Some(conjugations) = &record.conjugations {
        for tense in &conjugations.tenses {
            if !config.is_tense(&tense.name) {
                return Err(LadinoError::schema(
                    &record.source,
                    format!("Verb conjugation time '{}' is not recognized", tense.name),
                ));
            }
            for cell in &tense.cells {
                forms.push(cell_form(config, &tense.name, cell, record, record_index)?);
            }
        }
    }

    Ok(forms)
}

fn is_empty_list(value: &Value) -> bool {
    matches!(value, Value::Sequence(items) if items.is_empty())
}

fn version_form(version: &Version, record: &Record, record_index: usize, index: usize) -> WordForm {
    WordForm {
        ladino: version.ladino.clone(),
        accented: version.accented.clone(),
        audio: version.audio.clone(),
        translations: version.translations.clone(),
        gender: version.gender.clone(),
        number: version.number.clone(),
        alternative_spelling: version.alternative_spelling.clone(),
        source: record.source.clone(),
        comments: version.comments.clone(),
        orijen: Some(record.orijen.clone()),
        languages: Some(record.linguas.clone()),
        extra: version.extra.clone(),
        kind: FormKind::Version { index },
        record: record_index,
    }
}

fn cell_form(
    config: &Config,
    tense: &str,
    cell: &Cell,
    record: &Record,
    record_index: usize,
) -> Result<WordForm> {
    let file = record.source.as_str();
    if !config.is_pronoun(&cell.pronoun) {
        return Err(LadinoError::schema(
            file,
            format!("Incorrect pronoun '{}' in verb time '{tense}'", cell.pronoun),
        ));
    }

    let RawVersion {
        ladino,
        accented,
        audio,
        translations,
        gender,
        number,
        comments,
        alternative_spelling,
        extra,
    } = cell.version.clone();

    let ladino = ladino.ok_or_else(|| {
        LadinoError::schema(
            file,
            format!(
                "The field 'ladino' is missing from verb time: '{tense}' pronoun '{}'",
                cell.pronoun
            ),
        )
    })?;

    let translations = match &translations {
        Some(translations) => normalize_translations(config, translations, file)?,
        None => Default::default(),
    };

    Ok(WordForm {
        ladino,
        accented,
        audio,
        translations,
        gender,
        number,
        alternative_spelling,
        source: record.source.clone(),
        comments,
        orijen: None,
        languages: None,
        extra,
        kind: FormKind::Conjugation {
            tense: tense.to_string(),
            pronoun: cell.pronoun.clone(),
        },
        record: record_index,
    })
}

/// One derived form per alternative spelling of `form`.
pub fn alternative_forms(form: &WordForm) -> Vec<WordForm> {
    form.alternative_spelling
        .iter()
        .map(|alternative| with_spelling(form, alternative))
        .collect()
}

/// `form` respelled as `alternative`.
///
/// Only the spelling fields change. The derived form lists its siblings and
/// the parent's spelling as alternatives, but never itself.
pub fn with_spelling(form: &WordForm, alternative: &Spelling) -> WordForm {
    let parent = Spelling {
        ladino: form.ladino.clone(),
        accented: form.accented.clone(),
        audio: form.audio.clone(),
    };

    let alternative_spelling = form
        .alternative_spelling
        .iter()
        .cloned()
        .chain(std::iter::once(parent))
        .filter(|spelling| spelling.ladino != alternative.ladino)
        .collect();

    WordForm {
        ladino: alternative.ladino.clone(),
        accented: alternative.accented.clone(),
        audio: alternative.audio.clone(),
        alternative_spelling,
        kind: FormKind::AlternativeSpelling {
            of: form.ladino.clone(),
        },
        ..form.clone()
    }
}
