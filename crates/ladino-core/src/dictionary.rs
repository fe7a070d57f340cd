use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;

use ladino_config::Config;
use ladino_types::{Record, WordForm};
use serde_yaml::Value;

use crate::error::Result;
use crate::expand::expand_record;
use crate::grouping::{Buckets, Groupings};
use crate::index::{Count, CrossIndex, Pages, WordMapping};
use crate::language::Conjugator;
use crate::loader::{read_document, word_files};
use crate::validate::validate_record;

/// Everything the page generators need, built in one pass over the word files.
#[derive(Debug)]
pub struct Dictionary {
    /// Word files as parsed, in ingestion order
    pub yaml_files: Vec<Value>,
    /// The same files after validation
    pub records: Vec<Rc<Record>>,
    /// One entry per version and per conjugation cell
    pub words: Vec<WordForm>,

    pub word_mapping: WordMapping,
    pub pages: Pages,
    pub count: BTreeMap<String, Count>,

    pub categories: Buckets,
    pub orijenes: Buckets,
    pub lists: Buckets,
    pub gramer: Buckets,
    pub languages: Buckets,
}

impl Dictionary {
    /// Records whose files were read, by file name
    pub fn record(&self, source: &str) -> Option<&Rc<Record>> {
        self.records.iter().find(|record| record.source == source)
    }

    /// Forms indexed under a folded word in `language`
    pub fn page(&self, language: &str, word: &str) -> &[WordForm] {
        self.pages
            .get(language)
            .and_then(|words| words.get(word))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Accepts word files one at a time and builds the [`Dictionary`] at the end.
pub struct DictionaryBuilder<'a> {
    config: &'a Config,
    conjugator: Option<&'a dyn Conjugator>,
    check_lists: bool,
    groupings: Groupings,
    yaml_files: Vec<Value>,
    records: Vec<Rc<Record>>,
    words: Vec<WordForm>,
}

impl<'a> DictionaryBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            conjugator: None,
            check_lists: false,
            groupings: Groupings::new(config),
            yaml_files: Vec::new(),
            records: Vec::new(),
            words: Vec::new(),
        }
    }

    /// Fill in regular conjugations the word files leave out
    pub fn with_conjugator(mut self, conjugator: &'a dyn Conjugator) -> Self {
        self.conjugator = Some(conjugator);
        self
    }

    /// Fail in [`finish`](Self::finish) when a curated list names a word
    /// with no word file. Only for builds that read the whole corpus.
    pub fn with_list_check(mut self) -> Self {
        self.check_lists = true;
        self
    }

    /// Validate, expand and group one word file.
    pub fn add_document(&mut self, document: Value, file: &str) -> Result<()> {
        let mut record = validate_record(self.config, &document, file)?;

        if let (Some(conjugator), true) = (self.conjugator, record.is_verb()) {
            let infinitive = record.headword().to_string();
            if let Some(conjugations) = record.conjugations.as_mut() {
                let synthesized = conjugator.conjugate(self.config, &infinitive, conjugations);
                if !synthesized.is_empty() {
                    tracing::debug!(
                        "Synthesized {} tenses for '{}'",
                        synthesized.len(),
                        infinitive
                    );
                }
                conjugations.tenses.extend(synthesized);
            }
        }

        let record_index = self.records.len();
        self.words
            .extend(expand_record(self.config, &record, record_index)?);

        let record = Rc::new(record);
        self.groupings.collect(self.config, &record);
        self.records.push(record);
        self.yaml_files.push(document);
        Ok(())
    }

    /// Sort the groupings and build the cross-language indexes.
    pub fn finish(self) -> Result<Dictionary> {
        tracing::info!("Collect more data");
        let DictionaryBuilder {
            config,
            check_lists,
            mut groupings,
            yaml_files,
            records,
            words,
            ..
        } = self;

        if check_lists {
            groupings.check_lists(config)?;
        }
        groupings.sort(config);

        let mut index = CrossIndex::new(&config.linguas);
        for word in &words {
            index.add(word);
        }

        let Groupings {
            categories,
            orijenes,
            lists,
            gramer,
            languages,
        } = groupings;

        Ok(Dictionary {
            yaml_files,
            records,
            words,
            word_mapping: index.word_mapping,
            pages: index.pages,
            count: index.count,
            categories,
            orijenes,
            lists,
            gramer,
            languages,
        })
    }
}

/// Read every word file under `path_to_dictionary` and build the dictionary.
///
/// Fails on the first problem; there is no partial result. Without a
/// `limit`, every word named by a curated list must have a word file.
pub fn load_dictionary(
    config: &Config,
    limit: Option<usize>,
    path_to_dictionary: &Path,
) -> Result<Dictionary> {
    load_dictionary_with(config, limit, path_to_dictionary, None)
}

/// Same as [`load_dictionary`], optionally synthesizing regular conjugations.
pub fn load_dictionary_with(
    config: &Config,
    limit: Option<usize>,
    path_to_dictionary: &Path,
    conjugator: Option<&dyn Conjugator>,
) -> Result<Dictionary> {
    tracing::info!("Path to dictionary: '{}'", path_to_dictionary.display());

    let mut builder = DictionaryBuilder::new(config);
    if let Some(conjugator) = conjugator {
        builder = builder.with_conjugator(conjugator);
    }
    // A limited run cannot know what the skipped files hold
    if limit.is_none() {
        builder = builder.with_list_check();
    }

    for path in word_files(path_to_dictionary, limit)? {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let document = read_document(&path)?;
        builder.add_document(document, &file)?;
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LadinoError;
    use crate::tests::test_config;
    use ladino_types::{Cell, Conjugations, RawVersion, Tense};

    fn add(builder: &mut DictionaryBuilder, file: &str, yaml: &str) -> Result<()> {
        builder.add_document(serde_yaml::from_str(yaml).unwrap(), file)
    }

    #[test]
    fn test_builder_collects_everything() {
        let config = test_config();
        let mut builder = DictionaryBuilder::new(&config);
        add(
            &mut builder,
            "blanko.yaml",
            "
grammar: adjective
orijen: espanyol
kategorias: [animal]
linguas: [ebreo]
versions:
  - ladino: blanko
    translations: {inglez: white, ebreo: lavan}
",
        )
        .unwrap();

        let dictionary = builder.finish().unwrap();
        assert_eq!(dictionary.yaml_files.len(), 1);
        assert_eq!(dictionary.words.len(), 1);
        assert_eq!(dictionary.lists["kolores"].len(), 1);
        assert_eq!(dictionary.categories["animal"].len(), 1);
        assert_eq!(dictionary.languages["ebreo"].len(), 1);
        assert_eq!(dictionary.gramer["adjective"].len(), 1);
        assert_eq!(dictionary.page("ebreo", "lavan")[0].ladino, "blanko");
        assert!(dictionary.page("ebreo", "tov").is_empty());
        assert!(dictionary.record("blanko.yaml").is_some());
        assert_eq!(dictionary.count["ladino"].words, 1);
        assert_eq!(dictionary.count["ebreo"].words, 1);
    }

    #[test]
    fn test_first_error_stops_the_build() {
        let config = test_config();
        let mut builder = DictionaryBuilder::new(&config);
        let err = add(&mut builder, "bad.yaml", "grammar: noun\norijen: espanyol\nversions: [{ladino: x}]\n")
            .unwrap_err();
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn test_list_check_is_opt_in() {
        let config = test_config();
        let blanko = "grammar: adjective\norijen: espanyol\nversions: [{ladino: blanko}]\n";

        let mut lenient = DictionaryBuilder::new(&config);
        add(&mut lenient, "blanko.yaml", blanko).unwrap();
        assert!(lenient.finish().is_ok());

        // kolores: [blanko, preto]
        let mut strict = DictionaryBuilder::new(&config).with_list_check();
        add(&mut strict, "blanko.yaml", blanko).unwrap();
        let err = strict.finish().unwrap_err();
        assert!(matches!(err, LadinoError::Consistency { ref word, .. } if word == "preto"));
    }

    struct FixedConjugator;

    impl Conjugator for FixedConjugator {
        fn conjugate(&self, _config: &Config, infinitive: &str, authored: &Conjugations) -> Vec<Tense> {
            if authored.has_tense("pasado") {
                return Vec::new();
            }
            vec![Tense {
                name: "pasado".to_string(),
                cells: vec![Cell {
                    pronoun: "yo".to_string(),
                    version: RawVersion {
                        ladino: Some(format!("{}i", &infinitive[..infinitive.len() - 2])),
                        ..Default::default()
                    },
                }],
            }]
        }
    }

    #[test]
    fn test_conjugator_adds_missing_tenses() {
        let config = test_config();
        let conjugator = FixedConjugator;
        let mut builder = DictionaryBuilder::new(&config).with_conjugator(&conjugator);
        add(
            &mut builder,
            "komer.yaml",
            "
grammar: verb
orijen: espanyol
conjugations: {prezente: {yo: {ladino: komo}}}
versions: [{ladino: komer}]
",
        )
        .unwrap();

        let dictionary = builder.finish().unwrap();
        let spellings: Vec<_> = dictionary.words.iter().map(|w| w.ladino.as_str()).collect();
        assert_eq!(spellings, vec!["komer", "komo", "komi"]);
    }

    #[test]
    fn test_without_conjugator_nothing_is_synthesized() {
        let config = test_config();
        let mut builder = DictionaryBuilder::new(&config);
        add(
            &mut builder,
            "komer.yaml",
            "
grammar: verb
orijen: espanyol
conjugations: {prezente: {yo: {ladino: komo}}}
versions: [{ladino: komer}]
",
        )
        .unwrap();

        let dictionary = builder.finish().unwrap();
        assert_eq!(dictionary.words.len(), 2);
    }
}
