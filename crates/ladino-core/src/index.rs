//! Cross-language word indexes built from word forms.

use std::collections::BTreeMap;

use ladino_types::{ACCENTED, LADINO, WordForm};
use serde::Serialize;

use crate::expand::alternative_forms;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Word and example counters for one language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Count {
    pub words: usize,
    pub examples: usize,
}

/// Forward and reverse word mappings.
#[derive(Debug, Default, Serialize)]
pub struct WordMapping {
    /// Folded Ladino word -> language -> sorted words.
    ///
    /// Besides the target languages every key maps `"ladino"` to its own
    /// spellings and, when it has one, `"accented"` to its display spelling.
    pub ladino: BTreeMap<String, BTreeMap<String, Vec<String>>>,

    /// Accented spelling -> first form seen with it
    pub accented: BTreeMap<String, WordForm>,

    /// Language -> folded target word -> sorted Ladino spellings.
    ///
    /// Serialized next to `ladino` and `accented`, one key per language.
    #[serde(flatten)]
    pub reverse: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl WordMapping {
    /// Everything known about a Ladino word
    pub fn entry(&self, word: &str) -> Option<&BTreeMap<String, Vec<String>>> {
        self.ladino.get(word)
    }

    /// Words `word` maps to in `language`, in either direction
    pub fn lookup(&self, language: &str, word: &str) -> Option<&[String]> {
        if language == LADINO {
            return self
                .ladino
                .get(word)
                .and_then(|targets| targets.get(LADINO))
                .map(Vec::as_slice);
        }
        self.reverse
            .get(language)
            .and_then(|words| words.get(word))
            .map(Vec::as_slice)
    }

    /// Translations of a Ladino word into `language`
    pub fn translate(&self, word: &str, language: &str) -> Option<&[String]> {
        self.ladino
            .get(word)
            .and_then(|targets| targets.get(language))
            .map(Vec::as_slice)
    }
}

/// Language -> folded word -> forms owning that word
pub type Pages = BTreeMap<String, BTreeMap<String, Vec<WordForm>>>;

/// Accumulates the word mapping, pages and counters form by form.
pub struct CrossIndex<P: Preprocessor = DefaultPreprocessor> {
    languages: Vec<String>,
    preprocessor: P,
    pub word_mapping: WordMapping,
    pub pages: Pages,
    pub count: BTreeMap<String, Count>,
}

impl CrossIndex {
    pub fn new(languages: &[String]) -> Self {
        Self::with_preprocessor(languages, DefaultPreprocessor)
    }
}

impl<P: Preprocessor> CrossIndex<P> {
    pub fn with_preprocessor(languages: &[String], preprocessor: P) -> Self {
        let mut index = Self {
            languages: languages.to_vec(),
            preprocessor,
            word_mapping: WordMapping::default(),
            pages: Pages::new(),
            count: BTreeMap::new(),
        };

        for language in std::iter::once(LADINO).chain(languages.iter().map(String::as_str)) {
            index.pages.insert(language.to_string(), BTreeMap::new());
            index.count.insert(language.to_string(), Count::default());
            if language != LADINO {
                index
                    .word_mapping
                    .reverse
                    .insert(language.to_string(), BTreeMap::new());
            }
        }

        index
    }

    /// Index an authored form, its alternative spellings and its translations.
    pub fn add(&mut self, form: &WordForm) {
        self.add_ladino_word(form);

        for alternative in alternative_forms(form) {
            self.add_ladino_word(&alternative);
        }

        for language in self.languages.clone() {
            self.add_translated_words(&language, form);
        }
    }

    /// Forward-map a form under its folded Ladino spelling.
    pub fn add_ladino_word(&mut self, form: &WordForm) {
        let word = self.preprocessor.fold(&form.ladino);
        tracing::debug!(
            "Add ladino word: '{}' '{}' '{:?}'",
            form.ladino,
            word,
            form.accented
        );

        let count = self.count.entry(LADINO.to_string()).or_default();
        count.words += 1;
        count.examples += form.example_count();

        if let Some(accented) = &form.accented {
            self.word_mapping
                .accented
                .entry(accented.clone())
                .or_insert_with(|| form.clone());
        }

        let targets = self.word_mapping.ladino.entry(word.clone()).or_default();
        for (language, words) in &form.translations.words {
            merge_sorted(targets.entry(language.clone()).or_default(), words);
        }
        merge_sorted(
            targets.entry(LADINO.to_string()).or_default(),
            std::slice::from_ref(&form.ladino),
        );
        if let Some(accented) = &form.accented {
            if *accented != word {
                merge_sorted(
                    targets.entry(ACCENTED.to_string()).or_default(),
                    std::slice::from_ref(accented),
                );
            }
        }

        let page = self
            .pages
            .entry(LADINO.to_string())
            .or_default()
            .entry(word)
            .or_default();
        page.push(form.clone());
        page.sort_by(|a, b| (&a.ladino, a.english()).cmp(&(&b.ladino, b.english())));
    }

    /// Reverse-map every `language` translation of a form back to its Ladino spelling.
    ///
    /// Forms without a `language` key are skipped entirely.
    pub fn add_translated_words(&mut self, language: &str, form: &WordForm) {
        let Some(translations) = form.translations.get(language) else {
            return;
        };

        for translation in translations {
            let word = self.preprocessor.fold(translation);

            let sources = self
                .word_mapping
                .reverse
                .entry(language.to_string())
                .or_default()
                .entry(word.clone())
                .or_default();
            merge_sorted(sources, std::slice::from_ref(&form.ladino));
            self.count.entry(language.to_string()).or_default().words += 1;

            let page = self
                .pages
                .entry(language.to_string())
                .or_default()
                .entry(word)
                .or_default();
            page.push(form.clone());
            // Shorter entries first
            page.sort_by_cached_key(WordForm::serialized_len);
        }
    }
}

/// Append `words`, then sort and drop duplicates.
fn merge_sorted(list: &mut Vec<String>, words: &[String]) {
    list.extend_from_slice(words);
    list.sort();
    list.dedup();
}
