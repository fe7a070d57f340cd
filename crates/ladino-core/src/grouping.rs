use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use ladino_config::Config;
use ladino_types::Record;

use crate::error::{LadinoError, Result};

/// Bucket name -> records in it
pub type Buckets = BTreeMap<String, Vec<Rc<Record>>>;

/// Records grouped by category, origin, curated list, grammar class and language.
#[derive(Debug, Default)]
pub struct Groupings {
    pub categories: Buckets,
    pub orijenes: Buckets,
    pub lists: Buckets,
    pub gramer: Buckets,
    pub languages: Buckets,
}

impl Groupings {
    /// One empty bucket per config entry
    pub fn new(config: &Config) -> Self {
        Self {
            categories: buckets(&config.kategorias),
            orijenes: buckets(&config.orijenes),
            lists: buckets(config.listas.keys()),
            gramer: buckets(&config.gramatika),
            languages: buckets(&config.linguas),
        }
    }

    /// Drop a validated record into every bucket it belongs to.
    pub fn collect(&mut self, config: &Config, record: &Rc<Record>) {
        push(&mut self.gramer, &record.grammar, record);
        push(&mut self.orijenes, &record.orijen, record);

        for language in &record.linguas {
            push(&mut self.languages, language, record);
        }
        for category in &record.kategorias {
            push(&mut self.categories, category, record);
        }

        let headword = record.headword();
        for (list, words) in &config.listas {
            if words.iter().any(|word| word == headword) {
                push(&mut self.lists, list, record);
            }
        }
    }

    /// Final ordering once every record is in.
    ///
    /// Categories and origins are alphabetical by headword then English
    /// translation; curated lists follow the order the list was authored in.
    pub fn sort(&mut self, config: &Config) {
        for records in self.categories.values_mut().chain(self.orijenes.values_mut()) {
            records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        }

        for (list, records) in self.lists.iter_mut() {
            let lookup: HashMap<&str, usize> = config
                .listas
                .get(list)
                .into_iter()
                .flatten()
                .enumerate()
                .map(|(ix, word)| (word.as_str(), ix))
                .collect();

            // collect() only admits headwords present in the list
            records.sort_by_key(|record| lookup.get(record.headword()).copied());
        }
    }

    /// Every word a curated list names must have a record.
    ///
    /// Only meaningful once the whole corpus has been read.
    pub fn check_lists(&self, config: &Config) -> Result<()> {
        for (list, words) in &config.listas {
            let records = self.lists.get(list).map(Vec::as_slice).unwrap_or_default();
            if let Some(missing) = words
                .iter()
                .find(|word| !records.iter().any(|record| record.headword() == word.as_str()))
            {
                return Err(LadinoError::Consistency {
                    list: list.clone(),
                    word: missing.clone(),
                });
            }
        }
        Ok(())
    }
}

fn buckets<I, S>(names: I) -> Buckets
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| (name.as_ref().to_string(), Vec::new()))
        .collect()
}

fn push(buckets: &mut Buckets, name: &str, record: &Rc<Record>) {
    buckets
        .entry(name.to_string())
        .or_default()
        .push(Rc::clone(record));
}
