use ladino_config::Config;
use ladino_types::{Conjugations, Tense};

/// Optional trait for languages that can derive conjugation tables
pub trait Conjugator {
    /// Extra tables for `infinitive`. Tenses in `authored` are never replaced.
    fn conjugate(&self, config: &Config, infinitive: &str, authored: &Conjugations) -> Vec<Tense>;
}
