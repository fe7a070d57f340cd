use ladino_config::Config;
use ladino_core::language::Conjugator;
use ladino_types::{Cell, Conjugations, RawVersion, Tense};

/// Persons in the order the suffix tables below are written
const PERSONS: [&str; 6] = ["yo", "tu", "el", "mozotros", "vozotros", "eyos"];

/// Regular verb families, by infinitive ending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbClass {
    Ar,
    Er,
    Ir,
}

impl VerbClass {
    pub fn from_infinitive(infinitive: &str) -> Option<Self> {
        if infinitive.ends_with("ar") {
            Some(VerbClass::Ar)
        } else if infinitive.ends_with("er") {
            Some(VerbClass::Er)
        } else if infinitive.ends_with("ir") {
            Some(VerbClass::Ir)
        } else {
            None
        }
    }

    /// Person suffixes for `tense`, or None if we don't know the tense
    pub fn suffixes(&self, tense: &str) -> Option<[&'static str; 6]> {
        let suffixes = match (self, tense) {
            (VerbClass::Ar, "prezente") => ["o", "as", "a", "amos", "ash", "an"],
            (VerbClass::Ar, "imperfekto") => ["ava", "avas", "ava", "avamos", "avash", "avan"],
            (VerbClass::Ar, "pasado") => ["i", "ates", "o", "imos", "atesh", "aron"],

            (VerbClass::Er, "prezente") => ["o", "es", "e", "emos", "esh", "en"],
            (VerbClass::Er | VerbClass::Ir, "imperfekto") => {
                ["ia", "ias", "ia", "iamos", "iash", "ian"]
            }
            (VerbClass::Er | VerbClass::Ir, "pasado") => {
                ["i", "ites", "io", "imos", "itesh", "ieron"]
            }

            (VerbClass::Ir, "prezente") => ["o", "es", "e", "imos", "ish", "en"],
            _ => return None,
        };
        Some(suffixes)
    }
}

/// Fills in present, imperfect and past tables for regular verbs.
pub struct LadinoConjugator;

impl LadinoConjugator {
    pub const TENSES: [&'static str; 3] = ["prezente", "imperfekto", "pasado"];

    pub fn new() -> Self {
        Self
    }
}

impl Default for LadinoConjugator {
    fn default() -> Self {
        Self::new()
    }
}

impl Conjugator for LadinoConjugator {
    fn conjugate(&self, config: &Config, infinitive: &str, authored: &Conjugations) -> Vec<Tense> {
        if config.is_irregular(infinitive) {
            tracing::debug!("Not conjugating irregular verb '{}'", infinitive);
            return Vec::new();
        }
        let Some(class) = VerbClass::from_infinitive(infinitive) else {
            tracing::debug!("No verb class for '{}'", infinitive);
            return Vec::new();
        };
        // Both endings are plain ASCII
        let stem = &infinitive[..infinitive.len() - 2];

        Self::TENSES
            .iter()
            .filter(|tense| config.is_tense(tense) && !authored.has_tense(tense))
            .filter_map(|tense| {
                let suffixes = class.suffixes(tense)?;
                let cells = PERSONS
                    .iter()
                    .zip(suffixes)
                    .filter(|(pronoun, _)| config.is_pronoun(pronoun))
                    .map(|(pronoun, suffix)| Cell {
                        pronoun: pronoun.to_string(),
                        version: RawVersion {
                            ladino: Some(format!("{stem}{suffix}")),
                            ..Default::default()
                        },
                    })
                    .collect();
                Some(Tense {
                    name: tense.to_string(),
                    cells,
                })
            })
            .collect()
    }
}
