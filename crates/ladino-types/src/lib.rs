pub mod record;
pub mod translation;
pub mod word;

pub use record::{Cell, Conjugations, RawRecord, RawVersion, Record, Spelling, Tense, Version};
pub use translation::{Translation, Translations};
pub use word::{FormKind, WordForm};

/// The headword language of the dictionary
pub const LADINO: &str = "ladino";

/// Pseudo-language under which display spellings with diacritics are mapped
pub const ACCENTED: &str = "accented";

/// Language whose first translation is used as a secondary sort key
pub const ENGLISH: &str = "inglez";
