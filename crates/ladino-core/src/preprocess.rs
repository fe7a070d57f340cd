use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Lookup key for a word: composed form, lower case
    fn fold(&self, word: &str) -> String {
        word.nfc().collect::<String>().to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Fold with the default preprocessor
pub fn fold_key(word: &str) -> String {
    DefaultPreprocessor.fold(word)
}
