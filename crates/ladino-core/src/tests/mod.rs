//! Fixtures shared by the unit tests.

use std::collections::BTreeMap;

use ladino_config::Config;
use ladino_types::{FormKind, Record, Translations, WordForm};

use crate::validate::validate_record;

pub const TEST_CONFIG: &str = "
linguas: [inglez, fransez, ebreo]
kategorias: [animal, kaza]
orijenes: [espanyol, ebreo, turko]
gramatika: [noun, verb, adjective, adverb, pronoun]
gender: [f, m]
numero: [singular, plural]
pajinas: []
listas:
  kolores: [blanko, preto]
tiempos: [prezente, imperfekto, pasado]
pronombres: [yo, tu, el, mozotros, vozotros, eyos]
verbos-iregolares: [ser, ir]
";

pub fn test_config() -> Config {
    Config::from_yaml_str(TEST_CONFIG, "config.yaml").unwrap()
}

/// Validate a word file that is known to be good
pub fn test_record(config: &Config, file: &str, yaml: &str) -> Record {
    let document = serde_yaml::from_str(yaml).unwrap();
    validate_record(config, &document, file).unwrap()
}

pub fn word_form(ladino: &str, translations: &[(&str, &[&str])]) -> WordForm {
    let mut normalized = Translations::default();
    for (language, words) in translations {
        normalized.words.insert(
            language.to_string(),
            words.iter().map(|word| word.to_string()).collect(),
        );
    }

    WordForm {
        ladino: ladino.to_string(),
        accented: None,
        audio: None,
        translations: normalized,
        gender: None,
        number: None,
        alternative_spelling: vec![],
        source: format!("{}.yaml", ladino.to_lowercase()),
        comments: None,
        orijen: Some("espanyol".to_string()),
        languages: Some(vec![]),
        extra: BTreeMap::new(),
        kind: FormKind::Version { index: 0 },
        record: 0,
    }
}

/// Log lines written while `f` runs, without ANSI colors
pub fn captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (result, logs)
}
