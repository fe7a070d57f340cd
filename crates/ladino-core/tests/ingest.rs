//! End-to-end ingestion of small corpora written to a temporary directory.

use std::path::Path;

use ladino_config::Config;
use ladino_core::preprocess::fold_key;
use ladino_core::{LadinoError, load_dictionary};
use tempfile::TempDir;

const CONFIG: &str = "
linguas: [inglez, fransez]
kategorias: [kaza, komida]
orijenes: [espanyol, ebreo]
gramatika: [noun, verb, adjective]
gender: [f, m]
numero: [singular, plural]
pajinas: [about]
listas:
  primeras: [komer, kaza]
tiempos: [prezente, pasado]
pronombres: [yo, tu, el]
verbos-iregolares: [ser]
";

const KAZA: &str = "
grammar: noun
orijen: espanyol
kategorias: [kaza]
versions:
  - ladino: kaza
    gender: f
    number: singular
    translations:
      inglez: house
    alternative-spelling:
      - ladino: caza
";

const KOMER: &str = "
grammar: verb
orijen: espanyol
kategorias: [komida]
conjugations:
  prezente:
    yo:
      ladino: komo
versions:
  - ladino: komer
    translations:
      inglez: [eat, to eat]
";

/// Repository with a config and a `words/` directory
fn corpus(files: &[(&str, &str)]) -> TempDir {
    let repo = tempfile::tempdir().unwrap();
    std::fs::write(repo.path().join("config.yaml"), CONFIG).unwrap();
    let words = repo.path().join("words");
    std::fs::create_dir(&words).unwrap();
    for (name, content) in files {
        std::fs::write(words.join(name), content).unwrap();
    }
    repo
}

fn load(repo: &Path, limit: Option<usize>) -> Result<ladino_core::Dictionary, LadinoError> {
    let config = Config::load(repo)?;
    load_dictionary(&config, limit, &repo.join("words"))
}

#[test]
fn test_two_file_scenario() {
    let repo = corpus(&[("kaza.yaml", KAZA), ("komer.yaml", KOMER)]);
    let dictionary = load(repo.path(), None).unwrap();

    assert_eq!(
        dictionary.word_mapping.translate("kaza", "inglez").unwrap(),
        &["house".to_string()]
    );
    assert_eq!(
        dictionary.word_mapping.translate("komer", "inglez").unwrap(),
        &["eat".to_string(), "to eat".to_string()]
    );
    assert!(dictionary.words.iter().any(|word| word.ladino == "komo"));
    assert_eq!(dictionary.yaml_files.len(), 2);
}

#[test]
fn test_every_form_has_a_ladino_page_and_self_mapping() {
    let repo = corpus(&[("kaza.yaml", KAZA), ("komer.yaml", KOMER)]);
    let dictionary = load(repo.path(), None).unwrap();

    for word in &dictionary.words {
        let key = fold_key(&word.ladino);
        assert!(
            dictionary
                .page("ladino", &key)
                .iter()
                .any(|form| form.source == word.source && form.ladino == word.ladino),
            "no page for {}",
            word.ladino
        );
    }

    for (key, targets) in &dictionary.word_mapping.ladino {
        assert!(targets.contains_key("ladino"), "no self mapping for {key}");
    }
}

#[test]
fn test_reverse_mapping_points_back() {
    let repo = corpus(&[("kaza.yaml", KAZA), ("komer.yaml", KOMER)]);
    let dictionary = load(repo.path(), None).unwrap();

    for word in &dictionary.words {
        for (language, translations) in &word.translations.words {
            for translation in translations {
                let sources = dictionary
                    .word_mapping
                    .lookup(language, &fold_key(translation))
                    .unwrap();
                assert!(sources.contains(&word.ladino));
            }
        }
    }
    assert_eq!(
        dictionary.word_mapping.lookup("inglez", "to eat").unwrap(),
        &["komer".to_string()]
    );
}

#[test]
fn test_alternative_spelling_is_indexed() {
    let repo = corpus(&[("kaza.yaml", KAZA), ("komer.yaml", KOMER)]);
    let dictionary = load(repo.path(), None).unwrap();

    let caza = dictionary.page("ladino", "caza");
    assert_eq!(caza.len(), 1);
    assert_eq!(caza[0].alternative_spelling.len(), 1);
    assert_eq!(caza[0].alternative_spelling[0].ladino, "kaza");
    assert_eq!(
        dictionary.word_mapping.translate("caza", "inglez").unwrap(),
        &["house".to_string()]
    );
    // Only the authored spelling is reachable from English
    assert_eq!(
        dictionary.word_mapping.lookup("inglez", "house").unwrap(),
        &["kaza".to_string()]
    );
}

#[test]
fn test_groupings() {
    let repo = corpus(&[("kaza.yaml", KAZA), ("komer.yaml", KOMER)]);
    let dictionary = load(repo.path(), None).unwrap();

    let primeras: Vec<_> = dictionary.lists["primeras"]
        .iter()
        .map(|record| record.headword())
        .collect();
    assert_eq!(primeras, vec!["komer", "kaza"]);

    let espanyol: Vec<_> = dictionary.orijenes["espanyol"]
        .iter()
        .map(|record| record.headword())
        .collect();
    assert_eq!(espanyol, vec!["kaza", "komer"]);
    assert_eq!(dictionary.categories["komida"].len(), 1);
    assert!(dictionary.orijenes["ebreo"].is_empty());
    assert_eq!(dictionary.gramer["verb"].len(), 1);
}

#[test]
fn test_limit() {
    let repo = corpus(&[("kaza.yaml", KAZA), ("komer.yaml", KOMER)]);
    let dictionary = load(repo.path(), Some(1)).unwrap();

    assert_eq!(dictionary.yaml_files.len(), 1);
    assert!(dictionary.page("ladino", "komer").is_empty());
}

#[test]
fn test_list_word_without_file_stops_everything() {
    let repo = corpus(&[("kaza.yaml", KAZA)]);

    let err = load(repo.path(), None).unwrap_err();
    assert!(matches!(
        err,
        LadinoError::Consistency { ref list, ref word } if list == "primeras" && word == "komer"
    ));
}

#[test]
fn test_limited_run_tolerates_incomplete_lists() {
    let repo = corpus(&[("kaza.yaml", KAZA), ("komer.yaml", KOMER)]);
    let dictionary = load(repo.path(), Some(1)).unwrap();

    let primeras: Vec<_> = dictionary.lists["primeras"]
        .iter()
        .map(|record| record.headword())
        .collect();
    assert_eq!(primeras, vec!["kaza"]);
}

#[test]
fn test_counts() {
    let repo = corpus(&[("kaza.yaml", KAZA), ("komer.yaml", KOMER)]);
    let dictionary = load(repo.path(), None).unwrap();

    // kaza, caza, komer, komo
    assert_eq!(dictionary.count["ladino"].words, 4);
    // house, eat, to eat
    assert_eq!(dictionary.count["inglez"].words, 3);
    assert_eq!(dictionary.count["fransez"].words, 0);
}

#[test]
fn test_verb_without_conjugations_stops_everything() {
    let broken = "grammar: verb\norijen: espanyol\nversions: [{ladino: bever}]\n";
    let repo = corpus(&[("kaza.yaml", KAZA), ("bever.yaml", broken)]);

    let err = load(repo.path(), None).unwrap_err();
    assert!(matches!(err, LadinoError::Schema { .. }));
    assert!(err.to_string().contains("bever.yaml"));
}

#[test]
fn test_noun_without_gender_stops_everything() {
    let broken = "
grammar: noun
orijen: espanyol
versions:
  - ladino: meza
    number: singular
";
    let repo = corpus(&[("meza.yaml", broken)]);

    let err = load(repo.path(), None).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("gender"));
    assert!(message.contains("meza"));
}

#[test]
fn test_stray_file_is_rejected() {
    let repo = corpus(&[("kaza.yaml", KAZA), ("notes.txt", "hello")]);

    let err = load(repo.path(), None).unwrap_err();
    assert!(matches!(err, LadinoError::InvalidFilename(_)));
}

#[test]
fn test_incomplete_config() {
    let repo = corpus(&[("kaza.yaml", KAZA)]);
    let config = CONFIG.replace("orijenes: [espanyol, ebreo]\n", "");
    std::fs::write(repo.path().join("config.yaml"), config).unwrap();

    let err = load(repo.path(), None).unwrap_err();
    assert!(matches!(err, LadinoError::Config(_)));
    assert!(err.to_string().contains("orijenes"));
}
