use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde_yaml::Value;

use crate::error::{LadinoError, Result};

static WORD_FILE_REGEX: OnceLock<Regex> = OnceLock::new();
static SWAP_FILE_REGEX: OnceLock<Regex> = OnceLock::new();

fn is_word_file(name: &str) -> bool {
    WORD_FILE_REGEX
        .get_or_init(|| Regex::new(r"^[a-z_ -]+\.yaml$").unwrap())
        .is_match(name)
}

/// Editor swap files are left alone
fn is_swap_file(name: &str) -> bool {
    SWAP_FILE_REGEX
        .get_or_init(|| Regex::new(r"^\.[a-z_ -]+\.yaml\.swp$").unwrap())
        .is_match(name)
}

/// Word files in `dir`, sorted by name, at most `limit` of them.
///
/// Any name that is neither a word file nor a swap file stops the build.
pub fn word_files(dir: &Path, limit: Option<usize>) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| LadinoError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LadinoError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    let mut files = Vec::new();
    for name in names {
        if is_swap_file(&name) {
            continue;
        }
        if !is_word_file(&name) {
            return Err(LadinoError::InvalidFilename(name));
        }
        if limit.is_some_and(|limit| files.len() >= limit) {
            break;
        }
        files.push(dir.join(name));
    }

    Ok(files)
}

/// Parse one YAML document from disk.
pub fn read_document(path: &Path) -> Result<Value> {
    tracing::info!("{}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| LadinoError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| LadinoError::Yaml {
        path: path.display().to_string(),
        source,
    })
}
