use std::fs;
use std::path::Path;

use anyhow::Context;
use ladino_core::Dictionary;
use serde::Serialize;

/// Dump the word mapping and counters as JSON files in `dir`
pub fn write_json(dictionary: &Dictionary, dir: &Path, pretty: bool) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Could not create {}", dir.display()))?;

    save(&dir.join("word_mapping.json"), &dictionary.word_mapping, pretty)?;
    save(&dir.join("count.json"), &dictionary.count, pretty)?;

    tracing::info!("Wrote JSON files to {}", dir.display());
    Ok(())
}

fn save<T: Serialize>(path: &Path, value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    fs::write(path, json).with_context(|| format!("Could not write {}", path.display()))?;
    Ok(())
}
