use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One named raw text handed to the vectorizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct InputDoc {
    #[serde(alias = "id")]
    name: String,
    #[serde(alias = "body")]
    text: String,
}

/// Load every document under `path`. Unreadable or empty documents are skipped with a warning;
/// a missing path or a source without any document is an error.
pub fn load_documents(path: &Path) -> Result<Vec<SourceDocument>> {
    if !path.exists() {
        bail!("corpus source {} does not exist", path.display());
    }
    let mut docs = Vec::new();
    for file in collect_files(path) {
        match read_file(&file) {
            Ok(found) => docs.extend(found),
            Err(err) => tracing::warn!(file = %file.display(), error = %format!("{err:#}"), "skipping unreadable document"),
        }
    }
    if docs.is_empty() {
        bail!("unable to find documents in {}", path.display());
    }
    let mut seen = HashSet::new();
    for doc in &docs {
        if !seen.insert(doc.name.as_str()) {
            tracing::warn!(document = %doc.name, "duplicate document name, lookups by name return the first one");
        }
    }
    tracing::info!(num_docs = docs.len(), source = %path.display(), "documents loaded");
    Ok(docs)
}

/// Whitespace-separated words, as stored in stopword and punctuation files.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path).with_context(|| format!("unable to read word list {}", path.display()))?;
    Ok(data.split_whitespace().map(str::to_string).collect())
}

fn collect_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        match entry {
            Ok(e) if e.file_type().is_file() => files.push(e.into_path()),
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "skipping unreadable entry"),
        }
    }
    files
}

fn read_file(file: &Path) -> Result<Vec<SourceDocument>> {
    match file.extension().and_then(|s| s.to_str()) {
        Some("jsonl") => read_jsonl(file),
        Some("json") => read_json(file),
        _ => Ok(read_text(file)?.into_iter().collect()),
    }
}

fn read_text(file: &Path) -> Result<Option<SourceDocument>> {
    let bytes = fs::read(file).with_context(|| format!("unable to read {}", file.display()))?;
    let name = file.display().to_string();
    if bytes.is_empty() {
        tracing::warn!(document = %name, "document is empty");
        return Ok(None);
    }
    Ok(Some(SourceDocument { name, text: String::from_utf8_lossy(&bytes).into_owned() }))
}

fn read_jsonl(file: &Path) -> Result<Vec<SourceDocument>> {
    let f = File::open(file).with_context(|| format!("unable to open {}", file.display()))?;
    let reader = BufReader::new(f);
    let mut docs = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        match serde_json::from_str::<InputDoc>(&line) {
            Ok(doc) => docs.extend(accept(doc)),
            Err(err) => tracing::warn!(file = %file.display(), line = lineno + 1, error = %err, "skipping malformed record"),
        }
    }
    Ok(docs)
}

fn read_json(file: &Path) -> Result<Vec<SourceDocument>> {
    let f = File::open(file).with_context(|| format!("unable to open {}", file.display()))?;
    let reader = BufReader::new(f);
    let json: serde_json::Value = serde_json::from_reader(reader).with_context(|| format!("invalid JSON in {}", file.display()))?;
    let records = match json {
        serde_json::Value::Array(arr) => arr,
        obj @ serde_json::Value::Object(_) => vec![obj],
        _ => bail!("{} holds neither an object nor an array", file.display()),
    };
    let mut docs = Vec::new();
    for v in records {
        match serde_json::from_value::<InputDoc>(v) {
            Ok(doc) => docs.extend(accept(doc)),
            Err(err) => tracing::warn!(file = %file.display(), error = %err, "skipping malformed record"),
        }
    }
    Ok(docs)
}

fn accept(doc: InputDoc) -> Option<SourceDocument> {
    if doc.text.trim().is_empty() {
        tracing::warn!(document = %doc.name, "document is empty");
        return None;
    }
    Some(SourceDocument { name: doc.name, text: doc.text })
}
