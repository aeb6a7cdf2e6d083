//! Reading the search index artifact produced by the site generator.
//!
//! The generator ships the same payload in two shapes: plain JSON
//! (`search/search_index.json`) and a script that assigns it to a global
//! (`var __index = {...}` in `search/search_index.js`). Both are accepted.
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::SearchIndexArtifact;

pub const JSON_ARTIFACT: &str = "search_index.json";
pub const SCRIPT_ARTIFACT: &str = "search_index.js";

/// Parse an artifact from its textual form.
pub fn parse_artifact(source: &str) -> Result<SearchIndexArtifact> {
    let payload = strip_script_assignment(source.trim_start_matches('\u{feff}').trim());
    if payload.is_empty() {
        return Err(Error::malformed("artifact is empty"));
    }
    serde_json::from_str(payload).map_err(|e| Error::malformed(format!("invalid artifact: {}", e)))
}

/// `var __index = {...};` -> `{...}`. Plain JSON is returned unchanged.
fn strip_script_assignment(source: &str) -> &str {
    if source.starts_with('{') {
        return source;
    }
    match source.split_once('=') {
        Some((lhs, rhs)) if !lhs.contains('{') => rhs.trim().trim_end_matches(';').trim_end(),
        _ => source,
    }
}

pub fn read_artifact(path: &Path) -> Result<SearchIndexArtifact> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(path = %path.display(), bytes = content.len(), "read search index artifact");
    parse_artifact(&content)
}

/// Resolve `path` to an artifact file.
///
/// A file path is used as-is. A directory is walked for `search_index.json`
/// (preferred) or `search_index.js`, shallowest match first.
pub fn locate_artifact(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if !path.is_dir() {
        return Err(Error::NotFound(path.display().to_string()));
    }
    let mut candidates: Vec<(bool, usize, PathBuf)> = walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let name = e.file_name().to_str()?;
            let is_script = match name {
                JSON_ARTIFACT => false,
                SCRIPT_ARTIFACT => true,
                _ => return None,
            };
            Some((is_script, e.depth(), e.into_path()))
        })
        .collect();
    candidates.sort();
    candidates
        .into_iter()
        .next()
        .map(|(_, _, p)| p)
        .ok_or_else(|| Error::NotFound(format!("no {} or {} under {}", JSON_ARTIFACT, SCRIPT_ARTIFACT, path.display())))
}

/// `locate_artifact` followed by `read_artifact`.
pub fn load_artifact(path: &Path) -> Result<(PathBuf, SearchIndexArtifact)> {
    let file = locate_artifact(path)?;
    let artifact = read_artifact(&file)?;
    Ok((file, artifact))
}
