use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File name searched for when discovering a project manifest.
pub const MANIFEST_FILE: &str = "Ell.toml";

/// The parsed Ell.toml manifest.
#[derive(Debug, Clone)]
pub struct EllManifest {
    pub project: Option<ProjectSection>,
    pub lexer: LexerSection,
    /// The directory containing the Ell.toml file.
    pub root_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    #[serde(default)]
    pub entry: Option<String>,
}

/// `[lexer]` table: keyword configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexerSection {
    /// Replaces the default keyword set when present.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    /// Added on top of whichever base set applies.
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

/// Raw TOML structure for deserialization.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    project: Option<ProjectSection>,
    #[serde(default)]
    lexer: LexerSection,
}

/// Errors that can occur when loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("no Ell.toml found (searched from {0})")]
    NotFound(String),
    #[error("failed to read Ell.toml: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid Ell.toml: {0}")]
    ParseError(String),
}

/// Walk up from `start_dir` looking for `Ell.toml`.
pub fn find_manifest(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let candidate = current.join(MANIFEST_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load an Ell.toml manifest from a file path.
pub fn load_manifest(path: &Path) -> Result<EllManifest, ManifestError> {
    let content = std::fs::read_to_string(path)?;
    let root_dir = path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    parse_manifest(&content, root_dir)
}

/// Parse an Ell.toml manifest from a string.
pub fn parse_manifest(content: &str, root_dir: PathBuf) -> Result<EllManifest, ManifestError> {
    let raw: RawManifest =
        toml::from_str(content).map_err(|e| ManifestError::ParseError(e.to_string()))?;

    Ok(EllManifest {
        project: raw.project,
        lexer: raw.lexer,
        root_dir,
    })
}

/// Find and load the manifest starting from a source file's directory.
pub fn find_and_load_manifest(source_file: &Path) -> Result<EllManifest, ManifestError> {
    let start_dir = source_file.parent().unwrap_or_else(|| Path::new("."));
    let manifest_path = find_manifest(start_dir)
        .ok_or_else(|| ManifestError::NotFound(start_dir.display().to_string()))?;
    load_manifest(&manifest_path)
}
