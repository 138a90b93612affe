use std::path::{Path, PathBuf};

use ell_common::manifest::{self, EllManifest, LexerSection, ManifestError};
use ell_compiler::lexer::{KeywordError, KeywordSet};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("invalid keyword configuration: {0}")]
    Keyword(#[from] KeywordError),
    #[error("no input file given and no [project] entry in Ell.toml")]
    NoInput,
}

/// Everything the driver needs before scanning.
#[derive(Debug)]
pub struct Settings {
    pub input: PathBuf,
    pub keywords: KeywordSet,
}

/// Resolve the input file and keyword set.
///
/// An explicit `manifest_path` must exist. Otherwise an Ell.toml is looked
/// up from the input's directory (or the working directory when no input is
/// given) and its absence means defaults.
pub fn resolve(
    input: Option<&Path>,
    manifest_path: Option<&Path>,
    cli_keywords: &[String],
) -> Result<Settings, ConfigError> {
    let loaded = match manifest_path {
        Some(path) => Some(manifest::load_manifest(path)?),
        None => discover(input)?,
    };

    if let Some(ref m) = loaded {
        tracing::info!(
            target: "ell::cli",
            root = %m.root_dir.display(),
            project = m.project.as_ref().map(|p| p.name.as_str()).unwrap_or("-"),
            "using {}",
            manifest::MANIFEST_FILE
        );
    }

    let input = input_path(input, loaded.as_ref())?;
    let keywords = keyword_set(loaded.as_ref().map(|m| &m.lexer), cli_keywords)?;
    Ok(Settings { input, keywords })
}

fn discover(input: Option<&Path>) -> Result<Option<EllManifest>, ConfigError> {
    let found = match input {
        Some(input) => {
            let abs_input = std::fs::canonicalize(input).unwrap_or_else(|_| input.to_path_buf());
            manifest::find_and_load_manifest(&abs_input)
        }
        None => {
            let cwd = std::env::current_dir().map_err(ManifestError::from)?;
            manifest::find_manifest(&cwd)
                .ok_or_else(|| ManifestError::NotFound(cwd.display().to_string()))
                .and_then(|path| manifest::load_manifest(&path))
        }
    };
    match found {
        Ok(m) => Ok(Some(m)),
        Err(ManifestError::NotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// The explicit input, or the manifest's `[project] entry` relative to the
/// manifest's directory.
pub fn input_path(
    input: Option<&Path>,
    manifest: Option<&EllManifest>,
) -> Result<PathBuf, ConfigError> {
    if let Some(input) = input {
        return Ok(input.to_path_buf());
    }
    manifest
        .and_then(|m| {
            let entry = m.project.as_ref()?.entry.as_ref()?;
            Some(m.root_dir.join(entry))
        })
        .ok_or(ConfigError::NoInput)
}

/// Layer keyword sources: manifest `keywords` (or the defaults), then
/// manifest `extra_keywords`, then `-k` flags.
pub fn keyword_set(
    lexer: Option<&LexerSection>,
    cli_keywords: &[String],
) -> Result<KeywordSet, ConfigError> {
    let mut set = match lexer.and_then(|l| l.keywords.as_ref()) {
        Some(words) => KeywordSet::from_words(words.iter().cloned())?,
        None => KeywordSet::default(),
    };
    if let Some(lexer) = lexer {
        set.extend(lexer.extra_keywords.iter().cloned())?;
    }
    set.extend(cli_keywords.iter().cloned())?;
    Ok(set)
}
