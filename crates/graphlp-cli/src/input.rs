use std::path::{Path, PathBuf};

use graphlp_solver::document::ProblemDocument;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid problem file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a JSON problem file
pub fn load(path: &Path) -> Result<ProblemDocument, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&text, path)
}

/// Parse problem JSON; `path` is only used in error messages
pub fn load_from_str(text: &str, path: &Path) -> Result<ProblemDocument, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
