use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures while turning a catalog file into course records
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The content is not JSON, the root is not an array, or an entry is not an object
    #[error("Invalid catalog structure: {0}")]
    Structural(String),

    /// The file could not be read at all
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Structural(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
