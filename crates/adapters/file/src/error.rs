//! File-adapter error type wrapping IO and JSON errors.

use std::path::PathBuf;

use homedex_domain::error::HomeDexError;

/// Errors originating from the filesystem adapter.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// Reading, writing, or renaming a file failed.
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid device document.
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be encoded.
    #[error("cannot encode devices for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<FileError> for HomeDexError {
    fn from(err: FileError) -> Self {
        Self::Storage(Box::new(err))
    }
}
