// Errors from loading input files and reading or writing backups

use std::path::PathBuf;

/// Error type for loading and persisting frequency tables.
#[derive(Debug, thiserror::Error)]
pub enum GrocerError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write backup file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed backup line {line}: {content:?}")]
    MalformedBackup { line: usize, content: String },
}
