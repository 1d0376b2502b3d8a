use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("No eligible text files in {0}")]
    EmptyInput(PathBuf),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File is not valid UTF-8: {0}")]
    Decode(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
