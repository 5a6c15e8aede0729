use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoPadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(
        "Pad file {} is unreadable: {source}. Run `memopad doctor` to back it up and start fresh.",
        path.display()
    )]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, MemoPadError>;
