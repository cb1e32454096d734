use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog not found: {0}")]
    NotFound(PathBuf),

    #[error("Parse failure at line {line}: {reason}")]
    ParseFailure { line: usize, reason: String },

    #[error("Failed to write catalog {path}: {reason}")]
    WriteFailure { path: PathBuf, reason: String },

    #[error("Not a group: {0}")]
    NotAGroup(String),

    #[error("Not a game: {0}")]
    NotAGame(String),

    #[error("No group with index {0}")]
    GroupIndexOutOfRange(usize),

    #[error("No game with index {0}")]
    GameIndexOutOfRange(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
