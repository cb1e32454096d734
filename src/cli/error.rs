//! CLI-level errors (wraps catalog errors)

use thiserror::Error;

use crate::errors::CatalogError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => exitcode::USAGE,
            CliError::Catalog(e) => match e {
                CatalogError::NotFound(_) => exitcode::NOINPUT,
                CatalogError::ParseFailure { .. } => exitcode::DATAERR,
                CatalogError::WriteFailure { .. } => exitcode::CANTCREAT,
                CatalogError::NotAGroup(_)
                | CatalogError::NotAGame(_)
                | CatalogError::GroupIndexOutOfRange(_)
                | CatalogError::GameIndexOutOfRange(_) => exitcode::USAGE,
                CatalogError::Config(_) => exitcode::CONFIG,
                CatalogError::Io(_) => exitcode::IOERR,
            },
        }
    }
}
