//! Error types for the CLI

use std::io;
use std::path::PathBuf;

use bytecode_system::DecodeError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// The input module could not be read
    #[error("could not read '{}': {source}", path.display())]
    Read {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The output file could not be written
    #[error("could not write '{}': {source}", path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing to the console failed
    #[error("output error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a valid bytecode module
    #[error("invalid bytecode: {0}")]
    Decode(#[from] DecodeError),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
