//! Error types for the colorset-gen CLI.

use std::{io, path::PathBuf, process::ExitCode, result::Result as StdResult};

use thiserror::Error;

/// Result type for colorset-gen operations.
pub type Result<T> = StdResult<T, Error>;

/// Errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input resource file does not exist or is not a file.
    #[error("Input file not found: {path}")]
    InputMissing {
        /// Path given as input.
        path: PathBuf,
    },
    /// The input resource file could not be read.
    #[error("Failed to read input at {path}: {source}")]
    InputRead {
        /// Path to the input file.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The input document is not well-formed XML.
    #[error("Failed to parse XML in {path} at byte {position}: {source}")]
    XmlParse {
        /// Path to the input file.
        path: PathBuf,
        /// Byte offset where the reader stopped.
        position: usize,
        /// Underlying parser error.
        source: quick_xml::Error,
    },
    /// The input document has an invalid element structure.
    #[error("Malformed XML in {path}: {message}")]
    XmlStructure {
        /// Path to the input file.
        path: PathBuf,
        /// Description of the structural problem.
        message: String,
    },
    /// The output directory does not exist.
    #[error("Output directory does not exist: {path}")]
    OutputMissing {
        /// Path given as output.
        path: PathBuf,
    },
    /// The output path exists but is not a directory.
    #[error("Output path is not a directory: {path}")]
    OutputNotDirectory {
        /// Path given as output.
        path: PathBuf,
    },
    /// A colorset directory could not be created.
    #[error("Failed to create colorset directory at {path}: {source}")]
    ColorsetCreate {
        /// Directory that failed to be created.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A colorset contents file could not be serialized.
    #[error("Failed to serialize colorset '{name}': {source}")]
    ColorsetSerialize {
        /// Color name being serialized.
        name: String,
        /// Underlying serialization error.
        source: serde_json::Error,
    },
    /// A colorset contents file could not be written.
    #[error("Failed to write colorset file at {path}: {source}")]
    ColorsetWrite {
        /// File that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl Error {
    /// Map errors to exit codes for CLI termination.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}
