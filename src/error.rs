//! Error types for snowgen

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while validating command input or executing statements
#[derive(Error, Debug)]
pub enum SnowGenError {
    #[error("unknown option '{key}' for {schema} options")]
    UnknownOption { schema: &'static str, key: String },

    #[error("invalid value for option '{key}': expected {expected}")]
    InvalidOptionType { key: String, expected: &'static str },

    #[error("invalid value '{value}' for option '{key}' (allowed: {allowed:?})")]
    InvalidEnumValue {
        key: String,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("missing required option '{key}' for {schema} options")]
    MissingRequiredOption {
        schema: &'static str,
        key: &'static str,
    },

    #[error("{field} cannot be empty")]
    EmptyIdentifier { field: &'static str },

    #[error("stage kind '{kind}' declared but no {kind} parameters were supplied")]
    MissingVariantParams { kind: &'static str },

    #[error("no files found in directory: {path}")]
    NoFilesFound { path: PathBuf },

    #[error("invalid directory path: {path}")]
    InvalidDirectory { path: PathBuf },

    #[error("failed to read directory entry under {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("statement execution failed:\n{statement}")]
    CommandExecution {
        statement: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
