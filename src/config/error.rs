use std::path::PathBuf;
use thiserror::Error;

use crate::core::RegistryError;

/// Errors that can occur while loading a bank registry file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Registry file does not exist.
    #[error("Registry file not found: {0}")]
    NotFound(PathBuf),
    /// Path is not valid UTF-8 and cannot be expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// A line could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },
    /// A bank code on a line has the wrong shape.
    #[error("Invalid bank code '{code}' on line {line}: expected 4 uppercase letters or digits")]
    InvalidBankCode { line: usize, code: String },
    /// Entries parsed but do not form a valid registry.
    #[error("Invalid registry: {0}")]
    Registry(#[from] RegistryError),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
