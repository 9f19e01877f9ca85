//! Bank registry configuration.
//!
//! The core never hard-codes which banks exist. This module supplies the
//! registry it is given:
//!
//! - **Built-in table**: used when no registry file is configured
//! - **Registry files**: plain text, one bank per line (see [`parser`])
//! - **Tilde expansion**: `~/banks.conf` works as a path
//!
//! # Example
//!
//! ```no_run
//! use pk_iban_generator::config::load_registry;
//! use std::path::Path;
//!
//! let registry = load_registry(Path::new("~/.config/pk-iban/banks.conf"))?;
//! println!("{} banks", registry.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::BankRegistry;

pub mod error;
pub mod parser;

pub use error::ConfigError;
pub use parser::parse_registry;

/// Expands a leading `~` in a path.
///
/// # Errors
///
/// Returns `ConfigError::InvalidPath` if the path is not valid UTF-8.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Loads a bank registry from a file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file doesn't exist, or the
/// first parse error in the file.
pub fn load_registry(path: &Path) -> Result<BankRegistry, ConfigError> {
    let path = expand_path(path)?;

    if !path.exists() {
        return Err(ConfigError::NotFound(path));
    }

    let content = fs::read_to_string(&path)?;
    let registry = parse_registry(&content)?;

    info!(path = %path.display(), banks = registry.len(), "loaded bank registry");

    Ok(registry)
}

/// Returns the registry at `path`, or the built-in table when no path is given.
pub fn resolve_registry(path: Option<&Path>) -> Result<BankRegistry, ConfigError> {
    match path {
        Some(path) => load_registry(path),
        None => {
            debug!("using built-in bank registry");
            Ok(BankRegistry::builtin())
        }
    }
}

#[cfg(test)]
mod tests;
