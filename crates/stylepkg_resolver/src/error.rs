//! Resolution error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can fail a resolution call.
///
/// A specifier without the configured prefix is not an error; the facade
/// signals it with `Ok(None)` so the host can try its next resolver.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No search root contains a directory for the package (strict mode).
    #[error("Could not find package directory for '{package}'")]
    PackageNotFound { package: String },

    /// Manifest file missing or malformed (strict mode).
    #[error("Could not read manifest for package '{package}' in {}", dir.display())]
    ManifestUnreadable { package: String, dir: PathBuf },

    /// The resolved path could not be converted to a file URL.
    #[error("Cannot convert {} to a file URL", path.display())]
    InvalidUrl { path: PathBuf },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
