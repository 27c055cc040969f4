//! Stylesheet entry selection from the package manifest.

use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::error::ResolveError;
use crate::options::ImporterOptions;

/// Manifest file expected inside every package directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Error type for manifest loading.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Manifest is not a JSON object")]
    NotAnObject,
}

/// Picks a stylesheet entry from `<package_dir>/package.json`.
///
/// Keys are scanned in the configured priority order and the first value
/// whose extension passes the allow list wins; a key that is present but
/// carries a disallowed extension is skipped, and scanning continues. No
/// accepted key is not an error in either mode.
///
/// An unreadable manifest fails in strict mode and yields `Ok(None)`
/// otherwise, deferring to the host engine's directory-index fallback.
pub fn resolve_manifest_entry(
    package_name: &str,
    package_dir: &Path,
    options: &ImporterOptions,
) -> Result<Option<String>, ResolveError> {
    let manifest = match load_manifest(package_dir) {
        Ok(manifest) => manifest,
        Err(e) => {
            if options.strict {
                return Err(ResolveError::ManifestUnreadable {
                    package: package_name.to_string(),
                    dir: package_dir.to_path_buf(),
                });
            }
            debug!(
                "No usable manifest for '{}' in {}: {}",
                package_name,
                package_dir.display(),
                e
            );
            return Ok(None);
        }
    };

    for key in &options.package_keys {
        let Some(Value::String(entry)) = manifest.get(key) else {
            continue;
        };
        if entry.is_empty() {
            continue;
        }
        if extension_allowed(entry, &options.extensions) {
            debug!("Manifest key '{key}' selected entry '{entry}'");
            return Ok(Some(entry.clone()));
        }
        debug!("Skipping manifest key '{key}': disallowed extension in '{entry}'");
    }

    Ok(None)
}

fn load_manifest(package_dir: &Path) -> Result<Map<String, Value>, ManifestError> {
    let content = std::fs::read_to_string(package_dir.join(MANIFEST_FILE))?;
    match serde_json::from_str(&content)? {
        Value::Object(map) => Ok(map),
        _ => Err(ManifestError::NotAnObject),
    }
}

/// An entry without an extension is accepted as-is; the host engine applies
/// its own extension search to it.
fn extension_allowed(entry: &str, allowed: &[String]) -> bool {
    match Path::new(entry).extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => allowed
            .iter()
            .any(|a| a.trim_start_matches('.') == ext),
        _ => true,
    }
}
