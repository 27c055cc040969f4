//! The importer facade hosts plug into their resolver chain.

use std::path::PathBuf;

use tracing::debug;
use url::Url;

use crate::error::ResolveError;
use crate::locate::resolve_package;
use crate::manifest::resolve_manifest_entry;
use crate::options::ImporterOptions;

/// Resolves `~package` style import specifiers to file URLs.
///
/// One importer holds a read-only copy of its options; it keeps no other
/// state and touches the filesystem only through read-only calls, so a
/// single instance can serve concurrent resolutions.
#[derive(Debug, Clone)]
pub struct PackageImporter {
    options: ImporterOptions,
}

impl PackageImporter {
    /// Creates an importer with the given options.
    pub fn new(options: ImporterOptions) -> Self {
        Self { options }
    }

    /// The configuration this importer was constructed with.
    pub fn options(&self) -> &ImporterOptions {
        &self.options
    }

    /// Resolves one import specifier as it appears in stylesheet source.
    ///
    /// Returns `Ok(None)` without touching the filesystem when the
    /// specifier does not carry the configured prefix; the host engine
    /// should hand it to its next resolver. A specifier with an explicit
    /// sub path resolves to that path directly, bypassing the manifest;
    /// otherwise the manifest picks the entry file, with an empty relative
    /// source (the bare package directory) as the last resort.
    pub fn resolve(&self, specifier: &str) -> Result<Option<Url>, ResolveError> {
        let Some(raw) = specifier.strip_prefix(&self.options.prefix) else {
            return Ok(None);
        };

        let info = resolve_package(raw, &self.options)?;

        let relative = match &info.sub_path {
            Some(sub) => sub.clone(),
            None => resolve_manifest_entry(&info.package_name, &info.package_dir, &self.options)?
                .unwrap_or_default(),
        };

        let target: PathBuf = if relative.is_empty() {
            info.package_dir
        } else {
            info.package_dir.join(&relative)
        };

        let url = Url::from_file_path(&target)
            .map_err(|()| ResolveError::InvalidUrl { path: target })?;
        debug!("Resolved '{}' to {}", specifier, url);
        Ok(Some(url))
    }
}

impl Default for PackageImporter {
    fn default() -> Self {
        Self::new(ImporterOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_declines_foreign_specifiers() {
        let importer = PackageImporter::default();

        assert!(importer.resolve("./relative.scss").unwrap().is_none());
        assert!(importer.resolve("plain-import").unwrap().is_none());
        assert!(importer.resolve("").unwrap().is_none());
    }

    #[test]
    fn test_resolve_custom_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let importer = PackageImporter::new(
            ImporterOptions::new()
                .with_prefix("^")
                .with_strict(true)
                .with_cwd(dir.path()),
        );

        // The default prefix no longer matches.
        assert!(importer.resolve("~whatever").unwrap().is_none());
        // The configured one does, and strict mode surfaces the miss.
        assert!(importer.resolve("^whatever").is_err());
    }
}
