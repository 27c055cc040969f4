//! Importer configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directory searched for packages when none is configured.
pub(crate) const DEFAULT_SEARCH_ROOT: &str = "node_modules";

/// Configuration for the package importer.
///
/// Captured once at construction and read-only afterwards, so concurrent
/// resolutions on one importer never observe configuration changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterOptions {
    /// Fail resolution instead of falling back when a package directory or
    /// its manifest cannot be found.
    pub strict: bool,

    /// Base directory for resolving relative search roots.
    /// Defaults to the process working directory when unset.
    pub cwd: Option<PathBuf>,

    /// Marker that identifies package imports, e.g. the `~` in `~bootstrap`.
    pub prefix: String,

    /// Extensions accepted for manifest-declared entry files.
    pub extensions: Vec<String>,

    /// Manifest fields checked for a stylesheet entry, in priority order.
    pub package_keys: Vec<String>,

    /// Directories searched for package directories, in priority order.
    /// Relative entries resolve against `cwd`.
    pub search_roots: Vec<PathBuf>,
}

impl ImporterOptions {
    /// Creates options with the stock defaults.
    pub fn new() -> Self {
        Self {
            strict: false,
            cwd: None,
            prefix: "~".to_string(),
            extensions: vec![
                ".scss".to_string(),
                ".sass".to_string(),
                ".css".to_string(),
            ],
            package_keys: vec![
                "scss".to_string(),
                "sass".to_string(),
                "style".to_string(),
                "css".to_string(),
                "main.scss".to_string(),
                "main.sass".to_string(),
                "main.style".to_string(),
                "main.css".to_string(),
                "main".to_string(),
            ],
            search_roots: vec![PathBuf::from(DEFAULT_SEARCH_ROOT)],
        }
    }

    /// Sets strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the base directory for relative search roots.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Sets the specifier prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the search roots, replacing the default `node_modules`.
    pub fn with_search_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.search_roots = roots;
        self
    }

    /// Sets the manifest keys scanned for a stylesheet entry.
    pub fn with_package_keys(mut self, keys: Vec<String>) -> Self {
        self.package_keys = keys;
        self
    }

    /// Sets the accepted entry file extensions.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }
}

impl Default for ImporterOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ImporterOptions::default();
        assert!(!options.strict);
        assert_eq!(options.prefix, "~");
        assert_eq!(options.extensions, vec![".scss", ".sass", ".css"]);
        assert_eq!(options.package_keys.first().map(String::as_str), Some("scss"));
        assert_eq!(options.package_keys.last().map(String::as_str), Some("main"));
        assert_eq!(options.search_roots, vec![PathBuf::from("node_modules")]);
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{
            "strict": true,
            "search_roots": ["vendor", "node_modules"]
        }"#;
        let options: ImporterOptions = serde_json::from_str(json).unwrap();
        assert!(options.strict);
        assert_eq!(
            options.search_roots,
            vec![PathBuf::from("vendor"), PathBuf::from("node_modules")]
        );
        // Unspecified fields keep their defaults.
        assert_eq!(options.prefix, "~");
    }

    #[test]
    fn test_builders() {
        let options = ImporterOptions::new()
            .with_strict(true)
            .with_prefix("^")
            .with_cwd("/srv/app");
        assert!(options.strict);
        assert_eq!(options.prefix, "^");
        assert_eq!(options.cwd, Some(PathBuf::from("/srv/app")));
    }
}
