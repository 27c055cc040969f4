//! Package directory lookup across search roots.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ResolveError;
use crate::options::{DEFAULT_SEARCH_ROOT, ImporterOptions};
use crate::spec::PackageSpecifier;

/// A located (or, in non-strict mode, best-guess) package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub package_name: String,
    /// Absolute directory. Guaranteed to exist unless non-strict fallback
    /// kicked in, in which case it points under the first search root.
    pub package_dir: PathBuf,
    pub sub_path: Option<String>,
}

/// Probes one search root for `root/package_name`.
///
/// Absolute roots are joined directly; relative roots resolve against
/// `base_dir`. Stat failures other than "not found" (permission denied and
/// friends) are logged and treated as not-found.
pub fn locate_in_root(root: &Path, package_name: &str, base_dir: &Path) -> Option<PathBuf> {
    // An empty name would otherwise stat the search root itself.
    if package_name.is_empty() {
        return None;
    }
    let candidate = join_root(root, package_name, base_dir);

    match std::fs::metadata(&candidate) {
        Ok(meta) if meta.is_dir() => Some(candidate),
        Ok(_) => None,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            debug!("Failed to stat {}: {}", candidate.display(), e);
            None
        }
    }
}

fn join_root(root: &Path, package_name: &str, base_dir: &Path) -> PathBuf {
    if root.is_absolute() {
        root.join(package_name)
    } else {
        base_dir.join(root).join(package_name)
    }
}

/// Resolves a prefix-stripped specifier to a package directory.
///
/// Search roots form a priority order: the first existing directory wins.
/// When nothing matches, strict mode fails; non-strict mode falls back to a
/// synthetic path under the first search root so the host engine's own
/// lookup gets the final say.
pub fn resolve_package(raw: &str, options: &ImporterOptions) -> Result<PackageInfo, ResolveError> {
    let spec = PackageSpecifier::parse(raw);
    let base_dir = match &options.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    for root in &options.search_roots {
        if let Some(package_dir) = locate_in_root(root, &spec.package_name, &base_dir) {
            debug!(
                "Found package '{}' at {}",
                spec.package_name,
                package_dir.display()
            );
            return Ok(PackageInfo {
                package_name: spec.package_name,
                package_dir,
                sub_path: spec.sub_path,
            });
        }
    }

    if options.strict {
        return Err(ResolveError::PackageNotFound {
            package: spec.package_name,
        });
    }

    let fallback_root = options
        .search_roots
        .first()
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SEARCH_ROOT));
    let package_dir = join_root(&fallback_root, &spec.package_name, &base_dir);
    warn!(
        "Could not find package '{}', falling back to {}",
        spec.package_name,
        package_dir.display()
    );

    Ok(PackageInfo {
        package_name: spec.package_name,
        package_dir,
        sub_path: spec.sub_path,
    })
}
