//! # stylepkg_resolver
//!
//! Resolves `~package` style import specifiers found in stylesheet sources
//! to `file://` URLs on disk.
//!
//! This crate provides:
//! - Specifier parsing (scoped package names, optional sub paths)
//! - Package directory lookup across configurable search roots
//! - Stylesheet entry selection from the package manifest
//! - The [`PackageImporter`] facade that hosts plug into their resolver chain
//!
//! ## Example
//!
//! ```rust,ignore
//! use stylepkg_resolver::{ImporterOptions, PackageImporter};
//!
//! let importer = PackageImporter::new(ImporterOptions::default());
//!
//! match importer.resolve("~@org/theme/mixins")? {
//!     Some(url) => println!("resolved to {url}"),
//!     None => println!("not a package import, try the next resolver"),
//! }
//! ```
//!
//! Every call re-reads the filesystem; there is no cache and no shared
//! mutable state, so one importer can serve concurrent resolutions.

mod error;
mod importer;
mod locate;
mod manifest;
mod options;
mod spec;

pub use error::ResolveError;
pub use importer::PackageImporter;
pub use locate::{PackageInfo, locate_in_root, resolve_package};
pub use manifest::{MANIFEST_FILE, ManifestError, resolve_manifest_entry};
pub use options::ImporterOptions;
pub use spec::PackageSpecifier;
