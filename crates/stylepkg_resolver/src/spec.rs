//! Import specifier parsing.

/// A specifier split into its package name and optional sub path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpecifier {
    /// Package name, including the scope segment (`@org/name`) if present.
    pub package_name: String,
    /// Everything after the package name, `/`-joined.
    pub sub_path: Option<String>,
}

impl PackageSpecifier {
    /// Parses a prefix-stripped specifier like `@org/name/sub/dir`.
    ///
    /// Scoped package names always consume exactly two path segments; plain
    /// names consume one. An empty input yields an empty package name, which
    /// downstream lookup will fail to find.
    pub fn parse(raw: &str) -> Self {
        let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();

        if segments.len() <= 1 {
            return Self {
                package_name: segments.first().copied().unwrap_or_default().to_string(),
                sub_path: None,
            };
        }

        let name_segments = if segments[0].starts_with('@') { 2 } else { 1 };
        let package_name = segments[..name_segments].join("/");
        let rest = &segments[name_segments..];
        let sub_path = if rest.is_empty() {
            None
        } else {
            Some(rest.join("/"))
        };

        Self {
            package_name,
            sub_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("bootstrap", "bootstrap", None)]
    #[case::plain_sub("bootstrap/scss/grid", "bootstrap", Some("scss/grid"))]
    #[case::scoped("@org/theme", "@org/theme", None)]
    #[case::scoped_sub("@org/theme/sub/dir", "@org/theme", Some("sub/dir"))]
    #[case::scoped_single_sub("@org/theme/mixins", "@org/theme", Some("mixins"))]
    #[case::duplicate_separators("bootstrap//scss", "bootstrap", Some("scss"))]
    #[case::trailing_separator("bootstrap/", "bootstrap", None)]
    fn test_parse(#[case] raw: &str, #[case] name: &str, #[case] sub: Option<&str>) {
        let spec = PackageSpecifier::parse(raw);
        assert_eq!(spec.package_name, name);
        assert_eq!(spec.sub_path.as_deref(), sub);
    }

    #[test]
    fn test_parse_empty() {
        let spec = PackageSpecifier::parse("");
        assert_eq!(spec.package_name, "");
        assert_eq!(spec.sub_path, None);
    }

    #[test]
    fn test_parse_bare_scope() {
        // A lone scope segment is still just a (bogus) package name.
        let spec = PackageSpecifier::parse("@org");
        assert_eq!(spec.package_name, "@org");
        assert_eq!(spec.sub_path, None);
    }
}
