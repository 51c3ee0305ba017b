//! Namespace derivation from file paths.

/// Configuration mapping source file paths to dotted module namespaces.
///
/// A file under `project_dir` maps to the dotted form of its relative
/// path with the `.py` extension stripped; `package` is prepended when
/// set. Files outside the project root, or without the expected
/// extension, map to the empty namespace.
#[derive(Debug, Clone, Default)]
pub struct NamespaceConfig {
    /// Absolute project root, including a trailing separator if callers
    /// want purely path-wise prefix stripping (`/home/a/proj/`).
    pub project_dir: String,
    /// Dotted package prefix (e.g. `"pkg"`), without a trailing dot.
    pub package: String,
}

const SOURCE_EXTENSION: &str = ".py";

impl NamespaceConfig {
    pub fn new(project_dir: impl Into<String>, package: impl Into<String>) -> Self {
        NamespaceConfig {
            project_dir: project_dir.into(),
            package: package.into(),
        }
    }

    /// Derive the dotted namespace for a source file path.
    ///
    /// `"<root>/a/b.py"` maps to `"<package>.a.b"`. Paths outside
    /// `project_dir` or without the `.py` extension yield `""`.
    pub fn namespace_of(&self, path: &str) -> String {
        let relative = match path.strip_prefix(&self.project_dir) {
            Some(rest) => rest,
            None => return String::new(),
        };
        let stem = match relative.strip_suffix(SOURCE_EXTENSION) {
            Some(stem) => stem,
            None => return String::new(),
        };
        let dotted = stem
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(".");
        if self.package.is_empty() {
            dotted
        } else if dotted.is_empty() {
            self.package.clone()
        } else {
            format!("{}.{}", self.package, dotted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_path_maps_to_dotted_namespace() {
        let config = NamespaceConfig::new("/home/a/proj/", "pkg");
        assert_eq!(config.namespace_of("/home/a/proj/util/text.py"), "pkg.util.text");
    }

    #[test]
    fn top_level_file_without_package() {
        let config = NamespaceConfig::new("/home/a/proj/", "");
        assert_eq!(config.namespace_of("/home/a/proj/mod.py"), "mod");
    }

    #[test]
    fn path_outside_root_is_empty() {
        let config = NamespaceConfig::new("/home/a/proj/", "pkg");
        assert_eq!(config.namespace_of("/tmp/other.py"), "");
    }

    #[test]
    fn non_source_extension_is_empty() {
        let config = NamespaceConfig::new("/home/a/proj/", "pkg");
        assert_eq!(config.namespace_of("/home/a/proj/data.txt"), "");
    }
}
