//! Ordered template search paths.
//!
//! [`TemplatePaths`] keeps the directories a renderer consults when it
//! resolves a template name to a file. Directories are searched in
//! registration order and the first one containing `<name><ext>` wins.
//!
//! ```rust,ignore
//! let mut paths = TemplatePaths::new("templates");
//! paths.add("themes/dark");
//! paths.add_relative("admin"); // -> templates/admin
//!
//! let file = paths.resolve("index", ".twig", false)?;
//! ```

use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// An ordered, de-duplicated list of template directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplatePaths {
    base_dir: PathBuf,
    dirs: Vec<PathBuf>,
}

impl TemplatePaths {
    /// Creates an empty search list with `base_dir` as prefix for relative additions.
    ///
    /// The base directory is not registered as a search path by this call.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            dirs: Vec::new(),
        }
    }

    /// Returns the prefix used by [`add_relative`](Self::add_relative).
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Appends `path` verbatim. Returns false if it was already registered.
    pub fn add(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        if self.dirs.iter().any(|d| d == path) {
            return false;
        }
        self.dirs.push(path.to_path_buf());
        true
    }

    /// Appends `path` joined onto the base directory.
    pub fn add_relative(&mut self, path: impl AsRef<Path>) -> bool {
        let joined = self.base_dir.join(path);
        self.add(joined)
    }

    /// Removes every registered directory. The base directory is kept.
    pub fn clear(&mut self) {
        self.dirs.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Iterates the search directories in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(|d| d.as_path())
    }

    /// Builds the file name for `name`, appending `ext` unless already present.
    pub fn file_name(name: &str, ext: &str) -> String {
        if !ext.is_empty() && name.ends_with(ext) {
            name.to_string()
        } else {
            format!("{}{}", name, ext)
        }
    }

    /// Resolves `name` to the first existing `<dir>/<name><ext>`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TemplateNotFound`] if no directory holds the
    /// file. With `debug` set, the error message lists every searched path.
    pub fn resolve(&self, name: &str, ext: &str, debug: bool) -> Result<PathBuf, RenderError> {
        let file_name = Self::file_name(name, ext);
        if !is_safe_name(&file_name) {
            return Err(RenderError::InvalidArgument(format!(
                "Invalid template name: {}",
                name
            )));
        }

        for dir in &self.dirs {
            let candidate = dir.join(&file_name);
            if candidate.is_file() {
                tracing::debug!(
                    template = %file_name,
                    path = %candidate.display(),
                    "resolved template"
                );
                return Ok(candidate);
            }
        }

        Err(RenderError::TemplateNotFound {
            name: file_name,
            searched: self.dirs.clone(),
            debug,
        })
    }

    /// Finds the first existing `<dir>/<name>`, with `name` used as given.
    ///
    /// Names that could escape a search directory yield `None`.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .filter_map(|dir| safe_join(dir, name))
            .find(|candidate| candidate.is_file())
    }

    /// Resolves `name` and reads the file content.
    pub fn load(&self, name: &str, ext: &str, debug: bool) -> Result<String, RenderError> {
        let path = self.resolve(name, ext, debug)?;
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Whether `name` stays inside whatever directory it is joined to.
///
/// Segments are `/`-separated; empty, `.` and `..` segments and backslashes
/// are refused, which also rules out absolute names.
pub fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .split('/')
            .all(|seg| !seg.is_empty() && seg != "." && seg != ".." && !seg.contains('\\'))
}

/// Joins `name` onto `dir`, or `None` if `name` is not [safe](is_safe_name).
pub fn safe_join(dir: &Path, name: &str) -> Option<PathBuf> {
    is_safe_name(name).then(|| dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_add_deduplicates() {
        let mut paths = TemplatePaths::new("base");
        assert!(paths.add("/a"));
        assert!(paths.add("/b"));
        assert!(!paths.add("/a"));
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_add_relative_prefixes_base() {
        let mut paths = TemplatePaths::new("base");
        paths.add_relative("admin");
        let dirs: Vec<_> = paths.iter().collect();
        assert_eq!(dirs, vec![Path::new("base/admin")]);
    }

    #[test]
    fn test_add_relative_deduplicates_against_verbatim() {
        let mut paths = TemplatePaths::new("base");
        paths.add("base/admin");
        assert!(!paths.add_relative("admin"));
    }

    #[test]
    fn test_file_name_appends_extension_once() {
        assert_eq!(TemplatePaths::file_name("index", ".twig"), "index.twig");
        assert_eq!(TemplatePaths::file_name("index.twig", ".twig"), "index.twig");
        assert_eq!(TemplatePaths::file_name("index", ""), "index");
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("page.tpl"), "first").unwrap();
        fs::write(second.path().join("page.tpl"), "second").unwrap();

        let mut paths = TemplatePaths::default();
        paths.add(first.path());
        paths.add(second.path());

        assert_eq!(paths.load("page", ".tpl", false).unwrap(), "first");
    }

    #[test]
    fn test_resolve_skips_directory_without_file() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(second.path().join("page.tpl"), "second").unwrap();

        let mut paths = TemplatePaths::default();
        paths.add(first.path());
        paths.add(second.path());

        let resolved = paths.resolve("page", ".tpl", false).unwrap();
        assert_eq!(resolved, second.path().join("page.tpl"));
    }

    #[test]
    fn test_resolve_ignores_directories_named_like_templates() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("page.tpl")).unwrap();

        let mut paths = TemplatePaths::default();
        paths.add(dir.path());

        assert!(paths.resolve("page", ".tpl", false).is_err());
    }

    #[test]
    fn test_resolve_not_found_reports_searched_paths() {
        let mut paths = TemplatePaths::default();
        paths.add("/nonexistent/one");
        paths.add("/nonexistent/two");

        match paths.resolve("page", ".tpl", true) {
            Err(RenderError::TemplateNotFound {
                name,
                searched,
                debug,
            }) => {
                assert_eq!(name, "page.tpl");
                assert_eq!(searched.len(), 2);
                assert!(debug);
            }
            other => panic!("expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_clear_keeps_base_dir() {
        let mut paths = TemplatePaths::new("base");
        paths.add("/a");
        paths.clear();
        assert!(paths.is_empty());
        assert_eq!(paths.base_dir(), Path::new("base"));
    }

    #[test]
    fn test_safe_name() {
        assert!(is_safe_name("page.twig"));
        assert!(is_safe_name("blog/post.twig"));
        assert!(!is_safe_name("../secret.twig"));
        assert!(!is_safe_name("blog/../../secret.twig"));
        assert!(!is_safe_name("/etc/passwd"));
        assert!(!is_safe_name("./page.twig"));
        assert!(!is_safe_name("a\\b.twig"));
        assert!(!is_safe_name(""));
    }

    #[test]
    fn test_resolve_rejects_parent_segments() {
        let root = TempDir::new().unwrap();
        let views = root.path().join("views");
        fs::create_dir(&views).unwrap();
        fs::write(root.path().join("secret.tpl"), "secret").unwrap();

        let mut paths = TemplatePaths::default();
        paths.add(&views);

        assert!(matches!(
            paths.resolve("../secret", ".tpl", false),
            Err(RenderError::InvalidArgument(_))
        ));
        assert!(paths.find("../secret.tpl").is_none());
    }

    #[test]
    fn test_find_uses_name_verbatim() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("parts")).unwrap();
        fs::write(dir.path().join("parts/header.html"), "h").unwrap();

        let mut paths = TemplatePaths::default();
        paths.add(dir.path());

        assert_eq!(
            paths.find("parts/header.html"),
            Some(dir.path().join("parts/header.html"))
        );
        assert!(paths.find("parts/missing.html").is_none());
    }
}
