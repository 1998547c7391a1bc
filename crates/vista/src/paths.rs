//! Priority-ordered layout directories.

use std::path::{Path, PathBuf};

use vista_render::paths::safe_join;

/// Layout directories ordered by priority.
///
/// Higher priorities are searched first; directories sharing a priority keep
/// their insertion order.
///
/// ```rust
/// use vista::LayoutPaths;
///
/// let mut paths = LayoutPaths::new();
/// paths.insert("layouts/base", 0).insert("layouts/theme", 10);
///
/// let order: Vec<_> = paths.iter().collect();
/// assert_eq!(order[0].to_str(), Some("layouts/theme"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutPaths {
    entries: Vec<(i32, PathBuf)>,
}

impl LayoutPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `dir` at `priority`.
    pub fn insert(&mut self, dir: impl Into<PathBuf>, priority: i32) -> &mut Self {
        let at = self
            .entries
            .iter()
            .position(|(p, _)| *p < priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, (priority, dir.into()));
        self
    }

    /// Iterates directories in search order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|(_, dir)| dir.as_path())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first existing `<dir>/<file>` in search order.
    pub fn find(&self, file: &str) -> Option<PathBuf> {
        self.iter()
            .filter_map(|dir| safe_join(dir, file))
            .find(|candidate| candidate.is_file())
    }
}

impl<P: Into<PathBuf>> FromIterator<(P, i32)> for LayoutPaths {
    fn from_iter<I: IntoIterator<Item = (P, i32)>>(iter: I) -> Self {
        let mut paths = Self::new();
        for (dir, priority) in iter {
            paths.insert(dir, priority);
        }
        paths
    }
}
