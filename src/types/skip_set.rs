use std::path::{Path, PathBuf};

/// Directories excluded from descent, together with their subtrees.
///
/// Membership is exact equality of the raw path bytes against the path the
/// traversal produces. `build` and `./build` are different entries, and
/// `build` does not match `build/cache`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet(Vec<PathBuf>);

impl SkipSet {
    pub fn new(dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self(dirs.into_iter().map(Into::into).collect())
    }

    /// Check whether a traversal path is excluded.
    pub fn contains(&self, path: &Path) -> bool {
        self.0.iter().any(|dir| dir.as_os_str() == path.as_os_str())
    }

    /// Append more directories, keeping insertion order.
    pub fn extend(&mut self, dirs: impl IntoIterator<Item = impl Into<PathBuf>>) {
        self.0.extend(dirs.into_iter().map(Into::into));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for SkipSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}
