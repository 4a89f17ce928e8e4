//! Directory walking with skip-set pruning.

use super::text_detection::is_executable;
use crate::error::{Result, ScanError};
use crate::types::SkipSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Directories (and their subtrees) not to descend into.
    pub skip_dirs: SkipSet,
    /// Whether to follow symbolic links.
    pub follow_symlinks: bool,
}

impl WalkConfig {
    /// Create a new WalkConfig with the given skip set.
    pub fn new(skip_dirs: SkipSet) -> Self {
        Self {
            skip_dirs,
            ..Default::default()
        }
    }

    /// Set whether to follow symlinks.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

/// Directory walker yielding executable regular files.
pub struct DirectoryWalker {
    config: WalkConfig,
}

impl DirectoryWalker {
    /// Create a new DirectoryWalker with the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Check if a directory entry is pruned by the skip set.
    fn is_skipped(&self, root: &Path, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }
        let skipped = self
            .config
            .skip_dirs
            .contains(&traversal_path(root, entry.path()));
        if skipped {
            debug!(path = %entry.path().display(), "Skipping directory");
        }
        skipped
    }

    /// Walk `root` and yield every regular file with an execute bit.
    ///
    /// Paths are reported as the traversal produces them (see
    /// [`traversal_path`]). Traversal and metadata failures are yielded as
    /// errors; the caller decides whether to stop.
    pub fn executables<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = Result<PathBuf>> + 'a {
        WalkDir::new(root)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .filter_entry(move |e| !self.is_skipped(root, e))
            .filter_map(move |item| {
                let entry = match item {
                    Ok(entry) => entry,
                    Err(e) => return Some(Err(ScanError::walk(root, e))),
                };

                if !entry.file_type().is_file() {
                    return None;
                }

                let path = traversal_path(root, entry.path());
                let metadata = match entry.metadata() {
                    Ok(metadata) => metadata,
                    Err(e) => return Some(Err(ScanError::metadata(path, e.into()))),
                };

                if is_executable(&metadata) {
                    Some(Ok(path))
                } else {
                    trace!(path = %path.display(), "Not executable");
                    None
                }
            })
    }
}

/// The path under which a walked entry is reported and matched.
///
/// The root keeps the spelling it was given. Every other entry is the
/// cleaned join of root and relative path, so a walk rooted at `./tools`
/// reports `tools/run.sh` and a walk rooted at `.` reports `run.sh`.
pub fn traversal_path(root: &Path, path: &Path) -> PathBuf {
    if path.as_os_str() == root.as_os_str() {
        return path.to_path_buf();
    }
    clean_path(path)
}

/// Lexically clean `path`.
///
/// `.` components are dropped, `..` cancels a preceding normal component
/// (and is dropped directly below the filesystem root), separators
/// collapse. An empty result becomes `.`. Symlinks are not consulted.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::write_file;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        write_file(dir.path(), "run.sh", b"#!/bin/sh\n", 0o755);
        write_file(dir.path(), "notes.txt", b"notes\n", 0o644);
        write_file(dir.path(), "scripts/build.sh", b"#!/bin/sh\n", 0o700);
        write_file(dir.path(), "vendor/tool", b"#!/bin/sh\n", 0o755);
        write_file(dir.path(), "vendor/nested/deep", b"#!/bin/sh\n", 0o755);

        dir
    }

    fn collect(walker: &DirectoryWalker, root: &Path) -> Vec<PathBuf> {
        let mut paths: Vec<_> = walker.executables(root).map(|r| r.unwrap()).collect();
        paths.sort();
        paths
    }

    #[test]
    fn test_walk_executables_only() {
        let dir = create_test_dir();
        let walker = DirectoryWalker::new(WalkConfig::default());
        let files = collect(&walker, dir.path());

        assert_eq!(files.len(), 4);
        assert!(files.iter().all(|p| !p.ends_with("notes.txt")));
    }

    #[test]
    fn test_walk_skips_subtree() {
        let dir = create_test_dir();
        let vendor = dir.path().join("vendor");
        let walker = DirectoryWalker::new(WalkConfig::new(SkipSet::new([vendor])));
        let files = collect(&walker, dir.path());

        assert_eq!(
            files,
            vec![dir.path().join("run.sh"), dir.path().join("scripts/build.sh")]
        );
    }

    #[test]
    fn test_walk_skip_requires_exact_path() {
        let dir = create_test_dir();
        let walker = DirectoryWalker::new(WalkConfig::new(SkipSet::new(["vendor"])));
        let files = collect(&walker, dir.path());

        // "vendor" is relative while the traversal yields absolute paths.
        assert_eq!(files.len(), 4);
    }

    #[test]
    fn test_walk_skip_root() {
        let dir = create_test_dir();
        let walker = DirectoryWalker::new(WalkConfig::new(SkipSet::new([dir.path()])));
        assert!(collect(&walker, dir.path()).is_empty());
    }

    #[test]
    fn test_walk_dotted_root_reports_clean_paths() {
        let dir = create_test_dir();
        let root = dir.path().join(".").join("scripts").join("..");
        let skip = SkipSet::new([dir.path().join("vendor")]);
        let walker = DirectoryWalker::new(WalkConfig::new(skip));
        let files = collect(&walker, &root);

        assert_eq!(
            files,
            vec![dir.path().join("run.sh"), dir.path().join("scripts/build.sh")]
        );
    }

    #[test]
    fn test_walk_skip_matches_dotted_spelling_only_for_root() {
        let dir = create_test_dir();
        let root = dir.path().join(".");
        let skip = SkipSet::new([root.join("vendor")]);
        let walker = DirectoryWalker::new(WalkConfig::new(skip));

        // Children are cleaned, so the dotted spelling never matches them.
        assert_eq!(collect(&walker, &root).len(), 4);
    }

    #[test]
    fn test_walk_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let walker = DirectoryWalker::new(WalkConfig::default());
        let results: Vec<_> = walker.executables(&missing).collect();

        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(ScanError::Walk { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_ignores_symlinks_by_default() {
        let dir = create_test_dir();
        std::os::unix::fs::symlink(dir.path().join("run.sh"), dir.path().join("link.sh"))
            .unwrap();

        let walker = DirectoryWalker::new(WalkConfig::default());
        let files = collect(&walker, dir.path());
        assert!(files.iter().all(|p| !p.ends_with("link.sh")));

        let walker = DirectoryWalker::new(WalkConfig::default().with_follow_symlinks(true));
        let files = collect(&walker, dir.path());
        assert!(files.iter().any(|p| p.ends_with("link.sh")));
    }

    #[test]
    fn test_traversal_path_strips_dot_root() {
        assert_eq!(
            traversal_path(Path::new("."), Path::new("./bin/run.sh")),
            PathBuf::from("bin/run.sh")
        );
        assert_eq!(
            traversal_path(Path::new("."), Path::new(".")),
            PathBuf::from(".")
        );
        assert_eq!(
            traversal_path(Path::new("tools"), Path::new("tools/run.sh")),
            PathBuf::from("tools/run.sh")
        );
    }

    #[test]
    fn test_traversal_path_cleans_children_keeps_root() {
        assert_eq!(
            traversal_path(Path::new("./tools"), Path::new("./tools/vendor")),
            PathBuf::from("tools/vendor")
        );
        assert_eq!(
            traversal_path(Path::new("./tools/"), Path::new("./tools/run.sh")),
            PathBuf::from("tools/run.sh")
        );
        assert_eq!(
            traversal_path(Path::new("./tools"), Path::new("./tools")),
            PathBuf::from("./tools")
        );
    }

    #[test]
    fn test_clean_path() {
        let cases = [
            ("./tools/run.sh", "tools/run.sh"),
            ("tools//bin/./run.sh", "tools/bin/run.sh"),
            ("tools/../bin/run.sh", "bin/run.sh"),
            ("../up/run.sh", "../up/run.sh"),
            ("a/../../b", "../b"),
            ("/../etc/tool", "/etc/tool"),
            ("./", "."),
            ("a/..", "."),
        ];
        for (input, expected) in cases {
            assert_eq!(clean_path(Path::new(input)), PathBuf::from(expected), "{input}");
        }
    }
}
